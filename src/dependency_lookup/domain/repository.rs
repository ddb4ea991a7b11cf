/// Hyperlink targets scraped from a registry package page.
///
/// Either link may be absent: a package page can exist without declaring
/// a repository or a home page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryLinks {
    pub repository_link: Option<String>,
    pub home_page_link: Option<String>,
}

impl RepositoryLinks {
    pub fn new(repository_link: Option<String>, home_page_link: Option<String>) -> Self {
        Self {
            repository_link,
            home_page_link,
        }
    }
}

/// `owner/name` pair identifying a repository on the source host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier(String);

impl RepositoryIdentifier {
    /// Strips `host_prefix` from `link`. Nothing else is normalised.
    ///
    /// Returns `None` when the link lives on another host or nothing
    /// remains after the prefix.
    pub fn from_link(link: &str, host_prefix: &str) -> Option<Self> {
        link.strip_prefix(host_prefix)
            .filter(|rest| !rest.is_empty())
            .map(|rest| Self(rest.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
