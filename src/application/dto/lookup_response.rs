use crate::dependency_lookup::domain::{Manifest, RepositoryIdentifier, RepositoryLinks};

/// Everything gathered for a package whose manifest was fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub package: String,
    pub links: RepositoryLinks,
    pub repository: RepositoryIdentifier,
    /// Branch the manifest was read from
    pub branch: String,
    pub manifest: Manifest,
}

impl DependencyReport {
    pub fn new(
        package: String,
        links: RepositoryLinks,
        repository: RepositoryIdentifier,
        branch: String,
        manifest: Manifest,
    ) -> Self {
        Self {
            package,
            links,
            repository,
            branch,
            manifest,
        }
    }
}

/// LookupOutcome - How a lookup that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// No package name was given; the user was asked for one
    Prompted,
    /// The registry page declares no repository
    NotFound { package: String },
    /// The repository is hosted somewhere other than the configured host
    UnsupportedHost {
        package: String,
        repository_link: String,
    },
    /// The dependency list was presented
    Listed(DependencyReport),
}
