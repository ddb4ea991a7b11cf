/// NewType wrapper for the package name supplied on the command line
///
/// The name is forwarded to the registry exactly as typed; the only check
/// is the blank-input guard in front of the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageQuery(String);

impl PackageQuery {
    /// Returns true when the raw input should trigger the "enter a name" prompt
    /// instead of a lookup.
    pub fn is_blank(raw: Option<&str>) -> bool {
        raw.map(|s| s.trim().is_empty()).unwrap_or(true)
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
