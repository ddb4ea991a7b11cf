/// LookupRequest - Input of the dependency lookup use case
///
/// The package name is optional: an absent or blank name is answered
/// with a prompt rather than rejected by argument parsing.
#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub package: Option<String>,
}

impl LookupRequest {
    pub fn new(package: Option<String>) -> Self {
        Self { package }
    }

    pub fn for_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
        }
    }
}
