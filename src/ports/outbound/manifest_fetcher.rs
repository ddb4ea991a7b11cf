use crate::dependency_lookup::domain::{Manifest, RepositoryIdentifier};
use crate::shared::Result;
use async_trait::async_trait;

/// A manifest together with the branch it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedManifest {
    pub branch: String,
    pub manifest: Manifest,
}

impl FetchedManifest {
    pub fn new(branch: impl Into<String>, manifest: Manifest) -> Self {
        Self {
            branch: branch.into(),
            manifest,
        }
    }
}

/// ManifestFetcher port for reading `package.json` from a repository
///
/// This port abstracts the raw file host of the source repository.
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    /// Fetches and decodes the root manifest of `repository`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - No candidate branch has a `package.json`
    /// - The body is not a JSON manifest
    async fn fetch_manifest(&self, repository: &RepositoryIdentifier) -> Result<FetchedManifest>;
}
