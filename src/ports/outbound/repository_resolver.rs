use crate::dependency_lookup::domain::{PackageQuery, RepositoryLinks};
use crate::shared::Result;
use async_trait::async_trait;

/// RepositoryResolver port for discovering where a package's source lives
///
/// This port abstracts the package registry (e.g., the npm website)
/// that links a published package to its source repository.
#[async_trait]
pub trait RepositoryResolver: Send + Sync {
    /// Fetches the registry page for `package` and extracts its links
    ///
    /// # Returns
    /// The repository and home-page links; either may be `None` when the
    /// page does not declare it. An unknown package yields empty links.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The registry answers with an unexpected status code
    async fn resolve(&self, package: &PackageQuery) -> Result<RepositoryLinks>;
}
