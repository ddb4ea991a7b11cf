use super::http_transport::HttpTransport;
use crate::config::ScoutConfig;
use crate::dependency_lookup::domain::{Manifest, RepositoryIdentifier};
use crate::ports::outbound::{FetchedManifest, ManifestFetcher};
use crate::shared::error::ScoutError;
use crate::shared::Result;
use async_trait::async_trait;

/// RawManifestClient adapter for reading `package.json` from a raw file host
///
/// The default branch is not known up front, so the configured branch
/// candidates are tried in order; a 404 moves on to the next one.
pub struct RawManifestClient {
    transport: HttpTransport,
    config: ScoutConfig,
}

impl RawManifestClient {
    pub fn new(transport: HttpTransport, config: ScoutConfig) -> Self {
        Self { transport, config }
    }
}

#[async_trait]
impl ManifestFetcher for RawManifestClient {
    async fn fetch_manifest(&self, repository: &RepositoryIdentifier) -> Result<FetchedManifest> {
        for branch in &self.config.branches {
            let url = self.config.manifest_url(repository, branch);
            let response = self.transport.get(&url, "application/json").await?;

            if response.is_not_found() {
                tracing::debug!(%repository, %branch, "no package.json on branch");
                continue;
            }
            response.ensure_success()?;

            let manifest =
                Manifest::from_json_str(&response.body).map_err(|e| ScoutError::Decode {
                    url: url.clone(),
                    details: e.to_string(),
                })?;

            return Ok(FetchedManifest::new(branch.as_str(), manifest));
        }

        Err(ScoutError::ManifestNotFound {
            repository: repository.to_string(),
            branches: self.config.branches.clone(),
        }
        .into())
    }
}
