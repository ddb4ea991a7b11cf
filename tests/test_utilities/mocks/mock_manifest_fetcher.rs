use depscout::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ManifestFetcher parsing a fixed JSON body, recording requested repositories
pub struct MockManifestFetcher {
    pub body: String,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockManifestFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested(&self) -> Arc<Mutex<Vec<String>>> {
        self.requested.clone()
    }
}

#[async_trait::async_trait]
impl ManifestFetcher for MockManifestFetcher {
    async fn fetch_manifest(&self, repository: &RepositoryIdentifier) -> Result<FetchedManifest> {
        self.requested.lock().unwrap().push(repository.to_string());
        let manifest = Manifest::from_json_str(&self.body).map_err(|e| ScoutError::Decode {
            url: format!("http://mock/{}/main/package.json", repository),
            details: e.to_string(),
        })?;
        Ok(FetchedManifest::new("main", manifest))
    }
}
