use depscout::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RepositoryResolver returning fixed links or a fixed failure
pub struct MockRepositoryResolver {
    pub links: RepositoryLinks,
    pub failure: Option<NetworkFailure>,
    pub calls: Arc<AtomicUsize>,
}

impl MockRepositoryResolver {
    pub fn new(repository_link: Option<&str>, home_page_link: Option<&str>) -> Self {
        Self {
            links: RepositoryLinks::new(
                repository_link.map(str::to_string),
                home_page_link.map(str::to_string),
            ),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure(failure: NetworkFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(None, None)
        }
    }

    pub fn call_count(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait::async_trait]
impl RepositoryResolver for MockRepositoryResolver {
    async fn resolve(&self, package: &PackageQuery) -> Result<RepositoryLinks> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.failure {
            return Err(ScoutError::Network {
                url: format!("http://mock/package/{}", package),
                failure,
                details: "mock failure".to_string(),
            }
            .into());
        }
        Ok(self.links.clone())
    }
}
