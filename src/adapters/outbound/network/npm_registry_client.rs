use super::http_transport::HttpTransport;
use crate::config::ScoutConfig;
use crate::dependency_lookup::domain::{PackageQuery, RepositoryLinks};
use crate::ports::outbound::RepositoryResolver;
use crate::shared::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

const REPOSITORY_ANCHOR: &str = "#repository-link";
const HOME_PAGE_ANCHOR: &str = "#homePage-link";

/// NpmRegistryClient adapter for resolving repository links from npm package pages
///
/// This adapter implements the RepositoryResolver port by scraping the
/// rendered package page: the sidebar marks the repository and home-page
/// links with element ids, and the target URL sits on the enclosing anchor.
pub struct NpmRegistryClient {
    transport: HttpTransport,
    config: ScoutConfig,
}

impl NpmRegistryClient {
    pub fn new(transport: HttpTransport, config: ScoutConfig) -> Self {
        Self { transport, config }
    }

    /// Extracts the repository and home-page links from a package page
    pub fn extract_links(document: &str) -> RepositoryLinks {
        let html = Html::parse_document(document);
        RepositoryLinks::new(
            Self::parent_href(&html, REPOSITORY_ANCHOR),
            Self::parent_href(&html, HOME_PAGE_ANCHOR),
        )
    }

    fn parent_href(html: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let anchor = html.select(&selector).next()?;
        let parent = anchor.parent().and_then(ElementRef::wrap)?;
        parent.value().attr("href").map(str::to_string)
    }
}

#[async_trait]
impl RepositoryResolver for NpmRegistryClient {
    async fn resolve(&self, package: &PackageQuery) -> Result<RepositoryLinks> {
        let url = self.config.package_page_url(package.as_str());
        let response = self.transport.get(&url, "text/html").await?;

        // Unknown package: a valid page-less answer, not a failure
        if response.is_not_found() {
            tracing::debug!(%url, "registry has no page for package");
            return Ok(RepositoryLinks::default());
        }
        response.ensure_success()?;

        Ok(Self::extract_links(&response.body))
    }
}
