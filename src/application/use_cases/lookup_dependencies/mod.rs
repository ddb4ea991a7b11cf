use crate::application::dto::{DependencyReport, LookupOutcome, LookupRequest};
use crate::config::ScoutConfig;
use crate::dependency_lookup::domain::{PackageQuery, RepositoryIdentifier};
use crate::dependency_lookup::policies::{FailureClass, RetryPolicy};
use crate::ports::outbound::{
    LookupStage, ManifestFetcher, OutputPresenter, ProgressReporter, ReportFormatter,
    RepositoryResolver,
};
use crate::shared::error::ScoutError;
use crate::shared::Result;
use std::future::Future;

pub const PROMPT_MESSAGE: &str = "Please enter the name of an open source project";

pub const FIREWALL_HINT: &str =
    "Perhaps you are in mainland china, please break through the firewall to access";

/// Settings the use case needs from the effective configuration
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Prefix stripped from repository links to obtain `owner/name`
    pub repository_host: String,
    pub retry_policy: RetryPolicy,
}

impl LookupSettings {
    pub fn new(repository_host: impl Into<String>, retry_policy: RetryPolicy) -> Self {
        Self {
            repository_host: repository_host.into(),
            retry_policy,
        }
    }

    pub fn from_config(config: &ScoutConfig) -> Self {
        Self::new(config.repository_host.clone(), config.retry_policy())
    }
}

/// LookupDependenciesUseCase - Core use case: package name to dependency list
///
/// Runs the pipeline resolve -> fetch manifest -> present. The two network
/// steps are wrapped in a bounded retry loop driven by `RetryPolicy`; every
/// attempt is bracketed by lifecycle events on the progress reporter.
///
/// # Type Parameters
/// * `RR` - RepositoryResolver implementation
/// * `MF` - ManifestFetcher implementation
/// * `RF` - ReportFormatter implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct LookupDependenciesUseCase<RR, MF, RF, OP, PR> {
    resolver: RR,
    fetcher: MF,
    formatter: RF,
    presenter: OP,
    progress_reporter: PR,
    settings: LookupSettings,
}

impl<RR, MF, RF, OP, PR> LookupDependenciesUseCase<RR, MF, RF, OP, PR>
where
    RR: RepositoryResolver,
    MF: ManifestFetcher,
    RF: ReportFormatter,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new LookupDependenciesUseCase with injected dependencies
    pub fn new(
        resolver: RR,
        fetcher: MF,
        formatter: RF,
        presenter: OP,
        progress_reporter: PR,
        settings: LookupSettings,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            formatter,
            presenter,
            progress_reporter,
            settings,
        }
    }

    /// Executes the lookup
    ///
    /// # Returns
    /// The outcome when the lookup ended normally, including the
    /// informational endings (prompt, no repository, foreign host)
    ///
    /// # Errors
    /// Returns an error when a step fails terminally: blocked network,
    /// exhausted retries or a non-retryable failure
    pub async fn execute(&self, request: LookupRequest) -> Result<LookupOutcome> {
        // Step 1: Entry guard
        if PackageQuery::is_blank(request.package.as_deref()) {
            self.progress_reporter.report(PROMPT_MESSAGE);
            return Ok(LookupOutcome::Prompted);
        }
        let query = PackageQuery::new(request.package.unwrap_or_default());

        // Step 2: Resolve the repository link
        let links = self
            .run_with_retry(LookupStage::ResolvingRepository, query.as_str(), || {
                self.resolver.resolve(&query)
            })
            .await?;

        let Some(repository_link) = links.repository_link.clone() else {
            self.progress_reporter
                .report(&format!("No repository found for {}", query));
            return Ok(LookupOutcome::NotFound {
                package: query.to_string(),
            });
        };
        self.progress_reporter
            .report(&format!("Resolved {} to {}", query, repository_link));

        let Some(repository) =
            RepositoryIdentifier::from_link(&repository_link, &self.settings.repository_host)
        else {
            self.progress_reporter.report(&format!(
                "{} is not hosted under {}: {}",
                query, self.settings.repository_host, repository_link
            ));
            return Ok(LookupOutcome::UnsupportedHost {
                package: query.to_string(),
                repository_link,
            });
        };

        // Step 3: Fetch the manifest
        let fetched = self
            .run_with_retry(LookupStage::FetchingManifest, repository.as_str(), || {
                self.fetcher.fetch_manifest(&repository)
            })
            .await?;

        // Step 4: Present
        let report = DependencyReport::new(
            query.to_string(),
            links,
            repository,
            fetched.branch,
            fetched.manifest,
        );
        self.presenter.present(&self.formatter.format(&report))?;

        if report.manifest.is_empty() {
            self.progress_reporter
                .report(&format!("{} declares no dependencies", report.repository));
        }

        Ok(LookupOutcome::Listed(report))
    }

    /// Runs `step` until it succeeds, fails terminally, or the retry bound is hit.
    async fn run_with_retry<T, F, Fut>(
        &self,
        stage: LookupStage,
        subject: &str,
        mut step: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let policy = &self.settings.retry_policy;
        let mut attempt = 1;

        loop {
            self.progress_reporter
                .attempt_started(stage, subject, attempt);

            let err = match step().await {
                Ok(value) => {
                    self.progress_reporter
                        .attempt_succeeded(stage, &format!("Loaded {}", subject));
                    return Ok(value);
                }
                Err(err) => err,
            };

            let class = RetryPolicy::classify(&err);
            let will_retry = class == FailureClass::Retry && policy.allows_another(attempt);
            self.progress_reporter
                .attempt_failed(stage, &format!("Load fail: {}", err), will_retry);

            if !will_retry {
                return Err(self.terminal_error(class, attempt, err));
            }

            let delay = policy.delay_for(attempt);
            tracing::warn!(?stage, attempt, ?delay, error = %err, "retrying after failure");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn terminal_error(&self, class: FailureClass, attempts: u32, err: anyhow::Error) -> anyhow::Error {
        match class {
            FailureClass::Blocked => {
                self.progress_reporter.report_error(FIREWALL_HINT);
                err
            }
            FailureClass::Retry => ScoutError::RetriesExhausted {
                attempts,
                last_error: err,
            }
            .into(),
            FailureClass::Fatal => err,
        }
    }
}
