/// Mock implementations for testing
mod mock_manifest_fetcher;
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_repository_resolver;

pub use mock_manifest_fetcher::MockManifestFetcher;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_resolver::MockRepositoryResolver;
