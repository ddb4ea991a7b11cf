/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, raw file host, console).
pub mod formatter;
pub mod manifest_fetcher;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_resolver;

pub use formatter::ReportFormatter;
pub use manifest_fetcher::{FetchedManifest, ManifestFetcher};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::{LookupStage, ProgressReporter};
pub use repository_resolver::RepositoryResolver;
