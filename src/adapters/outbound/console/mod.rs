/// Console adapters: progress on stderr, report on stdout
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::{StderrProgressReporter, NETWORK_TROUBLE_MESSAGE};
pub use stdout_presenter::StdoutPresenter;
