/// Pipeline step that performs network I/O and may be retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    ResolvingRepository,
    FetchingManifest,
}

impl LookupStage {
    pub fn describe(&self, subject: &str) -> String {
        match self {
            LookupStage::ResolvingRepository => format!("Loading {}...", subject),
            LookupStage::FetchingManifest => format!("Loading {} dependencies...", subject),
        }
    }
}

/// ProgressReporter port for user feedback during a lookup
///
/// The use case emits lifecycle events; every `attempt_started` is followed
/// by exactly one `attempt_succeeded` or `attempt_failed`. Adapters decide
/// how to render them (spinner on stderr, recorded list in tests).
pub trait ProgressReporter {
    /// An attempt at `stage` begins. `attempt` is 1-based; values above 1 are retries.
    fn attempt_started(&self, stage: LookupStage, subject: &str, attempt: u32);

    /// The running attempt completed
    fn attempt_succeeded(&self, stage: LookupStage, message: &str);

    /// The running attempt failed; `will_retry` tells whether another attempt follows
    fn attempt_failed(&self, stage: LookupStage, message: &str, will_retry: bool);

    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}
