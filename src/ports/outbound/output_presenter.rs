use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, a buffer in tests)
/// where the rendered dependency report is written.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
