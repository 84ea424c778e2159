use crate::shared::Result;

/// OutputPresenter port for presenting a rendered report
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered report content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
