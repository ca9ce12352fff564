use thiserror::Error;

/// Errors reported by [`crate::TerminalRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The requested cell lies outside the printable region. Nothing was sent.
    #[error("cell ({col}, {row}) is outside the printable region")]
    OutOfBounds { col: i32, row: i32 },
}
