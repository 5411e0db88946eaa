//! Editor lifecycle errors.

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum EditorError {
    /// The embedded editor library failed to construct an instance.
    #[error("failed to mount editor surface: {0}")]
    Mount(String),
}
