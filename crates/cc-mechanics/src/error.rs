//! Error types for the mechanics engine.

/// Errors that can occur while the engine waits on its collaborators.
///
/// Game-level mistakes (a bad menu number, a full inventory) are not
/// errors; they are reported through the presenter and play continues.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The input provider has no more choices to give.
    #[error("input closed")]
    InputClosed,

    /// Reading from the input provider failed.
    #[error("input error: {0}")]
    Input(String),
}

impl From<std::io::Error> for MechError {
    fn from(err: std::io::Error) -> Self {
        Self::Input(err.to_string())
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
