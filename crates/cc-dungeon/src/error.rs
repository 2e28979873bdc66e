//! Error types for dungeon progression.

use thiserror::Error;

/// Result type for dungeon operations.
pub type DungeonResult<T> = Result<T, DungeonError>;

/// Errors that stop a run early.
///
/// Wrong menu numbers are not errors; they are narrated and the same
/// menu comes back.
#[derive(Debug, Error)]
pub enum DungeonError {
    /// The mechanics engine failed, usually because input closed.
    #[error(transparent)]
    Mechanics(#[from] cc_mechanics::MechError),

    /// The journal could not be serialized.
    #[error("journal export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// An export format name was not recognised.
    #[error("unknown journal format '{0}', use: markdown, text, json")]
    UnknownFormat(String),
}

impl DungeonError {
    /// Whether the run stopped because the player's input ran out.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::Mechanics(cc_mechanics::MechError::InputClosed))
    }
}
