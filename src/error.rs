//! Error types for the engine.

use crate::position::Outcome;
use thiserror::Error;

/// Errors that can occur before a search starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed position description from the caller
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// The position is already decided, so there is no move to choose
    #[error("Game is already over: {0}")]
    GameOver(Outcome),

    /// Search depth outside the supported range
    #[error("Invalid search depth {0} (must be 0-{max})", max = crate::types::MAX_DEPTH)]
    InvalidDepth(i32),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
