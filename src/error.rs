//! Error types for board parsing and game-session operations.
//!
//! Contract violations on the raw board (making an illegal move, retracting with an empty
//! history) panic instead; these are the recoverable failures a driver can report.

use thiserror::Error;

use crate::core::square::Square;

/// Errors surfaced to callers of the parsing and session APIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaError {
    /// Text that is not a `[a-h][1-8]` square designator.
    #[error("bad square designator: {0:?}")]
    InvalidDesignator(String),

    /// Move text that is not of the form `<square>-<square>`.
    #[error("bad move notation: {0:?}")]
    InvalidNotation(String),

    /// A board diagram row that is not eight `b`/`w`/`-` markers.
    #[error("bad board diagram row {row}: {text:?}")]
    InvalidDiagram { row: u8, text: String },

    /// Origin and destination are not on a common rank, file or diagonal.
    #[error("{from}-{to} is not along a line of action")]
    NotALine { from: Square, to: Square },

    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The game already has a winner.
    #[error("game is over")]
    GameOver,

    /// There is no move to take back.
    #[error("no moves to undo")]
    NothingToUndo,

    /// The side to move has no legal move.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}

/// Result type alias for fallible engine operations.
pub type LoaResult<T> = Result<T, LoaError>;
