use thiserror::Error;

use crate::board::Outcome;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal moves in the root position")]
    NoLegalMoves,
    #[error("game is already over ({0:?})")]
    GameOver(Outcome),
    /// The searcher produced a move outside the root's legal move set.
    #[error("search selected {mv}, which is not legal in the root position")]
    InvariantViolation { mv: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}
