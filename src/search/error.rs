//! Error types for move requests.

use std::fmt;

use crate::board::{FenError, MoveParseError};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The position is checkmate or stalemate
    NoLegalMoves,
    /// The search budget cannot be run
    InvalidConfig { reason: String },
    /// A move request is already running
    SearchInProgress,
    /// A move handed to the search is not legal in its position
    IllegalMove(MoveParseError),
    /// A worker could not rebuild the position it was sent
    InvalidPosition(FenError),
    /// A worker exited without reporting its result
    WorkerLost { worker_id: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "No legal moves in this position"),
            SearchError::InvalidConfig { reason } => {
                write!(f, "Invalid search configuration: {reason}")
            }
            SearchError::SearchInProgress => write!(f, "A search is already in progress"),
            SearchError::IllegalMove(err) => write!(f, "Illegal move in search: {err}"),
            SearchError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
            SearchError::WorkerLost { worker_id } => {
                write!(f, "Search worker {worker_id} exited without reporting")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::IllegalMove(err) => Some(err),
            SearchError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for SearchError {
    fn from(err: MoveParseError) -> Self {
        SearchError::IllegalMove(err)
    }
}

impl From<FenError> for SearchError {
    fn from(err: FenError) -> Self {
        SearchError::InvalidPosition(err)
    }
}
