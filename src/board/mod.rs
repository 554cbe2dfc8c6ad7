//! Board representation and rules access.
//!
//! Move generation, legality and FEN handling come from the `chess` crate;
//! this module wraps it in a [`Position`] with paired apply/undo and a
//! [`Move`] record whose capture, castle, promotion and check flags are
//! computed once at generation time.
//!
//! # Example
//! ```
//! use chess_minimax::board::Position;
//!
//! let pos = Position::new();
//! let moves = pos.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod position;
mod san;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError};
pub use position::{Position, START_FEN};
pub use types::{
    file_of, parse_square, piece_char, piece_from_char, rank_of, square_at, Color, GameStatus,
    Move, MoveKind, MoveList, Piece, Square, MATERIAL_PIECES,
};

pub(crate) use types::piece_index;
