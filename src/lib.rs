pub mod board;
pub mod engine;
pub mod search;
pub mod uci;

pub use board::{Color, Move, Piece, Position, Square};
pub use engine::Engine;
pub use search::{choose_move, SearchConfig, SearchError, SearchOutcome, SearchParams};
