//! Position adaptor over the `chess` rules engine.
//!
//! The search walks a single owned `Position` with paired [`Position::apply_unchecked`]
//! and [`Position::undo`] calls. Each apply pushes the previous board onto an
//! undo stack (copy-make), so undo is a pop and never recomputes anything.

use std::fmt;
use std::str::FromStr;

use chess::{BoardStatus, MoveGen, EMPTY};

use super::error::{FenError, MoveParseError};
use super::types::{
    file_of, parse_square, piece_from_char, Color, GameStatus, Move, MoveKind, MoveList, Piece,
    Square,
};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy)]
struct Snapshot {
    board: chess::Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A game position plus the history needed to undo applied moves.
#[derive(Clone)]
pub struct Position {
    board: chess::Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Snapshot>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: chess::Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Build a position from a FEN record.
    ///
    /// The move counters are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts[1] != "w" && parts[1] != "b" {
            return Err(FenError::InvalidSideToMove {
                found: parts[1].to_string(),
            });
        }

        let halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(1);

        let normalized = format!(
            "{} {} {} {} {} {}",
            parts[0], parts[1], parts[2], parts[3], halfmove_clock, fullmove_number
        );
        let board = chess::Board::from_str(&normalized).map_err(|_| FenError::InvalidBoard {
            fen: fen.trim().to_string(),
        })?;

        Ok(Position {
            board,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    /// Serialize to FEN: placement, side to move, castling, en passant and counters.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let rendered = self.board.to_string();
        let fields: Vec<&str> = rendered.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// All legal moves, in the rules engine's generation order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.board)
            .map(|cm| self.describe(cm))
            .collect()
    }

    /// Attach classification flags to a raw engine move.
    fn describe(&self, cm: chess::ChessMove) -> Move {
        let from = cm.get_source();
        let to = cm.get_dest();
        let piece = self.board.piece_on(from).unwrap_or(Piece::Pawn);
        let captured = self.board.piece_on(to);

        let kind = if captured.is_some() {
            MoveKind::Capture
        } else if piece == Piece::Pawn && file_of(from) != file_of(to) {
            MoveKind::EnPassant
        } else if piece == Piece::King && file_of(from).abs_diff(file_of(to)) == 2 {
            MoveKind::Castle
        } else {
            MoveKind::Quiet
        };
        let gives_check = *self.board.make_move_new(cm).checkers() != EMPTY;

        Move::new(from, to, piece, captured, cm.get_promotion(), kind, gives_check)
    }

    /// Apply a move after confirming it is legal here.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveParseError> {
        let legal = self.legal_moves().into_iter().find(|m| m.same_ply(mv));
        match legal {
            Some(m) => {
                self.apply_unchecked(m);
                Ok(())
            }
            None => Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            }),
        }
    }

    /// Apply a move generated from this exact position.
    ///
    /// Passing any other move leaves the position in an unspecified state.
    #[inline]
    pub fn apply_unchecked(&mut self, mv: Move) {
        let next = self.board.make_move_new(mv.to_chess_move());
        let previous = std::mem::replace(&mut self.board, next);
        self.history.push(Snapshot {
            board: previous,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        if mv.piece() == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.board.side_to_move() == Color::White {
            self.fullmove_number += 1;
        }
    }

    /// Take back the most recent move. Returns `false` if nothing was applied.
    #[inline]
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.halfmove_clock = snapshot.halfmove_clock;
                self.fullmove_number = snapshot.fullmove_number;
                true
            }
            None => false,
        }
    }

    /// Number of moves that can currently be undone.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Ongoing => GameStatus::Ongoing,
            BoardStatus::Checkmate => GameStatus::Checkmate,
            BoardStatus::Stalemate => GameStatus::Stalemate,
        }
    }

    /// Every piece on the board, kings included.
    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.board.combined().popcnt()
    }

    #[inline]
    #[must_use]
    pub fn non_king_count(&self) -> u32 {
        (*self.board.combined() & !*self.board.pieces(Piece::King)).popcnt()
    }

    #[inline]
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> u32 {
        (*self.board.pieces(piece) & *self.board.color_combined(color)).popcnt()
    }

    /// Resolve long algebraic notation (`e2e4`, `e7e8q`) to a legal move.
    pub fn parse_uci(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let from = parse_square(&text[0..2]).ok_or_else(|| MoveParseError::InvalidSquare {
            notation: text.to_string(),
        })?;
        let to = parse_square(&text[2..4]).ok_or_else(|| MoveParseError::InvalidSquare {
            notation: text.to_string(),
        })?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match piece_from_char(c) {
                Some(p @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions compare by FEN; undo history is ignored.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.to_fen() == other.to_fen()
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("ply_count", &self.history.len())
            .finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
