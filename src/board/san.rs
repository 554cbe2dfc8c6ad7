//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the human-readable notation used in scoresheets and logs.
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_minimax::board::Position;
//!
//! let pos = Position::new();
//! let mv = pos.parse_san("Nf3").unwrap();
//! assert_eq!(pos.san(mv), "Nf3");
//! ```

use super::error::MoveParseError;
use super::types::{file_of, piece_char, rank_of, Move, Piece};
use super::{GameStatus, Position};

impl Position {
    /// Format a legal move of this position in SAN.
    #[must_use]
    pub fn san(&self, mv: Move) -> String {
        let mut san = String::new();

        if mv.is_castle() {
            if file_of(mv.to()) > file_of(mv.from()) {
                san.push_str("O-O");
            } else {
                san.push_str("O-O-O");
            }
        } else {
            if mv.piece() != Piece::Pawn {
                san.push(piece_char(mv.piece()).to_ascii_uppercase());
                let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                if needs_file {
                    san.push((b'a' + file_of(mv.from()) as u8) as char);
                }
                if needs_rank {
                    san.push((b'1' + rank_of(mv.from()) as u8) as char);
                }
            } else if mv.is_capture() {
                san.push((b'a' + file_of(mv.from()) as u8) as char);
            }

            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());

            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(piece_char(promo).to_ascii_uppercase());
            }
        }

        if mv.gives_check() {
            let mut after = self.clone();
            after.apply_unchecked(mv);
            if after.status() == GameStatus::Checkmate {
                san.push('#');
            } else {
                san.push('+');
            }
        }

        san
    }

    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: Move) -> (bool, bool) {
        let rivals: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|m| m.to() == mv.to() && m.piece() == mv.piece() && m.from() != mv.from())
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|m| file_of(m.from()) == file_of(mv.from()));
        let same_rank = rivals.iter().any(|m| rank_of(m.from()) == rank_of(mv.from()));

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Resolve a SAN string to a legal move.
    ///
    /// Check markers and the capture `x` are optional, and `0-0` is accepted
    /// for castling.
    pub fn parse_san(&self, san: &str) -> Result<Move, MoveParseError> {
        let wanted = normalize_san(san);
        if wanted.is_empty() {
            return Err(MoveParseError::NoMatchingMove {
                san: san.to_string(),
            });
        }

        self.legal_moves()
            .into_iter()
            .find(|&m| normalize_san(&self.san(m)) == wanted)
            .ok_or_else(|| MoveParseError::NoMatchingMove {
                san: san.trim().to_string(),
            })
    }
}

fn normalize_san(san: &str) -> String {
    san.trim()
        .replace('0', "O")
        .chars()
        .filter(|c| !matches!(c, '+' | '#' | 'x' | '!' | '?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_of(fen: &str, uci: &str) -> String {
        let pos = Position::from_fen(fen).unwrap();
        let mv = pos.parse_uci(uci).unwrap();
        pos.san(mv)
    }

    #[test]
    fn test_pawn_and_piece_moves() {
        let fen = crate::board::START_FEN;
        assert_eq!(san_of(fen, "e2e4"), "e4");
        assert_eq!(san_of(fen, "g1f3"), "Nf3");
    }

    #[test]
    fn test_castling() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, "e1g1"), "O-O");
        assert_eq!(san_of(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn test_capture_and_promotion() {
        assert_eq!(san_of("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5"), "exd5");
        assert_eq!(san_of("8/P7/8/8/8/8/8/k6K w - - 0 1", "a7a8q"), "a8=Q+");
    }

    #[test]
    fn test_file_disambiguation() {
        let fen = "4k3/8/8/8/8/8/4K3/R6R w - - 0 1";
        assert_eq!(san_of(fen, "a1d1"), "Rad1");
        assert_eq!(san_of(fen, "h1d1"), "Rhd1");
    }

    #[test]
    fn test_rank_disambiguation() {
        let fen = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san_of(fen, "a1a3"), "R1a3");
    }

    #[test]
    fn test_checkmate_marker() {
        let fen = "k7/4Q3/5R2/p7/4P3/2N5/PPPPBPPP/R1B1K1N1 w Q - 0 1";
        assert_eq!(san_of(fen, "f6f8"), "Rf8#");
    }

    #[test]
    fn test_parse_san_is_lenient() {
        let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let strict = pos.parse_san("exd5").unwrap();
        let loose = pos.parse_san("ed5").unwrap();
        assert_eq!(strict, loose);
        assert_eq!(strict.to_string(), "e4d5");
    }

    #[test]
    fn test_parse_san_castle_with_zeros() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(pos.parse_san("0-0").unwrap().to_string(), "e1g1");
        assert_eq!(pos.parse_san("O-O-O").unwrap().to_string(), "e1c1");
    }

    #[test]
    fn test_parse_san_rejects_unknown() {
        let pos = Position::new();
        assert!(matches!(
            pos.parse_san("Qh5"),
            Err(MoveParseError::NoMatchingMove { .. })
        ));
        assert!(pos.parse_san("").is_err());
    }
}
