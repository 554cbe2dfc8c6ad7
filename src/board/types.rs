//! Move record and small value types shared by the board adaptor and search.

use std::fmt;

pub use chess::{Color, Piece, Square};

/// How a move changes the board, fixed when the move is generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    Castle,
}

/// A single ply with its classification flags.
///
/// Moves are produced by [`Position::legal_moves`](super::Position::legal_moves)
/// and are only meaningful for the position that generated them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<Piece>,
    kind: MoveKind,
    gives_check: bool,
}

impl Move {
    pub(crate) fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<Piece>,
        kind: MoveKind,
        gives_check: bool,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            promotion,
            kind,
            gives_check,
        }
    }

    #[inline]
    #[must_use]
    pub fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub fn to(self) -> Square {
        self.to
    }

    /// The piece being moved (a pawn for promotions).
    #[inline]
    #[must_use]
    pub fn piece(self) -> Piece {
        self.piece
    }

    /// The piece standing on the destination square, if any.
    ///
    /// En passant captures report `None` here because the victim is not on
    /// the destination square.
    #[inline]
    #[must_use]
    pub fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// A non-capture. Leaf nodes reached by quiet moves are evaluated directly.
    #[inline]
    #[must_use]
    pub fn is_quiet(self) -> bool {
        !self.is_capture()
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        self.kind == MoveKind::Castle
    }

    #[inline]
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    #[must_use]
    pub fn gives_check(self) -> bool {
        self.gives_check
    }

    /// True when both moves describe the same ply (origin, destination, promotion).
    #[must_use]
    pub fn same_ply(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }

    pub(crate) fn to_chess_move(self) -> chess::ChessMove {
        chess::ChessMove::new(self.from, self.to, self.promotion)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", piece_char(promo))?;
        }
        Ok(())
    }
}

pub type MoveList = Vec<Move>;

/// Whether the side to move can still play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Pieces that carry material, in index order.
pub const MATERIAL_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

#[inline]
pub(crate) fn piece_index(piece: Piece) -> usize {
    match piece {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    }
}

/// Lowercase piece letter (`p`, `n`, `b`, `r`, `q`, `k`).
#[must_use]
pub fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

/// Parse a piece from its letter, either case.
#[must_use]
pub fn piece_from_char(c: char) -> Option<Piece> {
    match c.to_ascii_lowercase() {
        'p' => Some(Piece::Pawn),
        'n' => Some(Piece::Knight),
        'b' => Some(Piece::Bishop),
        'r' => Some(Piece::Rook),
        'q' => Some(Piece::Queen),
        'k' => Some(Piece::King),
        _ => None,
    }
}

/// Zero-based file (a = 0) of a square.
#[inline]
#[must_use]
pub fn file_of(sq: Square) -> usize {
    sq.get_file().to_index()
}

/// Zero-based rank (rank 1 = 0) of a square.
#[inline]
#[must_use]
pub fn rank_of(sq: Square) -> usize {
    sq.get_rank().to_index()
}

/// Build a square from zero-based rank and file. Returns `None` off the board.
#[must_use]
pub fn square_at(rank: usize, file: usize) -> Option<Square> {
    if rank > 7 || file > 7 {
        return None;
    }
    Some(Square::make_square(
        chess::Rank::from_index(rank),
        chess::File::from_index(file),
    ))
}

/// Parse algebraic square notation such as `e4`.
#[must_use]
pub fn parse_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    square_at(rank as usize - '1' as usize, file as usize - 'a' as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_square_round_trips_display() {
        for text in ["a1", "e4", "h8", "d5"] {
            let sq = parse_square(text).unwrap();
            assert_eq!(sq.to_string(), text);
        }
    }

    #[test]
    fn parse_square_rejects_garbage() {
        assert!(parse_square("").is_none());
        assert!(parse_square("i1").is_none());
        assert!(parse_square("a9").is_none());
        assert!(parse_square("e44").is_none());
    }

    #[test]
    fn square_at_matches_rank_and_file() {
        let sq = square_at(3, 4).unwrap();
        assert_eq!(rank_of(sq), 3);
        assert_eq!(file_of(sq), 4);
        assert!(square_at(8, 0).is_none());
    }

    #[test]
    fn piece_chars_round_trip() {
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            assert_eq!(piece_from_char(piece_char(piece)), Some(piece));
            assert_eq!(
                piece_from_char(piece_char(piece).to_ascii_uppercase()),
                Some(piece)
            );
        }
        assert_eq!(piece_from_char('x'), None);
    }

    #[test]
    fn move_display_is_long_algebraic() {
        let e7 = parse_square("e7").unwrap();
        let e8 = parse_square("e8").unwrap();
        let mv = Move::new(e7, e8, Piece::Pawn, None, Some(Piece::Queen), MoveKind::Quiet, false);
        assert_eq!(mv.to_string(), "e7e8q");
        assert!(mv.is_promotion());
        assert!(mv.is_quiet());
    }
}
