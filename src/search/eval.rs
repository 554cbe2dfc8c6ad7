//! Static evaluation and per-move tactical bonus.
//!
//! [`evaluate`] is material only. Positional knowledge enters through
//! [`move_bonus`], which scores the root move once and is carried unchanged
//! down the tree.

use crate::board::{file_of, piece_index, rank_of, Color, Move, Position, MATERIAL_PIECES};

use super::constants::{CAPTURE_BONUS, CASTLE_BONUS, CHECK_PENALTY, MATERIAL, PROMOTION_BONUS};
use super::{Score, SearchParams};

type Table = [[Score; 8]; 8];

// Tables are laid out from the owner's side: row 0 is the owner's back rank,
// column 0 is the a-file.

#[rustfmt::skip]
const NORMAL_PAWN: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.3, 0.3, 0.2, 0.3, 0.3, 0.1, 0.3, 0.3],
    [0.2, 0.1, 0.4, 0.5, 0.5, 0.1, 0.1, 0.1],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

#[rustfmt::skip]
const NORMAL_KNIGHT: Table = [
    [ 0.0, -0.1, 0.0, 0.0, 0.0, 0.0, -0.1,  0.0],
    [ 0.0,  0.0, 0.0, 0.2, 0.2, 0.0,  0.0,  0.0],
    [-0.1,  0.0, 0.4, 0.0, 0.0, 0.4,  0.0, -0.1],
    [ 0.0,  0.0, 0.0, 0.3, 0.3, 0.0,  0.0,  0.0],
    [ 0.0,  0.0, 0.0, 0.0, 0.0, 0.0,  0.0,  0.0],
    [ 0.0,  0.0, 0.0, 0.0, 0.0, 0.0,  0.0,  0.0],
    [ 0.0,  0.0, 0.0, 0.0, 0.0, 0.0,  0.0,  0.0],
    [ 0.0,  0.0, 0.0, 0.0, 0.0, 0.0,  0.0,  0.0],
];

#[rustfmt::skip]
const NORMAL_BISHOP: Table = [
    [0.0, 0.0, -0.1, 0.0, 0.0, -0.1, 0.0, 0.0],
    [0.0, 0.3,  0.0, 0.1, 0.1,  0.0, 0.3, 0.0],
    [0.0, 0.0,  0.0, 0.2, 0.2,  0.0, 0.0, 0.0],
    [0.0, 0.0,  0.3, 0.0, 0.0,  0.3, 0.0, 0.0],
    [0.0, 0.3,  0.0, 0.0, 0.0,  0.0, 0.3, 0.0],
    [0.0, 0.0,  0.0, 0.0, 0.0,  0.0, 0.0, 0.0],
    [0.0, 0.0,  0.0, 0.0, 0.0,  0.0, 0.0, 0.0],
    [0.0, 0.0,  0.0, 0.0, 0.0,  0.0, 0.0, 0.0],
];

#[rustfmt::skip]
const NORMAL_ROOK: Table = [
    [0.0, 0.0, 0.2, 0.3, 0.3, 0.2, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

const ZERO: Table = [[0.0; 8]; 8];

#[rustfmt::skip]
const ENDGAME_PAWN: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
    [0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2],
    [0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3],
    [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
    [0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

#[rustfmt::skip]
const ENDGAME_KNIGHT: Table = [
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
    [-0.1,  0.0,  0.0,  0.1,  0.1,  0.0,  0.0, -0.1],
    [-0.1,  0.0,  0.2,  0.2,  0.2,  0.2,  0.0, -0.1],
    [-0.1,  0.1,  0.2,  0.3,  0.3,  0.2,  0.1, -0.1],
    [-0.1,  0.1,  0.2,  0.3,  0.3,  0.2,  0.1, -0.1],
    [-0.1,  0.0,  0.2,  0.2,  0.2,  0.2,  0.0, -0.1],
    [-0.1,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.1],
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
];

#[rustfmt::skip]
const ENDGAME_BISHOP: Table = [
    [-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
    [ 0.0, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1,  0.0],
    [ 0.0, 0.1, 0.2, 0.2, 0.2, 0.2, 0.1,  0.0],
    [ 0.0, 0.1, 0.2, 0.3, 0.3, 0.2, 0.1,  0.0],
    [ 0.0, 0.1, 0.2, 0.3, 0.3, 0.2, 0.1,  0.0],
    [ 0.0, 0.1, 0.2, 0.2, 0.2, 0.2, 0.1,  0.0],
    [ 0.0, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1,  0.0],
    [-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
];

#[rustfmt::skip]
const ENDGAME_ROOK: Table = [
    [0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
    [0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4],
    [0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
];

#[rustfmt::skip]
const ENDGAME_QUEEN: Table = [
    [-0.2, -0.1, -0.1, 0.0, 0.0, -0.1, -0.1, -0.2],
    [-0.1,  0.0,  0.1, 0.1, 0.1,  0.1,  0.0, -0.1],
    [-0.1,  0.1,  0.2, 0.2, 0.2,  0.2,  0.1, -0.1],
    [ 0.0,  0.1,  0.2, 0.3, 0.3,  0.2,  0.1,  0.0],
    [ 0.0,  0.1,  0.2, 0.3, 0.3,  0.2,  0.1,  0.0],
    [-0.1,  0.1,  0.2, 0.2, 0.2,  0.2,  0.1, -0.1],
    [-0.1,  0.0,  0.1, 0.1, 0.1,  0.1,  0.0, -0.1],
    [-0.2, -0.1, -0.1, 0.0, 0.0, -0.1, -0.1, -0.2],
];

#[rustfmt::skip]
const ENDGAME_KING: Table = [
    [-0.5, -0.3, -0.2, -0.2, -0.2, -0.2, -0.3, -0.5],
    [-0.3, -0.1,  0.0,  0.0,  0.0,  0.0, -0.1, -0.3],
    [-0.2,  0.0,  0.2,  0.3,  0.3,  0.2,  0.0, -0.2],
    [-0.2,  0.0,  0.3,  0.4,  0.4,  0.3,  0.0, -0.2],
    [-0.2,  0.0,  0.3,  0.4,  0.4,  0.3,  0.0, -0.2],
    [-0.2,  0.0,  0.2,  0.3,  0.3,  0.2,  0.0, -0.2],
    [-0.3, -0.1,  0.0,  0.0,  0.0,  0.0, -0.1, -0.3],
    [-0.5, -0.3, -0.2, -0.2, -0.2, -0.2, -0.3, -0.5],
];

/// Normal-phase tables, indexed like [`MATERIAL`].
const NORMAL_TABLES: [&Table; 6] = [
    &NORMAL_PAWN,
    &NORMAL_KNIGHT,
    &NORMAL_BISHOP,
    &NORMAL_ROOK,
    &ZERO,
    &ZERO,
];

const ENDGAME_TABLES: [&Table; 6] = [
    &ENDGAME_PAWN,
    &ENDGAME_KNIGHT,
    &ENDGAME_BISHOP,
    &ENDGAME_ROOK,
    &ENDGAME_QUEEN,
    &ENDGAME_KING,
];

/// Game phase used to pick a table set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Normal,
    Endgame,
}

#[inline]
#[must_use]
pub fn phase(pos: &Position, params: &SearchParams) -> Phase {
    if pos.piece_count() > params.endgame_piece_threshold {
        Phase::Normal
    } else {
        Phase::Endgame
    }
}

/// Material balance from `perspective`'s side.
#[must_use]
pub fn evaluate(pos: &Position, perspective: Color) -> Score {
    let mut score = 0.0;
    for piece in MATERIAL_PIECES {
        let value = MATERIAL[piece_index(piece)];
        let white = pos.count(Color::White, piece);
        let black = pos.count(Color::Black, piece);
        score += (f64::from(white) - f64::from(black)) * value;
    }
    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Table value of `mv`'s destination for the side making it.
#[must_use]
pub fn square_value(mv: Move, mover: Color, phase: Phase) -> Score {
    let table = match phase {
        Phase::Normal => NORMAL_TABLES[piece_index(mv.piece())],
        Phase::Endgame => ENDGAME_TABLES[piece_index(mv.piece())],
    };
    let rank = rank_of(mv.to());
    let row = match mover {
        Color::White => rank,
        Color::Black => 7 - rank,
    };
    table[row][file_of(mv.to())]
}

/// Tactical bonus for playing `mv` in `pos`, scored for the side to move.
///
/// The first matching rule wins: castling, promotion, then a check penalty
/// while material is high. Everything else scores its destination square,
/// plus a small reward for captures.
#[must_use]
pub fn move_bonus(pos: &Position, mv: Move, params: &SearchParams) -> Score {
    if mv.is_castle() {
        return CASTLE_BONUS;
    }
    if mv.is_promotion() {
        return PROMOTION_BONUS;
    }
    let phase = phase(pos, params);
    if mv.gives_check() && phase == Phase::Normal {
        return CHECK_PENALTY;
    }

    let mut bonus = square_value(mv, pos.side_to_move(), phase);
    if mv.is_capture() {
        bonus += CAPTURE_BONUS;
    }
    bonus
}
