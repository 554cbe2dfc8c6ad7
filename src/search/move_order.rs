//! Move ordering utilities for search.

use crate::board::{piece_index, Move, MoveList, Position};

use super::constants::{MVV_LVA, PROMOTION_ORDER_VALUE};

/// MVV-LVA score of a move; quiet moves score 0.
///
/// The victim is read from the destination square, so en passant captures
/// find nothing there and score like quiet moves.
#[must_use]
pub fn mvv_lva_score(pos: &Position, mv: Move) -> i32 {
    let mut score = match pos.piece_at(mv.to()) {
        Some(victim) => MVV_LVA[piece_index(victim)][piece_index(mv.piece())],
        None => 0,
    };
    if let Some(promo) = mv.promotion() {
        score += PROMOTION_ORDER_VALUE[piece_index(promo)];
    }
    score
}

/// Sort moves best-first by [`mvv_lva_score`], keeping the generation order among ties.
#[must_use]
pub fn order_moves(pos: &Position, moves: MoveList) -> MoveList {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (mvv_lva_score(pos, mv), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_moves_score_zero() {
        let pos = Position::new();
        for mv in pos.legal_moves() {
            assert_eq!(mvv_lva_score(&pos, mv), 0);
        }
    }

    #[test]
    fn test_pawn_takes_queen_first() {
        let pos = Position::from_fen("4k3/8/8/3q4/4P3/2N5/8/4K3 w - - 0 1").unwrap();
        let ordered = order_moves(&pos, pos.legal_moves());
        assert_eq!(ordered[0].to_string(), "e4d5");
        assert_eq!(ordered[1].to_string(), "c3d5");
        assert!(mvv_lva_score(&pos, ordered[0]) > mvv_lva_score(&pos, ordered[1]));
    }

    #[test]
    fn test_en_passant_scores_as_quiet() {
        let pos =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let ep = pos.parse_uci("e5d6").unwrap();
        assert!(ep.is_en_passant());
        assert_eq!(mvv_lva_score(&pos, ep), 0);
    }

    #[test]
    fn test_promotion_adds_value() {
        let pos = Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let queen = pos.parse_uci("a7a8q").unwrap();
        let knight = pos.parse_uci("a7a8n").unwrap();
        assert_eq!(mvv_lva_score(&pos, queen), 900);
        assert_eq!(mvv_lva_score(&pos, knight), 320);
        let ordered = order_moves(&pos, pos.legal_moves());
        assert_eq!(ordered[0], queen);
    }

    #[test]
    fn test_ordering_keeps_tie_order() {
        let pos = Position::new();
        let moves = pos.legal_moves();
        assert_eq!(order_moves(&pos, moves.clone()), moves);
    }
}
