use crate::board::{Color, Move};

use super::super::eval::evaluate;
use super::super::move_order::order_moves;
use super::super::Score;
use super::SearchContext;

impl SearchContext<'_> {
    /// Extend a capture leaf until the position goes quiet or `depth` runs out.
    ///
    /// Fails hard: when the stand-pat score reaches `beta` and at least
    /// `quiescence_material_floor` pieces remain, returns exactly `beta`.
    #[allow(clippy::too_many_arguments)]
    pub fn quiesce(
        &mut self,
        depth: u32,
        maximizing: bool,
        perspective: Color,
        bonus: Score,
        last_move: Option<Move>,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.quiescence_nodes += 1;
        self.stats.leaf_evals += 1;
        let stand_pat = evaluate(self.pos, perspective) + bonus;

        if stand_pat >= beta && self.pos.piece_count() >= self.params.quiescence_material_floor {
            self.stats.beta_cutoffs += 1;
            return beta;
        }

        if depth == 0 || last_move.map_or(true, Move::is_quiet) {
            return stand_pat;
        }

        let moves = order_moves(self.pos, self.pos.legal_moves());
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for mv in moves {
            self.pos.apply_unchecked(mv);
            let score = self.quiesce(
                depth - 1,
                !maximizing,
                perspective,
                bonus,
                Some(mv),
                alpha,
                beta,
            );
            let score = self.settle(score, perspective, bonus);
            self.pos.undo();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        best
    }
}
