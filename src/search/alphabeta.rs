//! Fixed-perspective minimax with alpha-beta pruning.
//!
//! Scores are always from `perspective`'s side: maximizing nodes belong to
//! that side and minimizing nodes to its opponent. The root move's bonus is
//! carried unchanged to every leaf below it.
//!
//! A node with no legal moves returns its untouched infinite sentinel. The
//! parent that applied the move settles it into a mate or stalemate score
//! before undoing, so every score leaving [`SearchContext::search_root_move`]
//! is finite. Mate scores shrink with the number of plies from the root, so
//! a quicker mate always beats a slower one.

mod quiescence;

use crate::board::{Color, Move, Position};

use super::eval::{evaluate, move_bonus};
use super::move_order::order_moves;
use super::{Score, SearchError, SearchParams, SearchStats};

/// Search state for one search unit (seed phase, a worker, or the local remainder).
pub struct SearchContext<'a> {
    pub pos: &'a mut Position,
    pub params: &'a SearchParams,
    pub quiescence_depth: u32,
    pub stats: SearchStats,
    root_ply: usize,
}

impl<'a> SearchContext<'a> {
    pub fn new(pos: &'a mut Position, params: &'a SearchParams, quiescence_depth: u32) -> Self {
        let root_ply = pos.ply_count();
        SearchContext {
            root_ply,
            pos,
            params,
            quiescence_depth,
            stats: SearchStats::default(),
        }
    }

    /// Score one root move with the window `(alpha, +inf)`.
    ///
    /// The move is applied with a legality check, searched to `depth - 1`
    /// with the opponent to move, and undone.
    pub fn search_root_move(
        &mut self,
        mv: Move,
        depth: u32,
        alpha: Score,
    ) -> Result<Score, SearchError> {
        let perspective = self.pos.side_to_move();
        let bonus = move_bonus(self.pos, mv, self.params);

        self.pos.apply(mv)?;
        let score = self.alphabeta(
            depth.saturating_sub(1),
            false,
            perspective,
            bonus,
            Some(mv),
            alpha,
            Score::INFINITY,
        );
        let score = self.settle(score, perspective, bonus);
        self.pos.undo();

        Ok(score)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn alphabeta(
        &mut self,
        depth: u32,
        maximizing: bool,
        perspective: Color,
        bonus: Score,
        last_move: Option<Move>,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            return match last_move {
                Some(mv) if mv.is_capture() => self.quiesce(
                    self.quiescence_depth,
                    maximizing,
                    perspective,
                    bonus,
                    last_move,
                    alpha,
                    beta,
                ),
                _ => {
                    self.stats.leaf_evals += 1;
                    evaluate(self.pos, perspective) + bonus
                }
            };
        }

        let moves = order_moves(self.pos, self.pos.legal_moves());
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for mv in moves {
            self.pos.apply_unchecked(mv);
            let score = self.alphabeta(
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

    /// Turn a no-legal-moves sentinel from the current node into a real score.
    ///
    /// Must be called with the child position still applied.
    fn settle(&self, score: Score, perspective: Color, bonus: Score) -> Score {
        if score.is_finite() {
            return score;
        }
        if self.pos.is_in_check() {
            let ply = self.pos.ply_count().saturating_sub(self.root_ply);
            let mate = self.params.mate_value(ply);
            if self.pos.side_to_move() == perspective {
                bonus - mate
            } else {
                bonus + mate
            }
        } else {
            bonus
        }
    }
}
