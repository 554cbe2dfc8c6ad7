//! Move search.
//!
//! [`choose_move`] orders the root moves, searches a few of them sequentially
//! to establish a bound, then fans the rest out to worker threads that each
//! run a fixed-perspective alpha-beta search over their own copy of the
//! position.
//!
//! # Example
//! ```
//! use chess_minimax::board::Position;
//! use chess_minimax::search::{choose_move, SearchConfig, SearchParams};
//!
//! let pos = Position::new();
//! let outcome = choose_move(&pos, &SearchConfig::new(2, 1), &SearchParams::default()).unwrap();
//! assert!(pos.legal_moves().contains(&outcome.best_move));
//! ```

mod alphabeta;
pub mod constants;
mod depth;
mod error;
pub mod eval;
mod log;
pub mod move_order;
mod params;
mod smp;

use std::time::Duration;

use crate::board::Move;

pub use alphabeta::SearchContext;
pub use depth::effective_depth;
pub use error::SearchError;
pub use eval::{evaluate, move_bonus};
pub use log::{LogLogger, SearchInfo, SearchLogger, StdoutLogger};
pub use move_order::{mvv_lva_score, order_moves};
pub use params::{SearchConfig, SearchParams};
pub use smp::{available_workers, choose_move, WorkResult, WorkerReport, WorkerTask};

/// Evaluation in pawns, from a fixed side's perspective.
pub type Score = f64;

/// Counters owned by one search unit and summed by the coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub leaf_evals: u64,
    pub beta_cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.quiescence_nodes += other.quiescence_nodes;
        self.leaf_evals += other.leaf_evals;
        self.beta_cutoffs += other.beta_cutoffs;
    }

    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.quiescence_nodes
    }
}

/// Result of a move request.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: Score,
    /// Depth actually searched, after adaptive adjustment.
    pub depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// Worker threads that were dispatched.
    pub workers: usize,
    /// Set when the worker wait timed out and some chunks went unscored.
    pub degraded: bool,
}

#[cfg(test)]
mod tests;
