use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// The per-request search budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub search_depth: u32,
    pub quiescence_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            search_depth: 4,
            quiescence_depth: 4,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(search_depth: u32, quiescence_depth: u32) -> Self {
        SearchConfig {
            search_depth,
            quiescence_depth,
        }
    }

    /// Set search depth
    #[must_use]
    pub fn depth(mut self, search_depth: u32) -> Self {
        self.search_depth = search_depth;
        self
    }

    /// Set quiescence depth
    #[must_use]
    pub fn quiescence(mut self, quiescence_depth: u32) -> Self {
        self.quiescence_depth = quiescence_depth;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.search_depth == 0 {
            return Err(SearchError::InvalidConfig {
                reason: "search depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Tunable thresholds and coordinator settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Above this many pieces (kings included) the normal tables apply and checks are penalized.
    pub endgame_piece_threshold: u32,
    /// Quiescence only fails hard while at least this many pieces remain.
    pub quiescence_material_floor: u32,
    /// Non-king piece counts at or below which one extra ply is searched, each.
    pub endgame_depth_thresholds: [u32; 2],
    pub max_adaptive_depth: u32,
    pub adaptive_depth: bool,
    /// Root moves searched sequentially before workers are dispatched.
    pub seed_moves: usize,
    /// Worker count override; `None` uses the machine's parallelism.
    pub threads: Option<usize>,
    pub reserved_threads: usize,
    /// How long to wait for workers; `None` waits until all report.
    pub worker_timeout: Option<Duration>,
    /// Score of a mate delivered on the first ply.
    pub mate_score: f64,
    /// Taken off the mate score for every further ply until mate. Larger
    /// than any root move bonus, so a shorter mate always scores higher.
    pub mate_distance_step: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            endgame_piece_threshold: 15,
            quiescence_material_floor: 8,
            endgame_depth_thresholds: [8, 5],
            max_adaptive_depth: 6,
            adaptive_depth: true,
            seed_moves: 3,
            threads: None,
            reserved_threads: 1,
            worker_timeout: None,
            mate_score: 1000.0,
            mate_distance_step: 10.0,
        }
    }
}

impl SearchParams {
    /// Params with a fixed worker count
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        SearchParams {
            threads: Some(threads),
            ..Default::default()
        }
    }

    /// Mate value for a side mated `ply` moves below the root (`ply >= 1`).
    #[must_use]
    pub fn mate_value(&self, ply: usize) -> f64 {
        self.mate_score - self.mate_distance_step * ply.saturating_sub(1) as f64
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.worker_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn adaptive(mut self, enabled: bool) -> Self {
        self.adaptive_depth = enabled;
        self
    }

    #[must_use]
    pub fn seeds(mut self, seed_moves: usize) -> Self {
        self.seed_moves = seed_moves;
        self
    }
}
