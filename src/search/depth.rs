//! Adaptive depth: search deeper as material comes off the board.

use super::SearchParams;

/// Depth to search with `non_king_pieces` left on the board.
///
/// Each threshold crossed adds one ply. The result never exceeds
/// `max_adaptive_depth` unless `base` already does, and is never below `base`.
#[must_use]
pub fn effective_depth(base: u32, non_king_pieces: u32, params: &SearchParams) -> u32 {
    if !params.adaptive_depth {
        return base;
    }
    let extra = params
        .endgame_depth_thresholds
        .iter()
        .filter(|&&threshold| non_king_pieces <= threshold)
        .count() as u32;
    (base + extra).min(params.max_adaptive_depth).max(base)
}
