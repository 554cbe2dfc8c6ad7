//! Search constants.
//!
//! Material values, tactical bonuses and ordering tables shared by the
//! evaluator, the orderer and the coordinator.

use super::Score;

// ============================================================================
// MATERIAL
// ============================================================================

/// Material in pawns, indexed pawn, knight, bishop, rook, queen, king.
pub const MATERIAL: [Score; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 0.0];

/// Promotion ordering bonus in centipawns, same index order.
pub const PROMOTION_ORDER_VALUE: [i32; 6] = [0, 320, 330, 500, 900, 0];

// ============================================================================
// TACTICAL MOVE BONUSES
// ============================================================================

pub const CASTLE_BONUS: Score = 0.7;
pub const PROMOTION_BONUS: Score = 9.0;
pub const CHECK_PENALTY: Score = -0.5;
pub const CAPTURE_BONUS: Score = 0.3;

// ============================================================================
// MOVE ORDERING
// ============================================================================

/// MVV-LVA scores indexed `[victim][attacker]`.
///
/// Victims run pawn..king down the rows, attackers pawn..king across.
pub const MVV_LVA: [[i32; 6]; 6] = [
    [15, 14, 13, 12, 11, 10],
    [25, 24, 23, 22, 21, 20],
    [35, 34, 33, 32, 31, 30],
    [45, 44, 43, 42, 41, 40],
    [55, 54, 53, 52, 51, 50],
    [0, 0, 0, 0, 0, 0],
];

// ============================================================================
// WORKERS
// ============================================================================

/// Worker thread stack size (32 MB to handle deep recursion)
pub const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;
