//! Search module tests.
//!
//! - `minimax.rs` - Pruned search against an unpruned reference
//! - `proptest.rs` - Property-based tests for ordering, quiescence and the coordinator


use super::SearchStats;

#[test]
fn test_stats_merge() {
    let mut a = SearchStats {
        nodes: 10,
        quiescence_nodes: 2,
        leaf_evals: 7,
        beta_cutoffs: 1,
    };
    let b = SearchStats {
        nodes: 5,
        quiescence_nodes: 3,
        leaf_evals: 4,
        beta_cutoffs: 2,
    };
    a.merge(&b);
    assert_eq!(a.nodes, 15);
    assert_eq!(a.quiescence_nodes, 5);
    assert_eq!(a.leaf_evals, 11);
    assert_eq!(a.beta_cutoffs, 3);
    assert_eq!(a.total_nodes(), 20);
}
