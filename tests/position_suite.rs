use serde::Deserialize;

use chess_minimax::board::GameStatus;
use chess_minimax::search::SearchParams;
use chess_minimax::{choose_move, Position, SearchConfig};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<TestPosition>,
}

#[derive(Deserialize)]
struct TestPosition {
    name: String,
    kind: String,
    fen: String,
    depth: u32,
    quiescence_depth: u32,
    best: String,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn position_suite_finds_expected_moves() {
    let set = load();
    assert!(!set.positions.is_empty());

    for case in &set.positions {
        let pos = Position::from_fen(&case.fen).expect("bad fen in suite");
        let config = SearchConfig::new(case.depth, case.quiescence_depth);
        let outcome = choose_move(&pos, &config, &SearchParams::with_threads(2))
            .unwrap_or_else(|e| panic!("{}: search failed: {e}", case.name));

        assert_eq!(
            outcome.best_move.to_string(),
            case.best,
            "{}: expected {} got {} (score {:.2})",
            case.name,
            case.best,
            outcome.best_move,
            outcome.score
        );
        assert!(outcome.score.is_finite(), "{}: score not finite", case.name);
    }
}

#[test]
fn mate_entries_really_mate() {
    let set = load();
    let params = SearchParams::default();

    for case in set.positions.iter().filter(|p| p.kind == "mate") {
        let mut pos = Position::from_fen(&case.fen).expect("bad fen in suite");
        let mv = pos.parse_uci(&case.best).expect("suite move must parse");
        pos.apply(mv).expect("suite move must be legal");
        assert_eq!(pos.status(), GameStatus::Checkmate, "{}", case.name);

        let before = Position::from_fen(&case.fen).expect("bad fen in suite");
        let config = SearchConfig::new(case.depth, case.quiescence_depth);
        let outcome = choose_move(&before, &config, &params).expect("search failed");
        assert!(
            outcome.score > params.mate_score - 10.0,
            "{}: mate scored only {:.2}",
            case.name,
            outcome.score
        );
    }
}
