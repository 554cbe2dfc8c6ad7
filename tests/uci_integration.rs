use std::io::Write;
use std::process::{Command, Stdio};

use chess_minimax::uci::try_parse_position_command;

fn run_engine(input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_chess_minimax");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success(), "engine exited with {}", output.status);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn bestmove(stdout: &str) -> &str {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("bestmove"))
        .expect("no bestmove found");
    let parts: Vec<&str> = line.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {line}");
    parts[1]
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let stdout = run_engine(
        "uci\nisready\nposition startpos moves e2e4\ngo depth 2 qdepth 1\nquit\n",
    );

    assert!(stdout.contains("uciok"));
    assert!(stdout.contains("readyok"));
    assert!(stdout.contains("info depth 2"));

    let mv = bestmove(&stdout);
    let pos = try_parse_position_command(&["position", "startpos", "moves", "e2e4"]).unwrap();
    assert!(pos.parse_uci(mv).is_ok(), "bestmove not legal in position: {mv}");
}

#[test]
fn uci_reports_options_and_handles_setoption() {
    let stdout = run_engine(
        "uci\nsetoption name Depth value 2\nsetoption name QuiescenceDepth value 1\nsetoption name Threads value 2\nsetoption name Bogus value 1\nisready\nquit\n",
    );

    assert!(stdout.contains("option name Depth type spin"));
    assert!(stdout.contains("option name QuiescenceDepth type spin"));
    assert!(stdout.contains("option name Threads type spin"));
    assert!(stdout.contains("option name AdaptiveDepth type check"));
    assert!(stdout.contains("readyok"));
}

#[test]
fn uci_finds_mate_with_configured_depth() {
    let stdout = run_engine(
        "setoption name Depth value 2\nposition fen k7/4Q3/5R2/p7/4P3/2N5/PPPPBPPP/R1B1K1N1 w Q - 0 1\ngo\nquit\n",
    );
    assert_eq!(bestmove(&stdout), "f6f8");
}

#[test]
fn uci_position_with_moves_is_displayed() {
    let stdout = run_engine("position startpos moves e2e4 e7e5 g1f3\nd\nquit\n");
    assert!(stdout.contains("Fen: rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"));
}

#[test]
fn uci_mated_position_has_no_bestmove() {
    let stdout = run_engine("position fen R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1\ngo depth 2\nquit\n");
    assert_eq!(bestmove(&stdout), "(none)");
}

#[test]
fn uci_survives_bad_input() {
    let stdout = run_engine(
        "position fen not a fen\nposition startpos moves e2e5\nfoo bar\nisready\nd\nquit\n",
    );
    assert!(stdout.contains("readyok"));
    // Rejected commands leave the start position in place.
    assert!(stdout.contains("Fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
}

#[test]
fn uci_exits_at_end_of_input() {
    let stdout = run_engine("isready\n");
    assert!(stdout.contains("readyok"));
}
