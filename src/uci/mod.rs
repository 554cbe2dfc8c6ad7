//! Universal Chess Interface (UCI) protocol front end.
//!
//! Reads commands from stdin and answers on stdout. Diagnostics go through
//! the `log` facade so stdout carries protocol lines only.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{FenError, MoveParseError, Position};
use crate::engine::Engine;
use crate::search::{SearchConfig, SearchError};

pub mod command;
pub mod options;
pub mod report;

use command::{parse_uci_command, GoLimits, UciCommand};
use options::{apply_setoption, print_options, OptionOutcome};
use report::{print_bestmove, print_info, print_ready};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command into a fresh position.
///
/// Supports "position startpos" and "position fen <fen>", optionally
/// followed by "moves <move1> <move2> ...". The FEN may omit its counters.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Position, UciError> {
    let mut i = 1;

    let mut pos = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Position::new()
        }
        Some(&"fen") => {
            let fen_end = parts
                .iter()
                .position(|p| *p == "moves")
                .unwrap_or(parts.len());
            if fen_end <= i + 1 {
                return Err(UciError::MissingParts);
            }
            let fen = parts[i + 1..fen_end].join(" ");
            i = fen_end;
            Position::from_fen(&fen)?
        }
        _ => return Err(UciError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        for move_str in &parts[i + 1..] {
            let mv = pos.parse_uci(move_str).map_err(|error| UciError::InvalidMove {
                move_str: (*move_str).to_string(),
                error,
            })?;
            pos.apply_unchecked(mv);
        }
    }

    Ok(pos)
}

fn handle_go(engine: &Engine, limits: GoLimits) {
    let saved = engine.config();
    let config = SearchConfig::new(
        limits.depth.unwrap_or(saved.search_depth),
        limits.quiescence_depth.unwrap_or(saved.quiescence_depth),
    );
    engine.set_config(config);
    let result = engine.think();
    engine.set_config(saved);

    match result {
        Ok(outcome) => {
            print_info(&outcome);
            print_bestmove(Some(outcome.best_move));
        }
        Err(SearchError::NoLegalMoves) => print_bestmove(None),
        Err(e) => {
            log::error!("search failed: {e}");
            print_bestmove(None);
        }
    }
}

/// Handle one command. Returns `false` when the loop should stop.
pub fn handle_command(engine: &Engine, cmd: UciCommand) -> bool {
    match cmd {
        UciCommand::Uci => print_options(engine),
        UciCommand::IsReady => print_ready(),
        UciCommand::UciNewGame => {
            if let Err(e) = engine.reset() {
                log::warn!("ucinewgame ignored: {e}");
            }
        }
        UciCommand::Position(parts) => {
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            match try_parse_position_command(&parts) {
                Ok(pos) => {
                    if let Err(e) = engine.set_position(pos) {
                        eprintln!("Error: {e}");
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        UciCommand::Go(limits) => handle_go(engine, limits),
        UciCommand::SetOption { name, value } => {
            match apply_setoption(engine, &name, value.as_deref()) {
                OptionOutcome::Applied => {}
                OptionOutcome::UnknownOption(name) => eprintln!("Unknown option: {name}"),
                OptionOutcome::InvalidValue { name, value } => {
                    eprintln!("Invalid value '{value}' for option {name}");
                }
            }
        }
        UciCommand::Display => println!("Fen: {}", engine.position().to_fen()),
        UciCommand::Quit => return false,
        UciCommand::Unknown(line) => log::debug!("ignoring unknown command: {line}"),
    }
    true
}

pub fn run_uci_loop() {
    let engine = Engine::new();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read stdin: {e}");
                break;
            }
        };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };
        let keep_going = handle_command(&engine, cmd);
        let _ = io::stdout().flush();
        if !keep_going {
            break;
        }
    }
}
