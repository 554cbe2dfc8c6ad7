use crate::engine::Engine;

pub const MAX_DEPTH: u32 = 12;
pub const MAX_THREADS: usize = 256;

/// Result of a `setoption` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOutcome {
    Applied,
    UnknownOption(String),
    InvalidValue { name: String, value: String },
}

pub fn print_options(engine: &Engine) {
    let config = engine.config();
    let params = engine.params();
    println!("id name {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("id author the {} developers", env!("CARGO_PKG_NAME"));
    println!(
        "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
        config.search_depth
    );
    println!(
        "option name QuiescenceDepth type spin default {} min 0 max {MAX_DEPTH}",
        config.quiescence_depth
    );
    println!(
        "option name Threads type spin default {} min 0 max {MAX_THREADS}",
        params.threads.unwrap_or(0)
    );
    println!(
        "option name AdaptiveDepth type check default {}",
        params.adaptive_depth
    );
    println!("uciok");
}

/// Apply a `setoption` to the engine's settings.
///
/// `Threads 0` restores automatic worker sizing.
pub fn apply_setoption(engine: &Engine, name: &str, value: Option<&str>) -> OptionOutcome {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let raw = value.unwrap_or("").trim();
    let invalid = || OptionOutcome::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    };

    match normalized.as_str() {
        "depth" => match raw.parse::<u32>() {
            Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => {
                engine.set_config(engine.config().depth(depth));
            }
            _ => return invalid(),
        },
        "quiescencedepth" => match raw.parse::<u32>() {
            Ok(depth) if depth <= MAX_DEPTH => {
                engine.set_config(engine.config().quiescence(depth));
            }
            _ => return invalid(),
        },
        "threads" => match raw.parse::<usize>() {
            Ok(0) => engine.params_mut().threads = None,
            Ok(n) if n <= MAX_THREADS => engine.params_mut().threads = Some(n),
            _ => return invalid(),
        },
        "adaptivedepth" => match raw.to_ascii_lowercase().as_str() {
            "true" => engine.params_mut().adaptive_depth = true,
            "false" => engine.params_mut().adaptive_depth = false,
            _ => return invalid(),
        },
        _ => return OptionOutcome::UnknownOption(name.to_string()),
    }
    OptionOutcome::Applied
}
