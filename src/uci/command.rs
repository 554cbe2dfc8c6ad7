#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(GoLimits),
    SetOption { name: String, value: Option<String> },
    Display,
    Quit,
    Unknown(String),
}

/// Per-search overrides from a `go` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoLimits {
    pub depth: Option<u32>,
    pub quiescence_depth: Option<u32>,
}

fn parse_go(parts: &[&str]) -> GoLimits {
    let mut limits = GoLimits::default();
    let mut i = 1;
    while i < parts.len() {
        let value = parts.get(i + 1).and_then(|v| v.parse::<u32>().ok());
        match parts[i] {
            "depth" => {
                limits.depth = value;
                i += 2;
            }
            "qdepth" => {
                limits.quiescence_depth = value;
                i += 2;
            }
            _ => i += 1,
        }
    }
    limits
}

fn parse_setoption(parts: &[&str]) -> (String, Option<String>) {
    let name_start = parts.iter().position(|p| *p == "name").map_or(1, |i| i + 1);
    let value_at = parts.iter().position(|p| *p == "value");
    let name_end = value_at.unwrap_or(parts.len()).max(name_start);
    let name = parts[name_start.min(parts.len())..name_end].join(" ");
    let value = value_at
        .map(|i| parts[i + 1..].join(" "))
        .filter(|v| !v.is_empty());
    (name, value)
}

pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(parse_go(&parts)),
        "setoption" => {
            let (name, value) = parse_setoption(&parts);
            UciCommand::SetOption { name, value }
        }
        "d" => UciCommand::Display,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_uci_command("   "), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_uci_command("uci"), Some(UciCommand::Uci));
        assert_eq!(parse_uci_command("isready\n"), Some(UciCommand::IsReady));
        assert_eq!(parse_uci_command("d"), Some(UciCommand::Display));
        assert_eq!(parse_uci_command("quit"), Some(UciCommand::Quit));
        assert_eq!(
            parse_uci_command("xyzzy 1"),
            Some(UciCommand::Unknown("xyzzy 1".to_string()))
        );
    }

    #[test]
    fn test_go_limits() {
        assert_eq!(
            parse_uci_command("go depth 3 qdepth 2"),
            Some(UciCommand::Go(GoLimits {
                depth: Some(3),
                quiescence_depth: Some(2),
            }))
        );
        assert_eq!(
            parse_uci_command("go wtime 1000 btime 1000"),
            Some(UciCommand::Go(GoLimits::default()))
        );
    }

    #[test]
    fn test_setoption_with_spaces() {
        assert_eq!(
            parse_uci_command("setoption name Quiescence Depth value 3"),
            Some(UciCommand::SetOption {
                name: "Quiescence Depth".to_string(),
                value: Some("3".to_string()),
            })
        );
        assert_eq!(
            parse_uci_command("setoption name Clear"),
            Some(UciCommand::SetOption {
                name: "Clear".to_string(),
                value: None,
            })
        );
    }
}
