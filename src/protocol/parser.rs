//! Command parser for the Damista text protocol

use crate::board::Square;
use crate::error::CommandError;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    NewGame,
    Move { from: Square, to: Square },
    Go,
    Undo,
    Show,
    Legal(Square),
    Counts,
    Depth(u8),
    History,
    Quit,
    Unknown(String),
}

/// Parse one protocol line (simple tokenizer)
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    let cmd = match head {
        "new" => Command::NewGame,
        "go" => Command::Go,
        "undo" => Command::Undo,
        "show" | "board" => Command::Show,
        "counts" => Command::Counts,
        "history" => Command::History,
        "quit" | "exit" => Command::Quit,
        "move" => parse_move(&parts[1..])?,
        "legal" => {
            let sq = parts.get(1).ok_or(CommandError::MissingArgument { command: "legal" })?;
            Command::Legal(Square::from_notation(sq)?)
        }
        "depth" => {
            let value = parts.get(1).ok_or(CommandError::MissingArgument { command: "depth" })?;
            let depth = value
                .parse::<u8>()
                .ok()
                .filter(|d| *d > 0)
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "depth",
                    value: value.to_string(),
                })?;
            Command::Depth(depth)
        }
        other => Command::Unknown(other.to_string()),
    };
    Ok(cmd)
}

// move d6 c5 | move d6-c5 | move d6xb4
fn parse_move(args: &[&str]) -> Result<Command, CommandError> {
    let (from, to) = match args {
        [from, to, ..] => (*from, *to),
        [joined] => joined
            .split_once(|c: char| c == '-' || c == 'x')
            .ok_or_else(|| CommandError::InvalidArgument {
                command: "move",
                value: joined.to_string(),
            })?,
        [] => return Err(CommandError::MissingArgument { command: "move" }),
    };
    Ok(Command::Move {
        from: Square::from_notation(from)?,
        to: Square::from_notation(to)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_parse_move_forms() {
        let expected = Command::Move {
            from: Square::new(3, 5),
            to: Square::new(2, 4),
        };
        assert_eq!(parse_command("move d6 c5").unwrap(), expected);
        assert_eq!(parse_command("move d6-c5").unwrap(), expected);
        assert_eq!(parse_command("  move 3,5 2,4 ").unwrap(), expected);
        assert_eq!(
            parse_command("move d6xb4").unwrap(),
            Command::Move {
                from: Square::new(3, 5),
                to: Square::new(1, 3)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("move").unwrap_err(),
            CommandError::MissingArgument { command: "move" }
        );
        assert_eq!(
            parse_command("legal z9").unwrap_err(),
            CommandError::Board(BoardError::InvalidSquare("z9".to_string()))
        );
        assert!(matches!(
            parse_command("depth 0"),
            Err(CommandError::InvalidArgument { command: "depth", .. })
        ));
        assert_eq!(parse_command("dance").unwrap(), Command::Unknown("dance".to_string()));
    }
}
