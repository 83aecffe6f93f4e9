//! Desk commands typed at the terminal
//!
//! ```text
//! ask <lane> [name]            join a lane (prompts for a name if omitted)
//! cancel <lane> <rank|name>    withdraw a waiting entry
//! confirm <lane> <rank|name>   mark an entry as helped
//! toggle <lane>                switch precise timing on or off
//! show [lane]                  draw one or both lanes
//! dump [lane]                  print lane snapshots as JSON
//! help                         list commands
//! quit                         leave
//! ```

use crate::core::validation::validate_lane;
use crate::queue::api::LaneId;

pub const HELP_TEXT: &str = "\
Commands:
  ask <lane> [name]            join a lane (prompts for a name if omitted)
  cancel <lane> <rank|name>    withdraw a waiting entry
  confirm <lane> <rank|name>   mark an entry as helped
  toggle <lane>                switch precise timing on or off
  show [lane]                  draw one or both lanes
  dump [lane]                  print lane snapshots as JSON
  help                         list commands
  quit                         leave
Lanes: quick, long";

/// Which entry a staff command refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based position in the current ranking
    Rank(usize),
    Name(String),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Rank(rank) => write!(f, "at rank {}", rank),
            Target::Name(name) => write!(f, "named {:?}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask { lane: LaneId, name: Option<String> },
    Cancel { lane: LaneId, target: Target },
    Confirm { lane: LaneId, target: Target },
    Toggle { lane: LaneId },
    Show { lane: Option<LaneId> },
    Dump { lane: Option<LaneId> },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    Missing {
        command: &'static str,
        what: &'static str,
    },

    #[error("{0}")]
    InvalidLane(String),

    #[error("Ranks start at 1")]
    ZeroRank,
}

/// Parse one input line; a blank line is `Ok(None)`
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let (word, rest) = split_word(line);
    if word.is_empty() {
        return Ok(None);
    }

    let command = match word.to_ascii_lowercase().as_str() {
        "ask" => {
            let (lane, name) = split_word(rest);
            Command::Ask {
                lane: required_lane(lane, "ask")?,
                name: Some(name.trim_end().to_string()).filter(|n| !n.is_empty()),
            }
        }
        "cancel" => {
            let (lane, target) = split_word(rest);
            Command::Cancel {
                lane: required_lane(lane, "cancel")?,
                target: parse_target(target, "cancel")?,
            }
        }
        "confirm" => {
            let (lane, target) = split_word(rest);
            Command::Confirm {
                lane: required_lane(lane, "confirm")?,
                target: parse_target(target, "confirm")?,
            }
        }
        "toggle" => Command::Toggle {
            lane: required_lane(split_word(rest).0, "toggle")?,
        },
        "show" => Command::Show {
            lane: optional_lane(split_word(rest).0)?,
        },
        "dump" => Command::Dump {
            lane: optional_lane(split_word(rest).0)?,
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

fn required_lane(word: &str, command: &'static str) -> Result<LaneId, CommandError> {
    if word.is_empty() {
        return Err(CommandError::Missing {
            command,
            what: "a lane (quick or long)",
        });
    }
    validate_lane(word).map_err(CommandError::InvalidLane)
}

fn optional_lane(word: &str) -> Result<Option<LaneId>, CommandError> {
    if word.is_empty() {
        return Ok(None);
    }
    validate_lane(word)
        .map(Some)
        .map_err(CommandError::InvalidLane)
}

fn parse_target(text: &str, command: &'static str) -> Result<Target, CommandError> {
    let text = text.trim_end();
    if text.is_empty() {
        return Err(CommandError::Missing {
            command,
            what: "a rank or a name",
        });
    }
    match text.parse::<usize>() {
        Ok(0) => Err(CommandError::ZeroRank),
        Ok(rank) => Ok(Target::Rank(rank)),
        Err(_) => Ok(Target::Name(text.to_string())),
    }
}
