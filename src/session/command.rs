//! Line commands for the interactive front end.
//!
//! ```text
//! add <type> <a> <b> <c> <d> [note...]   record a round
//! game <400|trix>                        select the game
//! name <1-4> [name...]                   rename a seat (blank resets)
//! target <n|none>                        set or clear the target
//! delete                                 delete the last round
//! undo                                   undo the last action
//! new                                    start a new game
//! show                                   print totals and history
//! help                                   list commands
//! quit                                   leave
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::core::{Game, SeatId, Seats, UnknownGame, SEAT_COUNT};
use crate::rules::{Subtype, UnknownSubtype};

/// A parsed front-end command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddRound {
        subtype: Subtype,
        values: Seats<i64>,
        note: Option<String>,
    },
    SwitchGame(Game),
    Rename { seat: SeatId, name: String },
    SetTarget(Option<i64>),
    DeleteLast,
    Undo,
    NewGame,
    Show,
    Help,
    Quit,
}

/// Reasons a command line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("seat must be 1 to 4, got '{0}'")]
    BadSeat(String),

    #[error(transparent)]
    Subtype(#[from] UnknownSubtype),

    #[error(transparent)]
    Game(#[from] UnknownGame),
}

/// Usage text for the `help` command.
pub const HELP: &str = "\
add <type> <a> <b> <c> <d> [note...]   record a round (type: manual, king, queens, diamonds, luto, trix)
game <400|trix>                        select the game
name <1-4> [name...]                   rename a seat (no name resets it)
target <n|none>                        set or clear the target
delete                                 delete the last round
undo                                   undo the last action
new                                    start a new game
show                                   print totals and history
help                                   list commands
quit                                   leave";

fn parse_int(token: &str) -> Result<i64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::NotANumber(token.to_string()))
}

fn rest(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&verb, args) = tokens.split_first().ok_or(CommandError::Empty)?;

        match verb.to_ascii_lowercase().as_str() {
            "add" | "round" => {
                if args.len() < 1 + SEAT_COUNT {
                    return Err(CommandError::Usage {
                        command: "add",
                        expected: "a type and four numbers",
                    });
                }
                let subtype: Subtype = args[0].parse()?;
                let mut values = [0i64; SEAT_COUNT];
                for (slot, token) in values.iter_mut().zip(&args[1..=SEAT_COUNT]) {
                    *slot = parse_int(token)?;
                }
                Ok(Command::AddRound {
                    subtype,
                    values: Seats::from(values),
                    note: rest(&args[1 + SEAT_COUNT..]),
                })
            }
            "game" => match args {
                [game] => Ok(Command::SwitchGame(game.parse()?)),
                _ => Err(CommandError::Usage {
                    command: "game",
                    expected: "400 or trix",
                }),
            },
            "name" => {
                let (&seat, name) = args.split_first().ok_or(CommandError::Usage {
                    command: "name",
                    expected: "a seat number and a name",
                })?;
                let seat = seat
                    .parse::<usize>()
                    .ok()
                    .and_then(SeatId::from_number)
                    .ok_or_else(|| CommandError::BadSeat(seat.to_string()))?;
                Ok(Command::Rename {
                    seat,
                    name: name.join(" "),
                })
            }
            "target" => match args {
                [] => Ok(Command::SetTarget(None)),
                [value] if value.eq_ignore_ascii_case("none") => Ok(Command::SetTarget(None)),
                [value] => Ok(Command::SetTarget(Some(parse_int(value)?))),
                _ => Err(CommandError::Usage {
                    command: "target",
                    expected: "a number or 'none'",
                }),
            },
            "delete" | "del" => Ok(Command::DeleteLast),
            "undo" => Ok(Command::Undo),
            "new" => Ok(Command::NewGame),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_round() {
        let cmd: Command = "add queens 1 1 2 0 last hand".parse().unwrap();
        assert_eq!(
            cmd,
            Command::AddRound {
                subtype: Subtype::Queens,
                values: Seats::from([1, 1, 2, 0]),
                note: Some("last hand".to_string()),
            }
        );

        let cmd: Command = "add manual -10 20 0 5".parse().unwrap();
        assert_eq!(
            cmd,
            Command::AddRound {
                subtype: Subtype::Manual,
                values: Seats::from([-10, 20, 0, 5]),
                note: None,
            }
        );
    }

    #[test]
    fn test_parse_add_round_errors() {
        assert_eq!(
            "add king 1 0 0".parse::<Command>(),
            Err(CommandError::Usage { command: "add", expected: "a type and four numbers" })
        );
        assert_eq!(
            "add king 1 x 0 0".parse::<Command>(),
            Err(CommandError::NotANumber("x".to_string()))
        );
        assert!(matches!(
            "add hearts 1 0 0 0".parse::<Command>(),
            Err(CommandError::Subtype(_))
        ));
    }

    #[test]
    fn test_parse_game() {
        assert_eq!("game trix".parse(), Ok(Command::SwitchGame(Game::Trix)));
        assert_eq!("GAME 400".parse(), Ok(Command::SwitchGame(Game::FourHundred)));
        assert!(matches!("game poker".parse::<Command>(), Err(CommandError::Game(_))));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(
            "name 2 Bea Maria".parse(),
            Ok(Command::Rename {
                seat: SeatId::new(1).unwrap(),
                name: "Bea Maria".to_string()
            })
        );
        assert_eq!(
            "name 3".parse(),
            Ok(Command::Rename { seat: SeatId::new(2).unwrap(), name: String::new() })
        );
        assert_eq!(
            "name 5 Eve".parse::<Command>(),
            Err(CommandError::BadSeat("5".to_string()))
        );
    }

    #[test]
    fn test_parse_target() {
        assert_eq!("target 400".parse(), Ok(Command::SetTarget(Some(400))));
        assert_eq!("target none".parse(), Ok(Command::SetTarget(None)));
        assert_eq!("target".parse(), Ok(Command::SetTarget(None)));
        assert!("target lots".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("undo".parse(), Ok(Command::Undo));
        assert_eq!("delete".parse(), Ok(Command::DeleteLast));
        assert_eq!("new".parse(), Ok(Command::NewGame));
        assert_eq!("  show  ".parse(), Ok(Command::Show));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "shuffle".parse::<Command>(),
            Err(CommandError::Unknown("shuffle".to_string()))
        );
    }
}
