//! Textual command language for actions.
//!
//! ```text
//! point <a|b>            correct-point <a|b>
//! game <a|b>             correct-game <a|b>
//! change-ends | ends     reset-points     reset-all
//! name <a|b> [text...]   serve <a|b> [on|off]
//! ```
//!
//! Commands are case-insensitive. `Display` renders the canonical form. Parsing
//! trims the name argument, so a name with surrounding whitespace comes back
//! without it.

use std::fmt;
use std::str::FromStr;

use super::{Action, ActionParseError};
use crate::state::Side;

const POINT: &str = "point";
const CORRECT_POINT: &str = "correct-point";
const GAME: &str = "game";
const CORRECT_GAME: &str = "correct-game";
const CHANGE_ENDS: &str = "change-ends";
const RESET_POINTS: &str = "reset-points";
const RESET_ALL: &str = "reset-all";
const NAME: &str = "name";
const SERVE: &str = "serve";

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_first(input);
        if command.is_empty() {
            return Err(ActionParseError::Empty);
        }

        match command.to_ascii_lowercase().as_str() {
            POINT => Ok(Action::award_point(side_only(POINT, rest)?)),
            CORRECT_POINT => Ok(Action::correct_point(side_only(CORRECT_POINT, rest)?)),
            GAME => Ok(Action::award_game(side_only(GAME, rest)?)),
            CORRECT_GAME => Ok(Action::correct_game(side_only(CORRECT_GAME, rest)?)),
            CHANGE_ENDS | "ends" => {
                no_argument(CHANGE_ENDS, rest)?;
                Ok(Action::change_ends())
            }
            RESET_POINTS => {
                no_argument(RESET_POINTS, rest)?;
                Ok(Action::reset_points())
            }
            RESET_ALL => {
                no_argument(RESET_ALL, rest)?;
                Ok(Action::reset_all())
            }
            NAME => {
                let (token, name) = split_first(rest);
                let side = parse_side(NAME, token)?;
                Ok(Action::set_name(side, name))
            }
            SERVE => {
                let (token, toggle) = split_first(rest);
                let side = parse_side(SERVE, token)?;
                Ok(Action::set_service(side, parse_toggle(toggle)?))
            }
            other => Err(ActionParseError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AwardPoint(action) => write!(f, "{POINT} {}", side_token(action.side)),
            Action::CorrectPoint(action) => {
                write!(f, "{CORRECT_POINT} {}", side_token(action.side))
            }
            Action::AwardGame(action) => write!(f, "{GAME} {}", side_token(action.side)),
            Action::CorrectGame(action) => write!(f, "{CORRECT_GAME} {}", side_token(action.side)),
            Action::ChangeEnds(_) => f.write_str(CHANGE_ENDS),
            Action::ResetPoints(_) => f.write_str(RESET_POINTS),
            Action::ResetAll(_) => f.write_str(RESET_ALL),
            Action::SetName(action) if action.name.is_empty() => {
                write!(f, "{NAME} {}", side_token(action.side))
            }
            Action::SetName(action) => {
                write!(f, "{NAME} {} {}", side_token(action.side), action.name)
            }
            Action::SetService(action) => write!(
                f,
                "{SERVE} {} {}",
                side_token(action.side),
                if action.serving { "on" } else { "off" }
            ),
        }
    }
}

/// Splits off the first whitespace-delimited token; both halves are trimmed.
fn split_first(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

fn parse_side(command: &'static str, token: &str) -> Result<Side, ActionParseError> {
    if token.is_empty() {
        return Err(ActionParseError::MissingSide { command });
    }
    token.parse().map_err(|_| ActionParseError::InvalidSide {
        command,
        value: token.to_string(),
    })
}

fn side_only(command: &'static str, rest: &str) -> Result<Side, ActionParseError> {
    let (token, extra) = split_first(rest);
    let side = parse_side(command, token)?;
    no_argument(command, extra)?;
    Ok(side)
}

fn no_argument(command: &'static str, rest: &str) -> Result<(), ActionParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ActionParseError::UnexpectedArgument {
            command,
            value: rest.to_string(),
        })
    }
}

fn parse_toggle(token: &str) -> Result<bool, ActionParseError> {
    match token.to_ascii_lowercase().as_str() {
        "" | "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ActionParseError::InvalidToggle(token.to_string())),
    }
}

const fn side_token(side: Side) -> &'static str {
    match side {
        Side::A => "a",
        Side::B => "b",
    }
}
