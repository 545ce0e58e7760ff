//! Text command definitions for the interactive sessions.
//!
//! One command per line, whitespace separated, case-insensitive:
//!
//! ```text
//! lattice: up | down | left | right | w a s d | move <dir>
//!          toggle <row> <col> | set <row> <col> <empty|obstacle>
//!          clear | reset | show
//! drive:   forward | backward | left [deg] | right [deg] | show
//! ```

use std::str::FromStr;

use crate::core::{Direction, LatticeCoord};
use crate::error::{DishaError, Result};
use crate::lattice::GridCell;

/// Command for the discrete grid navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeCommand {
    /// Drive the robot one cell
    Move(Direction),
    /// Flip a cell between empty and obstacle
    Toggle(LatticeCoord),
    /// Author a cell directly
    Set(LatticeCoord, GridCell),
    /// Empty every cell outside the robot footprint
    Clear,
    /// Clear and re-seat the robot at the centre
    Reset,
    /// Render without changing state
    Show,
}

/// Command for the continuous robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriveCommand {
    Forward,
    Backward,
    /// Counter-clockwise turn, degrees (session default if omitted)
    TurnLeft(Option<f32>),
    /// Clockwise turn, degrees (session default if omitted)
    TurnRight(Option<f32>),
    Show,
}

impl LatticeCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Toggle(_) => "toggle",
            Self::Set(..) => "set",
            Self::Clear => "clear",
            Self::Reset => "reset",
            Self::Show => "show",
        }
    }

    /// Whether applying the command can change the lattice.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Show)
    }
}

impl DriveCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::TurnLeft(_) => "left",
            Self::TurnRight(_) => "right",
            Self::Show => "show",
        }
    }
}

fn parse_index(token: Option<&str>, what: &str) -> Result<i32> {
    let token = token.ok_or_else(|| DishaError::Command(format!("missing {}", what)))?;
    token
        .parse::<i32>()
        .map_err(|_| DishaError::Command(format!("invalid {} '{}'", what, token)))
}

fn parse_degrees(token: Option<&str>) -> Result<Option<f32>> {
    match token {
        None => Ok(None),
        Some(t) => match t.parse::<f32>() {
            Ok(deg) if deg.is_finite() => Ok(Some(deg)),
            _ => Err(DishaError::Command(format!("invalid angle '{}'", t))),
        },
    }
}

fn reject_trailing<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<()> {
    match tokens.next() {
        Some(extra) => Err(DishaError::Command(format!(
            "unexpected argument '{}'",
            extra
        ))),
        None => Ok(()),
    }
}

impl FromStr for LatticeCommand {
    type Err = DishaError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let mut tokens = lower.split_whitespace();
        let head = tokens
            .next()
            .ok_or_else(|| DishaError::Command("empty command".into()))?;

        let command = match head {
            "move" | "go" => {
                let dir = tokens
                    .next()
                    .ok_or_else(|| DishaError::Command("missing direction".into()))?;
                Self::Move(dir.parse()?)
            }
            "toggle" => {
                let row = parse_index(tokens.next(), "row")?;
                let col = parse_index(tokens.next(), "column")?;
                Self::Toggle(LatticeCoord::new(row, col))
            }
            "set" => {
                let row = parse_index(tokens.next(), "row")?;
                let col = parse_index(tokens.next(), "column")?;
                let cell: GridCell = tokens
                    .next()
                    .ok_or_else(|| DishaError::Command("missing cell value".into()))?
                    .parse()?;
                Self::Set(LatticeCoord::new(row, col), cell)
            }
            "clear" => Self::Clear,
            "reset" => Self::Reset,
            "show" | "print" => Self::Show,
            other => Self::Move(other.parse()?),
        };

        reject_trailing(tokens)?;
        Ok(command)
    }
}

impl FromStr for DriveCommand {
    type Err = DishaError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let mut tokens = lower.split_whitespace();
        let head = tokens
            .next()
            .ok_or_else(|| DishaError::Command("empty command".into()))?;

        let command = match head {
            "forward" | "f" | "w" | "up" | "arrowup" => Self::Forward,
            "backward" | "back" | "b" | "s" | "down" | "arrowdown" => Self::Backward,
            "left" | "l" | "a" | "arrowleft" => Self::TurnLeft(parse_degrees(tokens.next())?),
            "right" | "r" | "d" | "arrowright" => Self::TurnRight(parse_degrees(tokens.next())?),
            "show" | "print" => Self::Show,
            other => {
                return Err(DishaError::Command(format!(
                    "unknown drive command '{}'",
                    other
                )));
            }
        };

        reject_trailing(tokens)?;
        Ok(command)
    }
}
