//! Lattice movement directions.

use std::fmt;
use std::str::FromStr;

use crate::error::DishaError;

/// One-cell movement direction on the lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` for one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DishaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "arrowup" | "w" => Ok(Direction::Up),
            "down" | "arrowdown" | "s" => Ok(Direction::Down),
            "left" | "arrowleft" | "a" => Ok(Direction::Left),
            "right" | "arrowright" | "d" => Ok(Direction::Right),
            other => Err(DishaError::Command(format!("unknown direction '{}'", other))),
        }
    }
}
