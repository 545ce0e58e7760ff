//! Lattice cell states.

use std::fmt;
use std::str::FromStr;

use crate::error::DishaError;

/// State of one lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GridCell {
    /// Free space
    #[default]
    Empty = 0,
    /// Obstacle not yet seen by the robot
    Obstacle = 1,
    /// Obstacle swept by the robot's footprint edge
    Mapped = 2,
    /// Covered by the robot's current footprint
    RobotOccupied = 3,
}

impl GridCell {
    /// Whether the robot footprint may not enter this cell.
    ///
    /// Mapped cells are still obstacles; only their "seen" flag changed.
    #[inline]
    pub fn is_blocking(self) -> bool {
        matches!(self, GridCell::Obstacle | GridCell::Mapped)
    }

    /// Single-character symbol used by text dumps.
    pub const fn symbol(self) -> char {
        match self {
            GridCell::Empty => '.',
            GridCell::Obstacle => '#',
            GridCell::Mapped => 'x',
            GridCell::RobotOccupied => 'o',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(GridCell::Empty),
            '#' => Some(GridCell::Obstacle),
            'x' => Some(GridCell::Mapped),
            'o' => Some(GridCell::RobotOccupied),
            _ => None,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for GridCell {
    type Err = DishaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" | "." => Ok(GridCell::Empty),
            "obstacle" | "#" => Ok(GridCell::Obstacle),
            "mapped" | "x" => Ok(GridCell::Mapped),
            "robot" | "o" => Ok(GridCell::RobotOccupied),
            other => Err(DishaError::Command(format!("unknown cell value '{}'", other))),
        }
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub empty: usize,
    pub obstacle: usize,
    pub mapped: usize,
    pub robot: usize,
}

impl CellCounts {
    /// Obstacles, seen or not.
    pub fn obstacles(&self) -> usize {
        self.obstacle + self.mapped
    }

    pub fn total(&self) -> usize {
        self.empty + self.obstacle + self.mapped + self.robot
    }
}
