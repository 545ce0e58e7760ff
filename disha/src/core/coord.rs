//! Integer cell coordinates.

use std::fmt;
use std::ops::Add;

/// Cell on the discrete lattice.
///
/// Signed so that candidate positions one step outside the lattice can be
/// represented and rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticeCoord {
    pub row: i32,
    pub col: i32,
}

impl LatticeCoord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cell index in the coarse occupancy grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    #[inline]
    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
