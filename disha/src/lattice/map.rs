//! Lattice storage and the cell access capability handed to the robot.

use std::fmt;

use crate::core::LatticeCoord;

use super::cell::{CellCounts, GridCell};

/// Read/write access to lattice cells.
///
/// The grid robot never owns the lattice; callers pass a `CellMap` into every
/// operation that reads or writes cells.
pub trait CellMap {
    /// Cells per side.
    fn size(&self) -> usize;

    /// Cell state, or `None` outside the lattice.
    fn get(&self, coord: LatticeCoord) -> Option<GridCell>;

    /// Overwrite a cell. Returns `false` (and does nothing) outside the lattice.
    fn set(&mut self, coord: LatticeCoord, cell: GridCell) -> bool;

    #[inline]
    fn contains(&self, coord: LatticeCoord) -> bool {
        let n = self.size() as i32;
        (0..n).contains(&coord.row) && (0..n).contains(&coord.col)
    }
}

/// Dense row-major square lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeMap {
    size: usize,
    cells: Vec<GridCell>,
}

impl LatticeMap {
    /// All-empty `size × size` lattice.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![GridCell::Empty; size * size],
        }
    }

    /// Parse a text dump (one row per line, symbols optionally space separated).
    ///
    /// Returns `None` for ragged or non-square input or unknown symbols.
    pub fn from_rows(text: &str) -> Option<Self> {
        let rows: Vec<Vec<GridCell>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(GridCell::from_symbol)
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<_>>()?;

        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(GridCell::Empty);
    }

    #[inline]
    fn index(&self, coord: LatticeCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Coordinates of every cell in the given state.
    pub fn find(&self, wanted: GridCell) -> Vec<LatticeCoord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == wanted)
            .map(|(i, _)| LatticeCoord::new((i / self.size) as i32, (i % self.size) as i32))
            .collect()
    }

    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                GridCell::Empty => counts.empty += 1,
                GridCell::Obstacle => counts.obstacle += 1,
                GridCell::Mapped => counts.mapped += 1,
                GridCell::RobotOccupied => counts.robot += 1,
            }
        }
        counts
    }
}

impl CellMap for LatticeMap {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, coord: LatticeCoord) -> Option<GridCell> {
        self.index(coord).map(|i| self.cells[i])
    }

    #[inline]
    fn set(&mut self, coord: LatticeCoord, cell: GridCell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }
}

/// One row per line, cells separated by spaces.
impl fmt::Display for LatticeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
