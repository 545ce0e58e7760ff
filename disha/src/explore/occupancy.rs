//! Coarse visited/unvisited grid over the arena.

use std::fmt;

use crate::arena::Arena;
use crate::core::{GridCoord, WorldPoint};
use crate::error::{DishaError, Result};

/// Upper bound on coarse cells (2048 × 2048).
pub const MAX_GRID_CELLS: usize = 1 << 22;

/// Visited flags for square cells of `cell_size` covering the arena.
///
/// Cells only ever go from unvisited to visited.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    visited: Vec<bool>,
    /// Shown as `@` in the text dump
    cursor: Option<GridCoord>,
}

impl OccupancyGrid {
    /// Grid of `ceil(width / cell_size) × ceil(height / cell_size)` cells.
    ///
    /// Fails for non-finite or non-positive sizes and for grids larger than
    /// [`MAX_GRID_CELLS`].
    pub fn new(arena: &Arena, cell_size: f32) -> Result<Self> {
        let (width, height) = Self::dimensions(arena, cell_size)?;
        Ok(Self {
            width,
            height,
            cell_size,
            visited: vec![false; width * height],
            cursor: None,
        })
    }

    /// `(width, height)` in cells that [`new`](Self::new) would allocate.
    pub fn dimensions(arena: &Arena, cell_size: f32) -> Result<(usize, usize)> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(DishaError::Config(format!(
                "cell size must be finite and positive, got {}",
                cell_size
            )));
        }
        let cells_along = |extent: f32| -> Result<usize> {
            let n = (extent / cell_size).ceil();
            if !n.is_finite() || n < 1.0 || n > MAX_GRID_CELLS as f32 {
                return Err(DishaError::Config(format!(
                    "arena extent {} cannot be split into cells of {}",
                    extent, cell_size
                )));
            }
            Ok(n as usize)
        };
        let width = cells_along(arena.width())?;
        let height = cells_along(arena.height())?;
        match width.checked_mul(height) {
            Some(total) if total <= MAX_GRID_CELLS => Ok((width, height)),
            _ => Err(DishaError::Config(format!(
                "occupancy grid of {}x{} cells exceeds {} cells",
                width, height, MAX_GRID_CELLS
            ))),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cell containing `point` (floor division, may be outside the grid).
    pub fn coord_of(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            (point.x / self.cell_size).floor() as i32,
            (point.y / self.cell_size).floor() as i32,
        )
    }

    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width + coord.x as usize)
    }

    /// `None` outside the grid.
    pub fn is_visited(&self, coord: GridCoord) -> Option<bool> {
        self.index(coord).map(|i| self.visited[i])
    }

    /// True only for in-grid cells not yet visited.
    pub fn is_unvisited(&self, coord: GridCoord) -> bool {
        self.is_visited(coord) == Some(false)
    }

    /// Mark a cell visited. Returns true if it was newly marked.
    pub fn mark_visited(&mut self, coord: GridCoord) -> bool {
        match self.index(coord) {
            Some(i) if !self.visited[i] => {
                self.visited[i] = true;
                true
            }
            _ => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    pub fn set_cursor(&mut self, cursor: GridCoord) {
        self.cursor = Some(cursor);
    }

    pub fn cursor(&self) -> Option<GridCoord> {
        self.cursor
    }
}

impl fmt::Display for OccupancyGrid {
    /// Top row is the highest `y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let coord = GridCoord::new(x as i32, y as i32);
                let symbol = if self.cursor == Some(coord) {
                    '@'
                } else if self.visited[y * self.width + x] {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_round_up() {
        let grid = OccupancyGrid::new(&Arena::new(200.0, 95.0), 10.0).unwrap();
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        let arena = Arena::new(200.0, 200.0);
        for cell in [0.0, -1.0, f32::NAN, f32::INFINITY, 1e-4] {
            assert!(OccupancyGrid::new(&arena, cell).is_err(), "cell {cell}");
        }
        assert!(OccupancyGrid::new(&Arena::new(f32::INFINITY, 200.0), 10.0).is_err());
        assert!(OccupancyGrid::new(&Arena::new(f32::NAN, 200.0), 10.0).is_err());
        assert!(OccupancyGrid::new(&Arena::new(2048.0, 2048.0), 1.0).is_ok());
    }

    #[test]
    fn test_coord_of() {
        let grid = OccupancyGrid::new(&Arena::new(200.0, 200.0), 10.0).unwrap();
        assert_eq!(grid.coord_of(WorldPoint::new(100.0, 100.0)), GridCoord::new(10, 10));
        assert_eq!(grid.coord_of(WorldPoint::new(9.9, 0.0)), GridCoord::new(0, 0));
    }

    #[test]
    fn test_outside_cells_are_never_unvisited() {
        let mut grid = OccupancyGrid::new(&Arena::new(30.0, 30.0), 10.0).unwrap();
        let outside = GridCoord::new(3, 0);
        assert_eq!(grid.is_visited(outside), None);
        assert!(!grid.is_unvisited(outside));
        assert!(!grid.mark_visited(outside));
        assert!(!grid.mark_visited(GridCoord::new(-1, 1)));
    }

    #[test]
    fn test_mark_visited_once() {
        let mut grid = OccupancyGrid::new(&Arena::new(30.0, 30.0), 10.0).unwrap();
        let c = GridCoord::new(1, 2);
        assert!(grid.is_unvisited(c));
        assert!(grid.mark_visited(c));
        assert!(!grid.mark_visited(c));
        assert_eq!(grid.is_visited(c), Some(true));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn test_text_dump() {
        let mut grid = OccupancyGrid::new(&Arena::new(30.0, 20.0), 10.0).unwrap();
        grid.mark_visited(GridCoord::new(0, 0));
        grid.set_cursor(GridCoord::new(1, 0));
        assert_eq!(grid.to_string(), "...\n#@.\n");
    }
}
