//! Square-footprint robot moving one lattice cell per command.

use crate::core::{Direction, LatticeCoord};
use crate::error::{DishaError, Result};

use super::cell::GridCell;
use super::map::CellMap;

/// Why a move was refused.
///
/// Both causes leave the robot and the lattice untouched; callers that only
/// care about "did it move" can ignore the distinction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The candidate footprint would leave the lattice
    OutOfBounds,
    /// A leading-edge cell of the candidate footprint is an obstacle
    Obstacle(LatticeCoord),
}

/// Result of [`GridRobot::try_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The footprint moved; `mapped` lists obstacles newly marked Mapped.
    Moved {
        from: LatticeCoord,
        to: LatticeCoord,
        mapped: Vec<LatticeCoord>,
    },
    /// Nothing changed.
    Blocked(BlockReason),
}

impl MoveOutcome {
    #[inline]
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked(_))
    }

    /// Obstacles mapped by this move (empty when blocked).
    pub fn mapped(&self) -> &[LatticeCoord] {
        match self {
            MoveOutcome::Moved { mapped, .. } => mapped,
            MoveOutcome::Blocked(_) => &[],
        }
    }
}

/// Robot occupying a `footprint × footprint` block centred on `centre`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRobot {
    centre: LatticeCoord,
    footprint: usize,
    half: i32,
    heading: Direction,
}

impl GridRobot {
    /// Create a robot; `footprint` must be odd so the block has a centre cell.
    pub fn new(centre: LatticeCoord, footprint: usize) -> Result<Self> {
        if footprint % 2 == 0 {
            return Err(DishaError::Config(format!(
                "footprint must be odd, got {}",
                footprint
            )));
        }
        Ok(Self {
            centre,
            footprint,
            half: (footprint / 2) as i32,
            heading: Direction::Up,
        })
    }

    #[inline]
    pub fn centre(&self) -> LatticeCoord {
        self.centre
    }

    #[inline]
    pub fn footprint(&self) -> usize {
        self.footprint
    }

    /// Direction of the last successful move.
    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Whether `coord` lies under the current footprint.
    pub fn occupies(&self, coord: LatticeCoord) -> bool {
        (coord.row - self.centre.row).abs() <= self.half
            && (coord.col - self.centre.col).abs() <= self.half
    }

    /// Cells of a footprint centred on `centre`, row-major.
    pub fn footprint_cells(&self, centre: LatticeCoord) -> impl Iterator<Item = LatticeCoord> {
        let half = self.half;
        (-half..=half).flat_map(move |dr| (-half..=half).map(move |dc| centre.offset(dr, dc)))
    }

    /// Whether a footprint centred on `centre` lies fully inside a lattice of `size`.
    pub fn fits(&self, centre: LatticeCoord, size: usize) -> bool {
        let n = size as i32;
        centre.row - self.half >= 0
            && centre.row + self.half < n
            && centre.col - self.half >= 0
            && centre.col + self.half < n
    }

    /// Stamp the current footprint onto the lattice as `RobotOccupied`.
    pub fn place<M: CellMap + ?Sized>(&self, map: &mut M) {
        self.fill(map, self.centre, GridCell::RobotOccupied);
    }

    /// Move the footprint to `centre` without collision checks or mapping.
    ///
    /// Used when re-seating the robot after the lattice is reset.
    pub fn relocate<M: CellMap + ?Sized>(&mut self, map: &mut M, centre: LatticeCoord) {
        self.fill(map, self.centre, GridCell::Empty);
        self.centre = centre;
        self.heading = Direction::Up;
        self.fill(map, self.centre, GridCell::RobotOccupied);
    }

    fn fill<M: CellMap + ?Sized>(&self, map: &mut M, centre: LatticeCoord, cell: GridCell) {
        for coord in self.footprint_cells(centre) {
            map.set(coord, cell);
        }
    }

    /// Cells along the side of a footprint centred on `centre` that faces `dir`.
    fn leading_edge(&self, centre: LatticeCoord, dir: Direction) -> Vec<LatticeCoord> {
        let (dr, dc) = dir.delta();
        (-self.half..=self.half)
            .map(|i| {
                if dr != 0 {
                    centre.offset(dr * self.half, i)
                } else {
                    centre.offset(i, dc * self.half)
                }
            })
            .collect()
    }

    /// Cells one step beyond each of the four edges of a footprint at `centre`.
    fn perimeter(&self, centre: LatticeCoord) -> Vec<LatticeCoord> {
        let out = self.half + 1;
        let mut cells = Vec::with_capacity(4 * self.footprint);
        for i in -self.half..=self.half {
            cells.push(centre.offset(-out, i));
            cells.push(centre.offset(out, i));
            cells.push(centre.offset(i, -out));
            cells.push(centre.offset(i, out));
        }
        cells
    }

    /// Shift the footprint one cell in `dir`.
    ///
    /// Rejected without side effects when the candidate footprint leaves the
    /// lattice or its leading edge hits a blocking cell. On success the old
    /// footprint is cleared, the new one stamped, and every `Obstacle` one
    /// step past the new footprint's edges is rewritten `Mapped`.
    pub fn try_move<M: CellMap + ?Sized>(&mut self, map: &mut M, dir: Direction) -> MoveOutcome {
        let (dr, dc) = dir.delta();
        let candidate = self.centre.offset(dr, dc);

        if !self.fits(candidate, map.size()) {
            return MoveOutcome::Blocked(BlockReason::OutOfBounds);
        }

        if let Some(hit) = self
            .leading_edge(candidate, dir)
            .into_iter()
            .find(|&c| map.get(c).is_some_and(GridCell::is_blocking))
        {
            return MoveOutcome::Blocked(BlockReason::Obstacle(hit));
        }

        let from = self.centre;
        self.fill(map, from, GridCell::Empty);
        self.centre = candidate;
        self.heading = dir;
        self.fill(map, candidate, GridCell::RobotOccupied);

        let mut mapped = Vec::new();
        for coord in self.perimeter(candidate) {
            if map.get(coord) == Some(GridCell::Obstacle) {
                map.set(coord, GridCell::Mapped);
                mapped.push(coord);
            }
        }

        MoveOutcome::Moved {
            from,
            to: candidate,
            mapped,
        }
    }
}
