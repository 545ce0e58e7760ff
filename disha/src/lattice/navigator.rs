//! Lattice + robot composition with authoring operations.

use crate::core::{Direction, LatticeCoord};
use crate::error::{DishaError, Result};

use super::cell::GridCell;
use super::map::{CellMap, LatticeMap};
use super::robot::{GridRobot, MoveOutcome};

/// Why an authoring edit was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditRejection {
    /// The cell is under the robot footprint
    UnderRobot,
    /// The cell is outside the lattice
    OutOfBounds,
    /// `RobotOccupied` cannot be authored directly
    ReservedState,
}

/// Result of an authoring edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellEdit {
    /// The cell now holds this value
    Applied(GridCell),
    Rejected(EditRejection),
}

impl CellEdit {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, CellEdit::Applied(_))
    }
}

/// Read-only view of the navigator handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeSnapshot {
    pub map: LatticeMap,
    pub robot: LatticeCoord,
    pub heading: Direction,
}

/// Discrete grid navigator: a lattice and the robot driving on it.
#[derive(Clone, Debug)]
pub struct GridNavigator<M: CellMap = LatticeMap> {
    map: M,
    robot: GridRobot,
    home: LatticeCoord,
}

impl GridNavigator<LatticeMap> {
    /// Empty `size × size` lattice with the robot at its centre.
    pub fn new(size: usize, footprint: usize) -> Result<Self> {
        Self::with_map(LatticeMap::new(size), footprint)
    }

    /// Reset every cell outside the robot footprint to `Empty`.
    pub fn clear(&mut self) {
        self.map.clear();
        self.robot.place(&mut self.map);
        tracing::debug!("Lattice cleared");
    }

    /// [`clear`](Self::clear) and re-seat the robot at the centre facing up.
    pub fn reset(&mut self) {
        self.map.clear();
        self.robot.relocate(&mut self.map, self.home);
        tracing::debug!("Lattice reset, robot re-seated at {}", self.home);
    }

    pub fn snapshot(&self) -> LatticeSnapshot {
        LatticeSnapshot {
            map: self.map.clone(),
            robot: self.robot.centre(),
            heading: self.robot.heading(),
        }
    }
}

impl<M: CellMap> GridNavigator<M> {
    /// Wrap an existing lattice and place the robot at its centre.
    ///
    /// Fails when the footprint is even, does not fit, or would overlap an
    /// obstacle already authored at the centre.
    pub fn with_map(mut map: M, footprint: usize) -> Result<Self> {
        let mid = (map.size() / 2) as i32;
        let home = LatticeCoord::new(mid, mid);
        let robot = GridRobot::new(home, footprint)?;

        if !robot.fits(home, map.size()) {
            return Err(DishaError::Config(format!(
                "footprint {} does not fit a {}x{} lattice",
                footprint,
                map.size(),
                map.size()
            )));
        }
        if let Some(c) = robot
            .footprint_cells(home)
            .find(|&c| map.get(c).is_some_and(GridCell::is_blocking))
        {
            return Err(DishaError::Config(format!(
                "start footprint overlaps obstacle at {}",
                c
            )));
        }

        robot.place(&mut map);
        Ok(Self { map, robot, home })
    }

    #[inline]
    pub fn map(&self) -> &M {
        &self.map
    }

    #[inline]
    pub fn robot(&self) -> &GridRobot {
        &self.robot
    }

    /// Write a cell directly. Ignored under the robot footprint.
    pub fn set_cell(&mut self, coord: LatticeCoord, value: GridCell) -> CellEdit {
        if !self.map.contains(coord) {
            return CellEdit::Rejected(EditRejection::OutOfBounds);
        }
        if self.robot.occupies(coord) {
            return CellEdit::Rejected(EditRejection::UnderRobot);
        }
        if value == GridCell::RobotOccupied {
            return CellEdit::Rejected(EditRejection::ReservedState);
        }
        self.map.set(coord, value);
        CellEdit::Applied(value)
    }

    /// Pointer-style toggle: `Empty` → `Obstacle`, any obstacle → `Empty`.
    pub fn toggle_cell(&mut self, coord: LatticeCoord) -> CellEdit {
        let next = match self.map.get(coord) {
            Some(cell) if cell.is_blocking() => GridCell::Empty,
            Some(_) => GridCell::Obstacle,
            None => return CellEdit::Rejected(EditRejection::OutOfBounds),
        };
        self.set_cell(coord, next)
    }

    /// Drive the robot one cell in `dir`.
    pub fn move_robot(&mut self, dir: Direction) -> MoveOutcome {
        let outcome = self.robot.try_move(&mut self.map, dir);
        match &outcome {
            MoveOutcome::Moved { to, mapped, .. } => {
                tracing::debug!("Moved {} to {}", dir, to);
                for c in mapped {
                    tracing::debug!("Mapped obstacle at {}", c);
                }
            }
            MoveOutcome::Blocked(reason) => {
                tracing::trace!("Move {} blocked: {:?}", dir, reason);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_robot_at_centre() {
        let nav = GridNavigator::new(25, 3).unwrap();
        assert_eq!(nav.robot().centre(), LatticeCoord::new(12, 12));
        assert_eq!(nav.map().counts().robot, 9);
    }

    #[test]
    fn test_new_rejects_bad_footprint() {
        assert!(GridNavigator::new(25, 4).is_err());
        assert!(GridNavigator::new(2, 3).is_err());
    }

    #[test]
    fn test_with_map_rejects_obstacle_at_start() {
        let map = LatticeMap::from_rows(".....\n.....\n..#..\n.....\n.....").unwrap();
        assert!(GridNavigator::with_map(map, 3).is_err());
    }

    #[test]
    fn test_set_cell_under_robot_is_ignored() {
        let mut nav = GridNavigator::new(9, 3).unwrap();
        let before = nav.map().clone();

        assert_eq!(
            nav.set_cell(LatticeCoord::new(4, 5), GridCell::Obstacle),
            CellEdit::Rejected(EditRejection::UnderRobot)
        );
        assert_eq!(nav.map(), &before);
    }

    #[test]
    fn test_set_cell_rejections() {
        let mut nav = GridNavigator::new(9, 3).unwrap();
        assert_eq!(
            nav.set_cell(LatticeCoord::new(9, 0), GridCell::Obstacle),
            CellEdit::Rejected(EditRejection::OutOfBounds)
        );
        assert_eq!(
            nav.set_cell(LatticeCoord::new(0, 0), GridCell::RobotOccupied),
            CellEdit::Rejected(EditRejection::ReservedState)
        );
        assert_eq!(
            nav.set_cell(LatticeCoord::new(0, 0), GridCell::Obstacle),
            CellEdit::Applied(GridCell::Obstacle)
        );
    }

    #[test]
    fn test_toggle_cell() {
        let mut nav = GridNavigator::new(9, 3).unwrap();
        let c = LatticeCoord::new(0, 8);

        assert_eq!(nav.toggle_cell(c), CellEdit::Applied(GridCell::Obstacle));
        assert_eq!(nav.toggle_cell(c), CellEdit::Applied(GridCell::Empty));

        nav.set_cell(c, GridCell::Mapped);
        assert_eq!(nav.toggle_cell(c), CellEdit::Applied(GridCell::Empty));
        assert!(!nav.toggle_cell(LatticeCoord::new(4, 4)).is_applied());
    }

    #[test]
    fn test_clear_keeps_robot_in_place() {
        let mut nav = GridNavigator::new(9, 3).unwrap();
        nav.set_cell(LatticeCoord::new(0, 0), GridCell::Obstacle);
        nav.set_cell(LatticeCoord::new(8, 8), GridCell::Mapped);
        nav.move_robot(Direction::Down);

        nav.clear();

        assert_eq!(nav.robot().centre(), LatticeCoord::new(5, 4));
        assert_eq!(nav.robot().heading(), Direction::Down);
        let counts = nav.map().counts();
        assert_eq!(counts.obstacles(), 0);
        assert_eq!(counts.robot, 9);
        assert_eq!(nav.map().get(LatticeCoord::new(6, 4)), Some(GridCell::RobotOccupied));
    }

    #[test]
    fn test_reset_restores_lattice_and_robot() {
        let mut nav = GridNavigator::new(9, 3).unwrap();
        nav.set_cell(LatticeCoord::new(0, 0), GridCell::Obstacle);
        nav.move_robot(Direction::Down);
        nav.move_robot(Direction::Right);

        nav.reset();

        let snapshot = nav.snapshot();
        assert_eq!(snapshot.robot, LatticeCoord::new(4, 4));
        assert_eq!(snapshot.heading, Direction::Up);
        let counts = snapshot.map.counts();
        assert_eq!(counts.obstacles(), 0);
        assert_eq!(counts.robot, 9);
        assert_eq!(counts.empty, 81 - 9);
    }
}
