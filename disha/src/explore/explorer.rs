//! Wall-following decision loop.

use crate::arena::{Clamp, ContinuousRobot, RotationTick};
use crate::core::{GridCoord, heading_offset};
use crate::error::{DishaError, Result};

use super::occupancy::OccupancyGrid;

/// Explorer decision parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
    /// Advance only while the sensor reads strictly more than this
    pub clearance_threshold: u32,
    /// Evasive left turn (degrees)
    pub turn_degrees: f32,
    /// Forward travel between cursor commits (robot radius if unset)
    pub commit_distance: Option<f32>,
    /// Coarse cell edge length (robot radius if unset)
    pub cell_size: Option<f32>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            clearance_threshold: 5,
            turn_degrees: 90.0,
            commit_distance: None,
            cell_size: None,
        }
    }
}

/// Explorer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplorerState {
    /// Driving forward
    #[default]
    Advancing,
    /// Rotating in place
    Evading,
}

/// What one [`Explorer::step`] did to the robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepAction {
    /// Moved forward; `committed` is the cell recorded on this step, if any
    Advanced {
        clamp: Clamp,
        committed: Option<GridCoord>,
    },
    /// Blocked; an evasive turn was armed
    TurnStarted,
    /// Applied one rotation sub-step, more remain
    Turning { remaining_steps: u32 },
    /// Applied the last rotation sub-step
    TurnFinished,
}

impl StepAction {
    /// Whether a rotation sub-step was applied.
    #[inline]
    pub fn rotated(&self) -> bool {
        matches!(self, StepAction::Turning { .. } | StepAction::TurnFinished)
    }
}

/// Result of one explorer iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorationStep {
    pub action: StepAction,
    /// State after the step
    pub state: ExplorerState,
}

/// Autonomous explorer.
///
/// Owns its decision state and occupancy grid; the robot is borrowed per
/// step so the caller keeps ownership of it.
#[derive(Clone, Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    commit_distance: f32,
    state: ExplorerState,
    cursor: GridCoord,
    /// Forward travel since the last commit
    travelled: f32,
    grid: OccupancyGrid,
}

impl Explorer {
    /// Explorer with an empty grid and the cursor on the robot's cell.
    pub fn new(config: ExplorerConfig, robot: &ContinuousRobot) -> Result<Self> {
        let cell_size = config.cell_size.unwrap_or(robot.radius());
        let commit_distance = config.commit_distance.unwrap_or(robot.radius());
        if !commit_distance.is_finite() || commit_distance <= 0.0 {
            return Err(DishaError::Config(format!(
                "commit distance must be finite and positive, got {}",
                commit_distance
            )));
        }
        if !config.turn_degrees.is_finite() || config.turn_degrees <= 0.0 {
            return Err(DishaError::Config(format!(
                "evasive turn must be finite and positive, got {}",
                config.turn_degrees
            )));
        }
        let mut grid = OccupancyGrid::new(robot.arena(), cell_size)?;
        let cursor = grid.coord_of(robot.position());
        grid.set_cursor(cursor);

        tracing::debug!(
            "Explorer grid {}x{} (cell {:.1}), cursor {}",
            grid.width(),
            grid.height(),
            cell_size,
            cursor
        );

        Ok(Self {
            config,
            commit_distance,
            state: ExplorerState::Advancing,
            cursor,
            travelled: 0.0,
            grid,
        })
    }

    #[inline]
    pub fn state(&self) -> ExplorerState {
        self.state
    }

    #[inline]
    pub fn cursor(&self) -> GridCoord {
        self.cursor
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn commit_distance(&self) -> f32 {
        self.commit_distance
    }

    /// Run one iteration of the decision loop.
    pub fn step(&mut self, robot: &mut ContinuousRobot) -> ExplorationStep {
        let action = match self.state {
            ExplorerState::Advancing => self.advance(robot),
            ExplorerState::Evading => self.evade(robot),
        };
        ExplorationStep {
            action,
            state: self.state,
        }
    }

    fn advance(&mut self, robot: &mut ContinuousRobot) -> StepAction {
        let clearance = robot.sensor();
        let offset = heading_offset(robot.heading());
        let ahead = self.cursor + offset;

        if clearance <= self.config.clearance_threshold || !self.grid.is_unvisited(ahead) {
            tracing::debug!(
                "Evading at ({:.1}, {:.1}): clearance {}, cell {} ahead",
                robot.x(),
                robot.y(),
                clearance,
                ahead
            );
            robot.turn_left(self.config.turn_degrees);
            self.state = ExplorerState::Evading;
            return StepAction::TurnStarted;
        }

        let clamp = robot.move_forward();
        self.travelled += robot.speed();

        let mut committed = None;
        if self.travelled >= self.commit_distance {
            self.travelled = 0.0;
            if self.grid.mark_visited(self.cursor) {
                tracing::debug!("Visited {}", self.cursor);
            }
            committed = Some(self.cursor);
            self.cursor = ahead;
            self.grid.set_cursor(ahead);
        }

        StepAction::Advanced { clamp, committed }
    }

    fn evade(&mut self, robot: &mut ContinuousRobot) -> StepAction {
        match robot.tick() {
            RotationTick::Turning { remaining_steps } => StepAction::Turning { remaining_steps },
            RotationTick::Finished | RotationTick::Idle => {
                self.state = ExplorerState::Advancing;
                StepAction::TurnFinished
            }
        }
    }
}
