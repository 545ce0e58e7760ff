//! Autonomous wall-following explorer.
//!
//! The explorer drives a [`ContinuousRobot`](crate::arena::ContinuousRobot)
//! forward while the sensor reports clearance and the coarse cell ahead has
//! not been visited, and turns left in place otherwise. Every
//! `commit_distance` of forward travel it records its cursor cell in an
//! [`OccupancyGrid`].
//!
//! ## State Machine
//!
//! ```text
//!            clearance ≤ threshold
//!            or cell ahead visited
//!  ┌───────────┐ ──────────────────▶ ┌─────────┐
//!  │ Advancing │                     │ Evading │
//!  └───────────┘ ◀────────────────── └─────────┘
//!                 rotation finished
//! ```
//!
//! The cursor is a coarse grid index that starts at the robot's cell and then
//! only moves by rounded heading offsets, so it can drift from the robot's
//! true position.
//!
//! [`ExplorationTask`] wraps the explorer in a cancellable loop that can run on
//! its own thread.

mod explorer;
mod occupancy;
mod task;

pub use explorer::{ExplorationStep, Explorer, ExplorerConfig, ExplorerState, StepAction};
pub use occupancy::{MAX_GRID_CELLS, OccupancyGrid};
pub use task::{
    ExplorationFrame, ExplorationTask, FrameBuffer, RenderSink, StopReason, StopSignal, TaskSummary,
    TaskTiming,
};
