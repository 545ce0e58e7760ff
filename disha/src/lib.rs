//! Disha - grid and continuous exploration robots
//!
//! Two independent robot models sharing one configuration layer:
//!
//! - [`lattice`]: a square-footprint robot on a cell lattice that marks the
//!   obstacles it sweeps past as mapped
//! - [`arena`]: a disc robot with a clamped real-valued pose and a forward
//!   ray-march range sensor
//! - [`explore`]: a wall-following explorer for the disc robot that records
//!   visited regions into a coarse occupancy grid
//!
//! Nothing here draws. Every state change hands a read-only snapshot to a
//! [`RenderSink`], which the binary implements with plain text output.

pub mod arena;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod explore;
pub mod lattice;
pub mod session;

// Re-export commonly used types
pub use arena::{Arena, Clamp, ContinuousRobot, RobotSnapshot};
pub use command::{DriveCommand, LatticeCommand};
pub use config::DishaConfig;
pub use core::{Direction, GridCoord, LatticeCoord, WorldPoint};
pub use error::{DishaError, Result};
pub use explore::{ExplorationTask, Explorer, FrameBuffer, RenderSink, StopSignal};
pub use lattice::{GridCell, GridNavigator, LatticeSnapshot};
pub use session::{DriveSession, LatticeSession};
