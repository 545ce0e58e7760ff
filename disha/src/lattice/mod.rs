//! Discrete grid navigator.
//!
//! A square lattice of [`GridCell`]s and a robot with a square footprint that
//! moves one cell per command.
//!
//! ```text
//!   . . . . . . .        . . . . . . .
//!   . . # . . . .        . . x . . . .
//!   . . . o o o .  left  . . o o o . .
//!   . . . o o o .  ───▶  . . o o o . .
//!   . . . o o o .        . . o o o . .
//!   . . . . . . .        . . . . . . .
//! ```
//!
//! After the move the obstacle at `(1, 2)` sits one step past the top edge of
//! the footprint and becomes `Mapped` (`x`).
//!
//! ## Key Components
//!
//! - [`CellMap`]: read/write capability over lattice cells
//! - [`LatticeMap`]: dense `CellMap` implementation
//! - [`GridRobot`]: footprint geometry, collision checks and edge mapping
//! - [`GridNavigator`]: lattice + robot with the authoring operations

mod cell;
mod map;
mod navigator;
mod robot;

pub use cell::{CellCounts, GridCell};
pub use map::{CellMap, LatticeMap};
pub use navigator::{CellEdit, EditRejection, GridNavigator, LatticeSnapshot};
pub use robot::{BlockReason, GridRobot, MoveOutcome};
