//! Core geometry types shared by both robot models.
//!
//! ## Coordinates
//!
//! - [`LatticeCoord`]: `(row, col)` cell on the discrete lattice. Rows grow
//!   downwards, so `up` decrements the row.
//! - [`GridCoord`]: `(x, y)` index into the coarse occupancy grid.
//! - [`WorldPoint`]: real-valued arena position.
//!
//! Headings follow the ROS REP-103 convention used across the arena code:
//! radians, counter-clockwise positive from +X.

mod coord;
mod direction;
mod point;

pub use coord::{GridCoord, LatticeCoord};
pub use direction::Direction;
pub use point::{WorldPoint, heading_offset, unit_vector};
