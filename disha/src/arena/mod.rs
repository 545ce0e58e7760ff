//! Continuous exploration robot.
//!
//! A disc-shaped robot with a real-valued pose inside a rectangular
//! [`Arena`]. Position writes are clamped so the body never crosses a wall;
//! the forward range sensor ray-marches from the body edge to the boundary.
//!
//! ```text
//!  (0,h) ┌──────────────────────────┐ (w,h)
//!        │                          │
//!        │      ╭───╮               │
//!        │      │ ● ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┤  sensor = unit steps to the wall
//!        │      ╰───╯               │
//!        │                          │
//!  (0,0) └──────────────────────────┘ (w,0)
//! ```
//!
//! Rotations are not instantaneous: [`ContinuousRobot::turn_left`] arms a
//! [`Rotation`] that [`ContinuousRobot::tick`] advances one sub-step at a time,
//! so the host can render and handle input between sub-steps.

mod bounds;
mod robot;
mod rotation;
mod sensor;

pub use bounds::{Arena, Clamp};
pub use robot::{ContinuousRobot, RobotSnapshot, RotationTick};
pub use rotation::{DEFAULT_ROTATION_STEPS, Rotation};
pub use sensor::ray_march;
