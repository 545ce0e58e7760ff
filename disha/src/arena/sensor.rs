//! Forward range sensor.

use crate::core::{WorldPoint, unit_vector};

use super::bounds::Arena;

/// Count unit steps from `origin` along `heading` until the point leaves the arena.
///
/// The count is the contract, fencepost included: an origin already on or
/// past a wall reads 0, and an origin 90 units from the wall reads 90. No
/// reading exceeds the arena diagonal.
pub fn ray_march(arena: &Arena, origin: WorldPoint, heading: f32) -> u32 {
    let (dx, dy) = unit_vector(heading);
    let limit = arena.diagonal().ceil() as u32 + 1;

    let mut p = origin;
    let mut steps = 0;
    while steps < limit && arena.contains(p) {
        p.x += dx;
        p.y += dy;
        steps += 1;
    }
    steps
}
