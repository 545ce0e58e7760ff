//! Real-valued arena points and heading helpers.

use super::GridCoord;

/// Point in arena coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point `distance` away along `heading`.
    #[inline]
    pub fn along(self, heading: f32, distance: f32) -> Self {
        let (dx, dy) = unit_vector(heading);
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }
}

/// Unit vector `(cos θ, sin θ)` for a heading.
#[inline]
pub fn unit_vector(heading: f32) -> (f32, f32) {
    (heading.cos(), heading.sin())
}

/// Heading unit vector rounded to the nearest integer cell offset.
///
/// Never `(0, 0)`: at least one component of a unit vector has magnitude
/// `>= 1/√2`, which rounds away from zero.
#[inline]
pub fn heading_offset(heading: f32) -> GridCoord {
    let (dx, dy) = unit_vector(heading);
    GridCoord::new(dx.round() as i32, dy.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_along() {
        let p = WorldPoint::new(100.0, 100.0).along(0.0, 10.0);
        assert_relative_eq!(p.x, 110.0);
        assert_relative_eq!(p.y, 100.0);

        let p = WorldPoint::new(0.0, 0.0).along(FRAC_PI_2, 2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_heading_offset() {
        assert_eq!(heading_offset(0.0), GridCoord::new(1, 0));
        assert_eq!(heading_offset(FRAC_PI_2), GridCoord::new(0, 1));
        assert_eq!(heading_offset(PI), GridCoord::new(-1, 0));
        assert_eq!(heading_offset(-FRAC_PI_2), GridCoord::new(0, -1));
        assert_eq!(heading_offset(FRAC_PI_4), GridCoord::new(1, 1));
        // Unbounded headings wrap through the trig functions
        assert_eq!(heading_offset(2.0 * PI + FRAC_PI_2), GridCoord::new(0, 1));
    }
}
