//! Arena rectangle and the clamping signal.

use crate::core::WorldPoint;

/// Axis-aligned arena `[0, width] × [0, height]`; its walls are the only obstacles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn centre(&self) -> WorldPoint {
        WorldPoint::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    /// Strictly inside the walls; a point on a wall is outside.
    #[inline]
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }
}

/// Whether a position write was stored as requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clamp {
    Exact,
    /// The value was pulled back inside the legal range
    Clamped,
}

impl Clamp {
    /// Clamp `value` into `[min, max]`.
    ///
    /// NaN has no place in the range, so `current` is kept instead.
    #[inline]
    pub fn apply(current: f32, value: f32, min: f32, max: f32) -> (f32, Clamp) {
        if value.is_nan() {
            return (current, Clamp::Clamped);
        }
        let stored = value.clamp(min, max);
        let signal = if stored == value {
            Clamp::Exact
        } else {
            Clamp::Clamped
        };
        (stored, signal)
    }

    #[inline]
    pub fn is_clamped(self) -> bool {
        self == Clamp::Clamped
    }

    /// Combine the signals of two axis writes.
    #[inline]
    pub fn or(self, other: Clamp) -> Clamp {
        if self.is_clamped() || other.is_clamped() {
            Clamp::Clamped
        } else {
            Clamp::Exact
        }
    }
}
