//! Smooth in-place rotation as a finite state machine.

/// Sub-steps per commanded rotation unless configured otherwise.
pub const DEFAULT_ROTATION_STEPS: u32 = 100;

/// A commanded rotation split into equal sub-steps.
///
/// Each [`advance`](Rotation::advance) yields the angle for one sub-step. The
/// last sub-step returns whatever angle is left, so the yielded angles always
/// sum to the commanded total.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    step_angle: f32,
    total_steps: u32,
    steps_taken: u32,
    remaining: f32,
}

impl Rotation {
    /// Rotate by `angle` radians (CCW positive) over `steps` sub-steps.
    pub fn new(angle: f32, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            step_angle: angle / steps as f32,
            total_steps: steps,
            steps_taken: 0,
            remaining: angle,
        }
    }

    pub fn from_degrees(degrees: f32, steps: u32) -> Self {
        Self::new(degrees.to_radians(), steps)
    }

    /// Angle of the next sub-step, or `None` once all sub-steps are spent.
    pub fn advance(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        self.steps_taken += 1;
        let delta = if self.steps_taken == self.total_steps {
            self.remaining
        } else {
            self.step_angle
        };
        self.remaining -= delta;
        Some(delta)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.steps_taken >= self.total_steps
    }

    #[inline]
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.total_steps - self.steps_taken
    }

    /// Angle not yet applied (radians).
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
