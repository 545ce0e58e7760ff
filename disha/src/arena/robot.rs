//! Disc robot with a clamped real-valued pose and a forward range sensor.

use crate::core::{WorldPoint, unit_vector};
use crate::error::{DishaError, Result};

use super::bounds::{Arena, Clamp};
use super::rotation::{DEFAULT_ROTATION_STEPS, Rotation};
use super::sensor::ray_march;

/// Progress of the active rotation after one [`ContinuousRobot::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationTick {
    /// No rotation in flight
    Idle,
    /// A sub-step was applied and more remain
    Turning { remaining_steps: u32 },
    /// The final sub-step was applied
    Finished,
}

/// Read-only view of the robot handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotSnapshot {
    pub position: WorldPoint,
    pub heading: f32,
    pub radius: f32,
    pub sensor: u32,
}

/// Continuous exploration robot.
#[derive(Clone, Debug)]
pub struct ContinuousRobot {
    arena: Arena,
    position: WorldPoint,
    /// Radians, CCW from +X, unbounded
    heading: f32,
    radius: f32,
    /// Distance per forward/backward command
    speed: f32,
    rotation_steps: u32,
    rotation: Option<Rotation>,
}

impl ContinuousRobot {
    /// Robot at the arena centre facing +X.
    pub fn new(arena: Arena, radius: f32, speed: f32) -> Result<Self> {
        for (name, value) in [("width", arena.width()), ("height", arena.height())] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DishaError::Config(format!(
                    "arena {} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        if !speed.is_finite() {
            return Err(DishaError::Config(format!(
                "speed must be finite, got {}",
                speed
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(DishaError::Config(format!(
                "radius must be positive, got {}",
                radius
            )));
        }
        if 2.0 * radius > arena.width() || 2.0 * radius > arena.height() {
            return Err(DishaError::Config(format!(
                "robot of radius {} does not fit a {}x{} arena",
                radius,
                arena.width(),
                arena.height()
            )));
        }
        Ok(Self {
            arena,
            position: arena.centre(),
            heading: 0.0,
            radius,
            speed,
            rotation_steps: DEFAULT_ROTATION_STEPS,
            rotation: None,
        })
    }

    /// Sub-steps used by subsequent turns.
    pub fn with_rotation_steps(mut self, steps: u32) -> Self {
        self.rotation_steps = steps.max(1);
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn position(&self) -> WorldPoint {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn rotation_steps(&self) -> u32 {
        self.rotation_steps
    }

    /// Rotation in flight, if any.
    #[inline]
    pub fn rotation(&self) -> Option<&Rotation> {
        self.rotation.as_ref()
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Store X clamped to `[radius, width - radius]`.
    pub fn set_x(&mut self, x: f32) -> Clamp {
        let (stored, clamp) = Clamp::apply(
            self.position.x,
            x,
            self.radius,
            self.arena.width() - self.radius,
        );
        self.position.x = stored;
        clamp
    }

    /// Store Y clamped to `[radius, height - radius]`.
    pub fn set_y(&mut self, y: f32) -> Clamp {
        let (stored, clamp) = Clamp::apply(
            self.position.y,
            y,
            self.radius,
            self.arena.height() - self.radius,
        );
        self.position.y = stored;
        clamp
    }

    /// Heading is stored as given; trig gives it an implicit period.
    pub fn set_direction(&mut self, heading: f32) {
        self.heading = heading;
    }

    /// Set position (clamped) and heading together.
    pub fn place(&mut self, position: WorldPoint, heading: f32) -> Clamp {
        self.heading = heading;
        self.set_x(position.x).or(self.set_y(position.y))
    }

    /// Point on the body edge where the sensor ray starts.
    pub fn sensor_origin(&self) -> WorldPoint {
        self.position.along(self.heading, self.radius)
    }

    /// Unit steps from the body edge to the wall ahead.
    pub fn sensor(&self) -> u32 {
        ray_march(&self.arena, self.sensor_origin(), self.heading)
    }

    /// Advance `speed` along the heading.
    pub fn move_forward(&mut self) -> Clamp {
        self.translate(self.speed)
    }

    /// Retreat `speed` against the heading.
    pub fn move_backward(&mut self) -> Clamp {
        self.translate(-self.speed)
    }

    fn translate(&mut self, distance: f32) -> Clamp {
        let (dx, dy) = unit_vector(self.heading);
        let target = WorldPoint::new(self.x() + dx * distance, self.y() + dy * distance);
        self.set_x(target.x).or(self.set_y(target.y))
    }

    /// Start a counter-clockwise rotation of `degrees`, replacing any in flight.
    pub fn turn_left(&mut self, degrees: f32) {
        self.rotation = Some(Rotation::from_degrees(degrees, self.rotation_steps));
    }

    /// Start a clockwise rotation of `degrees`, replacing any in flight.
    pub fn turn_right(&mut self, degrees: f32) {
        self.rotation = Some(Rotation::from_degrees(-degrees, self.rotation_steps));
    }

    /// Apply one rotation sub-step.
    pub fn tick(&mut self) -> RotationTick {
        let Some(rotation) = self.rotation.as_mut() else {
            return RotationTick::Idle;
        };
        if let Some(delta) = rotation.advance() {
            self.heading += delta;
        }
        if rotation.is_finished() {
            self.rotation = None;
            RotationTick::Finished
        } else {
            RotationTick::Turning {
                remaining_steps: rotation.steps_remaining(),
            }
        }
    }

    /// Apply every remaining sub-step at once. Returns the number applied.
    pub fn complete_rotation(&mut self) -> u32 {
        let mut applied = 0;
        while self.tick() != RotationTick::Idle {
            applied += 1;
            if !self.is_rotating() {
                break;
            }
        }
        applied
    }

    pub fn snapshot(&self) -> RobotSnapshot {
        RobotSnapshot {
            position: self.position,
            heading: self.heading,
            radius: self.radius,
            sensor: self.sensor(),
        }
    }
}
