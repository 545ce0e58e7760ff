//! Command-driven sessions for the two robot models.
//!
//! A session owns one robot model, applies parsed commands to it and hands a
//! snapshot to the render sink after each command.

use std::thread;
use std::time::Duration;

use crate::arena::{Clamp, ContinuousRobot, RobotSnapshot, RotationTick};
use crate::command::{DriveCommand, LatticeCommand};
use crate::explore::{RenderSink, StopSignal};
use crate::lattice::{CellEdit, GridNavigator, LatticeSnapshot, MoveOutcome};

/// What a [`LatticeCommand`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeEffect {
    Moved(MoveOutcome),
    Edited(CellEdit),
    Cleared,
    Reset,
    Shown,
}

/// Interactive session over a [`GridNavigator`].
#[derive(Clone, Debug)]
pub struct LatticeSession {
    navigator: GridNavigator,
}

impl LatticeSession {
    pub fn new(navigator: GridNavigator) -> Self {
        Self { navigator }
    }

    #[inline]
    pub fn navigator(&self) -> &GridNavigator {
        &self.navigator
    }

    /// Apply `command`, then render the lattice.
    pub fn apply<S>(&mut self, command: LatticeCommand, sink: &mut S) -> LatticeEffect
    where
        S: RenderSink<LatticeSnapshot> + ?Sized,
    {
        let effect = match command {
            LatticeCommand::Move(dir) => LatticeEffect::Moved(self.navigator.move_robot(dir)),
            LatticeCommand::Toggle(coord) => {
                LatticeEffect::Edited(self.navigator.toggle_cell(coord))
            }
            LatticeCommand::Set(coord, cell) => {
                LatticeEffect::Edited(self.navigator.set_cell(coord, cell))
            }
            LatticeCommand::Clear => {
                self.navigator.clear();
                LatticeEffect::Cleared
            }
            LatticeCommand::Reset => {
                self.navigator.reset();
                LatticeEffect::Reset
            }
            LatticeCommand::Show => LatticeEffect::Shown,
        };
        sink.render(&self.navigator.snapshot());
        effect
    }
}

/// What a [`DriveCommand`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveEffect {
    Moved(Clamp),
    /// `completed` is false when the stop signal interrupted the turn
    Turned { sub_steps: u32, completed: bool },
    Shown,
}

/// Interactive session over a [`ContinuousRobot`].
///
/// Turns are played out one sub-step at a time with a render and a sleep of
/// `step_delay` after each, so the rotation is visibly smooth.
#[derive(Clone, Debug)]
pub struct DriveSession {
    robot: ContinuousRobot,
    default_turn_degrees: f32,
    step_delay: Duration,
}

impl DriveSession {
    pub fn new(robot: ContinuousRobot, default_turn_degrees: f32, step_delay: Duration) -> Self {
        Self {
            robot,
            default_turn_degrees,
            step_delay,
        }
    }

    #[inline]
    pub fn robot(&self) -> &ContinuousRobot {
        &self.robot
    }

    pub fn apply<S>(&mut self, command: DriveCommand, stop: &StopSignal, sink: &mut S) -> DriveEffect
    where
        S: RenderSink<RobotSnapshot> + ?Sized,
    {
        match command {
            DriveCommand::Forward => self.translate(true, sink),
            DriveCommand::Backward => self.translate(false, sink),
            DriveCommand::TurnLeft(deg) => {
                self.robot.turn_left(deg.unwrap_or(self.default_turn_degrees));
                self.play_rotation(stop, sink)
            }
            DriveCommand::TurnRight(deg) => {
                self.robot.turn_right(deg.unwrap_or(self.default_turn_degrees));
                self.play_rotation(stop, sink)
            }
            DriveCommand::Show => {
                sink.render(&self.robot.snapshot());
                DriveEffect::Shown
            }
        }
    }

    fn translate<S>(&mut self, forward: bool, sink: &mut S) -> DriveEffect
    where
        S: RenderSink<RobotSnapshot> + ?Sized,
    {
        let clamp = if forward {
            self.robot.move_forward()
        } else {
            self.robot.move_backward()
        };
        if clamp.is_clamped() {
            tracing::debug!("Clamped at ({:.1}, {:.1})", self.robot.x(), self.robot.y());
        }
        sink.render(&self.robot.snapshot());
        DriveEffect::Moved(clamp)
    }

    fn play_rotation<S>(&mut self, stop: &StopSignal, sink: &mut S) -> DriveEffect
    where
        S: RenderSink<RobotSnapshot> + ?Sized,
    {
        let mut sub_steps = 0;
        loop {
            if stop.is_raised() {
                return DriveEffect::Turned {
                    sub_steps,
                    completed: false,
                };
            }
            let tick = self.robot.tick();
            if tick == RotationTick::Idle {
                break;
            }
            sub_steps += 1;
            sink.render(&self.robot.snapshot());
            if tick == RotationTick::Finished {
                break;
            }
            if !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        }
        DriveEffect::Turned {
            sub_steps,
            completed: true,
        }
    }
}
