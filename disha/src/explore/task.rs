//! Cancellable exploration loop and snapshot plumbing.
//!
//! The task is the only writer of the robot and occupancy grid. Renderers
//! receive an [`ExplorationFrame`] after every iteration, either through a
//! callback or by polling a [`FrameBuffer`] from another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::arena::{ContinuousRobot, RobotSnapshot};
use crate::core::GridCoord;
use crate::error::{DishaError, Result};

use super::explorer::{Explorer, ExplorerConfig, ExplorerState};
use super::occupancy::OccupancyGrid;

/// Shared cancellation flag checked at every suspension point.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the task to stop at its next suspension point.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receiver of read-only snapshots after each state change.
pub trait RenderSink<S: ?Sized> {
    fn render(&mut self, snapshot: &S);
}

impl<S: ?Sized, F: FnMut(&S)> RenderSink<S> for F {
    fn render(&mut self, snapshot: &S) {
        self(snapshot)
    }
}

/// Everything a renderer needs after one exploration iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorationFrame {
    pub iteration: u64,
    pub robot: RobotSnapshot,
    pub state: ExplorerState,
    pub cursor: GridCoord,
    pub occupancy: OccupancyGrid,
}

/// Latest frame, shared between the exploration thread and readers.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer(Arc<RwLock<Option<ExplorationFrame>>>);

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, if any has been published.
    pub fn latest(&self) -> Option<ExplorationFrame> {
        match self.0.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl RenderSink<ExplorationFrame> for FrameBuffer {
    fn render(&mut self, frame: &ExplorationFrame) {
        let mut guard = match self.0.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(frame.clone());
    }
}

/// Suspension timing for [`ExplorationTask::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskTiming {
    /// Sleep after each rotation sub-step
    pub turn_step_delay: Duration,
    /// Sleep after other iterations; zero yields the thread instead
    pub idle_delay: Duration,
    /// Stop after this many iterations
    pub max_iterations: Option<u64>,
}

impl Default for TaskTiming {
    fn default() -> Self {
        Self {
            turn_step_delay: Duration::from_millis(1),
            idle_delay: Duration::ZERO,
            max_iterations: None,
        }
    }
}

/// Why [`ExplorationTask::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Signal,
    IterationLimit,
}

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSummary {
    pub iterations: u64,
    pub visited_cells: usize,
    pub reason: StopReason,
}

/// Explorer and robot driven by a cancellable loop.
#[derive(Debug)]
pub struct ExplorationTask {
    explorer: Explorer,
    robot: ContinuousRobot,
    timing: TaskTiming,
    iterations: u64,
}

impl ExplorationTask {
    pub fn new(
        robot: ContinuousRobot,
        config: ExplorerConfig,
        timing: TaskTiming,
    ) -> Result<Self> {
        Ok(Self {
            explorer: Explorer::new(config, &robot)?,
            robot,
            timing,
            iterations: 0,
        })
    }

    #[inline]
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    #[inline]
    pub fn robot(&self) -> &ContinuousRobot {
        &self.robot
    }

    pub fn frame(&self) -> ExplorationFrame {
        ExplorationFrame {
            iteration: self.iterations,
            robot: self.robot.snapshot(),
            state: self.explorer.state(),
            cursor: self.explorer.cursor(),
            occupancy: self.explorer.grid().clone(),
        }
    }

    /// Iterate until `stop` is raised or the iteration cap is reached.
    pub fn run<S>(&mut self, stop: &StopSignal, sink: &mut S) -> TaskSummary
    where
        S: RenderSink<ExplorationFrame> + ?Sized,
    {
        tracing::info!(
            "Exploration started at ({:.1}, {:.1})",
            self.robot.x(),
            self.robot.y()
        );

        let reason = loop {
            if stop.is_raised() {
                break StopReason::Signal;
            }
            if let Some(max) = self.timing.max_iterations
                && self.iterations >= max
            {
                break StopReason::IterationLimit;
            }

            let step = self.explorer.step(&mut self.robot);
            self.iterations += 1;
            sink.render(&self.frame());

            if step.action.rotated() {
                thread::sleep(self.timing.turn_step_delay);
            } else if self.timing.idle_delay > Duration::ZERO {
                thread::sleep(self.timing.idle_delay);
            } else {
                thread::yield_now();
            }
        };

        let summary = TaskSummary {
            iterations: self.iterations,
            visited_cells: self.explorer.grid().visited_count(),
            reason,
        };
        tracing::info!(
            "Exploration stopped ({:?}) after {} iterations, {} cells visited",
            summary.reason,
            summary.iterations,
            summary.visited_cells
        );
        summary
    }

    /// Run on a thread named `exploration`. The task is handed back on join.
    pub fn spawn<S>(
        mut self,
        stop: StopSignal,
        mut sink: S,
    ) -> Result<JoinHandle<(TaskSummary, ExplorationTask)>>
    where
        S: RenderSink<ExplorationFrame> + Send + 'static,
    {
        thread::Builder::new()
            .name("exploration".into())
            .spawn(move || {
                let summary = self.run(&stop, &mut sink);
                (summary, self)
            })
            .map_err(|e| DishaError::Thread(format!("failed to spawn exploration thread: {}", e)))
    }
}
