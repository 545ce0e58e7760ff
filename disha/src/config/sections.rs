//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Discrete lattice settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeSection {
    /// Cells per side (the lattice is square)
    #[serde(default = "defaults::lattice_size")]
    pub size: usize,

    /// Robot footprint side length in cells (odd)
    #[serde(default = "defaults::footprint")]
    pub footprint: usize,
}

impl Default for LatticeSection {
    fn default() -> Self {
        Self {
            size: defaults::lattice_size(),
            footprint: defaults::footprint(),
        }
    }
}

/// Continuous arena settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaSection {
    /// Arena width (units)
    #[serde(default = "defaults::arena_size")]
    pub width: f32,

    /// Arena height (units)
    #[serde(default = "defaults::arena_size")]
    pub height: f32,
}

impl Default for ArenaSection {
    fn default() -> Self {
        Self {
            width: defaults::arena_size(),
            height: defaults::arena_size(),
        }
    }
}

/// Continuous robot geometry and start pose
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSection {
    /// Body radius (units)
    #[serde(default = "defaults::robot_radius")]
    pub radius: f32,

    /// Distance covered per forward/backward command (units)
    #[serde(default = "defaults::robot_speed")]
    pub speed: f32,

    /// Start X (default: arena centre)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_x: Option<f32>,

    /// Start Y (default: arena centre)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_y: Option<f32>,

    /// Start heading (radians, CCW from +X)
    #[serde(default)]
    pub start_heading: f32,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            radius: defaults::robot_radius(),
            speed: defaults::robot_speed(),
            start_x: None,
            start_y: None,
            start_heading: 0.0,
        }
    }
}

/// Autonomous explorer settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorerSection {
    /// Sensor reading at or below which the path ahead counts as blocked
    #[serde(default = "defaults::clearance_threshold")]
    pub clearance_threshold: u32,

    /// Evasive rotation (degrees, left)
    #[serde(default = "defaults::evasive_turn_degrees")]
    pub turn_degrees: f32,

    /// Forward distance between occupancy commits (default: robot radius)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_distance: Option<f32>,

    /// Coarse occupancy cell size (default: robot radius)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<f32>,

    /// Delay between loop iterations (0 = plain yield)
    #[serde(default)]
    pub idle_delay_ms: u64,

    /// Stop after this many iterations (default: run until stopped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u64>,
}

impl Default for ExplorerSection {
    fn default() -> Self {
        Self {
            clearance_threshold: defaults::clearance_threshold(),
            turn_degrees: defaults::evasive_turn_degrees(),
            commit_distance: None,
            cell_size: None,
            idle_delay_ms: 0,
            max_iterations: None,
        }
    }
}

/// Smooth rotation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationSection {
    /// Sub-steps per commanded rotation
    #[serde(default = "defaults::rotation_steps")]
    pub steps: u32,

    /// Delay after each sub-step (milliseconds)
    #[serde(default = "defaults::rotation_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Angle used by manual turn commands without an explicit angle (degrees)
    #[serde(default = "defaults::manual_turn_degrees")]
    pub default_degrees: f32,
}

impl Default for RotationSection {
    fn default() -> Self {
        Self {
            steps: defaults::rotation_steps(),
            step_delay_ms: defaults::rotation_step_delay_ms(),
            default_degrees: defaults::manual_turn_degrees(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}
