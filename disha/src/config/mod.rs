//! Unified configuration loading for Disha.
//!
//! Loads all tunables from a single TOML file with sensible defaults. Every
//! field is optional; a missing file falls back to [`DishaConfig::default`].
//!
//! ## Example TOML
//!
//! ```toml
//! [lattice]
//! size = 25
//! footprint = 3
//!
//! [arena]
//! width = 200.0
//! height = 200.0
//!
//! [robot]
//! radius = 10.0
//! speed = 1.0
//! start_heading = 0.0
//!
//! [explorer]
//! clearance_threshold = 5
//! turn_degrees = 90.0
//! # commit_distance = 10.0   # defaults to robot radius
//! # cell_size = 10.0         # defaults to robot radius
//!
//! [rotation]
//! steps = 100
//! step_delay_ms = 1
//!
//! [logging]
//! level = "info"
//! ```

mod defaults;
mod sections;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::arena::{Arena, ContinuousRobot};
use crate::core::WorldPoint;
use crate::error::{DishaError, Result};
use crate::explore::{ExplorerConfig, OccupancyGrid, TaskTiming};
use crate::lattice::GridNavigator;

pub use sections::{
    ArenaSection, ExplorerSection, LatticeSection, LoggingSection, RobotSection, RotationSection,
};

/// Default config file looked up by [`DishaConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "disha.toml";

fn require_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DishaError::Config(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

/// Full Disha configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DishaConfig {
    #[serde(default)]
    pub lattice: LatticeSection,

    #[serde(default)]
    pub arena: ArenaSection,

    #[serde(default)]
    pub robot: RobotSection,

    #[serde(default)]
    pub explorer: ExplorerSection,

    #[serde(default)]
    pub rotation: RotationSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl DishaConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `disha.toml` in the working directory, or defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: DishaConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let lattice = &self.lattice;
        if lattice.footprint == 0 || lattice.footprint % 2 == 0 {
            return Err(DishaError::Config(format!(
                "lattice.footprint must be odd, got {}",
                lattice.footprint
            )));
        }
        if lattice.footprint > lattice.size {
            return Err(DishaError::Config(format!(
                "lattice.footprint {} does not fit a {}x{} lattice",
                lattice.footprint, lattice.size, lattice.size
            )));
        }

        require_positive("arena.width", self.arena.width)?;
        require_positive("arena.height", self.arena.height)?;

        let robot = &self.robot;
        require_positive("robot.radius", robot.radius)?;
        require_positive("robot.speed", robot.speed)?;
        for (name, value) in [
            ("robot.start_x", robot.start_x),
            ("robot.start_y", robot.start_y),
            ("robot.start_heading", Some(robot.start_heading)),
        ] {
            if let Some(v) = value
                && !v.is_finite()
            {
                return Err(DishaError::Config(format!("{} must be finite", name)));
            }
        }
        if 2.0 * robot.radius > self.arena.width || 2.0 * robot.radius > self.arena.height {
            return Err(DishaError::Config(format!(
                "robot of radius {} does not fit a {}x{} arena",
                robot.radius, self.arena.width, self.arena.height
            )));
        }

        if self.rotation.steps == 0 {
            return Err(DishaError::Config("rotation.steps must be at least 1".into()));
        }
        require_positive("rotation.default_degrees", self.rotation.default_degrees)?;

        let explorer = &self.explorer;
        require_positive("explorer.turn_degrees", explorer.turn_degrees)?;
        if let Some(v) = explorer.commit_distance {
            require_positive("explorer.commit_distance", v)?;
        }
        let cell_size = explorer.cell_size.unwrap_or(robot.radius);
        require_positive("explorer.cell_size", cell_size)?;
        OccupancyGrid::dimensions(&self.arena(), cell_size)?;

        Ok(())
    }

    /// Arena bounds
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena.width, self.arena.height)
    }

    /// Continuous robot at the configured start pose (arena centre by default)
    pub fn build_robot(&self) -> Result<ContinuousRobot> {
        let arena = self.arena();
        let mut robot = ContinuousRobot::new(arena, self.robot.radius, self.robot.speed)?
            .with_rotation_steps(self.rotation.steps);
        let centre = arena.centre();
        let start = WorldPoint::new(
            self.robot.start_x.unwrap_or(centre.x),
            self.robot.start_y.unwrap_or(centre.y),
        );
        if robot.place(start, self.robot.start_heading).is_clamped() {
            tracing::warn!(
                "Start position ({:.1}, {:.1}) clamped to ({:.1}, {:.1})",
                start.x,
                start.y,
                robot.x(),
                robot.y()
            );
        }
        Ok(robot)
    }

    /// Grid navigator with the robot at the lattice centre
    pub fn build_navigator(&self) -> Result<GridNavigator> {
        GridNavigator::new(self.lattice.size, self.lattice.footprint)
    }

    /// Explorer decision parameters
    pub fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            clearance_threshold: self.explorer.clearance_threshold,
            turn_degrees: self.explorer.turn_degrees,
            commit_distance: self.explorer.commit_distance,
            cell_size: self.explorer.cell_size,
        }
    }

    /// Suspension timing for the exploration task
    pub fn task_timing(&self) -> TaskTiming {
        TaskTiming {
            turn_step_delay: Duration::from_millis(self.rotation.step_delay_ms),
            idle_delay: Duration::from_millis(self.explorer.idle_delay_ms),
            max_iterations: self.explorer.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DishaConfig::default();
        assert_eq!(config.lattice.size, 25);
        assert_eq!(config.lattice.footprint, 3);
        assert_eq!(config.arena.width, 200.0);
        assert_eq!(config.robot.radius, 10.0);
        assert_eq!(config.explorer.clearance_threshold, 5);
        assert_eq!(config.rotation.steps, 100);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DishaConfig::from_toml("").unwrap();
        assert_eq!(config, DishaConfig::default());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_content = r#"
[lattice]
size = 15
footprint = 5

[robot]
radius = 4.0
start_x = 20.0

[explorer]
commit_distance = 8.0

[logging]
level = "debug"
"#;

        let config = DishaConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.lattice.size, 15);
        assert_eq!(config.lattice.footprint, 5);
        assert_eq!(config.robot.radius, 4.0);
        assert_eq!(config.robot.speed, 1.0);
        assert_eq!(config.robot.start_x, Some(20.0));
        assert_eq!(config.robot.start_y, None);
        assert_eq!(config.explorer.commit_distance, Some(8.0));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_toml_serialization() {
        let config = DishaConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[lattice]"));
        assert!(toml_string.contains("[arena]"));
        assert!(toml_string.contains("[explorer]"));
        assert!(toml_string.contains("[rotation]"));
        assert!(toml_string.contains("steps = 100"));
        // Unset optionals are omitted rather than written as empty values
        assert!(!toml_string.contains("commit_distance"));
    }

    #[test]
    fn test_rejects_even_footprint() {
        let err = DishaConfig::from_toml("[lattice]\nfootprint = 4\n").unwrap_err();
        assert!(matches!(err, DishaError::Config(_)));
    }

    #[test]
    fn test_rejects_oversized_robot() {
        let err = DishaConfig::from_toml("[robot]\nradius = 150.0\n").unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_rejects_non_finite_arena() {
        for toml in [
            "[arena]\nwidth = nan\n",
            "[arena]\nwidth = inf\n",
            "[arena]\nheight = -inf\n",
            "[arena]\nheight = 0.0\n",
        ] {
            let err = DishaConfig::from_toml(toml).unwrap_err();
            assert!(err.to_string().contains("arena."), "{toml:?}: {err}");
        }
    }

    #[test]
    fn test_rejects_degenerate_robot_values() {
        assert!(DishaConfig::from_toml("[robot]\nspeed = inf\n").is_err());
        assert!(DishaConfig::from_toml("[robot]\nradius = nan\n").is_err());
        assert!(DishaConfig::from_toml("[robot]\nstart_x = nan\n").is_err());
        assert!(DishaConfig::from_toml("[robot]\nstart_heading = inf\n").is_err());
    }

    #[test]
    fn test_rejects_degenerate_explorer_values() {
        for toml in [
            "[explorer]\ncell_size = 1e-4\n",
            "[explorer]\ncell_size = inf\n",
            "[explorer]\ncommit_distance = nan\n",
            "[explorer]\nturn_degrees = -90.0\n",
            "[rotation]\ndefault_degrees = nan\n",
        ] {
            assert!(DishaConfig::from_toml(toml).is_err(), "{toml:?}");
        }
        assert!(DishaConfig::from_toml("[explorer]\ncell_size = 0.5\n").is_ok());
    }

    #[test]
    fn test_validated_config_builds_explorer() {
        let config = DishaConfig::from_toml("[arena]\nwidth = 60.0\n[explorer]\ncell_size = 7.0\n").unwrap();
        let robot = config.build_robot().unwrap();
        let explorer = crate::explore::Explorer::new(config.explorer_config(), &robot).unwrap();
        assert_eq!(explorer.grid().width(), 9);
        assert_eq!(explorer.grid().height(), 29);
    }

    #[test]
    fn test_rejects_zero_rotation_steps() {
        assert!(DishaConfig::from_toml("[rotation]\nsteps = 0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = DishaConfig::from_toml("[lattice\nsize = ").unwrap_err();
        assert!(matches!(err, DishaError::Config(_)));
    }

    #[test]
    fn test_build_robot_defaults_to_centre() {
        let robot = DishaConfig::default().build_robot().unwrap();
        assert_eq!(robot.x(), 100.0);
        assert_eq!(robot.y(), 100.0);
        assert_eq!(robot.heading(), 0.0);
        assert_eq!(robot.rotation_steps(), 100);
    }

    #[test]
    fn test_task_timing() {
        let mut config = DishaConfig::default();
        config.rotation.step_delay_ms = 3;
        config.explorer.max_iterations = Some(10);
        let timing = config.task_timing();
        assert_eq!(timing.turn_step_delay, Duration::from_millis(3));
        assert_eq!(timing.idle_delay, Duration::ZERO);
        assert_eq!(timing.max_iterations, Some(10));
    }
}
