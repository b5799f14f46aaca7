//! Runtime configuration with documented defaults
//!
//! Every value has a default matching the stock simulator, so the TOML file is
//! optional and may set any subset of keys:
//!
//! ```toml
//! [robot]
//! start_x = 0
//! start_y = 4
//! start_heading = "N"
//!
//! [display]
//! title = "Robot Control"
//! animation_ms = 300
//! show_debug = true
//! ```
//!
//! The grid itself is always `GRID_SIZE` x `GRID_SIZE` and cannot be changed here.

use crate::core::error::{Result, RobotError};
use crate::core::types::{Direction, GRID_MAX};
use crate::robot::state::RobotState;
use serde::Deserialize;
use std::path::Path;

/// Configuration for the simulator and its front ends
#[derive(Debug, Clone, PartialEq)]
pub struct RobotConfig {
    // === ROBOT ===
    /// Column the robot starts in
    ///
    /// Defaults to 0, the left edge.
    pub start_x: u8,

    /// Row the robot starts in
    ///
    /// Defaults to 4, the bottom edge. Together with `start_x` this places the
    /// robot in the bottom-left corner.
    pub start_y: u8,

    /// Heading the robot starts with
    pub start_heading: Direction,

    // === DISPLAY ===
    /// Title shown above the grid
    pub title: String,

    /// Duration of the marker slide between cells, in milliseconds
    ///
    /// 0 disables the animation and the marker jumps straight to its cell.
    pub animation_ms: u64,

    /// Whether the debug readout panel is drawn
    pub show_debug: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 4,
            start_heading: Direction::N,

            title: "Robot Control".to_string(),
            animation_ms: 300,
            show_debug: true,
        }
    }
}

impl RobotConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// State the session starts from
    pub fn initial_state(&self) -> RobotState {
        RobotState::new(self.start_x, self.start_y, self.start_heading)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.start_x > GRID_MAX || self.start_y > GRID_MAX {
            return Err(RobotError::InvalidConfig(format!(
                "start position ({}, {}) is outside the grid (0..={})",
                self.start_x, self.start_y, GRID_MAX
            )));
        }

        if self.animation_ms > 5_000 {
            return Err(RobotError::InvalidConfig(format!(
                "animation_ms ({}) should be at most 5000",
                self.animation_ms
            )));
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    ///
    /// An unrecognised `start_heading` is not fatal: it is logged and the
    /// robot starts facing north.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let start_heading = match raw.robot.start_heading {
            Some(text) => text.parse::<Direction>().unwrap_or_else(|err| {
                tracing::warn!(%err, "Falling back to heading N");
                Direction::N
            }),
            None => defaults.start_heading,
        };

        let config = Self {
            start_x: raw.robot.start_x.unwrap_or(defaults.start_x),
            start_y: raw.robot.start_y.unwrap_or(defaults.start_y),
            start_heading,
            title: raw.display.title.unwrap_or(defaults.title),
            animation_ms: raw.display.animation_ms.unwrap_or(defaults.animation_ms),
            show_debug: raw.display.show_debug.unwrap_or(defaults.show_debug),
        };
        config.validate()?;
        Ok(config)
    }
}

/// TOML representation of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    robot: TomlRobot,
    #[serde(default)]
    display: TomlDisplay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRobot {
    start_x: Option<u8>,
    start_y: Option<u8>,
    start_heading: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDisplay {
    title: Option<String>,
    animation_ms: Option<u64>,
    show_debug: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RobotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_state(), RobotState::new(0, 4, Direction::N));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = RobotConfig::parse_toml("").unwrap();
        assert_eq!(config, RobotConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = RobotConfig::parse_toml(
            r#"
            [robot]
            start_x = 2
            start_heading = "east"

            [display]
            animation_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.start_x, 2);
        assert_eq!(config.start_y, 4);
        assert_eq!(config.start_heading, Direction::E);
        assert_eq!(config.animation_ms, 0);
        assert!(config.show_debug);
    }

    #[test]
    fn test_unknown_heading_falls_back_to_north() {
        let config = RobotConfig::parse_toml(
            r#"
            [robot]
            start_heading = "up-and-left"
            "#,
        )
        .unwrap();
        assert_eq!(config.start_heading, Direction::N);
    }

    #[test]
    fn test_off_grid_start_rejected() {
        let err = RobotConfig::parse_toml(
            r#"
            [robot]
            start_y = 5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, RobotError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RobotConfig::parse_toml("[robot\nstart_x = 1").unwrap_err();
        assert!(matches!(err, RobotError::ConfigParse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RobotConfig::parse_toml("[robot]\nspeed = 3").unwrap_err();
        assert!(matches!(err, RobotError::ConfigParse(_)));
    }
}
