//! Game Configuration
//!
//! JSON-backed settings for the maze and player physics. Loaded once at
//! startup; a missing file is not an error, the defaults simply apply.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::physics::DEFAULT_PLAYER_RADIUS;
use crate::player::{GRAVITY, JUMP_VELOCITY, SPRINT_SPEED, WALK_SPEED};

/// Default config file looked up next to the executable.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Everything the core needs to build a session.
///
/// Missing fields fall back to their defaults, so a config file only has
/// to name what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid height in cells (normalized to odd by the generator).
    pub rows: usize,
    /// Grid width in cells (normalized to odd by the generator).
    pub cols: usize,
    /// Thickness of dividing walls and passages, in cells.
    pub corridor_width: usize,
    /// Maze seed; `None` draws a fresh one at session start.
    pub seed: Option<u64>,
    /// Player footprint half-extent in cells.
    pub player_radius: f32,
    /// Walk speed in cells per second.
    pub walk_speed: f32,
    /// Sprint speed in cells per second.
    pub sprint_speed: f32,
    /// Jump impulse in cells per second.
    pub jump_velocity: f32,
    /// Gravity in cells per second squared.
    pub gravity: f32,
    /// Camera height above the floor, in cells.
    pub eye_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            corridor_width: 2,
            seed: None,
            player_radius: DEFAULT_PLAYER_RADIUS,
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            eye_height: 0.5,
        }
    }
}

/// Errors that can occur while reading or writing a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl GameConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the config to a JSON file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reads a config, falling back to defaults when the file is absent or
    /// unreadable. A malformed file is logged and ignored rather than
    /// aborting startup.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
