//! Game Module
//!
//! Game-level glue on top of the engine core: the JSON config and the walk
//! session that owns the generated maze and the player state.

pub mod config;
pub mod session;

pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};
pub use session::WalkSession;
