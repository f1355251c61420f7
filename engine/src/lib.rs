//! Maze Walk Engine Library
//!
//! The core of a walkable 3D maze: a grid-backed map, a recursive-division
//! maze generator, and a collision resolver that confines continuous-space
//! movement to the grid. Rendering, asset loading, and windowing live
//! outside this crate and only consume the read surface exposed here.
//!
//! # Modules
//!
//! - [`world`] - Cell grid and the maze generator that fills it
//! - [`physics`] - Footprint collision tests and axis-separated movement
//! - [`player`] - Desired-movement production and jump/gravity state
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use maze_walk_engine::physics::CollisionResolver;
//! use maze_walk_engine::world::{Cell, GridMap, MazeGenerator};
//!
//! // Once, at startup:
//! let mut generator = MazeGenerator::new(33, 33, 2, 42).unwrap();
//! let mut map = GridMap::new(generator.cols(), generator.rows(), Cell::Empty).unwrap();
//! let (start, _end) = generator.generate(&mut map).unwrap();
//!
//! // Every frame:
//! let resolver = CollisionResolver::new(&map, 0.25);
//! let position = Vec3::new(start.x as f32 + 0.5, 0.5, start.y as f32 + 0.5);
//! let position = resolver.movement(position, Vec3::new(0.1, 0.0, 0.0));
//! assert!(!resolver.is_position_blocked(position));
//! ```

pub mod physics;
pub mod player;
pub mod world;

// Game-level glue (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core types at crate level for convenience
pub use physics::{CollisionResolver, DEFAULT_PLAYER_RADIUS};
pub use player::{MoveInput, WalkController};
pub use world::{Cell, GridMap, MazeGenerator, WorldError};
