//! Physics Module
//!
//! Movement physics for the maze walker. All collision reasoning happens in
//! 2D grid-cell space on the XZ plane with a fixed-radius footprint; the
//! vertical axis is plain jump/gravity integration with no grid coupling.
//!
//! # Submodules
//!
//! - [`collision`] - Footprint-vs-grid blocking tests and axis-separated
//!   movement resolution

pub mod collision;

pub use collision::{CollisionResolver, DEFAULT_PLAYER_RADIUS};
