//! Player Module
//!
//! Translates input into the desired-movement vector consumed by the
//! collision resolver, and carries the jump/gravity state for the vertical
//! axis the resolver leaves alone.
//!
//! # Components
//!
//! - [`WalkController`] - Camera-relative walking, sprinting, and jumping
//! - [`MoveInput`] - Held-key state, decoupled from the windowing layer

pub mod movement;

pub use movement::{
    MoveInput, WalkController,
    GRAVITY, JUMP_VELOCITY, SPRINT_SPEED, WALK_SPEED,
};
