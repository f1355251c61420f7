//! Walk Controller
//!
//! Turns held-key state and the camera yaw into the per-frame desired
//! displacement that gets fed through the collision resolver, and owns the
//! vertical jump/gravity physics the resolver deliberately ignores.
//!
//! Movement is camera-relative on the XZ plane: forward/backward along the
//! camera's look direction, strafing perpendicular to it, diagonal input
//! normalized so it is no faster than a straight run. Sprinting swaps the
//! walk speed for the sprint speed while held.
//!
//! # Usage
//!
//! ```
//! use maze_walk_engine::player::{MoveInput, WalkController};
//!
//! let controller = WalkController::new();
//! let input = MoveInput {
//!     forward: true,
//!     ..MoveInput::default()
//! };
//!
//! // Each frame:
//! let desired = controller.desired_move(0.016, &input, 0.0);
//! assert!(desired.z < 0.0); // yaw 0 looks toward -Z
//! ```

use glam::Vec3;
use static_assertions::const_assert;

/// Walk speed in cells per second.
pub const WALK_SPEED: f32 = 1.0;

/// Sprint speed in cells per second.
pub const SPRINT_SPEED: f32 = 2.0;

/// Upward velocity applied when a jump starts, in cells per second.
pub const JUMP_VELOCITY: f32 = 2.0;

/// Gravity acceleration in cells per second squared.
pub const GRAVITY: f32 = 9.81;

const_assert!(SPRINT_SPEED > WALK_SPEED);

/// Held-key movement state, decoupled from any windowing library.
///
/// The window layer flips these booleans on key press/release; the
/// controller only ever reads them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    /// W - move toward the camera's look direction.
    pub forward: bool,
    /// S - move away from the camera's look direction.
    pub backward: bool,
    /// A - strafe left.
    pub left: bool,
    /// D - strafe right.
    pub right: bool,
    /// Shift - sprint while held.
    pub sprint: bool,
    /// Space - request a jump.
    pub jump: bool,
}

impl MoveInput {
    /// Forward/backward axis: +1 forward, -1 backward, 0 neither or both.
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Strafe axis: +1 right, -1 left, 0 neither or both.
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Whether any horizontal movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Produces desired displacements from input and integrates jump/gravity.
///
/// The controller never touches the grid; the collision resolver decides
/// what part of the desired displacement survives. Vertical state (jump
/// velocity, grounded flag) lives here because the resolver passes the Y
/// component through untouched.
#[derive(Debug, Clone)]
pub struct WalkController {
    walk_speed: f32,
    sprint_speed: f32,
    jump_velocity: f32,
    gravity: f32,
    /// Current vertical velocity in cells per second (positive = up).
    vertical_velocity: f32,
    is_grounded: bool,
}

impl Default for WalkController {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            vertical_velocity: 0.0,
            is_grounded: true,
        }
    }
}

impl WalkController {
    /// Creates a controller with the default speeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with custom horizontal speeds.
    pub fn with_speeds(walk_speed: f32, sprint_speed: f32) -> Self {
        Self {
            walk_speed,
            sprint_speed,
            ..Self::default()
        }
    }

    /// Creates a controller with custom speeds and vertical physics.
    pub fn with_physics(
        walk_speed: f32,
        sprint_speed: f32,
        jump_velocity: f32,
        gravity: f32,
    ) -> Self {
        Self {
            walk_speed,
            sprint_speed,
            jump_velocity,
            gravity,
            vertical_velocity: 0.0,
            is_grounded: true,
        }
    }

    /// Whether the player currently stands on the floor.
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Current vertical velocity in cells per second.
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// The horizontal desired displacement for this frame.
    ///
    /// Builds the camera-relative direction from the input axes, normalizes
    /// it, and scales by speed and `dt`. Returns the zero vector when no
    /// movement key is held. The Y component is always zero here; vertical
    /// motion comes from [`vertical_step`](Self::vertical_step).
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame time in seconds
    /// * `input` - Held-key state
    /// * `camera_yaw` - Camera yaw in radians (0 looks toward -Z)
    pub fn desired_move(&self, dt: f32, input: &MoveInput, camera_yaw: f32) -> Vec3 {
        let dt = dt.clamp(0.0001, 0.1);

        let forward = Vec3::new(camera_yaw.sin(), 0.0, -camera_yaw.cos());
        let right = Vec3::new(-forward.z, 0.0, forward.x);

        let direction = forward * input.forward_axis() as f32 + right * input.right_axis() as f32;
        let direction = direction.normalize_or_zero();

        let speed = if input.sprint {
            self.sprint_speed
        } else {
            self.walk_speed
        };

        direction * speed * dt
    }

    /// Starts a jump if the player is grounded.
    ///
    /// Returns `true` when the jump was initiated; a second request while
    /// airborne does nothing.
    pub fn try_jump(&mut self) -> bool {
        if self.is_grounded {
            self.vertical_velocity = self.jump_velocity;
            self.is_grounded = false;
            true
        } else {
            false
        }
    }

    /// Integrates gravity for one frame and returns the Y displacement.
    ///
    /// Uses the average of the old and new velocity (midpoint), which is
    /// exact for constant acceleration. Returns 0 while grounded.
    pub fn vertical_step(&mut self, dt: f32) -> f32 {
        if self.is_grounded {
            return 0.0;
        }
        let dt = dt.clamp(0.0001, 0.1);
        let previous = self.vertical_velocity;
        self.vertical_velocity -= self.gravity * dt;
        (previous + self.vertical_velocity) * 0.5 * dt
    }

    /// Clamps a fallen-through Y back to the floor and restores the
    /// grounded state. Returns the corrected Y coordinate.
    pub fn settle(&mut self, y: f32, floor_y: f32) -> f32 {
        if y <= floor_y {
            self.is_grounded = true;
            self.vertical_velocity = 0.0;
            floor_y
        } else {
            y
        }
    }
}
