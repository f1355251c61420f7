//! Collision Resolution Module
//!
//! Constrains continuous-space movement to the discrete maze grid. The
//! player is a square footprint of half-extent `radius` around the camera
//! position on the XZ plane; a position is blocked when any grid cell under
//! the footprint's four corners is a wall.
//!
//! # Axis-Separated Resolution
//!
//! A desired displacement is resolved one horizontal axis at a time: X is
//! tried and applied only if the resulting position is free, then Z from
//! the possibly-updated position. A diagonal step into a wall therefore
//! still advances along the free axis - the familiar wall-sliding feel -
//! instead of stopping dead. The Y component passes through untouched;
//! vertical motion is the caller's physics, not the grid's.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use maze_walk_engine::physics::CollisionResolver;
//! use maze_walk_engine::world::{Cell, GridMap};
//!
//! let mut map = GridMap::new(8, 8, Cell::Empty).unwrap();
//! map.set(4, 2, Cell::Wall);
//!
//! let resolver = CollisionResolver::new(&map, 0.25);
//! assert!(resolver.is_position_blocked(Vec3::new(4.5, 0.0, 2.5)));
//!
//! // Sliding: X is blocked by the wall, Z still advances.
//! let pos = resolver.movement(Vec3::new(3.0, 0.0, 2.5), Vec3::new(1.0, 0.0, 0.5));
//! assert_eq!(pos, Vec3::new(3.0, 0.0, 3.0));
//! ```

use glam::Vec3;
use static_assertions::const_assert;

use crate::world::{Cell, GridMap};

/// Default footprint half-extent, in cells.
pub const DEFAULT_PLAYER_RADIUS: f32 = 0.25;

// A footprint spanning a whole cell would wedge in any corridor.
const_assert!(DEFAULT_PLAYER_RADIUS < 0.5);

/// Read-only collision resolver over a generated [`GridMap`].
///
/// Borrows the map for its lifetime; the map is never mutated after
/// generation, so one resolver can serve the whole session. Every query is
/// a total function - any real-valued position or displacement is accepted
/// and produces a deterministic result.
pub struct CollisionResolver<'m> {
    map: &'m GridMap,
    radius: f32,
}

impl<'m> CollisionResolver<'m> {
    /// Creates a resolver for `map` with the given footprint half-extent.
    pub fn new(map: &'m GridMap, player_radius: f32) -> Self {
        Self {
            map,
            radius: player_radius,
        }
    }

    /// The footprint half-extent this resolver was built with.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether the grid cell `(cx, cz)` is a wall.
    ///
    /// Cells outside the grid count as empty; the border wall ring does the
    /// real boundary enforcement.
    fn is_cell_blocked(&self, cx: i32, cz: i32) -> bool {
        self.map.get(cx, cz, Cell::Empty) == Cell::Wall
    }

    /// Whether the square footprint centered at `pos` overlaps any wall.
    ///
    /// Tests the four grid cells under the footprint corners,
    /// short-circuiting on the first hit.
    pub fn is_position_blocked(&self, pos: Vec3) -> bool {
        let x_left = (pos.x - self.radius).floor() as i32;
        let x_right = (pos.x + self.radius).floor() as i32;
        let z_near = (pos.z - self.radius).floor() as i32;
        let z_far = (pos.z + self.radius).floor() as i32;

        self.is_cell_blocked(x_left, z_near)
            || self.is_cell_blocked(x_left, z_far)
            || self.is_cell_blocked(x_right, z_near)
            || self.is_cell_blocked(x_right, z_far)
    }

    /// Resolves a desired displacement into a collision-safe new position.
    ///
    /// X and Z are applied independently in that order, each only when the
    /// resulting position is free; Y is applied unconditionally.
    pub fn movement(&self, current_pos: Vec3, desired_move: Vec3) -> Vec3 {
        let mut new_pos = current_pos;

        let move_x = Vec3::new(desired_move.x, 0.0, 0.0);
        if !self.is_position_blocked(new_pos + move_x) {
            new_pos += move_x;
        }

        let move_z = Vec3::new(0.0, 0.0, desired_move.z);
        if !self.is_position_blocked(new_pos + move_z) {
            new_pos += move_z;
        }

        new_pos.y += desired_move.y;

        new_pos
    }
}
