//! Collision Tests - Footprint Blocking and Movement Resolution
//!
//! Exercises the resolver against hand-built grids and against a freshly
//! generated maze, including the wall-sliding behavior of axis-separated
//! movement.

use glam::Vec3;
use maze_walk_engine::physics::CollisionResolver;
use maze_walk_engine::world::{Cell, GridMap, MazeGenerator};

// ============================================================================
// Footprint Blocking
// ============================================================================

#[test]
fn test_footprint_over_known_wall_cell() {
    let mut map = GridMap::new(8, 8, Cell::Empty).unwrap();
    map.set(5, 5, Cell::Wall);
    let resolver = CollisionResolver::new(&map, 0.25);

    assert!(resolver.is_position_blocked(Vec3::new(5.0, 0.0, 5.0)));
}

#[test]
fn test_footprint_over_empty_cell() {
    let map = GridMap::new(8, 8, Cell::Empty).unwrap();
    let resolver = CollisionResolver::new(&map, 0.25);

    assert!(!resolver.is_position_blocked(Vec3::new(5.0, 0.0, 5.0)));
}

#[test]
fn test_markers_do_not_block() {
    let mut map = GridMap::new(8, 8, Cell::Empty).unwrap();
    map.set(3, 3, Cell::Start);
    map.set(4, 4, Cell::End);
    let resolver = CollisionResolver::new(&map, 0.25);

    assert!(!resolver.is_position_blocked(Vec3::new(3.5, 0.0, 3.5)));
    assert!(!resolver.is_position_blocked(Vec3::new(4.5, 0.0, 4.5)));
}

#[test]
fn test_larger_footprint_reaches_farther() {
    let mut map = GridMap::new(8, 8, Cell::Empty).unwrap();
    map.set(5, 5, Cell::Wall);

    let slim = CollisionResolver::new(&map, 0.1);
    let wide = CollisionResolver::new(&map, 0.45);

    let pos = Vec3::new(4.8, 0.0, 5.5);
    assert!(!slim.is_position_blocked(pos));
    assert!(wide.is_position_blocked(pos));
}

// ============================================================================
// Axis-Separated Movement
// ============================================================================

#[test]
fn test_diagonal_into_wall_slides_along_free_axis() {
    let mut map = GridMap::new(4, 4, Cell::Empty).unwrap();
    map.set(2, 1, Cell::Wall);
    let resolver = CollisionResolver::new(&map, 0.25);

    let pos = resolver.movement(Vec3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.8));
    assert_eq!(pos.x, 1.0, "X must be stopped by the wall at (2, 1)");
    assert_eq!(pos.z, 1.8, "Z must advance through the open cell (1, 2)");
}

#[test]
fn test_open_space_passes_the_full_step() {
    let map = GridMap::new(8, 8, Cell::Empty).unwrap();
    let resolver = CollisionResolver::new(&map, 0.25);

    let pos = resolver.movement(Vec3::new(3.5, 0.5, 3.5), Vec3::new(0.4, -0.1, -0.7));
    assert_eq!(pos, Vec3::new(3.9, 0.4, 2.8));
}

#[test]
fn test_x_resolution_happens_before_z() {
    // A pocket where moving X first opens the Z lane; order matters.
    let mut map = GridMap::new(6, 6, Cell::Empty).unwrap();
    map.set(2, 3, Cell::Wall);
    let resolver = CollisionResolver::new(&map, 0.25);

    // From (2.5, 2.5): Z alone toward 3.1 would clip (2, 3). X first moves
    // to 3.5, after which the same Z step is free.
    let pos = resolver.movement(Vec3::new(2.5, 0.0, 2.5), Vec3::new(1.0, 0.0, 0.6));
    assert_eq!(pos.x, 3.5);
    assert_eq!(pos.z, 3.1);
}

// ============================================================================
// Against a Generated Maze
// ============================================================================

fn generated_maze(seed: u64) -> GridMap {
    let mut generator = MazeGenerator::new(21, 21, 1, seed).unwrap();
    let mut map = GridMap::new(generator.cols(), generator.rows(), Cell::Empty).unwrap();
    generator.generate(&mut map).unwrap();
    map
}

#[test]
fn test_border_ring_contains_the_player() {
    let map = generated_maze(11);
    let resolver = CollisionResolver::new(&map, 0.25);

    // Ram the border from just inside, along each axis.
    let mut pos = Vec3::new(1.5, 0.0, 1.5);
    for _ in 0..100 {
        pos = resolver.movement(pos, Vec3::new(-0.3, 0.0, 0.0));
    }
    assert!(pos.x >= 1.0, "escaped through the left border to x={}", pos.x);

    let mut pos = Vec3::new(1.5, 0.0, 1.5);
    for _ in 0..100 {
        pos = resolver.movement(pos, Vec3::new(0.0, 0.0, -0.3));
    }
    assert!(pos.z >= 1.0, "escaped through the near border to z={}", pos.z);
}

#[test]
fn test_random_walk_never_enters_a_wall() {
    let map = generated_maze(12);
    let resolver = CollisionResolver::new(&map, 0.25);

    // A fixed zig-zag pattern long enough to bounce through corridors.
    let steps = [
        Vec3::new(0.2, 0.0, 0.1),
        Vec3::new(-0.1, 0.0, 0.25),
        Vec3::new(0.15, 0.0, -0.2),
        Vec3::new(-0.25, 0.0, -0.1),
    ];

    let mut pos = Vec3::new(1.5, 0.0, 1.5);
    assert!(!resolver.is_position_blocked(pos), "spawn cell must be open");
    for i in 0..400 {
        pos = resolver.movement(pos, steps[i % steps.len()]);
        assert!(
            !resolver.is_position_blocked(pos),
            "step {i} landed inside a wall at {pos}"
        );
    }
}
