//! Walk Session
//!
//! The wiring the application runs: build the map, run the generator once,
//! then resolve one movement per frame against the frozen grid. Owns the
//! player position and camera yaw; the window layer feeds it held keys and
//! mouse-look deltas and reads the position back for the view transform.

use glam::{IVec2, Vec3};
use log::info;

use crate::game::config::GameConfig;
use crate::physics::CollisionResolver;
use crate::player::{MoveInput, WalkController};
use crate::world::{Cell, GridMap, MazeGenerator, WorldError};

/// A generated maze plus the player walking it.
///
/// The map is written exactly once, inside [`WalkSession::new`]; every
/// frame afterwards only reads it.
pub struct WalkSession {
    map: GridMap,
    start: IVec2,
    end: IVec2,
    controller: WalkController,
    position: Vec3,
    yaw: f32,
    player_radius: f32,
    eye_height: f32,
    seed: u64,
}

impl WalkSession {
    /// Generates the maze and spawns the player at the start cell center.
    ///
    /// A config without a seed draws a fresh one, which is kept and exposed
    /// via [`seed`](Self::seed) so a run can be reproduced.
    ///
    /// # Errors
    ///
    /// Construction fails only the way the world module can fail: bad
    /// dimensions or exhausted start/end placement. Both mean the config is
    /// unusable and startup should abort with the message.
    pub fn new(config: &GameConfig) -> Result<Self, WorldError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut generator =
            MazeGenerator::new(config.rows, config.cols, config.corridor_width, seed)?;
        let mut map = GridMap::new(generator.cols(), generator.rows(), Cell::Empty)?;
        let (start, end) = generator.generate(&mut map)?;

        info!(
            "maze ready: {}x{} cells, corridor {}, seed {}",
            map.width(),
            map.height(),
            generator.corridor_width(),
            seed
        );

        Ok(Self {
            map,
            start,
            end,
            controller: WalkController::with_physics(
                config.walk_speed,
                config.sprint_speed,
                config.jump_velocity,
                config.gravity,
            ),
            position: Vec3::new(
                start.x as f32 + 0.5,
                config.eye_height,
                start.y as f32 + 0.5,
            ),
            yaw: 0.0,
            player_radius: config.player_radius,
            eye_height: config.eye_height,
            seed,
        })
    }

    /// The generated map, for the renderer to instance cells from.
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Start cell coordinates.
    pub fn start(&self) -> IVec2 {
        self.start
    }

    /// End cell coordinates.
    pub fn end(&self) -> IVec2 {
        self.end
    }

    /// Current camera/player position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current camera yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Sets the camera yaw (mouse look lives in the window layer).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// The seed this session's maze was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances the player by one frame and returns the new position.
    ///
    /// Builds the desired displacement from the held keys and the camera
    /// yaw, lets the collision resolver decide what survives on X and Z,
    /// then settles the vertical axis against the floor.
    pub fn step(&mut self, input: &MoveInput, dt: f32) -> Vec3 {
        if input.jump {
            self.controller.try_jump();
        }

        let mut desired = self.controller.desired_move(dt, input, self.yaw);
        desired.y = self.controller.vertical_step(dt);

        let resolver = CollisionResolver::new(&self.map, self.player_radius);
        self.position = resolver.movement(self.position, desired);
        self.position.y = self.controller.settle(self.position.y, self.eye_height);

        self.position
    }

    /// The grid cell currently under the player.
    pub fn current_cell(&self) -> IVec2 {
        IVec2::new(
            self.position.x.floor() as i32,
            self.position.z.floor() as i32,
        )
    }

    /// Whether the player is standing on the end cell.
    pub fn at_end(&self) -> bool {
        self.current_cell() == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_config() -> GameConfig {
        GameConfig {
            rows: 17,
            cols: 17,
            corridor_width: 1,
            seed: Some(7),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_spawns_at_start_cell_center() {
        let session = WalkSession::new(&fixed_config()).unwrap();
        let start = session.start();
        assert_eq!(session.position().x, start.x as f32 + 0.5);
        assert_eq!(session.position().z, start.y as f32 + 0.5);
        assert_eq!(session.current_cell(), start);
    }

    #[test]
    fn test_same_seed_reproduces_the_maze() {
        let a = WalkSession::new(&fixed_config()).unwrap();
        let b = WalkSession::new(&fixed_config()).unwrap();
        assert_eq!(a.map(), b.map());
        assert_eq!(a.start(), b.start());
        assert_eq!(a.end(), b.end());
    }

    #[test]
    fn test_fresh_seed_is_kept_for_replay() {
        let config = GameConfig {
            seed: None,
            ..fixed_config()
        };
        let first = WalkSession::new(&config).unwrap();
        let replay = GameConfig {
            seed: Some(first.seed()),
            ..config
        };
        let second = WalkSession::new(&replay).unwrap();
        assert_eq!(first.map(), second.map());
    }

    #[test]
    fn test_step_without_input_stays_put() {
        let mut session = WalkSession::new(&fixed_config()).unwrap();
        let before = session.position();
        let after = session.step(&MoveInput::default(), 0.016);
        assert_eq!(before, after);
    }

    #[test]
    fn test_step_never_walks_into_a_wall() {
        let mut session = WalkSession::new(&fixed_config()).unwrap();
        let input = MoveInput {
            forward: true,
            sprint: true,
            ..MoveInput::default()
        };

        // Push forward long enough to cross the maze if nothing blocked.
        for _ in 0..2000 {
            let pos = session.step(&input, 0.016);
            let resolver = CollisionResolver::new(session.map(), 0.25);
            assert!(
                !resolver.is_position_blocked(pos),
                "player ended up inside a wall at {pos}"
            );
        }
    }

    #[test]
    fn test_start_is_not_the_end() {
        let session = WalkSession::new(&fixed_config()).unwrap();
        assert!(!session.at_end());
    }
}
