//! Maze Walk - Headless Core Demo
//!
//! Generates a maze from the config file (or defaults), prints it, and runs
//! a short scripted walk through the collision resolver. The renderer is an
//! external collaborator; it consumes the same read surface this demo
//! prints as ASCII.
//!
//! Run with: `cargo run --bin maze-walk [config.json]`
//! Set `RUST_LOG=debug` for generation details.

use std::env;
use std::path::Path;
use std::process;

use log::error;
use maze_walk_engine::game::{DEFAULT_CONFIG_PATH, GameConfig, WalkSession};
use maze_walk_engine::player::MoveInput;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let config = GameConfig::load_or_default(Path::new(config_path));

    let mut session = match WalkSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("failed to build maze: {e}");
            process::exit(1);
        }
    };

    print!("{}", session.map());
    println!(
        "seed {} | start ({}, {}) | end ({}, {})",
        session.seed(),
        session.start().x,
        session.start().y,
        session.end().x,
        session.end().y
    );

    // Scripted walk: two seconds forward, a strafe along whatever wall the
    // forward push ran into, then a jump on the spot.
    let forward = MoveInput {
        forward: true,
        ..MoveInput::default()
    };
    let strafe = MoveInput {
        right: true,
        sprint: true,
        ..MoveInput::default()
    };
    let jump = MoveInput {
        jump: true,
        ..MoveInput::default()
    };

    let dt = 1.0 / 60.0;
    for (input, frames, label) in [
        (forward, 120, "after walking forward"),
        (strafe, 60, "after strafing right"),
        (jump, 30, "while hopping"),
        (MoveInput::default(), 60, "settled"),
    ] {
        for _ in 0..frames {
            session.step(&input, dt);
        }
        let pos = session.position();
        println!("{label}: ({:.2}, {:.2}, {:.2})", pos.x, pos.y, pos.z);
    }

    if session.at_end() {
        println!("reached the end cell");
    }
}
