//! World Module
//!
//! The grid-backed maze world: the cell map shared between generation,
//! collision, and rendering, plus the recursive-division generator that
//! fills it once at startup.

pub mod map;
pub mod maze;

pub use map::{Cell, GridMap};
pub use maze::MazeGenerator;

/// Errors from map construction and maze generation.
///
/// All of these signal misuse or a pathological configuration, discovered
/// at startup; there is no recoverable failure once a maze exists.
#[derive(Debug)]
pub enum WorldError {
    /// Map or generator created with unusable dimensions.
    InvalidDimensions { width: usize, height: usize },
    /// Generator run against a map whose size does not match its own.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Start/end rejection sampling ran out of attempts; the maze has too
    /// few open interior cells to place the markers.
    PlacementExhausted { attempts: u32 },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldError::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions: {width}x{height}")
            }
            WorldError::DimensionMismatch { expected, actual } => write!(
                f,
                "map is {}x{} but the generator expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            WorldError::PlacementExhausted { attempts } => write!(
                f,
                "could not place start/end after {attempts} attempts; maze too constrained"
            ),
        }
    }
}

impl std::error::Error for WorldError {}
