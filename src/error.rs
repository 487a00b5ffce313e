//! Error types for rover construction and command processing

use thiserror::Error;

/// Errors raised by the rover core
///
/// All variants are local validation failures. Moves that would leave the
/// grid are not errors; they are absorbed by the rover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    #[error("Invalid direction '{0}'. Must be one of: N, S, E, W.")]
    InvalidOrientation(String),

    #[error("Grid size must be positive integers (got {width}x{height}).")]
    InvalidGridSize { width: i32, height: i32 },

    #[error(
        "Initial position ({x}, {y}) must be within grid bounds (0..{max_x}, 0..{max_y})."
    )]
    OutOfBounds { x: i32, y: i32, max_x: i32, max_y: i32 },

    #[error(
        "Commands string contains invalid character '{found}' at index {index}. Only F,B,L,R allowed."
    )]
    InvalidCommandChars { found: char, index: usize },
}
