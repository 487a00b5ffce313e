//! Mars rover grid simulation
//!
//! A rover starts on a cell of a bounded grid facing a compass direction and
//! replays a string of F/B/L/R commands. Moves that would leave the grid are
//! absorbed silently.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use domain::command::Command;
pub use domain::core::{Grid, Position};
pub use domain::orientation::Orientation;
pub use domain::rover::{CommandSummary, MoveOutcome, Rover};
pub use error::RoverError;
