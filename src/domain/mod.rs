//! Domain logic and core data structures
//!
//! This module contains the pure rover simulation: grid geometry,
//! orientation, commands and the rover state machine. It performs no I/O
//! and does no logging.

pub mod command;
pub mod core;
pub mod orientation;
pub mod rover;
