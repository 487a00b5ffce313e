//! Configuration module for mars-rover
//!
//! Holds the caller-side limits and defaults applied before the rover core
//! is called, and the mission description assembled from CLI arguments.

pub mod grid;

pub use grid::{ConfigError, GridConfig, MissionConfig};
