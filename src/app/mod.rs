//! Application orchestration layer
//!
//! This module coordinates between the configuration and domain layers.
//! It turns a validated mission description into a final rover state.

pub mod controller;

pub use controller::{exit_status, AppError, MissionController, MissionReport};
