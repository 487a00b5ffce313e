//! Command-line argument definitions

use clap::{ArgAction, Parser};

use crate::config::{GridConfig, MissionConfig};

/// Simulate a Mars rover navigating a grid plateau.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Starting X coordinate
    pub x: i32,

    /// Starting Y coordinate
    pub y: i32,

    /// Starting direction (N|S|E|W)
    pub direction: String,

    /// Command sequence string (e.g. "FFRFF"), may be empty
    pub commands: String,

    /// Grid width
    #[arg(long, default_value_t = GridConfig::DEFAULT_WIDTH)]
    pub width: i32,

    /// Grid height
    #[arg(long, default_value_t = GridConfig::DEFAULT_HEIGHT)]
    pub height: i32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn mission(&self) -> MissionConfig {
        MissionConfig {
            x: self.x,
            y: self.y,
            direction: self.direction.clone(),
            commands: self.commands.clone(),
            grid: GridConfig::new(self.width, self.height),
        }
    }

    /// Default tracing directive for the requested verbosity
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "mars_rover=warn",
            1 => "mars_rover=info",
            _ => "mars_rover=debug",
        }
    }
}
