//! Application controller and coordination layer
//!
//! The controller validates the caller-side limits, builds the rover,
//! replays the command string once and reports the final state. It is the
//! only layer that logs.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, MissionConfig};
use crate::domain::command::parse_commands;
use crate::domain::core::{Grid, Position};
use crate::domain::orientation::Orientation;
use crate::domain::rover::{CommandSummary, MoveOutcome, Rover};
use crate::error::RoverError;

/// Application errors that can occur during a mission run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Caller-side limits rejected the input
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The rover core rejected the input
    #[error(transparent)]
    Rover(#[from] RoverError),
}

impl AppError {
    /// Process exit status reported by the command-line shell
    pub fn exit_status(&self) -> u8 {
        EXIT_FAILURE
    }
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for the outcome of `MissionController::run`
pub fn exit_status(result: &Result<MissionReport, AppError>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => err.exit_status(),
    }
}

/// Final state of a completed mission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    pub rover: Rover,
    pub summary: CommandSummary,
}

impl MissionReport {
    /// Line printed by the command-line shell on success
    pub fn final_position_line(&self) -> String {
        format!("Final position: {}", self.rover.final_position_string())
    }
}

/// Runs rover missions
#[derive(Debug, Default)]
pub struct MissionController;

impl MissionController {
    pub fn new() -> Self {
        Self
    }

    /// Validates the mission, builds the rover and processes all commands
    ///
    /// Checks run in order: direction letter, command letters, grid limits,
    /// start X, start Y.
    ///
    /// # Returns
    /// The final rover state, or the first violated constraint. No command is
    /// applied unless the whole command string is valid.
    pub fn run(&self, mission: &MissionConfig) -> Result<MissionReport, AppError> {
        info!(
            x = mission.x,
            y = mission.y,
            direction = %mission.direction,
            width = mission.grid.width,
            height = mission.grid.height,
            "starting mission"
        );

        // Letters are checked ahead of the grid limits
        let orientation = Orientation::from_letter(&mission.direction)
            .inspect_err(|err| debug!(%err, "bad direction"))?;
        parse_commands(&mission.commands)
            .inspect_err(|err| debug!(%err, "bad command string"))?;

        mission
            .validate()
            .inspect_err(|err| debug!(%err, "mission rejected"))?;

        let grid = Grid::new(mission.grid.width, mission.grid.height)?;
        let mut rover = Rover::from_parts(Position::new(mission.x, mission.y), orientation, grid)?;

        let summary = rover.process_commands_with(&mission.commands, |index, command, outcome, now| {
            if outcome == MoveOutcome::Blocked {
                debug!(index, command = %command.letter(), at = %now, "move blocked by grid edge");
            } else {
                debug!(index, command = %command.letter(), now = %now, "command executed");
            }
        })?;

        info!(
            final_position = %rover,
            executed = summary.executed,
            blocked = summary.blocked,
            "mission complete"
        );

        Ok(MissionReport { rover, summary })
    }
}
