//! Rover state and command execution
//!
//! The rover owns its position, orientation and the grid that bounds it.
//! Commands mutate the state one discrete step at a time. A move that would
//! leave the grid is discarded and processing continues with the next
//! command (wall absorption).

use std::fmt;

use crate::domain::command::{parse_commands, Command};
use crate::domain::core::{Grid, Position};
use crate::domain::orientation::Orientation;
use crate::error::RoverError;

/// Result of executing a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The rover moved to a new cell
    Moved(Position),
    /// The move would have left the grid and was discarded
    Blocked,
    /// The rover turned to a new orientation
    Turned(Orientation),
}

/// Tally of a processed command string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandSummary {
    pub executed: usize,
    pub moved: usize,
    pub blocked: usize,
    pub turned: usize,
}

impl CommandSummary {
    /// Counts one executed command
    pub fn record(&mut self, outcome: MoveOutcome) {
        self.executed += 1;
        match outcome {
            MoveOutcome::Moved(_) => self.moved += 1,
            MoveOutcome::Blocked => self.blocked += 1,
            MoveOutcome::Turned(_) => self.turned += 1,
        }
    }
}

/// Rover on a bounded grid
///
/// Invariant: `grid.contains(position)` holds after construction and after
/// every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    orientation: Orientation,
    grid: Grid,
}

impl Rover {
    /// Creates a rover from primitive inputs
    ///
    /// # Arguments
    /// * `x`, `y` - Starting cell
    /// * `orientation` - Starting direction letter (N, E, S, W, case insensitive)
    /// * `width`, `height` - Grid dimensions (must be >= 1)
    ///
    /// # Returns
    /// A new Rover, or the first violated constraint checked in order:
    /// orientation, grid size, initial bounds
    ///
    /// # Example
    /// ```rust
    /// use mars_rover::domain::rover::Rover;
    ///
    /// let mut rover = Rover::new(0, 0, "n", 10, 10).unwrap();
    /// rover.process_commands("FFRF").unwrap();
    /// assert_eq!(rover.final_position_string(), "1,2,E");
    /// ```
    pub fn new(
        x: i32,
        y: i32,
        orientation: &str,
        width: i32,
        height: i32,
    ) -> Result<Self, RoverError> {
        let orientation = Orientation::from_letter(orientation)?;
        let grid = Grid::new(width, height)?;
        Self::from_parts(Position::new(x, y), orientation, grid)
    }

    /// Creates a rover on the default 10x10 grid
    pub fn with_default_grid(x: i32, y: i32, orientation: &str) -> Result<Self, RoverError> {
        Self::new(x, y, orientation, Grid::DEFAULT_WIDTH, Grid::DEFAULT_HEIGHT)
    }

    /// Creates a rover from already typed parts, checking only the bounds
    pub fn from_parts(
        position: Position,
        orientation: Orientation,
        grid: Grid,
    ) -> Result<Self, RoverError> {
        if !grid.contains(position) {
            let max = grid.max_position();
            return Err(RoverError::OutOfBounds {
                x: position.x,
                y: position.y,
                max_x: max.x,
                max_y: max.y,
            });
        }

        Ok(Self {
            position,
            orientation,
            grid,
        })
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Processes a full command string
    ///
    /// The string is validated before any command runs, so an invalid string
    /// leaves the rover untouched. Moves blocked by the grid edge are not
    /// errors and are reported only through the returned summary.
    ///
    /// # Arguments
    /// * `commands` - Sequence of F, B, L, R (case insensitive, may be empty)
    ///
    /// # Returns
    /// Tally of executed commands, or `RoverError::InvalidCommandChars`
    pub fn process_commands(&mut self, commands: &str) -> Result<CommandSummary, RoverError> {
        self.process_commands_with(commands, |_, _, _, _| {})
    }

    /// Same as `process_commands`, calling `on_step` after each executed command
    ///
    /// `on_step` receives the command index, the command, its outcome and
    /// the rover state after the step. It is never called for a rejected string.
    pub fn process_commands_with<F>(
        &mut self,
        commands: &str,
        mut on_step: F,
    ) -> Result<CommandSummary, RoverError>
    where
        F: FnMut(usize, Command, MoveOutcome, &Rover),
    {
        let commands = parse_commands(commands)?;

        let mut summary = CommandSummary::default();
        for (index, command) in commands.into_iter().enumerate() {
            let outcome = self.execute(command);
            summary.record(outcome);
            on_step(index, command, outcome, self);
        }

        Ok(summary)
    }

    /// Executes one command
    pub fn execute(&mut self, command: Command) -> MoveOutcome {
        match command {
            Command::Forward => self.advance(1),
            Command::Backward => self.advance(-1),
            Command::Left => {
                self.orientation = self.orientation.rotate_counter_clockwise();
                MoveOutcome::Turned(self.orientation)
            }
            Command::Right => {
                self.orientation = self.orientation.rotate_clockwise();
                MoveOutcome::Turned(self.orientation)
            }
        }
    }

    /// Moves `step` cells along the current orientation if the target is on the grid
    fn advance(&mut self, step: i32) -> MoveOutcome {
        let (dx, dy) = self.orientation.unit_vector();
        let candidate = self.position.offset(dx * step, dy * step);

        if self.grid.contains(candidate) {
            self.position = candidate;
            MoveOutcome::Moved(candidate)
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Returns the final state formatted as "x,y,D"
    pub fn final_position_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.orientation)
    }
}
