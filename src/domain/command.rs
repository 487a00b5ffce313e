//! Rover commands and command-string parsing
//!
//! A command string is accepted or rejected as a whole: `parse_commands`
//! checks every character before returning any command.

use crate::error::RoverError;

/// A single discrete rover instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell along the current orientation
    Forward,
    /// Move one cell against the current orientation
    Backward,
    /// Turn 90° counter-clockwise
    Left,
    /// Turn 90° clockwise
    Right,
}

impl Command {
    /// Maps a command letter to a command (case insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }
}

/// Parses a full command string
///
/// # Arguments
/// * `commands` - Sequence of F, B, L, R letters (any case, may be empty)
///
/// # Returns
/// The commands in order, or `RoverError::InvalidCommandChars` naming the
/// first character outside {F, B, L, R} and its character index
///
/// # Example
/// ```rust
/// use mars_rover::domain::command::{parse_commands, Command};
///
/// let cmds = parse_commands("fR").unwrap();
/// assert_eq!(cmds, vec![Command::Forward, Command::Right]);
/// assert!(parse_commands("FX").is_err());
/// ```
pub fn parse_commands(commands: &str) -> Result<Vec<Command>, RoverError> {
    commands
        .chars()
        .enumerate()
        .map(|(index, c)| {
            Command::from_char(c).ok_or(RoverError::InvalidCommandChars {
                found: c,
                index,
            })
        })
        .collect()
}
