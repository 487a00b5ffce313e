//! Compass orientation and 90° turns
//!
//! Orientations are cyclically ordered North → East → South → West → North.
//! A clockwise turn is one step forward in that order, a counter-clockwise
//! turn one step backward. Letters are matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use crate::error::RoverError;

/// Direction the rover is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Parses a single orientation letter (N, E, S or W, case insensitive)
    ///
    /// # Examples
    /// ```rust
    /// use mars_rover::domain::orientation::Orientation;
    ///
    /// assert_eq!(Orientation::from_letter("n").unwrap(), Orientation::North);
    /// assert!(Orientation::from_letter("A").is_err());
    /// ```
    pub fn from_letter(letter: &str) -> Result<Self, RoverError> {
        match letter.to_ascii_uppercase().as_str() {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            _ => Err(RoverError::InvalidOrientation(letter.to_string())),
        }
    }

    /// Returns the single uppercase letter for this orientation
    pub fn letter(&self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    /// Position of this orientation in `ALL`
    fn index(&self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Returns the orientation after a 90° clockwise turn
    pub fn rotate_clockwise(&self) -> Orientation {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the orientation after a 90° counter-clockwise turn
    pub fn rotate_counter_clockwise(&self) -> Orientation {
        // -1 modulo 4
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Returns the (dx, dy) of one forward step
    pub fn unit_vector(&self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Orientation {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_letter(s)
    }
}
