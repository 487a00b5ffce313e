//! Core domain types and operations
//!
//! This module defines the pure value types the rover moves through: a cell
//! position and the rectangular grid that bounds it.

use crate::error::RoverError;

/// Cell position on the plateau
///
/// Origin (0,0) is the south-west corner; `y` grows to the north and `x`
/// grows to the east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Rectangular grid of `width` × `height` cells
///
/// Valid cells are `[0, width-1] × [0, height-1]`. Both dimensions are at
/// least one, so every grid has at least one valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Grid width used when the caller supplies none
    pub const DEFAULT_WIDTH: i32 = 10;
    /// Grid height used when the caller supplies none
    pub const DEFAULT_HEIGHT: i32 = 10;

    /// Creates a new grid
    ///
    /// # Arguments
    /// * `width` - Number of columns (must be >= 1)
    /// * `height` - Number of rows (must be >= 1)
    ///
    /// # Returns
    /// A new Grid or `RoverError::InvalidGridSize` if either dimension is < 1
    ///
    /// # Example
    /// ```rust
    /// use mars_rover::domain::core::Grid;
    ///
    /// let grid = Grid::new(5, 3).unwrap();
    /// assert_eq!(grid.dimensions(), (5, 3));
    /// assert!(Grid::new(0, 3).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, RoverError> {
        if width < 1 || height < 1 {
            return Err(RoverError::InvalidGridSize { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the grid dimensions as (width, height)
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns true if the position lies on a valid cell of this grid
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Returns the largest valid position (north-east corner)
    pub fn max_position(&self) -> Position {
        Position::new(self.width - 1, self.height - 1)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_offset() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.offset(1, 0), Position::new(4, 4));
        assert_eq!(pos.offset(0, -1), Position::new(3, 3));
        assert_eq!(pos, Position::new(3, 4)); // Original untouched
    }

    #[test]
    fn grid_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(RoverError::InvalidGridSize { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(-3, -3).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn grid_contains_position() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(grid.contains(Position::new(0, 0))); // Origin
        assert!(grid.contains(Position::new(2, 1))); // Far corner
        assert!(!grid.contains(Position::new(3, 1))); // Past east edge
        assert!(!grid.contains(Position::new(2, 2))); // Past north edge
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
    }

    #[test]
    fn default_grid_is_ten_by_ten() {
        let grid = Grid::default();
        assert_eq!(grid.dimensions(), (10, 10));
        assert_eq!(grid.max_position(), Position::new(9, 9));
    }
}
