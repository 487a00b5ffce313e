use crate::domain::core::Grid;
use thiserror::Error;

/// User-facing grid dimensions with caller-side limits
///
/// The rover core only requires dimensions >= 1. The command-line surface
/// additionally caps each dimension at `MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
}

impl GridConfig {
    pub const DEFAULT_WIDTH: i32 = Grid::DEFAULT_WIDTH;
    pub const DEFAULT_HEIGHT: i32 = Grid::DEFAULT_HEIGHT;
    pub const MIN_DIMENSION: i32 = 1;
    pub const MAX_DIMENSION: i32 = 100;

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Checks both dimensions against `MIN_DIMENSION..=MAX_DIMENSION`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < Self::MIN_DIMENSION || self.height < Self::MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Everything needed to run one rover mission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionConfig {
    pub x: i32,
    pub y: i32,
    pub direction: String,
    pub commands: String,
    pub grid: GridConfig,
}

impl MissionConfig {
    /// Applies the caller-side checks: grid limits first, then start X, then start Y
    ///
    /// Direction and command letters are not checked here; the caller
    /// parses them with the rover core's own parsers before calling this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;

        if self.x < 0 || self.x >= self.grid.width {
            return Err(ConfigError::StartXOutOfRange {
                x: self.x,
                max_x: self.grid.width - 1,
            });
        }

        if self.y < 0 || self.y >= self.grid.height {
            return Err(ConfigError::StartYOutOfRange {
                y: self.y,
                max_y: self.grid.height - 1,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Grid width and height must be at least 1 (got {width}x{height}).")]
    GridTooSmall { width: i32, height: i32 },
    #[error("Grid width and height maximum is 100 (got {width}x{height}).")]
    GridTooLarge { width: i32, height: i32 },
    #[error("Initial X must be within grid bounds (0 to {max_x}), got {x}.")]
    StartXOutOfRange { x: i32, max_x: i32 },
    #[error("Initial Y must be within grid bounds (0 to {max_y}), got {y}.")]
    StartYOutOfRange { y: i32, max_y: i32 },
}
