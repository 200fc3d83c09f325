use core::ops::RangeInclusive;
use core::result::Result;

use serde::{Deserialize, Serialize};

use crate::*;

pub const MIN_DIMENSION: Coord = 5;
pub const MAX_DIMENSION: Coord = 39;

/// Accepted board dimensions. The error message talks about "greater than 4
/// and less than 40", the accepted range is 5 through 39.
pub const DIMENSION_RANGE: RangeInclusive<Coord> = MIN_DIMENSION..=MAX_DIMENSION;

pub const DEFAULT_DIMENSION: Coord = 9;
pub const DEFAULT_MINES: CellCount = 8;

/// At most half of the board (rounded down) may hold mines.
pub const fn max_mines(dimension: Coord) -> CellCount {
    mult(dimension, dimension) / 2
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dimension: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(dimension: Coord, mines: CellCount) -> Self {
        Self { dimension, mines }
    }

    pub fn new(dimension: Coord, mines: CellCount) -> Result<Self, ConfigError> {
        let config = Self::new_unchecked(dimension, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = max_mines(self.dimension);
        if self.mines < 1 {
            Err(ConfigError::TooFewMines)
        } else if self.mines > max {
            Err(ConfigError::TooManyMines {
                requested: self.mines,
                max,
            })
        } else if !DIMENSION_RANGE.contains(&self.dimension) {
            Err(ConfigError::InvalidDimension(self.dimension))
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.dimension, self.dimension)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_DIMENSION, DEFAULT_MINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn dimension_bounds_are_five_through_thirty_nine() {
        assert_eq!(
            GameConfig::new(4, 1),
            Err(ConfigError::InvalidDimension(4))
        );
        assert!(GameConfig::new(5, 1).is_ok());
        assert!(GameConfig::new(39, 1).is_ok());
        assert_eq!(
            GameConfig::new(40, 1),
            Err(ConfigError::InvalidDimension(40))
        );
    }

    #[test]
    fn mine_count_bounds() {
        assert_eq!(GameConfig::new(9, 0), Err(ConfigError::TooFewMines));
        assert!(GameConfig::new(9, 40).is_ok());
        assert_eq!(
            GameConfig::new(9, 41),
            Err(ConfigError::TooManyMines {
                requested: 41,
                max: 40
            })
        );
    }

    #[test]
    fn mine_checks_come_before_dimension_check() {
        assert_eq!(GameConfig::new(2, 0), Err(ConfigError::TooFewMines));
        assert_eq!(
            GameConfig::new(2, 3),
            Err(ConfigError::TooManyMines {
                requested: 3,
                max: 2
            })
        );
    }
}
