//! Game configuration.
//!
//! - `CostTable`: every constant of the move economy
//! - `GameConfig`: board dimensions, seed and costs
//!
//! Both deserialize with defaults for missing fields, so a TOML file only
//! needs to name what it changes:
//!
//! ```
//! use semiosphere::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("rows = 6\n[costs]\nerase_mark = 3\n").unwrap();
//! assert_eq!(config.rows, 6);
//! assert_eq!(config.columns, 8);
//! assert_eq!(config.costs.erase_mark, 3);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::Direction;

/// Move-economy constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTable {
    /// Move one row away from the void.
    pub move_forward: u32,
    /// Move one row toward the void.
    pub move_backward: u32,
    /// Move one column left.
    pub move_left: u32,
    /// Move one column right.
    pub move_right: u32,
    /// Stamp a mark on any cell.
    pub place_mark: u32,
    /// Erase another player's mark.
    pub erase_mark: u32,
    /// Drop the carried planet on the cell behind.
    pub drop_planet: u32,
    /// Charged (clamped at 0) when walking back onto one's own planet.
    pub planet_pickup: u32,
    /// Step from the top row into the semiosphere.
    pub enter_semiosphere: u32,
    /// Step from the semiosphere back onto the top row.
    pub leave_semiosphere: u32,
    /// Awarded to a mark's owner when the void swallows the marked cell.
    pub void_mark_bonus: u32,
    /// Budget every player starts the game with.
    pub starting_moves: u32,
    /// Budget granted to every survivor each round.
    pub base_allotment: u32,
    /// Extra budget each round while a player's planet is off their person.
    pub dropped_planet_bonus: u32,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            move_forward: 1,
            move_backward: 0,
            move_left: 1,
            move_right: 1,
            place_mark: 1,
            erase_mark: 2,
            drop_planet: 1,
            planet_pickup: 2,
            enter_semiosphere: 5,
            leave_semiosphere: 0,
            void_mark_bonus: 1,
            starting_moves: 3,
            base_allotment: 3,
            dropped_planet_bonus: 2,
        }
    }
}

impl CostTable {
    /// Cost of a single step in `direction`.
    #[must_use]
    pub fn movement(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Forward => self.move_forward,
            Direction::Backward => self.move_backward,
            Direction::Left => self.move_left,
            Direction::Right => self.move_right,
        }
    }
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows; row 0 is the first to fall to the void.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Seed for the turn-order shuffle.
    pub seed: u64,
    /// Move economy.
    pub costs: CostTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 11,
            columns: 8,
            seed: 42,
            costs: CostTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the board is playable: at least two rows (an origin row and a
    /// top row) and one column.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.columns < 1 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the turn-order seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the cost table.
    #[must_use]
    pub fn with_costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }
}
