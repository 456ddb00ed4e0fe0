//! # semiosphere
//!
//! Rule engine for Semiosphere, a turn-based board game for 2 to 4 players.
//!
//! Each player starts on row 0 of a rectangular grid carrying their planet.
//! After every round the void takes the lowest remaining row, together with
//! whoever stands on it. A player wins by stepping off the top row into the
//! semiosphere while carrying their own planet, or by being the last one left.
//!
//! ## Design Principles
//!
//! 1. **Arena + indices**: The board owns every cell; players, marks and
//!    planets refer to each other by `PlayerId` and `Position`, never by
//!    reference.
//!
//! 2. **Validate, then commit**: Every action is checked against an
//!    immutable view before anything changes. A refused action leaves the
//!    game exactly as it was.
//!
//! 3. **Typed failures**: Illegal actions return a `GameError` naming the
//!    rule that refused them. Only `GameError::InvariantViolation` means the
//!    engine itself is in trouble.
//!
//! 4. **Deterministic**: Turn order comes from a seeded `GameRng`; the same
//!    seed and the same actions always replay the same game.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, actions, errors
//! - `board`: Positions, cells, the grid and the void sweep
//! - `entities`: Players, planets and marks
//! - `rules`: Action legality and effects, the void, outcomes
//! - `game`: Setup, turn order, rounds, snapshots
//!
//! ## Example
//!
//! ```
//! use semiosphere::{Action, Direction, GameBuilder};
//!
//! let mut game = GameBuilder::new().seed(3).players(["Ada", "Frost"]).build().unwrap();
//! let order = game.turn_order().to_vec();
//! for (column, player) in order.into_iter().enumerate() {
//!     game.initial_placement(player, column).unwrap();
//! }
//!
//! let first = game.active_player().unwrap();
//! let outcome = game.apply_action(first, Action::Move(Direction::Forward)).unwrap();
//! assert_eq!(outcome.moves_left, 2);
//! ```

pub mod board;
pub mod core;
pub mod entities;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord, ActionResult, ConfigError, CostTable, GameConfig,
    GameError, GameRng, PlayerId, PlayerMap, SemiosphereFault,
};

pub use crate::board::{Board, Cell, Direction, Occupancy, Position, VoidSweep};

pub use crate::entities::{Mark, Planet, PlanetLocation, Player};

pub use crate::rules::{ActionProcessor, GameOutcome, GamePhase, VoidProgression, WinReason};

pub use crate::game::{BoardView, CellView, Game, GameBuilder, PlayerView, RoundResult};
