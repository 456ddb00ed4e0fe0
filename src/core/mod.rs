//! Core engine types: player identity, RNG, configuration, actions, errors.
//!
//! Rules live elsewhere; these are the values they pass around.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionOutcome, ActionRecord};
pub use config::{CostTable, GameConfig};
pub use error::{ActionResult, ConfigError, GameError, SemiosphereFault};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
