//! The playable game: setup, turns, rounds and views.

mod engine;
mod snapshot;

pub use engine::{Game, GameBuilder, RoundResult};
pub use snapshot::{BoardView, CellView, PlayerView};
