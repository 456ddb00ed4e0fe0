//! Things that live on (or off) the board: players, their planets, and marks.
//!
//! Cells refer to these by `PlayerId`; the entities refer back to cells by
//! `Position`. Nothing holds a reference into the board.

pub mod mark;
pub mod planet;
pub mod player;

pub use mark::Mark;
pub use planet::{Planet, PlanetLocation};
pub use player::Player;
