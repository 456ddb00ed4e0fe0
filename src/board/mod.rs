//! The grid and its squares.
//!
//! - `Position` / `Direction`: addressing and single-step movement
//! - `Cell`: occupancy, mark, planet, and the entry rules
//! - `Board`: the cell arena, the void frontier and the row sweep

pub mod cell;
pub mod grid;
pub mod position;

pub use cell::{Cell, Occupancy};
pub use grid::{Board, VoidSweep};
pub use position::{Direction, Position};
