//! Game rules: what players may do, and what the void does to them.
//!
//! - `ActionProcessor`: validate-then-commit for every in-turn action
//! - `VoidProgression`: the once-per-round frontier sweep
//! - `GamePhase` / `GameOutcome`: the win-condition state machine
//!
//! The rules operate on a `Board` and a `PlayerMap<Player>` passed in by the
//! caller; turn order and round structure live in `crate::game`.

pub mod actions;
pub mod outcome;
pub mod void;

pub use actions::ActionProcessor;
pub use outcome::{GameOutcome, GamePhase, WinReason};
pub use void::VoidProgression;
