//! Player actions and their recorded outcomes.
//!
//! An `Action` is the only way a player changes the game during a round. The
//! engine answers every action with an `ActionResult`: either an
//! `ActionOutcome` describing what was paid, or a typed `GameError`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{Direction, Position};

/// An in-turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one cell in a direction.
    Move(Direction),
    /// Stamp a mark on any cell of the board.
    PlaceMark(Position),
    /// Erase another player's mark.
    EraseMark(Position),
    /// Drop the carried planet on the cell directly behind.
    DropPlanet,
    /// Step from the topmost row into the semiosphere.
    EnterSemiosphere,
    /// Step from the semiosphere onto a topmost-row cell.
    LeaveSemiosphere { column: usize },
    /// Forfeit the remaining budget and end the turn.
    Pass,
}

impl Action {
    /// Every movement action.
    pub const MOVES: [Action; 4] = [
        Action::Move(Direction::Forward),
        Action::Move(Direction::Backward),
        Action::Move(Direction::Left),
        Action::Move(Direction::Right),
    ];

    /// Short name, used in log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::PlaceMark(_) => "place_mark",
            Action::EraseMark(_) => "erase_mark",
            Action::DropPlanet => "drop_planet",
            Action::EnterSemiosphere => "enter_semiosphere",
            Action::LeaveSemiosphere { .. } => "leave_semiosphere",
            Action::Pass => "pass",
        }
    }
}

/// What a successful action did to the actor's budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The action that was applied.
    pub action: Action,
    /// Moves paid for the action itself.
    pub cost: u32,
    /// Moves charged for picking a planet back up, if one was recovered.
    pub planet_pickup: Option<u32>,
    /// Budget remaining afterwards.
    pub moves_left: u32,
    /// Whether this action won the game.
    pub victory: bool,
}

/// An applied action, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub player: PlayerId,
    /// Round in which the action happened (starts at 1).
    pub round: u32,
    /// Sequence number within the round.
    pub sequence: u32,
    /// What happened.
    pub outcome: ActionOutcome,
}
