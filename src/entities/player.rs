//! Turn participants.

use serde::{Deserialize, Serialize};

use super::planet::Planet;
use crate::board::Position;
use crate::core::{GameError, PlayerId};

/// A seated player.
///
/// `position` is `None` before initial placement, while inside the
/// semiosphere, and after being lost to the void.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Option<Position>,
    moves: u32,
    alive: bool,
    in_semiosphere: bool,
    planet_action_this_turn: bool,
    placed: bool,
    planet: Planet,
}

impl Player {
    /// A new player with `starting_moves` in hand and their planet carried.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, starting_moves: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position: None,
            moves: starting_moves,
            alive: true,
            in_semiosphere: false,
            planet_action_this_turn: false,
            placed: false,
            planet: Planet::new(id),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Remaining move budget.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn in_semiosphere(&self) -> bool {
        self.in_semiosphere
    }

    /// Whether the player has been put on the board at least once.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    #[must_use]
    pub fn planet_action_this_turn(&self) -> bool {
        self.planet_action_this_turn
    }

    #[must_use]
    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    /// Whether the player's own planet is on their person.
    #[must_use]
    pub fn carries_planet(&self) -> bool {
        self.planet.is_carried()
    }

    // === Budget ===

    /// Pay `cost` in full, or refuse without touching the budget.
    pub(crate) fn spend(&mut self, cost: u32) -> Result<(), GameError> {
        self.check_budget(cost)?;
        self.moves -= cost;
        Ok(())
    }

    /// Pay up to `cost`, stopping at zero. Returns what was actually paid.
    pub(crate) fn spend_clamped(&mut self, cost: u32) -> u32 {
        let paid = cost.min(self.moves);
        self.moves -= paid;
        paid
    }

    pub(crate) fn check_budget(&self, cost: u32) -> Result<(), GameError> {
        if cost > self.moves {
            return Err(GameError::InsufficientBudget {
                required: cost,
                available: self.moves,
            });
        }
        Ok(())
    }

    pub(crate) fn grant(&mut self, moves: u32) {
        self.moves = self.moves.saturating_add(moves);
    }

    /// Give up whatever is left; returns the forfeited amount.
    pub(crate) fn forfeit(&mut self) -> u32 {
        std::mem::take(&mut self.moves)
    }

    // === State transitions ===

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        if position.is_some() {
            self.placed = true;
        }
        self.position = position;
    }

    pub(crate) fn begin_turn(&mut self) {
        self.planet_action_this_turn = false;
    }

    pub(crate) fn note_planet_action(&mut self) {
        self.planet_action_this_turn = true;
    }

    pub(crate) fn enter_semiosphere(&mut self) {
        self.position = None;
        self.in_semiosphere = true;
    }

    pub(crate) fn leave_semiosphere(&mut self) {
        self.in_semiosphere = false;
    }

    pub(crate) fn eliminate(&mut self) {
        self.alive = false;
        self.position = None;
    }

    pub(crate) fn planet_mut(&mut self) -> &mut Planet {
        &mut self.planet
    }
}
