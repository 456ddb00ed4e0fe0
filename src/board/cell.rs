//! A single grid square.
//!
//! A cell tracks who stands on it, whether the void has taken it, and the
//! mark and planet resting on it. The entry rules for players live here so
//! movement, placement and semiosphere exits all share one legality check.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::position::Position;
use crate::core::{GameError, PlayerId};
use crate::entities::{Mark, Player};

/// Occupancy state of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Empty,
    Occupied(PlayerId),
    /// Taken by the void. Terminal.
    Voided,
}

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    occupancy: Occupancy,
    mark: Option<Mark>,
    /// Owner of the planet resting here.
    planet: Option<PlayerId>,
}

impl Cell {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            occupancy: Occupancy::Empty,
            mark: None,
            planet: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    #[must_use]
    pub fn occupant(&self) -> Option<PlayerId> {
        match self.occupancy {
            Occupancy::Occupied(player) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy == Occupancy::Empty
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied(_))
    }

    #[must_use]
    pub fn is_voided(&self) -> bool {
        self.occupancy == Occupancy::Voided
    }

    #[must_use]
    pub fn mark(&self) -> Option<&Mark> {
        self.mark.as_ref()
    }

    /// Owner of the planet resting here, if any.
    #[must_use]
    pub fn planet(&self) -> Option<PlayerId> {
        self.planet
    }

    // === Entry ===

    /// Whether `player` may step onto this cell.
    #[must_use]
    pub fn can_enter(&self, player: &Player) -> bool {
        self.entry_check(player).is_ok()
    }

    /// Like `can_enter`, but names the reason for a refusal.
    pub fn entry_check(&self, player: &Player) -> Result<(), GameError> {
        let position = self.position;

        if self.is_voided() {
            return Err(GameError::CellVoided(position));
        }
        if self.is_occupied() {
            return Err(GameError::CellOccupied(position));
        }
        if let Some(owner) = self.planet {
            // Own planet is blocked only after a planet action this turn.
            if owner != player.id() || player.planet_action_this_turn() {
                return Err(GameError::PlanetBlocked { position, owner });
            }
        }
        if let Some(mark) = &self.mark {
            if !mark.is_owned_by(player.id()) {
                return Err(GameError::ForeignMarkProtected {
                    position,
                    owner: mark.owner(),
                });
            }
        }
        Ok(())
    }

    /// Put `player` on this cell.
    ///
    /// If the player's own planet rests here it is picked up and
    /// `pickup_cost` is charged, clamped at zero. Returns the amount charged
    /// for the pickup, or `None` when no planet was recovered.
    pub fn place_occupant(
        &mut self,
        player: &mut Player,
        pickup_cost: u32,
    ) -> Result<Option<u32>, GameError> {
        self.entry_check(player)?;

        let recovered = if self.planet.is_some() {
            player.planet_mut().pick_up()?;
            self.planet = None;
            true
        } else {
            false
        };

        self.occupancy = Occupancy::Occupied(player.id());
        player.set_position(Some(self.position));

        Ok(recovered.then(|| player.spend_clamped(pickup_cost)))
    }

    /// Clear the occupant. A cell with nobody on it is left untouched.
    pub fn remove_occupant(&mut self) -> Option<PlayerId> {
        match self.occupancy {
            Occupancy::Occupied(player) => {
                self.occupancy = Occupancy::Empty;
                Some(player)
            }
            other => {
                warn!(position = %self.position, state = ?other, "no occupant to remove");
                None
            }
        }
    }

    // === Marks ===

    pub fn add_mark(&mut self, mark: Mark) -> Result<(), GameError> {
        if mark.position() != self.position {
            return Err(GameError::invariant(format!(
                "mark for {} attached to {}",
                mark.position(),
                self.position
            )));
        }
        if self.is_voided() {
            return Err(GameError::CellVoided(self.position));
        }
        if self.mark.is_some() {
            return Err(GameError::MarkConflict(self.position));
        }
        self.mark = Some(mark);
        Ok(())
    }

    pub fn remove_mark(&mut self) -> Result<Mark, GameError> {
        self.mark
            .take()
            .ok_or_else(|| GameError::invariant(format!("no mark to remove at {}", self.position)))
    }

    // === Planets ===

    pub fn add_planet(&mut self, owner: PlayerId) -> Result<(), GameError> {
        if let Some(existing) = self.planet {
            return Err(GameError::invariant(format!(
                "{owner}'s planet dropped onto {existing}'s planet at {}",
                self.position
            )));
        }
        if self.is_voided() {
            return Err(GameError::invariant(format!(
                "planet dropped into the void at {}",
                self.position
            )));
        }
        self.planet = Some(owner);
        Ok(())
    }

    pub fn remove_planet(&mut self) -> Result<PlayerId, GameError> {
        self.planet
            .take()
            .ok_or_else(|| GameError::invariant(format!("no planet to remove at {}", self.position)))
    }

    // === Void ===

    /// Hand the cell to the void. Returns whoever was standing on it.
    pub fn mark_voided(&mut self) -> Option<PlayerId> {
        let occupant = self.occupant();
        self.occupancy = Occupancy::Voided;
        occupant
    }
}
