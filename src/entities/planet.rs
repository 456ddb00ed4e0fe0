//! The planet each player carries toward the semiosphere.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::{GameError, PlayerId};

/// Where a planet currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetLocation {
    /// On its owner's person.
    Carried,
    /// Resting on a board cell.
    Dropped(Position),
}

/// A player-bound token.
///
/// Reaching the semiosphere while carrying it wins the game. Once voided it
/// stays on its (voided) cell forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    owner: PlayerId,
    location: PlanetLocation,
    voided: bool,
}

impl Planet {
    /// A fresh planet, carried by its owner.
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            location: PlanetLocation::Carried,
            voided: false,
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn location(&self) -> PlanetLocation {
        self.location
    }

    #[must_use]
    pub fn is_carried(&self) -> bool {
        self.location == PlanetLocation::Carried
    }

    #[must_use]
    pub fn is_voided(&self) -> bool {
        self.voided
    }

    /// The cell the planet rests on, if dropped.
    #[must_use]
    pub fn dropped_at(&self) -> Option<Position> {
        match self.location {
            PlanetLocation::Dropped(position) => Some(position),
            PlanetLocation::Carried => None,
        }
    }

    pub(crate) fn drop_at(&mut self, position: Position) -> Result<(), GameError> {
        if !self.is_carried() {
            return Err(GameError::invariant(format!(
                "{}'s planet dropped while already on the board",
                self.owner
            )));
        }
        self.location = PlanetLocation::Dropped(position);
        Ok(())
    }

    pub(crate) fn pick_up(&mut self) -> Result<(), GameError> {
        if self.is_carried() || self.voided {
            return Err(GameError::invariant(format!(
                "{}'s planet cannot be picked up from {:?}",
                self.owner, self.location
            )));
        }
        self.location = PlanetLocation::Carried;
        Ok(())
    }

    pub(crate) fn mark_voided(&mut self) -> Result<(), GameError> {
        if self.is_carried() {
            return Err(GameError::invariant(format!(
                "{}'s planet voided while carried",
                self.owner
            )));
        }
        self.voided = true;
        Ok(())
    }
}
