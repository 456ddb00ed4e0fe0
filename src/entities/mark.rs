//! Ownership stamps left on cells.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::PlayerId;

/// A claim stamped on a cell.
///
/// A mark lives inside exactly one `Cell`; erasing it drops the value. It
/// keeps sitting on its cell after the void takes that cell, but by then its
/// bonus has already been paid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    owner: PlayerId,
    position: Position,
}

impl Mark {
    #[must_use]
    pub fn new(owner: PlayerId, position: Position) -> Self {
        Self { owner, position }
    }

    /// The player who stamped this mark.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// The cell this mark sits on.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether `player` may walk over this mark and is barred from erasing it.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }
}
