//! Game phases and terminal outcomes.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Entered the semiosphere carrying their own planet.
    SemiosphereWithPlanet,
    /// Everyone else was lost to the void.
    LastSurvivor,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner { player: PlayerId, reason: WinReason },
    /// Nobody can win any more: every player was lost, or the void took the
    /// whole board while several waited in the semiosphere.
    Abandoned,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner { player: p, .. } if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner { player, .. } => Some(*player),
            GameOutcome::Abandoned => None,
        }
    }

    /// Decide the game after a void sweep, if it is decided.
    ///
    /// One survivor wins by default; none abandons the game. With several
    /// survivors the game goes on, unless the board is gone and nobody can
    /// ever leave the semiosphere again.
    #[must_use]
    pub fn after_sweep(survivors: &[PlayerId], board_consumed: bool) -> Option<Self> {
        match survivors {
            [] => Some(GameOutcome::Abandoned),
            [only] => Some(GameOutcome::Winner {
                player: *only,
                reason: WinReason::LastSurvivor,
            }),
            _ if board_consumed => Some(GameOutcome::Abandoned),
            _ => None,
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are still being placed on row 0.
    Setup,
    /// Rounds are being played.
    Playing,
    /// Terminal.
    Finished(GameOutcome),
}

impl GamePhase {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GamePhase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
