//! The advancing void.

use tracing::info;

use crate::board::{Board, VoidSweep};
use crate::core::{CostTable, GameError, PlayerMap};
use crate::entities::Player;

/// Advances the void frontier one row at a time.
#[derive(Clone, Copy, Debug)]
pub struct VoidProgression<'a> {
    costs: &'a CostTable,
}

impl<'a> VoidProgression<'a> {
    #[must_use]
    pub fn new(costs: &'a CostTable) -> Self {
        Self { costs }
    }

    /// Sweep the frontier row and move the frontier up by one.
    pub fn advance(&self, board: &mut Board, players: &mut PlayerMap<Player>) -> Result<VoidSweep, GameError> {
        if board.is_consumed() {
            return Err(GameError::invariant("the void has already taken every row"));
        }

        let row = board.void_frontier();
        let sweep = board.sweep_row_for_void(row, players, self.costs.void_mark_bonus)?;

        for player in &sweep.eliminated {
            info!(player = %player, name = players[*player].name(), row, "lost to the void");
        }
        for (owner, bonus) in &sweep.mark_bonuses {
            info!(player = %owner, bonus, row, "mark taken by the void");
        }
        for owner in &sweep.voided_planets {
            info!(player = %owner, row, "planet lost to the void");
        }

        Ok(sweep)
    }
}
