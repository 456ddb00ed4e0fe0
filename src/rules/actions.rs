//! Action legality and effects.
//!
//! `ActionProcessor` works in two steps. `validate` inspects the board and
//! the roster without touching them and produces a `Plan`; `commit` carries
//! the plan out. A refused action therefore never leaves partial state
//! behind, and an error raised during `commit` can only mean the engine's
//! own bookkeeping is broken.

use tracing::debug;

use crate::board::{Board, Direction, Position};
use crate::core::{
    Action, ActionOutcome, ActionResult, CostTable, GameError, PlayerId, PlayerMap,
    SemiosphereFault,
};
use crate::entities::{Mark, Player};

/// A validated action with everything `commit` needs precomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plan {
    Move { from: Position, to: Position, cost: u32 },
    PlaceMark { at: Position, cost: u32 },
    EraseMark { at: Position, cost: u32 },
    DropPlanet { at: Position, cost: u32 },
    EnterSemiosphere { from: Position, cost: u32, victory: bool },
    LeaveSemiosphere { to: Position, cost: u32 },
    Pass,
}

/// Validates and applies single actions against a board and roster.
#[derive(Clone, Copy, Debug)]
pub struct ActionProcessor<'a> {
    costs: &'a CostTable,
}

impl<'a> ActionProcessor<'a> {
    #[must_use]
    pub fn new(costs: &'a CostTable) -> Self {
        Self { costs }
    }

    /// Check whether `actor` may take `action` right now, without applying it.
    pub fn check(
        &self,
        board: &Board,
        players: &PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
    ) -> Result<(), GameError> {
        self.validate(board, players, actor, action).map(|_| ())
    }

    /// Validate `action` and, if legal, apply it.
    ///
    /// Costs are deducted only on success. Turn order is not checked here;
    /// that belongs to the game engine.
    pub fn apply(
        &self,
        board: &mut Board,
        players: &mut PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
    ) -> ActionResult {
        let plan = self.validate(board, players, actor, action)?;
        let outcome = self.commit(board, players, actor, action, plan)?;
        debug!(
            player = %actor,
            action = action.name(),
            cost = outcome.cost,
            moves_left = outcome.moves_left,
            "action applied"
        );
        Ok(outcome)
    }

    // === Validation ===

    fn validate(
        &self,
        board: &Board,
        players: &PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
    ) -> Result<Plan, GameError> {
        let player = players.get(actor).ok_or(GameError::UnknownPlayer(actor))?;
        if !player.is_alive() {
            return Err(GameError::PlayerEliminated(actor));
        }

        match action {
            Action::Move(direction) => self.validate_move(board, player, direction),
            Action::PlaceMark(at) => self.validate_place_mark(board, player, at),
            Action::EraseMark(at) => self.validate_erase_mark(board, player, at),
            Action::DropPlanet => self.validate_drop_planet(board, player),
            Action::EnterSemiosphere => self.validate_enter(board, player),
            Action::LeaveSemiosphere { column } => self.validate_leave(board, player, column),
            Action::Pass => Ok(Plan::Pass),
        }
    }

    fn validate_move(&self, board: &Board, player: &Player, direction: Direction) -> Result<Plan, GameError> {
        let from = player.position().ok_or(GameError::NotOnBoard(player.id()))?;
        let cost = self.costs.movement(direction);
        player.check_budget(cost)?;

        let to = board.step(from, direction)?;
        board.cell_at(to)?.entry_check(player)?;

        Ok(Plan::Move { from, to, cost })
    }

    fn validate_place_mark(&self, board: &Board, player: &Player, at: Position) -> Result<Plan, GameError> {
        let cost = self.costs.place_mark;
        player.check_budget(cost)?;

        let cell = board.cell_at(at)?;
        if cell.is_voided() {
            return Err(GameError::CellVoided(at));
        }
        if cell.mark().is_some() {
            return Err(GameError::MarkConflict(at));
        }
        if let Some(owner) = cell.planet() {
            return Err(GameError::PlanetBlocked { position: at, owner });
        }
        if cell.is_occupied() {
            return Err(GameError::CellOccupied(at));
        }

        Ok(Plan::PlaceMark { at, cost })
    }

    fn validate_erase_mark(&self, board: &Board, player: &Player, at: Position) -> Result<Plan, GameError> {
        let cost = self.costs.erase_mark;
        player.check_budget(cost)?;

        let cell = board.cell_at(at)?;
        if cell.is_voided() {
            return Err(GameError::CellVoided(at));
        }
        let mark = cell.mark().ok_or(GameError::NoMarkPresent(at))?;
        if mark.is_owned_by(player.id()) {
            return Err(GameError::OwnMarkErase(at));
        }

        Ok(Plan::EraseMark { at, cost })
    }

    fn validate_drop_planet(&self, board: &Board, player: &Player) -> Result<Plan, GameError> {
        let from = player.position().ok_or(GameError::NotOnBoard(player.id()))?;
        if !player.carries_planet() {
            return Err(GameError::PlanetNotCarried(player.id()));
        }
        let cost = self.costs.drop_planet;
        player.check_budget(cost)?;

        let at = board.step(from, Direction::Backward)?;
        let cell = board.cell_at(at)?;
        if cell.is_voided() {
            return Err(GameError::CellVoided(at));
        }
        if cell.is_occupied() {
            return Err(GameError::CellOccupied(at));
        }
        if let Some(mark) = cell.mark() {
            if !mark.is_owned_by(player.id()) {
                return Err(GameError::ForeignMarkProtected {
                    position: at,
                    owner: mark.owner(),
                });
            }
        }
        if let Some(owner) = cell.planet() {
            return Err(GameError::PlanetBlocked { position: at, owner });
        }

        Ok(Plan::DropPlanet { at, cost })
    }

    fn validate_enter(&self, board: &Board, player: &Player) -> Result<Plan, GameError> {
        if player.in_semiosphere() {
            return Err(GameError::InvalidSemiosphereState(SemiosphereFault::AlreadyInside));
        }
        let from = player.position().ok_or(GameError::NotOnBoard(player.id()))?;
        if from.row != board.top_row() {
            return Err(GameError::InvalidSemiosphereState(SemiosphereFault::NotOnTopRow));
        }
        let cost = self.costs.enter_semiosphere;
        player.check_budget(cost)?;

        Ok(Plan::EnterSemiosphere {
            from,
            cost,
            victory: player.carries_planet(),
        })
    }

    fn validate_leave(&self, board: &Board, player: &Player, column: usize) -> Result<Plan, GameError> {
        if !player.in_semiosphere() {
            return Err(GameError::InvalidSemiosphereState(SemiosphereFault::NotInSemiosphere));
        }
        if !board.has_valid_semiosphere_exit(player) {
            return Err(GameError::InvalidSemiosphereState(SemiosphereFault::NoExitAvailable));
        }
        let cost = self.costs.leave_semiosphere;
        player.check_budget(cost)?;

        let to = Position::new(board.top_row(), column);
        board.cell_at(to)?.entry_check(player)?;

        Ok(Plan::LeaveSemiosphere { to, cost })
    }

    // === Commit ===

    fn commit(
        &self,
        board: &mut Board,
        players: &mut PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
        plan: Plan,
    ) -> ActionResult {
        let player = &mut players[actor];
        let mut planet_pickup = None;
        let mut victory = false;

        let cost = match plan {
            Plan::Move { from, to, cost } => {
                player.spend(cost)?;
                board.cell_at_mut(from)?.remove_occupant();
                planet_pickup = board
                    .cell_at_mut(to)?
                    .place_occupant(player, self.costs.planet_pickup)?;
                cost
            }
            Plan::PlaceMark { at, cost } => {
                board.cell_at_mut(at)?.add_mark(Mark::new(actor, at))?;
                player.spend(cost)?;
                cost
            }
            Plan::EraseMark { at, cost } => {
                board.cell_at_mut(at)?.remove_mark()?;
                player.spend(cost)?;
                cost
            }
            Plan::DropPlanet { at, cost } => {
                board.cell_at_mut(at)?.add_planet(actor)?;
                player.planet_mut().drop_at(at)?;
                player.note_planet_action();
                player.spend(cost)?;
                cost
            }
            Plan::EnterSemiosphere { from, cost, victory: wins } => {
                board.cell_at_mut(from)?.remove_occupant();
                player.enter_semiosphere();
                player.spend(cost)?;
                victory = wins;
                cost
            }
            Plan::LeaveSemiosphere { to, cost } => {
                player.spend(cost)?;
                planet_pickup = board
                    .cell_at_mut(to)?
                    .place_occupant(player, self.costs.planet_pickup)?;
                player.leave_semiosphere();
                cost
            }
            Plan::Pass => player.forfeit(),
        };

        Ok(ActionOutcome {
            action,
            cost,
            planet_pickup,
            moves_left: player.moves(),
            victory,
        })
    }
}
