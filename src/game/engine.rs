//! Turn engine: setup, rounds, turn order and win evaluation.
//!
//! A game runs through three phases:
//!
//! 1. **Setup** – every player is placed on row 0 with `initial_placement`.
//! 2. **Playing** – the active player submits actions with `apply_action`
//!    until their budget is spent; play then passes to the next player in
//!    turn order. Once nobody has moves left, `advance_round` lets the void
//!    take a row, removes the fallen, checks for a winner and hands out the
//!    next round's budgets.
//! 3. **Finished** – terminal; every further action is refused.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, error, info, instrument};

use super::snapshot::BoardView;
use crate::board::{Board, Position, VoidSweep};
use crate::core::{
    Action, ActionRecord, ActionResult, ConfigError, GameConfig, GameError, GameRng, PlayerId,
    PlayerMap, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::entities::Player;
use crate::rules::{ActionProcessor, GameOutcome, GamePhase, VoidProgression, WinReason};

/// What `advance_round` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The round that just ended.
    pub round: u32,
    /// Effects of the void sweep.
    pub sweep: VoidSweep,
    /// Moves granted to each survivor for the next round.
    pub replenished: SmallVec<[(PlayerId, u32); 4]>,
    /// Set when the sweep decided the game.
    pub outcome: Option<GameOutcome>,
}

impl RoundResult {
    /// Players newly lost to the void this round.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        &self.sweep.eliminated
    }
}

/// Builder for a `Game`.
///
/// ```
/// use semiosphere::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .dimensions(11, 8)
///     .seed(7)
///     .player("Frost")
///     .player("Ada")
///     .build()
///     .unwrap();
///
/// assert_eq!(game.turn_order().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    names: Vec<String>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.config = self.config.with_dimensions(rows, columns);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Seat a player. Seats are numbered in the order they are added.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Seat several players at once.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate the configuration, seat the players and shuffle turn order.
    pub fn build(self) -> Result<Game, ConfigError> {
        self.config.validate()?;

        let count = self.names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let starting_moves = self.config.costs.starting_moves;
        let players = PlayerMap::from_vec(
            self.names
                .into_iter()
                .enumerate()
                .map(|(seat, name)| Player::new(PlayerId::new(seat as u8), name, starting_moves))
                .collect(),
        );

        let mut turn_order: Vec<PlayerId> = players.player_ids().collect();
        GameRng::new(self.config.seed)
            .for_context("turn-order")
            .shuffle(&mut turn_order);

        info!(
            seed = self.config.seed,
            rows = self.config.rows,
            columns = self.config.columns,
            order = ?turn_order,
            "game created"
        );

        Ok(Game {
            board: Board::new(self.config.rows, self.config.columns),
            config: self.config,
            players,
            roster: turn_order.clone(),
            turn_order,
            phase: GamePhase::Setup,
            round: 0,
            active: None,
            sequence: 0,
            history: Vector::new(),
        })
    }
}

/// A game of Semiosphere: board, players, and round structure.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    /// Fixed at setup.
    turn_order: Vec<PlayerId>,
    /// Living players, in turn order.
    roster: Vec<PlayerId>,
    phase: GamePhase,
    round: u32,
    active: Option<PlayerId>,
    sequence: u32,
    history: Vector<ActionRecord>,
}

impl Game {
    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Turn order as shuffled at setup, including fallen players.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Living players in turn order.
    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.outcome()
    }

    /// Current round, starting at 1 once play begins.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whose turn it is. `None` during setup, once the round's budgets are
    /// spent, and after the game ends.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.active
    }

    /// Whether every living player has spent their budget for this round.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.phase == GamePhase::Playing && self.active.is_none()
    }

    /// Every applied action so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Living players currently waiting in the semiosphere.
    #[must_use]
    pub fn players_in_semiosphere(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .copied()
            .filter(|&id| self.players[id].in_semiosphere())
            .collect()
    }

    /// Read-only projection of the whole game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        BoardView::capture(self)
    }

    /// Every action `player` could legally take right now.
    ///
    /// Empty unless it is that player's turn.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.phase != GamePhase::Playing || self.active != Some(player) {
            return Vec::new();
        }

        let processor = ActionProcessor::new(&self.config.costs);
        let columns = self.board.columns();
        let cells: Vec<Position> = self.board.cells().map(|cell| cell.position()).collect();

        let candidates = Action::MOVES
            .into_iter()
            .chain([Action::DropPlanet, Action::EnterSemiosphere])
            .chain((0..columns).map(|column| Action::LeaveSemiosphere { column }))
            .chain(cells.iter().map(|&at| Action::PlaceMark(at)))
            .chain(cells.iter().map(|&at| Action::EraseMark(at)))
            .chain([Action::Pass]);

        candidates
            .filter(|&action| {
                processor
                    .check(&self.board, &self.players, player, action)
                    .is_ok()
            })
            .collect()
    }

    // === Setup ===

    /// Put `player` on row 0 at `column`.
    ///
    /// Play begins as soon as every player has been placed.
    #[instrument(skip(self))]
    pub fn initial_placement(&mut self, player: PlayerId, column: usize) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotInProgress);
        }
        let seated = self.players.get(player).ok_or(GameError::UnknownPlayer(player))?;
        if seated.is_placed() {
            return Err(GameError::AlreadyPlaced(player));
        }

        let position = Position::new(0, column);
        let pickup_cost = self.config.costs.planet_pickup;
        self.board
            .cell_at_mut(position)?
            .place_occupant(&mut self.players[player], pickup_cost)?;
        debug!(player = %player, %position, "player placed");

        if self.players.values().all(Player::is_placed) {
            self.phase = GamePhase::Playing;
            self.round = 1;
            self.start_round();
            info!(round = self.round, "play begins");
        }
        Ok(())
    }

    // === Play ===

    /// Apply one action for the active player.
    ///
    /// Refused actions change nothing and may simply be retried. When the
    /// action spends the player's last move, play passes to the next player.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> ActionResult {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotInProgress);
        }
        let seated = self.players.get(player).ok_or(GameError::UnknownPlayer(player))?;
        if !seated.is_alive() {
            return Err(GameError::PlayerEliminated(player));
        }
        if self.active != Some(player) {
            return Err(GameError::NotYourTurn {
                actual: player,
                expected: self.active,
            });
        }

        let outcome = ActionProcessor::new(&self.config.costs)
            .apply(&mut self.board, &mut self.players, player, action)
            .inspect_err(|err| {
                if err.is_fatal() {
                    error!(player = %player, action = action.name(), %err, "engine state corrupted");
                }
            })?;

        self.history.push_back(ActionRecord {
            player,
            round: self.round,
            sequence: self.sequence,
            outcome,
        });
        self.sequence += 1;

        if outcome.victory {
            self.finish(GameOutcome::Winner {
                player,
                reason: WinReason::SemiosphereWithPlanet,
            });
        } else if outcome.moves_left == 0 {
            self.pass_turn(player);
        }

        Ok(outcome)
    }

    /// End the round: sweep the void, remove the fallen, check for a winner,
    /// and replenish budgets.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance_round(&mut self) -> Result<RoundResult, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotInProgress);
        }
        if let Some(pending) = self.active {
            return Err(GameError::RoundInProgress { pending });
        }

        let sweep = VoidProgression::new(&self.config.costs)
            .advance(&mut self.board, &mut self.players)
            .inspect_err(|err| error!(%err, "void sweep failed"))?;

        let players = &self.players;
        self.roster.retain(|&id| players[id].is_alive());

        let ended = self.round;
        let outcome = GameOutcome::after_sweep(&self.roster, self.board.is_consumed());
        if let Some(outcome) = outcome {
            self.finish(outcome);
            return Ok(RoundResult {
                round: ended,
                sweep,
                replenished: SmallVec::new(),
                outcome: Some(outcome),
            });
        }

        let costs = &self.config.costs;
        let mut replenished = SmallVec::new();
        for &id in &self.roster {
            let player = &mut self.players[id];
            let mut grant = costs.base_allotment;
            if !player.carries_planet() {
                grant += costs.dropped_planet_bonus;
            }
            player.grant(grant);
            replenished.push((id, grant));
        }

        self.round += 1;
        self.start_round();
        info!(
            round = self.round,
            frontier = self.board.void_frontier(),
            survivors = self.roster.len(),
            "round advanced"
        );

        Ok(RoundResult {
            round: ended,
            sweep,
            replenished,
            outcome: None,
        })
    }

    // === Turn bookkeeping ===

    fn start_round(&mut self) {
        self.sequence = 0;
        self.active = None;
        let first = self.roster.first().copied();
        match first {
            Some(id) if self.players[id].moves() > 0 => self.begin_turn(id),
            Some(id) => self.pass_turn(id),
            None => {}
        }
    }

    /// Hand the turn to the first player after `current` who still has moves.
    fn pass_turn(&mut self, current: PlayerId) {
        let next = self
            .roster
            .iter()
            .skip_while(|&&id| id != current)
            .skip(1)
            .copied()
            .find(|&id| self.players[id].moves() > 0);

        match next {
            Some(id) => self.begin_turn(id),
            None => {
                self.active = None;
                debug!(round = self.round, "all budgets spent");
            }
        }
    }

    fn begin_turn(&mut self, id: PlayerId) {
        self.players[id].begin_turn();
        self.active = Some(id);
        debug!(player = %id, moves = self.players[id].moves(), "turn begins");
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.active = None;
        self.phase = GamePhase::Finished(outcome);
        match outcome {
            GameOutcome::Winner { player, reason } => {
                info!(player = %player, name = self.players[player].name(), ?reason, "game won");
            }
            GameOutcome::Abandoned => info!("game abandoned to the void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    fn two_player_game() -> Game {
        GameBuilder::new().seed(1).players(["X", "Y"]).build().unwrap()
    }

    fn placed_game() -> Game {
        let mut game = two_player_game();
        game.initial_placement(PlayerId::new(0), 2).unwrap();
        game.initial_placement(PlayerId::new(1), 5).unwrap();
        game
    }

    #[test]
    fn test_builder_rejects_player_counts() {
        let err = GameBuilder::new().player("solo").build().unwrap_err();
        assert!(matches!(err, ConfigError::PlayerCount { count: 1, .. }));

        let err = GameBuilder::new().players(["a", "b", "c", "d", "e"]).build().unwrap_err();
        assert!(matches!(err, ConfigError::PlayerCount { count: 5, .. }));
    }

    #[test]
    fn test_turn_order_is_seeded_permutation() {
        let build = |seed| {
            GameBuilder::new()
                .seed(seed)
                .players(["a", "b", "c", "d"])
                .build()
                .unwrap()
        };

        assert_eq!(build(5).turn_order(), build(5).turn_order());
        let mut order = build(5).turn_order().to_vec();
        order.sort();
        assert_eq!(order, PlayerId::all(4).collect::<Vec<_>>());
    }

    #[test]
    fn test_setup_then_playing() {
        let mut game = two_player_game();
        assert_eq!(game.phase(), GamePhase::Setup);
        assert_eq!(game.apply_action(PlayerId::new(0), Action::Pass), Err(GameError::NotInProgress));

        game.initial_placement(PlayerId::new(0), 2).unwrap();
        assert_eq!(game.initial_placement(PlayerId::new(0), 3), Err(GameError::AlreadyPlaced(PlayerId::new(0))));
        assert_eq!(
            game.initial_placement(PlayerId::new(1), 2),
            Err(GameError::CellOccupied(Position::new(0, 2)))
        );
        assert!(matches!(
            game.initial_placement(PlayerId::new(1), 8),
            Err(GameError::OutOfBounds { row: 0, column: 8 })
        ));
        assert_eq!(game.phase(), GamePhase::Setup);

        game.initial_placement(PlayerId::new(1), 3).unwrap();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.round(), 1);
        assert_eq!(game.active_player(), Some(game.turn_order()[0]));
        assert_eq!(game.initial_placement(PlayerId::new(1), 4), Err(GameError::NotInProgress));
    }

    #[test]
    fn test_only_active_player_may_act() {
        let mut game = placed_game();
        let first = game.turn_order()[0];
        let second = game.turn_order()[1];

        assert_eq!(
            game.apply_action(second, Action::Pass),
            Err(GameError::NotYourTurn { actual: second, expected: Some(first) })
        );
        assert!(game.apply_action(first, Action::Move(Direction::Forward)).is_ok());
        assert_eq!(game.active_player(), Some(first));
    }

    #[test]
    fn test_turn_passes_when_budget_spent() {
        let mut game = placed_game();
        let [first, second] = [game.turn_order()[0], game.turn_order()[1]];

        for _ in 0..3 {
            game.apply_action(first, Action::Move(Direction::Forward)).unwrap();
        }
        assert_eq!(game.active_player(), Some(second));

        game.apply_action(second, Action::Pass).unwrap();
        assert!(game.is_round_complete());
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_advance_round_requires_spent_budgets() {
        let mut game = placed_game();
        let first = game.turn_order()[0];

        assert_eq!(game.advance_round(), Err(GameError::RoundInProgress { pending: first }));
    }

    #[test]
    fn test_advance_round_replenishes() {
        let mut game = placed_game();
        let [first, second] = [game.turn_order()[0], game.turn_order()[1]];
        game.apply_action(first, Action::Move(Direction::Forward)).unwrap();
        game.apply_action(first, Action::Pass).unwrap();
        game.apply_action(second, Action::Move(Direction::Forward)).unwrap();
        game.apply_action(second, Action::Pass).unwrap();

        let result = game.advance_round().unwrap();

        assert_eq!(result.round, 1);
        assert_eq!(result.sweep.row, 0);
        assert!(result.eliminated().is_empty());
        assert_eq!(result.outcome, None);
        assert_eq!(result.replenished.as_slice(), &[(first, 3), (second, 3)]);
        assert_eq!(game.round(), 2);
        assert_eq!(game.board().void_frontier(), 1);
        assert_eq!(game.active_player(), Some(first));
    }

    #[test]
    fn test_legal_actions_only_for_active_player() {
        let game = placed_game();
        let [first, second] = [game.turn_order()[0], game.turn_order()[1]];

        assert!(game.legal_actions(second).is_empty());

        let legal = game.legal_actions(first);
        assert!(legal.contains(&Action::Move(Direction::Forward)));
        assert!(legal.contains(&Action::Pass));
        assert!(!legal.contains(&Action::Move(Direction::Backward)));
        assert!(!legal.contains(&Action::DropPlanet));
        assert!(!legal.contains(&Action::EnterSemiosphere));
        assert!(!legal.iter().any(|a| matches!(a, Action::EraseMark(_))));
    }

    #[test]
    fn test_finished_game_refuses_everything() {
        let mut game = placed_game();
        game.finish(GameOutcome::Abandoned);

        let first = game.turn_order()[0];
        assert_eq!(game.apply_action(first, Action::Pass), Err(GameError::NotInProgress));
        assert_eq!(game.advance_round(), Err(GameError::NotInProgress));
        assert!(game.legal_actions(first).is_empty());
    }
}
