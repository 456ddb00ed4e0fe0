//! Shared helpers for the integration tests.

#![allow(dead_code)]

use semiosphere::{Action, Game, GameBuilder, GameConfig, Occupancy, PlanetLocation, PlayerId};

/// Route engine logs through the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a game and place the i-th player in turn order at `columns[i]`.
///
/// Returns the game and its turn order, so tests can name players by when
/// they move rather than by seat.
pub fn start(config: GameConfig, names: &[&str], columns: &[usize]) -> (Game, Vec<PlayerId>) {
    init_tracing();
    let mut game = GameBuilder::new()
        .with_config(config)
        .players(names.iter().copied())
        .build()
        .expect("valid game");

    let order = game.turn_order().to_vec();
    for (&player, &column) in order.iter().zip(columns) {
        game.initial_placement(player, column).expect("placement");
    }
    (game, order)
}

/// Pass for every player still holding moves this round.
pub fn finish_round(game: &mut Game) {
    while let Some(player) = game.active_player() {
        game.apply_action(player, Action::Pass).expect("pass is always legal");
    }
}

/// Cross-check the board against every player's own record.
pub fn assert_consistent(game: &Game) {
    let board = game.board();

    for cell in board.cells() {
        if let Occupancy::Occupied(id) = cell.occupancy() {
            let player = game.player(id).expect("occupant is seated");
            assert!(player.is_alive(), "{id} stands on {} while dead", cell.position());
            assert_eq!(player.position(), Some(cell.position()));
        }
        if let Some(owner) = cell.planet() {
            assert_eq!(cell.occupant(), None, "planet under an occupant at {}", cell.position());
            let planet = game.player(owner).expect("planet owner is seated").planet();
            assert_eq!(planet.location(), PlanetLocation::Dropped(cell.position()));
        }
        if let Some(mark) = cell.mark() {
            assert_eq!(mark.position(), cell.position());
        }
    }

    for (id, player) in game.players().iter() {
        match player.position() {
            Some(position) => {
                assert!(player.is_alive());
                assert!(!player.in_semiosphere());
                let cell = board.cell_at(position).expect("position on board");
                assert_eq!(cell.occupant(), Some(id));
            }
            None => assert!(!player.is_alive() || player.in_semiosphere() || !player.is_placed()),
        }
        if let PlanetLocation::Dropped(at) = player.planet().location() {
            if !player.planet().is_voided() {
                assert_eq!(board.cell_at(at).expect("planet on board").planet(), Some(id));
            }
        }
    }
}
