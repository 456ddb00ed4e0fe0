//! Walkthroughs of the core rules on a standard 11x8 board.

mod common;

use common::{assert_consistent, finish_round, start};
use semiosphere::{
    Action, Direction, GameConfig, GameError, GameOutcome, GamePhase, Occupancy, PlanetLocation,
    Position, WinReason,
};

fn pos(row: usize, column: usize) -> Position {
    Position::new(row, column)
}

#[test]
fn test_forward_move_updates_board_and_budget() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 6]);
    let x = order[0];

    let outcome = game.apply_action(x, Action::Move(Direction::Forward)).unwrap();

    assert_eq!(outcome.cost, 1);
    assert_eq!(outcome.moves_left, 2);
    assert_eq!(game.player(x).unwrap().position(), Some(pos(1, 3)));
    assert_eq!(game.board().cell_at(pos(0, 3)).unwrap().occupancy(), Occupancy::Empty);
    assert_eq!(game.board().cell_at(pos(1, 3)).unwrap().occupancy(), Occupancy::Occupied(x));
    assert_consistent(&game);
}

#[test]
fn test_marks_protect_cells_and_cannot_be_self_erased() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 2]);
    let (x, y) = (order[0], order[1]);

    // Round 1: X marks (2,3); Y walks up next to it and is refused.
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::PlaceMark(pos(2, 3))).unwrap();
    game.apply_action(x, Action::Pass).unwrap();

    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    let before = game.snapshot();
    assert_eq!(
        game.apply_action(y, Action::Move(Direction::Right)),
        Err(GameError::ForeignMarkProtected { position: pos(2, 3), owner: x })
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.player(y).unwrap().moves(), 1);
    game.apply_action(y, Action::Pass).unwrap();

    game.advance_round().unwrap();

    // Round 2: X cannot erase its own mark; Y can, and then walks in.
    assert_eq!(game.apply_action(x, Action::EraseMark(pos(2, 3))), Err(GameError::OwnMarkErase(pos(2, 3))));
    game.apply_action(x, Action::Pass).unwrap();

    let erased = game.apply_action(y, Action::EraseMark(pos(2, 3))).unwrap();
    assert_eq!(erased.cost, 2);
    assert!(game.board().cell_at(pos(2, 3)).unwrap().mark().is_none());
    game.apply_action(y, Action::Move(Direction::Right)).unwrap();
    assert_eq!(game.player(y).unwrap().position(), Some(pos(2, 3)));
    assert_consistent(&game);
}

#[test]
fn test_dropped_planet_earns_bonus_and_can_be_recovered() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 5]);
    let (x, y) = (order[0], order[1]);

    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    let dropped = game.apply_action(x, Action::DropPlanet).unwrap();
    assert_eq!(dropped.cost, 1);
    assert_eq!(dropped.moves_left, 0);
    assert_eq!(game.player(x).unwrap().planet().location(), PlanetLocation::Dropped(pos(1, 3)));
    assert_eq!(game.board().cell_at(pos(1, 3)).unwrap().planet(), Some(x));

    assert_eq!(game.active_player(), Some(y));
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    finish_round(&mut game);

    let round = game.advance_round().unwrap();
    assert_eq!(round.replenished.as_slice(), &[(x, 5), (y, 3)]);

    // Stepping back onto the planet is free but the pickup is charged.
    let recovered = game.apply_action(x, Action::Move(Direction::Backward)).unwrap();
    assert_eq!(recovered.cost, 0);
    assert_eq!(recovered.planet_pickup, Some(2));
    assert_eq!(recovered.moves_left, 3);
    assert!(game.player(x).unwrap().carries_planet());
    assert_eq!(game.board().cell_at(pos(1, 3)).unwrap().planet(), None);
    assert_consistent(&game);
}

#[test]
fn test_own_planet_blocked_in_the_turn_it_was_dropped() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 5]);
    let x = order[0];

    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::DropPlanet).unwrap();

    assert_eq!(
        game.apply_action(x, Action::Move(Direction::Backward)),
        Err(GameError::PlanetBlocked { position: pos(0, 3), owner: x })
    );
    assert_eq!(game.apply_action(x, Action::DropPlanet), Err(GameError::PlanetNotCarried(x)));
}

#[test]
fn test_voided_planet_still_earns_bonus() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 5]);
    let (x, y) = (order[0], order[1]);

    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::DropPlanet).unwrap();
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    finish_round(&mut game);

    let round = game.advance_round().unwrap();

    assert_eq!(round.sweep.voided_planets.as_slice(), &[x]);
    assert!(game.player(x).unwrap().planet().is_voided());
    assert_eq!(round.replenished.as_slice(), &[(x, 5), (y, 3)]);
    assert_consistent(&game);
}

#[test]
fn test_sweep_eliminates_occupant_and_pays_mark_owner() {
    let (mut game, order) = start(GameConfig::default(), &["Z", "W", "V"], &[0, 1, 2]);
    let (z, w, v) = (order[0], order[1], order[2]);

    game.apply_action(z, Action::Pass).unwrap();

    game.apply_action(w, Action::PlaceMark(pos(0, 3))).unwrap();
    game.apply_action(w, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(w, Action::Move(Direction::Forward)).unwrap();

    game.apply_action(v, Action::Move(Direction::Forward)).unwrap();
    finish_round(&mut game);

    let round = game.advance_round().unwrap();

    assert_eq!(round.round, 1);
    assert_eq!(round.sweep.row, 0);
    assert_eq!(round.eliminated(), &[z]);
    assert_eq!(round.sweep.mark_bonuses.as_slice(), &[(w, 1)]);
    assert_eq!(round.outcome, None);

    assert!(!game.player(z).unwrap().is_alive());
    assert_eq!(game.player(z).unwrap().position(), None);
    assert_eq!(game.roster(), &[w, v]);
    assert_eq!(game.turn_order(), order.as_slice());
    assert_eq!(game.player(w).unwrap().moves(), 4);
    assert_eq!(game.active_player(), Some(w));
    assert_eq!(game.apply_action(z, Action::Pass), Err(GameError::PlayerEliminated(z)));
    assert_consistent(&game);
}

#[test]
fn test_last_survivor_wins() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[3, 5]);
    let (x, y) = (order[0], order[1]);

    game.apply_action(x, Action::Pass).unwrap();
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    finish_round(&mut game);

    let round = game.advance_round().unwrap();

    let expected = GameOutcome::Winner { player: y, reason: WinReason::LastSurvivor };
    assert_eq!(round.outcome, Some(expected));
    assert!(round.replenished.is_empty());
    assert_eq!(game.phase(), GamePhase::Finished(expected));
    assert_eq!(game.active_player(), None);
    assert_eq!(game.apply_action(y, Action::Pass), Err(GameError::NotInProgress));
}

#[test]
fn test_everyone_lost_abandons_the_game() {
    let (mut game, _) = start(GameConfig::default(), &["X", "Y", "Z"], &[1, 2, 3]);
    finish_round(&mut game);

    let round = game.advance_round().unwrap();

    assert_eq!(round.eliminated().len(), 3);
    assert_eq!(round.outcome, Some(GameOutcome::Abandoned));
    assert!(game.roster().is_empty());
}
