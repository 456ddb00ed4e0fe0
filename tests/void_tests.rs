//! Void progression across rounds.

mod common;

use common::{assert_consistent, finish_round, start};
use semiosphere::{Action, Direction, GameConfig, GameError, Occupancy, Position};

#[test]
fn test_frontier_advances_one_row_per_round() {
    let (mut game, order) = start(GameConfig::default().with_dimensions(6, 4), &["X", "Y"], &[0, 3]);

    for expected_row in 0..3 {
        for &player in &order {
            game.apply_action(player, Action::Move(Direction::Forward)).unwrap();
            finish_round_for(&mut game, player);
        }
        let round = game.advance_round().unwrap();
        assert_eq!(round.sweep.row, expected_row);
        assert_eq!(game.board().void_frontier(), expected_row + 1);
        assert!(game.board().row(expected_row).iter().all(|cell| cell.is_voided()));
        assert_consistent(&game);
    }
    assert_eq!(game.round(), 4);
}

/// Pass out the rest of `player`'s turn.
fn finish_round_for(game: &mut semiosphere::Game, player: semiosphere::PlayerId) {
    if game.active_player() == Some(player) {
        game.apply_action(player, Action::Pass).unwrap();
    }
}

#[test]
fn test_voided_cells_refuse_everything() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[2, 5]);
    let (x, y) = (order[0], order[1]);

    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::Pass).unwrap();
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(y, Action::Pass).unwrap();
    game.advance_round().unwrap();

    assert_eq!(
        game.apply_action(x, Action::Move(Direction::Backward)),
        Err(GameError::CellVoided(Position::new(0, 2)))
    );
    assert_eq!(
        game.apply_action(x, Action::PlaceMark(Position::new(0, 0))),
        Err(GameError::CellVoided(Position::new(0, 0)))
    );
    assert_eq!(
        game.apply_action(x, Action::DropPlanet),
        Err(GameError::CellVoided(Position::new(0, 2)))
    );
    assert_eq!(game.player(x).unwrap().moves(), 3);
}

#[test]
fn test_voided_marks_keep_their_owner() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[2, 5]);
    let (x, y) = (order[0], order[1]);

    game.apply_action(x, Action::PlaceMark(Position::new(0, 0))).unwrap();
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(y, Action::Move(Direction::Forward)).unwrap();
    finish_round(&mut game);

    let round = game.advance_round().unwrap();
    assert_eq!(round.sweep.mark_bonuses.as_slice(), &[(x, 1)]);
    assert_eq!(round.replenished.as_slice(), &[(x, 3), (y, 3)]);
    assert_eq!(game.player(x).unwrap().moves(), 4);

    let view = game.snapshot();
    let cell = view.cell(Position::new(0, 0)).unwrap();
    assert_eq!(cell.occupancy, Occupancy::Voided);
    assert_eq!(cell.mark, Some(x));
    assert_eq!(
        game.apply_action(y, Action::EraseMark(Position::new(0, 0))),
        Err(GameError::NotYourTurn { actual: y, expected: Some(x) })
    );
    game.apply_action(x, Action::Pass).unwrap();
    assert_eq!(
        game.apply_action(y, Action::EraseMark(Position::new(0, 0))),
        Err(GameError::CellVoided(Position::new(0, 0)))
    );
}

#[test]
fn test_advance_round_only_between_rounds() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[2, 5]);
    let (x, y) = (order[0], order[1]);

    assert_eq!(game.advance_round(), Err(GameError::RoundInProgress { pending: x }));
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::Pass).unwrap();
    assert_eq!(game.advance_round(), Err(GameError::RoundInProgress { pending: y }));
    assert_eq!(game.board().void_frontier(), 0);
}

#[test]
fn test_zero_cost_backward_does_not_end_turn() {
    let (mut game, order) = start(GameConfig::default(), &["X", "Y"], &[2, 5]);
    let x = order[0];

    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    game.apply_action(x, Action::Move(Direction::Forward)).unwrap();
    let back = game.apply_action(x, Action::Move(Direction::Backward)).unwrap();

    assert_eq!(back.cost, 0);
    assert_eq!(back.moves_left, 1);
    assert_eq!(game.active_player(), Some(x));
}
