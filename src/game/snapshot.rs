//! Serializable read-only views for renderers and tooling.

use serde::{Deserialize, Serialize};

use super::engine::Game;
use crate::board::{Cell, Occupancy, Position};
use crate::core::PlayerId;
use crate::entities::{Planet, PlanetLocation, Player};
use crate::rules::GamePhase;

/// One cell as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub occupancy: Occupancy,
    /// Owner of the mark here.
    pub mark: Option<PlayerId>,
    /// Owner of the planet resting here.
    pub planet: Option<PlayerId>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            position: cell.position(),
            occupancy: cell.occupancy(),
            mark: cell.mark().map(|m| m.owner()),
            planet: cell.planet(),
        }
    }
}

/// One player's public state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub position: Option<Position>,
    pub moves: u32,
    pub alive: bool,
    pub in_semiosphere: bool,
    pub planet: PlanetLocation,
    pub planet_voided: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        let planet: &Planet = player.planet();
        Self {
            id: player.id(),
            name: player.name().to_owned(),
            position: player.position(),
            moves: player.moves(),
            alive: player.is_alive(),
            in_semiosphere: player.in_semiosphere(),
            planet: planet.location(),
            planet_voided: planet.is_voided(),
        }
    }
}

/// The whole game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: usize,
    pub columns: usize,
    pub void_frontier: usize,
    pub round: u32,
    pub phase: GamePhase,
    pub active_player: Option<PlayerId>,
    pub turn_order: Vec<PlayerId>,
    /// Row-major.
    pub cells: Vec<CellView>,
    /// Indexed by seat.
    pub players: Vec<PlayerView>,
    pub in_semiosphere: Vec<PlayerId>,
}

impl BoardView {
    pub(crate) fn capture(game: &Game) -> Self {
        let board = game.board();
        Self {
            rows: board.rows(),
            columns: board.columns(),
            void_frontier: board.void_frontier(),
            round: game.round(),
            phase: game.phase(),
            active_player: game.active_player(),
            turn_order: game.turn_order().to_vec(),
            cells: board.cells().map(CellView::from).collect(),
            players: game.players().values().map(PlayerView::from).collect(),
            in_semiosphere: game.players_in_semiosphere(),
        }
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&CellView> {
        if position.row >= self.rows || position.column >= self.columns {
            return None;
        }
        self.cells.get(position.row * self.columns + position.column)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.get(id.index())
    }

    /// Render the board as text, top row first.
    ///
    /// `.` empty, `~` voided, digits are players, `m` a mark, `p` a planet.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let glyph = match self.cell(Position::new(row, column)) {
                    Some(cell) => match (cell.occupancy, cell.planet, cell.mark) {
                        (Occupancy::Voided, _, _) => '~',
                        (Occupancy::Occupied(id), _, _) => char::from(b'0' + id.0),
                        (Occupancy::Empty, Some(_), _) => 'p',
                        (Occupancy::Empty, None, Some(_)) => 'm',
                        (Occupancy::Empty, None, None) => '.',
                    },
                    None => ' ',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
