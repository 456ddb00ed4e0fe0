//! The board: a fixed arena of cells and the void frontier.
//!
//! Cells are stored row-major and addressed by `Position`. The frontier is
//! the next row the void will take; it starts at 0 and only moves when
//! `sweep_row_for_void` consumes that row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::cell::Cell;
use super::position::{Direction, Position};
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::entities::Player;

/// What one void sweep did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidSweep {
    /// The row that was consumed.
    pub row: usize,
    /// Players standing in the row, now lost.
    pub eliminated: SmallVec<[PlayerId; 4]>,
    /// One entry per mark in the row: its owner and the bonus paid.
    pub mark_bonuses: SmallVec<[(PlayerId, u32); 4]>,
    /// Owners of planets resting in the row, now voided.
    pub voided_planets: SmallVec<[PlayerId; 4]>,
}

/// Rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    void_frontier: usize,
}

impl Board {
    /// Build an empty `rows x columns` board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "Board must have at least one cell");

        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Cell::new(Position::new(row, column))))
            .collect();

        Self {
            rows,
            columns,
            cells,
            void_frontier: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The row adjacent to the semiosphere.
    #[must_use]
    pub fn top_row(&self) -> usize {
        self.rows - 1
    }

    /// Next row the void will take.
    #[must_use]
    pub fn void_frontier(&self) -> usize {
        self.void_frontier
    }

    /// Whether the void has taken every row.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.void_frontier >= self.rows
    }

    // === Lookup ===

    /// Whether signed coordinates fall on the board.
    #[must_use]
    pub fn contains(&self, row: i64, column: i64) -> bool {
        (0..self.rows as i64).contains(&row) && (0..self.columns as i64).contains(&column)
    }

    /// Bounds-checked lookup.
    pub fn cell_at(&self, position: Position) -> Result<&Cell, GameError> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    /// Bounds-checked mutable lookup.
    pub fn cell_at_mut(&mut self, position: Position) -> Result<&mut Cell, GameError> {
        let index = self.index_of(position)?;
        Ok(&mut self.cells[index])
    }

    /// The neighbour of `position` in `direction`.
    pub fn step(&self, position: Position, direction: Direction) -> Result<Position, GameError> {
        let (row, column) = position.offset(direction);
        if !self.contains(row, column) {
            return Err(GameError::OutOfBounds { row, column });
        }
        Ok(Position::new(row as usize, column as usize))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The cells of one row, left to right. Empty for rows off the board.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    fn index_of(&self, position: Position) -> Result<usize, GameError> {
        if position.row >= self.rows || position.column >= self.columns {
            return Err(GameError::OutOfBounds {
                row: position.row as i64,
                column: position.column as i64,
            });
        }
        Ok(position.row * self.columns + position.column)
    }

    // === Semiosphere ===

    /// Whether any topmost-row cell would admit `player`.
    #[must_use]
    pub fn has_valid_semiosphere_exit(&self, player: &Player) -> bool {
        self.row(self.top_row()).iter().any(|cell| cell.can_enter(player))
    }

    // === Void ===

    /// Hand `row` to the void.
    ///
    /// Only the frontier row may be swept, and each row exactly once. Every
    /// cell in the row is resolved: its occupant is lost, its mark's owner
    /// receives `mark_bonus`, its planet is voided, and the cell itself is
    /// voided. The frontier then advances by one.
    pub fn sweep_row_for_void(
        &mut self,
        row: usize,
        players: &mut PlayerMap<Player>,
        mark_bonus: u32,
    ) -> Result<VoidSweep, GameError> {
        if row >= self.rows {
            return Err(GameError::OutOfBounds {
                row: row as i64,
                column: 0,
            });
        }
        if row != self.void_frontier {
            return Err(GameError::invariant(format!(
                "void sweep of row {row} while the frontier is at row {}",
                self.void_frontier
            )));
        }
        self.check_row_references(row, players)?;

        let mut sweep = VoidSweep {
            row,
            ..VoidSweep::default()
        };
        let start = row * self.columns;

        for cell in &mut self.cells[start..start + self.columns] {
            if let Some(mark) = cell.mark() {
                players[mark.owner()].grant(mark_bonus);
                sweep.mark_bonuses.push((mark.owner(), mark_bonus));
            }
            if let Some(owner) = cell.planet() {
                players[owner].planet_mut().mark_voided()?;
                sweep.voided_planets.push(owner);
            }
            if let Some(occupant) = cell.mark_voided() {
                players[occupant].eliminate();
                sweep.eliminated.push(occupant);
            }
        }

        self.void_frontier += 1;
        debug!(
            row,
            eliminated = sweep.eliminated.len(),
            marks = sweep.mark_bonuses.len(),
            planets = sweep.voided_planets.len(),
            "row swept by the void"
        );
        Ok(sweep)
    }

    /// Every player a row refers to must be seated, and every planet in it
    /// must agree that it rests there.
    fn check_row_references(&self, row: usize, players: &PlayerMap<Player>) -> Result<(), GameError> {
        for cell in self.row(row) {
            let referenced = cell
                .occupant()
                .into_iter()
                .chain(cell.mark().map(|m| m.owner()))
                .chain(cell.planet());
            for player in referenced {
                if !players.contains(player) {
                    return Err(GameError::invariant(format!(
                        "cell {} refers to unseated {player}",
                        cell.position()
                    )));
                }
            }
            if let Some(owner) = cell.planet() {
                if players[owner].planet().dropped_at() != Some(cell.position()) {
                    return Err(GameError::invariant(format!(
                        "{owner}'s planet is recorded away from {}",
                        cell.position()
                    )));
                }
            }
        }
        Ok(())
    }
}
