//! Game session state: given clues, player entries, and the cached solution.

use crate::grid::{Grid, Position, SIZE};
use crate::solver::Solver;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The built-in clue layout used when no puzzle is injected.
pub const DEFAULT_PUZZLE: &str =
    "000400090607000804010709003901070030002000900050040107300502070406000301070004000";

/// A rejected cell write. Both kinds leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The value is not a digit in 0-9.
    #[error("value {value} is outside the range 0-9")]
    OutOfRange { value: u8 },
    /// The target cell holds a given clue.
    #[error("cell {pos} is a given and cannot be changed")]
    GivenCell { pos: Position },
}

/// One Sudoku session: the given clues, the player's entries, and a lazily
/// computed solution for the givens.
///
/// The givens never change for the life of the session. An entry is only
/// meaningful where the matching given cell is empty. The solution is
/// computed on the first successful [`Game::solve`] call and reused until
/// [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    givens: Grid,
    entries: Grid,
    solution: Option<Grid>,
}

impl Game {
    /// Create a session for the provided clue layout.
    pub fn new(givens: Grid) -> Self {
        Game {
            givens,
            entries: Grid::new(),
            solution: None,
        }
    }

    /// The given clues.
    pub fn givens(&self) -> &Grid {
        &self.givens
    }

    /// The player's entries.
    pub fn entries(&self) -> &Grid {
        &self.entries
    }

    /// The cached solution, once `solve` has succeeded this session.
    pub fn solution(&self) -> Option<&Grid> {
        self.solution.as_ref()
    }

    /// Record a player entry at `pos`. A value of 0 erases the cell.
    ///
    /// Writes aimed at given cells and values above 9 are rejected and
    /// leave the entries unchanged.
    pub fn set_cell(&mut self, pos: Position, value: u8) -> Result<(), MoveError> {
        if self.givens.get(pos) != 0 {
            return Err(MoveError::GivenCell { pos });
        }
        if value > 9 {
            warn!("rejected entry at {pos}: value {value} is outside 0-9");
            return Err(MoveError::OutOfRange { value });
        }
        self.entries.set(pos, value);
        Ok(())
    }

    /// Erase the player entry at `pos`.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), MoveError> {
        self.set_cell(pos, 0)
    }

    /// The merged board: each cell takes the given clue when present,
    /// otherwise the player entry.
    pub fn effective(&self) -> Grid {
        let mut board = self.givens;
        for pos in Position::all() {
            if board.get(pos) == 0 {
                board.set(pos, self.entries.get(pos));
            }
        }
        board
    }

    /// Whether the merged board is a complete, correct solution.
    pub fn is_solved(&self) -> bool {
        self.effective().is_solved()
    }

    /// Whether the merged value at `pos` repeats somewhere in its row,
    /// column, or box. Empty cells never conflict.
    pub fn has_conflict(&self, pos: Position) -> bool {
        let board = self.effective();
        let value = board.get(pos);
        if value == 0 {
            return false;
        }
        for col in 0..SIZE {
            if col != pos.col && board.get(Position::new(pos.row, col)) == value {
                return true;
            }
        }
        for row in 0..SIZE {
            if row != pos.row && board.get(Position::new(row, pos.col)) == value {
                return true;
            }
        }
        for cell in Position::box_cells(pos.box_index()) {
            if cell != pos && board.get(cell) == value {
                return true;
            }
        }
        false
    }

    /// Compute and cache a solution for the givens, returning true once one
    /// exists. A cached solution is reused without any further search; a
    /// failed search leaves nothing cached, so a later call searches again.
    pub fn solve(&mut self) -> bool {
        if self.solution.is_some() {
            debug!("reusing cached solution");
            return true;
        }
        match Solver::new().solve(&self.givens) {
            Some(solved) => {
                self.solution = Some(solved);
                true
            }
            None => false,
        }
    }

    /// Start the session over: wipe every entry and drop the cached
    /// solution. The givens keep the layout the session was created with.
    pub fn reset(&mut self) {
        self.entries = Grid::new();
        self.solution = None;
    }
}

impl Default for Game {
    /// A session for the built-in puzzle.
    fn default() -> Self {
        let givens = Grid::from_string(DEFAULT_PUZZLE).expect("built-in puzzle is well-formed");
        Game::new(givens)
    }
}
