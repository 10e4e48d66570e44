//! Core Sudoku engine: board state, success validation, and backtracking
//! solving.
//!
//! A [`Game`] owns three 9x9 grids: the given clues, the player's entries,
//! and a lazily computed solution. A presentation layer drives it through a
//! narrow surface: record entries with [`Game::set_cell`], test the merged
//! board with [`Game::is_solved`], fill the solution cache with
//! [`Game::solve`], and start over with [`Game::reset`].

mod game;
mod grid;
mod solver;

pub use game::{Game, MoveError, DEFAULT_PUZZLE};
pub use grid::{DigitSet, Grid, ParseGridError, Position, BOX_SIZE, CELL_COUNT, SIZE};
pub use solver::Solver;
