//! Exhaustive backtracking search over the grid model.

use crate::grid::Grid;
use log::debug;

/// Depth-first solver. Decision cells are visited in row-major order and
/// candidate digits are tried in ascending order, so the same puzzle always
/// produces the same solution.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Solver
    }

    /// Solve the puzzle, returning the solved grid if a complete assignment
    /// exists. The input is left untouched.
    pub fn solve(&self, puzzle: &Grid) -> Option<Grid> {
        if !puzzle.is_valid() {
            debug!("puzzle rejected before search: clues conflict");
            return None;
        }
        debug!(
            "starting backtracking search over {} empty cells",
            puzzle.empty_count()
        );
        let mut working = *puzzle;
        if self.solve_recursive(&mut working) {
            Some(working)
        } else {
            debug!("search exhausted without a complete assignment");
            None
        }
    }

    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            // No empty cell left means the assignment is complete.
            None => return true,
        };
        for digit in grid.candidates(pos).iter() {
            grid.set(pos, digit);
            if self.solve_recursive(grid) {
                return true;
            }
            grid.set(pos, 0);
        }
        // Every candidate failed, so an earlier placement has to change.
        false
    }

    /// Count complete assignments, stopping once `limit` is reached.
    pub fn count_solutions(&self, puzzle: &Grid, limit: usize) -> usize {
        if !puzzle.is_valid() {
            return 0;
        }
        let mut working = *puzzle;
        let mut count = 0;
        self.count_recursive(&mut working, &mut count, limit);
        count
    }

    fn count_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };
        for digit in grid.candidates(pos).iter() {
            grid.set(pos, digit);
            self.count_recursive(grid, count, limit);
            grid.set(pos, 0);
            if *count >= limit {
                return;
            }
        }
    }

    /// Whether the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, puzzle: &Grid) -> bool {
        self.count_solutions(puzzle, 2) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_solve_classic_puzzle() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();

        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_solved());
        assert_eq!(
            solution.to_string_compact(),
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
        );
    }

    #[test]
    fn test_solution_preserves_clues() {
        let puzzle =
            "000400090607000804010709003901070030002000900050040107300502070406000301070004000";
        let grid = Grid::from_string(puzzle).unwrap();

        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_solved());
        for pos in Position::all() {
            if grid.get(pos) != 0 {
                assert_eq!(solution.get(pos), grid.get(pos));
            }
        }
    }

    #[test]
    fn test_input_grid_is_untouched() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();
        let before = grid;

        let solver = Solver::new();
        solver.solve(&grid).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn test_conflicting_clues_are_unsolvable() {
        let puzzle = format!("55{}", "0".repeat(79));
        let grid = Grid::from_string(&puzzle).unwrap();

        let solver = Solver::new();
        assert_eq!(solver.solve(&grid), None);
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_dead_end_puzzle_is_unsolvable() {
        // The top-right cell needs a 9, but its column already has one. The
        // clues themselves do not conflict anywhere.
        let puzzle = format!("123456780000000009{}", "0".repeat(63));
        let grid = Grid::from_string(&puzzle).unwrap();
        assert!(grid.is_valid());

        let solver = Solver::new();
        assert_eq!(solver.solve(&grid), None);
    }

    #[test]
    fn test_unique_solution() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(puzzle).unwrap();

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_multiple_solutions() {
        let grid = Grid::new();

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 2);
        assert!(!solver.has_unique_solution(&grid));
    }
}
