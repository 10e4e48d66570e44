//! Basic example of using the Sudoku engine

use sudoku_engine::{Game, Grid, Position, Solver};

fn main() {
    env_logger::init();

    // Start a session on the built-in puzzle
    let mut game = Game::default();

    println!("Puzzle:");
    println!("{}", game.givens());
    println!("Given cells: {}", game.givens().filled_count());
    println!("Empty cells: {}\n", game.givens().empty_count());

    // Record a couple of entries
    if game.set_cell(Position::new(0, 0), 5).is_ok() {
        println!("Entered 5 at (0, 0)");
    }
    if let Err(err) = game.set_cell(Position::new(0, 3), 9) {
        println!("Rejected move: {}", err);
    }
    println!("Solved yet? {}\n", game.is_solved());

    // Compute the full solution
    println!("Solving...\n");
    if game.solve() {
        if let Some(solution) = game.solution() {
            println!("Solution:");
            println!("{}", solution);
        }
    } else {
        println!("No solution found (this shouldn't happen for the built-in puzzle!)");
    }

    // Vet a puzzle from a string before playing it
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Grid::from_string(puzzle_string) {
        Ok(grid) => {
            println!("Parsed puzzle:");
            println!("{}", grid);

            let solver = Solver::new();
            println!("Unique solution: {}", solver.has_unique_solution(&grid));
        }
        Err(err) => println!("Bad puzzle string: {}", err),
    }
}
