//! Basic example of using the tour engine

use tour_core::{Position, Solver};

fn main() {
    let solver = Solver::new();

    // Find a tour of a 6x6 board from the top-left corner
    println!("Searching for a 6x6 tour from (0, 0)...\n");
    match solver.solve(6, Position::new(0, 0)) {
        Some(tour) => {
            println!("Found a tour covering {} cells.", tour.len());
            println!("First moves:");
            for (from, to) in tour.steps().take(5) {
                println!("  {from} to {to}");
            }
            println!("  ...");

            // The path is a full knight-connected permutation
            println!("Complete tour: {}\n", tour.is_complete());
        }
        None => println!("No tour from that start.\n"),
    }

    // Some boards have no tour at all: 4x4 fails from every start
    println!("Searching for a 4x4 tour from (0, 0)...\n");
    match solver.solve(4, Position::new(0, 0)) {
        Some(_) => println!("Found one (this shouldn't happen on 4x4!)"),
        None => println!("No solution, as expected."),
    }
}
