mod input;
mod render;
mod stats;

use clap::Parser;
use rand::Rng;
use stats::SolveHistory;
use std::io::{self, Write};
use std::time::Instant;
use tour_core::{Position, Solver, MAX_SIZE, MIN_SIZE};

/// Compute a knight's tour of a square board from a chosen start cell.
#[derive(Parser)]
#[command(name = "knights-tour", version, about)]
struct Args {
    /// Board side length (3 to 64); prompted for when omitted
    #[arg(long, value_parser = clap::value_parser!(u64).range(MIN_SIZE as u64..=MAX_SIZE as u64))]
    size: Option<u64>,

    /// Starting row (0 to size-1); prompted for when omitted
    #[arg(long)]
    row: Option<usize>,

    /// Starting column (0 to size-1); prompted for when omitted
    #[arg(long)]
    col: Option<usize>,

    /// Pick a random start cell instead of prompting for row/column
    #[arg(long, conflicts_with_all = ["row", "col"])]
    random_start: bool,

    /// Skip the numbered-grid dump (useful for large boards)
    #[arg(long)]
    no_grid: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(args: Args) -> io::Result<()> {
    let size = match args.size {
        Some(size) => size as usize,
        None => input::prompt_size()?,
    };

    let start = if args.random_start {
        let mut rng = rand::thread_rng();
        Position::new(rng.gen_range(0..size), rng.gen_range(0..size))
    } else {
        Position::new(
            resolve_coordinate(args.row, size, input::prompt_row)?,
            resolve_coordinate(args.col, size, input::prompt_col)?,
        )
    };

    println!("\n---\n");

    let solver = Solver::new();
    let started = Instant::now();
    let outcome = solver.solve(size, start);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let mut history = SolveHistory::load();
    let previous_best = history.best_time_ms(size);

    let mut stdout = io::stdout();
    match &outcome {
        Some(tour) => {
            if !args.no_grid {
                render::render_grid(&mut stdout, tour)?;
            }
            render::render_steps(&mut stdout, tour)?;
            render::render_success(&mut stdout, elapsed_ms)?;
            if previous_best.is_some_and(|best| elapsed_ms < best) {
                writeln!(stdout, "That is a new record for this board size.")?;
            }
        }
        None => render::render_failure(&mut stdout)?,
    }

    history.record(size, start, outcome.is_some(), elapsed_ms);
    history.save();

    Ok(())
}

/// Use the flag value when given and on the board, prompt otherwise.
/// An out-of-range flag is a usage error, not a prompt fallback.
fn resolve_coordinate(
    flag: Option<usize>,
    size: usize,
    prompt: fn(usize) -> io::Result<usize>,
) -> io::Result<usize> {
    match flag {
        Some(value) if value < size => Ok(value),
        Some(value) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("start coordinate {value} is outside the {size}x{size} board"),
        )),
        None => prompt(size),
    }
}
