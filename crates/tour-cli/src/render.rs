//! Terminal output for solved tours.

use crossterm::style::Stylize;
use std::io::{self, Write};
use tour_core::Tour;

/// Column width of one grid cell, wide enough for four digits plus
/// breathing room on the largest supported board.
pub const CELL_WIDTH: usize = 8;

/// Print the numbered grid: each cell shows the move on which it was
/// visited, left-justified, with the start cell highlighted.
pub fn render_grid(out: &mut impl Write, tour: &Tour) -> io::Result<()> {
    let size = tour.size();
    let mut numbers = vec![0u32; size * size];
    for (i, pos) in tour.cells().iter().enumerate() {
        numbers[pos.row * size + pos.col] = i as u32 + 1;
    }

    for row in 0..size {
        for col in 0..size {
            let number = numbers[row * size + col];
            let cell = format!("{number:<CELL_WIDTH$}");
            if number == 1 {
                write!(out, "{}", cell.green().bold())?;
            } else {
                write!(out, "{cell}")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "\n---\n")?;
    Ok(())
}

/// Print the move-by-move listing, one "(r1, c1) to (r2, c2)" line per
/// step, start to end.
pub fn render_steps(out: &mut impl Write, tour: &Tour) -> io::Result<()> {
    for (from, to) in tour.steps() {
        writeln!(out, "{from} to {to}")?;
    }
    Ok(())
}

/// Print the success line with the measured solve time.
pub fn render_success(out: &mut impl Write, elapsed_ms: f64) -> io::Result<()> {
    writeln!(
        out,
        "\n{} The algorithm took {elapsed_ms:.2} milliseconds.",
        "Success!".green().bold()
    )
}

/// Print the no-solution line.
pub fn render_failure(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "There is no solution with these parameters.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_core::{Position, Solver};

    fn sample_tour() -> Tour {
        Solver::new()
            .solve(5, Position::new(2, 2))
            .expect("5x5 tour from the center exists")
    }

    #[test]
    fn test_grid_rows_have_fixed_width() {
        let tour = sample_tour();
        let mut buffer = Vec::new();
        render_grid(&mut buffer, &tour).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // Five grid rows, then the separator; the start-cell row
        // carries styling escapes, the others are plain fixed-width.
        let rows: Vec<&str> = text.lines().take(5).collect();
        assert_eq!(rows.len(), 5);
        for row in rows.iter().filter(|r| !r.contains('\u{1b}')) {
            assert_eq!(row.len(), CELL_WIDTH * tour.size());
        }
        assert!(text.contains("---"));
    }

    #[test]
    fn test_steps_listing_covers_whole_tour() {
        let tour = sample_tour();
        let mut buffer = Vec::new();
        render_steps(&mut buffer, &tour).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), tour.len() - 1);
        assert!(text.starts_with("(2, 2) to "));
    }

    #[test]
    fn test_failure_line() {
        let mut buffer = Vec::new();
        render_failure(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "There is no solution with these parameters.\n"
        );
    }
}
