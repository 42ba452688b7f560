// render.rs - Text frames for the terminal host

use std::io::{self, Write};

use life_core::{Generation, GridState};

const LIVE: char = '#';
const DEAD: char = '.';

// Clear screen and move the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

pub fn grid_text(grid: &GridState) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        text.extend(grid.row(y).iter().map(|&alive| if alive { LIVE } else { DEAD }));
        text.push('\n');
    }
    text
}

pub fn status_line(generation: &Generation<'_>) -> String {
    let stability = match generation.stability {
        Some(s) => format!("{s:.2}%"),
        None => "-".to_string(),
    };
    format!(
        "generation {} | live {} | stability {} | highest {:.2}%",
        generation.index,
        generation.grid.live_count(),
        stability,
        generation.highest_stability
    )
}

/// Writes one generation: the whole frame, or just its status line when `quiet`.
pub fn draw<W: Write>(out: &mut W, generation: &Generation<'_>, quiet: bool) -> io::Result<()> {
    if !quiet {
        write!(out, "{CLEAR}{}", grid_text(generation.grid))?;
    }
    writeln!(out, "{}", status_line(generation))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_in_order() {
        let grid = GridState::from_live_cells(3, 2, [(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid_text(&grid), "#..\n..#\n");
    }

    #[test]
    fn status_of_initial_and_later_generations() {
        let grid = GridState::from_live_cells(2, 2, [(1, 1)]).unwrap();
        let first = Generation { index: 0, grid: &grid, stability: None, highest_stability: 0.0 };
        assert_eq!(status_line(&first), "generation 0 | live 1 | stability - | highest 0.00%");

        let later = Generation { index: 4, grid: &grid, stability: Some(75.0), highest_stability: 87.5 };
        assert_eq!(status_line(&later), "generation 4 | live 1 | stability 75.00% | highest 87.50%");
    }

    #[test]
    fn quiet_draw_skips_frame() {
        let grid = GridState::blank(2, 1);
        let generation = Generation { index: 1, grid: &grid, stability: Some(100.0), highest_stability: 100.0 };

        let mut quiet = Vec::new();
        draw(&mut quiet, &generation, true).unwrap();
        assert_eq!(String::from_utf8(quiet).unwrap(), format!("{}\n", status_line(&generation)));

        let mut full = Vec::new();
        draw(&mut full, &generation, false).unwrap();
        assert!(String::from_utf8(full).unwrap().starts_with(&format!("{CLEAR}..\n")));
    }
}
