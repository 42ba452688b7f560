// step.rs - One Game of Life generation, computed row by row

use crate::grid::GridState;
use crate::neighbors::count_live_neighbors;

/// Next state of a single cell from its current state and live neighbor count.
pub fn next_cell_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, n) if n < 2 => false, // Underpopulation
        (true, n) if n > 3 => false, // Overpopulation
        (true, _)          => true,  // Survival on 2 or 3
        (false, 3)         => true,  // Reproduction
        (false, _)         => false, // Stays dead
    }
}

/// Next-generation values for row `y`, read from the frozen `current` grid.
fn process_row(current: &GridState, y: usize, row_out: &mut [bool]) {
    for (x, cell) in row_out.iter_mut().enumerate() {
        let count = count_live_neighbors(current, (x, y));
        *cell = next_cell_state(current.is_alive(x, y), count);
    }
}

/// Applies the Life rule to every cell and returns the next generation.
///
/// The input is only read; all neighbor counts come from it, never from
/// cells already written for the next generation.
pub fn step(current: &GridState) -> GridState {
    let (width, height) = current.dimensions();
    let mut next = vec![false; width * height];
    for (y, row_out) in next.chunks_mut(width).enumerate() {
        process_row(current, y, row_out);
    }
    GridState::from_cells(width, height, next)
}
