// neighbors.rs - Live neighbor counting on a bounded grid

use crate::grid::{Coord, GridState};

// The eight offsets around a cell, excluding the cell itself.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Number of live cells among the eight neighbors of `(x, y)`.
///
/// Neighbors that fall outside the grid are skipped, not wrapped, so corner
/// cells see at most 3 neighbors and edge cells at most 5.
pub fn count_live_neighbors(grid: &GridState, (x, y): Coord) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx < grid.width() && ny < grid.height() && grid.is_alive(nx, ny) {
            count += 1;
        }
    }
    count
}

/// How many neighbor positions of `(x, y)` exist inside the grid.
pub fn neighbor_slots(grid: &GridState, (x, y): Coord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(|&c| grid.contains(c))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(width: usize, height: usize) -> GridState {
        let all = (0..height).flat_map(|y| (0..width).map(move |x| (x, y)));
        GridState::from_live_cells(width, height, all).unwrap()
    }

    #[test]
    fn full_grid_counts_match_available_slots() {
        let grid = full(5, 4);
        assert_eq!(count_live_neighbors(&grid, (0, 0)), 3);
        assert_eq!(count_live_neighbors(&grid, (4, 3)), 3);
        assert_eq!(count_live_neighbors(&grid, (2, 0)), 5);
        assert_eq!(count_live_neighbors(&grid, (0, 2)), 5);
        assert_eq!(count_live_neighbors(&grid, (2, 2)), 8);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let grid = GridState::from_live_cells(3, 3, [(1, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, (1, 1)), 0);
        assert_eq!(count_live_neighbors(&grid, (0, 0)), 1);
    }

    #[test]
    fn edges_do_not_wrap() {
        // A live cell on the far right must not be seen from the left edge.
        let grid = GridState::from_live_cells(5, 5, [(4, 2), (2, 4)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, (0, 2)), 0);
        assert_eq!(count_live_neighbors(&grid, (2, 0)), 0);
        assert_eq!(count_live_neighbors(&grid, (3, 2)), 1);
    }

    #[test]
    fn single_row_and_single_cell_grids() {
        let row = full(4, 1);
        assert_eq!(count_live_neighbors(&row, (0, 0)), 1);
        assert_eq!(count_live_neighbors(&row, (2, 0)), 2);

        let dot = full(1, 1);
        assert_eq!(count_live_neighbors(&dot, (0, 0)), 0);
        assert_eq!(neighbor_slots(&dot, (0, 0)), 0);
    }

    #[test]
    fn slots_by_position() {
        let grid = GridState::blank(6, 6);
        assert_eq!(neighbor_slots(&grid, (0, 0)), 3);
        assert_eq!(neighbor_slots(&grid, (5, 0)), 3);
        assert_eq!(neighbor_slots(&grid, (3, 5)), 5);
        assert_eq!(neighbor_slots(&grid, (3, 3)), 8);
    }
}
