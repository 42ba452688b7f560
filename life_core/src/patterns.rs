// patterns.rs - Named starting patterns

use crate::error::LifeError;
use crate::grid::{Coord, GridState};

/// A named set of live cells, relative to the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Blank `width x height` grid with this pattern stamped at `offset`.
    pub fn place(&self, width: usize, height: usize, offset: Coord) -> Result<GridState, LifeError> {
        let (ox, oy) = offset;
        let cells = self
            .cells
            .iter()
            .map(|&(x, y)| match (x.checked_add(ox), y.checked_add(oy)) {
                (Some(px), Some(py)) => Ok((px, py)),
                _ => Err(LifeError::OutOfBounds {
                    x: x.saturating_add(ox),
                    y: y.saturating_add(oy),
                    width,
                    height,
                }),
            })
            .collect::<Result<Vec<Coord>, LifeError>>()?;
        GridState::from_live_cells(width, height, cells)
    }

    /// Like [`Pattern::place`], with the pattern centered on the grid.
    pub fn place_centered(&self, width: usize, height: usize) -> Result<GridState, LifeError> {
        let (pw, ph) = self.extent();
        let offset = (width.saturating_sub(pw) / 2, height.saturating_sub(ph) / 2);
        self.place(width, height, offset)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::step;

    fn run(grid: &GridState, generations: usize) -> GridState {
        (0..generations).fold(grid.clone(), |g, _| step(&g))
    }

    #[test]
    fn extents() {
        assert_eq!(find("glider").unwrap().extent(), (3, 3));
        assert_eq!(find("Pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find("Gosper Glider Gun").unwrap().extent(), (36, 9));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn placement_outside_grid_fails() {
        let glider = find("Glider").unwrap();
        assert!(glider.place(5, 5, (2, 2)).is_ok());
        assert!(matches!(glider.place(5, 5, (3, 2)), Err(LifeError::OutOfBounds { .. })));
        assert!(find("Gosper Glider Gun").unwrap().place_centered(20, 20).is_err());
        assert!(matches!(
            glider.place(5, 5, (usize::MAX, 0)),
            Err(LifeError::OutOfBounds { x: usize::MAX, .. })
        ));
        assert!(glider.place(5, 5, (0, usize::MAX - 1)).is_err());
    }

    #[test]
    fn oscillator_periods() {
        for (name, period) in [("Blinker", 2), ("Toad", 2), ("Beacon", 2), ("Pulsar", 3)] {
            let start = find(name).unwrap().place_centered(20, 20).unwrap();
            assert_ne!(step(&start), start, "{name} should change");
            assert_eq!(run(&start, period), start, "{name} period {period}");
        }
    }

    #[test]
    fn block_is_still() {
        let block = find("Block").unwrap().place(4, 4, (1, 1)).unwrap();
        assert_eq!(step(&block), block);
    }

    #[test]
    fn gun_emits_gliders() {
        let gun = find("Gosper Glider Gun").unwrap().place(50, 30, (1, 1)).unwrap();
        let later = run(&gun, 30);
        // Period 30: the gun core returns and one glider has been added.
        assert_eq!(later.live_count(), gun.live_count() + 5);
    }
}
