// stability.rs - How much two consecutive generations resemble each other

use crate::error::LifeError;
use crate::grid::GridState;

/// Percentage of cells with the same value in `old` and `new`, in `[0, 100]`.
pub fn similarity(old: &GridState, new: &GridState) -> Result<f64, LifeError> {
    if old.dimensions() != new.dimensions() {
        return Err(LifeError::DimensionMismatch {
            left: old.dimensions(),
            right: new.dimensions(),
        });
    }
    let matching = old
        .cells()
        .iter()
        .zip(new.cells())
        .filter(|(a, b)| a == b)
        .count();
    Ok(matching as f64 / old.cell_count() as f64 * 100.0)
}

/// Running maximum of the stability seen over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StabilityTracker {
    highest: f64,
}

impl StabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in a new reading; returns true when it set a new record.
    pub fn record(&mut self, stability: f64) -> bool {
        if stability > self.highest {
            self.highest = stability;
            true
        } else {
            false
        }
    }

    pub fn highest(&self) -> f64 {
        self.highest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_grids_are_fully_stable() {
        let grid = GridState::from_live_cells(6, 4, [(0, 0), (5, 3), (2, 2)]).unwrap();
        assert_eq!(similarity(&grid, &grid), Ok(100.0));
    }

    #[test]
    fn inverted_grid_scores_zero() {
        let empty = GridState::blank(2, 2);
        let full = GridState::from_live_cells(2, 2, [(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(similarity(&empty, &full), Ok(0.0));
    }

    #[test]
    fn flipped_cells_reduce_stability() {
        let old = GridState::blank(10, 4);
        let new = old.toggled((3, 1)).unwrap().toggled((9, 3)).unwrap();
        assert_eq!(similarity(&old, &new), Ok(38.0 / 40.0 * 100.0));
        assert_eq!(similarity(&new, &old), similarity(&old, &new));
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let result = similarity(&GridState::blank(3, 4), &GridState::blank(4, 3));
        assert_eq!(
            result,
            Err(LifeError::DimensionMismatch { left: (3, 4), right: (4, 3) })
        );
    }

    #[test]
    fn tracker_keeps_maximum() {
        let mut tracker = StabilityTracker::new();
        assert_eq!(tracker.highest(), 0.0);
        assert!(tracker.record(42.5));
        assert!(!tracker.record(10.0));
        assert!(!tracker.record(42.5));
        assert!(tracker.record(99.0));
        assert_eq!(tracker.highest(), 99.0);
    }
}
