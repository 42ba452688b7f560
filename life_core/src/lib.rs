//! Conway's Game of Life on a bounded, non-wrapping grid, with a stability
//! metric comparing consecutive generations.
//!
//! The crate holds no rendering or windowing state. Hosts drive it either
//! through [`SimulationDriver::run`] with a per-generation callback, or by
//! calling [`SimulationDriver::tick`] from their own frame loop.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod stability;
pub mod step;

use rand::Rng;

pub use config::{DisplayConfig, SimConfig, SimRng};
pub use driver::{DriverState, Generation, RunReport, SimulationDriver};
pub use error::{ConfigError, LifeError};
pub use grid::{Coord, GridState};
pub use neighbors::count_live_neighbors;
pub use patterns::{PATTERNS, Pattern};
pub use stability::{StabilityTracker, similarity};
pub use step::step;

/// Randomly seeded `width x height` grid.
pub fn initialize<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> GridState {
    GridState::blank(width, height).seed_random(rng)
}

/// One simulation tick.
pub fn advance(grid: &GridState) -> GridState {
    step(grid)
}

/// Stability between two generations, as a percentage.
pub fn measure(old: &GridState, new: &GridState) -> Result<f64, LifeError> {
    similarity(old, new)
}
