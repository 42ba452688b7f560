//! Error types for the simulation core.

use thiserror::Error;

/// Contract violations raised by grid queries and the driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A coordinate outside `[0, width) x [0, height)` was queried.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Two grids of different sizes were compared.
    #[error("cannot compare a {}x{} grid with a {}x{} grid", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The driver was asked to tick after it terminated.
    #[error("simulation has already terminated")]
    Terminated,
}

/// Rejected host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{axis} of {size}px is not a multiple of the {cell}px cell size")]
    NotMultiple {
        axis: &'static str,
        size: u32,
        cell: u32,
    },

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,

    #[error("tick rate is too slow to pace")]
    TickRateTooSlow,
}
