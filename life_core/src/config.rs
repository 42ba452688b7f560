// config.rs - Host-supplied simulation settings

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

/// Random source used to seed a run.
pub type SimRng = ChaCha8Rng;

/// Display the grid is laid out on, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_px: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: 640,
            height_px: 480,
            cell_px: 10,
        }
    }
}

impl DisplayConfig {
    /// Grid dimensions in cells. Both pixel sizes must be whole multiples
    /// of the cell size.
    pub fn grid_size(&self) -> Result<(usize, usize), ConfigError> {
        if self.cell_px == 0 {
            return Err(ConfigError::Zero("cell size"));
        }
        let cells = |axis: &'static str, size: u32| {
            if size == 0 {
                Err(ConfigError::Zero(axis))
            } else if size % self.cell_px != 0 {
                Err(ConfigError::NotMultiple { axis, size, cell: self.cell_px })
            } else {
                Ok((size / self.cell_px) as usize)
            }
        };
        Ok((cells("width", self.width_px)?, cells("height", self.height_px)?))
    }
}

/// Everything a host needs to start a simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub ticks_per_second: f64,
    /// Fixed seed for a reproducible run; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            ticks_per_second: 10.0,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_display(display: &DisplayConfig, ticks_per_second: f64) -> Result<Self, ConfigError> {
        let (width, height) = display.grid_size()?;
        Self { width, height, ticks_per_second, seed: None }.validated()
    }

    /// Checks the invariants the core relies on.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Zero("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::Zero("height"));
        }
        if !(self.ticks_per_second > 0.0 && self.ticks_per_second.is_finite()) {
            return Err(ConfigError::ZeroTickRate);
        }
        if Duration::try_from_secs_f64(1.0 / self.ticks_per_second).is_err() {
            return Err(ConfigError::TickRateTooSlow);
        }
        Ok(self)
    }

    /// Pause between generations at the configured tick rate.
    /// Saturates for configs that did not pass [`SimConfig::validated`].
    pub fn tick_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.ticks_per_second).unwrap_or(Duration::MAX)
    }

    pub fn make_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_display_gives_default_grid() {
        let config = SimConfig::from_display(&DisplayConfig::default(), 10.0).unwrap();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn display_must_be_cell_multiple() {
        let display = DisplayConfig { width_px: 645, ..DisplayConfig::default() };
        assert_eq!(
            display.grid_size(),
            Err(ConfigError::NotMultiple { axis: "width", size: 645, cell: 10 })
        );
        let display = DisplayConfig { cell_px: 0, ..DisplayConfig::default() };
        assert_eq!(display.grid_size(), Err(ConfigError::Zero("cell size")));
        let display = DisplayConfig { height_px: 0, ..DisplayConfig::default() };
        assert_eq!(display.grid_size(), Err(ConfigError::Zero("height")));
    }

    #[test]
    fn validation() {
        let ok = SimConfig::default();
        assert!(ok.validated().is_ok());
        assert_eq!(SimConfig { width: 0, ..ok }.validated(), Err(ConfigError::Zero("width")));
        assert_eq!(SimConfig { ticks_per_second: 0.0, ..ok }.validated(), Err(ConfigError::ZeroTickRate));
        assert_eq!(SimConfig { ticks_per_second: f64::NAN, ..ok }.validated(), Err(ConfigError::ZeroTickRate));
        assert_eq!(SimConfig { ticks_per_second: 1e-300, ..ok }.validated(), Err(ConfigError::TickRateTooSlow));
        assert_eq!(SimConfig { ticks_per_second: 1e-300, ..ok }.tick_interval(), Duration::MAX);
        assert!(SimConfig { ticks_per_second: 0.001, ..ok }.validated().is_ok());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = SimConfig { seed: Some(99), ..SimConfig::default() };
        let a: u64 = config.make_rng().gen_range(0..u64::MAX);
        let b: u64 = config.make_rng().gen_range(0..u64::MAX);
        assert_eq!(a, b);
    }
}
