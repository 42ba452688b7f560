// driver.rs - Simulation run: seeding, stepping and stability tracking

use std::ops::ControlFlow;

use log::{debug, info, trace};
use rand::Rng;

use crate::config::{SimConfig, SimRng};
use crate::error::LifeError;
use crate::grid::GridState;
use crate::stability::{StabilityTracker, similarity};
use crate::step::step;

/// Lifecycle of a [`SimulationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Created, first grid not yet handed to the host.
    Initializing,
    Running,
    /// Final. No further generations are produced.
    Terminated,
}

/// One generation as handed to the host for rendering.
#[derive(Clone, Copy, Debug)]
pub struct Generation<'a> {
    pub index: u64,
    pub grid: &'a GridState,
    /// Similarity to the previous generation; `None` for the initial one.
    pub stability: Option<f64>,
    pub highest_stability: f64,
}

/// Summary produced when a run terminates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub highest_stability: f64,
    pub generations: u64,
}

/// Owns the current generation and moves it forward one tick at a time.
///
/// The previous generation only lives for the duration of a tick, long
/// enough to measure stability against the new one.
pub struct SimulationDriver<R = SimRng> {
    rng: R,
    current: GridState,
    seeded: bool,
    generation: u64,
    last_stability: Option<f64>,
    tracker: StabilityTracker,
    state: DriverState,
}

impl SimulationDriver<SimRng> {
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.width, config.height, config.make_rng())
    }
}

impl<R: Rng> SimulationDriver<R> {
    /// Driver that seeds a random `width x height` grid when started.
    pub fn new(width: usize, height: usize, rng: R) -> Self {
        Self {
            rng,
            current: GridState::blank(width, height),
            seeded: false,
            generation: 0,
            last_stability: None,
            tracker: StabilityTracker::new(),
            state: DriverState::Initializing,
        }
    }

    /// Driver that starts from `grid` instead of a random seed.
    pub fn with_grid(grid: GridState, rng: R) -> Self {
        let mut driver = Self::new(grid.width(), grid.height(), rng);
        driver.current = grid;
        driver.seeded = true;
        driver
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn grid(&self) -> &GridState {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn highest_stability(&self) -> f64 {
        self.tracker.highest()
    }

    /// Current generation as reported to the host.
    pub fn current(&self) -> Generation<'_> {
        Generation {
            index: self.generation,
            grid: &self.current,
            stability: self.last_stability,
            highest_stability: self.tracker.highest(),
        }
    }

    /// Seeds the first grid (unless one was supplied) and enters `Running`.
    ///
    /// Calling this on a running driver just returns the current generation.
    pub fn start(&mut self) -> Result<Generation<'_>, LifeError> {
        match self.state {
            DriverState::Terminated => return Err(LifeError::Terminated),
            DriverState::Running => return Ok(self.current()),
            DriverState::Initializing => {}
        }
        if !self.seeded {
            self.current = self.current.seed_random(&mut self.rng);
            self.seeded = true;
        }
        self.state = DriverState::Running;
        info!(
            "simulation started: {}x{} grid, {} live cells",
            self.current.width(),
            self.current.height(),
            self.current.live_count()
        );
        Ok(self.current())
    }

    /// Advances one generation and updates the stability record.
    ///
    /// A driver still in `Initializing` is started instead, yielding the
    /// initial generation.
    pub fn tick(&mut self) -> Result<Generation<'_>, LifeError> {
        match self.state {
            DriverState::Terminated => return Err(LifeError::Terminated),
            DriverState::Initializing => return self.start(),
            DriverState::Running => {}
        }
        let next = step(&self.current);
        let stability = similarity(&self.current, &next)?;
        self.current = next;
        self.generation += 1;
        self.last_stability = Some(stability);
        if self.tracker.record(stability) {
            trace!("generation {}: new highest stability {:.2}%", self.generation, stability);
        }
        debug!(
            "generation {}: stability {:.2}%, {} live cells",
            self.generation,
            stability,
            self.current.live_count()
        );
        Ok(self.current())
    }

    /// Drives the simulation, calling `on_generation` once per generation
    /// including the initial one, until it returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut on_generation: F) -> Result<RunReport, LifeError>
    where
        F: FnMut(&Generation<'_>) -> ControlFlow<()>,
    {
        let mut flow = on_generation(&self.start()?);
        while flow.is_continue() {
            flow = on_generation(&self.tick()?);
        }
        Ok(self.terminate())
    }

    /// Enters `Terminated` and reports the run. Repeated calls return the
    /// same report.
    pub fn terminate(&mut self) -> RunReport {
        let report = RunReport {
            highest_stability: self.tracker.highest(),
            generations: self.generation,
        };
        if self.state != DriverState::Terminated {
            self.state = DriverState::Terminated;
            info!(
                "simulation terminated after {} generations, highest stability {:.2}%",
                report.generations, report.highest_stability
            );
        }
        report
    }

    /// Starts a new run from `grid`, clearing the generation count and the
    /// stability record. The grid must keep the driver's dimensions.
    pub fn restart_with(&mut self, grid: GridState) -> Result<Generation<'_>, LifeError> {
        if self.state == DriverState::Terminated {
            return Err(LifeError::Terminated);
        }
        self.check_dimensions(&grid)?;
        self.reset(grid);
        self.start()
    }

    /// Starts a new run from a freshly seeded random grid.
    pub fn reseed(&mut self) -> Result<Generation<'_>, LifeError> {
        if self.state == DriverState::Terminated {
            return Err(LifeError::Terminated);
        }
        let grid = self.current.seed_random(&mut self.rng);
        self.restart_with(grid)
    }

    /// Replaces the current grid without starting a new run, e.g. after the
    /// host edited cells between ticks.
    pub fn replace_grid(&mut self, grid: GridState) -> Result<(), LifeError> {
        if self.state == DriverState::Terminated {
            return Err(LifeError::Terminated);
        }
        self.check_dimensions(&grid)?;
        self.current = grid;
        self.seeded = true;
        Ok(())
    }

    fn reset(&mut self, grid: GridState) {
        self.current = grid;
        self.seeded = true;
        self.generation = 0;
        self.last_stability = None;
        self.tracker = StabilityTracker::new();
        if self.state == DriverState::Running {
            self.state = DriverState::Initializing;
        }
    }

    fn check_dimensions(&self, grid: &GridState) -> Result<(), LifeError> {
        if grid.dimensions() == self.current.dimensions() {
            Ok(())
        } else {
            Err(LifeError::DimensionMismatch {
                left: self.current.dimensions(),
                right: grid.dimensions(),
            })
        }
    }
}
