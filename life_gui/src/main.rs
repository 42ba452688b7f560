// main.rs - Windowed Game of Life host
// The simulation lives in life_core; this crate only renders and handles input.

use eframe::egui;
use egui::Color32;
use log::{error, info, warn};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use life_core::{DisplayConfig, GridState, LifeError, RunReport, SimConfig, SimulationDriver, patterns};

mod ui;

/// Latest run report, read back by `main` once the window closes.
type SharedReport = Arc<Mutex<Option<RunReport>>>;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let display = DisplayConfig::default();
    let config = SimConfig::from_display(&display, 10.0).unwrap_or_else(|e| {
        warn!("invalid display configuration ({e}), using defaults");
        SimConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([display.width_px as f32 + 40.0, display.height_px as f32 + 200.0]),
        ..Default::default()
    };

    let report: SharedReport = Arc::new(Mutex::new(None));
    let app_report = Arc::clone(&report);
    let cell_size = display.cell_px as f32;

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(&config, cell_size, app_report))),
    )?;

    let final_report = report.lock().ok().and_then(|slot| *slot);
    match final_report {
        Some(report) => {
            println!("Highest stability achieved:");
            println!("{}", report.highest_stability);
        }
        None => warn!("window closed before the simulation started"),
    }
    Ok(())
}

pub struct GameOfLife {
    driver: SimulationDriver,
    report: SharedReport,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub cell_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub line_color: Color32,
    pub selected_pattern: usize,
}

impl GameOfLife {
    fn new(config: &SimConfig, cell_size: f32, report: SharedReport) -> Self {
        let mut app = Self {
            driver: SimulationDriver::from_config(config),
            report,
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            cell_size,
            live_color: Color32::from_rgb(0, 255, 0),
            dead_color: Color32::WHITE,
            line_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        };
        app.after_change(|driver| driver.start().map(|_| ()));
        app
    }

    pub fn grid(&self) -> &GridState {
        self.driver.grid()
    }

    pub fn generation(&self) -> u64 {
        self.driver.generation()
    }

    pub fn stability(&self) -> Option<f64> {
        self.driver.current().stability
    }

    pub fn highest_stability(&self) -> f64 {
        self.driver.highest_stability()
    }

    pub fn update_generation(&mut self) {
        self.after_change(|driver| driver.tick().map(|_| ()));
    }

    pub fn clear_grid(&mut self) {
        let (width, height) = self.grid().dimensions();
        self.after_change(|driver| driver.restart_with(GridState::blank(width, height)).map(|_| ()));
    }

    pub fn randomize(&mut self) {
        self.after_change(|driver| driver.reseed().map(|_| ()));
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let (width, height) = self.grid().dimensions();
        match pattern.place_centered(width, height) {
            Ok(grid) => self.after_change(|driver| driver.restart_with(grid).map(|_| ())),
            Err(e) => warn!("pattern {} does not fit: {e}", pattern.name),
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let toggled = self.grid().toggled((x, y));
        self.after_change(|driver| driver.replace_grid(toggled?));
    }

    /// Ends the run and records the final report.
    pub fn finish(&mut self) {
        self.is_running = false;
        let report = self.driver.terminate();
        self.publish(report);
        info!("highest stability achieved: {:.2}%", report.highest_stability);
    }

    fn after_change<F>(&mut self, change: F)
    where
        F: FnOnce(&mut SimulationDriver) -> Result<(), LifeError>,
    {
        if let Err(e) = change(&mut self.driver) {
            error!("simulation error: {e}");
            self.is_running = false;
            return;
        }
        let report = RunReport {
            highest_stability: self.driver.highest_stability(),
            generations: self.driver.generation(),
        };
        self.publish(report);
    }

    fn publish(&self, report: RunReport) {
        if let Ok(mut slot) = self.report.lock() {
            *slot = Some(report);
        }
    }
}
