// main.rs - Terminal Game of Life host
// Paces generations on a single-threaded tokio runtime; Ctrl-C ends the run.

use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use log::{error, info};
use tokio::runtime::{Builder, Runtime};
use tokio::signal;
use tokio::sync::watch;
use tokio::time::{self, Interval, MissedTickBehavior};

use life_core::SimulationDriver;

mod args;
mod render;

/// Waits out the tick interval between generations and watches for Ctrl-C.
struct Pacer {
    runtime: Runtime,
    interval: Interval,
    cancel: watch::Receiver<bool>,
}

impl Pacer {
    fn new(period: Duration) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let (cancel_tx, cancel) = watch::channel(false);
        runtime.spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping after this generation");
                let _ = cancel_tx.send(true);
            }
        });

        let interval = runtime.block_on(async {
            // Let the watcher task run once so the Ctrl-C handler is
            // installed before the first frame is drawn.
            tokio::task::yield_now().await;
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; consume it so the
            // initial generation stays on screen for a full period.
            interval.tick().await;
            interval
        });

        Ok(Self { runtime, interval, cancel })
    }

    /// Blocks until the next tick, or breaks if the run was cancelled.
    fn wait(&mut self) -> ControlFlow<()> {
        let Self { runtime, interval, cancel } = self;
        runtime.block_on(async {
            if *cancel.borrow() {
                return ControlFlow::Break(());
            }
            tokio::select! {
                _ = interval.tick() => ControlFlow::Continue(()),
                Ok(()) = cancel.changed() => ControlFlow::Break(()),
            }
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = args::parse(std::env::args().skip(1))?;
    info!(
        "{}x{} grid at {} ticks/sec",
        options.config.width, options.config.height, options.config.ticks_per_second
    );

    let mut pacer = Pacer::new(options.config.tick_interval())?;
    let mut driver = SimulationDriver::from_config(&options.config);
    let mut out = io::stdout().lock();

    let report = driver.run(|generation| {
        if let Err(e) = render::draw(&mut out, generation, options.quiet) {
            error!("failed to write frame: {e}");
            return ControlFlow::Break(());
        }
        if options.generations.is_some_and(|limit| generation.index >= limit) {
            return ControlFlow::Break(());
        }
        pacer.wait()
    })?;
    drop(out);

    println!("Highest stability achieved:");
    println!("{}", report.highest_stability);
    Ok(())
}
