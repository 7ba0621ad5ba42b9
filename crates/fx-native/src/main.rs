//! Headless driver for the effects runtime.
//!
//! Replays a simulated frame clock (optionally with a slow stretch and a
//! viewport resize) and logs how the population responds, second by second.

use anyhow::{ensure, Result};
use clap::Parser;
use fx_core::{
    DespawnReason, EffectsRuntime, EnvironmentProbe, FxConfig, PopulationEvent, Viewport,
};
use glam::Vec2;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "fx-native")]
#[command(about = "Simulate the driftfx particle runtime without a browser", long_about = None)]
struct Cli {
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1440.0)]
    width: f32,

    /// Viewport height in CSS pixels
    #[arg(long, default_value_t = 900.0)]
    height: f32,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Frame rate outside the slow stretch
    #[arg(long, default_value_t = 60)]
    fps: u64,

    /// Frame rate during the slow stretch
    #[arg(long, default_value_t = 20)]
    slow_fps: u64,

    /// Second at which frames slow down
    #[arg(long)]
    slow_from: Option<u64>,

    /// Second at which frames recover
    #[arg(long)]
    slow_until: Option<u64>,

    /// Resize the viewport to this width at `--resize-at`
    #[arg(long)]
    resize_width: Option<f32>,

    /// Second at which the resize happens
    #[arg(long, default_value_t = 30)]
    resize_at: u64,

    /// Click bursts per simulated second at the viewport centre
    #[arg(long, default_value_t = 0)]
    clicks: u64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Reported hardware threads (omit to simulate an environment that hides it)
    #[arg(long)]
    cores: Option<u32>,

    /// Simulate a user preference for reduced motion
    #[arg(long)]
    reduced_motion: bool,

    /// Log every spawn and despawn
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Totals {
    spawned: usize,
    expired: usize,
    culled: usize,
    repositioned: usize,
    peak_live: usize,
    degraded_windows: usize,
}

impl Totals {
    fn record(&mut self, events: &[PopulationEvent]) {
        for ev in events {
            match ev {
                PopulationEvent::Spawned(_) => self.spawned += 1,
                PopulationEvent::Despawned {
                    reason: DespawnReason::Expired,
                    ..
                } => self.expired += 1,
                PopulationEvent::Despawned {
                    reason: DespawnReason::Culled,
                    ..
                } => self.culled += 1,
                PopulationEvent::Repositioned { .. } => self.repositioned += 1,
            }
        }
    }
}

impl Cli {
    fn fps_at(&self, second: u64) -> u64 {
        let slow_from = self.slow_from.unwrap_or(u64::MAX);
        let slow_until = self.slow_until.unwrap_or(u64::MAX);
        if second >= slow_from && second < slow_until {
            self.slow_fps
        } else {
            self.fps
        }
    }
}

/// Timestamp of frame `frame` (0-based) within `second` at `fps`. Computed
/// from the second boundary each time so N frames span exactly one second.
fn frame_time(second: u64, frame: u64, fps: u64) -> Duration {
    Duration::from_secs(second) + Duration::from_secs(1) * (frame + 1) as u32 / fps as u32
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();

    ensure!(cli.fps > 0 && cli.slow_fps > 0, "frame rates must be positive");

    let config = FxConfig {
        seed: cli.seed,
        ..FxConfig::default()
    };
    let probe = EnvironmentProbe {
        hardware_concurrency: cli.cores,
        prefers_reduced_motion: Some(cli.reduced_motion),
    };
    let mut viewport = Viewport::new(cli.width, cli.height);
    let mut rt = EffectsRuntime::new(config, viewport, probe, Duration::ZERO)?;
    rt.start(Duration::ZERO);
    log::info!(
        "[sim] {}x{} ceiling={} reduced_motion={:?}",
        cli.width,
        cli.height,
        rt.current_ceiling(),
        rt.reduced_motion().reason()
    );

    let mut totals = Totals::default();
    for second in 0..cli.seconds {
        let now = Duration::from_secs(second);
        if let Some(width) = cli.resize_width.filter(|_| second == cli.resize_at) {
            viewport = Viewport::new(width, cli.height);
            rt.notify_resize(now, viewport);
            log::info!("[sim] resize to {}x{}", viewport.width, viewport.height);
        }
        let fps = cli.fps_at(second);
        let click_every = (cli.clicks > 0).then(|| fps / cli.clicks.min(fps));
        for frame in 0..fps {
            let now = frame_time(second, frame, fps);
            if let Some(report) = rt.frame(now) {
                if report.degraded {
                    totals.degraded_windows += 1;
                }
            }
            if let Some(every) = click_every {
                if frame % every == 0 {
                    rt.click(now, Vec2::new(viewport.width / 2.0, viewport.height / 2.0));
                }
            }
            let events = rt.drain_events();
            totals.record(&events);
            rt.drain_spark_events();
            totals.peak_live = totals.peak_live.max(rt.current_live_count());
        }
        log::info!(
            "[sim] t={:>3}s fps={:>2} live={:>2}/{:<2} sparks={}",
            second + 1,
            rt.fps(),
            rt.current_live_count(),
            rt.current_ceiling(),
            rt.pointer().sparks().len()
        );
    }

    log::info!(
        "[sim] done: spawned={} expired={} culled={} repositioned={} peak_live={} degraded_windows={}",
        totals.spawned,
        totals.expired,
        totals.culled,
        totals.repositioned,
        totals.peak_live,
        totals.degraded_windows
    );
    Ok(())
}
