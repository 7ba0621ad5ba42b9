//! Runtime configuration.
//!
//! Every tunable has a default taken from `constants.rs`; frontends override
//! individual fields and call [`FxConfig::validate`] (done implicitly by
//! `EffectsRuntime::new`).

use crate::constants::*;
use crate::error::ConfigError;
use std::time::Duration;

/// Viewport-width bands and the population ceiling for each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CeilingBands {
    pub narrow_breakpoint: f32,
    pub medium_breakpoint: f32,
    pub narrow: usize,
    pub medium: usize,
    pub wide: usize,
}

impl Default for CeilingBands {
    fn default() -> Self {
        Self {
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            medium_breakpoint: MEDIUM_BREAKPOINT_PX,
            narrow: NARROW_CEILING,
            medium: MEDIUM_CEILING,
            wide: WIDE_CEILING,
        }
    }
}

impl CeilingBands {
    /// Ceiling for a viewport width. A degenerate viewport (non-finite or
    /// `<= 0`) has no room for objects and yields 0.
    pub fn ceiling_for(&self, width: f32) -> usize {
        if !width.is_finite() || width <= 0.0 {
            return 0;
        }
        if width < self.narrow_breakpoint {
            self.narrow
        } else if width < self.medium_breakpoint {
            self.medium
        } else {
            self.wide
        }
    }
}

#[derive(Clone, Debug)]
pub struct PopulationParams {
    pub bands: CeilingBands,
    pub spawn_probability: f32,
    pub spawn_margin: f32,
    pub scale: (f32, f32),
    pub lifetime_sec: (f32, f32),
    pub opacity: (f32, f32),
    pub start_delay_sec: (f32, f32),
    pub drift: (f32, f32),
    pub expiry_grace: Duration,
    pub seed_stagger: Duration,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            bands: CeilingBands::default(),
            spawn_probability: SPAWN_PROBABILITY,
            spawn_margin: SPAWN_MARGIN_PX,
            scale: SCALE_RANGE,
            lifetime_sec: LIFETIME_RANGE_SEC,
            opacity: OPACITY_RANGE,
            start_delay_sec: START_DELAY_RANGE_SEC,
            drift: DRIFT_RANGE_PX,
            expiry_grace: EXPIRY_GRACE,
            seed_stagger: SEED_STAGGER,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MonitorParams {
    pub window: Duration,
    pub degraded_below_fps: u32,
    pub min_hardware_threads: u32,
}

impl Default for MonitorParams {
    fn default() -> Self {
        Self {
            window: FRAME_WINDOW,
            degraded_below_fps: DEGRADED_FPS,
            min_hardware_threads: MIN_HARDWARE_THREADS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResizeParams {
    pub settle: Duration,
    pub reposition_probability: f32,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            settle: RESIZE_SETTLE,
            reposition_probability: REPOSITION_PROBABILITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PointerParams {
    pub trail_throttle: Duration,
    pub trail_probability: f32,
    pub trail_lifetime: Duration,
    pub burst_count_narrow: usize,
    pub burst_count_wide: usize,
    pub burst_speed: (f32, f32),
    pub burst_lifetime: Duration,
    pub burst_gravity: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            trail_throttle: TRAIL_THROTTLE,
            trail_probability: TRAIL_SPARK_PROBABILITY,
            trail_lifetime: TRAIL_SPARK_LIFETIME,
            burst_count_narrow: BURST_COUNT_NARROW,
            burst_count_wide: BURST_COUNT_WIDE,
            burst_speed: BURST_SPEED_RANGE,
            burst_lifetime: BURST_LIFETIME,
            burst_gravity: BURST_GRAVITY_PX,
        }
    }
}

/// Top-level configuration for an `EffectsRuntime`.
#[derive(Clone, Debug, Default)]
pub struct FxConfig {
    pub population: PopulationParams,
    pub monitor: MonitorParams,
    pub resize: ResizeParams,
    pub pointer: PointerParams,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl FxConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.population;
        let bands = &p.bands;
        if !(bands.narrow_breakpoint > 0.0 && bands.medium_breakpoint >= bands.narrow_breakpoint)
        {
            return Err(ConfigError::InvalidBreakpoints {
                narrow: bands.narrow_breakpoint,
                medium: bands.medium_breakpoint,
            });
        }
        check_probability("spawn_probability", p.spawn_probability)?;
        check_range("spawn_margin", (0.0, p.spawn_margin))?;
        check_range("scale", p.scale)?;
        check_range("lifetime_sec", p.lifetime_sec)?;
        check_range("opacity", p.opacity)?;
        check_range("start_delay_sec", p.start_delay_sec)?;
        check_range("drift", p.drift)?;

        check_nonzero("monitor.window", self.monitor.window)?;
        check_nonzero("resize.settle", self.resize.settle)?;
        check_probability(
            "reposition_probability",
            self.resize.reposition_probability,
        )?;

        let ptr = &self.pointer;
        check_probability("trail_probability", ptr.trail_probability)?;
        check_nonzero("trail_lifetime", ptr.trail_lifetime)?;
        check_nonzero("burst_lifetime", ptr.burst_lifetime)?;
        check_range("burst_speed", ptr.burst_speed)?;
        Ok(())
    }
}

fn check_range(name: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}

fn check_probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

fn check_nonzero(name: &'static str, d: Duration) -> Result<(), ConfigError> {
    if d.is_zero() {
        Err(ConfigError::ZeroDuration { name })
    } else {
        Ok(())
    }
}
