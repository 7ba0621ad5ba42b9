use std::time::Duration;

// Shared population/monitor tuning constants used by the web and native frontends.

// Viewport breakpoints and the population ceiling for each band
pub const NARROW_BREAKPOINT_PX: f32 = 768.0;
pub const MEDIUM_BREAKPOINT_PX: f32 = 1200.0;
pub const NARROW_CEILING: usize = 20;
pub const MEDIUM_CEILING: usize = 35;
pub const WIDE_CEILING: usize = 50;

// Spawn admission: probability per frame while under the ceiling
pub const SPAWN_PROBABILITY: f32 = 0.08;

// Object attribute ranges (min inclusive, max exclusive)
pub const SPAWN_MARGIN_PX: f32 = 50.0; // objects start just outside the viewport edges
pub const SCALE_RANGE: (f32, f32) = (1.0, 3.0);
pub const LIFETIME_RANGE_SEC: (f32, f32) = (12.0, 25.0);
pub const OPACITY_RANGE: (f32, f32) = (0.3, 0.8);
pub const START_DELAY_RANGE_SEC: (f32, f32) = (0.0, 5.0);
pub const DRIFT_RANGE_PX: (f32, f32) = (-150.0, 150.0);

// Extra time an object stays alive after its planned lifetime
pub const EXPIRY_GRACE: Duration = Duration::from_secs(5);

// Page-load warm-up: one spawn per ceiling slot, staggered
pub const SEED_STAGGER: Duration = Duration::from_millis(100);

// Frame monitor
pub const FRAME_WINDOW: Duration = Duration::from_millis(1000);
pub const DEGRADED_FPS: u32 = 30;
pub const INITIAL_FPS: u32 = 60;
pub const CULL_STRIDE: usize = 3; // cull every third live object
pub const MIN_HARDWARE_THREADS: u32 = 4;

// Resize handling
pub const RESIZE_SETTLE: Duration = Duration::from_millis(250);
pub const REPOSITION_PROBABILITY: f32 = 0.5;

// Pointer trail and click burst
pub const TRAIL_THROTTLE: Duration = Duration::from_millis(100);
pub const TRAIL_SPARK_PROBABILITY: f32 = 0.2;
pub const TRAIL_SPARK_LIFETIME: Duration = Duration::from_millis(1500);
pub const BURST_COUNT_NARROW: usize = 6;
pub const BURST_COUNT_WIDE: usize = 10;
pub const BURST_SPEED_RANGE: (f32, f32) = (60.0, 120.0);
pub const BURST_LIFETIME: Duration = Duration::from_millis(1200);
pub const BURST_GRAVITY_PX: f32 = 120.0; // downward offset reached at full progress
