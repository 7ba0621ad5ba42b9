// DOM hooks and presentation values for the web frontend.
//
// Control-logic tuning lives in `fx_core::constants`; everything here only
// affects how live objects look on the page.

// Page structure
pub const CONTAINER_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";
pub const SPARK_CLASS: &str = "fx-spark";
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Clicks on these elements don't produce a burst
pub const BURST_EXCLUDE_SELECTOR: &str = ".btn, .footer-link";

// Particle animation
pub const FLOAT_KEYFRAMES: &str = "float";
pub const REDUCED_ANIMATION: &str = "0.01ms"; // effectively no motion

// Spark look
pub const TRAIL_SPARK_SIZE_PX: f32 = 3.0;
pub const TRAIL_SPARK_COLOR: &str = "rgba(0, 231, 208, 0.6)";
pub const TRAIL_FADE_KEYFRAMES: &str = "mouseParticleFade";
pub const BURST_SPARK_SIZE_PX: f32 = 4.0;
pub const BURST_SPARK_COLOR: &str = "rgba(0, 255, 170, 0.8)";
pub const SPARK_Z_INDEX: u32 = 1000;

// Viewport assumed when the window reports nothing usable
pub const FALLBACK_VIEWPORT: (f32, f32) = (1280.0, 720.0);
