//! driftfx core: adaptive population control for decorative page particles.
//!
//! Platform-independent; the web and native frontends drive it with a frame
//! callback and a clock. Nothing here touches the DOM.

pub mod adapter;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod monitor;
pub mod motion;
pub mod object;
pub mod pointer;
pub mod population;
pub mod random;
pub mod runtime;
pub mod timers;
pub mod timing;
pub mod viewport;

pub use adapter::ResizeAdapter;
pub use clock::Clock;
pub use config::{
    CeilingBands, FxConfig, MonitorParams, PointerParams, PopulationParams, ResizeParams,
};
pub use error::ConfigError;
pub use monitor::{FrameMonitor, FrameReport};
pub use motion::{EnvironmentProbe, MotionReason, ReducedMotion};
pub use object::{DecorativeObject, DespawnReason, ObjectId, PopulationEvent};
pub use pointer::{PointerEffects, Spark, SparkEvent, SparkId, SparkKind};
pub use population::PopulationController;
pub use random::random_between;
pub use runtime::EffectsRuntime;
pub use timers::{TimerId, TimerQueue};
pub use timing::{Debounce, Released, Throttle};
pub use viewport::{compute_ceiling, Viewport};
