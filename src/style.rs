// Inline-style builders for live objects and sparks. Pure string code so it
// can be tested on the host.
use crate::constants::*;
use fx_core::{DecorativeObject, EnvironmentProbe, Spark, SparkKind, Viewport};
use std::time::Duration;

/// Inline style for a decorative object. Under reduced motion the float
/// animation collapses to a single near-instant cycle.
pub fn particle_css(object: &DecorativeObject, reduced_motion: bool) -> String {
    let animation = if reduced_motion {
        format!("{} {} linear 1", FLOAT_KEYFRAMES, REDUCED_ANIMATION)
    } else {
        format!(
            "{} {:.2}s linear infinite",
            FLOAT_KEYFRAMES,
            object.lifetime.as_secs_f32()
        )
    };
    format!(
        "left: {:.1}px; top: {:.1}px; width: {:.2}px; height: {:.2}px; opacity: {:.2}; \
         animation: {}; animation-delay: {:.2}s; --drift-x: {:.1}px;",
        object.origin.x,
        object.origin.y,
        object.scale,
        object.scale,
        object.opacity,
        animation,
        object.start_delay.as_secs_f32(),
        object.drift_x
    )
}

/// Inline style for a spark at `now`. Trail sparks fade through CSS; burst
/// sparks are positioned every frame.
pub fn spark_css(spark: &Spark, now: Duration) -> String {
    match spark.kind {
        SparkKind::Trail => format!(
            "position: fixed; left: {:.1}px; top: {:.1}px; width: {s}px; height: {s}px; \
             background: {}; border-radius: 50%; pointer-events: none; z-index: {}; \
             animation: {} {:.2}s ease-out forwards;",
            spark.origin.x,
            spark.origin.y,
            TRAIL_SPARK_COLOR,
            SPARK_Z_INDEX,
            TRAIL_FADE_KEYFRAMES,
            spark.lifetime.as_secs_f32(),
            s = TRAIL_SPARK_SIZE_PX,
        ),
        SparkKind::Burst => {
            let pos = spark.position_at(now);
            format!(
                "position: fixed; left: {:.1}px; top: {:.1}px; width: {s}px; height: {s}px; \
                 background: {}; border-radius: 50%; pointer-events: none; z-index: {}; \
                 opacity: {:.3};",
                pos.x,
                pos.y,
                BURST_SPARK_COLOR,
                SPARK_Z_INDEX,
                spark.opacity_at(now),
                s = BURST_SPARK_SIZE_PX,
            )
        }
    }
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.1}px", v)
}

/// `navigator.hardwareConcurrency` is 0, NaN or undefined where unsupported.
#[inline]
pub fn concurrency_from_js(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 1.0).then(|| value as u32)
}

pub fn environment_probe(
    hardware_concurrency: f64,
    prefers_reduced: Option<bool>,
) -> EnvironmentProbe {
    EnvironmentProbe {
        hardware_concurrency: concurrency_from_js(hardware_concurrency),
        prefers_reduced_motion: prefers_reduced,
    }
}

/// Viewport from `innerWidth`/`innerHeight`, falling back when the window
/// reports nothing numeric.
pub fn viewport_size(width: Option<f64>, height: Option<f64>) -> Viewport {
    match (width, height) {
        (Some(w), Some(h)) => Viewport::new(w as f32, h as f32),
        _ => Viewport::new(FALLBACK_VIEWPORT.0, FALLBACK_VIEWPORT.1),
    }
}
