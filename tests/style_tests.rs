// Host-side tests for the pure style/environment helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use fx_core::random::stream_rng;
use fx_core::{PopulationController, PopulationParams, Spark, SparkId, SparkKind, Viewport};
use glam::Vec2;
use std::time::Duration;
use style::*;

fn sample_object() -> fx_core::DecorativeObject {
    let mut c = PopulationController::new(
        PopulationParams::default(),
        Viewport::new(1200.0, 800.0),
        stream_rng(Some(1), 0),
    );
    let id = c.spawn_one(Duration::ZERO);
    c.get(id).cloned().expect("just spawned")
}

#[test]
fn particle_css_carries_spawn_attributes() {
    let o = sample_object();
    let css = particle_css(&o, false);
    assert!(css.contains(&format!("left: {:.1}px", o.origin.x)));
    assert!(css.contains("top: 850.0px"));
    assert!(css.contains(&format!("opacity: {:.2}", o.opacity)));
    assert!(css.contains(&format!("float {:.2}s linear infinite", o.lifetime.as_secs_f32())));
    assert!(css.contains(&format!("--drift-x: {:.1}px", o.drift_x)));
}

#[test]
fn reduced_motion_collapses_animation() {
    let o = sample_object();
    let css = particle_css(&o, true);
    assert!(css.contains("float 0.01ms linear 1"));
    assert!(!css.contains("infinite"));
}

#[test]
fn burst_spark_css_tracks_position_and_fade() {
    let spark = Spark {
        id: SparkId(0),
        kind: SparkKind::Burst,
        origin: Vec2::new(100.0, 100.0),
        velocity: Vec2::new(80.0, 0.0),
        gravity: 120.0,
        born: Duration::ZERO,
        lifetime: Duration::from_millis(1200),
    };
    let css = spark_css(&spark, Duration::from_millis(600));
    assert!(css.contains("left: 140.0px"), "{css}");
    assert!(css.contains("top: 130.0px"), "{css}");
    assert!(css.contains("opacity: 0.500"), "{css}");
}

#[test]
fn trail_spark_css_uses_css_fade() {
    let spark = Spark {
        id: SparkId(1),
        kind: SparkKind::Trail,
        origin: Vec2::new(5.0, 6.0),
        velocity: Vec2::ZERO,
        gravity: 0.0,
        born: Duration::ZERO,
        lifetime: Duration::from_millis(1500),
    };
    let css = spark_css(&spark, Duration::from_millis(700));
    assert!(css.contains("left: 5.0px; top: 6.0px"));
    assert!(css.contains("mouseParticleFade 1.50s"));
}

#[test]
fn hardware_concurrency_parsing() {
    assert_eq!(concurrency_from_js(8.0), Some(8));
    assert_eq!(concurrency_from_js(0.0), None);
    assert_eq!(concurrency_from_js(f64::NAN), None);

    let probe = environment_probe(2.0, None);
    assert_eq!(probe.hardware_concurrency, Some(2));
    assert_eq!(probe.prefers_reduced_motion, None);
}

#[test]
fn viewport_falls_back_when_window_reports_nothing() {
    assert_eq!(viewport_size(Some(800.0), Some(600.0)), Viewport::new(800.0, 600.0));
    assert_eq!(viewport_size(None, Some(600.0)), Viewport::new(1280.0, 720.0));
    assert_eq!(px(12.345), "12.3px");
}
