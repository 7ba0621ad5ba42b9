// Host-side tests for the composed runtime: config validation, resize
// handling, motion preference and pointer sparks.

use fx_core::random::stream_rng;
use fx_core::{
    ConfigError, EffectsRuntime, EnvironmentProbe, FxConfig, PopulationController,
    PopulationEvent, PopulationParams, ReducedMotion, ResizeAdapter, ResizeParams, SparkEvent,
    SparkKind, Viewport,
};
use glam::Vec2;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn make_runtime(width: f32, config: FxConfig) -> EffectsRuntime {
    EffectsRuntime::new(
        config.with_seed(42),
        Viewport::new(width, 900.0),
        EnvironmentProbe::default(),
        Duration::ZERO,
    )
    .expect("default config is valid")
}

/// Runs frames at `fps` from `from_ms` for `duration_ms`; returns the time
/// after the last frame.
fn run_frames(rt: &mut EffectsRuntime, from_ms: u64, duration_ms: u64, fps: u64) -> u64 {
    let step = 1000 / fps;
    let mut t = from_ms;
    while t < from_ms + duration_ms {
        t += step;
        rt.frame(ms(t));
    }
    t
}

#[test]
fn default_config_validates() {
    assert_eq!(FxConfig::default().validate(), Ok(()));
}

#[test]
fn inverted_range_is_rejected() {
    let mut config = FxConfig::default();
    config.population.lifetime_sec = (25.0, 12.0);
    let err = EffectsRuntime::new(
        config,
        Viewport::new(1000.0, 800.0),
        EnvironmentProbe::default(),
        Duration::ZERO,
    )
    .err();
    assert!(matches!(
        err,
        Some(ConfigError::InvalidRange { name: "lifetime_sec", .. })
    ));
}

#[test]
fn bad_probability_and_zero_window_are_rejected() {
    let mut config = FxConfig::default();
    config.population.spawn_probability = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidProbability { .. })
    ));

    let mut config = FxConfig::default();
    config.monitor.window = Duration::ZERO;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroDuration { .. })));
}

#[test]
fn population_fills_to_ceiling_at_steady_frame_rate() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.start(Duration::ZERO);
    let mut t = 0;
    for _ in 0..30 {
        t = run_frames(&mut rt, t, 1000, 60);
        assert!(rt.current_live_count() <= rt.current_ceiling());
    }
    assert_eq!(rt.current_ceiling(), 50);
    assert!(rt.current_live_count() > 25, "live={}", rt.current_live_count());
    assert_eq!(rt.monitor().degraded_windows(), 0);
}

#[test]
fn slow_frames_trigger_culls() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.start(Duration::ZERO);
    let t = run_frames(&mut rt, 0, 6_000, 60);
    let before = rt.current_live_count();
    rt.drain_events();

    run_frames(&mut rt, t, 3_000, 20);
    assert!(rt.monitor().degraded_windows() >= 2);
    assert!(rt.fps() < 30);
    let culled = rt
        .drain_events()
        .iter()
        .filter(|e| {
            matches!(
                e,
                PopulationEvent::Despawned {
                    reason: fx_core::DespawnReason::Culled,
                    ..
                }
            )
        })
        .count();
    assert!(culled >= before / 3, "culled={culled} before={before}");
}

#[test]
fn resize_is_debounced_before_ceiling_changes() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.notify_resize(ms(0), Viewport::new(900.0, 700.0));
    rt.notify_resize(ms(100), Viewport::new(500.0, 700.0));
    rt.frame(ms(300));
    assert_eq!(rt.current_ceiling(), 50, "still settling");
    rt.frame(ms(350));
    assert_eq!(rt.current_ceiling(), 20, "only the last size applies");
}

#[test]
fn settled_resize_applies_even_if_next_resize_arrives_before_a_frame() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.notify_resize(ms(0), Viewport::new(900.0, 700.0));
    // 900px settled at 250ms but no frame polled it
    rt.notify_resize(ms(300), Viewport::new(500.0, 700.0));
    assert_eq!(rt.current_ceiling(), 35);
    assert_eq!(rt.controller().viewport(), Viewport::new(900.0, 700.0));
    rt.frame(ms(549));
    assert_eq!(rt.current_ceiling(), 35);
    rt.frame(ms(550));
    assert_eq!(rt.current_ceiling(), 20);
}

#[test]
fn degradation_uses_the_latest_reported_width() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.start(Duration::ZERO);
    rt.notify_resize(ms(900), Viewport::new(500.0, 900.0));
    // the window closing at 1000ms is slow; the resize settles only at 1150ms
    let end = run_frames(&mut rt, 0, 1000, 20);
    assert_eq!(end, 1000);
    assert_eq!(rt.monitor().degraded_windows(), 1);
    assert_eq!(rt.controller().viewport().width, 1400.0);
    assert_eq!(rt.current_ceiling(), 20);
}

#[test]
fn outboxes_hold_only_undrained_events() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.start(Duration::ZERO);
    run_frames(&mut rt, 0, 500, 60);
    rt.click(ms(500), Vec2::new(10.0, 10.0));
    assert!(!rt.drain_events().is_empty());
    assert_eq!(rt.drain_spark_events().len(), 10);
    assert!(rt.drain_events().is_empty());
    assert!(rt.drain_spark_events().is_empty());
}

#[test]
fn resize_repositions_some_objects_inside_new_bounds() {
    let mut controller = PopulationController::new(
        PopulationParams::default(),
        Viewport::new(1400.0, 900.0),
        stream_rng(Some(99), 0),
    );
    for _ in 0..200 {
        controller.spawn_one(Duration::ZERO);
    }
    controller.drain_events();
    let mut adapter = ResizeAdapter::new(&ResizeParams::default(), ReducedMotion::new());
    adapter.notify_resize(ms(0), Viewport::new(500.0, 900.0), &mut controller);
    assert!(!adapter.poll(ms(249), &mut controller));
    assert!(adapter.poll(ms(250), &mut controller));

    assert_eq!(controller.ceiling(), 20);
    assert_eq!(controller.live_count(), 200, "resize never culls");
    let moved: Vec<f32> = controller
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            PopulationEvent::Repositioned { x, .. } => Some(x),
            _ => None,
        })
        .collect();
    assert!(moved.len() > 50 && moved.len() < 150, "moved={}", moved.len());
    assert!(moved.iter().all(|&x| (-50.0..550.0).contains(&x)));
}

#[test]
fn motion_preference_sets_but_never_clears() {
    let rt = make_runtime(1000.0, FxConfig::default());
    assert!(!rt.reduced_motion().is_set());
    rt.notify_motion_preference(false);
    assert!(!rt.reduced_motion().is_set());
    rt.notify_motion_preference(true);
    assert!(rt.reduced_motion().is_set());
    rt.notify_motion_preference(false);
    assert!(rt.reduced_motion().is_set());
}

#[test]
fn low_core_environment_reduces_motion_at_startup() {
    let rt = EffectsRuntime::new(
        FxConfig::default(),
        Viewport::new(1000.0, 800.0),
        EnvironmentProbe {
            hardware_concurrency: Some(2),
            prefers_reduced_motion: None,
        },
        Duration::ZERO,
    )
    .expect("valid config");
    assert!(rt.reduced_motion().is_set());
}

#[test]
fn pointer_trail_is_throttled() {
    let mut config = FxConfig::default();
    config.pointer.trail_probability = 1.0;
    let mut rt = make_runtime(1400.0, config);
    for i in 0..10u64 {
        rt.pointer_move(ms(i * 10), Vec2::new(i as f32, 0.0));
    }
    rt.frame(ms(100));
    let trail: Vec<Vec2> = rt
        .drain_spark_events()
        .into_iter()
        .filter_map(|e| match e {
            SparkEvent::Spawned(s) if s.kind == SparkKind::Trail => Some(s.origin),
            _ => None,
        })
        .collect();
    assert_eq!(trail, vec![Vec2::new(0.0, 0.0), Vec2::new(9.0, 0.0)]);
}

#[test]
fn overdue_trail_sample_still_spawns_without_a_frame() {
    let mut config = FxConfig::default();
    config.pointer.trail_probability = 1.0;
    let mut rt = make_runtime(1400.0, config);
    rt.pointer_move(ms(0), Vec2::new(1.0, 0.0));
    rt.pointer_move(ms(50), Vec2::new(2.0, 0.0));
    rt.pointer_move(ms(105), Vec2::new(3.0, 0.0));
    rt.frame(ms(200));
    let trail: Vec<Vec2> = rt
        .drain_spark_events()
        .into_iter()
        .filter_map(|e| match e {
            SparkEvent::Spawned(s) if s.kind == SparkKind::Trail => Some(s.origin),
            _ => None,
        })
        .collect();
    assert_eq!(
        trail,
        vec![Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(3.0, 0.0)]
    );
}

#[test]
fn click_burst_size_depends_on_viewport_and_sparks_retire() {
    let mut narrow = make_runtime(500.0, FxConfig::default());
    assert_eq!(narrow.click(ms(0), Vec2::new(10.0, 10.0)), 6);

    let mut wide = make_runtime(1400.0, FxConfig::default());
    assert_eq!(wide.click(ms(0), Vec2::new(10.0, 10.0)), 10);
    assert_eq!(wide.pointer().sparks().len(), 10);
    wide.frame(ms(1_199));
    assert_eq!(wide.pointer().sparks().len(), 10);
    wide.frame(ms(1_200));
    assert!(wide.pointer().sparks().is_empty());
    let retired = wide
        .drain_spark_events()
        .into_iter()
        .filter(|e| matches!(e, SparkEvent::Retired(_)))
        .count();
    assert_eq!(retired, 10);
}

#[test]
fn burst_spark_follows_ballistic_path() {
    let mut rt = make_runtime(1400.0, FxConfig::default());
    rt.click(ms(0), Vec2::new(100.0, 100.0));
    let spark = rt.pointer().sparks()[0].clone();
    // first spark of a burst points along +x
    assert!(spark.velocity.y.abs() < 1e-3);
    let speed = spark.velocity.x;
    assert!((60.0..120.0).contains(&speed));

    let mid = spark.position_at(ms(600));
    assert!((mid.x - (100.0 + speed * 0.5)).abs() < 1e-3);
    assert!((mid.y - (100.0 + 120.0 * 0.25)).abs() < 1e-3);
    assert!((spark.opacity_at(ms(600)) - 0.5).abs() < 1e-5);
    assert_eq!(spark.position_at(ms(5_000)), spark.position_at(ms(1_200)));
}
