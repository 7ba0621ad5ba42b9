// Host-side tests for tuning constants and their relationships.

use fx_core::constants::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ceilings_grow_with_viewport_width() {
    assert!(NARROW_BREAKPOINT_PX < MEDIUM_BREAKPOINT_PX);
    assert!(NARROW_CEILING < MEDIUM_CEILING);
    assert!(MEDIUM_CEILING < WIDE_CEILING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_in_unit_range() {
    for p in [SPAWN_PROBABILITY, REPOSITION_PROBABILITY, TRAIL_SPARK_PROBABILITY] {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn attribute_ranges_are_ordered() {
    for (min, max) in [
        SCALE_RANGE,
        LIFETIME_RANGE_SEC,
        OPACITY_RANGE,
        START_DELAY_RANGE_SEC,
        DRIFT_RANGE_PX,
        BURST_SPEED_RANGE,
    ] {
        assert!(min < max, "[{min}, {max})");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_have_logical_relationships() {
    // an object always outlives its start delay
    assert!(LIFETIME_RANGE_SEC.0 > START_DELAY_RANGE_SEC.1);
    // warm-up for the widest band finishes within a few seconds
    assert!(SEED_STAGGER * WIDE_CEILING as u32 <= Duration::from_secs(5));
    assert!(RESIZE_SETTLE < FRAME_WINDOW);
    assert!(DEGRADED_FPS < INITIAL_FPS);
    assert!(CULL_STRIDE >= 2);
    assert!(BURST_COUNT_NARROW < BURST_COUNT_WIDE);
}
