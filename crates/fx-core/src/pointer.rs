//! Pointer-driven sparks: a throttled trail behind the cursor and radial
//! bursts on click. Sparks live outside the managed population and are never
//! culled; they simply run out their short lifetime.

use crate::config::PointerParams;
use crate::constants::NARROW_BREAKPOINT_PX;
use crate::random::{chance, random_in, FxRng};
use crate::timing::Throttle;
use crate::viewport::Viewport;
use glam::Vec2;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SparkId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkKind {
    Trail,
    Burst,
}

#[derive(Clone, Debug)]
pub struct Spark {
    pub id: SparkId,
    pub kind: SparkKind,
    pub origin: Vec2,
    /// Pixels travelled over the whole lifetime.
    pub velocity: Vec2,
    pub gravity: f32,
    pub born: Duration,
    pub lifetime: Duration,
}

impl Spark {
    /// Fraction of the lifetime elapsed, clamped to `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.born).as_secs_f32();
        (elapsed / self.lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: Duration) -> Vec2 {
        let p = self.progress(now);
        self.origin + self.velocity * p + Vec2::new(0.0, self.gravity * p * p)
    }

    pub fn opacity_at(&self, now: Duration) -> f32 {
        1.0 - self.progress(now)
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.born + self.lifetime
    }
}

#[derive(Clone, Debug)]
pub enum SparkEvent {
    Spawned(Spark),
    Retired(SparkId),
}

pub struct PointerEffects {
    params: PointerParams,
    trail: Throttle<Vec2>,
    sparks: Vec<Spark>,
    rng: FxRng,
    next_id: u64,
    events: Vec<SparkEvent>,
}

impl PointerEffects {
    pub fn new(params: PointerParams, rng: FxRng) -> Self {
        Self {
            trail: Throttle::new(params.trail_throttle),
            params,
            sparks: Vec::new(),
            rng,
            next_id: 0,
            events: Vec::new(),
        }
    }

    /// Feeds a pointer sample through the trail throttle. An overdue trailing
    /// sample the frame loop hasn't polled yet still gets its spark.
    pub fn pointer_move(&mut self, now: Duration, pos: Vec2) {
        for pos in self.trail.call(now, pos) {
            self.trail_spark(now, pos);
        }
    }

    /// Radial burst at `pos`; fewer sparks on narrow viewports. Returns the
    /// number of sparks created.
    pub fn click(&mut self, now: Duration, pos: Vec2, viewport: Viewport) -> usize {
        let count = if viewport.width < NARROW_BREAKPOINT_PX {
            self.params.burst_count_narrow
        } else {
            self.params.burst_count_wide
        };
        for i in 0..count {
            let angle = (i as f32 / count as f32) * TAU;
            let speed = random_in(&mut self.rng, self.params.burst_speed);
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
            self.push_spark(
                SparkKind::Burst,
                pos,
                velocity,
                self.params.burst_gravity,
                now,
                self.params.burst_lifetime,
            );
        }
        count
    }

    /// Releases a trailing trail sample and retires expired sparks.
    pub fn update(&mut self, now: Duration) {
        if let Some(pos) = self.trail.poll(now) {
            self.trail_spark(now, pos);
        }
        let events = &mut self.events;
        self.sparks.retain(|s| {
            let expired = s.is_expired(now);
            if expired {
                events.push(SparkEvent::Retired(s.id));
            }
            !expired
        });
    }

    fn trail_spark(&mut self, now: Duration, pos: Vec2) {
        if chance(&mut self.rng, self.params.trail_probability) {
            self.push_spark(
                SparkKind::Trail,
                pos,
                Vec2::ZERO,
                0.0,
                now,
                self.params.trail_lifetime,
            );
        }
    }

    fn push_spark(
        &mut self,
        kind: SparkKind,
        origin: Vec2,
        velocity: Vec2,
        gravity: f32,
        born: Duration,
        lifetime: Duration,
    ) {
        let spark = Spark {
            id: SparkId(self.next_id),
            kind,
            origin,
            velocity,
            gravity,
            born,
            lifetime,
        };
        self.next_id += 1;
        self.events.push(SparkEvent::Spawned(spark.clone()));
        self.sparks.push(spark);
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Takes the outbox. It is unbounded, so callers drain it every frame.
    pub fn drain_events(&mut self) -> Vec<SparkEvent> {
        std::mem::take(&mut self.events)
    }
}
