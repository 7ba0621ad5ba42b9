//! Population controller: owns the live decorative objects.
//!
//! Objects are admitted probabilistically while the population is under its
//! ceiling, retire on their own expiry timer, and can be culled early when
//! the frame monitor reports degradation. Removal is idempotent because
//! expiry and culls race by design.

use crate::config::PopulationParams;
use crate::object::{DecorativeObject, DespawnReason, ObjectId, PopulationEvent};
use crate::random::{chance, random_between, random_in, FxRng};
use crate::timers::TimerQueue;
use crate::viewport::Viewport;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PopulationTimer {
    Expire(ObjectId),
    Seed,
}

pub struct PopulationController {
    params: PopulationParams,
    viewport: Viewport,
    // latest size the host reported, possibly still settling
    reported: Viewport,
    ceiling: usize,
    // insertion order matters for culling
    live: Vec<DecorativeObject>,
    timers: TimerQueue<PopulationTimer>,
    rng: FxRng,
    next_id: u64,
    events: Vec<PopulationEvent>,
}

impl PopulationController {
    pub fn new(params: PopulationParams, viewport: Viewport, rng: FxRng) -> Self {
        let ceiling = params.bands.ceiling_for(viewport.width);
        log::info!(
            "[population] viewport={}x{} ceiling={}",
            viewport.width,
            viewport.height,
            ceiling
        );
        Self {
            params,
            viewport,
            reported: viewport,
            ceiling,
            live: Vec::with_capacity(ceiling),
            timers: TimerQueue::new(),
            rng,
            next_id: 0,
            events: Vec::new(),
        }
    }

    /// Ceiling for the current viewport, computed fresh on every call.
    pub fn compute_ceiling(&self) -> usize {
        self.params.bands.ceiling_for(self.viewport.width)
    }

    /// Recomputes the ceiling. A lower ceiling only blocks future spawns;
    /// objects already live are left to expire naturally.
    pub fn update_ceiling(&mut self) {
        self.set_ceiling(self.compute_ceiling());
    }

    fn set_ceiling(&mut self, next: usize) {
        if next != self.ceiling {
            log::info!(
                "[population] ceiling {} -> {} (live={})",
                self.ceiling,
                next,
                self.live.len()
            );
        }
        self.ceiling = next;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reported = viewport;
    }

    /// Records a size the host reported before it has settled. Placement and
    /// the regular ceiling keep using the settled viewport; only degradation
    /// reads this one.
    pub fn note_reported_viewport(&mut self, viewport: Viewport) {
        self.reported = viewport;
    }

    /// Schedules the page-load warm-up: one spawn per ceiling slot, staggered.
    /// Seeded spawns still respect the ceiling at the moment they fire.
    pub fn seed_initial(&mut self, now: Duration) {
        for i in 0..self.ceiling {
            let at = now + self.params.seed_stagger * i as u32;
            self.timers.schedule(at, PopulationTimer::Seed);
        }
    }

    /// Creates one object and schedules its expiry.
    pub fn spawn_one(&mut self, now: Duration) -> ObjectId {
        let p = &self.params;
        let width = self.viewport.usable_width();
        let x = random_between(&mut self.rng, -p.spawn_margin, width + p.spawn_margin);
        let y = self.viewport.height.max(0.0) + p.spawn_margin;
        let scale = random_in(&mut self.rng, p.scale);
        let lifetime = Duration::from_secs_f32(random_in(&mut self.rng, p.lifetime_sec).max(0.0));
        let opacity = random_in(&mut self.rng, p.opacity);
        let start_delay =
            Duration::from_secs_f32(random_in(&mut self.rng, p.start_delay_sec).max(0.0));
        let drift_x = random_in(&mut self.rng, p.drift);

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let expiry = self
            .timers
            .schedule(now + lifetime + p.expiry_grace, PopulationTimer::Expire(id));
        let object = DecorativeObject {
            id,
            origin: Vec2::new(x, y),
            scale,
            opacity,
            drift_x,
            lifetime,
            start_delay,
            created_at: now,
            expiry,
        };
        log::debug!(
            "[population] spawn {:?} x={:.1} lifetime={:.1}s live={}",
            id,
            x,
            lifetime.as_secs_f32(),
            self.live.len() + 1
        );
        self.events.push(PopulationEvent::Spawned(object.clone()));
        self.live.push(object);
        id
    }

    /// Per-frame step: retire expired objects, run due warm-up spawns, then
    /// admit a new object with the configured probability while under the
    /// ceiling.
    pub fn population_tick(&mut self, now: Duration) {
        self.fire_due(now);
        if self.live.len() < self.ceiling && chance(&mut self.rng, self.params.spawn_probability)
        {
            self.spawn_one(now);
        }
    }

    /// Fires every timer due at `now`.
    pub fn fire_due(&mut self, now: Duration) {
        for (_, timer) in self.timers.pop_due(now) {
            match timer {
                PopulationTimer::Expire(id) => {
                    self.remove(id, DespawnReason::Expired);
                }
                PopulationTimer::Seed => {
                    if self.live.len() < self.ceiling {
                        self.spawn_one(now);
                    }
                }
            }
        }
    }

    /// Removes every live object whose insertion index is a multiple of
    /// three, cancelling its expiry. Returns how many were removed.
    pub fn cull_fraction(&mut self) -> usize {
        let stride = crate::constants::CULL_STRIDE;
        let mut index = 0usize;
        let mut culled = Vec::new();
        self.live.retain(|o| {
            let keep = index % stride != 0;
            index += 1;
            if !keep {
                culled.push((o.id, o.expiry));
            }
            keep
        });
        for (id, expiry) in &culled {
            self.timers.cancel(*expiry);
            self.events.push(PopulationEvent::Despawned {
                id: *id,
                reason: DespawnReason::Culled,
            });
        }
        culled.len()
    }

    /// Degradation response: cull a third, then recompute the ceiling from
    /// the latest reported width, even if that resize hasn't settled yet.
    pub fn handle_degradation(&mut self) {
        let before = self.live.len();
        let culled = self.cull_fraction();
        self.set_ceiling(self.params.bands.ceiling_for(self.reported.width));
        log::info!(
            "[population] degraded: culled {}/{} ceiling={}",
            culled,
            before,
            self.ceiling
        );
    }

    /// Removes an object early, cancelling its expiry. Unknown or already
    /// removed handles are a silent no-op.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        self.remove(id, DespawnReason::Culled)
    }

    fn remove(&mut self, id: ObjectId, reason: DespawnReason) -> bool {
        let Some(pos) = self.live.iter().position(|o| o.id == id) else {
            return false;
        };
        let object = self.live.remove(pos);
        self.timers.cancel(object.expiry);
        log::debug!(
            "[population] despawn {:?} {:?} live={}",
            id,
            reason,
            self.live.len()
        );
        self.events.push(PopulationEvent::Despawned { id, reason });
        true
    }

    /// After a resize, move each live object to a new horizontal origin with
    /// probability `p`; the rest keep their trajectory.
    pub fn scatter_after_resize(&mut self, p: f32) -> usize {
        let width = self.viewport.usable_width();
        let margin = self.params.spawn_margin;
        let mut moved = 0;
        for object in &mut self.live {
            if chance(&mut self.rng, p) {
                let x = random_between(&mut self.rng, -margin, width + margin);
                object.origin.x = x;
                self.events.push(PopulationEvent::Repositioned { id: object.id, x });
                moved += 1;
            }
        }
        moved
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn reported_viewport(&self) -> Viewport {
        self.reported
    }

    pub fn objects(&self) -> &[DecorativeObject] {
        &self.live
    }

    pub fn get(&self, id: ObjectId) -> Option<&DecorativeObject> {
        self.live.iter().find(|o| o.id == id)
    }

    pub fn has_pending_expiry(&self, id: ObjectId) -> bool {
        self.get(id)
            .map(|o| self.timers.is_pending(o.expiry))
            .unwrap_or(false)
    }

    pub fn expiry_deadline(&self, id: ObjectId) -> Option<Duration> {
        self.get(id).and_then(|o| self.timers.deadline(o.expiry))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Takes the outbox. It is unbounded, so callers drain it every frame.
    pub fn drain_events(&mut self) -> Vec<PopulationEvent> {
        std::mem::take(&mut self.events)
    }
}
