use crate::timers::TimerId;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// One live decorative object. Presentation reads these fields once at spawn
/// and animates the object on its own; the core only tracks its lifetime.
#[derive(Clone, Debug)]
pub struct DecorativeObject {
    pub id: ObjectId,
    /// Starting position in CSS pixels (y is below the viewport bottom).
    pub origin: Vec2,
    pub scale: f32,
    pub opacity: f32,
    /// Horizontal offset reached over one animation cycle.
    pub drift_x: f32,
    pub lifetime: Duration,
    pub start_delay: Duration,
    pub created_at: Duration,
    pub(crate) expiry: TimerId,
}

impl DecorativeObject {
    pub fn expiry_timer(&self) -> TimerId {
        self.expiry
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DespawnReason {
    Expired,
    Culled,
}

/// Changes to the live set, drained by the presentation layer.
#[derive(Clone, Debug)]
pub enum PopulationEvent {
    Spawned(DecorativeObject),
    Despawned { id: ObjectId, reason: DespawnReason },
    Repositioned { id: ObjectId, x: f32 },
}
