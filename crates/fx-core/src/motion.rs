//! Reduced-motion flag and the environment facts that set it.

use std::cell::OnceCell;
use std::rc::Rc;

/// Why animation was reduced. Only the first reason is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionReason {
    LowConcurrency { threads: u32 },
    UserPreference,
}

/// Set-once, never-cleared flag shared by every component that needs it.
///
/// Clones share the same cell. There is no process-wide instance: the
/// runtime creates one and hands clones to its components and frontend.
#[derive(Clone, Debug, Default)]
pub struct ReducedMotion(Rc<OnceCell<MotionReason>>);

impl ReducedMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag. Returns `false` if it was already set (the first
    /// reason is kept).
    pub fn set(&self, reason: MotionReason) -> bool {
        let fresh = self.0.set(reason).is_ok();
        if fresh {
            log::info!("[motion] reduced motion enabled: {:?}", reason);
        }
        fresh
    }

    pub fn is_set(&self) -> bool {
        self.0.get().is_some()
    }

    pub fn reason(&self) -> Option<MotionReason> {
        self.0.get().copied()
    }
}

/// What the host environment reported at startup. `None` means the
/// environment doesn't expose that fact, which never sets the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentProbe {
    pub hardware_concurrency: Option<u32>,
    pub prefers_reduced_motion: Option<bool>,
}
