use crate::config::ResizeParams;
use crate::motion::{MotionReason, ReducedMotion};
use crate::population::PopulationController;
use crate::timing::Debounce;
use crate::viewport::Viewport;
use std::time::Duration;

/// Turns environment changes into population updates: settled viewport
/// resizes recompute the ceiling (never culling), and a reduced-motion
/// preference sets the shared flag.
pub struct ResizeAdapter {
    resize: Debounce<Viewport>,
    reposition_probability: f32,
    reduced_motion: ReducedMotion,
}

impl ResizeAdapter {
    pub fn new(params: &ResizeParams, reduced_motion: ReducedMotion) -> Self {
        Self {
            resize: Debounce::new(params.settle),
            reposition_probability: params.reposition_probability,
            reduced_motion,
        }
    }

    /// Records a raw resize. The controller learns the reported size at once
    /// (for degradation), and a previous resize that settled without being
    /// polled is applied before this one starts its own quiet period.
    pub fn notify_resize(
        &mut self,
        now: Duration,
        viewport: Viewport,
        controller: &mut PopulationController,
    ) {
        if let Some(settled) = self.resize.call(now, viewport) {
            self.apply(settled, controller);
        }
        controller.note_reported_viewport(viewport);
    }

    /// Applies a settled resize, if one is due. Returns whether it did.
    pub fn poll(&mut self, now: Duration, controller: &mut PopulationController) -> bool {
        let Some(viewport) = self.resize.poll(now) else {
            return false;
        };
        self.apply(viewport, controller);
        true
    }

    fn apply(&self, viewport: Viewport, controller: &mut PopulationController) {
        controller.set_viewport(viewport);
        controller.update_ceiling();
        let moved = controller.scatter_after_resize(self.reposition_probability);
        log::debug!(
            "[resize] settled at {}x{}, repositioned {} object(s)",
            viewport.width,
            viewport.height,
            moved
        );
    }

    /// A `true` preference sets the flag for the rest of the session;
    /// `false` never clears it.
    pub fn notify_motion_preference(&self, prefers_reduced: bool) {
        if prefers_reduced {
            self.reduced_motion.set(MotionReason::UserPreference);
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.resize.next_deadline()
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }
}
