//! Frame-rate monitor with a single degradation hook.

use crate::config::MonitorParams;
use crate::motion::{EnvironmentProbe, MotionReason, ReducedMotion};
use crate::population::PopulationController;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Result of closing one timing window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub fps: u32,
    pub degraded: bool,
    pub closed_at: Duration,
}

type DegradationHook = Box<dyn FnMut(&FrameReport)>;

pub struct FrameMonitor {
    params: MonitorParams,
    frame_count: u32,
    window_start: Duration,
    fps: u32,
    hook: Option<DegradationHook>,
    degraded_windows: u64,
}

impl FrameMonitor {
    pub fn new(params: MonitorParams, now: Duration) -> Self {
        Self {
            params,
            frame_count: 0,
            window_start: now,
            fps: crate::constants::INITIAL_FPS,
            hook: None,
            degraded_windows: 0,
        }
    }

    /// Sets the shared reduced-motion flag if the host has too few hardware
    /// threads or the user asked for reduced motion. Facts the host couldn't
    /// report leave the flag alone.
    pub fn detect_reduced_motion(&self, probe: &EnvironmentProbe, flag: &ReducedMotion) {
        if let Some(threads) = probe.hardware_concurrency {
            if threads < self.params.min_hardware_threads {
                flag.set(MotionReason::LowConcurrency { threads });
            }
        }
        if probe.prefers_reduced_motion == Some(true) {
            flag.set(MotionReason::UserPreference);
        }
    }

    /// Routes degradation to `controller`: cull a third of the live objects
    /// and recompute its ceiling. Replaces any previous hook.
    pub fn attach(&mut self, controller: Rc<RefCell<PopulationController>>) {
        self.on_degraded(move |_report| match controller.try_borrow_mut() {
            Ok(mut c) => c.handle_degradation(),
            Err(_) => log::warn!("[monitor] controller busy; skipping degradation cull"),
        });
    }

    /// Registers an arbitrary degradation hook. Replaces any previous hook.
    pub fn on_degraded(&mut self, hook: impl FnMut(&FrameReport) + 'static) {
        if self.hook.is_some() {
            log::debug!("[monitor] replacing degradation hook");
        }
        self.hook = Some(Box::new(hook));
    }

    pub fn detach(&mut self) {
        self.hook = None;
    }

    /// Counts one rendered frame. Closes the window once it has lasted at
    /// least the configured length and returns its report.
    pub fn tick(&mut self, now: Duration) -> Option<FrameReport> {
        self.frame_count += 1;
        if now.saturating_sub(self.window_start) < self.params.window {
            return None;
        }
        let fps = self.frame_count;
        self.frame_count = 0;
        self.window_start = now;
        self.fps = fps;
        let report = FrameReport {
            fps,
            degraded: fps < self.params.degraded_below_fps,
            closed_at: now,
        };
        log::trace!("[monitor] window closed fps={}", fps);
        if report.degraded {
            self.degraded_windows += 1;
            log::info!("[monitor] frame rate degraded: {} fps", fps);
            if let Some(hook) = self.hook.as_mut() {
                hook(&report);
            }
        }
        Some(report)
    }

    /// Rate computed at the close of the last window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frames_in_window(&self) -> u32 {
        self.frame_count
    }

    pub fn degraded_windows(&self) -> u64 {
        self.degraded_windows
    }
}
