//! One explicitly constructed bundle of every effects component, stepped once
//! per display frame by the host.

use crate::adapter::ResizeAdapter;
use crate::config::FxConfig;
use crate::error::ConfigError;
use crate::monitor::{FrameMonitor, FrameReport};
use crate::motion::{EnvironmentProbe, ReducedMotion};
use crate::object::PopulationEvent;
use crate::pointer::{PointerEffects, SparkEvent};
use crate::population::PopulationController;
use crate::random::stream_rng;
use crate::viewport::Viewport;
use glam::Vec2;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

// RNG stream ids, one per component
const POPULATION_STREAM: u64 = 1;
const POINTER_STREAM: u64 = 2;

pub struct EffectsRuntime {
    controller: Rc<RefCell<PopulationController>>,
    monitor: FrameMonitor,
    adapter: ResizeAdapter,
    pointer: PointerEffects,
    reduced_motion: ReducedMotion,
}

impl EffectsRuntime {
    /// Validates `config`, builds every component, attaches the controller to
    /// the monitor and evaluates the environment for reduced motion.
    pub fn new(
        config: FxConfig,
        viewport: Viewport,
        probe: EnvironmentProbe,
        now: Duration,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let reduced_motion = ReducedMotion::new();
        let controller = Rc::new(RefCell::new(PopulationController::new(
            config.population.clone(),
            viewport,
            stream_rng(config.seed, POPULATION_STREAM),
        )));
        let mut monitor = FrameMonitor::new(config.monitor.clone(), now);
        monitor.detect_reduced_motion(&probe, &reduced_motion);
        monitor.attach(controller.clone());
        let adapter = ResizeAdapter::new(&config.resize, reduced_motion.clone());
        let pointer = PointerEffects::new(
            config.pointer.clone(),
            stream_rng(config.seed, POINTER_STREAM),
        );
        Ok(Self {
            controller,
            monitor,
            adapter,
            pointer,
            reduced_motion,
        })
    }

    /// Schedules the page-load warm-up spawns.
    pub fn start(&mut self, now: Duration) {
        self.controller.borrow_mut().seed_initial(now);
    }

    /// One cooperative frame: settle pending resizes, sample the frame rate
    /// (which may cull), run the population step, then advance sparks.
    ///
    /// Changes accumulate in two unbounded outboxes. The host must empty both
    /// with [`drain_events`](Self::drain_events) and
    /// [`drain_spark_events`](Self::drain_spark_events) after every frame.
    pub fn frame(&mut self, now: Duration) -> Option<FrameReport> {
        self.adapter.poll(now, &mut self.controller.borrow_mut());
        let report = self.monitor.tick(now);
        self.controller.borrow_mut().population_tick(now);
        self.pointer.update(now);
        report
    }

    pub fn notify_resize(&mut self, now: Duration, viewport: Viewport) {
        self.adapter
            .notify_resize(now, viewport, &mut self.controller.borrow_mut());
    }

    pub fn notify_motion_preference(&self, prefers_reduced: bool) {
        self.adapter.notify_motion_preference(prefers_reduced);
    }

    pub fn pointer_move(&mut self, now: Duration, pos: Vec2) {
        self.pointer.pointer_move(now, pos);
    }

    pub fn click(&mut self, now: Duration, pos: Vec2) -> usize {
        let viewport = self.controller.borrow().viewport();
        self.pointer.click(now, pos, viewport)
    }

    pub fn current_live_count(&self) -> usize {
        self.controller.borrow().live_count()
    }

    pub fn current_ceiling(&self) -> usize {
        self.controller.borrow().ceiling()
    }

    pub fn fps(&self) -> u32 {
        self.monitor.fps()
    }

    pub fn reduced_motion(&self) -> &ReducedMotion {
        &self.reduced_motion
    }

    pub fn controller(&self) -> Ref<'_, PopulationController> {
        self.controller.borrow()
    }

    pub fn monitor(&self) -> &FrameMonitor {
        &self.monitor
    }

    pub fn pointer(&self) -> &PointerEffects {
        &self.pointer
    }

    /// Population changes since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PopulationEvent> {
        self.controller.borrow_mut().drain_events()
    }

    pub fn drain_spark_events(&mut self) -> Vec<SparkEvent> {
        self.pointer.drain_events()
    }
}
