use crate::render::Presenter;
use fx_core::{Clock, EffectsRuntime};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub runtime: Rc<RefCell<EffectsRuntime>>,
    pub presenter: Presenter,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let (population, sparks) = {
            let mut rt = self.runtime.borrow_mut();
            if let Some(report) = rt.frame(now) {
                log::trace!(
                    "[frame] fps={} live={}/{}",
                    report.fps,
                    rt.current_live_count(),
                    rt.current_ceiling()
                );
            }
            (rt.drain_events(), rt.drain_spark_events())
        }; // runtime borrow released before touching the DOM

        self.presenter.sync_reduced_motion();
        self.presenter.apply_population(population);
        self.presenter.apply_sparks(sparks, now);
        self.presenter.animate_sparks(now);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
