use crate::constants::BURST_EXCLUDE_SELECTOR;
use crate::dom;
use fx_core::{Clock, EffectsRuntime};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub runtime: Rc<RefCell<EffectsRuntime>>,
    pub clock: Clock,
}

pub fn wire_all(w: EventWiring) {
    wire_resize(&w);
    wire_pointermove(&w);
    wire_click(&w);
    wire_motion_query(&w);
}

// The core debounces; every raw resize is forwarded.
fn wire_resize(w: &EventWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::viewport(&w2.window);
        w2.runtime
            .borrow_mut()
            .notify_resize(w2.clock.now(), viewport);
    }) as Box<dyn FnMut()>);
    _ = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &EventWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w2.runtime.borrow_mut().pointer_move(w2.clock.now(), pos);
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &EventWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let excluded = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(BURST_EXCLUDE_SELECTOR).ok().flatten())
            .is_some();
        if excluded {
            return;
        }
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w2.runtime.borrow_mut().click(w2.clock.now(), pos);
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_motion_query(w: &EventWiring) {
    let Some(query) = dom::reduced_motion_query(&w.window) else {
        return;
    };
    let w2 = w.clone();
    let query2 = query.clone();
    let closure = Closure::wrap(Box::new(move || {
        w2.runtime
            .borrow()
            .notify_motion_preference(query2.matches());
    }) as Box<dyn FnMut()>);
    _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
