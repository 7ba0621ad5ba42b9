use crate::constants::{REDUCED_MOTION_CLASS, REDUCED_MOTION_QUERY};
use crate::style;
use fx_core::{EnvironmentProbe, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    style::viewport_size(w, h)
}

#[inline]
pub fn reduced_motion_query(window: &web::Window) -> Option<web::MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn probe_environment(window: &web::Window) -> EnvironmentProbe {
    let prefers = reduced_motion_query(window).map(|q| q.matches());
    style::environment_probe(window.navigator().hardware_concurrency(), prefers)
}

pub fn mark_reduced_motion(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(REDUCED_MOTION_CLASS);
    }
}

pub fn create_div(document: &web::Document, class: &str, css: &str) -> Option<web::HtmlElement> {
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("create_element failed: {:?}", e);
            return None;
        }
    };
    el.set_class_name(class);
    _ = el.set_attribute("style", css);
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Runs `f` once the DOM is parsed: immediately if it already is, otherwise
/// on `DOMContentLoaded`.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}
