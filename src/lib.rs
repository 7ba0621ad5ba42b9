#![cfg(target_arch = "wasm32")]
use fx_core::{Clock, EffectsRuntime, FxConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    dom::on_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // A page that loads the module twice still gets a single runtime
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(constants::CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CONTAINER_ID))?;

    let clock = Clock::start();
    let viewport = dom::viewport(&window);
    let probe = dom::probe_environment(&window);
    log::info!(
        "[init] viewport={}x{} probe={:?}",
        viewport.width,
        viewport.height,
        probe
    );

    let mut runtime = EffectsRuntime::new(FxConfig::default(), viewport, probe, clock.now())?;
    runtime.start(clock.now());
    let runtime = Rc::new(RefCell::new(runtime));

    events::wire_all(events::EventWiring {
        window: window.clone(),
        document: document.clone(),
        runtime: runtime.clone(),
        clock,
    });

    let presenter = render::Presenter::new(
        document,
        container,
        runtime.borrow().reduced_motion().clone(),
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        runtime,
        presenter,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
