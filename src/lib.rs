#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod core;
mod cursor;
mod dom;
mod frame;
mod nav;
mod reveal;
mod transport;
mod views;

thread_local! {
    // page-lifetime root; views inside it come and go with navigation
    static APP: RefCell<Option<Rc<app::App>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixdevs-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = dom::read_site_config(&document);
    match config.level() {
        Ok(level) => log::set_max_level(level.to_level_filter()),
        Err(e) => log::warn!("[config] {}", e),
    }
    log::debug!("[config] {:?}", config);

    let app = app::App::mount(document, config)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}
