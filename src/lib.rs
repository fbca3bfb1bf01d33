#![cfg(target_arch = "wasm32")]
use crate::core::{ParticleField, DEFAULT_PARTICLE_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod frame;
mod render;

/// Keep the canvas backing store at window size and relocate the particles
/// whenever the window changes.
fn wire_field_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_to_window(&canvas_resize);
        field.borrow_mut().resize(width as f32, height as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "canvas1")?;
    let (width, height) = dom::sync_canvas_to_window(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Fresh layout per page load; a u64 seed keeps the core reproducible.
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        width as f32,
        height as f32,
        DEFAULT_PARTICLE_COUNT,
        seed,
    )));
    log::info!("field ready: {width}x{height}, {DEFAULT_PARTICLE_COUNT} particles");

    wire_field_resize(&canvas, field.clone());
    audio::wire_player(&document)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, canvas, ctx }));
    frame::start_loop(frame_ctx);
    Ok(())
}
