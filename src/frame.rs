use crate::core::ParticleField;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback needs.
///
/// The field is shared with the window resize listener; both run on the single
/// JS execution context, so the RefCell borrows never overlap.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One frame: background, connections, glyphs, then advance the field.
    ///
    /// Connections and glyphs are drawn from pre-step positions, matching the
    /// draw-then-update ordering the animation was designed around.
    pub fn frame(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        render::paint_background(&self.ctx, width, height);

        let mut field = self.field.borrow_mut();
        render::draw_connections(&self.ctx, &field);
        for particle in &field.particles {
            render::draw_particle(&self.ctx, particle);
        }
        field.step();
    }
}

/// Start the self-rearming requestAnimationFrame loop; runs until teardown.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
