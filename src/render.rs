use crate::constants::*;
use crate::core::{Particle, ParticleField, HEART_GLYPH};
use web_sys as web;

/// Paint the full-canvas background gradient; doubles as the per-frame clear.
pub fn paint_background(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
    _ = gradient.add_color_stop(0.0, BACKGROUND_GRADIENT_START);
    _ = gradient.add_color_stop(1.0, BACKGROUND_GRADIENT_END);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Stroke a faded line between every pair of nearby particles.
///
/// Uses the field's current positions, so this must run before `step`.
pub fn draw_connections(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.set_stroke_style_str(ACCENT_COLOR);
    for conn in field.connections() {
        ctx.save();
        ctx.set_global_alpha(conn.opacity as f64);
        ctx.begin_path();
        ctx.move_to(conn.from.x as f64, conn.from.y as f64);
        ctx.line_to(conn.to.x as f64, conn.to.y as f64);
        ctx.stroke();
        ctx.restore();
    }
}

/// Fill the 5x5 heart glyph centred on the particle, cell size `radius / 2`,
/// with a same-color glow.
pub fn draw_particle(ctx: &web::CanvasRenderingContext2d, particle: &Particle) {
    let cell = (particle.radius / 2.0) as f64;
    ctx.save();
    _ = ctx.translate(
        particle.pos.x as f64 - cell * 2.5,
        particle.pos.y as f64 - cell * 2.5,
    );
    ctx.set_fill_style_str(ACCENT_COLOR);
    ctx.set_shadow_color(ACCENT_COLOR);
    ctx.set_shadow_blur(GLYPH_SHADOW_BLUR);
    for (row, cells) in HEART_GLYPH.iter().enumerate() {
        for (col, &lit) in cells.iter().enumerate() {
            if lit {
                ctx.fill_rect(col as f64 * cell, row as f64 * cell, cell, cell);
            }
        }
    }
    ctx.restore();
}
