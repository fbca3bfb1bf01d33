/// Canvas palette and glyph styling.
///
/// Fixed by design; the field is a decorative background, not a configurable
/// widget.
// Hearts and connection lines share one accent color
pub const ACCENT_COLOR: &str = "#ff00ff";

// Background gradient, top-left to bottom-right
pub const BACKGROUND_GRADIENT_START: &str = "#8e44ad";
pub const BACKGROUND_GRADIENT_END: &str = "#341f97";

// Glow radius around each glyph cell (canvas shadowBlur, px)
pub const GLYPH_SHADOW_BLUR: f64 = 10.0;
