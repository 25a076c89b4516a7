//! Rendering: draws the mote field to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view
//! of the field and produces pixels; it does not mutate simulation
//! state.
//!
//! All fallible `Canvas2D` calls propagate errors via
//! `Result<(), JsValue>`. The host component handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::GOLD_TONES;
use crate::field::ParticleField;

/// Draw the full field.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device
/// pixel ratio; the canvas backing store is expected to be scaled by it.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context
/// state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for mote in field.particles() {
        ctx.set_global_alpha(mote.alpha());
        ctx.set_fill_style_str(GOLD_TONES[mote.tone % GOLD_TONES.len()]);
        ctx.begin_path();
        ctx.arc(mote.x, mote.y, mote.radius, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}
