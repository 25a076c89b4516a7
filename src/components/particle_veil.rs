//! Bridge component between the Leptos view and the imperative
//! `particles` engine.
//!
//! Owns the full-viewport canvas element, the animation tick, and the
//! window resize listener. Purely decorative: the canvas sits behind
//! all content and never takes pointer events (see `site.css`).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use particles::field::ParticleField;
use particles::render;

/// Milliseconds between simulation ticks.
const TICK_MS: u32 = 33;

/// Fixed full-viewport canvas layered behind all content.
#[component]
pub fn ParticleVeil() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let field = Rc::new(RefCell::new(None::<ParticleField>));
    let tick = Rc::new(RefCell::new(None::<Interval>));

    {
        let field = Rc::clone(&field);
        let tick = Rc::clone(&tick);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if tick.borrow().is_some() {
                return;
            }
            let Some((width, height, dpr)) = viewport_metrics() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                log::warn!("2d canvas context unavailable; skipping particle layer");
                return;
            };

            size_canvas(&canvas, width, height, dpr);
            let mut rng = || js_sys::Math::random();
            *field.borrow_mut() = Some(ParticleField::new(width, height, &mut rng));

            let field_for_tick = Rc::clone(&field);
            let interval = Interval::new(TICK_MS, move || {
                let mut field = field_for_tick.borrow_mut();
                let Some(field) = field.as_mut() else {
                    return;
                };
                field.step(f64::from(TICK_MS));
                let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
                if let Err(err) = render::draw(&ctx, field, field.width(), field.height(), dpr) {
                    log::debug!("particle draw failed: {err:?}");
                }
            });
            *tick.borrow_mut() = Some(interval);
        });
    }

    // Keep the canvas backing store and the field in step with the
    // viewport.
    {
        let field = Rc::clone(&field);
        let resize_cb = Closure::wrap(Box::new(move || {
            let Some((width, height, dpr)) = viewport_metrics() else {
                return;
            };
            if let Some(canvas) = canvas_ref.get_untracked() {
                size_canvas(&canvas, width, height, dpr);
            }
            if let Some(field) = field.borrow_mut().as_mut() {
                field.resize(width, height);
            }
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        }

        // `tick` (Rc) and `resize_cb` (JS closure) are both `!Send`; hold
        // them in the owner-scoped local store so the cleanup closure
        // captures only the `Send` handle.
        let tick = Rc::clone(&tick);
        let cleanup = StoredValue::new_local((tick, resize_cb));
        on_cleanup(move || {
            let _ = cleanup.try_with_value(|(tick, resize_cb)| {
                tick.borrow_mut().take();
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
            });
        });
    }

    view! { <canvas node_ref=canvas_ref class="particle-veil" aria-hidden="true"></canvas> }
}

/// Viewport size and device pixel ratio, read from the window.
fn viewport_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height, window.device_pixel_ratio()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Match the canvas backing store to the viewport at the current device
/// pixel ratio.
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64, dpr: f64) {
    canvas.set_width((width * dpr).max(1.0) as u32);
    canvas.set_height((height * dpr).max(1.0) as u32);
}
