//! Mote field simulation.
//!
//! Pure logic with no browser types, so motion and wrapping stay
//! testable on the host. Randomness is injected by the caller: the
//! browser passes `js_sys::Math::random`, tests pass a fixed sequence.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::f64::consts::TAU;

use crate::consts::{
    ALPHA_BASE, ALPHA_SPAN, MAX_STEP_S, PARTICLE_COUNT, RADIUS_MAX_PX, RADIUS_MIN_PX,
    RISE_MAX_PX_S, RISE_MIN_PX_S, SWAY_MAX_PX_S, TWINKLE_MAX_RAD_S, TWINKLE_MIN_RAD_S,
};

/// A single golden mote.
///
/// Positions and radius are in CSS pixels; speeds are per second.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub rise: f64,
    pub sway: f64,
    pub twinkle: f64,
    pub phase: f64,
    /// Index into the gold tone table, stable for the mote's lifetime.
    pub tone: usize,
}

impl Particle {
    /// Current opacity, pulsing with the twinkle phase.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        ALPHA_BASE + ALPHA_SPAN * (self.phase.sin() + 1.0) / 2.0
    }
}

/// The whole decorative field: a fixed set of motes drifting upward
/// inside a viewport-sized box.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field of [`PARTICLE_COUNT`] motes inside `width` x `height`.
    ///
    /// `rng` supplies uniform values in `[0, 1)`. Degenerate dimensions
    /// are clamped to one pixel so the field never collapses.
    #[must_use]
    pub fn new(width: f64, height: f64, rng: &mut dyn FnMut() -> f64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let particles = (0..PARTICLE_COUNT)
            .map(|index| Particle {
                x: rng() * width,
                y: rng() * height,
                radius: lerp(RADIUS_MIN_PX, RADIUS_MAX_PX, rng()),
                rise: lerp(RISE_MIN_PX_S, RISE_MAX_PX_S, rng()),
                sway: rng() * SWAY_MAX_PX_S,
                twinkle: lerp(TWINKLE_MIN_RAD_S, TWINKLE_MAX_RAD_S, rng()),
                phase: rng() * TAU,
                tone: index % crate::consts::GOLD_TONES.len(),
            })
            .collect();
        Self { width, height, particles }
    }

    /// Field width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Field height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Read-only view of the motes, for rendering and inspection.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the simulation by `dt_ms` milliseconds.
    ///
    /// Motes rise with a sinusoidal sway and wrap deterministically: a
    /// mote leaving the top re-enters at the bottom with its horizontal
    /// position kept, so the motion needs no randomness after seeding.
    pub fn step(&mut self, dt_ms: f64) {
        let dt = (dt_ms / 1000.0).clamp(0.0, MAX_STEP_S);
        if dt <= 0.0 {
            return;
        }
        for mote in &mut self.particles {
            mote.phase = (mote.phase + mote.twinkle * dt) % TAU;
            mote.y -= mote.rise * dt;
            mote.x += mote.phase.sin() * mote.sway * dt;

            if mote.y < -mote.radius {
                mote.y = self.height + mote.radius;
            }
            if mote.x < -mote.radius {
                mote.x = self.width + mote.radius;
            } else if mote.x > self.width + mote.radius {
                mote.x = -mote.radius;
            }
        }
    }

    /// Adopt a new viewport size, folding motes back into bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for mote in &mut self.particles {
            mote.x = mote.x.rem_euclid(self.width);
            mote.y = mote.y.rem_euclid(self.height);
        }
    }
}

fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * t
}
