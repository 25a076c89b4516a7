//! Shared tuning constants for the particle crate.

// ── Field ───────────────────────────────────────────────────────

/// Number of motes kept alive in the field.
pub const PARTICLE_COUNT: usize = 64;

/// Largest simulation step accepted, in seconds. Background tabs can
/// deliver very late ticks; anything longer is clamped so motes never
/// teleport across the viewport.
pub const MAX_STEP_S: f64 = 0.25;

// ── Motion ──────────────────────────────────────────────────────

/// Mote radius range in CSS pixels.
pub const RADIUS_MIN_PX: f64 = 0.8;
/// Upper bound of the mote radius range.
pub const RADIUS_MAX_PX: f64 = 2.6;

/// Upward drift speed range, CSS pixels per second.
pub const RISE_MIN_PX_S: f64 = 6.0;
/// Upper bound of the upward drift speed range.
pub const RISE_MAX_PX_S: f64 = 22.0;

/// Peak horizontal sway speed, CSS pixels per second.
pub const SWAY_MAX_PX_S: f64 = 9.0;

/// Twinkle phase speed range, radians per second.
pub const TWINKLE_MIN_RAD_S: f64 = 0.4;
/// Upper bound of the twinkle phase speed range.
pub const TWINKLE_MAX_RAD_S: f64 = 1.6;

// ── Appearance ──────────────────────────────────────────────────

/// Opacity floor of the twinkle pulse.
pub const ALPHA_BASE: f64 = 0.12;

/// Opacity span added on top of [`ALPHA_BASE`] at the pulse peak.
pub const ALPHA_SPAN: f64 = 0.5;

/// Warm gold tones cycled across motes.
pub const GOLD_TONES: [&str; 3] = ["#e8b33b", "#f2cf6b", "#d9a12e"];
