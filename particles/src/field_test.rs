use super::*;

use crate::consts::{ALPHA_BASE, ALPHA_SPAN, PARTICLE_COUNT, RADIUS_MAX_PX, RADIUS_MIN_PX};

/// Deterministic stand-in for `Math.random`: a golden-ratio walk over
/// `[0, 1)` that visits the range evenly.
fn fixed_rng() -> impl FnMut() -> f64 {
    let mut state = 0.0_f64;
    move || {
        state = (state + 0.618_033_988_749_895) % 1.0;
        state
    }
}

fn in_bounds(field: &ParticleField, mote: &Particle) -> bool {
    mote.x >= -mote.radius
        && mote.x <= field.width() + mote.radius
        && mote.y >= -mote.radius
        && mote.y <= field.height() + mote.radius
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn new_seeds_the_full_mote_count() {
    let mut rng = fixed_rng();
    let field = ParticleField::new(800.0, 600.0, &mut rng);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
}

#[test]
fn seeded_motes_start_inside_bounds() {
    let mut rng = fixed_rng();
    let field = ParticleField::new(800.0, 600.0, &mut rng);
    for mote in field.particles() {
        assert!((0.0..=800.0).contains(&mote.x));
        assert!((0.0..=600.0).contains(&mote.y));
        assert!((RADIUS_MIN_PX..=RADIUS_MAX_PX).contains(&mote.radius));
    }
}

#[test]
fn degenerate_dimensions_are_clamped() {
    let mut rng = fixed_rng();
    let field = ParticleField::new(0.0, -5.0, &mut rng);
    assert!(field.width() >= 1.0);
    assert!(field.height() >= 1.0);
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn step_moves_unwrapped_motes_upward() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    let before: Vec<f64> = field.particles().iter().map(|m| m.y).collect();
    field.step(33.0);
    for (mote, old_y) in field.particles().iter().zip(before) {
        // Either the mote rose, or it wrapped back in at the bottom.
        assert!(mote.y < old_y || mote.y > field.height() - 1.0);
    }
}

#[test]
fn step_keeps_motes_inside_the_wrap_margin() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(120.0, 90.0, &mut rng);
    for _ in 0..2_000 {
        field.step(33.0);
    }
    for mote in field.particles() {
        assert!(in_bounds(&field, mote), "mote escaped: {mote:?}");
    }
}

#[test]
fn step_with_zero_dt_is_identity() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    let before: Vec<(f64, f64)> = field.particles().iter().map(|m| (m.x, m.y)).collect();
    field.step(0.0);
    let after: Vec<(f64, f64)> = field.particles().iter().map(|m| (m.x, m.y)).collect();
    assert_eq!(before, after);
}

#[test]
fn oversized_ticks_are_clamped() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    let mut clamped = field.clone();
    // A background tab can hand us a multi-second tick; it must advance
    // no further than the clamp allows.
    field.step(10_000.0);
    clamped.step(250.0);
    for (a, b) in field.particles().iter().zip(clamped.particles()) {
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}

#[test]
fn alpha_stays_within_the_decorative_range() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    for _ in 0..500 {
        field.step(33.0);
        for mote in field.particles() {
            let alpha = mote.alpha();
            assert!(alpha >= ALPHA_BASE - 1e-9);
            assert!(alpha <= ALPHA_BASE + ALPHA_SPAN + 1e-9);
        }
    }
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn resize_folds_motes_into_the_new_bounds() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(1600.0, 1200.0, &mut rng);
    field.resize(300.0, 200.0);
    assert_eq!(field.width(), 300.0);
    assert_eq!(field.height(), 200.0);
    for mote in field.particles() {
        assert!((0.0..=300.0).contains(&mote.x));
        assert!((0.0..=200.0).contains(&mote.y));
    }
}

#[test]
fn resize_to_degenerate_dimensions_is_clamped() {
    let mut rng = fixed_rng();
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    field.resize(0.0, 0.0);
    assert!(field.width() >= 1.0);
    assert!(field.height() >= 1.0);
}
