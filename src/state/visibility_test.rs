use super::*;

// =============================================================
// Threshold
// =============================================================

#[test]
fn sub_threshold_crossings_do_not_reveal() {
    let mut set = VisibilitySet::new();
    assert!(!set.apply_crossing(1, 0.0));
    assert!(!set.apply_crossing(1, 0.09));
    assert!(!set.is_revealed(1));
}

#[test]
fn crossing_at_the_threshold_reveals() {
    let mut set = VisibilitySet::new();
    assert!(set.apply_crossing(1, FADE_VISIBLE_RATIO));
    assert!(set.is_revealed(1));
}

// =============================================================
// Monotonicity
// =============================================================

#[test]
fn reveal_survives_scrolling_back_out() {
    let mut set = VisibilitySet::new();
    // Crossing in, then fully out of the viewport.
    assert!(set.apply_crossing(7, 0.4));
    assert!(!set.apply_crossing(7, 0.0));
    assert!(set.is_revealed(7));
}

#[test]
fn repeated_crossings_reveal_only_once() {
    let mut set = VisibilitySet::new();
    assert!(set.apply_crossing(3, 0.5));
    assert!(!set.apply_crossing(3, 0.9));
    assert_eq!(set.revealed_count(), 1);
}

// =============================================================
// Registry
// =============================================================

#[test]
fn targets_reveal_independently() {
    let mut set = VisibilitySet::new();
    assert!(set.apply_crossing(1, 0.2));
    assert!(!set.is_revealed(2));
    assert!(set.apply_crossing(2, 0.2));
    assert_eq!(set.revealed_count(), 2);
}

#[test]
fn retire_forgets_a_target() {
    let mut set = VisibilitySet::new();
    assert!(set.apply_crossing(5, 0.3));
    set.retire(5);
    assert!(!set.is_revealed(5));
    assert_eq!(set.revealed_count(), 0);
}
