use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn nav_state_defaults_to_expanded_bar_and_closed_menu() {
    let state = NavState::default();
    assert!(!state.scrolled);
    assert!(!state.menu_open);
}

// =============================================================
// Compaction threshold
// =============================================================

#[test]
fn bar_stays_expanded_up_to_the_threshold() {
    assert!(!NavState::compact_at(0.0));
    assert!(!NavState::compact_at(25.0));
    assert!(!NavState::compact_at(NAV_COMPACT_THRESHOLD_PX));
}

#[test]
fn bar_compacts_past_the_threshold() {
    assert!(NavState::compact_at(NAV_COMPACT_THRESHOLD_PX + 0.1));
    assert!(NavState::compact_at(200.0));
}

#[test]
fn apply_scroll_reports_a_change_only_on_a_crossing() {
    let mut state = NavState::default();
    assert!(!state.apply_scroll(10.0));
    assert!(state.apply_scroll(120.0));
    // Repeated events on the same side of the threshold are free.
    assert!(!state.apply_scroll(120.0));
    assert!(!state.apply_scroll(400.0));
    assert!(state.apply_scroll(0.0));
}

#[test]
fn a_single_jump_across_the_threshold_flips_in_one_update() {
    let mut state = NavState::default();
    assert!(state.apply_scroll(200.0));
    assert!(state.scrolled);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggling_the_menu_twice_is_an_identity() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert_eq!(state, NavState::default());
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = NavState { scrolled: true, menu_open: true };
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
    // Closing the menu never touches the bar flag.
    assert!(state.scrolled);
}
