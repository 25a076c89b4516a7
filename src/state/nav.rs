#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset (CSS pixels) beyond which the navigation bar compacts.
pub const NAV_COMPACT_THRESHOLD_PX: f64 = 50.0;

/// Navigation chrome state: bar style and the mobile menu flag.
///
/// Provided app-wide as an `RwSignal` context. The struct itself stays
/// plain so the threshold and toggle rules are testable off-browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// True once the viewport has scrolled past the threshold; the bar
    /// then renders compact and translucent.
    pub scrolled: bool,
    /// True while the mobile menu is expanded.
    pub menu_open: bool,
}

impl NavState {
    /// Whether the bar is compact at the given scroll offset.
    #[must_use]
    pub fn compact_at(offset_px: f64) -> bool {
        offset_px > NAV_COMPACT_THRESHOLD_PX
    }

    /// Fold a scroll offset into the state.
    ///
    /// Returns `true` only when the flag actually changed, so callers
    /// can skip redundant signal writes for events on the same side of
    /// the threshold.
    pub fn apply_scroll(&mut self, offset_px: f64) -> bool {
        let next = Self::compact_at(offset_px);
        if next == self.scrolled {
            return false;
        }
        self.scrolled = next;
        true
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu. Idempotent: desktop navigation calls this
    /// with the menu already closed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
