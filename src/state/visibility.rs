#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashSet;

/// Fraction of a fade target's area that must enter the viewport before
/// it is revealed.
pub const FADE_VISIBLE_RATIO: f64 = 0.1;

/// Registry of fade targets and which of them have been revealed.
///
/// Reveal is monotonic: a target that has crossed the threshold once
/// stays revealed no matter what intersection events follow, including
/// scrolling fully back out of the viewport.
#[derive(Clone, Debug, Default)]
pub struct VisibilitySet {
    revealed: HashSet<u32>,
}

impl VisibilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one intersection callback into the set.
    ///
    /// Returns `true` exactly when `id` becomes revealed by this event;
    /// sub-threshold events and repeats return `false`.
    pub fn apply_crossing(&mut self, id: u32, visible_ratio: f64) -> bool {
        if visible_ratio < FADE_VISIBLE_RATIO {
            return false;
        }
        self.revealed.insert(id)
    }

    /// Whether `id` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    /// Drop a deregistered target from the set.
    pub fn retire(&mut self, id: u32) {
        self.revealed.remove(&id);
    }

    /// Number of revealed targets, for diagnostics.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
