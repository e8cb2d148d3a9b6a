//! Pointer input for the effect scene.
//!
//! The host samples its pointer once per frame and feeds the result through
//! [`PointerTracker`], which answers whether the pointer actually moved.
//! Coordinates are surface-local; the tracker neither clamps nor transforms
//! them.

use glam::Vec2;

/// Tracks the pointer position across frames and detects movement.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    last_position: Option<Vec2>,
}

impl PointerTracker {
    /// Create a tracker with no pointer observed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's pointer sample.
    ///
    /// Returns `Some(position)` when the pointer is present and has moved
    /// since the previous sample, including the first time it appears.
    /// `None` means either no pointer or no movement.
    pub fn sample(&mut self, position: Option<Vec2>) -> Option<Vec2> {
        self.last_position = self.position;
        self.position = position;
        match (position, self.last_position) {
            (Some(now), Some(before)) if now != before => Some(now),
            (Some(now), None) => Some(now),
            _ => None,
        }
    }

    /// Latest known pointer position, if any.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Movement since the previous sample, zero when unknown.
    pub fn delta(&self) -> Vec2 {
        match (self.position, self.last_position) {
            (Some(now), Some(before)) => now - before,
            _ => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_appearance_counts_as_movement() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(Some(Vec2::new(10.0, 20.0))), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn stationary_pointer_is_not_movement() {
        let mut tracker = PointerTracker::new();
        tracker.sample(Some(Vec2::new(10.0, 20.0)));
        assert_eq!(tracker.sample(Some(Vec2::new(10.0, 20.0))), None);
    }

    #[test]
    fn movement_reports_the_new_position() {
        let mut tracker = PointerTracker::new();
        tracker.sample(Some(Vec2::new(10.0, 20.0)));
        let moved = tracker.sample(Some(Vec2::new(13.0, 24.0)));
        assert_eq!(moved, Some(Vec2::new(13.0, 24.0)));
        assert_eq!(tracker.delta(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn pointer_leaving_clears_state() {
        let mut tracker = PointerTracker::new();
        tracker.sample(Some(Vec2::new(10.0, 20.0)));
        assert_eq!(tracker.sample(None), None);
        assert_eq!(tracker.position(), None);
        assert_eq!(tracker.delta(), Vec2::ZERO);
    }
}
