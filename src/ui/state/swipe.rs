// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Tracks a horizontal press-drag-release gesture over the guide deck and
//! classifies it as a forward or backward swipe once the release point is
//! far enough from the press point.

use iced::Point;

/// Minimum horizontal distance (px) for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: advance to the next slide.
    Forward,
    /// Finger moved right: go back one slide.
    Backward,
}

/// Manages swipe gesture state
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Position where the press started, while a gesture is in progress.
    start_position: Option<Point>,
    /// Most recent cursor position during the gesture.
    current_position: Option<Point>,
}

impl SwipeState {
    /// Starts tracking a gesture.
    pub fn start(&mut self, position: Point) {
        self.start_position = Some(position);
        self.current_position = Some(position);
    }

    /// Updates the cursor position during the gesture. Ignored when no
    /// gesture is in progress.
    pub fn update(&mut self, position: Point) {
        if self.start_position.is_some() {
            self.current_position = Some(position);
        }
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` for taps and short drags below the threshold.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let start = self.start_position.take()?;
        let end = self.current_position.take()?;

        let delta_x = end.x - start.x;
        if delta_x.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }

        // Dragging content to the left reveals the next slide.
        if delta_x < 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }

    /// Abandons any gesture in progress (cursor left the window).
    pub fn cancel(&mut self) {
        self.start_position = None;
        self.current_position = None;
    }

    /// Whether a gesture is currently being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_not_tracking() {
        let state = SwipeState::default();
        assert!(!state.is_tracking());
    }

    #[test]
    fn finish_without_start_returns_none() {
        let mut state = SwipeState::default();
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn short_drag_is_a_tap_not_a_swipe() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 50.0));
        state.update(Point::new(130.0, 52.0)); // 30 px < threshold

        assert_eq!(state.finish(), None);
        assert!(!state.is_tracking());
    }

    #[test]
    fn leftward_drag_past_threshold_is_forward() {
        let mut state = SwipeState::default();
        state.start(Point::new(300.0, 50.0));
        state.update(Point::new(230.0, 55.0));

        assert_eq!(state.finish(), Some(SwipeDirection::Forward));
    }

    #[test]
    fn rightward_drag_past_threshold_is_backward() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 50.0));
        state.update(Point::new(180.0, 45.0));

        assert_eq!(state.finish(), Some(SwipeDirection::Backward));
    }

    #[test]
    fn exact_threshold_counts_as_swipe() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 0.0));
        state.update(Point::new(100.0 - SWIPE_THRESHOLD_PX, 0.0));

        assert_eq!(state.finish(), Some(SwipeDirection::Forward));
    }

    #[test]
    fn cancel_abandons_the_gesture() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 50.0));
        state.cancel();

        assert!(!state.is_tracking());
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn vertical_drag_is_not_a_swipe() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 50.0));
        state.update(Point::new(105.0, 300.0));

        assert_eq!(state.finish(), None);
    }
}
