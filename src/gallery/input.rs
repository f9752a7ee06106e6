// SPDX-License-Identifier: MPL-2.0
//! Swipe recognition on the lightbox image surface.
//!
//! A swipe is measured between the press and the release of the same pointer
//! (a finger, or the left mouse button). Only mostly-horizontal gestures that
//! travel further than the threshold navigate.

use super::settings::SwipeThreshold;
use super::transition::Direction;
use iced::touch::Finger;
use iced::Point;

/// The pointer that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(Finger),
}

/// Classifies a gesture from its start and end points.
///
/// Leftward travel (`dx < 0`) shows the next photo, rightward the previous one.
///
/// ```
/// use iced::Point;
/// use iced_invitation::gallery::{classify_swipe, Direction, SwipeThreshold};
///
/// let threshold = SwipeThreshold::new(50.0);
/// let start = Point::new(200.0, 100.0);
/// assert_eq!(
///     classify_swipe(start, Point::new(140.0, 110.0), threshold),
///     Some(Direction::Next)
/// );
/// assert_eq!(classify_swipe(start, Point::new(210.0, 110.0), threshold), None);
/// ```
#[must_use]
pub fn classify_swipe(start: Point, end: Point, threshold: SwipeThreshold) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() <= dy.abs() || dx.abs() <= threshold.value() {
        return None;
    }

    if dx < 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

/// Remembers where the current gesture started.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(Pointer, Point)>,
}

impl SwipeTracker {
    /// Records the start of a gesture, replacing any unfinished one.
    pub fn press(&mut self, pointer: Pointer, position: Point) {
        self.start = Some((pointer, position));
    }

    /// Ends the gesture of `pointer` and classifies it.
    ///
    /// A release from a pointer that did not start the gesture is ignored.
    pub fn release(
        &mut self,
        pointer: Pointer,
        position: Point,
        threshold: SwipeThreshold,
    ) -> Option<Direction> {
        match self.start {
            Some((started_by, start)) if started_by == pointer => {
                self.start = None;
                classify_swipe(start, position, threshold)
            }
            _ => None,
        }
    }

    /// Drops the gesture in progress (finger lost, modal closed).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> SwipeThreshold {
        SwipeThreshold::new(50.0)
    }

    #[test]
    fn left_swipe_goes_next() {
        let start = Point::new(300.0, 200.0);
        let end = Point::new(240.0, 205.0);
        assert_eq!(classify_swipe(start, end, threshold()), Some(Direction::Next));
    }

    #[test]
    fn right_swipe_goes_prev() {
        let start = Point::new(100.0, 200.0);
        let end = Point::new(180.0, 170.0);
        assert_eq!(classify_swipe(start, end, threshold()), Some(Direction::Prev));
    }

    #[test]
    fn short_or_diagonal_moves_are_ignored() {
        let start = Point::new(100.0, 100.0);
        assert_eq!(classify_swipe(start, Point::new(110.0, 110.0), threshold()), None);
        assert_eq!(classify_swipe(start, Point::new(150.0, 100.0), threshold()), None);
        assert_eq!(classify_swipe(start, Point::new(30.0, 200.0), threshold()), None);
    }

    #[test]
    fn tracker_classifies_matching_release() {
        let mut tracker = SwipeTracker::default();
        tracker.press(Pointer::Finger(Finger(7)), Point::new(200.0, 50.0));
        assert!(tracker.is_tracking());

        let direction =
            tracker.release(Pointer::Finger(Finger(7)), Point::new(140.0, 50.0), threshold());

        assert_eq!(direction, Some(Direction::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn tracker_ignores_other_pointer() {
        let mut tracker = SwipeTracker::default();
        tracker.press(Pointer::Finger(Finger(1)), Point::new(200.0, 50.0));

        let direction = tracker.release(Pointer::Mouse, Point::new(0.0, 50.0), threshold());

        assert_eq!(direction, None);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(
            tracker.release(Pointer::Mouse, Point::new(0.0, 0.0), threshold()),
            None
        );
    }

    #[test]
    fn cancel_forgets_start() {
        let mut tracker = SwipeTracker::default();
        tracker.press(Pointer::Mouse, Point::ORIGIN);
        tracker.cancel();
        assert!(!tracker.is_tracking());
    }
}
