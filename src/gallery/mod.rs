// SPDX-License-Identifier: MPL-2.0
//! Photo gallery with a modal lightbox.
//!
//! [`Gallery`] owns the photo slots, the viewer state and the slide
//! transition. All mutation goes through its operations; the UI only reads it.
//!
//! # Flow
//!
//! - [`builder::build`] creates the slots and the initial load requests;
//!   load results come back as [`SlotEvent`] messages.
//! - Clicking a thumbnail or indicator marker opens the lightbox at that slot.
//! - Prev/next controls and horizontal swipes navigate. With animation
//!   enabled, navigation runs through the [`transition`] state machine and
//!   is driven by frame ticks; requests made while animating are dropped.
//! - A click on the backdrop closes the lightbox.

pub mod builder;
pub mod image_set;
pub mod input;
pub mod settings;
pub mod transition;
pub mod viewer;

pub use image_set::{ImageSet, LoadRequest, Slot, SlotEvent, SlotImage, SlotSource, SlotStatus};
pub use input::{classify_swipe, Pointer, SwipeTracker};
pub use settings::{GallerySettings, SlideDuration, SlotCount, SwipeThreshold};
pub use transition::{Direction, Phase, SlideClass, SlideVisual, TickOutcome, Transition};
pub use viewer::ViewerState;

use crate::error::GalleryError;
use iced::{Point, Task};
use std::path::Path;
use std::time::Instant;

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// A grid thumbnail or an indicator marker was clicked.
    OpenRequested(usize),
    PrevPressed,
    NextPressed,
    ClosePressed,
    /// Click on the lightbox backdrop, outside the image surface and controls.
    BackdropPressed,
    SurfacePressed { pointer: Pointer, position: Point },
    SurfaceReleased { pointer: Pointer, position: Point },
    /// The gesture can no longer complete (finger lost, cursor left).
    GestureLost,
    Slot(SlotEvent),
    /// Animation frame.
    Frame(Instant),
}

/// Side effects the application should perform after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ShowErrorNotification { key: &'static str },
}

/// The gallery/lightbox controller.
#[derive(Debug, Clone)]
pub struct Gallery {
    images: ImageSet,
    viewer: ViewerState,
    transition: Transition,
    swipe: SwipeTracker,
    settings: GallerySettings,
    /// Slot last written to the display surface.
    displayed: Option<usize>,
}

impl Gallery {
    /// Builds the slots and returns the gallery together with the tasks that
    /// load every slot.
    pub fn new(site_dir: &Path, settings: GallerySettings) -> (Self, Task<Message>) {
        let (images, requests) = builder::build(site_dir, settings.slot_count);
        let gallery = Self::with_images(images, settings);
        (gallery, builder::load_tasks(requests, Message::Slot))
    }

    /// Creates a gallery around existing slots without loading anything.
    #[must_use]
    pub fn with_images(images: ImageSet, settings: GallerySettings) -> Self {
        Self {
            images,
            viewer: ViewerState::default(),
            transition: Transition::new(settings.slide),
            swipe: SwipeTracker::default(),
            settings,
            displayed: None,
        }
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::OpenRequested(index) => {
                if let Err(err) = self.open(index, now) {
                    log::error!("{}", err);
                    return (
                        Effect::ShowErrorNotification {
                            key: err.i18n_key(),
                        },
                        Task::none(),
                    );
                }
            }
            Message::PrevPressed => {
                self.navigate(Direction::Prev, now);
            }
            Message::NextPressed => {
                self.navigate(Direction::Next, now);
            }
            Message::ClosePressed => self.close(),
            Message::BackdropPressed => self.backdrop_clicked(),
            Message::SurfacePressed { pointer, position } => {
                self.swipe_started(pointer, position);
            }
            Message::SurfaceReleased { pointer, position } => {
                self.swipe_ended(pointer, position, now);
            }
            Message::GestureLost => self.swipe.cancel(),
            Message::Slot(event) => {
                if let Some(request) = self.apply(event) {
                    return (Effect::None, builder::load_tasks(vec![request], Message::Slot));
                }
            }
            Message::Frame(at) => {
                self.tick(at);
            }
        }
        (Effect::None, Task::none())
    }

    /// Opens the lightbox at `index`.
    ///
    /// A navigation still in flight is completed first; the visual state is
    /// then reset to idle and centered.
    pub fn open(&mut self, index: usize, now: Instant) -> Result<(), GalleryError> {
        let len = self.images.len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        self.advance(now);
        if let Some(direction) = self.transition.finish_now() {
            self.swap(direction);
        }
        self.viewer.open(index, len)?;
        self.displayed = Some(index);
        self.swipe.cancel();
        Ok(())
    }

    /// Hides the lightbox. The current index is kept and a running
    /// navigation keeps going.
    pub fn close(&mut self) {
        self.viewer.close();
        self.swipe.cancel();
    }

    pub fn backdrop_clicked(&mut self) {
        if self.viewer.is_open() {
            self.close();
        }
    }

    /// Requests a move to the previous or next photo.
    ///
    /// Returns `false` when the request is dropped: the lightbox is closed
    /// or a transition is in flight.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> bool {
        self.advance(now);
        if !self.viewer.is_open() || self.images.is_empty() {
            return false;
        }
        if !self.settings.animate {
            if self.transition.is_animating() {
                return false;
            }
            self.swap(direction);
            return true;
        }
        self.transition.start(direction, now)
    }

    /// Advances a running transition. Returns `true` while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.advance(now);
        self.transition.is_animating()
    }

    /// Records a slot load outcome; returns a fallback request when one is due.
    pub fn apply(&mut self, event: SlotEvent) -> Option<LoadRequest> {
        self.images.apply(event)
    }

    pub fn swipe_started(&mut self, pointer: Pointer, position: Point) {
        if self.viewer.is_open() {
            self.swipe.press(pointer, position);
        }
    }

    /// Completes a gesture. Returns `true` when it triggered a navigation.
    pub fn swipe_ended(&mut self, pointer: Pointer, position: Point, now: Instant) -> bool {
        let Some(direction) = self
            .swipe
            .release(pointer, position, self.settings.swipe_threshold)
        else {
            return false;
        };
        self.advance(now);
        if self.transition.is_animating() {
            return false;
        }
        self.navigate(direction, now)
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.viewer.current_index()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    /// The active indicator marker, if any photo was displayed yet.
    #[must_use]
    pub fn active_marker(&self) -> Option<usize> {
        self.displayed
    }

    /// One flag per slot, `true` for the active marker.
    #[must_use]
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.images.len())
            .map(|index| self.displayed == Some(index))
            .collect()
    }

    /// The slot currently on the display surface.
    #[must_use]
    pub fn surface(&self) -> Option<&Slot> {
        self.displayed.and_then(|index| self.images.get(index))
    }

    /// Position of the display surface at `now`.
    #[must_use]
    pub fn visual(&self, now: Instant) -> SlideVisual {
        self.transition.visual(now)
    }

    fn advance(&mut self, now: Instant) {
        let outcome = self.transition.tick(now);
        if let Some(direction) = outcome.swap {
            self.swap(direction);
        }
    }

    fn swap(&mut self, direction: Direction) {
        let next = direction.step(self.viewer.current_index(), self.images.len());
        self.viewer.set_index(next);
        self.displayed = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageError;
    use std::path::PathBuf;
    use std::time::Duration;

    fn gallery(count: usize) -> Gallery {
        let settings = GallerySettings {
            slot_count: SlotCount::new(count),
            ..GallerySettings::default()
        };
        Gallery::with_images(ImageSet::new(Path::new("/site"), settings.slot_count), settings)
    }

    fn slide() -> Duration {
        GallerySettings::default().slide.as_duration()
    }

    /// Runs one navigation to completion with 16 ms frames. Returns the end instant.
    fn complete(g: &mut Gallery, direction: Direction, start: Instant) -> Instant {
        assert!(g.navigate(direction, start));
        let mut now = start;
        while g.is_animating() {
            now += Duration::from_millis(16);
            g.tick(now);
        }
        now
    }

    #[test]
    fn open_displays_requested_slot() {
        let mut g = gallery(10);
        g.open(4, Instant::now()).expect("in range");
        assert!(g.is_open());
        assert_eq!(g.current_index(), 4);
        assert_eq!(g.active_marker(), Some(4));
        assert_eq!(g.visual(Instant::now()), SlideVisual::CENTERED);
    }

    #[test]
    fn open_out_of_range_is_an_error() {
        let mut g = gallery(10);
        let err = g.open(10, Instant::now()).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 10, len: 10 });
        assert!(!g.is_open());
        assert_eq!(g.active_marker(), None);
    }

    #[test]
    fn no_marker_is_active_before_first_open() {
        let g = gallery(10);
        assert!(g.indicators().iter().all(|active| !active));
    }

    #[test]
    fn navigation_is_dropped_while_closed() {
        let mut g = gallery(10);
        assert!(!g.navigate(Direction::Next, Instant::now()));
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn index_changes_only_at_end_of_slide_out() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(2, t0).expect("in range");
        g.navigate(Direction::Next, t0);

        g.tick(t0 + slide() / 2);
        assert_eq!(g.current_index(), 2);

        g.tick(t0 + slide());
        assert_eq!(g.current_index(), 3);
        assert_eq!(g.active_marker(), Some(3));
        assert!(g.is_animating());
    }

    #[test]
    fn second_navigate_while_animating_is_dropped() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(0, t0).expect("in range");
        assert!(g.navigate(Direction::Next, t0));
        assert!(!g.navigate(Direction::Next, t0 + Duration::from_millis(50)));

        let mut now = t0;
        while g.is_animating() {
            now += Duration::from_millis(16);
            g.tick(now);
        }
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn closing_mid_transition_lets_it_finish() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(5, t0).expect("in range");
        g.navigate(Direction::Prev, t0);
        g.close();

        g.tick(t0 + slide());
        g.tick(t0 + slide() + Duration::from_millis(16));
        g.tick(t0 + slide() * 2 + Duration::from_millis(16));
        assert!(!g.is_animating());
        assert_eq!(g.current_index(), 4);
        assert!(!g.is_open());
    }

    #[test]
    fn reopening_mid_transition_completes_it_first() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(5, t0).expect("in range");
        g.navigate(Direction::Next, t0);
        g.close();

        g.open(1, t0 + Duration::from_millis(10)).expect("in range");
        assert!(!g.is_animating());
        assert_eq!(g.current_index(), 1);
        assert_eq!(g.active_marker(), Some(1));
    }

    #[test]
    fn direct_variant_swaps_immediately() {
        let settings = GallerySettings {
            animate: false,
            ..GallerySettings::default()
        };
        let mut g = Gallery::with_images(ImageSet::new(Path::new("/site"), settings.slot_count), settings);
        let now = Instant::now();
        g.open(9, now).expect("in range");

        assert!(g.navigate(Direction::Next, now));
        assert_eq!(g.current_index(), 0);
        assert!(!g.is_animating());
        assert!(g.navigate(Direction::Prev, now));
        assert_eq!(g.current_index(), 9);
    }

    #[test]
    fn stalled_ticks_do_not_wedge_the_guard() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(0, t0).expect("in range");
        g.navigate(Direction::Next, t0);

        let later = t0 + g.settings().slide.watchdog() + Duration::from_millis(1);
        assert!(g.navigate(Direction::Next, later));
        assert_eq!(g.current_index(), 1);
        complete_pending(&mut g, later);
        assert_eq!(g.current_index(), 2);
    }

    fn complete_pending(g: &mut Gallery, start: Instant) {
        let mut now = start;
        while g.is_animating() {
            now += Duration::from_millis(16);
            g.tick(now);
        }
    }

    #[test]
    fn round_trip_returns_to_start() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(6, t0).expect("in range");
        let t1 = complete(&mut g, Direction::Next, t0);
        complete(&mut g, Direction::Prev, t1);
        assert_eq!(g.current_index(), 6);
    }

    #[test]
    fn swipe_left_navigates_next_once() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(0, t0).expect("in range");

        g.swipe_started(Pointer::Mouse, Point::new(300.0, 200.0));
        assert!(g.swipe_ended(Pointer::Mouse, Point::new(240.0, 210.0), t0));
        complete_pending(&mut g, t0);
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn small_swipe_does_nothing() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(3, t0).expect("in range");

        g.swipe_started(Pointer::Mouse, Point::new(100.0, 100.0));
        assert!(!g.swipe_ended(Pointer::Mouse, Point::new(110.0, 110.0), t0));
        assert!(!g.is_animating());
        assert_eq!(g.current_index(), 3);
    }

    #[test]
    fn swipe_during_running_transition_is_dropped() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.open(0, t0).expect("in range");
        assert!(g.navigate(Direction::Next, t0));

        let mid = t0 + slide() / 2;
        g.swipe_started(Pointer::Finger(iced::touch::Finger(7)), Point::new(300.0, 200.0));
        assert!(!g.swipe_ended(Pointer::Finger(iced::touch::Finger(7)), Point::new(240.0, 204.0), mid));
        complete_pending(&mut g, mid);
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn swipe_is_ignored_while_closed() {
        let mut g = gallery(10);
        let t0 = Instant::now();
        g.swipe_started(Pointer::Mouse, Point::new(300.0, 200.0));
        assert!(!g.swipe_ended(Pointer::Mouse, Point::new(240.0, 204.0), t0));
        assert!(!g.is_animating());
        assert_eq!(g.current_index(), 0);

        g.open(2, t0).expect("in range");
        g.swipe_started(Pointer::Mouse, Point::new(300.0, 200.0));
        g.close();
        assert!(!g.swipe_ended(Pointer::Mouse, Point::new(240.0, 204.0), t0));
        assert!(!g.is_animating());
        assert_eq!(g.current_index(), 2);
    }

    #[test]
    fn backdrop_click_closes() {
        let mut g = gallery(10);
        g.open(2, Instant::now()).expect("in range");
        g.handle_message(Message::BackdropPressed, Instant::now());
        assert!(!g.is_open());
        assert_eq!(g.current_index(), 2);
    }

    #[test]
    fn failed_primary_requests_fallback_and_surface_uses_it() {
        let mut g = gallery(10);
        let retry = g.apply(SlotEvent::Failed {
            index: 2,
            path: PathBuf::from("/site/photo/img3.jpg"),
            error: ImageError::NotFound("img3.jpg".into()),
        });
        assert!(retry.is_some());

        g.open(2, Instant::now()).expect("in range");
        let surface = g.surface().expect("surface slot");
        assert_eq!(surface.path(), Path::new("/site/photo/img3.jpeg"));
    }

    #[test]
    fn open_request_out_of_range_reports_error_effect() {
        let mut g = gallery(3);
        let (effect, _task) = g.handle_message(Message::OpenRequested(8), Instant::now());
        assert_eq!(
            effect,
            Effect::ShowErrorNotification {
                key: "error-gallery-index"
            }
        );
    }
}
