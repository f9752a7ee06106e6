// SPDX-License-Identifier: MPL-2.0
//! Slide transition state machine.
//!
//! A navigation runs through `Idle → SlidingOut → SlidingIn → Idle`. Phases
//! only advance when [`Transition::tick`] is called with the current instant,
//! which keeps the machine deterministic under test.
//!
//! While sliding out, the current photo leaves the surface opposite to the
//! direction of travel. At the end of that phase the caller swaps the photo,
//! the new one is placed off-screen on its entry side for exactly one frame,
//! then animates to the center.
//!
//! A phase left pending for longer than the watchdog (ticks stalled) is
//! completed on the next tick so the animation guard never stays stuck.

use super::settings::SlideDuration;
use std::time::{Duration, Instant};

/// Direction of travel through the photo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// The index reached from `index` in a list of `len` photos, wrapping at both ends.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        }
    }

    /// Class applied to the outgoing photo.
    #[must_use]
    pub fn slide_out(self) -> SlideClass {
        match self {
            Direction::Next => SlideClass::SlideLeft,
            Direction::Prev => SlideClass::SlideRight,
        }
    }

    /// Class the incoming photo is placed with before it moves to center.
    #[must_use]
    pub fn slide_in_start(self) -> SlideClass {
        match self {
            Direction::Next => SlideClass::StartRight,
            Direction::Prev => SlideClass::StartLeft,
        }
    }
}

/// The four named positions of the image surface during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideClass {
    SlideLeft,
    SlideRight,
    StartLeft,
    StartRight,
}

impl SlideClass {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SlideClass::SlideLeft => "slide-left",
            SlideClass::SlideRight => "slide-right",
            SlideClass::StartLeft => "start-left",
            SlideClass::StartRight => "start-right",
        }
    }

    /// Horizontal end position as a fraction of the surface width.
    #[must_use]
    pub fn offset(self) -> f32 {
        match self {
            SlideClass::SlideLeft | SlideClass::StartLeft => -1.0,
            SlideClass::SlideRight | SlideClass::StartRight => 1.0,
        }
    }
}

/// Current phase of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SlidingOut {
        direction: Direction,
        since: Instant,
    },
    SlidingIn {
        direction: Direction,
        since: Instant,
        /// Frame at which the photo left its start position. `None` while it
        /// is still placed off-screen without animation. The slide-in ends one
        /// slide duration after this instant.
        moving_since: Option<Instant>,
    },
}

/// What a tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The displayed photo must advance in this direction now.
    pub swap: Option<Direction>,
    /// The machine returned to idle on this tick.
    pub finished: bool,
}

/// How the image surface should be drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    pub class: Option<SlideClass>,
    /// Horizontal offset as a fraction of the surface width (0.0 is centered).
    pub offset: f32,
    /// `true` while the surface is positioned without animation.
    pub instant: bool,
}

impl SlideVisual {
    pub const CENTERED: SlideVisual = SlideVisual {
        class: None,
        offset: 0.0,
        instant: false,
    };
}

#[derive(Debug, Clone)]
pub struct Transition {
    phase: Phase,
    slide: Duration,
    watchdog: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(slide: SlideDuration) -> Self {
        Self {
            phase: Phase::Idle,
            slide: slide.as_duration(),
            watchdog: slide.watchdog(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The guard flag: `true` from the start of a slide-out until the slide-in ends.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Begins a navigation. Returns `false` (and changes nothing) while animating.
    pub fn start(&mut self, direction: Direction, now: Instant) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = Phase::SlidingOut {
            direction,
            since: now,
        };
        true
    }

    /// Advances the machine to `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        match self.phase {
            Phase::Idle => TickOutcome::default(),
            Phase::SlidingOut { direction, since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed > self.watchdog {
                    log::warn!(
                        "slide-out stalled for {:?}, completing navigation",
                        elapsed
                    );
                    self.phase = Phase::Idle;
                    return TickOutcome {
                        swap: Some(direction),
                        finished: true,
                    };
                }
                if elapsed < self.slide {
                    return TickOutcome::default();
                }
                self.phase = Phase::SlidingIn {
                    direction,
                    since: now,
                    moving_since: None,
                };
                TickOutcome {
                    swap: Some(direction),
                    finished: false,
                }
            }
            Phase::SlidingIn {
                direction,
                since,
                moving_since,
            } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed > self.watchdog {
                    log::warn!("slide-in stalled for {:?}, completing navigation", elapsed);
                    self.phase = Phase::Idle;
                    return TickOutcome {
                        swap: None,
                        finished: true,
                    };
                }
                match moving_since {
                    Some(start) if now.saturating_duration_since(start) >= self.slide => {
                        self.phase = Phase::Idle;
                        TickOutcome {
                            swap: None,
                            finished: true,
                        }
                    }
                    Some(_) => TickOutcome::default(),
                    None => {
                        self.phase = Phase::SlidingIn {
                            direction,
                            since,
                            moving_since: Some(now),
                        };
                        TickOutcome::default()
                    }
                }
            }
        }
    }

    /// Ends any navigation at once. Returns the swap still owed, if any.
    pub fn finish_now(&mut self) -> Option<Direction> {
        let owed = match self.phase {
            Phase::SlidingOut { direction, .. } => Some(direction),
            Phase::Idle | Phase::SlidingIn { .. } => None,
        };
        self.phase = Phase::Idle;
        owed
    }

    /// Position of the image surface at `now`.
    #[must_use]
    pub fn visual(&self, now: Instant) -> SlideVisual {
        match self.phase {
            Phase::Idle => SlideVisual::CENTERED,
            Phase::SlidingOut { direction, since } => {
                let class = direction.slide_out();
                SlideVisual {
                    class: Some(class),
                    offset: class.offset() * self.progress(since, now),
                    instant: false,
                }
            }
            Phase::SlidingIn {
                direction,
                moving_since,
                ..
            } => {
                let class = direction.slide_in_start();
                match moving_since {
                    None => SlideVisual {
                        class: Some(class),
                        offset: class.offset(),
                        instant: true,
                    },
                    Some(start) => SlideVisual {
                        class: None,
                        offset: class.offset() * (1.0 - self.progress(start, now)),
                        instant: false,
                    },
                }
            }
        }
    }

    fn progress(&self, since: Instant, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(since).as_secs_f32();
        let t = (elapsed / self.slide.as_secs_f32()).clamp(0.0, 1.0);
        // Smoothstep, close to the CSS `ease` curve.
        t * t * (3.0 - 2.0 * t)
    }
}
