// SPDX-License-Identifier: MPL-2.0
//! Gallery settings newtypes.
//!
//! Each wrapper clamps its value into the accepted range, so the gallery
//! never has to re-validate what came out of `settings.toml`.

use crate::config::{
    GalleryConfig, DEFAULT_SLIDE_MS, DEFAULT_SLOT_COUNT, DEFAULT_SWIPE_THRESHOLD_PX,
    MAX_SLIDE_MS, MAX_SLOT_COUNT, MAX_SWIPE_THRESHOLD_PX, MIN_SLIDE_MS, MIN_SLOT_COUNT,
    MIN_SWIPE_THRESHOLD_PX, WATCHDOG_FACTOR,
};
use std::time::Duration;

/// Number of photo slots, guaranteed to be within 1..=99.
///
/// ```
/// use iced_invitation::gallery::SlotCount;
///
/// assert_eq!(SlotCount::new(0).value(), 1);
/// assert_eq!(SlotCount::new(500).value(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCount(usize);

impl SlotCount {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_SLOT_COUNT, MAX_SLOT_COUNT))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for SlotCount {
    fn default() -> Self {
        Self(DEFAULT_SLOT_COUNT)
    }
}

/// Duration of one slide phase, guaranteed to be within 50..=2000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDuration(u64);

impl SlideDuration {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_MS, MAX_SLIDE_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// How long a phase may stay pending before it is force-completed.
    #[must_use]
    pub fn watchdog(self) -> Duration {
        self.as_duration() * WATCHDOG_FACTOR
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_MS)
    }
}

/// Minimum horizontal travel of a swipe in logical pixels (0..=400).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Validated gallery settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    pub slot_count: SlotCount,
    pub slide: SlideDuration,
    pub swipe_threshold: SwipeThreshold,
    /// `false` selects the direct variant: navigation swaps instantly.
    pub animate: bool,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            slot_count: SlotCount::default(),
            slide: SlideDuration::default(),
            swipe_threshold: SwipeThreshold::default(),
            animate: true,
        }
    }
}

impl From<&GalleryConfig> for GallerySettings {
    fn from(config: &GalleryConfig) -> Self {
        let defaults = Self::default();
        Self {
            slot_count: config.slot_count.map_or(defaults.slot_count, SlotCount::new),
            slide: config
                .slide_ms
                .map_or(defaults.slide, SlideDuration::from_millis),
            swipe_threshold: config
                .swipe_threshold_px
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            animate: config.animate.unwrap_or(defaults.animate),
        }
    }
}
