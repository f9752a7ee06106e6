// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Photo slot count and naming convention
//! - **Transition**: Slide animation timing and watchdog
//! - **Swipe**: Gesture classification threshold
//! - **Page**: Site layout and start-up reveal
//! - **Background Music**: Audio file and buffering

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of photo slots (`img1` .. `img10`).
pub const DEFAULT_SLOT_COUNT: usize = 10;

/// Minimum number of photo slots.
pub const MIN_SLOT_COUNT: usize = 1;

/// Maximum number of photo slots.
pub const MAX_SLOT_COUNT: usize = 99;

/// Directory (relative to the site directory) holding the photos.
pub const PHOTO_DIR: &str = "photo";

/// File stem prefix of every photo slot.
pub const PHOTO_PREFIX: &str = "img";

/// Extension tried first for every slot.
pub const PRIMARY_EXTENSION: &str = "jpg";

/// Extension tried once when the primary file fails to load.
pub const FALLBACK_EXTENSION: &str = "jpeg";

/// Longest edge of generated grid thumbnails, in pixels.
pub const THUMBNAIL_SIZE: u32 = 320;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of one slide phase (out or in), in milliseconds.
pub const DEFAULT_SLIDE_MS: u64 = 300;

/// Minimum slide phase duration.
pub const MIN_SLIDE_MS: u64 = 50;

/// Maximum slide phase duration.
pub const MAX_SLIDE_MS: u64 = 2000;

/// A phase pending longer than this many slide durations is force-completed.
pub const WATCHDOG_FACTOR: u32 = 4;

/// Interval between animation frame ticks while a transition runs.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Minimum horizontal travel for a drag to count as a swipe, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Lowest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 0.0;

/// Highest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Name of the key-value info file inside the site directory.
pub const INFO_FILE: &str = "info.txt";

/// Delay before the page content is revealed after start-up.
pub const REVEAL_DELAY_MS: u64 = 100;

// ==========================================================================
// Background Music Defaults
// ==========================================================================

/// Audio file played as background music, relative to the site directory.
pub const DEFAULT_BGM_FILE: &str = "bgm.mp3";

/// Decoded audio kept ahead of the output device, in milliseconds.
pub const BGM_BUFFER_MS: u64 = 500;

/// Interval at which playback events are collected while music plays.
pub const BGM_POLL_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLOT_COUNT > 0);
    assert!(MAX_SLOT_COUNT >= MIN_SLOT_COUNT);
    assert!(DEFAULT_SLOT_COUNT >= MIN_SLOT_COUNT);
    assert!(DEFAULT_SLOT_COUNT <= MAX_SLOT_COUNT);

    assert!(MIN_SLIDE_MS > 0);
    assert!(MAX_SLIDE_MS >= MIN_SLIDE_MS);
    assert!(DEFAULT_SLIDE_MS >= MIN_SLIDE_MS);
    assert!(DEFAULT_SLIDE_MS <= MAX_SLIDE_MS);
    assert!(WATCHDOG_FACTOR > 1);
    assert!(FRAME_INTERVAL_MS < MIN_SLIDE_MS);

    assert!(MIN_SWIPE_THRESHOLD_PX >= 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(BGM_BUFFER_MS > BGM_POLL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_defaults_are_valid() {
        assert_eq!(DEFAULT_SLOT_COUNT, 10);
        assert!(DEFAULT_SLOT_COUNT >= MIN_SLOT_COUNT);
        assert!(DEFAULT_SLOT_COUNT <= MAX_SLOT_COUNT);
    }

    #[test]
    fn slide_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDE_MS, 300);
        assert!(DEFAULT_SLIDE_MS >= MIN_SLIDE_MS);
        assert!(DEFAULT_SLIDE_MS <= MAX_SLIDE_MS);
    }

    #[test]
    fn swipe_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn extensions_differ() {
        assert_ne!(PRIMARY_EXTENSION, FALLBACK_EXTENSION);
    }
}
