// SPDX-License-Identifier: MPL-2.0
//! Time-driven subscriptions for the application.
//!
//! All subscriptions are only active while there is something to advance, so
//! an idle page does not wake up.

use super::Message;
use crate::config::{BGM_POLL_MS, FRAME_INTERVAL_MS};
use crate::{bgm, gallery};
use crate::ui::page;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which toast expiry is checked.
const TOAST_TICK_MS: u64 = 100;

/// Frame ticks that drive a running slide transition.
///
/// Keyed on the animation guard rather than on the lightbox visibility: a
/// navigation keeps running after the lightbox is closed.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS))
            .map(|at| Message::Page(page::Message::Gallery(gallery::Message::Frame(at))))
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Polls the music backend for track ends and output failures while it plays.
pub fn create_bgm_subscription(is_playing: bool) -> Subscription<Message> {
    if is_playing {
        time::every(Duration::from_millis(BGM_POLL_MS))
            .map(|_| Message::Page(page::Message::Bgm(bgm::Message::Poll)))
    } else {
        Subscription::none()
    }
}
