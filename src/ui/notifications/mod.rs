// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Toasts confirm copy actions and report problems (unreadable settings,
//! copy failures) without blocking the page.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - rendering
//!
//! # Behavior
//!
//! - Duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - At most 3 visible toasts, others are queued
//! - Position: bottom center

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
