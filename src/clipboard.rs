// SPDX-License-Identifier: MPL-2.0
//! Copying account numbers and the venue address.
//!
//! The system clipboard (`arboard`) is tried first. Account numbers fall back
//! to the toolkit clipboard when it is unavailable; the address does not.
//! Every attempt ends in a toast.

use crate::ui::notifications::Notification;
use iced::Task;

/// Clipboard that accepts plain text.
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The desktop clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl TextClipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// What is being copied; selects the fallback policy and toast messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Account,
    Address,
}

impl CopyTarget {
    fn allows_fallback(self) -> bool {
        matches!(self, CopyTarget::Account)
    }

    fn success_key(self) -> &'static str {
        match self {
            CopyTarget::Account => "notification-copy-account-success",
            CopyTarget::Address => "notification-copy-address-success",
        }
    }

    fn failure_key(self) -> &'static str {
        match self {
            CopyTarget::Account => "notification-copy-account-failed",
            CopyTarget::Address => "notification-copy-address-failed",
        }
    }
}

/// Result of trying the primary clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    NothingToCopy,
    Copied,
    /// The system clipboard failed; the toolkit clipboard should take over.
    UseFallback,
    Failed,
}

impl CopyOutcome {
    /// The toast reporting this outcome.
    #[must_use]
    pub fn notification(&self, target: CopyTarget) -> Notification {
        match self {
            CopyOutcome::NothingToCopy => Notification::warning("notification-copy-empty"),
            CopyOutcome::Copied | CopyOutcome::UseFallback => {
                Notification::success(target.success_key())
            }
            CopyOutcome::Failed => Notification::error(target.failure_key()),
        }
    }
}

/// Places `text` on `clipboard`, deciding what happens on failure.
pub fn attempt(clipboard: &mut impl TextClipboard, target: CopyTarget, text: &str) -> CopyOutcome {
    let text = text.trim();
    if text.is_empty() {
        return CopyOutcome::NothingToCopy;
    }
    match clipboard.set_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) if target.allows_fallback() => {
            log::warn!("system clipboard unavailable ({}), using fallback", err);
            CopyOutcome::UseFallback
        }
        Err(err) => {
            log::error!("copying {:?} failed: {}", target, err);
            CopyOutcome::Failed
        }
    }
}

/// Copies with the system clipboard, returning the toast and any fallback task.
pub fn copy<Message: Send + 'static>(target: CopyTarget, text: &str) -> (Notification, Task<Message>) {
    let outcome = attempt(&mut SystemClipboard, target, text);
    let task = if outcome == CopyOutcome::UseFallback {
        iced::clipboard::write(text.trim().to_string())
    } else {
        Task::none()
    };
    (outcome.notification(target), task)
}

pub fn copy_account<Message: Send + 'static>(text: &str) -> (Notification, Task<Message>) {
    copy(CopyTarget::Account, text)
}

pub fn copy_address<Message: Send + 'static>(text: &str) -> (Notification, Task<Message>) {
    copy(CopyTarget::Address, text)
}
