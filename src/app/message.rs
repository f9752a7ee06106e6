// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::info::InvitationInfo;
use crate::ui::contact_popup;
use crate::ui::notifications;
use crate::ui::page;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    /// Messages from the contact popup overlay.
    Contact(contact_popup::Message),
    Notification(notifications::NotificationMessage),
    /// Result of reading `info.txt`.
    InfoLoaded(Result<InvitationInfo, Error>),
    /// The start-up delay elapsed; the page fades in.
    Revealed,
    /// Periodic tick for toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Site directory holding `info.txt` and `photo/`.
    /// Takes precedence over `ICED_INVITATION_SITE_DIR`.
    pub site_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_INVITATION_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start the background music unmuted.
    pub play_bgm: bool,
}
