// SPDX-License-Identifier: MPL-2.0
//! `iced_invitation` renders a wedding invitation page with the Iced GUI framework.
//!
//! The page is filled from a `key: value` info file and centers on a photo
//! gallery with a sliding lightbox. Around it sit the collaborators of the
//! original page: family and contact details, a venue section with address
//! copy, account panels with copy buttons, and a background music toggle.

pub mod app;
pub mod bgm;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod info;
pub mod links;
pub mod ui;
