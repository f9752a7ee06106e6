// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, renders from borrowed state, and reports side effects
//! back to the application instead of performing them.
//!
//! # Page
//!
//! - [`page`] - Scrollable column of invitation sections
//! - [`gallery_grid`] - Thumbnail grid and indicator markers
//! - [`accordion`] - Account panels with copy buttons
//!
//! # Overlays
//!
//! - [`lightbox`] - Modal photo viewer with slide transitions and swipe input
//! - [`contact_popup`] - Call/SMS links, restores the page scroll on close
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod accordion;
pub mod contact_popup;
pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox;
pub mod notifications;
pub mod page;
