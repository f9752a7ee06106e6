// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (`en-US`, `ko`)
//! - Placeable substitution through `tr_with_args`
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
