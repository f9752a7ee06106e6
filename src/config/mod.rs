// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[gallery]` - Photo slot count, slide timing, swipe threshold
//! - `[bgm]` - Background music file, start-up behavior and looping
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_INVITATION_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_invitation::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("{:?} photo slots", config.gallery.slot_count);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Photo gallery and lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of photo slots (`img1.jpg` .. `imgN.jpg`).
    #[serde(default = "default_slot_count", skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<usize>,

    /// Duration of each slide phase in milliseconds.
    #[serde(default = "default_slide_ms", skip_serializing_if = "Option::is_none")]
    pub slide_ms: Option<u64>,

    /// Minimum horizontal drag distance for a swipe, in pixels.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Animate navigation between photos. When false, prev/next switch instantly.
    #[serde(default = "default_animate", skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            slot_count: default_slot_count(),
            slide_ms: default_slide_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            animate: default_animate(),
        }
    }
}

/// Background music settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BgmConfig {
    /// Attempt a muted autoplay when the page opens.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Audio file, relative to the site directory.
    #[serde(default = "default_bgm_file", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Start the track over when it ends.
    #[serde(default = "default_repeat", skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
}

impl Default for BgmConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            file: default_bgm_file(),
            repeat: default_repeat(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery and lightbox settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Background music settings.
    #[serde(default)]
    pub bgm: BgmConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_slot_count() -> Option<usize> {
    Some(DEFAULT_SLOT_COUNT)
}

fn default_slide_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_animate() -> Option<bool> {
    Some(true)
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_bgm_file() -> Option<String> {
    Some(DEFAULT_BGM_FILE.to_string())
}

fn default_repeat() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes configuration to a specific path, e.g. to seed a settings file.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
