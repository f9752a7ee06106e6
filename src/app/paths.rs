// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Two directories matter to the application:
//! - the **config directory**, holding `settings.toml`;
//! - the **site directory**, holding `info.txt`, the `photo/` folder and the
//!   background music file.
//!
//! # Path Resolution Order
//!
//! Both are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, positional `SITE_DIR`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_INVITATION_CONFIG_DIR`, `ICED_INVITATION_SITE_DIR`)
//! 4. **Default** - platform config dir via `dirs`, current directory for the site
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir.clone(), flags.site_dir.clone());
//! ```

use crate::config::{BgmConfig, DEFAULT_BGM_FILE, INFO_FILE, PHOTO_DIR};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedInvitation";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_INVITATION_CONFIG_DIR";

/// Environment variable to override the site directory.
pub const ENV_SITE_DIR: &str = "ICED_INVITATION_SITE_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for site directory (set once at startup).
static CLI_SITE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and site directories.
///
/// Later calls are ignored: the first value set wins for the process lifetime.
pub fn init_cli_overrides(config_dir: Option<String>, site_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("config dir override already initialized");
    }
    if CLI_SITE_DIR.set(site_dir.map(PathBuf::from)).is_err() {
        log::debug!("site dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_site_dir() -> Option<PathBuf> {
    CLI_SITE_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedInvitation/`
/// - macOS: `~/Library/Application Support/IcedInvitation/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedInvitation\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the site directory (info file and photos).
pub fn get_site_dir() -> PathBuf {
    get_site_dir_with_override(None)
}

/// Returns the site directory with an optional override.
///
/// Falls back to the current directory, which matches serving the page
/// from the folder it lives in.
pub fn get_site_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(get_cli_site_dir)
        .or_else(|| non_empty_env(ENV_SITE_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the info file inside a site directory.
pub fn info_file(site_dir: &Path) -> PathBuf {
    site_dir.join(INFO_FILE)
}

/// Path of the photo folder inside a site directory.
pub fn photo_dir(site_dir: &Path) -> PathBuf {
    site_dir.join(PHOTO_DIR)
}

/// Path of the background music file; `bgm.file` is relative to the site
/// directory unless absolute.
pub fn bgm_file(site_dir: &Path, config: &BgmConfig) -> PathBuf {
    site_dir.join(config.file.as_deref().unwrap_or(DEFAULT_BGM_FILE))
}
