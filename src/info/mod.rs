// SPDX-License-Identifier: MPL-2.0
//! Invitation details read from the site's `info.txt`.
//!
//! The file is line oriented: each line holds `key: value`. The line is split
//! at the first colon, so values may themselves contain colons (times, URLs).
//! Lines without a colon and lines whose key is empty are skipped.
//!
//! ```
//! use iced_invitation::info::InvitationInfo;
//!
//! let info = InvitationInfo::parse("wedding_time: 12:30 PM\nnot a pair\n");
//! assert_eq!(info.get("wedding_time"), Some("12:30 PM"));
//! assert_eq!(info.len(), 1);
//! ```

pub mod template;

pub use template::{
    AccountEntry, ContactEntry, ContactLink, FamilyText, LinkScheme, LocationText, MainText,
    PageText, Person, Role, Side,
};

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed key-value pairs from the info file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvitationInfo {
    entries: BTreeMap<String, String>,
}

impl InvitationInfo {
    /// Parses the content of an info file. Never fails: malformed lines are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Reads and parses the info file at `path`.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| Error::Info(format!("{}: {}", path.display(), err)))?;
        let info = Self::parse(&text);
        log::debug!("loaded {} info entries from {}", info.len(), path.display());
        Ok(info)
    }

    /// Returns the value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
