// SPDX-License-Identifier: MPL-2.0
//! Modal viewer state: which photo is shown and whether the lightbox is open.

use crate::error::GalleryError;

/// Open flag and active index of the lightbox.
///
/// Created closed at index 0. Closing keeps the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    current_index: usize,
    is_open: bool,
}

impl ViewerState {
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the viewer at `index`. Fails without changes when `index >= len`.
    pub fn open(&mut self, index: usize, len: usize) -> Result<(), GalleryError> {
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        self.current_index = index;
        self.is_open = true;
        Ok(())
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Moves to `index` without touching the open flag.
    pub(crate) fn set_index(&mut self, index: usize) {
        self.current_index = index;
    }
}
