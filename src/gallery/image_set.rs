// SPDX-License-Identifier: MPL-2.0
//! The ordered photo slots and their load state.
//!
//! Each slot starts on its primary `.jpg` path. Load results arrive as
//! [`SlotEvent`] messages; the first failure switches the slot to its `.jpeg`
//! fallback once, a second failure marks it broken.

use crate::app::paths;
use crate::config::{FALLBACK_EXTENSION, PHOTO_PREFIX, PRIMARY_EXTENSION};
use crate::error::ImageError;
use iced::widget::image;
use std::path::{Path, PathBuf};

use super::settings::SlotCount;

/// Decoded grid thumbnail of one slot, plus the size of the full photo.
///
/// The full photo is not kept in memory; the lightbox reads it from the
/// slot's path through [`Slot::full_handle`].
#[derive(Debug, Clone)]
pub struct SlotImage {
    /// Downscaled handle for the grid.
    pub thumbnail: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl SlotImage {
    /// Wraps the thumbnail pixels; `width` and `height` describe the full photo.
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        thumb_width: u32,
        thumb_height: u32,
        thumb_pixels: Vec<u8>,
    ) -> Self {
        Self {
            thumbnail: image::Handle::from_rgba(thumb_width, thumb_height, thumb_pixels),
            width,
            height,
        }
    }
}

/// Where a slot is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Pending,
    Loaded,
    /// Both the primary and the fallback path failed.
    Broken,
}

/// Candidate paths of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSource {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl SlotSource {
    /// `<site>/photo/img{index+1}.jpg` and its `.jpeg` twin.
    #[must_use]
    pub fn for_index(site_dir: &Path, index: usize) -> Self {
        let stem = format!("{}{}", PHOTO_PREFIX, index + 1);
        let dir = paths::photo_dir(site_dir);
        Self {
            primary: dir.join(format!("{}.{}", stem, PRIMARY_EXTENSION)),
            fallback: dir.join(format!("{}.{}", stem, FALLBACK_EXTENSION)),
        }
    }
}

/// One photo position.
#[derive(Debug, Clone)]
pub struct Slot {
    source: SlotSource,
    path: PathBuf,
    fallback_armed: bool,
    status: SlotStatus,
    image: Option<SlotImage>,
}

impl Slot {
    fn new(source: SlotSource) -> Self {
        Self {
            path: source.primary.clone(),
            source,
            fallback_armed: true,
            status: SlotStatus::Pending,
            image: None,
        }
    }

    /// The path last attempted or successfully loaded.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn source(&self) -> &SlotSource {
        &self.source
    }

    #[must_use]
    pub fn status(&self) -> SlotStatus {
        self.status
    }

    #[must_use]
    pub fn image(&self) -> Option<&SlotImage> {
        self.image.as_ref()
    }

    /// Handle for the full-size photo, decoded by the renderer when drawn.
    /// `None` until the slot has loaded.
    #[must_use]
    pub fn full_handle(&self) -> Option<image::Handle> {
        (self.status == SlotStatus::Loaded).then(|| image::Handle::from_path(&self.path))
    }
}

/// A request to decode the file at `path` for slot `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub index: usize,
    pub path: PathBuf,
}

/// Outcome of a load request.
#[derive(Debug, Clone)]
pub enum SlotEvent {
    Loaded {
        index: usize,
        path: PathBuf,
        image: SlotImage,
    },
    Failed {
        index: usize,
        path: PathBuf,
        error: ImageError,
    },
}

impl SlotEvent {
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            SlotEvent::Loaded { index, .. } | SlotEvent::Failed { index, .. } => *index,
        }
    }
}

/// Ordered, index-addressable photo slots.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    slots: Vec<Slot>,
}

impl ImageSet {
    /// Creates one pending slot per index, each pointing at its primary path.
    #[must_use]
    pub fn new(site_dir: &Path, count: SlotCount) -> Self {
        let slots = (0..count.value())
            .map(|index| Slot::new(SlotSource::for_index(site_dir, index)))
            .collect();
        Self { slots }
    }

    /// Load requests for every slot's current path.
    #[must_use]
    pub fn initial_requests(&self) -> Vec<LoadRequest> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| LoadRequest {
                index,
                path: slot.path.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The loadable path of slot `index`.
    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.slots.get(index).map(Slot::path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Records a load outcome. Returns a follow-up request when the slot
    /// switched to its fallback path.
    pub fn apply(&mut self, event: SlotEvent) -> Option<LoadRequest> {
        let index = event.index();
        let Some(slot) = self.slots.get_mut(index) else {
            log::debug!("ignoring load result for unknown slot {}", index);
            return None;
        };

        match event {
            SlotEvent::Loaded { path, image, .. } => {
                if path != slot.path {
                    log::debug!("ignoring stale load of {}", path.display());
                    return None;
                }
                slot.path = path;
                slot.status = SlotStatus::Loaded;
                slot.image = Some(image);
                None
            }
            SlotEvent::Failed { path, error, .. } => {
                if path != slot.path {
                    log::debug!("ignoring stale failure of {}", path.display());
                    return None;
                }
                if slot.fallback_armed {
                    slot.fallback_armed = false;
                    slot.path = slot.source.fallback.clone();
                    log::debug!(
                        "slot {} failed on {} ({}), trying {}",
                        index,
                        path.display(),
                        error,
                        slot.path.display()
                    );
                    return Some(LoadRequest {
                        index,
                        path: slot.path.clone(),
                    });
                }
                slot.status = SlotStatus::Broken;
                slot.image = None;
                log::warn!("photo slot {} is unavailable: {}", index, error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_image() -> SlotImage {
        SlotImage::new(1, 1, 1, 1, vec![0; 4])
    }

    fn set(count: usize) -> ImageSet {
        ImageSet::new(Path::new("/site"), SlotCount::new(count))
    }

    fn failed(index: usize, path: &Path) -> SlotEvent {
        SlotEvent::Failed {
            index,
            path: path.to_path_buf(),
            error: ImageError::NotFound(path.display().to_string()),
        }
    }

    #[test]
    fn slots_use_one_based_file_names() {
        let set = set(10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.path(0), Some(Path::new("/site/photo/img1.jpg")));
        assert_eq!(set.path(9), Some(Path::new("/site/photo/img10.jpg")));
        assert_eq!(
            set.get(2).map(|s| s.source().fallback.clone()),
            Some(PathBuf::from("/site/photo/img3.jpeg"))
        );
    }

    #[test]
    fn slot_sources_live_in_the_site_photo_dir() {
        let site = Path::new("/srv/wedding");
        let source = SlotSource::for_index(site, 0);
        let photo_dir = paths::photo_dir(site);
        assert_eq!(source.primary.parent(), Some(photo_dir.as_path()));
        assert_eq!(source.fallback.parent(), Some(photo_dir.as_path()));
    }

    #[test]
    fn initial_requests_cover_every_slot() {
        let requests = set(3).initial_requests();
        let indices: Vec<usize> = requests.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(requests[1].path, PathBuf::from("/site/photo/img2.jpg"));
    }

    #[test]
    fn first_failure_switches_to_fallback() {
        let mut set = set(10);
        let primary = PathBuf::from("/site/photo/img3.jpg");

        let retry = set.apply(failed(2, &primary));

        let fallback = PathBuf::from("/site/photo/img3.jpeg");
        assert_eq!(
            retry,
            Some(LoadRequest {
                index: 2,
                path: fallback.clone()
            })
        );
        assert_eq!(set.path(2), Some(fallback.as_path()));
        assert_eq!(set.get(2).map(Slot::status), Some(SlotStatus::Pending));
    }

    #[test]
    fn fallback_fires_at_most_once() {
        let mut set = set(10);
        let fallback = PathBuf::from("/site/photo/img3.jpeg");
        assert!(set.apply(failed(2, Path::new("/site/photo/img3.jpg"))).is_some());

        let retry = set.apply(failed(2, &fallback));

        assert!(retry.is_none());
        assert_eq!(set.get(2).map(Slot::status), Some(SlotStatus::Broken));
        assert_eq!(set.path(2), Some(fallback.as_path()));
    }

    #[test]
    fn loaded_event_records_image() {
        let mut set = set(2);
        let path = PathBuf::from("/site/photo/img1.jpg");
        set.apply(SlotEvent::Loaded {
            index: 0,
            path: path.clone(),
            image: tiny_image(),
        });

        let slot = set.get(0).expect("slot 0");
        assert_eq!(slot.status(), SlotStatus::Loaded);
        assert!(slot.image().is_some());
        assert_eq!(slot.path(), path.as_path());
    }

    #[test]
    fn full_handle_reads_from_the_resolved_path() {
        let mut set = set(3);
        assert!(set.get(2).and_then(Slot::full_handle).is_none());

        set.apply(failed(2, Path::new("/site/photo/img3.jpg")));
        let fallback = PathBuf::from("/site/photo/img3.jpeg");
        set.apply(SlotEvent::Loaded {
            index: 2,
            path: fallback.clone(),
            image: tiny_image(),
        });

        match set.get(2).and_then(Slot::full_handle) {
            Some(image::Handle::Path(_, path)) => assert_eq!(path, fallback),
            other => panic!("expected a path handle, got {:?}", other),
        }
    }

    #[test]
    fn stale_primary_result_after_fallback_is_ignored() {
        let mut set = set(1);
        let primary = PathBuf::from("/site/photo/img1.jpg");
        set.apply(failed(0, &primary));

        let retry = set.apply(failed(0, &primary));

        assert!(retry.is_none());
        assert_eq!(set.get(0).map(Slot::status), Some(SlotStatus::Pending));
    }

    #[test]
    fn out_of_range_event_is_ignored() {
        let mut set = set(1);
        assert!(set.apply(failed(5, Path::new("/x.jpg"))).is_none());
    }
}
