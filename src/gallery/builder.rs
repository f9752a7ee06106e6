// SPDX-License-Identifier: MPL-2.0
//! Slot construction and photo decoding.
//!
//! [`build`] creates the slot list and the initial load requests. Decoding
//! runs on the tokio blocking pool; each result comes back to the update loop
//! as a [`SlotEvent`].

use super::image_set::{ImageSet, LoadRequest, SlotEvent, SlotImage};
use super::settings::SlotCount;
use crate::config::THUMBNAIL_SIZE;
use crate::error::ImageError;
use iced::Task;
use image_rs::GenericImageView;
use std::path::Path;

/// Creates the slots for `count` photos under `site_dir` and one primary
/// load request per slot.
#[must_use]
pub fn build(site_dir: &Path, count: SlotCount) -> (ImageSet, Vec<LoadRequest>) {
    let images = ImageSet::new(site_dir, count);
    let requests = images.initial_requests();
    log::debug!(
        "building gallery with {} slots from {}",
        images.len(),
        site_dir.display()
    );
    (images, requests)
}

/// Turns load requests into tasks that report back through `on_done`.
pub fn load_tasks<Message, F>(requests: Vec<LoadRequest>, on_done: F) -> Task<Message>
where
    Message: Send + 'static,
    F: Fn(SlotEvent) -> Message + Clone + Send + 'static,
{
    Task::batch(
        requests
            .into_iter()
            .map(|request| Task::perform(load_slot(request), on_done.clone())),
    )
}

/// Decodes the file at `path` into a grid thumbnail. Only the dimensions of
/// the full photo are kept.
pub fn decode(path: &Path) -> Result<SlotImage, ImageError> {
    let img = image_rs::open(path)?;
    let (width, height) = img.dimensions();

    let thumb = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    let (thumb_width, thumb_height) = thumb.dimensions();

    Ok(SlotImage::new(
        width,
        height,
        thumb_width,
        thumb_height,
        thumb.to_rgba8().into_vec(),
    ))
}

/// Decodes one slot off the update thread.
pub async fn load_slot(request: LoadRequest) -> SlotEvent {
    let LoadRequest { index, path } = request;
    let decode_path = path.clone();
    let result = tokio::task::spawn_blocking(move || decode(&decode_path))
        .await
        .unwrap_or_else(|e| Err(ImageError::TaskFailed(e.to_string())));

    match result {
        Ok(image) => SlotEvent::Loaded { index, path, image },
        Err(error) => SlotEvent::Failed { index, path, error },
    }
}
