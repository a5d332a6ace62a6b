//! Per-employee profile image cache
//!
//! Maps employee identifiers to a resolved display image or a placeholder
//! marker. A `Resolved` slot owns its decoded bytes through an `Arc`; the
//! handle is released whenever the entry is replaced, removed on delete, or
//! the cache is cleared (and with it, on view teardown when the cache is
//! dropped). The placeholder is a sentinel, never a held resource.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::{Image, ImageFormat};

/// Display reference for one employee's avatar.
#[derive(Clone)]
pub enum ImageSlot {
    Resolved(Arc<Image>),
    Placeholder,
}

/// Identifier → image-slot mapping, rebuilt lazily per load cycle.
#[derive(Default)]
pub struct ImageCache {
    slots: HashMap<i64, ImageSlot>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&ImageSlot> {
        self.slots.get(&id)
    }

    /// Resolved image for `id`, if any. Used for the edit-form preview.
    pub fn resolved(&self, id: i64) -> Option<Arc<Image>> {
        match self.slots.get(&id) {
            Some(ImageSlot::Resolved(image)) => Some(image.clone()),
            _ => None,
        }
    }

    /// Install a fetched image. A previous slot for the same id is dropped,
    /// releasing its handle.
    pub fn insert_resolved(&mut self, id: i64, image: Arc<Image>) {
        self.slots.insert(id, ImageSlot::Resolved(image));
    }

    /// Permanent fallback for this load cycle; no retry.
    pub fn insert_placeholder(&mut self, id: i64) {
        self.slots.insert(id, ImageSlot::Placeholder);
    }

    /// Drop the slot for a deleted employee, releasing any held handle.
    pub fn remove(&mut self, id: i64) {
        self.slots.remove(&id);
    }

    /// Drop every slot whose id fails the predicate. Used after a reload to
    /// shed entries for records that disappeared server-side.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(i64) -> bool,
    {
        self.slots.retain(|id, _| keep(*id));
    }
}

/// Build a displayable image from raw fetched bytes, sniffing the format
/// from the leading magic bytes. Unknown formats are treated as a failed
/// load and fall back to the placeholder.
pub fn image_from_bytes(bytes: Vec<u8>) -> Option<Arc<Image>> {
    let format = sniff_format(&bytes)?;
    Some(Arc::new(Image::from_bytes(format, bytes)))
}

fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some(ImageFormat::Gif)
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some(ImageFormat::Webp)
    } else if bytes.starts_with(b"BM") {
        Some(ImageFormat::Bmp)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_leaves_no_reference_behind() {
        let mut cache = ImageCache::new();
        cache.insert_placeholder(1);
        cache.insert_placeholder(2);
        assert!(cache.contains(1));

        cache.remove(1);
        assert!(!cache.contains(1));
        assert!(cache.get(1).is_none());
        assert!(cache.contains(2));
    }

    #[test]
    fn placeholder_is_not_a_resolved_handle() {
        let mut cache = ImageCache::new();
        cache.insert_placeholder(5);
        assert!(matches!(cache.get(5), Some(ImageSlot::Placeholder)));
        assert!(cache.resolved(5).is_none());
    }

    #[test]
    fn retain_sheds_entries_for_missing_ids() {
        let mut cache = ImageCache::new();
        cache.insert_placeholder(1);
        cache.insert_placeholder(2);
        cache.insert_placeholder(3);
        cache.retain(|id| id == 2);
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert!(!cache.contains(3));
    }

    #[test]
    fn sniffs_common_formats_and_rejects_garbage() {
        assert_eq!(
            sniff_format(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]),
            Some(ImageFormat::Png)
        );
        assert_eq!(sniff_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(sniff_format(b"GIF89a..."), Some(ImageFormat::Gif));
        assert_eq!(sniff_format(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(sniff_format(b"BM\x00\x00"), Some(ImageFormat::Bmp));
        assert_eq!(sniff_format(b"<html>not an image</html>"), None);
        assert!(image_from_bytes(b"junk".to_vec()).is_none());
    }
}
