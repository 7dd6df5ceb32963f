// SPDX-License-Identifier: MPL-2.0
//! Clipboard enumeration for the paste input mode.
//!
//! The system clipboard is reduced to a list of typed items so that the
//! "first image item wins" rule can be applied without caring about the
//! platform backend.

use super::ingest::{encode_rgba_png, ImageSource};
use crate::error::{Error, Result};

/// One entry of the clipboard, tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Whether the MIME type names an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.contains("image")
    }

    /// Turns the item into a blob source for decoding.
    #[must_use]
    pub fn into_source(self) -> ImageSource {
        ImageSource::Blob {
            mime: self.mime,
            bytes: self.bytes,
        }
    }
}

/// Returns the first image-typed entry, if any.
pub fn first_image_item(items: Vec<ClipboardItem>) -> Option<ClipboardItem> {
    items.into_iter().find(ClipboardItem::is_image)
}

/// Something that can list the current clipboard contents.
pub trait ClipboardSource {
    /// Lists the clipboard entries in their native order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the clipboard cannot be opened.
    fn items(&mut self) -> Result<Vec<ClipboardItem>>;
}

/// The platform clipboard, accessed through `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Opens the platform clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] on headless systems or when access is denied.
    pub fn open() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSource for SystemClipboard {
    fn items(&mut self) -> Result<Vec<ClipboardItem>> {
        let mut items = Vec::new();

        // Text slot is listed ahead of the bitmap slot.
        if let Ok(text) = self.inner.get_text() {
            items.push(ClipboardItem::new("text/plain", text.into_bytes()));
        }

        match self.inner.get_image() {
            Ok(img) => {
                let width = u32::try_from(img.width)
                    .map_err(|_| Error::Clipboard("clipboard image too wide".into()))?;
                let height = u32::try_from(img.height)
                    .map_err(|_| Error::Clipboard("clipboard image too tall".into()))?;
                let png = encode_rgba_png(width, height, img.bytes.into_owned())?;
                items.push(ClipboardItem::new("image/png", png));
            }
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => return Err(err.into()),
        }

        Ok(items)
    }
}

/// Reads the system clipboard on the blocking pool.
pub async fn read_system_items() -> Result<Vec<ClipboardItem>> {
    tokio::task::spawn_blocking(|| SystemClipboard::open()?.items())
        .await
        .map_err(|e| Error::Clipboard(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard(Vec<ClipboardItem>);

    impl ClipboardSource for FakeClipboard {
        fn items(&mut self) -> Result<Vec<ClipboardItem>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn first_image_item_skips_text_entries() {
        let mut clipboard = FakeClipboard(vec![
            ClipboardItem::new("text/plain", b"hello".to_vec()),
            ClipboardItem::new("image/png", vec![1]),
            ClipboardItem::new("image/jpeg", vec![2]),
        ]);

        let picked = first_image_item(clipboard.items().unwrap()).expect("an image item");
        assert_eq!(picked.mime, "image/png");
        assert_eq!(picked.bytes, vec![1]);
    }

    #[test]
    fn first_image_item_is_none_without_images() {
        let items = vec![
            ClipboardItem::new("text/plain", b"a".to_vec()),
            ClipboardItem::new("text/html", b"<b>a</b>".to_vec()),
        ];
        assert!(first_image_item(items).is_none());
    }

    #[test]
    fn into_source_keeps_mime_and_bytes() {
        let source = ClipboardItem::new("image/gif", vec![7, 8]).into_source();
        assert_eq!(
            source,
            ImageSource::Blob {
                mime: "image/gif".into(),
                bytes: vec![7, 8]
            }
        );
    }
}
