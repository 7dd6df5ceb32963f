// SPDX-License-Identifier: MPL-2.0
//! Image ingestion: data URLs, file and blob decoding, clipboard access.

pub mod clipboard;
pub mod data_url;
pub mod ingest;

pub use clipboard::{first_image_item, ClipboardItem, ClipboardSource, SystemClipboard};
pub use data_url::DataUrl;
pub use ingest::{ImageSource, UploadedImage};

/// File extensions offered by the file dialog when the config has none.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tiff", "tif",
];
