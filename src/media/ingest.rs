// SPDX-License-Identifier: MPL-2.0
//! Turning selected files and pasted blobs into displayable images.
//!
//! Every input mode of the upload widget ends here: the bytes are size
//! checked, sniffed, fully decoded once to prove they are an image, and
//! wrapped into an [`UploadedImage`] carrying both the data URL handed to the
//! parent and a ready-to-draw Iced handle.

use super::data_url::DataUrl;
use crate::error::DecodeError;
use iced::widget::image;
use image_rs::{GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

/// Where the bytes of an upload come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file chosen in the dialog or dropped on the window.
    File(PathBuf),
    /// An in-memory blob taken from the clipboard.
    Blob { mime: String, bytes: Vec<u8> },
}

impl ImageSource {
    /// Short label used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::File(_) => "file",
            ImageSource::Blob { .. } => "clipboard",
        }
    }
}

/// An accepted image, ready to display and to report upstream.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    data_url: DataUrl,
    width: u32,
    height: u32,
    handle: image::Handle,
}

impl UploadedImage {
    /// Validates encoded image bytes and wraps them.
    ///
    /// `declared_mime` is only trusted when the content cannot be sniffed.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`] for the possible causes.
    pub fn from_bytes(
        bytes: Vec<u8>,
        declared_mime: Option<&str>,
        max_bytes: u64,
    ) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::EmptyFile);
        }
        let size = bytes.len() as u64;
        if size > max_bytes {
            return Err(DecodeError::TooLarge {
                size,
                max: max_bytes,
            });
        }

        let format = match image_rs::guess_format(&bytes) {
            Ok(format) => format,
            Err(_) => declared_mime
                .and_then(ImageFormat::from_mime_type)
                .ok_or(DecodeError::NotAnImage)?,
        };

        let decoded = image_rs::load_from_memory_with_format(&bytes, format)
            .map_err(|e| DecodeError::from_image_error(&e))?;
        let (width, height) = decoded.dimensions();

        let data_url = DataUrl::encode(format.to_mime_type(), &bytes);
        let handle = image::Handle::from_bytes(bytes);

        Ok(Self {
            data_url,
            width,
            height,
            handle,
        })
    }

    /// Restores an image from a data URL previously produced by the widget
    /// (or supplied by the parent from elsewhere).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDataUrl`] for malformed URLs and the usual
    /// decode errors when the payload is not an image.
    pub fn from_data_url(input: &str) -> Result<Self, DecodeError> {
        let url = DataUrl::parse(input)?;
        let bytes = url.decode_payload()?;
        Self::from_bytes(bytes, Some(url.mime()), u64::MAX)
    }

    #[must_use]
    pub fn data_url(&self) -> &DataUrl {
        &self.data_url
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

impl PartialEq for UploadedImage {
    fn eq(&self, other: &Self) -> bool {
        self.data_url == other.data_url
    }
}

/// Reads a file and validates it as an image.
///
/// # Errors
///
/// Returns [`DecodeError::Io`] if the file cannot be read, otherwise the
/// errors of [`UploadedImage::from_bytes`].
pub fn load_file(path: &Path, max_bytes: u64) -> Result<UploadedImage, DecodeError> {
    let size = std::fs::metadata(path)
        .map_err(|e| DecodeError::Io(e.to_string()))?
        .len();
    if size > max_bytes {
        return Err(DecodeError::TooLarge {
            size,
            max: max_bytes,
        });
    }
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    UploadedImage::from_bytes(bytes, None, max_bytes)
}

/// Decodes any [`ImageSource`] off the UI thread.
///
/// The blocking read and decode run on tokio's blocking pool so the Iced
/// update loop stays responsive.
pub async fn decode(source: ImageSource, max_bytes: u64) -> Result<UploadedImage, DecodeError> {
    tokio::task::spawn_blocking(move || match source {
        ImageSource::File(path) => load_file(&path, max_bytes),
        ImageSource::Blob { mime, bytes } => {
            UploadedImage::from_bytes(bytes, Some(&mime), max_bytes)
        }
    })
    .await
    .map_err(|e| DecodeError::Io(e.to_string()))?
}

/// Encodes raw RGBA pixels as PNG bytes.
///
/// # Errors
///
/// Returns [`DecodeError::Corrupted`] when the buffer length does not match
/// the dimensions or encoding fails.
pub fn encode_rgba_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>, DecodeError> {
    let buffer = image_rs::RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        DecodeError::Corrupted(format!("pixel buffer does not match {width}x{height}"))
    })?;

    let mut png = Vec::new();
    buffer
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| DecodeError::from_image_error(&e))?;
    Ok(png)
}
