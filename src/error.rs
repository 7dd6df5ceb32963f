// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Clipboard(String),
    Decode(DecodeError),
}

/// Reasons an image could not be turned into a data URL.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The selected file or clipboard blob has no bytes.
    EmptyFile,

    /// The bytes do not look like any image format.
    NotAnImage,

    /// The format was recognized but this build cannot decode it.
    UnsupportedFormat(String),

    /// The header was recognized but the pixel data is broken.
    Corrupted(String),

    /// The payload exceeds the configured upload limit.
    TooLarge { size: u64, max: u64 },

    /// The file could not be read.
    Io(String),

    /// A string handed back by the parent is not a base64 image data URL.
    InvalidDataUrl,
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::EmptyFile => "error-decode-empty",
            DecodeError::NotAnImage => "error-decode-not-an-image",
            DecodeError::UnsupportedFormat(_) => "error-decode-unsupported-format",
            DecodeError::Corrupted(_) => "error-decode-corrupted",
            DecodeError::TooLarge { .. } => "error-decode-too-large",
            DecodeError::Io(_) => "error-decode-io",
            DecodeError::InvalidDataUrl => "error-decode-invalid-data-url",
        }
    }

    /// Maps an `image` crate failure onto the variant the user should see.
    pub fn from_image_error(err: &image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match err {
            ImageError::Unsupported(inner) => DecodeError::UnsupportedFormat(inner.to_string()),
            ImageError::Decoding(inner) => DecodeError::Corrupted(inner.to_string()),
            ImageError::Limits(inner) => DecodeError::Corrupted(inner.to_string()),
            ImageError::IoError(inner) => DecodeError::Io(inner.to_string()),
            other => DecodeError::Corrupted(other.to_string()),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptyFile => write!(f, "File is empty"),
            DecodeError::NotAnImage => write!(f, "File is not an image"),
            DecodeError::UnsupportedFormat(msg) => write!(f, "Unsupported image format: {}", msg),
            DecodeError::Corrupted(msg) => write!(f, "Image data is corrupted: {}", msg),
            DecodeError::TooLarge { size, max } => {
                write!(f, "Image is too large: {} bytes (limit {} bytes)", size, max)
            }
            DecodeError::Io(msg) => write!(f, "I/O error: {}", msg),
            DecodeError::InvalidDataUrl => write!(f, "Not a base64 image data URL"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn decode_error_wraps_into_error() {
        let err: Error = DecodeError::EmptyFile.into();
        assert_eq!(err, Error::Decode(DecodeError::EmptyFile));
        assert!(format!("{}", err).contains("empty"));
    }

    #[test]
    fn decode_error_i18n_keys() {
        assert_eq!(DecodeError::EmptyFile.i18n_key(), "error-decode-empty");
        assert_eq!(
            DecodeError::TooLarge { size: 2, max: 1 }.i18n_key(),
            "error-decode-too-large"
        );
        assert_eq!(
            DecodeError::InvalidDataUrl.i18n_key(),
            "error-decode-invalid-data-url"
        );
    }

    #[test]
    fn too_large_display_mentions_both_sizes() {
        let err = DecodeError::TooLarge { size: 300, max: 100 };
        let text = format!("{}", err);
        assert!(text.contains("300"));
        assert!(text.contains("100"));
    }

    #[test]
    fn truncated_png_maps_to_decode_error() {
        let truncated = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        let err = image_rs::load_from_memory(&truncated).expect_err("truncated png must fail");
        let mapped = DecodeError::from_image_error(&err);
        assert!(matches!(
            mapped,
            DecodeError::Corrupted(_) | DecodeError::Io(_) | DecodeError::UnsupportedFormat(_)
        ));
    }
}
