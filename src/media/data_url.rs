// SPDX-License-Identifier: MPL-2.0
//! `data:` URL encoding for image payloads.
//!
//! Only the base64 form is produced or accepted (`data:<mime>;base64,<payload>`),
//! which is what the upload widget hands to its parent.

use crate::error::DecodeError;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A self-contained image representation usable directly as a display source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Full `data:` string.
    encoded: String,
    /// Length of the MIME type, which starts right after `data:`.
    mime_len: usize,
}

impl DataUrl {
    /// Encodes raw bytes under the given MIME type.
    #[must_use]
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let payload = STANDARD.encode(bytes);
        let mut encoded =
            String::with_capacity(SCHEME.len() + mime.len() + BASE64_MARKER.len() + payload.len());
        encoded.push_str(SCHEME);
        encoded.push_str(mime);
        encoded.push_str(BASE64_MARKER);
        encoded.push_str(&payload);

        Self {
            encoded,
            mime_len: mime.len(),
        }
    }

    /// Parses a data URL string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDataUrl`] when the string is not a base64
    /// `data:image/...` URL.
    pub fn parse(input: &str) -> Result<Self, DecodeError> {
        let rest = input
            .strip_prefix(SCHEME)
            .ok_or(DecodeError::InvalidDataUrl)?;
        let marker = rest
            .find(BASE64_MARKER)
            .ok_or(DecodeError::InvalidDataUrl)?;
        let mime = &rest[..marker];
        if !mime.starts_with("image/") {
            return Err(DecodeError::InvalidDataUrl);
        }

        Ok(Self {
            encoded: input.to_string(),
            mime_len: marker,
        })
    }

    /// MIME type, e.g. `image/png`.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.encoded[SCHEME.len()..SCHEME.len() + self.mime_len]
    }

    /// The full `data:` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Base64 payload without the header.
    fn payload(&self) -> &str {
        &self.encoded[SCHEME.len() + self.mime_len + BASE64_MARKER.len()..]
    }

    /// Decodes the payload back into the original bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDataUrl`] if the payload is not valid base64.
    pub fn decode_payload(&self) -> Result<Vec<u8>, DecodeError> {
        STANDARD
            .decode(self.payload())
            .map_err(|_| DecodeError::InvalidDataUrl)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
