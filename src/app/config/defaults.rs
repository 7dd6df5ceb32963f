// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Size limit for images accepted by the upload widget
//! - **Popup**: Initial and minimum size of the text popup

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default maximum size of an accepted image (in megabytes).
pub const DEFAULT_MAX_FILE_SIZE_MB: u32 = 25;

/// Minimum allowed upload limit (in megabytes).
pub const MIN_MAX_FILE_SIZE_MB: u32 = 1;

/// Maximum allowed upload limit (in megabytes).
pub const MAX_MAX_FILE_SIZE_MB: u32 = 200;

// ==========================================================================
// Popup Defaults
// ==========================================================================

/// Default popup width in logical pixels.
pub const DEFAULT_POPUP_WIDTH: f32 = 600.0;

/// Default popup height in logical pixels.
pub const DEFAULT_POPUP_HEIGHT: f32 = 500.0;

/// The popup never shrinks below this edge length.
pub const MIN_POPUP_EDGE: f32 = 300.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_FILE_SIZE_MB <= DEFAULT_MAX_FILE_SIZE_MB);
    assert!(DEFAULT_MAX_FILE_SIZE_MB <= MAX_MAX_FILE_SIZE_MB);
    assert!(DEFAULT_POPUP_WIDTH >= MIN_POPUP_EDGE);
    assert!(DEFAULT_POPUP_HEIGHT >= MIN_POPUP_EDGE);
};
