// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions worth keeping for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Image Upload
    // ==========================================================================
    /// An upload slot took keyboard focus.
    FocusUpload { slot: String },

    /// The file dialog was opened from an upload slot.
    OpenFileDialog { slot: String },

    /// A decode was started.
    SelectImage {
        slot: String,
        /// `file` or `clipboard`.
        source: String,
    },

    /// A decoded image was handed to the parent.
    AcceptImage { slot: String, width: u32, height: u32 },

    /// A paste was requested but not acted on.
    IgnorePaste { slot: String, reason: String },

    /// The full-size viewer was opened.
    OpenViewer { slot: String },

    // ==========================================================================
    // Text Popup
    // ==========================================================================
    /// The popup was opened.
    OpenTextPopup { editing: bool },

    /// The edited text was committed.
    SaveText { chars: usize },

    /// The popup was dismissed.
    CloseTextPopup,

    // ==========================================================================
    // Application
    // ==========================================================================
    /// The theme mode was cycled from the header.
    ChangeTheme { mode: String },
}

/// Categories of errors recorded in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input/output error (file read/write failures).
    IoError,
    /// Image decoding error.
    DecodeError,
    /// Clipboard could not be opened or read.
    ClipboardError,
    /// Settings could not be read or written.
    ConfigError,
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { message: String },
    Error { error_type: ErrorType, message: String },
}

/// A diagnostic event with its wall-clock time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
