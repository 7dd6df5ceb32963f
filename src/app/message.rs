// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Slot;
use crate::error::Error;
use crate::ui::image_upload;
use crate::ui::notifications;
use crate::ui::text_popup;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(Slot, image_upload::Message),
    Popup(text_popup::Message),
    /// Open the notes popup, directly in edit mode when `editing`.
    OpenNotes {
        editing: bool,
    },
    NotesLoaded(Result<String, Error>),
    CycleTheme,
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry.
    Tick(Instant),
    /// A file is hovering the window (one message per file).
    FileHovered,
    FileDropped(PathBuf),
    FilesHoveredLeft,
    WindowResized(iced::Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_INTAKE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Text file preloaded as the notes shown in the popup.
    pub notes: Option<PathBuf>,
    /// Dump the activity log as JSON to stderr when the window closes.
    pub activity_log: bool,
}
