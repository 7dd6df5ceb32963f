// SPDX-License-Identifier: MPL-2.0
//! `iced_intake` is a small image intake window built with the Iced GUI framework.
//!
//! Two upload slots accept images from a file dialog, drag-and-drop or the
//! clipboard and hand them to the application as data URLs. A text popup
//! views and edits a block of notes. Strings are localized with Fluent and
//! preferences persist in a TOML file.

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
