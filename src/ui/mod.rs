// SPDX-License-Identifier: MPL-2.0
//! User interface components and shared styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its interaction state and reports effects or events to the parent.
//!
//! # Components
//!
//! - [`image_upload`] - Upload slot with file picker, drag-and-drop and paste
//! - [`image_viewer`] - Fullscreen preview of an uploaded image
//! - [`text_popup`] - Modal that views and edits a block of text
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod image_upload;
pub mod image_viewer;
pub mod notifications;
pub mod styles;
pub mod text_popup;
pub mod theming;
