// SPDX-License-Identifier: MPL-2.0
//! Image upload slot.
//!
//! A slot accepts an image three ways: the file dialog, a file dropped on the
//! window, or a clipboard paste while the slot is focused. Accepted bytes are
//! decoded off the UI thread and reported to the parent as an
//! [`UploadedImage`](crate::media::UploadedImage) carrying its data URL.

mod component;
mod state;
mod view;

pub use component::{Effect, Message, PasteSkip, State};
pub use state::{ClickAction, InteractionState};
pub use view::{view, ViewContext};
