// SPDX-License-Identifier: MPL-2.0
//! Modal popup for viewing or editing a block of text.
//!
//! The parent opens a [`TextPopup`] on its current text and reacts to the
//! returned [`Event`]s: `Save` carries the committed text and is always
//! followed by `Close`.

mod component;
mod state;
mod view;

pub use component::{KeyShortcut, Message, TextPopup};
pub use state::{Event, Mode, PopupState};
pub use view::view;
