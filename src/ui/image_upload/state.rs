// SPDX-License-Identifier: MPL-2.0
//! Widget-local interaction flags and click dispatch.

use crate::ui::styles::container::DropZone;

/// Transient interaction state of one upload slot.
///
/// Everything here is reset when the slot is created; nothing survives a
/// restart and nothing is shared with the parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// The slot accepts paste and shows its upload button.
    pub focused: bool,
    /// Files are hovering the window and this slot is the drop target.
    pub dragging_over: bool,
    /// The full-size viewer is showing the current image.
    pub viewer_open: bool,
    /// The cursor is over the slot.
    pub hovered: bool,
}

impl InteractionState {
    /// Frame style for the current state.
    ///
    /// An image takes precedence over drag-over, which beats focus.
    #[must_use]
    pub fn drop_zone(&self, has_image: bool) -> DropZone {
        if has_image {
            DropZone::Filled
        } else if self.dragging_over {
            DropZone::DragOver
        } else if self.focused {
            DropZone::Focused
        } else {
            DropZone::Idle
        }
    }

    /// The upload button only appears on an empty, focused slot.
    #[must_use]
    pub fn shows_upload_button(&self, has_image: bool) -> bool {
        self.focused && !has_image
    }
}

/// What a click on the slot body does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Show the current image full size.
    OpenViewer,
    /// Take focus so a paste can land here.
    Focus,
}

impl ClickAction {
    #[must_use]
    pub fn from_presence(has_image: bool) -> Self {
        if has_image {
            ClickAction::OpenViewer
        } else {
            ClickAction::Focus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_never_opens_the_picker() {
        assert_eq!(ClickAction::from_presence(true), ClickAction::OpenViewer);
        assert_eq!(ClickAction::from_presence(false), ClickAction::Focus);
    }

    #[test]
    fn image_wins_over_every_other_look() {
        let state = InteractionState {
            focused: true,
            dragging_over: true,
            ..Default::default()
        };
        assert_eq!(state.drop_zone(true), DropZone::Filled);
        assert_eq!(state.drop_zone(false), DropZone::DragOver);
    }

    #[test]
    fn focus_look_requires_focus() {
        let idle = InteractionState::default();
        assert_eq!(idle.drop_zone(false), DropZone::Idle);

        let focused = InteractionState {
            focused: true,
            ..Default::default()
        };
        assert_eq!(focused.drop_zone(false), DropZone::Focused);
    }

    #[test]
    fn upload_button_visibility() {
        let focused = InteractionState {
            focused: true,
            ..Default::default()
        };
        assert!(focused.shows_upload_button(false));
        assert!(!focused.shows_upload_button(true));
        assert!(!InteractionState::default().shows_upload_button(false));
    }
}
