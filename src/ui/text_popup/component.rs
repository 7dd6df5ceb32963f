// SPDX-License-Identifier: MPL-2.0
//! Text popup component: the state machine plus the editor widget state.

use super::state::{Event, Mode, PopupState};
use crate::app::config::defaults::MIN_POPUP_EDGE;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::text_editor;
use iced::{event, Size, Subscription};

/// Share of the window the popup may cover along each axis.
const MAX_WINDOW_SHARE: f32 = 0.9;

#[derive(Debug, Clone)]
pub enum Message {
    Edit,
    Cancel,
    Save,
    Close,
    EditorAction(text_editor::Action),
    Key(KeyShortcut),
}

/// Keyboard shortcuts understood while the popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShortcut {
    /// Cancel in Editing, Close in Viewing.
    Escape,
    /// Ctrl/Cmd+S.
    Save,
}

#[derive(Debug)]
pub struct TextPopup {
    state: PopupState,
    content: text_editor::Content,
    size: (f32, f32),
}

impl TextPopup {
    /// Opens on `text`. `size` is clamped to the minimum popup edge.
    pub fn new(text: impl Into<String>, is_editing: bool, size: (f32, f32)) -> Self {
        let state = PopupState::new(text, is_editing);
        let content = text_editor::Content::with_text(state.original());
        Self {
            state,
            content,
            size: (size.0.max(MIN_POPUP_EDGE), size.1.max(MIN_POPUP_EDGE)),
        }
    }

    /// Applies a message and returns the parent events, `Save` before `Close`.
    pub fn handle_message(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Edit => {
                let events = self.state.edit();
                self.reset_editor();
                events
            }
            Message::Cancel => {
                let events = self.state.cancel();
                self.reset_editor();
                events
            }
            Message::Save => self.state.save(),
            Message::Close => self.state.close(),
            Message::EditorAction(action) => {
                if self.state.mode() == Mode::Editing {
                    let is_edit = action.is_edit();
                    self.content.perform(action);
                    if is_edit {
                        self.state.set_buffer(self.content.text());
                    }
                }
                Vec::new()
            }
            Message::Key(KeyShortcut::Escape) => match self.state.mode() {
                Mode::Editing => self.handle_message(Message::Cancel),
                Mode::Viewing => self.state.close(),
            },
            Message::Key(KeyShortcut::Save) => self.state.save(),
        }
    }

    /// Keyboard shortcuts, active for as long as the popup exists.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(shortcut_listener)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    #[must_use]
    pub fn state(&self) -> &PopupState {
        &self.state
    }

    #[must_use]
    pub fn content(&self) -> &text_editor::Content {
        &self.content
    }

    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    /// Configured size, capped to 90% of the window on each axis.
    #[must_use]
    pub fn fitted_size(&self, window: Size) -> (f32, f32) {
        (
            self.size.0.min(window.width * MAX_WINDOW_SHARE),
            self.size.1.min(window.height * MAX_WINDOW_SHARE),
        )
    }

    fn reset_editor(&mut self) {
        self.content = text_editor::Content::with_text(self.state.buffer());
    }
}

fn shortcut_listener(
    event: iced::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::Key(KeyShortcut::Escape)),
        Key::Character(c) if modifiers.command() && c.eq_ignore_ascii_case("s") => {
            Some(Message::Key(KeyShortcut::Save))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup(text: &str, editing: bool) -> TextPopup {
        TextPopup::new(text, editing, (600.0, 500.0))
    }

    #[test]
    fn size_is_clamped_to_minimum() {
        let small = TextPopup::new("", false, (100.0, 900.0));
        assert_eq!(small.size(), (MIN_POPUP_EDGE, 900.0));
    }

    #[test]
    fn escape_cancels_while_editing() {
        let mut popup = popup("notes", true);
        assert!(popup.handle_message(Message::Key(KeyShortcut::Escape)).is_empty());
        assert_eq!(popup.mode(), Mode::Viewing);
    }

    #[test]
    fn escape_closes_while_viewing() {
        let mut popup = popup("notes", false);
        assert_eq!(
            popup.handle_message(Message::Key(KeyShortcut::Escape)),
            vec![Event::Close]
        );
    }

    #[test]
    fn save_shortcut_only_in_editing() {
        let mut viewing = popup("a", false);
        assert!(viewing.handle_message(Message::Key(KeyShortcut::Save)).is_empty());

        let mut editing = popup("a", true);
        assert_eq!(
            editing.handle_message(Message::Key(KeyShortcut::Save)),
            vec![Event::Save("a".into()), Event::Close]
        );
    }

    #[test]
    fn typing_updates_the_buffer() {
        let mut popup = popup("", true);
        for c in "hi".chars() {
            popup.handle_message(Message::EditorAction(text_editor::Action::Edit(
                text_editor::Edit::Insert(c),
            )));
        }
        assert_eq!(popup.state().buffer(), "hi");
        assert_eq!(
            popup.handle_message(Message::Save),
            vec![Event::Save("hi".into()), Event::Close]
        );
    }

    #[test]
    fn edits_are_ignored_while_viewing() {
        let mut popup = popup("fixed", false);
        popup.handle_message(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));
        assert_eq!(popup.state().buffer(), "fixed");
    }

    #[test]
    fn cancel_then_edit_starts_from_original() {
        let mut popup = popup("base", true);
        popup.handle_message(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('!'),
        )));
        popup.handle_message(Message::Cancel);
        popup.handle_message(Message::Edit);
        assert_eq!(popup.state().buffer(), "base");
        assert_eq!(popup.content().text(), "base");
    }

    fn type_into(popup: &mut TextPopup, edits: &[text_editor::Edit]) {
        for edit in edits {
            popup.handle_message(Message::EditorAction(text_editor::Action::Edit(
                edit.clone(),
            )));
        }
    }

    #[test]
    fn typed_newline_is_kept() {
        let mut popup = popup("", true);
        type_into(
            &mut popup,
            &[text_editor::Edit::Insert('h'), text_editor::Edit::Enter],
        );
        assert_eq!(popup.state().buffer(), "h\n");
        assert_eq!(
            popup.handle_message(Message::Save),
            vec![Event::Save("h\n".into()), Event::Close]
        );
    }

    #[test]
    fn trailing_newline_survives_an_edit() {
        let mut popup = popup("line1\nline2\n", true);
        type_into(&mut popup, &[text_editor::Edit::Insert('X')]);
        assert_eq!(
            popup.handle_message(Message::Save),
            vec![Event::Save("Xline1\nline2\n".into()), Event::Close]
        );
    }

    #[test]
    fn size_is_capped_by_the_window() {
        let popup = TextPopup::new("", false, (1600.0, 1200.0));
        assert_eq!(
            popup.fitted_size(Size::new(1000.0, 800.0)),
            (900.0, 720.0)
        );
        assert_eq!(
            popup.fitted_size(Size::new(4000.0, 4000.0)),
            (1600.0, 1200.0)
        );
    }
}
