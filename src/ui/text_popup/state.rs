// SPDX-License-Identifier: MPL-2.0
//! Viewing/Editing state machine of the text popup.
//!
//! Transitions are pure: they mutate the state and return the events the
//! parent must see, in order. An action that is not valid in the current
//! mode returns no events and leaves the state untouched.

/// Which face of the popup is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
}

/// Notifications for the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Commit this text as the new value.
    Save(String),
    /// Dismiss the popup.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    original: String,
    buffer: String,
    mode: Mode,
}

impl PopupState {
    /// Opens on `text`, directly in edit mode when `is_editing`.
    pub fn new(text: impl Into<String>, is_editing: bool) -> Self {
        let original = text.into();
        Self {
            buffer: original.clone(),
            original,
            mode: if is_editing {
                Mode::Editing
            } else {
                Mode::Viewing
            },
        }
    }

    /// Viewing -> Editing, with the buffer reset to the original text.
    pub fn edit(&mut self) -> Vec<Event> {
        if self.mode == Mode::Viewing {
            self.buffer.clone_from(&self.original);
            self.mode = Mode::Editing;
        }
        Vec::new()
    }

    /// Editing -> Viewing, discarding the buffer. The popup stays open.
    pub fn cancel(&mut self) -> Vec<Event> {
        if self.mode == Mode::Editing {
            self.buffer.clone_from(&self.original);
            self.mode = Mode::Viewing;
        }
        Vec::new()
    }

    /// Commits the buffer and closes. Editing only.
    pub fn save(&mut self) -> Vec<Event> {
        match self.mode {
            Mode::Editing => vec![Event::Save(self.buffer.clone()), Event::Close],
            Mode::Viewing => Vec::new(),
        }
    }

    /// Closes without saving. Viewing only.
    pub fn close(&mut self) -> Vec<Event> {
        match self.mode {
            Mode::Viewing => vec![Event::Close],
            Mode::Editing => Vec::new(),
        }
    }

    /// Replaces the uncommitted edits. Ignored outside Editing.
    pub fn set_buffer(&mut self, text: String) {
        if self.mode == Mode::Editing {
            self.buffer = text;
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
