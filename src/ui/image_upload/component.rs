// SPDX-License-Identifier: MPL-2.0
//! Upload slot state machine.
//!
//! The slot is controlled: the parent owns the current image and passes it
//! into [`State::handle_message`] and the view on every call. The slot only
//! keeps interaction flags and bookkeeping for decodes it started.

use super::state::{ClickAction, InteractionState};
use crate::error::{DecodeError, Error};
use crate::media::{self, clipboard, ingest, ClipboardItem, ImageSource, UploadedImage};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, Event, Subscription, Task};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    /// Click on the slot body.
    ContainerPressed,
    UploadPressed,
    ReplacePressed,
    ViewPressed,
    CloseViewer,
    /// Result of the file dialog; `None` when cancelled.
    FileChosen(Option<PathBuf>),
    DragEntered,
    DragLeft,
    Dropped(PathBuf),
    PasteRequested,
    ClipboardRead(Result<Vec<ClipboardItem>, Error>),
    Decoded(Result<UploadedImage, DecodeError>),
    Blur,
    CursorEntered,
    CursorExited,
}

/// Why a paste request produced nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PasteSkip {
    /// Focus moved away before the clipboard answered.
    NotFocused,
    /// The clipboard holds no image item.
    NoImage,
    /// The clipboard could not be opened or read.
    Unavailable(Error),
}

impl PasteSkip {
    /// Short label used in diagnostics.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            PasteSkip::NotFocused => "not_focused",
            PasteSkip::NoImage => "no_image",
            PasteSkip::Unavailable(_) => "clipboard_unavailable",
        }
    }
}

/// What the parent has to act on after a message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The slot took focus; the parent blurs the other slots.
    Focused,
    /// The parent runs the file dialog and answers with `FileChosen`.
    OpenFileDialog,
    /// A decode was started from the given source kind.
    DecodeStarted(&'static str),
    /// A new image was accepted; the parent stores it.
    ImageChanged(UploadedImage),
    DecodeFailed(DecodeError),
    ViewerOpened,
    PasteIgnored(PasteSkip),
}

#[derive(Debug, Clone)]
pub struct State {
    interaction: InteractionState,
    decodes_in_flight: u32,
    last_error: Option<DecodeError>,
    max_bytes: u64,
}

impl State {
    /// Creates a slot rejecting payloads above `max_bytes`.
    #[must_use]
    pub fn new(max_bytes: u64) -> Self {
        Self {
            interaction: InteractionState::default(),
            decodes_in_flight: 0,
            last_error: None,
            max_bytes,
        }
    }

    /// Handles a message given the image the parent currently holds.
    pub fn handle_message(
        &mut self,
        message: Message,
        current: Option<&UploadedImage>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::ContainerPressed => {
                match ClickAction::from_presence(current.is_some()) {
                    ClickAction::OpenViewer => self.open_viewer(),
                    ClickAction::Focus => (self.focus(), Task::none()),
                }
            }
            Message::ViewPressed => {
                if current.is_some() {
                    self.open_viewer()
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::CloseViewer => {
                self.interaction.viewer_open = false;
                (Effect::None, Task::none())
            }
            Message::UploadPressed | Message::ReplacePressed => {
                (Effect::OpenFileDialog, Task::none())
            }
            Message::FileChosen(Some(path)) => self.start_decode(ImageSource::File(path)),
            Message::FileChosen(None) => (Effect::None, Task::none()),
            Message::DragEntered => {
                self.interaction.dragging_over = true;
                (Effect::None, Task::none())
            }
            Message::DragLeft => {
                self.interaction.dragging_over = false;
                (Effect::None, Task::none())
            }
            Message::Dropped(path) => {
                // Later files of the same gesture arrive after the flag is cleared.
                if !self.interaction.dragging_over {
                    return (Effect::None, Task::none());
                }
                self.interaction.dragging_over = false;
                self.start_decode(ImageSource::File(path))
            }
            Message::PasteRequested => {
                if !self.interaction.focused {
                    return (Effect::PasteIgnored(PasteSkip::NotFocused), Task::none());
                }
                (
                    Effect::None,
                    Task::perform(clipboard::read_system_items(), Message::ClipboardRead),
                )
            }
            Message::ClipboardRead(result) => self.on_clipboard(result),
            Message::Decoded(result) => {
                self.decodes_in_flight = self.decodes_in_flight.saturating_sub(1);
                match result {
                    Ok(image) => {
                        self.last_error = None;
                        (Effect::ImageChanged(image), Task::none())
                    }
                    Err(error) => {
                        self.last_error = Some(error.clone());
                        (Effect::DecodeFailed(error), Task::none())
                    }
                }
            }
            Message::Blur => {
                self.blur();
                (Effect::None, Task::none())
            }
            Message::CursorEntered => {
                self.interaction.hovered = true;
                (Effect::None, Task::none())
            }
            Message::CursorExited => {
                self.interaction.hovered = false;
                (Effect::None, Task::none())
            }
        }
    }

    /// Drops focus. Paste stops being honored once the listener detaches.
    pub fn blur(&mut self) {
        self.interaction.focused = false;
    }

    /// Keyboard and mouse listener, alive only while it has work to do.
    ///
    /// An open viewer listens for Escape. A focused slot listens for paste
    /// and for anything that should drop focus.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.interaction.viewer_open {
            event::listen_with(viewer_listener)
        } else if self.interaction.focused {
            event::listen_with(focused_listener)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.interaction.focused
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.interaction.hovered
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.interaction.viewer_open
    }

    #[must_use]
    pub fn is_decoding(&self) -> bool {
        self.decodes_in_flight > 0
    }

    #[must_use]
    pub fn decodes_in_flight(&self) -> u32 {
        self.decodes_in_flight
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&DecodeError> {
        self.last_error.as_ref()
    }

    fn focus(&mut self) -> Effect {
        if self.interaction.focused {
            Effect::None
        } else {
            self.interaction.focused = true;
            Effect::Focused
        }
    }

    fn open_viewer(&mut self) -> (Effect, Task<Message>) {
        self.interaction.viewer_open = true;
        (Effect::ViewerOpened, Task::none())
    }

    fn on_clipboard(
        &mut self,
        result: Result<Vec<ClipboardItem>, Error>,
    ) -> (Effect, Task<Message>) {
        if !self.interaction.focused {
            return (Effect::PasteIgnored(PasteSkip::NotFocused), Task::none());
        }
        let items = match result {
            Ok(items) => items,
            Err(error) => {
                return (
                    Effect::PasteIgnored(PasteSkip::Unavailable(error)),
                    Task::none(),
                )
            }
        };
        match media::first_image_item(items) {
            Some(item) => self.start_decode(item.into_source()),
            None => (Effect::PasteIgnored(PasteSkip::NoImage), Task::none()),
        }
    }

    fn start_decode(&mut self, source: ImageSource) -> (Effect, Task<Message>) {
        self.decodes_in_flight += 1;
        let kind = source.kind();
        (
            Effect::DecodeStarted(kind),
            Task::perform(ingest::decode(source, self.max_bytes), Message::Decoded),
        )
    }
}

fn is_paste(key: &Key, modifiers: keyboard::Modifiers) -> bool {
    modifiers.command()
        && matches!(key, Key::Character(c) if c.as_str().eq_ignore_ascii_case("v"))
}

fn focused_listener(
    event: Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if is_paste(&key, modifiers) {
                Some(Message::PasteRequested)
            } else if key == Key::Named(Named::Escape) {
                Some(Message::Blur)
            } else {
                None
            }
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) if status == event::Status::Ignored => {
            Some(Message::Blur)
        }
        _ => None,
    }
}

fn viewer_listener(
    event: Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::CloseViewer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ingest::encode_rgba_png;

    const MAX: u64 = 1024 * 1024;

    fn sample_image() -> UploadedImage {
        let png = encode_rgba_png(2, 2, vec![255; 16]).unwrap();
        UploadedImage::from_bytes(png, None, MAX).unwrap()
    }

    fn send(state: &mut State, message: Message, current: Option<&UploadedImage>) -> Effect {
        state.handle_message(message, current).0
    }

    #[test]
    fn click_without_image_focuses_once() {
        let mut state = State::new(MAX);
        assert!(matches!(
            send(&mut state, Message::ContainerPressed, None),
            Effect::Focused
        ));
        assert!(state.is_focused());
        assert!(matches!(
            send(&mut state, Message::ContainerPressed, None),
            Effect::None
        ));
    }

    #[test]
    fn click_with_image_opens_viewer_without_focus() {
        let image = sample_image();
        let mut state = State::new(MAX);
        assert!(matches!(
            send(&mut state, Message::ContainerPressed, Some(&image)),
            Effect::ViewerOpened
        ));
        assert!(state.is_viewer_open());
        assert!(!state.is_focused());

        send(&mut state, Message::CloseViewer, Some(&image));
        assert!(!state.is_viewer_open());
    }

    #[test]
    fn upload_and_replace_request_the_dialog() {
        let image = sample_image();
        let mut state = State::new(MAX);
        assert!(matches!(
            send(&mut state, Message::UploadPressed, None),
            Effect::OpenFileDialog
        ));
        assert!(matches!(
            send(&mut state, Message::ReplacePressed, Some(&image)),
            Effect::OpenFileDialog
        ));
    }

    #[test]
    fn cancelled_dialog_is_a_no_op() {
        let mut state = State::new(MAX);
        assert!(matches!(
            send(&mut state, Message::FileChosen(None), None),
            Effect::None
        ));
        assert_eq!(state.decodes_in_flight(), 0);
    }

    #[test]
    fn chosen_file_starts_a_decode() {
        let mut state = State::new(MAX);
        let effect = send(
            &mut state,
            Message::FileChosen(Some(PathBuf::from("photo.png"))),
            None,
        );
        assert!(matches!(effect, Effect::DecodeStarted("file")));
        assert!(state.is_decoding());
    }

    #[test]
    fn only_first_file_of_a_drop_is_taken() {
        let mut state = State::new(MAX);
        send(&mut state, Message::DragEntered, None);
        assert!(state.interaction().dragging_over);

        let first = send(&mut state, Message::Dropped(PathBuf::from("a.png")), None);
        let second = send(&mut state, Message::Dropped(PathBuf::from("b.png")), None);

        assert!(matches!(first, Effect::DecodeStarted("file")));
        assert!(matches!(second, Effect::None));
        assert!(!state.interaction().dragging_over);
        assert_eq!(state.decodes_in_flight(), 1);
    }

    #[test]
    fn drag_leave_clears_highlight() {
        let mut state = State::new(MAX);
        send(&mut state, Message::DragEntered, None);
        send(&mut state, Message::DragLeft, None);
        assert!(!state.interaction().dragging_over);
    }

    #[test]
    fn paste_requires_focus() {
        let mut state = State::new(MAX);
        assert!(matches!(
            send(&mut state, Message::PasteRequested, None),
            Effect::PasteIgnored(PasteSkip::NotFocused)
        ));
    }

    #[test]
    fn clipboard_answer_after_blur_is_ignored() {
        let mut state = State::new(MAX);
        send(&mut state, Message::ContainerPressed, None);
        send(&mut state, Message::Blur, None);

        let items = vec![ClipboardItem::new("image/png", vec![1, 2, 3])];
        let effect = send(&mut state, Message::ClipboardRead(Ok(items)), None);
        assert!(matches!(effect, Effect::PasteIgnored(PasteSkip::NotFocused)));
        assert_eq!(state.decodes_in_flight(), 0);
    }

    #[test]
    fn clipboard_without_image_is_ignored() {
        let mut state = State::new(MAX);
        send(&mut state, Message::ContainerPressed, None);

        let items = vec![ClipboardItem::new("text/plain", b"hello".to_vec())];
        let effect = send(&mut state, Message::ClipboardRead(Ok(items)), None);
        assert!(matches!(effect, Effect::PasteIgnored(PasteSkip::NoImage)));
    }

    #[test]
    fn first_image_item_is_decoded() {
        let mut state = State::new(MAX);
        send(&mut state, Message::ContainerPressed, None);

        let items = vec![
            ClipboardItem::new("text/plain", b"hello".to_vec()),
            ClipboardItem::new("image/png", vec![1, 2, 3]),
        ];
        let effect = send(&mut state, Message::ClipboardRead(Ok(items)), None);
        assert!(matches!(effect, Effect::DecodeStarted("clipboard")));
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let mut state = State::new(MAX);
        send(&mut state, Message::ContainerPressed, None);

        let effect = send(
            &mut state,
            Message::ClipboardRead(Err(Error::Clipboard("busy".into()))),
            None,
        );
        match effect {
            Effect::PasteIgnored(skip) => assert_eq!(skip.reason(), "clipboard_unavailable"),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn decode_success_reports_image_and_clears_error() {
        let mut state = State::new(MAX);
        send(&mut state, Message::FileChosen(Some("x.png".into())), None);
        send(
            &mut state,
            Message::Decoded(Err(DecodeError::EmptyFile)),
            None,
        );
        assert_eq!(state.last_error(), Some(&DecodeError::EmptyFile));

        let image = sample_image();
        let effect = send(&mut state, Message::Decoded(Ok(image.clone())), None);
        match effect {
            Effect::ImageChanged(changed) => assert_eq!(changed, image),
            other => panic!("unexpected effect {other:?}"),
        }
        assert!(state.last_error().is_none());
        assert!(!state.is_decoding());
    }

    #[test]
    fn concurrent_decodes_each_report() {
        let mut state = State::new(MAX);
        send(&mut state, Message::FileChosen(Some("a.png".into())), None);
        send(&mut state, Message::FileChosen(Some("b.png".into())), None);
        assert_eq!(state.decodes_in_flight(), 2);

        let image = sample_image();
        let first = send(&mut state, Message::Decoded(Ok(image.clone())), None);
        let second = send(&mut state, Message::Decoded(Ok(image)), None);
        assert!(matches!(first, Effect::ImageChanged(_)));
        assert!(matches!(second, Effect::ImageChanged(_)));
        assert_eq!(state.decodes_in_flight(), 0);
    }

    #[test]
    fn cursor_tracking() {
        let mut state = State::new(MAX);
        send(&mut state, Message::CursorEntered, None);
        assert!(state.is_hovered());
        send(&mut state, Message::CursorExited, None);
        assert!(!state.is_hovered());
    }

    #[test]
    fn ctrl_v_maps_to_paste() {
        let key = Key::Character("v".into());
        assert!(is_paste(&key, keyboard::Modifiers::COMMAND));
        assert!(!is_paste(&key, keyboard::Modifiers::empty()));
        assert!(!is_paste(
            &Key::Character("c".into()),
            keyboard::Modifiers::COMMAND
        ));
    }
}
