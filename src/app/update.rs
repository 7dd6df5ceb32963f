// SPDX-License-Identifier: MPL-2.0
//! Message handlers translating component effects into application state.

use super::{config, App, Message, Slot};
use crate::diagnostics::{ErrorType, UserAction};
use crate::error::Error;
use crate::ui::image_upload::{self, Effect, PasteSkip};
use crate::ui::notifications::Notification;
use crate::ui::text_popup::{self, TextPopup};
use iced::Task;
use std::path::PathBuf;

/// Key prefix shared by every decode failure toast.
const DECODE_ERROR_PREFIX: &str = "error-decode-";

/// Runs the native file picker filtered to the accepted extensions.
async fn pick_image(
    title: String,
    filter_name: String,
    extensions: Vec<String>,
) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, &extensions)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

impl App {
    pub(super) fn handle_upload(
        &mut self,
        slot: Slot,
        message: image_upload::Message,
    ) -> Task<Message> {
        // A drag follows the cursor from slot to slot.
        if matches!(message, image_upload::Message::CursorEntered) {
            if let Some(previous) = self.drag_target.filter(|target| *target != slot) {
                self.forward(previous, image_upload::Message::DragLeft);
                self.forward(slot, image_upload::Message::DragEntered);
                self.drag_target = Some(slot);
            }
        }

        let entry = self.slot_mut(slot);
        let (effect, task) = entry.upload.handle_message(message, entry.image.as_ref());
        let follow_up = self.apply_upload_effect(slot, effect);

        Task::batch([
            task.map(move |message| Message::Upload(slot, message)),
            follow_up,
        ])
    }

    fn apply_upload_effect(&mut self, slot: Slot, effect: Effect) -> Task<Message> {
        let name = slot.as_str().to_owned();
        match effect {
            Effect::None => Task::none(),
            Effect::Focused => {
                for other in Slot::ALL.into_iter().filter(|other| *other != slot) {
                    self.slot_mut(other).upload.blur();
                }
                self.activity.log_action(UserAction::FocusUpload { slot: name });
                Task::none()
            }
            Effect::OpenFileDialog => {
                self.activity
                    .log_action(UserAction::OpenFileDialog { slot: name });
                Task::perform(
                    pick_image(
                        self.i18n.tr("file-dialog-title"),
                        self.i18n.tr("file-dialog-filter"),
                        self.config.upload.extensions(),
                    ),
                    move |path| Message::Upload(slot, image_upload::Message::FileChosen(path)),
                )
            }
            Effect::DecodeStarted(source) => {
                self.activity.log_action(UserAction::SelectImage {
                    slot: name,
                    source: source.to_owned(),
                });
                Task::none()
            }
            Effect::ImageChanged(image) => {
                self.activity.log_action(UserAction::AcceptImage {
                    slot: name,
                    width: image.width(),
                    height: image.height(),
                });
                self.notifications.clear_prefixed(DECODE_ERROR_PREFIX);
                self.notifications
                    .push(Notification::success("notification-image-added"));
                self.slot_mut(slot).image = Some(image);
                Task::none()
            }
            Effect::DecodeFailed(error) => {
                self.activity
                    .log_error(ErrorType::DecodeError, format!("{name}: {error}"));
                self.notifications
                    .push(Notification::error(error.i18n_key()));
                Task::none()
            }
            Effect::ViewerOpened => {
                self.activity.log_action(UserAction::OpenViewer { slot: name });
                Task::none()
            }
            Effect::PasteIgnored(skip) => {
                self.activity.log_action(UserAction::IgnorePaste {
                    slot: name,
                    reason: skip.reason().to_owned(),
                });
                if let PasteSkip::Unavailable(error) = skip {
                    self.activity
                        .log_error(ErrorType::ClipboardError, error.to_string());
                    self.notifications
                        .push(Notification::warning("notification-clipboard-error"));
                }
                Task::none()
            }
        }
    }

    /// Delivers a message whose effect carries nothing for the parent.
    fn forward(&mut self, slot: Slot, message: image_upload::Message) {
        let entry = self.slot_mut(slot);
        let _ = entry.upload.handle_message(message, entry.image.as_ref());
    }

    pub(super) fn handle_file_hovered(&mut self) -> Task<Message> {
        if self.drag_target.is_none() {
            let target = self.drop_target();
            self.drag_target = Some(target);
            self.forward(target, image_upload::Message::DragEntered);
        }
        Task::none()
    }

    /// Hands the file to the drag target. Later files of the same gesture
    /// reach a slot whose drag flag is already cleared and are ignored there.
    pub(super) fn handle_file_dropped(&mut self, path: PathBuf) -> Task<Message> {
        let target = self.drag_target.take().unwrap_or_else(|| self.drop_target());
        self.handle_upload(target, image_upload::Message::Dropped(path))
    }

    pub(super) fn handle_files_left(&mut self) -> Task<Message> {
        self.drag_target = None;
        for slot in Slot::ALL {
            self.forward(slot, image_upload::Message::DragLeft);
        }
        Task::none()
    }

    pub(super) fn open_notes(&mut self, editing: bool) -> Task<Message> {
        for slot in Slot::ALL {
            self.slot_mut(slot).upload.blur();
        }
        self.popup = Some(TextPopup::new(
            self.notes.clone(),
            editing,
            self.config.popup.size(),
        ));
        self.activity
            .log_action(UserAction::OpenTextPopup { editing });
        Task::none()
    }

    pub(super) fn handle_popup(&mut self, message: text_popup::Message) -> Task<Message> {
        let Some(popup) = self.popup.as_mut() else {
            return Task::none();
        };

        for event in popup.handle_message(message) {
            match event {
                text_popup::Event::Save(text) => {
                    self.activity.log_action(UserAction::SaveText {
                        chars: text.chars().count(),
                    });
                    self.notes = text;
                    self.notifications
                        .push(Notification::success("notification-text-saved"));
                }
                text_popup::Event::Close => {
                    self.popup = None;
                    self.activity.log_action(UserAction::CloseTextPopup);
                }
            }
        }
        Task::none()
    }

    pub(super) fn handle_notes_loaded(&mut self, result: Result<String, Error>) -> Task<Message> {
        match result {
            Ok(text) => self.notes = text,
            Err(error) => {
                self.activity.log_error(ErrorType::IoError, error.to_string());
                self.notifications
                    .push(Notification::warning("notification-notes-load-error"));
            }
        }
        Task::none()
    }

    pub(super) fn cycle_theme(&mut self) -> Task<Message> {
        self.theme_mode = self.theme_mode.next();
        self.config.general.theme_mode = self.theme_mode;
        self.activity.log_action(UserAction::ChangeTheme {
            mode: self.theme_mode.as_str().to_owned(),
        });

        if let Err(error) = config::save_with_override(&self.config, self.config_dir.clone()) {
            self.activity.log_error(ErrorType::ConfigError, error.to_string());
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
        Task::none()
    }
}
