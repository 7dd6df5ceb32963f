// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the intake window.
//!
//! The `App` is the parent of every component: it owns the image held by each
//! upload slot and the notes text, and turns component effects into state
//! changes, file dialogs, toasts and activity log entries.

pub mod config;
mod message;
pub mod paths;
mod slot;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use slot::Slot;

use crate::diagnostics::ActivityLog;
use crate::i18n::fluent::I18n;
use crate::media::UploadedImage;
use crate::ui::image_upload;
use crate::ui::notifications;
use crate::ui::text_popup::TextPopup;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// One upload slot: the widget state plus the image the parent holds for it.
#[derive(Debug)]
pub struct SlotEntry {
    pub upload: image_upload::State,
    pub image: Option<UploadedImage>,
}

impl SlotEntry {
    fn new(max_bytes: u64) -> Self {
        Self {
            upload: image_upload::State::new(max_bytes),
            image: None,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    /// Directory passed with `--config-dir`, used again when saving.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    slots: [SlotEntry; 2],
    /// Slot that received the current file drag, if one is in progress.
    drag_target: Option<Slot>,
    notes: String,
    popup: Option<TextPopup>,
    /// Last known inner size of the window, bounds the popup.
    window_size: Size,
    notifications: notifications::Manager,
    activity: ActivityLog,
    dump_activity_log: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("popup_open", &self.popup.is_some())
            .field("events", &self.activity.len())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let max_bytes = config.upload.max_file_size_bytes();
        Self {
            i18n: I18n::default(),
            theme_mode: config.general.theme_mode,
            config,
            config_dir: None,
            slots: [SlotEntry::new(max_bytes), SlotEntry::new(max_bytes)],
            drag_target: None,
            notes: String::new(),
            popup: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            notifications: notifications::Manager::new(),
            activity: ActivityLog::default(),
            dump_activity_log: false,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and locale, then starts reading the notes file if one
    /// was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let max_bytes = config.upload.max_file_size_bytes();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            slots: [SlotEntry::new(max_bytes), SlotEntry::new(max_bytes)],
            config,
            config_dir,
            dump_activity_log: flags.activity_log,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.activity.log_warning(key.clone());
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.notes {
            Some(path) => Task::perform(
                async move {
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(crate::error::Error::from)
                },
                Message::NotesLoaded,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ];
        subscriptions.extend(
            Slot::ALL
                .into_iter()
                .map(|slot| subscription::create_slot_subscription(slot, &self.slot(slot).upload)),
        );
        if let Some(popup) = &self.popup {
            subscriptions.push(popup.subscription().map(Message::Popup));
        }
        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(slot, upload_message) => self.handle_upload(slot, upload_message),
            Message::Popup(popup_message) => self.handle_popup(popup_message),
            Message::OpenNotes { editing } => self.open_notes(editing),
            Message::NotesLoaded(result) => self.handle_notes_loaded(result),
            Message::CycleTheme => self.cycle_theme(),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::FileHovered => self.handle_file_hovered(),
            Message::FileDropped(path) => self.handle_file_dropped(path),
            Message::FilesHoveredLeft => self.handle_files_left(),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                if self.dump_activity_log {
                    match self.activity.to_json() {
                        Ok(json) => eprintln!("{json}"),
                        Err(err) => eprintln!("[ERROR] activity log dump failed: {err}"),
                    }
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            slots: &self.slots,
            notes: &self.notes,
            popup: self.popup.as_ref(),
            window_size: self.window_size,
            notifications: &self.notifications,
        })
    }

    fn slot(&self, slot: Slot) -> &SlotEntry {
        &self.slots[slot.index()]
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotEntry {
        &mut self.slots[slot.index()]
    }

    /// Slot a file drag lands on: the hovered slot, else the focused one,
    /// else the first.
    fn drop_target(&self) -> Slot {
        Slot::ALL
            .into_iter()
            .find(|slot| self.slot(*slot).upload.is_hovered())
            .or_else(|| {
                Slot::ALL
                    .into_iter()
                    .find(|slot| self.slot(*slot).upload.is_focused())
            })
            .unwrap_or(Slot::Reference)
    }
}
