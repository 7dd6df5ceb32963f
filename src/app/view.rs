// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The intake window is a header, two upload slots side by side and the
//! notes panel. Overlays stack above it: the image viewer, the text popup
//! and the toasts.

use super::{Message, Slot, SlotEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::image_upload::{self, ViewContext as UploadViewContext};
use crate::ui::image_viewer;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::text_popup::{self, TextPopup};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Size};

/// Number of characters of the notes shown in the panel preview.
const NOTES_PREVIEW_CHARS: usize = 240;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub slots: &'a [SlotEntry; 2],
    pub notes: &'a str,
    pub popup: Option<&'a TextPopup>,
    pub window_size: Size,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header(i18n, ctx.theme_mode))
        .push(upload_row(ctx.slots, i18n))
        .push(notes_panel(ctx.notes, i18n));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable(page).width(Length::Fill).height(Length::Fill));

    if let Some((slot, image)) = Slot::ALL.into_iter().find_map(|slot| {
        let entry = &ctx.slots[slot.index()];
        entry
            .image
            .as_ref()
            .filter(|_| entry.upload.is_viewer_open())
            .map(|image| (slot, image))
    }) {
        layers = layers.push(image_viewer::view(
            image,
            i18n,
            Message::Upload(slot, image_upload::Message::CloseViewer),
        ));
    }

    if let Some(popup) = ctx.popup {
        layers = layers
            .push(text_popup::view(popup, i18n, ctx.window_size).map(Message::Popup));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}

fn header(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    let mode = i18n.tr(theme_mode.i18n_key());
    let theme_button = button(
        Text::new(i18n.tr_with_args("theme-mode-label", &[("mode", mode.as_str())]))
            .size(typography::BODY),
    )
    .on_press(Message::CycleTheme)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary);

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr("app-heading")).size(typography::TITLE_LG))
                .width(Length::Fill),
        )
        .push(theme_button)
        .into()
}

fn upload_row<'a>(slots: &'a [SlotEntry; 2], i18n: &'a I18n) -> Element<'a, Message> {
    let row = Slot::ALL.into_iter().fold(
        Row::new().spacing(spacing::LG),
        |row, slot| {
            let entry = &slots[slot.index()];
            let slot_view = image_upload::view(
                &entry.upload,
                UploadViewContext {
                    i18n,
                    label: i18n.tr(slot.label_key()),
                    current: entry.image.as_ref(),
                },
            )
            .map(move |message| Message::Upload(slot, message));
            row.push(Container::new(slot_view).width(Length::FillPortion(1)))
        },
    );
    row.into()
}

fn notes_panel<'a>(notes: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let preview: Element<'a, Message> = if notes.is_empty() {
        Text::new(i18n.tr("notes-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        Text::new(preview_text(notes)).size(typography::BODY).into()
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("notes-view-button")).size(typography::BODY))
                .on_press(Message::OpenNotes { editing: false })
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("notes-edit-button")).size(typography::BODY))
                .on_press(Message::OpenNotes { editing: true })
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("notes-heading")).size(typography::TITLE_SM))
            .push(preview)
            .push(actions),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

/// First characters of the notes, with an ellipsis when cut.
fn preview_text(notes: &str) -> String {
    let mut chars = notes.chars();
    let head: String = chars.by_ref().take(NOTES_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::preview_text;

    #[test]
    fn short_notes_are_shown_whole() {
        assert_eq!(preview_text("hello"), "hello");
    }

    #[test]
    fn long_notes_are_cut_on_char_boundaries() {
        let notes = "é".repeat(super::NOTES_PREVIEW_CHARS + 5);
        let preview = preview_text(&notes);
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), super::NOTES_PREVIEW_CHARS + 1);
    }
}
