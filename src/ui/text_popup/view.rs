// SPDX-License-Identifier: MPL-2.0
//! Modal rendering of the text popup.

use super::component::{Message, TextPopup};
use super::state::Mode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, opaque, row, scrollable, text_editor, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Size};

/// Card centered over a dimmed backdrop that swallows outside clicks.
/// The card never covers more than 90% of `window`.
pub fn view<'a>(popup: &'a TextPopup, i18n: &'a I18n, window: Size) -> Element<'a, Message> {
    let (width, height) = popup.fitted_size(window);
    let mode = popup.mode();

    let title_key = match mode {
        Mode::Viewing => "popup-title-view",
        Mode::Editing => "popup-title-edit",
    };

    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr(title_key)).size(typography::TITLE_MD))
                .width(Length::Fill),
        );
    if mode == Mode::Viewing {
        header = header.push(
            button(Text::new("×").size(typography::TITLE_MD))
                .on_press(Message::Close)
                .padding([0.0, spacing::XS])
                .style(styles::button::icon),
        );
    }

    let body: Element<'a, Message> = match mode {
        Mode::Viewing => read_only(popup.state().original(), i18n),
        Mode::Editing => text_editor(popup.content())
            .placeholder(i18n.tr("popup-placeholder"))
            .on_action(Message::EditorAction)
            .size(typography::BODY)
            .padding(spacing::SM)
            .height(Length::Fill)
            .into(),
    };

    let footer = match mode {
        Mode::Viewing => row![
            action(i18n.tr("popup-close-button"), Message::Close, false),
            action(i18n.tr("popup-edit-button"), Message::Edit, true),
        ],
        Mode::Editing => row![
            action(i18n.tr("popup-cancel-button"), Message::Cancel, false),
            action(i18n.tr("popup-save-button"), Message::Save, true),
        ],
    }
    .spacing(spacing::XS);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(Container::new(body).height(Length::Fill))
            .push(
                Container::new(footer)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            ),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .padding(spacing::LG)
    .style(styles::container::card);

    opaque(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::overlay::modal_backdrop),
    )
}

fn read_only<'a>(text: &'a str, i18n: &I18n) -> Element<'a, Message> {
    if text.is_empty() {
        Text::new(i18n.tr("popup-empty-text"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        scrollable(Text::new(text).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn action<'a>(label: String, message: Message, primary: bool) -> Element<'a, Message> {
    let style = if primary {
        styles::button::primary
    } else {
        styles::button::secondary
    };
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}
