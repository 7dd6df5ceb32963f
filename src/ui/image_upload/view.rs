// SPDX-License-Identifier: MPL-2.0
//! Rendering of one upload slot.

use super::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::UploadedImage;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, row, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Height of the preview drawn inside a filled slot.
const PREVIEW_HEIGHT: f32 = 200.0;

/// Everything the slot needs from its parent to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Localized slot heading.
    pub label: String,
    pub current: Option<&'a UploadedImage>,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let has_image = ctx.current.is_some();
    let zone = state.interaction().drop_zone(has_image);

    let body = match ctx.current {
        Some(image) => filled(image, ctx.i18n),
        None => empty(state, ctx.i18n),
    };

    let framed = Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::drop_zone(zone));

    let mut layers = Stack::new().push(framed);
    if state.interaction().dragging_over {
        let label = Text::new(ctx.i18n.tr("upload-drop-here")).size(typography::BODY_LG);
        let hint = Container::new(label)
            .padding([spacing::XS, spacing::MD])
            .style(styles::overlay::drop_hint);
        layers = layers.push(
            Container::new(hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );
    }

    let target = mouse_area(layers)
        .on_press(Message::ContainerPressed)
        .on_enter(Message::CursorEntered)
        .on_exit(Message::CursorExited);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.label).size(typography::TITLE_SM))
        .push(target)
        .into()
}

fn filled<'a>(image: &'a UploadedImage, i18n: &'a I18n) -> Element<'a, Message> {
    let preview = Image::new(image.handle().clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT));

    let width = image.width().to_string();
    let height = image.height().to_string();
    let caption = Text::new(format!(
        "{} · {}",
        i18n.tr("upload-image-uploaded"),
        i18n.tr_with_args(
            "upload-image-dimensions",
            &[("width", width.as_str()), ("height", height.as_str())]
        )
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    let actions = row![
        button(Text::new(i18n.tr("upload-view-button")).size(typography::BODY))
            .on_press(Message::ViewPressed)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            )),
        button(Text::new(i18n.tr("upload-replace-button")).size(typography::BODY))
            .on_press(Message::ReplacePressed)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary),
    ]
    .spacing(spacing::XS);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(caption)
        .push(actions)
        .into()
}

fn empty<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let interaction = state.interaction();
    let hint_key = if interaction.focused {
        "upload-hint-focused"
    } else {
        "upload-hint-idle"
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("⬆").size(sizing::ICON_LG).color(palette::GRAY_400))
        .push(Text::new(i18n.tr(hint_key)).size(typography::BODY));

    if interaction.shows_upload_button(false) {
        content = content.push(
            button(Text::new(i18n.tr("upload-button")))
                .on_press(Message::UploadPressed)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );
    }

    if state.is_decoding() {
        content = content.push(
            Text::new(i18n.tr("upload-reading"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    if let Some(error) = state.last_error() {
        content = content.push(
            Text::new(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::UPLOAD_MIN_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
