// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay.

use crate::i18n::fluent::I18n;
use crate::media::UploadedImage;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, opaque, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Draws `image` fitted to the window above everything else.
///
/// `on_close` is emitted by the close button; Escape is handled by the
/// owning slot's subscription.
pub fn view<'a, Message>(
    image: &'a UploadedImage,
    i18n: &'a I18n,
    on_close: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let close = button(Text::new(i18n.tr("viewer-close-button")).size(typography::BODY))
        .on_press(on_close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_STRONG,
            opacity::OVERLAY_HOVER,
        ));

    let picture = Image::new(image.handle().clone())
        .content_fit(ContentFit::ScaleDown)
        .width(Length::Fill)
        .height(Length::Fill);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .push(close)
        .push(picture);

    opaque(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .style(styles::overlay::viewer_backdrop),
    )
}
