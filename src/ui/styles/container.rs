// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Visual state of an upload drop target, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// An image is loaded; the frame recedes behind it.
    Filled,
    /// Files are hovering over the window above this slot.
    DragOver,
    /// The slot holds keyboard focus and accepts paste.
    Focused,
    Idle,
}

/// Frame around an upload slot.
pub fn drop_zone(zone: DropZone) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let base = extended.background.base.color;
        let weak = extended.background.weak.color;

        let (background, border_color, width) = match zone {
            DropZone::Filled => (base, Color::TRANSPARENT, border::WIDTH_SM),
            DropZone::DragOver => (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                },
                palette::PRIMARY_500,
                border::WIDTH_MD,
            ),
            DropZone::Focused => (weak, palette::PRIMARY_500, border::WIDTH_MD),
            DropZone::Idle => (weak, palette::GRAY_400, border::WIDTH_SM),
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Generic panel surface used for the notes section.
///
/// The color is derived from the active Iced `Theme` background with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dialog card floating above the modal backdrop.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
