// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop, image viewer and drop hint.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scrim(alpha: f32) -> Background {
    Background::Color(Color { a: alpha, ..BLACK })
}

/// Dimmed layer behind the text popup.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(scrim(opacity::OVERLAY_MEDIUM)),
        ..Default::default()
    }
}

/// Near-opaque layer behind the full-size image viewer.
pub fn viewer_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(scrim(opacity::OVERLAY_HOVER)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Label pill shown over a slot while files hover the window.
pub fn drop_hint(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(scrim(opacity::OVERLAY_STRONG)),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_hint_is_a_rounded_dark_pill() {
        let style = drop_hint(&Theme::Light);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::MD));
        assert_eq!(style.text_color, Some(WHITE));
        assert!(matches!(
            style.background,
            Some(Background::Color(color)) if color.a == opacity::OVERLAY_STRONG
        ));
    }
}
