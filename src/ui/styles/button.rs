// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn flat(
    background: Color,
    text_color: Color,
    border_color: Color,
    shadow: Shadow,
) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Primary action (Upload, Save, Edit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => flat(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => flat(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => {
            let background = if theme.extended_palette().is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            };
            flat(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Secondary action (Cancel, Close, Replace).
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            flat(bg_color, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover_bg = if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            };
            flat(hover_bg, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => {
            flat(bg_color, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Translucent button drawn on top of an image (View, Replace, viewer close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Borderless icon button (popup close cross).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => base,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
