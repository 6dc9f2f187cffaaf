// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat icon button placed on the app bar.
///
/// Transparent at rest; hover and press add a translucent wash of the bar's
/// text color so the feedback is visible on both primary and dark bars.
pub fn app_bar_icon(foreground: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let wash = match status {
            button::Status::Hovered => Some(opacity::HOVER_WASH),
            button::Status::Pressed => Some(opacity::PRESSED_WASH),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: wash.map(|a| Background::Color(Color { a, ..foreground })),
            text_color: foreground,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Drawer link. Selected entries get a tinted primary background.
pub fn drawer_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let primary = palette.primary.base.color;

        let background = match (selected, status) {
            (true, button::Status::Hovered | button::Status::Pressed) => Some(Color {
                a: opacity::SELECTED_HOVER,
                ..primary
            }),
            (true, _) => Some(Color {
                a: opacity::SELECTED,
                ..primary
            }),
            (false, button::Status::Hovered) => Some(Color {
                a: opacity::HOVER_WASH,
                ..palette.background.base.text
            }),
            (false, button::Status::Pressed) => Some(Color {
                a: opacity::PRESSED_WASH,
                ..palette.background.base.text
            }),
            (false, _) => None,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color: if selected {
                primary
            } else {
                palette.background.base.text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Collapsible drawer section header.
pub fn section_header(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::HOVER_WASH,
            ..palette.background.base.text
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::button::Status;

    #[test]
    fn app_bar_icon_is_transparent_at_rest() {
        let style = app_bar_icon(Color::WHITE)(&Theme::Light, Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn app_bar_icon_washes_on_hover() {
        let style = app_bar_icon(Color::WHITE)(&Theme::Light, Status::Hovered);
        assert!(style.background.is_some());
    }

    #[test]
    fn selected_drawer_item_has_background() {
        let selected = drawer_item(true)(&Theme::Dark, Status::Active);
        let plain = drawer_item(false)(&Theme::Dark, Status::Active);
        assert!(selected.background.is_some());
        assert!(plain.background.is_none());
    }

    #[test]
    fn selected_drawer_item_uses_primary_text() {
        let theme = Theme::Light;
        let selected = drawer_item(true)(&theme, Status::Active);
        assert_eq!(
            selected.text_color,
            theme.extended_palette().primary.base.color
        );
    }
}
