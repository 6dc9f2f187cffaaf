// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod button;
pub mod container;
pub mod tooltip;

use iced::widget::svg;
use iced::Theme;

/// Tints monochrome SVG icons with the current text color.
pub fn tinted_svg(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Tints monochrome SVG icons with a fixed color (icons on colored bars).
pub fn svg_color(color: iced::Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
