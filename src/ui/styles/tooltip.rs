// SPDX-License-Identifier: MPL-2.0
//! Tooltips drawn in the inverse of the active palette.

use crate::ui::design_tokens::{opacity, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Text color as background and background color as text, so a tip stands
/// out against both the light and the dark style.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TOOLTIP,
            ..palette.text
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: 0.3,
                ..palette.background
            },
        },
        shadow: shadow::TOOLTIP,
        text_color: Some(palette.background),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip using [`tooltip_container`].
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
