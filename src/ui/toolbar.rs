// SPDX-License-Identifier: MPL-2.0
//! Application bar: site title, theme toggle and repository link.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{ThemeMode, ThemeStyle};
use iced::widget::svg::Svg;
use iced::widget::tooltip::Position;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub theme_mode: ThemeMode,
    pub style: ThemeStyle,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleThemeMode,
    OpenRepository,
}

/// Icon shown on the theme toggle. Reflects the override, not the effective appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Auto,
    Light,
    Dark,
}

#[must_use]
pub fn glyph(mode: ThemeMode) -> Glyph {
    match mode {
        ThemeMode::System => Glyph::Auto,
        ThemeMode::Light => Glyph::Light,
        ThemeMode::Dark => Glyph::Dark,
    }
}

/// Translation key of the toggle's tooltip for a given override.
#[must_use]
pub fn tooltip_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::System => "theme-tooltip-system",
        ThemeMode::Light => "theme-tooltip-light",
        ThemeMode::Dark => "theme-tooltip-dark",
    }
}

fn glyph_icon(glyph: Glyph) -> Svg<'static> {
    match glyph {
        Glyph::Auto => icons::half_circle(),
        Glyph::Light => icons::sun(),
        Glyph::Dark => icons::moon(),
    }
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let foreground = ctx.style.app_bar_text();

    let icon_button = |icon: Svg<'static>, message: Message| -> Element<'a, Message> {
        button(icons::sized(icon, sizing::ICON_MD).style(styles::svg_color(foreground)))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::app_bar_icon(foreground))
            .into()
    };

    let theme_toggle = styles::tooltip::styled(
        icon_button(glyph_icon(glyph(ctx.theme_mode)), Message::ToggleThemeMode),
        ctx.i18n.tr(tooltip_key(ctx.theme_mode)),
        Position::Bottom,
    );

    let repository = styles::tooltip::styled(
        icon_button(icons::code_brackets(), Message::OpenRepository),
        ctx.i18n.tr("repository-tooltip"),
        Position::Bottom,
    );

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(Text::new(ctx.title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle)
        .push(repository);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::APP_BAR_HEIGHT)
        .style(styles::container::app_bar(&ctx.style))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn glyph_reflects_override() {
        assert_eq!(glyph(ThemeMode::System), Glyph::Auto);
        assert_eq!(glyph(ThemeMode::Light), Glyph::Light);
        assert_eq!(glyph(ThemeMode::Dark), Glyph::Dark);
    }

    #[test]
    fn tooltip_describes_override_origin() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr(tooltip_key(ThemeMode::System)),
            "Using system light/dark theme"
        );
        assert_eq!(i18n.tr(tooltip_key(ThemeMode::Light)), "Using light theme");
        assert_eq!(i18n.tr(tooltip_key(ThemeMode::Dark)), "Using dark theme");
    }

    #[test]
    fn toolbar_view_renders_for_every_mode() {
        let i18n = I18n::default();
        for (mode, style) in [
            (ThemeMode::System, ThemeStyle::dark()),
            (ThemeMode::Light, ThemeStyle::light()),
            (ThemeMode::Dark, ThemeStyle::dark()),
        ] {
            let ctx = ViewContext {
                i18n: &i18n,
                title: "Lumen UI",
                theme_mode: mode,
                style,
            };
            let _element = view(ctx);
        }
    }
}
