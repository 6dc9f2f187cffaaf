// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page layout regions.
//!
//! Colors come from the active [`ThemeStyle`] rather than the Iced palette so
//! the dark theme's component overrides reach the app bar, drawer and panels.

use crate::ui::design_tokens::shadow;
use crate::ui::theming::ThemeStyle;
use iced::widget::container;
use iced::{Background, Theme};

/// App bar surface.
pub fn app_bar(style: &ThemeStyle) -> impl Fn(&Theme) -> container::Style {
    let background = style.app_bar_background();
    let text = style.app_bar_text();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        shadow: shadow::APP_BAR,
        ..Default::default()
    }
}

/// Navigation drawer surface.
pub fn drawer(style: &ThemeStyle) -> impl Fn(&Theme) -> container::Style {
    let background = style.drawer_background();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Paper surface behind document content.
pub fn paper(style: &ThemeStyle) -> impl Fn(&Theme) -> container::Style {
    let background = style.paper_background();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_bar_follows_dark_override() {
        let style = ThemeStyle::dark();
        let resolved = app_bar(&style)(&style.theme());
        assert_eq!(
            resolved.background,
            Some(Background::Color(style.app_bar_background()))
        );
        assert_eq!(resolved.text_color, Some(style.app_bar_text()));
    }

    #[test]
    fn drawer_and_paper_differ_in_dark_theme() {
        let style = ThemeStyle::dark();
        let theme = style.theme();
        assert_ne!(drawer(&style)(&theme).background, paper(&style)(&theme).background);
    }
}
