// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme resolution and the two static style configurations.

use crate::ui::design_tokens::{palette, typography};
use iced::theme::Palette;
use iced::{Color, Theme};

/// User-forced theme choice. `System` means no override is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Next mode in the toggle cycle: system → dark → light → system.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::System,
        }
    }

    /// The override if set, otherwise the system appearance.
    #[must_use]
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => system,
        }
    }
}

/// A concrete light or dark appearance, as reported by the OS or applied to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Probes the OS color scheme once. Only an explicit dark preference is dark.
    #[must_use]
    pub fn detect() -> Self {
        let detected = dark_light::detect()
            .map_err(|err| {
                tracing::debug!(error = %err, "system theme detection failed, assuming light");
            })
            .ok();
        Self::from_detected(detected)
    }

    /// No reported preference resolves to light, like `prefers-color-scheme`.
    #[must_use]
    pub fn from_detected(mode: Option<dark_light::Mode>) -> Self {
        match mode {
            Some(dark_light::Mode::Dark) => Appearance::Dark,
            _ => Appearance::Light,
        }
    }

    /// Maps a color-scheme change notification. `None` when the OS has no preference.
    #[must_use]
    pub fn from_system(mode: iced::theme::Mode) -> Option<Self> {
        match mode {
            iced::theme::Mode::Light => Some(Appearance::Light),
            iced::theme::Mode::Dark => Some(Appearance::Dark),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

/// Font sizes for the three heading levels rendered in documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingScale {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
}

/// Component colors that replace the palette-derived defaults (dark theme only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentColors {
    pub app_bar: Color,
    pub paper: Color,
    pub drawer: Color,
}

/// A complete style configuration handed to the theming engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub appearance: Appearance,
    pub palette: Palette,
    pub headings: HeadingScale,
    pub components: Option<ComponentColors>,
}

impl ThemeStyle {
    /// Light style configuration.
    #[must_use]
    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            palette: Palette {
                background: palette::WHITE,
                text: palette::GRAY_900,
                primary: palette::PRIMARY_600,
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: palette::ERROR_500,
            },
            headings: HeadingScale {
                h1: typography::HEADING_1,
                h2: typography::HEADING_2,
                h3: typography::HEADING_3,
            },
            components: None,
        }
    }

    /// Dark style configuration.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            palette: Palette {
                background: palette::GRAY_950,
                text: palette::WHITE,
                primary: palette::PRIMARY_400,
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: palette::ERROR_500,
            },
            headings: HeadingScale {
                h1: typography::HEADING_1,
                h2: typography::HEADING_2,
                h3: typography::HEADING_3,
            },
            components: Some(ComponentColors {
                app_bar: palette::GRAY_850,
                paper: palette::GRAY_875,
                drawer: palette::GRAY_900,
            }),
        }
    }

    #[must_use]
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    /// Builds the Iced theme that makes this palette ambient to every widget.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let name = match self.appearance {
            Appearance::Light => "Docs Light",
            Appearance::Dark => "Docs Dark",
        };
        Theme::custom(name.to_string(), self.palette)
    }

    #[must_use]
    pub fn app_bar_background(&self) -> Color {
        self.components
            .map_or(self.palette.primary, |colors| colors.app_bar)
    }

    #[must_use]
    pub fn app_bar_text(&self) -> Color {
        match self.components {
            Some(_) => self.palette.text,
            None => palette::WHITE,
        }
    }

    #[must_use]
    pub fn paper_background(&self) -> Color {
        self.components
            .map_or(self.palette.background, |colors| colors.paper)
    }

    #[must_use]
    pub fn drawer_background(&self) -> Color {
        self.components
            .map_or(palette::GRAY_50, |colors| colors.drawer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycle_is_system_dark_light() {
        assert_eq!(ThemeMode::System.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::System);
    }

    #[test]
    fn forced_modes_ignore_system_signal() {
        for system in [Appearance::Light, Appearance::Dark] {
            assert_eq!(ThemeMode::Dark.resolve(system), Appearance::Dark);
            assert_eq!(ThemeMode::Light.resolve(system), Appearance::Light);
        }
    }

    #[test]
    fn system_mode_follows_system_signal() {
        assert_eq!(ThemeMode::System.resolve(Appearance::Dark), Appearance::Dark);
        assert_eq!(ThemeMode::System.resolve(Appearance::Light), Appearance::Light);
    }

    #[test]
    fn light_theme_has_light_surface() {
        let style = ThemeStyle::light();
        assert!(style.palette.background.r > 0.9);
        assert!(style.components.is_none());
    }

    #[test]
    fn dark_theme_has_dark_surface_and_component_overrides() {
        let style = ThemeStyle::dark();
        assert!(style.palette.background.r < 0.2);
        let colors = style.components.expect("dark theme overrides components");
        assert_eq!(style.app_bar_background(), colors.app_bar);
        assert_eq!(style.paper_background(), colors.paper);
        assert_eq!(style.drawer_background(), colors.drawer);
    }

    #[test]
    fn light_app_bar_uses_primary_color() {
        let style = ThemeStyle::light();
        assert_eq!(style.app_bar_background(), style.palette.primary);
    }

    #[test]
    fn heading_scale_is_descending() {
        for style in [ThemeStyle::light(), ThemeStyle::dark()] {
            assert!(style.headings.h1 > style.headings.h2);
            assert!(style.headings.h2 > style.headings.h3);
        }
    }

    #[test]
    fn for_appearance_selects_matching_style() {
        assert_eq!(
            ThemeStyle::for_appearance(Appearance::Dark).appearance,
            Appearance::Dark
        );
        assert_eq!(
            ThemeStyle::for_appearance(Appearance::Light),
            ThemeStyle::light()
        );
    }

    #[test]
    fn theme_carries_palette() {
        let style = ThemeStyle::dark();
        assert_eq!(style.theme().palette().background, style.palette.background);
    }

    #[test]
    fn detection_without_dark_preference_is_light() {
        assert_eq!(Appearance::from_detected(None), Appearance::Light);
        assert_eq!(
            Appearance::from_detected(Some(dark_light::Mode::Light)),
            Appearance::Light
        );
        assert_eq!(
            Appearance::from_detected(Some(dark_light::Mode::Dark)),
            Appearance::Dark
        );
        assert_eq!(Appearance::default(), Appearance::Light);
    }

    #[test]
    fn system_notification_maps_to_appearance() {
        assert_eq!(
            Appearance::from_system(iced::theme::Mode::Dark),
            Some(Appearance::Dark)
        );
        assert_eq!(
            Appearance::from_system(iced::theme::Mode::Light),
            Some(Appearance::Light)
        );
    }
}
