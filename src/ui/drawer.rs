// SPDX-License-Identifier: MPL-2.0
//! Navigation drawer rendering the static menu tree.
//!
//! Each section keeps a local expanded flag. The flag is purely visual: it
//! never changes the navigation path and resets on every launch.

use crate::app::state::NavigationPath;
use crate::i18n::fluent::I18n;
use crate::menu::MenuEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeStyle;
use iced::widget::tooltip::Position;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::collections::HashMap;

/// Local expansion flags, one per section, keyed by section label.
#[derive(Debug, Clone)]
pub struct State {
    sections: HashMap<&'static str, bool>,
    default_expanded: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

impl State {
    /// Every section starts with `default_expanded` until toggled.
    #[must_use]
    pub fn new(default_expanded: bool) -> Self {
        Self {
            sections: HashMap::new(),
            default_expanded,
        }
    }

    #[must_use]
    pub fn flag(&self, section: &str) -> bool {
        self.sections
            .get(section)
            .copied()
            .unwrap_or(self.default_expanded)
    }

    /// A section is open when the current page is inside it or its flag is set.
    #[must_use]
    pub fn is_expanded(&self, entry: &MenuEntry, current: &NavigationPath) -> bool {
        entry.contains(current) || self.flag(entry.label)
    }

    fn toggle(&mut self, section: &'static str) {
        let next = !self.flag(section);
        self.sections.insert(section, next);
    }
}

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub entries: &'static [MenuEntry],
    pub path: &'a NavigationPath,
    pub style: ThemeStyle,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleSection(&'static str),
    Navigate(&'static [&'static str]),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(NavigationPath),
}

/// Process a drawer message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
        Message::Navigate(path) => Event::Navigate(NavigationPath::from(path)),
    }
}

/// Render the drawer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx
        .entries
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, entry| {
            if entry.is_section() {
                column.push(build_section(&ctx, entry))
            } else {
                column.push(build_leaf(entry, ctx.path, 0.0))
            }
        })
        .padding(spacing::XS)
        .width(Length::Fill);

    Container::new(scrollable(items).height(Length::Fill))
        .width(sizing::DRAWER_WIDTH)
        .height(Length::Fill)
        .style(styles::container::drawer(&ctx.style))
        .into()
}

fn build_section<'a>(ctx: &ViewContext<'a>, entry: &'static MenuEntry) -> Element<'a, Message> {
    let expanded = ctx.state.is_expanded(entry, ctx.path);
    let (chevron, hint) = if expanded {
        (icons::chevron_down(), "drawer-section-collapse")
    } else {
        (icons::chevron_right(), "drawer-section-expand")
    };

    let header_row = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(entry.label).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(icons::sized(chevron, sizing::ICON_SM).style(styles::tinted_svg));

    let header = styles::tooltip::styled(
        button(header_row)
            .on_press(Message::ToggleSection(entry.label))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::section_header),
        ctx.i18n.tr(hint),
        Position::Right,
    );

    let mut column = Column::new().spacing(spacing::XXS).push(header);
    if expanded {
        for child in entry.children {
            column = column.push(build_leaf(child, ctx.path, spacing::MD));
        }
    }
    column.into()
}

fn build_leaf<'a>(
    entry: &'static MenuEntry,
    current: &NavigationPath,
    indent: f32,
) -> Element<'a, Message> {
    let selected = entry.is_selected(current);

    Container::new(
        button(Text::new(entry.label).size(typography::BODY))
            .on_press(Message::Navigate(entry.path))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::drawer_item(selected)),
    )
    .padding(iced::Padding::ZERO.left(indent))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MENU;

    fn path(segments: &[&str]) -> NavigationPath {
        NavigationPath::from(segments)
    }

    fn section(label: &str) -> &'static MenuEntry {
        MENU.iter().find(|e| e.label == label).unwrap()
    }

    #[test]
    fn sections_start_expanded_by_default() {
        let state = State::default();
        assert!(state.is_expanded(section("Components"), &NavigationPath::root()));
    }

    #[test]
    fn collapsed_default_still_opens_active_section() {
        let state = State::new(false);
        let current = path(&["usage", "themes"]);
        assert!(state.is_expanded(section("Usage"), &current));
        assert!(!state.is_expanded(section("Components"), &current));
    }

    #[test]
    fn toggle_flips_only_one_section() {
        let mut state = State::new(false);
        let event = update(&mut state, Message::ToggleSection("Ecosystem"));
        assert_eq!(event, Event::None);
        assert!(state.flag("Ecosystem"));
        assert!(!state.flag("Usage"));

        update(&mut state, Message::ToggleSection("Ecosystem"));
        assert!(!state.flag("Ecosystem"));
    }

    #[test]
    fn collapsing_active_section_keeps_it_open() {
        let mut state = State::default();
        update(&mut state, Message::ToggleSection("Usage"));
        assert!(!state.flag("Usage"));
        assert!(state.is_expanded(section("Usage"), &path(&["usage", "icons"])));
        assert!(!state.is_expanded(section("Usage"), &NavigationPath::root()));
    }

    #[test]
    fn navigate_emits_leaf_path() {
        let mut state = State::default();
        let event = update(&mut state, Message::Navigate(&["components", "table"]));
        assert_eq!(event, Event::Navigate(path(&["components", "table"])));
    }

    #[test]
    fn drawer_view_renders() {
        let i18n = I18n::default();
        let style = ThemeStyle::light();
        for (state, current) in [
            (State::default(), NavigationPath::root()),
            (State::new(false), path(&["usage", "installation"])),
        ] {
            let ctx = ViewContext {
                i18n: &i18n,
                state: &state,
                entries: MENU,
                path: &current,
                style,
            };
            let _element = view(ctx);
        }
    }
}
