// SPDX-License-Identifier: MPL-2.0
//! Root layout: app bar on top, drawer and content pane below.

use super::state::AppState;
use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::menu::MENU;
use crate::ui::theming::ThemeStyle;
use crate::ui::{content, drawer, toolbar};
use iced::{
    widget::{Column, Container, Row},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub state: &'a AppState,
    pub drawer: &'a drawer::State,
    pub content: &'a content::State,
    pub style: ThemeStyle,
}

/// Composes the three regions under the active theme style.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let app_bar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        title: ctx.config.title(),
        theme_mode: ctx.state.theme_mode,
        style: ctx.style,
    })
    .map(Message::Toolbar);

    let navigation = drawer::view(drawer::ViewContext {
        i18n: ctx.i18n,
        state: ctx.drawer,
        entries: MENU,
        path: &ctx.state.path,
        style: ctx.style,
    })
    .map(Message::Drawer);

    let page = content::view(content::ViewContext {
        i18n: ctx.i18n,
        state: ctx.content,
        style: ctx.style,
    })
    .map(Message::Content);

    let body = Row::new()
        .push(navigation)
        .push(page)
        .height(Length::Fill);

    Container::new(Column::new().push(app_bar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
