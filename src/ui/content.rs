// SPDX-License-Identifier: MPL-2.0
//! Content pane showing the markdown page for the current route.
//!
//! The pane only remembers the latest request. A fetch that completes for
//! any other document is stale and gets dropped, so a slow page can never
//! replace a faster one requested after it.

use crate::app::state::NavigationPath;
use crate::docs::DocumentPath;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::router::{self, Link};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeStyle;
use iced::widget::{markdown, scrollable, Container, Text};
use iced::{Element, Length};

/// What the pane currently displays.
#[derive(Debug, Clone)]
pub enum Document {
    Loading,
    Ready(Vec<markdown::Item>),
    Failed(Error),
}

#[derive(Debug, Clone)]
pub struct State {
    route: NavigationPath,
    requested: DocumentPath,
    document: Document,
}

impl Default for State {
    fn default() -> Self {
        let route = NavigationPath::root();
        Self {
            requested: DocumentPath::for_page(&route),
            route,
            document: Document::Loading,
        }
    }
}

impl State {
    /// Starts loading the page for `route` and returns the document to fetch.
    pub fn request(&mut self, route: &NavigationPath) -> DocumentPath {
        self.route = route.clone();
        self.requested = DocumentPath::for_page(route);
        self.document = Document::Loading;
        self.requested.clone()
    }

    /// Applies a fetch result. Returns `false` when the result is stale.
    pub fn loaded(&mut self, path: &DocumentPath, result: Result<String>) -> bool {
        if *path != self.requested {
            return false;
        }
        self.document = match result {
            Ok(text) => Document::Ready(markdown::parse(&text).collect()),
            Err(err) => Document::Failed(err),
        };
        true
    }

    #[must_use]
    pub fn requested(&self) -> &DocumentPath {
        &self.requested
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Contextual data needed to render the content pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub style: ThemeStyle,
}

/// Messages emitted by the content pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LinkClicked(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(NavigationPath),
    OpenExternal(String),
}

/// Documentation links stay inside the app, resolved against the shown page.
/// Links with a scheme or host go to the OS. In-page anchors do nothing.
pub fn update(state: &State, message: Message) -> Event {
    match message {
        Message::LinkClicked(href) => match Link::classify(&href, &state.route) {
            Link::Internal(path) => Event::Navigate(path),
            Link::External(url) => Event::OpenExternal(url),
            Link::Fragment => Event::None,
        },
    }
}

/// Markdown settings derived from the active style: theme colors plus heading sizes.
#[must_use]
pub fn markdown_settings(style: &ThemeStyle) -> markdown::Settings {
    let mut settings = markdown::Settings::from(style.theme());
    settings.text_size = typography::BODY.into();
    settings.h1_size = style.headings.h1.into();
    settings.h2_size = style.headings.h2.into();
    settings.h3_size = style.headings.h3.into();
    settings
}

/// Render the content pane.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match &ctx.state.document {
        Document::Loading => Text::new(ctx.i18n.tr("content-loading")).into(),
        Document::Ready(items) => markdown::view(items, markdown_settings(&ctx.style))
            .map(|url| Message::LinkClicked(url.to_string())),
        Document::Failed(err) => {
            let route = router::format(&ctx.state.route);
            Text::new(ctx.i18n.tr_with_args(err.i18n_key(), &[("route", route.as_str())]))
                .size(typography::TITLE_SM)
                .into()
        }
    };

    let page = Container::new(body)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    Container::new(scrollable(Container::new(page).center_x(Length::Fill)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::paper(&ctx.style))
        .into()
}
