// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the router, the
//! reducer and the three page regions.
//!
//! The `App` struct owns the [`state::AppState`] plus everything the state
//! deliberately leaves out: the router history, the latest OS appearance,
//! view-local drawer flags and the loaded document. Side effects (fetching
//! documents, opening URLs) are started here and nowhere else.

mod message;
pub mod paths;
pub mod state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::docs::DocumentSource;
use crate::i18n::fluent::I18n;
use crate::menu::{self, MENU};
use crate::router::{self, Router};
use crate::ui::theming::{Appearance, ThemeStyle};
use crate::ui::{content, drawer};
use iced::{window, Element, Subscription, Task, Theme};
use state::AppState;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    state: AppState,
    router: Router,
    /// Latest appearance reported by the OS. Never part of `AppState`.
    system_appearance: Appearance,
    drawer: drawer::State,
    content: content::State,
    source: DocumentSource,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("system_appearance", &self.system_appearance)
            .field("source", &self.source)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced 0.14 wants an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, resolves the initial route and starts fetching its page.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let source = DocumentSource::from_root(
            flags
                .docs_dir
                .map(PathBuf::from)
                .or_else(|| config.docs.root.clone()),
        );
        let initial = router::parse(flags.route.as_deref().unwrap_or_default());

        tracing::info!(
            route = %router::format(&initial),
            locale = %i18n.current_locale(),
            source = ?source,
            "starting documentation browser"
        );

        let mut app = App {
            drawer: drawer::State::new(config.drawer.sections_expanded),
            i18n,
            config,
            state: AppState::new(initial.clone()),
            router: Router::new(initial),
            system_appearance: Appearance::detect(),
            content: content::State::default(),
            source,
        };
        let task = app.load_document();

        (app, task)
    }

    /// `"<page label> - <title>"` for known pages, the title alone otherwise.
    pub fn title(&self) -> String {
        let app_title = self.config.title();
        match menu::find(MENU, &self.state.path) {
            Some(entry) => format!("{} - {app_title}", entry.label),
            None => app_title.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.style().theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_system_theme_subscription(),
            subscription::create_keyboard_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let style = self.style();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            state: &self.state,
            drawer: &self.drawer,
            content: &self.content,
            style,
        })
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn content(&self) -> &content::State {
        &self.content
    }

    /// Override if set, otherwise the system appearance.
    #[must_use]
    pub fn effective_appearance(&self) -> Appearance {
        self.state.theme_mode.resolve(self.system_appearance)
    }

    fn style(&self) -> ThemeStyle {
        ThemeStyle::for_appearance(self.effective_appearance())
    }

    /// Requests the page for the current path from the document source.
    fn load_document(&mut self) -> Task<Message> {
        let path = self.content.request(&self.state.path);
        let source = self.source.clone();
        tracing::debug!(document = %path, "fetching document");

        Task::perform(
            async move {
                let result = source.fetch(&path).await;
                (path, result)
            },
            |(path, result)| Message::DocumentLoaded { path, result },
        )
    }
}
