// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are turned into [`state::Message`]s, which are the only
//! way the navigation path or the theme override change.

use super::state::{self, NavigationPath};
use super::{App, Message};
use crate::router;
use crate::ui::content::{self, Event as ContentEvent};
use crate::ui::drawer::{self, Event as DrawerEvent};
use crate::ui::theming::Appearance;
use crate::ui::toolbar;
use iced::Task;

/// Routes a top-level message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Toolbar(message) => handle_toolbar_message(app, message),
        Message::Drawer(message) => match drawer::update(&mut app.drawer, message) {
            DrawerEvent::None => Task::none(),
            DrawerEvent::Navigate(path) => navigate(app, path),
        },
        Message::Content(message) => match content::update(&app.content, message) {
            ContentEvent::None => Task::none(),
            ContentEvent::Navigate(path) => navigate(app, path),
            ContentEvent::OpenExternal(url) => {
                open_url(&url);
                Task::none()
            }
        },
        Message::SystemThemeChanged(mode) => {
            if let Some(appearance) = Appearance::from_system(mode) {
                tracing::debug!(?appearance, "system appearance changed");
                app.system_appearance = appearance;
            }
            Task::none()
        }
        Message::HistoryBack => match app.router.back() {
            Some(path) => dispatch(app, state::Message::SetPath(path)),
            None => Task::none(),
        },
        Message::HistoryForward => match app.router.forward() {
            Some(path) => dispatch(app, state::Message::SetPath(path)),
            None => Task::none(),
        },
        Message::DocumentLoaded { path, result } => {
            if let Err(err) = &result {
                tracing::warn!(document = %path, error = %err, "document failed to load");
            }
            if !app.content.loaded(&path, result) {
                tracing::debug!(document = %path, "dropping stale document");
            }
            Task::none()
        }
    }
}

fn handle_toolbar_message(app: &mut App, message: toolbar::Message) -> Task<Message> {
    match message {
        toolbar::Message::ToggleThemeMode => dispatch(app, state::Message::ToggleThemeMode),
        toolbar::Message::OpenRepository => {
            let url = app.config.repository_url().to_string();
            open_url(&url);
            Task::none()
        }
    }
}

/// Records `path` in the router history, then sets it.
fn navigate(app: &mut App, path: NavigationPath) -> Task<Message> {
    let path = app.router.navigate(path);
    dispatch(app, state::Message::SetPath(path))
}

/// Applies a reducer message and starts any follow-up work it implies.
fn dispatch(app: &mut App, message: state::Message) -> Task<Message> {
    let loads_document = matches!(message, state::Message::SetPath(_));
    app.state = state::update(std::mem::take(&mut app.state), message);

    if loads_document {
        tracing::info!(route = %router::format(&app.state.path), "navigated");
        app.load_document()
    } else {
        tracing::info!(mode = ?app.state.theme_mode, "theme override changed");
        Task::none()
    }
}

fn open_url(url: &str) {
    if let Err(err) = open::that(url) {
        tracing::warn!(url, error = %err, "failed to open link");
    }
}
