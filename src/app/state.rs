// SPDX-License-Identifier: MPL-2.0
//! Application state and its reducer.
//!
//! [`AppState`] is the only state that affects navigation or theming. It is
//! owned by the root [`App`](super::App) and replaced only through
//! [`update`], so the current value is a pure fold of every [`Message`]
//! dispatched since startup.

use crate::ui::theming::ThemeMode;
use std::fmt;

/// Ordered route segments identifying the current documentation page.
///
/// The empty path is the home page. Segments are not validated: a path that
/// matches no page simply renders as "not found" in the content pane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// The home page.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, segment-by-segment comparison against a static path.
    #[must_use]
    pub fn matches(&self, path: &[&str]) -> bool {
        self.0.len() == path.len() && self.0.iter().zip(path).all(|(a, b)| a == b)
    }
}

impl From<&[&str]> for NavigationPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for NavigationPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

/// Messages accepted by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Replace the navigation path, unconditionally.
    SetPath(NavigationPath),
    /// Advance the theme override: system → dark → light → system.
    ToggleThemeMode,
}

/// Navigation path plus the user-forced theme override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub path: NavigationPath,
    pub theme_mode: ThemeMode,
}

impl AppState {
    #[must_use]
    pub fn new(path: NavigationPath) -> Self {
        Self {
            path,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Pure reducer mapping `(message, state)` to the next state.
#[must_use]
pub fn update(state: AppState, message: Message) -> AppState {
    match message {
        Message::SetPath(path) => AppState { path, ..state },
        Message::ToggleThemeMode => AppState {
            theme_mode: state.theme_mode.toggled(),
            ..state
        },
    }
}
