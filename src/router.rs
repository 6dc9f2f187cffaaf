// SPDX-License-Identifier: MPL-2.0
//! Hash routes and navigation history.
//!
//! Routes look like `#/usage/installation`. The router turns them into a
//! [`NavigationPath`] and remembers where the user has been so that
//! back/forward shortcuts can replay earlier paths.

use crate::app::state::NavigationPath;

const ROUTE_PREFIX: &str = "#/";

/// Parses a hash route into path segments.
///
/// The leading `#` and `/` are optional, empty segments are dropped and
/// anything after `?` is ignored.
#[must_use]
pub fn parse(route: &str) -> NavigationPath {
    let route = route.split('?').next().unwrap_or_default();
    let route = route.strip_prefix('#').unwrap_or(route);
    route
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Formats a path as a hash route. The home page is `#/`.
#[must_use]
pub fn format(path: &NavigationPath) -> String {
    format!("{ROUTE_PREFIX}{}", path.segments().join("/"))
}

/// Where a clicked link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// A route inside the documentation.
    Internal(NavigationPath),
    /// Anything with a scheme or host, handed to the OS.
    External(String),
    /// An in-page anchor such as `#install`. Nothing to open.
    Fragment,
}

impl Link {
    /// Classifies `href` as clicked on the page at `current`.
    ///
    /// Root-relative (`/usage/themes`) and relative (`../themes`) hrefs are
    /// resolved against `current` the way a browser resolves them against
    /// the page's `index.md` directory.
    #[must_use]
    pub fn classify(href: &str, current: &NavigationPath) -> Self {
        let href = href.trim();
        if href.starts_with(ROUTE_PREFIX) || href == "#" {
            return Link::Internal(parse(href));
        }
        if href.starts_with('#') {
            return Link::Fragment;
        }
        if href.starts_with("//") || has_scheme(href) {
            return Link::External(href.to_string());
        }

        let target = href.split(['?', '#']).next().unwrap_or_default();
        match target.strip_prefix('/') {
            Some(absolute) => Link::Internal(resolve(&NavigationPath::root(), absolute)),
            None => Link::Internal(resolve(current, target)),
        }
    }
}

fn has_scheme(href: &str) -> bool {
    href.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn resolve(base: &NavigationPath, target: &str) -> NavigationPath {
    let mut segments = base.segments().to_vec();
    for segment in target.split('/') {
        match segment {
            "" | "." | "index.md" => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }
    NavigationPath::new(segments)
}

/// Linear back/forward history of visited paths.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<NavigationPath>,
    cursor: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(NavigationPath::root())
    }
}

impl Router {
    #[must_use]
    pub fn new(initial: NavigationPath) -> Self {
        Self {
            history: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &NavigationPath {
        &self.history[self.cursor]
    }

    /// Moves to `path`, discarding any forward entries.
    ///
    /// Navigating to the current path leaves history untouched.
    pub fn navigate(&mut self, path: NavigationPath) -> NavigationPath {
        if *self.current() != path {
            self.history.truncate(self.cursor + 1);
            self.history.push(path.clone());
            self.cursor = self.history.len() - 1;
        }
        path
    }

    pub fn back(&mut self) -> Option<NavigationPath> {
        let previous = self.cursor.checked_sub(1)?;
        self.cursor = previous;
        Some(self.current().clone())
    }

    pub fn forward(&mut self) -> Option<NavigationPath> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current().clone())
    }
}
