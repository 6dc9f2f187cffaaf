// SPDX-License-Identifier: MPL-2.0
//! Static navigation tree shown in the drawer.
//!
//! The tree is hand-authored and compiled in; nothing loads or edits it at
//! runtime. Top-level entries with children are drawer sections whose `path`
//! is the prefix shared by their children.

use crate::app::state::NavigationPath;

/// A node of the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static [&'static str],
    pub children: &'static [MenuEntry],
}

impl MenuEntry {
    const fn leaf(label: &'static str, path: &'static [&'static str]) -> Self {
        Self {
            label,
            path,
            children: &[],
        }
    }

    const fn section(
        label: &'static str,
        path: &'static [&'static str],
        children: &'static [MenuEntry],
    ) -> Self {
        Self {
            label,
            path,
            children,
        }
    }

    #[must_use]
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }

    /// A leaf is selected only on an exact path match, never on a prefix.
    #[must_use]
    pub fn is_selected(&self, current: &NavigationPath) -> bool {
        current.matches(self.path)
    }

    /// Whether `current` lives under this section (first segment matches the section prefix).
    #[must_use]
    pub fn contains(&self, current: &NavigationPath) -> bool {
        match (self.path.first(), current.first()) {
            (Some(prefix), Some(first)) => *prefix == first,
            _ => false,
        }
    }
}

/// The documentation site's navigation tree.
pub static MENU: &[MenuEntry] = &[
    MenuEntry::leaf("Home", &[]),
    MenuEntry::section(
        "Usage",
        &["usage"],
        &[
            MenuEntry::leaf("Installation", &["usage", "installation"]),
            MenuEntry::leaf("Getting started", &["usage", "getting-started"]),
            MenuEntry::leaf("Styling", &["usage", "styling"]),
            MenuEntry::leaf("Themes", &["usage", "themes"]),
            MenuEntry::leaf("Icons", &["usage", "icons"]),
            MenuEntry::leaf("Localization", &["usage", "localization"]),
        ],
    ),
    MenuEntry::section(
        "Components",
        &["components"],
        &[
            MenuEntry::leaf("Button", &["components", "button"]),
            MenuEntry::leaf("Dialog", &["components", "dialog"]),
            MenuEntry::leaf("Drawer", &["components", "drawer"]),
            MenuEntry::leaf("Table", &["components", "table"]),
            MenuEntry::leaf("Tooltip", &["components", "tooltip"]),
        ],
    ),
    MenuEntry::section(
        "Ecosystem",
        &["ecosystem"],
        &[
            MenuEntry::leaf("Date pickers", &["ecosystem", "pickers"]),
            MenuEntry::leaf("Lab", &["ecosystem", "lab"]),
        ],
    ),
    MenuEntry::leaf("Contributing", &["contributing"]),
    MenuEntry::leaf("Release notes", &["release-notes"]),
];

/// Depth-first iterator over every entry that has a page (leaves only).
pub fn leaves(entries: &'static [MenuEntry]) -> impl Iterator<Item = &'static MenuEntry> {
    entries.iter().flat_map(|entry| {
        let own = (!entry.is_section()).then_some(entry);
        own.into_iter().chain(entry.children.iter())
    })
}

/// Finds the leaf whose path equals `current`.
#[must_use]
pub fn find(entries: &'static [MenuEntry], current: &NavigationPath) -> Option<&'static MenuEntry> {
    leaves(entries).find(|entry| entry.is_selected(current))
}
