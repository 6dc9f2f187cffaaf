// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` enum and, when it has local state or
//! needs to talk to the root, an `update` function returning an `Event`.
//!
//! # Regions
//!
//! - [`toolbar`] - App bar with the title, theme toggle and repository link
//! - [`drawer`] - Navigation tree with collapsible sections
//! - [`content`] - Markdown page for the current route
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme resolution
//! - [`icons`] - SVG icon loading

pub mod content;
pub mod design_tokens;
pub mod drawer;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod toolbar;
