// SPDX-License-Identifier: MPL-2.0
//! `iced_docs` is a desktop browser for the Lumen UI documentation, built with
//! the Iced GUI framework.
//!
//! A static menu tree drives a navigation drawer, hash routes select a
//! markdown page, and the theme follows the OS color scheme unless the user
//! forces light or dark from the app bar.

#![doc(html_root_url = "https://docs.rs/iced_docs/0.1.0")]

pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod router;
pub mod ui;
