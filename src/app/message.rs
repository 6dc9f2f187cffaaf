// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::docs::DocumentPath;
use crate::error::Error;
use crate::ui::{content, drawer, toolbar};

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Drawer(drawer::Message),
    Content(content::Message),
    /// The OS color scheme changed.
    SystemThemeChanged(iced::theme::Mode),
    /// Alt+Left.
    HistoryBack,
    /// Alt+Right.
    HistoryForward,
    /// A document fetch finished.
    DocumentLoaded {
        path: DocumentPath,
        result: Result<String, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Hash route to open on startup (e.g. `#/usage/themes`).
    pub route: Option<String>,
    /// Documentation root to read pages from instead of the bundled ones.
    /// Takes precedence over `[docs] root` in the config file.
    pub docs_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DOCS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
