// SPDX-License-Identifier: MPL-2.0
//! Error types shared across configuration loading and document fetching.
//!
//! Nothing in the state/update layer can fail; errors only surface at the
//! edges (reading `settings.toml`, fetching a markdown page) and are turned
//! into a warning or a "page not found" view by the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The requested document does not exist in the active document source.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// The document exists but cannot be rendered (e.g. not valid UTF-8).
    #[error("Invalid document {path}: {reason}")]
    InvalidDocument { path: String, reason: String },
}

impl Error {
    /// Returns the i18n message key used to describe this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::DocumentNotFound(_) => "content-not-found",
            Error::InvalidDocument { .. } => "content-invalid",
            Error::Io(_) | Error::Config(_) => "content-load-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
