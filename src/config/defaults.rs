// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// General Defaults
// ==========================================================================

/// Title shown in the app bar and window title when none is configured.
pub const DEFAULT_TITLE: &str = "Lumen UI";

// ==========================================================================
// Documentation Defaults
// ==========================================================================

/// Repository opened by the app bar's external link button.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/lumen-ui/lumen-ui";

// ==========================================================================
// Drawer Defaults
// ==========================================================================

/// Whether drawer sections start expanded on first render.
pub const DEFAULT_SECTIONS_EXPANDED: bool = true;
