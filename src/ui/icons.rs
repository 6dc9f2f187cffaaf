// SPDX-License-Identifier: MPL-2.0
//! Monochrome SVG icons embedded at compile time.
//!
//! Sources live in `assets/icons/` and are drawn in black; the widget tints
//! them through its style (see [`styles::svg_color`](super::styles::svg_color)),
//! so one asset serves both themes. Handles are cached with `OnceLock`.
//!
//! Icons use visual names (`chevron_down`), not action names.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Theme Icons
// =============================================================================

define_icon!(
    half_circle,
    "theme_auto.svg",
    "Half-filled circle: appearance follows the system."
);
define_icon!(sun, "theme_light.svg", "Sun with rays.");
define_icon!(moon, "theme_dark.svg", "Crescent moon.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    code_brackets,
    "repository.svg",
    "Angle brackets around a slash: source code."
);
define_icon!(chevron_down, "chevron_down.svg", "Chevron pointing down.");
define_icon!(chevron_right, "chevron_right.svg", "Chevron pointing right.");

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
