// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_docs::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
let accent = palette::PRIMARY_600;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.07, 0.07, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_875: Color = Color::from_rgb(0.12, 0.12, 0.12);
    pub const GRAY_850: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.96);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Hover feedback on flat buttons.
    pub const HOVER_WASH: f32 = 0.08;
    /// Press feedback on flat buttons.
    pub const PRESSED_WASH: f32 = 0.16;
    /// Background of the selected drawer entry.
    pub const SELECTED: f32 = 0.14;
    pub const SELECTED_HOVER: f32 = 0.22;
    /// Tooltip surfaces.
    pub const TOOLTIP: f32 = 0.98;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Layout
    pub const APP_BAR_HEIGHT: f32 = 56.0;
    pub const DRAWER_WIDTH: f32 = 260.0;
    /// Readable line length for document text.
    pub const CONTENT_MAX_WIDTH: f32 = 860.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Heading sizes apply to rendered markdown documents; the remaining
    //! sizes are for application chrome.

    /// Document `#` heading.
    pub const HEADING_1: f32 = 34.0;

    /// Document `##` heading.
    pub const HEADING_2: f32 = 26.0;

    /// Document `###` heading.
    pub const HEADING_3: f32 = 20.0;

    /// App bar title.
    pub const TITLE_MD: f32 = 20.0;

    /// Drawer section headers.
    pub const TITLE_SM: f32 = 15.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Tooltips, hints
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const APP_BAR: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const TOOLTIP: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::HOVER_WASH < opacity::PRESSED_WASH);
    assert!(opacity::SELECTED < opacity::SELECTED_HOVER);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::DRAWER_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::HEADING_1 > typography::HEADING_2);
    assert!(typography::HEADING_2 > typography::HEADING_3);
    assert!(typography::HEADING_3 > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
};
