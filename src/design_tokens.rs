// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the library's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Durations for transitions and toast lifecycle

## Examples

```
use frosting::design_tokens::{palette, sizing, spacing};

// Toast cards have a fixed width
let card_width = sizing::TOAST_WIDTH; // 484px

// Use the spacing scale
let padding = spacing::MD; // 16px

// Semantic colors
let error_border = palette::ERROR_700;
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral scale (cool gray)
    pub const NEUTRAL_25: Color = Color::from_rgb8(0xFC, 0xFC, 0xFD);
    pub const NEUTRAL_100: Color = Color::from_rgb8(0xF2, 0xF4, 0xF7);
    pub const NEUTRAL_200: Color = Color::from_rgb8(0xEA, 0xEC, 0xF0);
    pub const NEUTRAL_400: Color = Color::from_rgb8(0x98, 0xA2, 0xB3);
    pub const NEUTRAL_500: Color = Color::from_rgb8(0x66, 0x70, 0x85);
    pub const NEUTRAL_700: Color = Color::from_rgb8(0x34, 0x40, 0x54);
    pub const NEUTRAL_800: Color = Color::from_rgb8(0x1D, 0x29, 0x39);
    pub const NEUTRAL_900: Color = Color::from_rgb8(0x10, 0x18, 0x28);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xF0, 0x44, 0x38);
    pub const ERROR_700: Color = Color::from_rgb8(0xB4, 0x23, 0x18);
    pub const WARNING_500: Color = Color::from_rgb8(0xF7, 0x90, 0x09);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x12, 0xB7, 0x6A);
    pub const INFO_500: Color = Color::from_rgb8(0x2E, 0x90, 0xFA);
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
    // Toast card geometry
    pub const TOAST_WIDTH: f32 = 484.0;
    /// Gap between a toast card and the viewport edge.
    pub const TOAST_INSET: f32 = 16.0;

    // Text input geometry
    pub const INPUT_MIN_WIDTH: f32 = 320.0;
    pub const INPUT_HEIGHT_MEDIUM: f32 = 32.0;
    pub const INPUT_HEIGHT_LARGE: f32 = 40.0;
    pub const INPUT_PADDING: f32 = 8.0;
    /// Height of the animated focus-indicator bar under the input.
    pub const INPUT_UNDERLINE: f32 = 2.0;

    // Prefix/suffix overlay blocks sit inside the input's 1px border,
    // hence the 2px difference with the input heights.
    pub const AFFIX_WIDTH_MEDIUM: f32 = 61.0;
    pub const AFFIX_WIDTH_LARGE: f32 = 74.0;
    pub const AFFIX_HEIGHT_MEDIUM: f32 = 30.0;
    pub const AFFIX_HEIGHT_LARGE: f32 = 38.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large body - large input text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - medium input text, toast messages, labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - toast severity accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Elevated drop shadow for toast cards (0 32px 64px, neutral-900 at 14%).
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: 0.14,
            ..palette::NEUTRAL_900
        },
        offset: Vector { x: 0.0, y: 32.0 },
        blur_radius: 64.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Duration of the toast enter/exit slide.
    pub const TOAST_SLIDE: Duration = Duration::from_millis(200);

    /// Grace window between the closing styling being applied and the
    /// toast node being removed. Equal to the exit slide so removal
    /// happens once the card is off screen.
    pub const TOAST_GRACE: Duration = Duration::from_millis(200);

    /// Default display duration for toasts that are not closed manually.
    pub const TOAST_DEFAULT_DURATION: Duration = Duration::from_millis(993_000);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Sizing validation
    assert!(sizing::INPUT_HEIGHT_LARGE > sizing::INPUT_HEIGHT_MEDIUM);
    assert!(sizing::AFFIX_WIDTH_LARGE > sizing::AFFIX_WIDTH_MEDIUM);
    assert!(sizing::AFFIX_HEIGHT_MEDIUM < sizing::INPUT_HEIGHT_MEDIUM);
    assert!(sizing::AFFIX_HEIGHT_LARGE < sizing::INPUT_HEIGHT_LARGE);
    assert!(sizing::TOAST_WIDTH > sizing::INPUT_MIN_WIDTH);

    // Typography validation
    assert!(typography::BODY_LG > typography::BODY);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation: teardown must not outrun the exit slide
    assert!(motion::TOAST_GRACE.as_millis() >= motion::TOAST_SLIDE.as_millis());
};
