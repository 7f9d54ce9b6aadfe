// SPDX-License-Identifier: MPL-2.0
//! Pure style resolution for the text input.
//!
//! All color and border decisions live here, keyed on `variant`, `error`,
//! and `disabled`, so they can be checked without a renderer. Precedence
//! follows the cascade: theme defaults, then variant overrides, then the
//! disabled palette last, which wins over everything.

use crate::design_tokens::{sizing, typography};
use crate::theme::Theme;
use iced::{Color, Shadow};

/// Input size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Medium,
    #[default]
    Large,
}

/// Concrete measurements for a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub min_width: f32,
    pub height: f32,
    pub padding: f32,
    pub font_size: f32,
    pub affix_width: f32,
    pub affix_height: f32,
}

impl Size {
    /// Returns the measurement table for this size.
    #[must_use]
    pub fn metrics(self) -> Metrics {
        match self {
            Size::Medium => Metrics {
                min_width: sizing::INPUT_MIN_WIDTH,
                height: sizing::INPUT_HEIGHT_MEDIUM,
                padding: sizing::INPUT_PADDING,
                font_size: typography::BODY,
                affix_width: sizing::AFFIX_WIDTH_MEDIUM,
                affix_height: sizing::AFFIX_HEIGHT_MEDIUM,
            },
            Size::Large => Metrics {
                min_width: sizing::INPUT_MIN_WIDTH,
                height: sizing::INPUT_HEIGHT_LARGE,
                padding: sizing::INPUT_PADDING,
                font_size: typography::BODY_LG,
                affix_width: sizing::AFFIX_WIDTH_LARGE,
                affix_height: sizing::AFFIX_HEIGHT_LARGE,
            },
        }
    }
}

/// Named visual preset for the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Plain surface with a visible border.
    #[default]
    Default,
    /// Tinted surface, same border treatment.
    Darker,
    /// Near-white surface with no border at rest.
    Lighter,
}

/// Background treatment for prefix/suffix blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AffixStyle {
    /// Filled block at rest.
    #[default]
    Solid,
    /// Transparent at rest, filled on hover.
    Subtle,
}

/// Fully resolved colors and borders for one input rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub font_color: Color,
    pub placeholder_color: Color,
    pub border: Color,
    pub border_hovered: Color,
    pub border_focused: Color,
    pub background: Color,
    /// Color of the focus-indicator bar under the input.
    pub underline: Color,
    pub focus_shadow: Shadow,
    pub prefix_rest: Color,
    pub prefix_hover: Color,
    pub prefix_active: Color,
    pub suffix_rest: Color,
    pub suffix_hover: Color,
    pub suffix_active: Color,
}

impl ResolvedStyle {
    /// Computes the style for the given props.
    #[must_use]
    pub fn resolve(
        theme: &Theme,
        variant: Variant,
        error: bool,
        disabled: bool,
        prefix_style: AffixStyle,
        suffix_style: AffixStyle,
    ) -> Self {
        let neutral = theme.palette.neutral;
        let error_color = theme.palette.error;

        // Theme defaults; `error` folds into border and underline colors.
        let mut font_color = theme.text_color;
        let placeholder_color = neutral.n500;
        let mut border = if error { error_color } else { neutral.n400 };
        let mut border_hovered = if error { error_color } else { neutral.n700 };
        let mut border_focused = if error { error_color } else { neutral.n700 };
        let mut background = theme.palette.surface;
        let underline = if error { error_color } else { theme.text_color };
        let focus_shadow = theme.elevation.md;

        let affix_rest = |style: AffixStyle| match style {
            AffixStyle::Solid => neutral.n100,
            AffixStyle::Subtle => Color::TRANSPARENT,
        };
        let prefix_rest = affix_rest(prefix_style);
        let suffix_rest = affix_rest(suffix_style);

        match variant {
            Variant::Default => {}
            Variant::Lighter => {
                background = neutral.n25;
                border = Color::TRANSPARENT;
                border_hovered = neutral.n400;
                border_focused = neutral.n400;
            }
            Variant::Darker => {
                background = neutral.n100;
            }
        }

        // Disabled wins over both variant and error.
        if disabled {
            font_color = neutral.n400;
            border = neutral.n200;
            border_hovered = neutral.n200;
        }

        Self {
            font_color,
            placeholder_color,
            border,
            border_hovered,
            border_focused,
            background,
            underline,
            focus_shadow,
            prefix_rest,
            prefix_hover: neutral.n100,
            prefix_active: neutral.n200,
            suffix_rest,
            suffix_hover: neutral.n100,
            suffix_active: neutral.n200,
        }
    }
}
