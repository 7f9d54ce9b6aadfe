// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! Widgets in this crate never consult ambient/global styling state. A
//! [`Theme`] value is handed to each widget explicitly at construction time
//! and consumed read-only, so the rendered output is a pure function of
//! props + theme.

use crate::config::Config;
use crate::design_tokens::{palette, shadow};
use iced::{Color, Shadow};
use serde::{Deserialize, Serialize};

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Returns `true` for right-to-left layouts.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Neutral color scale used for borders, affix backgrounds and muted text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralScale {
    pub n25: Color,
    pub n100: Color,
    pub n200: Color,
    pub n400: Color,
    pub n500: Color,
    pub n700: Color,
}

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Plain widget surface (input background for the default variant).
    pub surface: Color,
    pub neutral: NeutralScale,
    /// Error accent used for borders and underlines.
    pub error: Color,
}

/// Elevation (shadow) values consumed by widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elevation {
    /// Shadow applied to a focused input.
    pub md: Shadow,
}

/// Explicit theme configuration passed to every widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub direction: Direction,
    pub text_color: Color,
    pub palette: Palette,
    pub elevation: Elevation,
    /// Snaps the toast exit instead of animating it.
    pub reduced_motion: bool,
}

impl Theme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            direction: Direction::Ltr,
            text_color: palette::NEUTRAL_900,
            palette: Palette {
                surface: palette::WHITE,
                neutral: NeutralScale {
                    n25: palette::NEUTRAL_25,
                    n100: palette::NEUTRAL_100,
                    n200: palette::NEUTRAL_200,
                    n400: palette::NEUTRAL_400,
                    n500: palette::NEUTRAL_500,
                    n700: palette::NEUTRAL_700,
                },
                error: palette::ERROR_700,
            },
            elevation: Elevation { md: shadow::MD },
            reduced_motion: false,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            direction: Direction::Ltr,
            text_color: palette::NEUTRAL_25,
            palette: Palette {
                surface: palette::NEUTRAL_900,
                neutral: NeutralScale {
                    n25: palette::NEUTRAL_900,
                    n100: palette::NEUTRAL_800,
                    n200: palette::NEUTRAL_700,
                    n400: palette::NEUTRAL_500,
                    n500: palette::NEUTRAL_400,
                    n700: palette::NEUTRAL_200,
                },
                error: palette::ERROR_500,
            },
            elevation: Elevation { md: shadow::MD },
            reduced_motion: false,
        }
    }

    /// Resolves a [`ThemeMode`], consulting the system preference for
    /// [`ThemeMode::System`].
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => Self::from_system(),
        }
    }

    /// Detects the system theme and returns the appropriate `Theme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }

    /// Builds a theme from persisted user preferences.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::from_mode(config.mode)
            .with_direction(config.direction)
            .with_reduced_motion(config.reduced_motion)
    }

    /// Returns this theme with the given layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns this theme with the reduced-motion preference applied.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}
