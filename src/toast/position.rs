// SPDX-License-Identifier: MPL-2.0
//! The six toast placements and their slide geometry.
//!
//! A toast anchors to a viewport corner or edge midpoint, inset by 16px,
//! and slides in from off screen along the axis its placement suggests:
//! side placements slide horizontally, center placements slide vertically.
//! The exit animation is the enter slide in reverse, back to the same
//! off-screen origin.

use crate::design_tokens::sizing;
use iced::{alignment, Vector};

/// Viewport placement of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All six placements, for exhaustive styling checks.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Horizontal anchor within the viewport.
    #[must_use]
    pub fn align_x(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    /// Vertical anchor within the viewport.
    #[must_use]
    pub fn align_y(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => {
                alignment::Vertical::Top
            }
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
                alignment::Vertical::Bottom
            }
        }
    }

    /// Gap between the card and the anchored viewport edges.
    #[must_use]
    pub fn inset(self) -> f32 {
        sizing::TOAST_INSET
    }

    /// Off-screen offset the card enters from, relative to its resting
    /// anchor. Side placements start a full card width (plus inset) beyond
    /// the side edge; center placements start a viewport height above or
    /// below.
    #[must_use]
    pub fn enter_offset(self, viewport_height: f32) -> Vector {
        let slide = sizing::TOAST_WIDTH + sizing::TOAST_INSET;
        match self {
            Position::TopLeft | Position::BottomLeft => Vector::new(-slide, 0.0),
            Position::TopRight | Position::BottomRight => Vector::new(slide, 0.0),
            Position::TopCenter => Vector::new(0.0, -viewport_height),
            Position::BottomCenter => Vector::new(0.0, viewport_height),
        }
    }

    /// Off-screen offset the card exits toward. The exit is the enter slide
    /// reversed, so both share one origin.
    #[must_use]
    pub fn exit_offset(self, viewport_height: f32) -> Vector {
        self.enter_offset(viewport_height)
    }

    /// Interpolated offset for an in-flight slide. `progress` runs from 0.0
    /// (fully off screen) to 1.0 (at rest); the closing animation feeds it
    /// in reverse.
    #[must_use]
    pub fn slide_offset(self, viewport_height: f32, progress: f32) -> Vector {
        let origin = self.enter_offset(viewport_height);
        let remaining = 1.0 - progress.clamp(0.0, 1.0);
        Vector::new(origin.x * remaining, origin.y * remaining)
    }
}
