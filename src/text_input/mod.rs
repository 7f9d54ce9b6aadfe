// SPDX-License-Identifier: MPL-2.0
//! Themed text input control.
//!
//! A labeled, single-line input with optional prefix/suffix overlay blocks
//! and an animated focus-indicator bar. The widget holds no state: every
//! visual is a function of the props and the explicit [`Theme`](crate::theme::Theme)
//! handed to it, with hover/focus/disabled visuals delegated to the iced
//! styling layer.
//!
//! # Components
//!
//! - [`style`] - `ResolvedStyle`: pure computation of colors and borders
//!   from variant, error, and disabled flags
//! - [`widget`] - The `TextInput` builder and its iced rendering
//!
//! # Usage
//!
//! ```ignore
//! use frosting::text_input::{TextInput, Size, Variant};
//! use frosting::theme::Theme;
//!
//! let theme = Theme::light();
//! let input = TextInput::new(&theme, &self.amount)
//!     .label("Amount")
//!     .placeholder("0.00")
//!     .size(Size::Large)
//!     .variant(Variant::Lighter)
//!     .prefix("SAR")
//!     .on_input(Message::AmountChanged)
//!     .view();
//! ```

pub mod style;
pub mod widget;

pub use style::{AffixStyle, ResolvedStyle, Size, Variant};
pub use widget::{affix_layout, AffixLayout, TextInput};
