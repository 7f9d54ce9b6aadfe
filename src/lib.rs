// SPDX-License-Identifier: MPL-2.0
//! `frosting` provides themed toast notifications and text inputs for the
//! Iced GUI framework.
//!
//! Both widgets are purely presentational: they render from a props-style
//! builder plus an explicit [`theme::Theme`], and the only runtime state in
//! the crate is the toast lifecycle (deadline-driven mount/close/unmount)
//! managed by [`toast::Toaster`].

#![doc(html_root_url = "https://docs.rs/frosting/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod text_input;
pub mod theme;
pub mod toast;
