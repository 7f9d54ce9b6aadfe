// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! This module provides a transient, auto-dismissing notification overlay
//! following toast/snackbar UX patterns. A toast mounts an alert card at one
//! of six viewport placements, slides it in, and tears it down after its
//! display duration (or earlier, through the card's close affordance).
//!
//! # Components
//!
//! - [`alert`] - `Alert` content rendered inside a toast, with severity levels
//! - [`position`] - The six viewport placements and their slide geometry
//! - [`controller`] - `Toaster` lifecycle state machine and the `Surface` host abstraction
//! - [`widget`] - Iced rendering of live toasts
//!
//! # Usage
//!
//! ```
//! use frosting::toast::{Alert, ToastConfig, Position, Toaster};
//! use std::time::{Duration, Instant};
//!
//! let mut toaster = Toaster::new();
//!
//! toaster.show(
//!     ToastConfig::new(Alert::success("Image saved successfully"))
//!         .position(Position::BottomLeft)
//!         .duration(Duration::from_secs(5)),
//!     Instant::now(),
//! );
//!
//! // In your update loop, drive time-based transitions
//! toaster.tick(Instant::now());
//! ```
//!
//! # Lifecycle
//!
//! Each toast moves through `Mounted → Closing → Unmounted`. The closing
//! styling is applied at `duration`, and the node is removed a fixed 200ms
//! later, once the exit slide has finished. A manual close follows the same
//! two-step teardown with the same 200ms grace window.

pub mod alert;
pub mod controller;
pub mod position;
pub mod widget;

pub use alert::{Alert, Severity};
pub use controller::{Surface, ToastConfig, ToastId, ToastPhase, ToastView, Toaster};
pub use position::Position;
