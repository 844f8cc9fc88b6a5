// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_toast --heading-base-level=0

//! Understory Toast: a framework-independent runtime for anchored toasts.
//!
//! Toasts here are attached to a named *anchor* (a button, a field, a
//! row) rather than to a corner of the window. Several toasts on the same
//! anchor side stack outward in creation order, and each one runs a small
//! enter → steady → exit state machine.
//!
//! The crate is split along the flow of a toast:
//!
//! - [`Toaster`]: a cloneable handle callers use to show, update, and remove
//!   toasts. It only enqueues [`Action`]s and hands back a [`ToastId`]
//!   synchronously.
//! - [`ActionQueue`]: the ordered log those actions wait in. It is drained
//!   whole, once per processing step.
//! - [`Registry`]: live [`ToastRecord`]s keyed by id, and the rules for
//!   applying each action.
//! - [`Anchors`]: mounted anchors and their last reported geometry.
//! - [`Transition`]: the per-toast timed state machine ([`Phase`]).
//! - [`Viewport`]: the single owner of all of the above. It drains the
//!   queue, advances transitions, fires auto-dismiss timers, and computes
//!   [`RenderedToast`]s using [`understory_anchor_layout`].
//!
//! This crate does not draw anything and does not read a clock. Hosts supply
//! timestamps (milliseconds from any monotonic source), anchor rectangles,
//! measured toast sizes, and the viewport size; they paint what
//! [`Viewport::render`] returns.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_toast::{Phase, ShowOptions, ToastConfig, Viewport};
//! use understory_toast::DefaultToastData;
//!
//! let mut viewport = Viewport::<DefaultToastData>::new(ToastConfig::default()).unwrap();
//! viewport.mount(Size::new(800.0, 600.0));
//! viewport.register_anchor("save", Rect::new(100.0, 300.0, 180.0, 330.0));
//!
//! let toaster = viewport.toaster();
//! let id = toaster.show_toast("save", "Saved", ShowOptions::default());
//!
//! // Apply queued actions, then render. The first frame is off-screen so
//! // the host can measure the toast at its natural size.
//! viewport.frame(0);
//! assert!(viewport.render(0)[0].position.is_offscreen());
//! viewport.measure(id, Size::new(120.0, 24.0));
//!
//! let frame = viewport.render(16);
//! let rect = frame[0].rect.unwrap();
//! assert!(rect.y1 <= 300.0);
//!
//! // Removal plays the exit animation before the toast disappears.
//! toaster.remove_toast(id);
//! viewport.frame(1000);
//! assert_eq!(viewport.toast(id).unwrap().phase(), Phase::Exiting);
//! viewport.frame(1300);
//! assert!(viewport.is_empty());
//! ```
//!
//! ## Diagnostics
//!
//! Nothing in this crate is fatal after construction. Unknown ids, unknown
//! anchors, and similar mistakes are logged through the [`log`] facade at
//! `warn` level and returned as [`Diagnostic`]s in each step's [`Report`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod anchor;
mod config;
mod data;
mod id;
mod registry;
mod report;
mod toaster;
mod transition;
mod viewport;

pub use action::{Action, ActionKind, ActionQueue};
pub use anchor::Anchors;
pub use config::{ConfigError, DEFAULT_ANIMATION_MS, DEFAULT_SLIDE_DISTANCE, Portal, ToastConfig};
pub use data::{DefaultToastData, DefaultToastPatch, ToastData, ToastKind};
pub use id::ToastId;
pub use registry::{Registry, ToastRecord};
pub use report::{Diagnostic, Report, ToastEvent};
pub use toaster::{ShowOptions, ToastOptions, Toaster};
pub use transition::{Phase, Transition};
pub use viewport::{Invalidation, RenderedToast, Viewport};

pub use understory_anchor_layout::{LayoutParams, Placement, ToastPosition};
