// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor_layout --heading-base-level=0

//! Understory Anchor Layout: placement and stacking math for anchored floating UI.
//!
//! Toasts, tooltips, and similar floating elements are often attached to a
//! specific *anchor* rather than to a corner of the window. This crate holds
//! the pure geometry for that:
//!
//! - [`Placement`]: which side of the anchor an element attaches to.
//! - [`compute_position`]: top-left corner for a measured element, given its
//!   anchor rectangle, placement, and stacking offset. Only the horizontal
//!   coordinate is clamped to the available width.
//! - [`resolve_position`]: the same, but tolerant of unmeasured elements and
//!   missing anchors, which resolve to [`ToastPosition::Offscreen`].
//! - [`stack_offset`] and [`StackModel`]: how much space earlier siblings on
//!   the same anchor side reserve, oldest closest to the anchor.
//! - [`slide_offset`]: displacement for enter/exit slides.
//!
//! It does not own any state about which elements exist, and it does not
//! know about any UI framework. Hosts measure elements, report anchor
//! rectangles, and feed the results back in.
//!
//! ## Minimal example
//!
//! Two toasts stacked above the same button:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_anchor_layout::{LayoutParams, Placement, StackModel, compute_position};
//!
//! let button = Rect::new(100.0, 300.0, 180.0, 330.0);
//! let params = LayoutParams::default();
//! let sizes = [Size::new(120.0, 24.0), Size::new(120.0, 36.0)];
//!
//! let mut stack = StackModel::new(params.margin);
//! for size in sizes {
//!     stack.push(Placement::Top.stacking_extent(size));
//! }
//!
//! let first = compute_position(Placement::Top, button, sizes[0], stack.offset_of(0), &params, None);
//! let second = compute_position(Placement::Top, button, sizes[1], stack.offset_of(1), &params, None);
//!
//! // The older toast sits closest to the anchor; the newer one clears it by the margin.
//! assert!(second.y + sizes[1].height + params.margin <= first.y);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod placement;
mod position;
mod stack;

pub use placement::Placement;
pub use position::{
    LayoutParams, OFFSCREEN, STACK_MARGIN, ToastPosition, compute_position, resolve_position,
    slide_offset,
};
pub use stack::{StackModel, stack_offset};
