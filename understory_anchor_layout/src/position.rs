// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-relative positioning.

use kurbo::{Point, Rect, Size, Vec2};

use crate::Placement;

/// Spacing between stacked siblings, in logical pixels.
pub const STACK_MARGIN: f64 = 4.0;

/// Where unpositionable elements are parked.
///
/// Far enough outside any realistic viewport that the element can be painted
/// and measured at its natural size without becoming visible.
pub const OFFSCREEN: Point = Point::new(-10_000.0, -10_000.0);

/// Spacing parameters for anchor-relative layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Space added after every stacked sibling.
    pub margin: f64,
    /// Space between the anchor edge and the first element of a stack.
    pub gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            margin: STACK_MARGIN,
            gap: STACK_MARGIN,
        }
    }
}

impl LayoutParams {
    /// Returns `true` if both spacings are finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.margin.is_finite() && self.margin >= 0.0 && self.gap.is_finite() && self.gap >= 0.0
    }
}

/// Result of placing one element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToastPosition {
    /// Top-left corner of the element in layout space.
    At(Point),
    /// The element cannot be placed yet (unmeasured, or its anchor has no
    /// geometry) and should be drawn at [`OFFSCREEN`] without transitions.
    Offscreen,
}

impl ToastPosition {
    /// Top-left corner to draw at, resolving [`ToastPosition::Offscreen`] to [`OFFSCREEN`].
    #[must_use]
    pub const fn point(self) -> Point {
        match self {
            Self::At(p) => p,
            Self::Offscreen => OFFSCREEN,
        }
    }

    /// Returns `true` if this is [`ToastPosition::Offscreen`].
    #[must_use]
    pub const fn is_offscreen(self) -> bool {
        matches!(self, Self::Offscreen)
    }
}

/// Computes the top-left corner for an element of `size` attached to `anchor`.
///
/// `offset` is the stacking offset reserved by earlier siblings (see
/// [`stack_offset`](crate::stack_offset) and [`StackModel`](crate::StackModel)).
/// When `bounds_width` is given, the horizontal coordinate is clamped so the
/// element neither starts left of `0` nor overflows that width. The vertical
/// coordinate is never clamped.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_anchor_layout::{LayoutParams, Placement, compute_position};
///
/// let anchor = Rect::new(100.0, 100.0, 200.0, 140.0);
/// let params = LayoutParams { margin: 4.0, gap: 0.0 };
/// let p = compute_position(Placement::Bottom, anchor, Size::new(60.0, 20.0), 0.0, &params, None);
/// assert_eq!(p, Point::new(120.0, 140.0));
/// ```
#[must_use]
pub fn compute_position(
    placement: Placement,
    anchor: Rect,
    size: Size,
    offset: f64,
    params: &LayoutParams,
    bounds_width: Option<f64>,
) -> Point {
    let center = anchor.center();
    let reach = params.gap + offset;
    let p = match placement {
        Placement::Top => Point::new(
            center.x - size.width / 2.0,
            anchor.y0 - reach - size.height,
        ),
        Placement::Bottom => Point::new(center.x - size.width / 2.0, anchor.y1 + reach),
        Placement::Left => Point::new(
            anchor.x0 - reach - size.width,
            center.y - size.height / 2.0,
        ),
        Placement::Right => Point::new(anchor.x1 + reach, center.y - size.height / 2.0),
    };
    match bounds_width {
        Some(width) => Point::new(clamp_x(p.x, size.width, width), p.y),
        None => p,
    }
}

/// Places an element that may be unmeasured or attached to a missing anchor.
///
/// Returns [`ToastPosition::Offscreen`] when either `anchor` or `size` is
/// `None`; otherwise defers to [`compute_position`].
#[must_use]
pub fn resolve_position(
    placement: Placement,
    anchor: Option<Rect>,
    size: Option<Size>,
    offset: f64,
    params: &LayoutParams,
    bounds_width: Option<f64>,
) -> ToastPosition {
    match (anchor, size) {
        (Some(anchor), Some(size)) => ToastPosition::At(compute_position(
            placement,
            anchor,
            size,
            offset,
            params,
            bounds_width,
        )),
        _ => ToastPosition::Offscreen,
    }
}

/// Slide displacement for an enter/exit animation.
///
/// `remaining` is how far the element still is from its resting position,
/// from `0.0` (at rest) to `1.0` (fully displaced by `distance` away from the
/// anchor). Elements therefore slide in from, and out towards, the side they
/// are attached to.
#[must_use]
pub fn slide_offset(placement: Placement, remaining: f64, distance: f64) -> Vec2 {
    placement.outward() * (remaining.clamp(0.0, 1.0) * distance)
}

fn clamp_x(x: f64, width: f64, bounds_width: f64) -> f64 {
    x.min(bounds_width - width).max(0.0)
}
