// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sides of an anchor that a floating element can attach to.

use kurbo::{Size, Vec2};

/// The side of an anchor a toast is attached to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above the anchor, horizontally centered.
    #[default]
    Top,
    /// Right of the anchor, vertically centered.
    Right,
    /// Below the anchor, horizontally centered.
    Bottom,
    /// Left of the anchor, vertically centered.
    Left,
}

impl Placement {
    /// All placements, in clockwise order starting at [`Placement::Top`].
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns `true` for placements that stack along the vertical axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Extent of `size` along the stacking axis of this placement.
    ///
    /// Top/bottom stacks grow by height, left/right stacks grow by width.
    #[must_use]
    pub fn stacking_extent(self, size: Size) -> f64 {
        if self.is_vertical() {
            size.height
        } else {
            size.width
        }
    }

    /// Unit vector pointing away from the anchor.
    ///
    /// Stacked siblings and slide animations both move along this direction.
    #[must_use]
    pub const fn outward(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// The placement on the other side of the anchor.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Lowercase name, as used in configuration (`"top"`, `"right"`, …).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Parses a lowercase placement name. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}
