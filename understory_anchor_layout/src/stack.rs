// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix-sum model for a stack of floating elements sharing one anchor side.

use alloc::vec::Vec;

use kurbo::Size;

use crate::Placement;

/// Returns the stacking offset contributed by `earlier` siblings.
///
/// Each sibling reserves its extent along the placement's stacking axis plus
/// `margin`. Siblings are expected to be the ones created strictly before the
/// element being placed, so the oldest element ends up closest to the anchor.
///
/// ```
/// use kurbo::Size;
/// use understory_anchor_layout::{Placement, stack_offset};
///
/// let earlier = [Size::new(100.0, 20.0), Size::new(80.0, 30.0)];
/// assert_eq!(stack_offset(Placement::Top, earlier, 4.0), 58.0);
/// assert_eq!(stack_offset(Placement::Left, earlier, 4.0), 188.0);
/// ```
pub fn stack_offset<I>(placement: Placement, earlier: I, margin: f64) -> f64
where
    I: IntoIterator<Item = Size>,
{
    earlier
        .into_iter()
        .map(|size| sanitize(placement.stacking_extent(size)) + margin)
        .sum()
}

/// Ordered extents of one stack with a lazily maintained prefix-sum cache.
///
/// Index `0` is closest to the anchor. The offset of an entry is the sum of
/// `extent + margin` over every entry before it. Changing an extent only
/// invalidates the cache from that index onward, so re-measuring the newest
/// toast in a long stack does not rebuild the whole prefix.
#[derive(Clone, Debug, Default)]
pub struct StackModel {
    margin: f64,
    extents: Vec<f64>,
    prefix_starts: Vec<f64>,
    dirty_from: Option<usize>,
}

impl StackModel {
    /// Creates an empty stack whose entries are separated by `margin`.
    #[must_use]
    pub fn new(margin: f64) -> Self {
        Self {
            margin: sanitize(margin),
            extents: Vec::new(),
            prefix_starts: Vec::new(),
            dirty_from: None,
        }
    }

    /// Spacing inserted after every entry.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.margin
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` if the stack has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Removes all entries, keeping allocations.
    pub fn clear(&mut self) {
        self.extents.clear();
        self.prefix_starts.clear();
        self.dirty_from = None;
    }

    /// Ensures storage for `len` entries. New entries have extent `0.0`.
    pub fn set_len(&mut self, len: usize) {
        self.extents.resize(len, 0.0);
        self.prefix_starts.resize(len, 0.0);
        self.dirty_from = Some(self.dirty_from.unwrap_or(0).min(len));
    }

    /// Appends an entry on the far side of the stack and returns its index.
    pub fn push(&mut self, extent: f64) -> usize {
        let index = self.extents.len();
        self.set_extent(index, extent);
        index
    }

    /// Updates the extent of one entry and invalidates offsets after it.
    ///
    /// Negative and non-finite extents are treated as `0.0`.
    pub fn set_extent(&mut self, index: usize, extent: f64) {
        if index >= self.extents.len() {
            self.set_len(index + 1);
        }
        self.extents[index] = sanitize(extent);
        self.dirty_from = Some(self.dirty_from.unwrap_or(index).min(index));
    }

    /// Extent of the entry at `index`, or `0.0` when out of range.
    #[must_use]
    pub fn extent_at(&self, index: usize) -> f64 {
        self.extents.get(index).copied().unwrap_or(0.0)
    }

    /// Distance from the anchor side of the stack to the entry at `index`.
    ///
    /// Indices past the end report the offset where a new entry would go.
    pub fn offset_of(&mut self, index: usize) -> f64 {
        let len = self.extents.len();
        if index == 0 || len == 0 {
            return 0.0;
        }
        if index >= len {
            return self.total_extent();
        }
        self.ensure_prefix_through(index);
        self.prefix_starts[index]
    }

    /// Space reserved by the whole stack, including the trailing margin.
    pub fn total_extent(&mut self) -> f64 {
        let len = self.extents.len();
        if len == 0 {
            return 0.0;
        }
        let last = len - 1;
        self.ensure_prefix_through(last);
        self.prefix_starts[last] + self.extents[last] + self.margin
    }

    fn ensure_prefix_through(&mut self, through: usize) {
        let len = self.extents.len();
        if len == 0 || through >= len {
            return;
        }

        let dirty_from = match self.dirty_from {
            Some(d) if d <= through => d,
            _ => return,
        };

        let mut pos = if dirty_from == 0 {
            0.0
        } else {
            self.prefix_starts[dirty_from - 1] + self.extents[dirty_from - 1] + self.margin
        };

        for i in dirty_from..=through {
            self.prefix_starts[i] = pos;
            pos += self.extents[i] + self.margin;
        }

        if through + 1 >= len {
            self.dirty_from = None;
        } else {
            self.dirty_from = Some(through + 1);
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
