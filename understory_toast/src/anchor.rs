// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named anchors that toasts attach to.

use alloc::string::String;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

/// Registry of mounted anchors and their last reported geometry.
///
/// An anchor is *mounted* between [`Anchors::register`] and
/// [`Anchors::unregister`]. A mounted anchor may still lack geometry (for
/// example before its first layout pass); toasts on such an anchor are kept
/// off-screen. Names that were mounted once are remembered so that late
/// actions for them are not reported as typos.
#[derive(Clone, Debug, Default)]
pub struct Anchors {
    mounted: HashMap<String, Option<Rect>>,
    retired: HashSet<String>,
}

impl Anchors {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `name` with optional initial geometry.
    ///
    /// Returns `false` if the name was already mounted; its geometry is
    /// replaced either way.
    pub fn register(&mut self, name: &str, bounds: Option<Rect>) -> bool {
        self.retired.remove(name);
        self.mounted.insert(String::from(name), bounds).is_none()
    }

    /// Updates the geometry of a mounted anchor.
    ///
    /// Returns `false` (and changes nothing) if `name` is not mounted.
    pub fn set_bounds(&mut self, name: &str, bounds: Option<Rect>) -> bool {
        match self.mounted.get_mut(name) {
            Some(slot) => {
                *slot = bounds;
                true
            }
            None => false,
        }
    }

    /// Unmounts `name`. Returns `false` if it was not mounted.
    pub fn unregister(&mut self, name: &str) -> bool {
        if self.mounted.remove(name).is_some() {
            self.retired.insert(String::from(name));
            true
        } else {
            false
        }
    }

    /// Current geometry of `name`, if it is mounted and laid out.
    #[must_use]
    pub fn bounds(&self, name: &str) -> Option<Rect> {
        self.mounted.get(name).copied().flatten()
    }

    /// Returns `true` if `name` is mounted.
    #[must_use]
    pub fn is_mounted(&self, name: &str) -> bool {
        self.mounted.contains_key(name)
    }

    /// Returns `true` if `name` is or was mounted.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.is_mounted(name) || self.retired.contains(name)
    }

    /// Names of mounted anchors, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.mounted.keys().map(String::as_str)
    }

    /// Number of mounted anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// Returns `true` if no anchor is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}
