// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast identifiers.

use core::fmt;

/// Identifier of a toast.
///
/// Ids are handed out by a provider-wide counter and are never reused, even
/// after the toast has been purged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    /// Raw numeric value of this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Debug)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub(crate) const fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn alloc(&mut self) -> ToastId {
        let id = ToastId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = IdAllocator::new();
        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();
        assert!(a < b && b < c);
        assert_eq!(a.get(), 1);
        assert_eq!(alloc::format!("{c}"), "toast#3");
    }
}
