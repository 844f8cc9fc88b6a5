// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast lifecycle actions and the queue that orders them.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_anchor_layout::Placement;

use crate::{ToastData, ToastId};

/// A toast lifecycle mutation.
///
/// Actions are the only way toast state changes: callers enqueue them through
/// a [`Toaster`](crate::Toaster) and the [`Viewport`](crate::Viewport) applies
/// them in arrival order.
#[derive(Debug)]
pub enum Action<T: ToastData> {
    /// Create a toast attached to `anchor`.
    Create {
        /// Name of the owning anchor.
        anchor: String,
        /// Id handed back to the caller.
        id: ToastId,
        /// Anchor side the toast attaches to.
        placement: Placement,
        /// Initial payload.
        data: T,
        /// Auto-dismiss delay in milliseconds; `0` keeps the toast until removed.
        duration_ms: u64,
    },
    /// Merge a partial update into a toast's payload.
    Update {
        /// Target toast.
        id: ToastId,
        /// Fields to replace.
        patch: T::Patch,
    },
    /// Start the exit of one toast.
    Remove {
        /// Target toast.
        id: ToastId,
    },
    /// Start the exit of every toast attached to `anchor`.
    RemoveAllByName {
        /// Anchor name.
        anchor: String,
    },
    /// Start the exit of every toast.
    RemoveAll,
}

impl<T: ToastData> Action<T> {
    /// The kind of this action, without its payload.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Create { .. } => ActionKind::Create,
            Self::Update { .. } => ActionKind::Update,
            Self::Remove { .. } => ActionKind::Remove,
            Self::RemoveAllByName { .. } => ActionKind::RemoveAllByName,
            Self::RemoveAll => ActionKind::RemoveAll,
        }
    }
}

/// Payload-free discriminant of an [`Action`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// [`Action::Create`].
    Create,
    /// [`Action::Update`].
    Update,
    /// [`Action::Remove`].
    Remove,
    /// [`Action::RemoveAllByName`].
    RemoveAllByName,
    /// [`Action::RemoveAll`].
    RemoveAll,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::RemoveAllByName => "removeAllByName",
            Self::RemoveAll => "removeAll",
        })
    }
}

/// Append-only ordered log of pending actions.
///
/// [`ActionQueue::drain`] hands the whole backlog to the consumer and leaves
/// the queue empty, so anything enqueued while a batch is being applied lands
/// in the next batch. Nothing is reordered, dropped, or delivered twice.
#[derive(Debug)]
pub struct ActionQueue<T: ToastData> {
    pending: Vec<Action<T>>,
}

impl<T: ToastData> Default for ActionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ToastData> ActionQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Appends `action` after everything already queued.
    pub fn enqueue(&mut self, action: Action<T>) {
        self.pending.push(action);
    }

    /// Takes every pending action, oldest first.
    #[must_use = "drained actions are gone from the queue"]
    pub fn drain(&mut self) -> Vec<Action<T>> {
        core::mem::take(&mut self.pending)
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates pending actions in application order without draining.
    pub fn iter(&self) -> impl Iterator<Item = &Action<T>> {
        self.pending.iter()
    }
}
