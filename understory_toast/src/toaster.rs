// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-facing handle for showing, updating, and removing toasts.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use understory_anchor_layout::Placement;

use crate::id::IdAllocator;
use crate::{Action, ActionQueue, DefaultToastData, ToastData, ToastId, ToastKind};

/// Queue and id source shared by a viewport and all of its toasters.
#[derive(Debug)]
pub(crate) struct Channel<T: ToastData> {
    queue: ActionQueue<T>,
    ids: IdAllocator,
    default_placement: Placement,
}

pub(crate) type SharedChannel<T> = Rc<RefCell<Channel<T>>>;

impl<T: ToastData> Channel<T> {
    pub(crate) fn shared(default_placement: Placement) -> SharedChannel<T> {
        Rc::new(RefCell::new(Self {
            queue: ActionQueue::new(),
            ids: IdAllocator::new(),
            default_placement,
        }))
    }

    pub(crate) fn enqueue(&mut self, action: Action<T>) {
        self.queue.enqueue(action);
    }

    pub(crate) fn drain(&mut self) -> Vec<Action<T>> {
        self.queue.drain()
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Options for [`Toaster::add_toast`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Anchor side; `None` uses the configured default placement.
    pub placement: Option<Placement>,
    /// Auto-dismiss delay in milliseconds. `0` keeps the toast until it is
    /// removed explicitly.
    pub duration_ms: u64,
}

impl ToastOptions {
    /// Sets the placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Sets the auto-dismiss delay.
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }
}

/// Options for [`Toaster::show_toast`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Severity of the toast.
    pub kind: ToastKind,
    /// Anchor side; `None` uses the configured default placement.
    pub placement: Option<Placement>,
    /// Auto-dismiss delay in milliseconds; `0` means persistent.
    pub duration_ms: u64,
}

/// Cloneable handle that enqueues toast actions.
///
/// Every method returns immediately; the owning
/// [`Viewport`](crate::Viewport) applies the queued actions, in call order,
/// the next time it processes. Handles are single-threaded and may be used
/// from inside event callbacks, including while the viewport is working
/// through an earlier batch.
#[derive(Debug)]
pub struct Toaster<T: ToastData> {
    channel: SharedChannel<T>,
}

impl<T: ToastData> Clone for Toaster<T> {
    fn clone(&self) -> Self {
        Self {
            channel: Rc::clone(&self.channel),
        }
    }
}

impl<T: ToastData> Toaster<T> {
    pub(crate) fn new(channel: SharedChannel<T>) -> Self {
        Self { channel }
    }

    /// Queues a new toast on `anchor` and returns its id.
    pub fn add_toast(&self, anchor: impl Into<String>, data: T, options: ToastOptions) -> ToastId {
        let mut channel = self.channel.borrow_mut();
        let id = channel.ids.alloc();
        let placement = options.placement.unwrap_or(channel.default_placement);
        channel.enqueue(Action::Create {
            anchor: anchor.into(),
            id,
            placement,
            data,
            duration_ms: options.duration_ms,
        });
        id
    }

    /// Queues a partial update of a toast's payload.
    pub fn update_toast(&self, id: ToastId, patch: T::Patch) {
        self.channel
            .borrow_mut()
            .enqueue(Action::Update { id, patch });
    }

    /// Queues the removal of one toast.
    pub fn remove_toast(&self, id: ToastId) {
        self.channel.borrow_mut().enqueue(Action::Remove { id });
    }

    /// Queues the removal of every toast on `anchor`.
    pub fn remove_all_toasts_by_name(&self, anchor: impl Into<String>) {
        self.channel.borrow_mut().enqueue(Action::RemoveAllByName {
            anchor: anchor.into(),
        });
    }

    /// Queues the removal of every toast.
    pub fn remove_all_toasts(&self) {
        self.channel.borrow_mut().enqueue(Action::RemoveAll);
    }

    /// Number of actions waiting to be processed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.channel.borrow().pending()
    }
}

impl Toaster<DefaultToastData> {
    /// Queues a text toast on `anchor` and returns its id.
    pub fn show_toast(
        &self,
        anchor: impl Into<String>,
        text: impl Into<String>,
        options: ShowOptions,
    ) -> ToastId {
        self.add_toast(
            anchor,
            DefaultToastData::new(text, options.kind),
            ToastOptions {
                placement: options.placement,
                duration_ms: options.duration_ms,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_unique_ids_synchronously() {
        let toaster = Toaster::<()>::new(Channel::shared(Placement::Bottom));
        let a = toaster.add_toast("x", (), ToastOptions::default());
        let b = toaster.clone().add_toast("x", (), ToastOptions::default());
        assert_ne!(a, b);
        assert_eq!(toaster.pending(), 2);
    }

    #[test]
    fn default_placement_is_filled_in() {
        let channel = Channel::<()>::shared(Placement::Left);
        let toaster = Toaster::new(Rc::clone(&channel));
        toaster.add_toast("x", (), ToastOptions::default());
        toaster.add_toast("x", (), ToastOptions::default().placement(Placement::Right));

        let placements: Vec<Placement> = channel
            .borrow_mut()
            .drain()
            .into_iter()
            .filter_map(|a| match a {
                Action::Create { placement, .. } => Some(placement),
                _ => None,
            })
            .collect();
        assert_eq!(placements, [Placement::Left, Placement::Right]);
    }

    #[test]
    fn show_toast_builds_default_payload() {
        let channel = Channel::<DefaultToastData>::shared(Placement::Top);
        let toaster = Toaster::new(Rc::clone(&channel));
        let options = ShowOptions {
            kind: ToastKind::Success,
            ..ShowOptions::default()
        };
        toaster.show_toast("save", "Saved", options);
        toaster.remove_all_toasts();

        let batch = channel.borrow_mut().drain();
        assert_eq!(batch.len(), 2);
        match &batch[0] {
            Action::Create { anchor, data, .. } => {
                assert_eq!(anchor, "save");
                assert_eq!(data, &DefaultToastData::new("Saved", ToastKind::Success));
            }
            other => panic!("expected create, got {other:?}"),
        }
    }
}
