// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics and lifecycle events produced by the viewport.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{ActionKind, ToastId};

/// A non-fatal anomaly.
///
/// None of these stop processing. Each is logged at `warn` level when it is
/// detected and returned in the [`Report`] of the cycle that saw it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A toast was created for an anchor that is not registered. The toast
    /// exists but stays off-screen until the anchor appears.
    #[error("{id} created on unmounted anchor '{anchor}'")]
    UnknownAnchor {
        /// Anchor name used by the toast.
        anchor: String,
        /// The toast that cannot be positioned.
        id: ToastId,
    },
    /// An action referenced a toast that does not exist (never created, or
    /// already purged).
    #[error("{action} ignored: unknown {id}")]
    UnknownToast {
        /// Referenced id.
        id: ToastId,
        /// The action that was ignored.
        action: ActionKind,
    },
    /// A `create` reused the id of a live toast. The second create is dropped.
    #[error("create ignored: {id} already exists")]
    DuplicateToast {
        /// Reused id.
        id: ToastId,
    },
    /// `removeAllByName` named an anchor that was never registered and owns
    /// no toasts.
    #[error("removeAllByName ignored: unknown anchor '{anchor}'")]
    UnknownAnchorName {
        /// Anchor name.
        anchor: String,
    },
    /// An anchor was registered under a name that is already mounted. The
    /// new geometry replaces the old.
    #[error("anchor '{anchor}' registered twice")]
    DuplicateAnchor {
        /// Anchor name.
        anchor: String,
    },
    /// Geometry was reported for, or removal requested of, an anchor that is
    /// not registered.
    #[error("anchor '{anchor}' is not registered")]
    UnregisteredAnchor {
        /// Anchor name.
        anchor: String,
    },
}

impl Diagnostic {
    pub(crate) fn emit(self, report: &mut Report) {
        log::warn!("{self}");
        report.diagnostics.push(self);
    }
}

/// Lifecycle change of a toast, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToastEvent {
    /// A toast entered the registry and started its enter animation.
    Created(ToastId),
    /// A toast's payload was patched.
    Updated(ToastId),
    /// A toast finished entering.
    Settled(ToastId),
    /// A toast started its exit animation.
    ExitStarted(ToastId),
    /// A toast finished exiting and was removed from the registry.
    Purged(ToastId),
}

/// Outcome of one viewport step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of actions applied.
    pub applied: usize,
    /// Lifecycle events, oldest first.
    pub events: Vec<ToastEvent>,
    /// Anomalies, oldest first.
    pub diagnostics: SmallVec<[Diagnostic; 2]>,
}

impl Report {
    /// Returns `true` if nothing was applied and nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied == 0 && self.events.is_empty() && self.diagnostics.is_empty()
    }

    /// Appends `other` after the contents of `self`.
    pub fn merge(&mut self, other: Self) {
        self.applied += other.applied;
        self.events.extend(other.events);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Ids that were purged during this step.
    pub fn purged(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.events.iter().filter_map(|e| match e {
            ToastEvent::Purged(id) => Some(*id),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn merge_concatenates_in_order() {
        let mut a = Report {
            applied: 1,
            events: alloc::vec![ToastEvent::Created(ToastId(1))],
            ..Report::default()
        };
        let b = Report {
            applied: 2,
            events: alloc::vec![ToastEvent::Purged(ToastId(1))],
            ..Report::default()
        };
        a.merge(b);
        assert_eq!(a.applied, 3);
        assert_eq!(
            a.events,
            [ToastEvent::Created(ToastId(1)), ToastEvent::Purged(ToastId(1))]
        );
        assert_eq!(a.purged().collect::<Vec<_>>(), [ToastId(1)]);
    }

    #[test]
    fn diagnostics_render_readably() {
        let d = Diagnostic::UnknownToast {
            id: ToastId(7),
            action: ActionKind::Update,
        };
        assert_eq!(format!("{d}"), "update ignored: unknown toast#7");
        let d = Diagnostic::UnknownAnchor {
            anchor: "save".into(),
            id: ToastId(2),
        };
        assert_eq!(format!("{d}"), "toast#2 created on unmounted anchor 'save'");
    }

    #[test]
    fn emit_records_diagnostic() {
        let mut report = Report::default();
        Diagnostic::UnknownAnchorName {
            anchor: "ghost".into(),
        }
        .emit(&mut report);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(!report.is_empty());
    }
}
