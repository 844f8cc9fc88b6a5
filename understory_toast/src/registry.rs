// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live toast records and the rules for applying actions to them.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Size;
use smallvec::SmallVec;
use understory_anchor_layout::Placement;

use crate::transition::{Phase, Transition};
use crate::{Action, Anchors, Diagnostic, Report, ToastData, ToastEvent, ToastId};

/// Runtime state of one toast.
#[derive(Debug)]
pub struct ToastRecord<T> {
    id: ToastId,
    anchor: String,
    placement: Placement,
    data: T,
    size: Option<Size>,
    sequence: u64,
    size_changed: bool,
    transition: Transition,
    duration_ms: u64,
    dismiss_at: Option<u64>,
}

impl<T> ToastRecord<T> {
    /// Id of this toast.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Name of the owning anchor.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Anchor side this toast attaches to.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Current payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Last measured size, or `None` before the first measurement.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Creation order; lower values were created earlier.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    /// The transition state machine.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Auto-dismiss delay requested at creation; `0` means persistent.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns `true` if the size changed since the last render.
    #[must_use]
    pub fn size_changed(&self) -> bool {
        self.size_changed
    }
}

/// Toast records keyed by id, iterable in creation order.
#[derive(Debug)]
pub struct Registry<T> {
    records: HashMap<ToastId, ToastRecord<T>>,
    order: Vec<ToastId>,
    next_sequence: u64,
    animation_ms: u64,
}

impl<T: ToastData> Registry<T> {
    /// Creates an empty registry whose toasts animate for `animation_ms`.
    #[must_use]
    pub fn new(animation_ms: u64) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_sequence: 0,
            animation_ms,
        }
    }

    /// Number of records, including exiting ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a record.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord<T>> {
        self.records.get(&id)
    }

    /// Clears every one-shot "size just changed" flag.
    pub(crate) fn clear_size_changes(&mut self) {
        for record in self.records.values_mut() {
            record.size_changed = false;
        }
    }

    /// Ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.order.iter().copied()
    }

    /// Records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord<T>> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Applies one action at time `now`.
    ///
    /// Unknown ids and names are reported through `report` and otherwise
    /// ignored. Removal only starts the exit animation; records leave the
    /// registry in [`Registry::advance`].
    pub fn apply(&mut self, action: Action<T>, now: u64, anchors: &Anchors, report: &mut Report) {
        let kind = action.kind();
        match action {
            Action::Create {
                anchor,
                id,
                placement,
                data,
                duration_ms,
            } => {
                if self.records.contains_key(&id) {
                    Diagnostic::DuplicateToast { id }.emit(report);
                    return;
                }
                if !anchors.is_mounted(&anchor) {
                    Diagnostic::UnknownAnchor {
                        anchor: anchor.clone(),
                        id,
                    }
                    .emit(report);
                }
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                log::debug!("{id} created on '{anchor}' ({})", placement.name());
                self.records.insert(
                    id,
                    ToastRecord {
                        id,
                        anchor,
                        placement,
                        data,
                        size: None,
                        sequence,
                        size_changed: false,
                        transition: Transition::new(now, self.animation_ms),
                        duration_ms,
                        dismiss_at: (duration_ms > 0).then(|| now.saturating_add(duration_ms)),
                    },
                );
                self.order.push(id);
                report.events.push(ToastEvent::Created(id));
            }
            Action::Update { id, patch } => match self.records.get_mut(&id) {
                Some(record) => {
                    record.data.apply_patch(patch);
                    report.events.push(ToastEvent::Updated(id));
                }
                None => Diagnostic::UnknownToast { id, action: kind }.emit(report),
            },
            Action::Remove { id } => {
                if !self.begin_exit(id, now, report) {
                    Diagnostic::UnknownToast { id, action: kind }.emit(report);
                }
            }
            Action::RemoveAllByName { anchor } => {
                let targets: SmallVec<[ToastId; 8]> = self
                    .iter()
                    .filter(|r| r.anchor == anchor)
                    .map(|r| r.id)
                    .collect();
                if targets.is_empty() && !anchors.is_known(&anchor) {
                    Diagnostic::UnknownAnchorName { anchor }.emit(report);
                    return;
                }
                for id in targets {
                    self.begin_exit(id, now, report);
                }
            }
            Action::RemoveAll => {
                let targets: Vec<ToastId> = self.order.clone();
                for id in targets {
                    self.begin_exit(id, now, report);
                }
            }
        }
    }

    /// Starts the exit of `id`. Returns `false` only if `id` is unknown.
    fn begin_exit(&mut self, id: ToastId, now: u64, report: &mut Report) -> bool {
        let Some(record) = self.records.get_mut(&id) else {
            return false;
        };
        if record.transition.begin_exit(now) {
            record.dismiss_at = None;
            log::debug!("{id} exiting");
            report.events.push(ToastEvent::ExitStarted(id));
        }
        true
    }

    /// Advances every transition to `now` and purges finished exits.
    ///
    /// Returns `true` if any phase changed.
    pub fn advance(&mut self, now: u64, report: &mut Report) -> bool {
        let mut changed = false;
        for id in &self.order {
            let Some(record) = self.records.get_mut(id) else {
                continue;
            };
            match record.transition.advance(now) {
                Some(Phase::Steady) => {
                    changed = true;
                    report.events.push(ToastEvent::Settled(*id));
                }
                Some(Phase::Purged) => changed = true,
                _ => {}
            }
        }
        if changed {
            let records = &mut self.records;
            self.order.retain(|id| {
                let purged = records
                    .get(id)
                    .is_none_or(|r| r.transition.phase() == Phase::Purged);
                if purged {
                    records.remove(id);
                    log::debug!("{id} purged");
                    report.events.push(ToastEvent::Purged(*id));
                }
                !purged
            });
        }
        changed
    }

    /// Returns `true` if any toast is entering or exiting.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.records.values().any(|r| r.phase().is_animating())
    }

    /// Collects toasts whose auto-dismiss deadline has passed.
    ///
    /// Each deadline fires once; the caller is expected to route a `remove`
    /// for every returned id through the action queue.
    pub fn take_due_dismissals(&mut self, now: u64) -> SmallVec<[ToastId; 4]> {
        let mut due = SmallVec::new();
        for id in &self.order {
            let Some(record) = self.records.get_mut(id) else {
                continue;
            };
            if record.dismiss_at.is_some_and(|at| at <= now) {
                record.dismiss_at = None;
                due.push(*id);
            }
        }
        due
    }

    /// Records a measured size. Returns `true` if it differs from the cache.
    ///
    /// A change arms the one-render transition suppression flag, so a
    /// position jump caused purely by re-measurement is not animated.
    pub fn measure(&mut self, id: ToastId, size: Size) -> bool {
        let Some(record) = self.records.get_mut(&id) else {
            return false;
        };
        if record.size == Some(size) {
            return false;
        }
        log::trace!("{id} measured {}x{}", size.width, size.height);
        record.size = Some(size);
        record.size_changed = true;
        true
    }
}
