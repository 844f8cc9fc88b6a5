// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport: drains actions, advances transitions, and lays out toasts.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size, Vec2};
use understory_anchor_layout::{
    Placement, StackModel, ToastPosition, resolve_position, slide_offset,
};

use crate::toaster::{Channel, SharedChannel};
use crate::transition::Phase;
use crate::{
    Action, Anchors, ConfigError, Diagnostic, Portal, Registry, Report, ToastConfig, ToastData,
    ToastId, ToastRecord, Toaster,
};

bitflags::bitflags! {
    /// Reasons the viewport needs to be rendered again.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Actions were applied.
        const ACTIONS     = 0b0000_0001;
        /// A toast or anchor changed geometry.
        const LAYOUT      = 0b0000_0010;
        /// The viewport was resized.
        const RESIZE      = 0b0000_0100;
        /// A transition changed phase.
        const TRANSITIONS = 0b0000_1000;
    }
}

/// One toast as it should be painted this frame.
#[derive(Debug)]
pub struct RenderedToast<'a, T> {
    /// Toast id; hosts report measurements back with it.
    pub id: ToastId,
    /// Owning anchor.
    pub anchor: &'a str,
    /// Anchor side.
    pub placement: Placement,
    /// Payload to draw.
    pub data: &'a T,
    /// Resting position in portal space, or off-screen.
    pub position: ToastPosition,
    /// Resting bounds in portal space, when measured and positioned.
    pub rect: Option<Rect>,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Progress through the current enter/exit animation, `1.0` when at rest.
    pub progress: f64,
    /// Whether a change of resting position this frame may be tweened.
    ///
    /// `false` while the toast is off-screen and for exactly one render after
    /// its measured size changed. It does not affect [`slide`](Self::slide).
    pub animate: bool,
    /// Displacement from the resting position for the enter/exit slide.
    ///
    /// Follows the phase and progress on every render, and is zero only
    /// while the toast is off-screen.
    pub slide: Vec2,
}

/// Owner of all toast state for one provider scope.
///
/// The viewport is the single writer: callers hold [`Toaster`] handles that
/// only enqueue actions, and hosts feed in anchors, measurements, viewport
/// size, and timestamps. A typical frame is:
///
/// 1. [`Viewport::frame`] (or [`process`](Viewport::process) then
///    [`tick`](Viewport::tick)) with the current time.
/// 2. [`Viewport::render`] and paint the result.
/// 3. After paint, [`Viewport::measure`] every toast whose size is known.
#[derive(Debug)]
pub struct Viewport<T: ToastData> {
    config: ToastConfig,
    channel: SharedChannel<T>,
    registry: Registry<T>,
    anchors: Anchors,
    size: Option<Size>,
    invalid: Invalidation,
    pending: Report,
}

impl<T: ToastData> Viewport<T> {
    /// Creates an unmounted viewport.
    pub fn new(config: ToastConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            channel: Channel::shared(config.default_placement),
            registry: Registry::new(config.animation_duration_ms),
            anchors: Anchors::new(),
            size: None,
            invalid: Invalidation::empty(),
            pending: Report::default(),
            config,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Returns a handle that enqueues actions for this viewport.
    #[must_use]
    pub fn toaster(&self) -> Toaster<T> {
        Toaster::new(Rc::clone(&self.channel))
    }

    /// Marks the rendering surface as available with the given size.
    ///
    /// Before this, actions accumulate without being applied and nothing is
    /// rendered.
    pub fn mount(&mut self, size: Size) {
        log::trace!("viewport mounted at {}x{}", size.width, size.height);
        self.size = Some(size);
        self.invalid |= Invalidation::RESIZE;
    }

    /// Returns `true` once [`Viewport::mount`] has been called.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.size.is_some()
    }

    /// Records a new viewport size. Does not touch toast state.
    pub fn resize(&mut self, size: Size) {
        if self.size != Some(size) {
            self.size = Some(size);
            self.invalid |= Invalidation::RESIZE;
        }
    }

    /// Current viewport size, if mounted.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Mounts an anchor named `name` at `bounds`.
    pub fn register_anchor(&mut self, name: &str, bounds: Rect) {
        if !self.anchors.register(name, Some(bounds)) {
            Diagnostic::DuplicateAnchor {
                anchor: String::from(name),
            }
            .emit(&mut self.pending);
        }
        self.invalid |= Invalidation::LAYOUT;
    }

    /// Reports new geometry for a mounted anchor.
    pub fn set_anchor_bounds(&mut self, name: &str, bounds: Rect) {
        self.update_anchor(name, Some(bounds));
    }

    /// Marks a mounted anchor as having no geometry (for example while it
    /// is hidden). Its toasts move off-screen until bounds are reported again.
    pub fn clear_anchor_bounds(&mut self, name: &str) {
        self.update_anchor(name, None);
    }

    fn update_anchor(&mut self, name: &str, bounds: Option<Rect>) {
        if self.anchors.bounds(name) == bounds && self.anchors.is_mounted(name) {
            return;
        }
        if self.anchors.set_bounds(name, bounds) {
            self.invalid |= Invalidation::LAYOUT;
        } else {
            Diagnostic::UnregisteredAnchor {
                anchor: String::from(name),
            }
            .emit(&mut self.pending);
        }
    }

    /// Unmounts an anchor and queues the removal of all of its toasts.
    ///
    /// The removal goes through the action queue, so toasts created for this
    /// anchor earlier in the queue are removed as well.
    pub fn unregister_anchor(&mut self, name: &str) {
        if !self.anchors.unregister(name) {
            Diagnostic::UnregisteredAnchor {
                anchor: String::from(name),
            }
            .emit(&mut self.pending);
            return;
        }
        self.channel
            .borrow_mut()
            .enqueue(Action::RemoveAllByName {
                anchor: String::from(name),
            });
        self.invalid |= Invalidation::LAYOUT;
    }

    /// Anchor registry.
    #[must_use]
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Applies every queued action, in order, at time `now`.
    ///
    /// The queue is emptied before the first action is applied; anything
    /// enqueued meanwhile waits for the next call. While unmounted this only
    /// returns diagnostics collected since the last call.
    pub fn process(&mut self, now: u64) -> Report {
        let mut report = core::mem::take(&mut self.pending);
        if !self.is_mounted() {
            return report;
        }
        let batch = self.channel.borrow_mut().drain();
        if batch.is_empty() {
            return report;
        }
        log::trace!("applying {} queued actions", batch.len());
        report.applied += batch.len();
        for action in batch {
            self.registry.apply(action, now, &self.anchors, &mut report);
        }
        self.invalid |= Invalidation::ACTIONS;
        report
    }

    /// Advances transitions to `now`, purges finished exits, and fires due
    /// auto-dismiss timers.
    ///
    /// A fired timer enqueues a `remove`, which takes effect on the next
    /// [`Viewport::process`]; if the toast is already exiting by then it is
    /// a no-op.
    pub fn tick(&mut self, now: u64) -> Report {
        let mut report = Report::default();
        if !self.is_mounted() {
            return report;
        }
        // Mid-animation frames need a render even without a phase change.
        if self.registry.advance(now, &mut report) || self.registry.is_animating() {
            self.invalid |= Invalidation::TRANSITIONS;
        }
        let due = self.registry.take_due_dismissals(now);
        if !due.is_empty() {
            let mut channel = self.channel.borrow_mut();
            for id in due {
                log::debug!("{id} auto-dismissed");
                channel.enqueue(Action::Remove { id });
            }
        }
        report
    }

    /// Runs [`process`](Self::process), [`tick`](Self::tick), then
    /// [`process`](Self::process) again so timers that fired this frame take
    /// effect immediately.
    pub fn frame(&mut self, now: u64) -> Report {
        let mut report = self.process(now);
        report.merge(self.tick(now));
        report.merge(self.process(now));
        report
    }

    /// Reports the size a toast was painted at.
    ///
    /// Returns `true` if it differs from the cached size. In that case the
    /// next [`Viewport::render`] reports `animate == false` for this toast,
    /// and the one after that animates normally again.
    pub fn measure(&mut self, id: ToastId, size: Size) -> bool {
        let changed = self.registry.measure(id, size);
        if changed {
            self.invalid |= Invalidation::LAYOUT;
        }
        changed
    }

    /// Pending reasons to render, empty if the last render is still current.
    #[must_use]
    pub fn invalidation(&self) -> Invalidation {
        self.invalid
    }

    /// Returns `true` if something changed since the last render.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// Returns `true` if actions are waiting to be processed.
    #[must_use]
    pub fn has_pending_actions(&self) -> bool {
        self.channel.borrow().pending() > 0
    }

    /// Lays out every live toast at time `now`, oldest first.
    ///
    /// Toasts sharing an anchor and placement stack outward in creation
    /// order. Unmeasured toasts, and toasts whose anchor has no geometry, are
    /// reported off-screen and reserve no space in their stack. Rendering
    /// consumes the one-shot "size just changed" flags.
    pub fn render(&mut self, now: u64) -> Vec<RenderedToast<'_, T>> {
        let Some(size) = self.size else {
            return Vec::new();
        };
        self.invalid = Invalidation::empty();

        let frames = self.layout(size.width);
        self.registry.clear_size_changes();

        let origin = match self.config.portal {
            Portal::Root => Vec2::ZERO,
            Portal::Container(rect) => rect.origin().to_vec2(),
        };
        let slide_distance = self.config.slide_distance;
        self.registry
            .iter()
            .zip(frames)
            .map(|(record, (position, size_changed))| {
                render_one(record, position, size_changed, origin, slide_distance, now)
            })
            .collect()
    }

    /// Resting positions and pending size-change flags, in creation order.
    fn layout(&self, bounds_width: f64) -> Vec<(ToastPosition, bool)> {
        let params = self.config.layout;
        let mut stacks: HashMap<(&str, Placement), StackModel> = HashMap::new();
        let mut frames = Vec::with_capacity(self.registry.len());

        for record in self.registry.iter() {
            let measured = record.size();
            let stack = stacks
                .entry((record.anchor(), record.placement()))
                .or_insert_with(|| StackModel::new(params.margin));
            let position = resolve_position(
                record.placement(),
                self.anchors.bounds(record.anchor()),
                measured,
                stack.total_extent(),
                &params,
                Some(bounds_width),
            );
            if let (ToastPosition::At(_), Some(measured)) = (position, measured) {
                stack.push(record.placement().stacking_extent(measured));
            }
            frames.push((position, record.size_changed()));
        }
        frames
    }

    /// Looks up a toast by id.
    #[must_use]
    pub fn toast(&self, id: ToastId) -> Option<&ToastRecord<T>> {
        self.registry.get(id)
    }

    /// Ids of all live toasts, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.registry.ids()
    }

    /// Number of toasts in the registry, including exiting ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if there are no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

fn render_one<'a, T>(
    record: &'a ToastRecord<T>,
    position: ToastPosition,
    size_changed: bool,
    origin: Vec2,
    slide_distance: f64,
    now: u64,
) -> RenderedToast<'a, T> {
    let position = match position {
        ToastPosition::At(p) => ToastPosition::At(p - origin),
        ToastPosition::Offscreen => ToastPosition::Offscreen,
    };
    let phase = record.phase();
    let progress = record.transition().progress(now);
    let animate = !position.is_offscreen() && !size_changed;
    let remaining = match phase {
        Phase::Entering => 1.0 - progress,
        Phase::Exiting => progress,
        Phase::Steady | Phase::Purged => 0.0,
    };
    // The size-change flag only stops tweening of the resting position; the
    // enter/exit slide keeps following the phase.
    let slide = if position.is_offscreen() {
        Vec2::ZERO
    } else {
        slide_offset(record.placement(), remaining, slide_distance)
    };
    let rect = match (position, record.size()) {
        (ToastPosition::At(p), Some(size)) => Some(Rect::from_origin_size(p, size)),
        _ => None,
    };
    RenderedToast {
        id: record.id(),
        anchor: record.anchor(),
        placement: record.placement(),
        data: record.data(),
        position,
        rect,
        phase,
        progress,
        animate,
        slide,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultToastData, DefaultToastPatch, ShowOptions, ToastEvent, ToastKind, ToastOptions};
    use kurbo::Point;
    use understory_anchor_layout::LayoutParams;

    const ANCHOR: Rect = Rect::new(300.0, 400.0, 400.0, 440.0);
    const SCREEN: Size = Size::new(1024.0, 768.0);

    fn viewport() -> Viewport<DefaultToastData> {
        let config = ToastConfig::default()
            .with_animation_duration(200)
            .with_layout(LayoutParams {
                margin: 4.0,
                gap: 0.0,
            });
        let mut vp = Viewport::new(config).unwrap();
        vp.mount(SCREEN);
        vp.register_anchor("x", ANCHOR);
        vp
    }

    fn persistent(placement: Placement) -> ShowOptions {
        ShowOptions {
            placement: Some(placement),
            ..ShowOptions::default()
        }
    }

    #[test]
    fn zero_duration_toast_persists_until_removed() {
        let mut vp = viewport();
        let t = vp.toaster();
        let id = t.show_toast("x", "Hi", ShowOptions::default());
        vp.frame(0);
        vp.frame(10_000_000);
        assert_eq!(vp.toast(id).map(ToastRecord::phase), Some(Phase::Steady));
        assert!(!vp.has_pending_actions());

        t.remove_toast(id);
        vp.frame(10_000_100);
        assert_eq!(vp.toast(id).map(ToastRecord::phase), Some(Phase::Exiting));
        vp.frame(10_000_300);
        assert!(vp.toast(id).is_none());
    }

    #[test]
    fn auto_dismiss_fires_remove_through_queue() {
        let mut vp = viewport();
        let t = vp.toaster();
        let options = ShowOptions {
            duration_ms: 1000,
            ..ShowOptions::default()
        };
        let id = t.show_toast("x", "Bye soon", options);
        vp.frame(0);
        vp.frame(999);
        assert_eq!(vp.toast(id).map(ToastRecord::phase), Some(Phase::Steady));

        let report = vp.frame(1000);
        assert!(report.events.contains(&ToastEvent::ExitStarted(id)));
        vp.frame(1199);
        assert!(vp.toast(id).is_some());
        let report = vp.frame(1200);
        assert_eq!(report.purged().collect::<Vec<_>>(), [id]);
    }

    #[test]
    fn timer_after_manual_remove_is_noop() {
        let mut vp = viewport();
        let t = vp.toaster();
        let options = ShowOptions {
            duration_ms: 500,
            ..ShowOptions::default()
        };
        let id = t.show_toast("x", "Hi", options);
        vp.frame(0);
        t.remove_toast(id);
        vp.frame(400);
        let report = vp.frame(500);
        assert!(report.diagnostics.is_empty());
        assert!(!report.events.contains(&ToastEvent::ExitStarted(id)));
    }

    #[test]
    fn first_render_is_offscreen_and_not_animated() {
        let mut vp = viewport();
        let id = vp.toaster().show_toast("x", "Hi", ShowOptions::default());
        vp.frame(0);
        let frame = vp.render(0);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].id, id);
        assert!(frame[0].position.is_offscreen());
        assert!(!frame[0].animate);
        assert_eq!(frame[0].slide, Vec2::ZERO);
    }

    #[test]
    fn two_toasts_on_top_do_not_overlap() {
        let mut vp = viewport();
        let t = vp.toaster();
        let a = t.show_toast("x", "first", persistent(Placement::Top));
        let b = t.show_toast("x", "second", persistent(Placement::Top));
        vp.frame(0);
        vp.measure(a, Size::new(80.0, 20.0));
        vp.measure(b, Size::new(90.0, 30.0));

        let frame = vp.render(0);
        let (ra, rb) = (frame[0].rect.unwrap(), frame[1].rect.unwrap());
        assert_eq!(ra, Rect::new(310.0, 380.0, 390.0, 400.0));
        // Second toast is pushed away by the first one's height plus margin.
        assert_eq!(rb.y1, ra.y0 - 4.0);
        assert!(rb.y0 < ra.y0);
    }

    #[test]
    fn left_and_right_stack_by_width() {
        let mut vp = viewport();
        let t = vp.toaster();
        let a = t.show_toast("x", "a", persistent(Placement::Right));
        let b = t.show_toast("x", "b", persistent(Placement::Right));
        let c = t.show_toast("x", "c", persistent(Placement::Bottom));
        vp.frame(0);
        for id in [a, b, c] {
            vp.measure(id, Size::new(50.0, 10.0));
        }
        let frame = vp.render(0);
        assert_eq!(frame[0].position, ToastPosition::At(Point::new(400.0, 415.0)));
        assert_eq!(frame[1].position, ToastPosition::At(Point::new(454.0, 415.0)));
        // A different placement starts its own stack.
        assert_eq!(frame[2].position, ToastPosition::At(Point::new(325.0, 440.0)));
    }

    #[test]
    fn unmeasured_sibling_reserves_no_space() {
        let mut vp = viewport();
        let t = vp.toaster();
        let _a = t.show_toast("x", "a", persistent(Placement::Bottom));
        let b = t.show_toast("x", "b", persistent(Placement::Bottom));
        vp.frame(0);
        vp.measure(b, Size::new(100.0, 10.0));
        let frame = vp.render(0);
        assert!(frame[0].position.is_offscreen());
        assert_eq!(frame[1].position, ToastPosition::At(Point::new(300.0, 440.0)));
    }

    #[test]
    fn exiting_toast_keeps_its_slot_until_purged() {
        let mut vp = viewport();
        let t = vp.toaster();
        let a = t.show_toast("x", "a", persistent(Placement::Bottom));
        let b = t.show_toast("x", "b", persistent(Placement::Bottom));
        vp.frame(0);
        vp.measure(a, Size::new(100.0, 10.0));
        vp.measure(b, Size::new(100.0, 10.0));
        t.remove_toast(a);
        vp.frame(500);
        assert_eq!(vp.render(500)[1].position.point().y, 454.0);

        vp.frame(700);
        let frame = vp.render(700);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].position.point().y, 440.0);
    }

    #[test]
    fn size_change_suppresses_animation_for_one_render() {
        let mut vp = viewport();
        let t = vp.toaster();
        let id = t.show_toast("x", "Hi", ShowOptions::default());
        vp.frame(0);
        vp.measure(id, Size::new(40.0, 20.0));
        assert!(!vp.render(0)[0].animate);
        assert!(vp.render(16)[0].animate);

        // Re-measuring to the same size does not re-arm the flag.
        assert!(!vp.measure(id, Size::new(40.0, 20.0)));
        assert!(vp.render(32)[0].animate);

        // Each real change re-arms it, however quickly they arrive.
        for (step, width) in [60.0, 80.0, 100.0].into_iter().enumerate() {
            t.update_toast(id, DefaultToastPatch::text("longer"));
            vp.frame(48);
            assert!(vp.measure(id, Size::new(width, 20.0)));
            let now = 48 + step as u64;
            let (flagged_animate, flagged_slide) = {
                let frame = vp.render(now);
                (frame[0].animate, frame[0].slide)
            };
            let (next_animate, next_slide) = {
                let frame = vp.render(now);
                (frame[0].animate, frame[0].slide)
            };
            assert!(!flagged_animate);
            assert!(next_animate);
            // The enter slide carries on through the flagged render.
            assert_ne!(flagged_slide, Vec2::ZERO);
            assert_eq!(flagged_slide, next_slide);
        }
    }

    #[test]
    fn enter_slide_is_continuous_through_first_measure() {
        let mut vp = viewport();
        let id = vp.toaster().show_toast("x", "Hi", persistent(Placement::Top));
        vp.frame(0);
        assert!(vp.render(0)[0].position.is_offscreen());
        vp.measure(id, Size::new(40.0, 10.0));

        let mut painted = Vec::new();
        for now in [16, 32, 48, 300] {
            let frame = vp.render(now);
            let rest = frame[0].position.point();
            painted.push((rest.y + frame[0].slide.y, frame[0].animate));
        }
        // Only the first measured render skips tweening of the rest position.
        assert_eq!(
            painted.iter().map(|(_, a)| *a).collect::<Vec<_>>(),
            [false, true, true, true]
        );
        // Painted y moves steadily down toward rest at 400 - 10 = 390.
        for pair in painted.windows(2) {
            assert!(pair[0].0 < pair[1].0, "slide jumped: {painted:?}");
        }
        assert!(painted[0].0 < 390.0);
        assert_eq!(painted[3].0, 390.0);
    }

    #[test]
    fn update_merges_payload() {
        let mut vp = viewport();
        let t = vp.toaster();
        let options = ShowOptions {
            kind: ToastKind::Error,
            ..ShowOptions::default()
        };
        let id = t.show_toast("x", "old", options);
        t.update_toast(id, DefaultToastPatch::text("new"));
        let report = vp.frame(0);
        assert_eq!(report.applied, 2);
        assert_eq!(
            vp.toast(id).map(ToastRecord::data),
            Some(&DefaultToastData::new("new", ToastKind::Error))
        );
    }

    #[test]
    fn unregistering_anchor_cascades() {
        let mut vp = viewport();
        let t = vp.toaster();
        let a = t.show_toast("x", "a", ShowOptions::default());
        let b = t.show_toast("x", "b", ShowOptions::default());
        vp.register_anchor("y", ANCHOR);
        let other = t.show_toast("y", "c", ShowOptions::default());
        vp.frame(0);

        vp.unregister_anchor("x");
        let report = vp.frame(50);
        assert!(report.events.contains(&ToastEvent::ExitStarted(a)));
        assert!(report.events.contains(&ToastEvent::ExitStarted(b)));
        assert!(report.diagnostics.is_empty());

        vp.frame(250);
        let ids: Vec<ToastId> = vp.ids().collect();
        assert_eq!(ids, [other]);
        assert!(vp.anchors().is_mounted("y"));
        assert!(!vp.anchors().is_mounted("x"));
    }

    #[test]
    fn cascade_catches_toasts_still_queued() {
        let mut vp = viewport();
        let t = vp.toaster();
        let a = t.show_toast("x", "a", ShowOptions::default());
        vp.unregister_anchor("x");
        vp.frame(0);
        assert_eq!(vp.toast(a).map(ToastRecord::phase), Some(Phase::Exiting));
    }

    #[test]
    fn unknown_anchor_degrades_to_offscreen() {
        let mut vp = viewport();
        let id = vp
            .toaster()
            .show_toast("later", "waiting", ShowOptions::default());
        let report = vp.frame(0);
        assert!(matches!(
            report.diagnostics.as_slice(),
            [Diagnostic::UnknownAnchor { .. }]
        ));
        vp.measure(id, Size::new(20.0, 10.0));
        assert!(vp.render(0)[0].position.is_offscreen());

        vp.register_anchor("later", ANCHOR);
        assert!(!vp.render(16)[0].position.is_offscreen());
    }

    #[test]
    fn actions_wait_for_mount() {
        let config = ToastConfig::default();
        let mut vp = Viewport::<()>::new(config).unwrap();
        let t = vp.toaster();
        let id = t.add_toast("x", (), ToastOptions::default());
        assert!(vp.frame(0).is_empty());
        assert!(vp.render(0).is_empty());
        assert!(vp.has_pending_actions());

        vp.mount(SCREEN);
        vp.register_anchor("x", ANCHOR);
        let report = vp.frame(10);
        assert_eq!(report.events, [ToastEvent::Created(id)]);
        assert_eq!(vp.len(), 1);
    }

    #[test]
    fn resize_rerenders_without_touching_state() {
        let mut vp = viewport();
        let id = vp
            .toaster()
            .show_toast("x", "wide", persistent(Placement::Right));
        vp.frame(0);
        vp.measure(id, Size::new(200.0, 20.0));
        let _ = vp.render(0);
        assert!(!vp.needs_render());

        vp.resize(Size::new(500.0, 768.0));
        assert_eq!(vp.invalidation(), Invalidation::RESIZE);
        let frame = vp.render(16);
        // Clamped so it does not overflow the narrower viewport.
        assert_eq!(frame[0].position.point().x, 300.0);
        assert_eq!(vp.toast(id).map(ToastRecord::phase), Some(Phase::Entering));
    }

    #[test]
    fn container_portal_translates_positions() {
        let config = ToastConfig::default()
            .with_layout(LayoutParams {
                margin: 4.0,
                gap: 0.0,
            })
            .with_portal(Portal::Container(Rect::new(100.0, 50.0, 900.0, 700.0)));
        let mut vp = Viewport::<DefaultToastData>::new(config).unwrap();
        vp.mount(SCREEN);
        vp.register_anchor("x", ANCHOR);
        let id = vp
            .toaster()
            .show_toast("x", "Hi", persistent(Placement::Bottom));
        vp.frame(0);
        vp.measure(id, Size::new(100.0, 10.0));
        assert_eq!(vp.render(0)[0].position, ToastPosition::At(Point::new(200.0, 390.0)));
    }

    #[test]
    fn slide_follows_phase() {
        let mut vp = viewport();
        let t = vp.toaster();
        let id = t.show_toast("x", "Hi", persistent(Placement::Top));
        vp.frame(0);
        vp.measure(id, Size::new(40.0, 10.0));
        let frame = vp.render(0);
        assert!(!frame[0].animate);
        assert_eq!(frame[0].slide, Vec2::new(0.0, -16.0));

        let frame = vp.render(100);
        assert_eq!(frame[0].phase, Phase::Entering);
        assert_eq!(frame[0].progress, 0.5);
        assert_eq!(frame[0].slide, Vec2::new(0.0, -8.0));

        vp.frame(200);
        assert_eq!(vp.render(200)[0].slide, Vec2::ZERO);

        t.remove_toast(id);
        vp.frame(300);
        let frame = vp.render(350);
        assert_eq!(frame[0].phase, Phase::Exiting);
        assert_eq!(frame[0].slide, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn animation_keeps_requesting_renders() {
        let mut vp = viewport();
        let id = vp.toaster().show_toast("x", "Hi", persistent(Placement::Top));
        vp.frame(0);
        vp.measure(id, Size::new(40.0, 10.0));
        let _ = vp.render(0);

        vp.tick(50);
        assert_eq!(vp.invalidation(), Invalidation::TRANSITIONS);
        let _ = vp.render(50);

        vp.tick(200);
        assert!(vp.needs_render());
        let _ = vp.render(200);

        vp.tick(250);
        assert!(!vp.needs_render());
    }

    #[test]
    fn anchor_mistakes_are_diagnosed() {
        let mut vp = viewport();
        vp.register_anchor("x", ANCHOR);
        vp.set_anchor_bounds("nope", ANCHOR);
        vp.unregister_anchor("nope");
        let report = vp.process(0);
        assert_eq!(report.diagnostics.len(), 3);
        assert!(matches!(
            report.diagnostics[0],
            Diagnostic::DuplicateAnchor { .. }
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ToastConfig::default().with_animation_duration(0);
        assert_eq!(
            Viewport::<()>::new(config).err(),
            Some(ConfigError::ZeroAnimationDuration)
        );
    }
}
