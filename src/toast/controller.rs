// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] owns every live toast and drives each one through the
//! `Mounted → Closing → Unmounted` state machine. Transitions happen on
//! elapsed time ([`Toaster::tick`]) or an explicit close
//! ([`Toaster::close`]); both paths converge on a single teardown routine
//! that runs at most once per toast, so the configured close callback fires
//! exactly once even if a manual close races the duration deadline.
//!
//! Mount/unmount side effects go through the [`Surface`] trait rather than
//! a real windowing environment, which keeps the whole lifecycle testable
//! with a recording stub. Declarative hosts that re-render from
//! [`Toaster::visible`] every frame can use the no-op `()` surface.

use super::alert::Alert;
use super::position::Position;
use crate::design_tokens::motion;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a single toast.
pub struct ToastConfig {
    position: Position,
    duration: Duration,
    rtl: bool,
    alert: Alert,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl ToastConfig {
    /// Creates a toast configuration around the given alert content.
    ///
    /// Defaults: bottom-left placement, LTR, and a display duration long
    /// enough (993s) that the toast is effectively persistent until closed.
    #[must_use]
    pub fn new(alert: Alert) -> Self {
        Self {
            position: Position::default(),
            duration: motion::TOAST_DEFAULT_DURATION,
            rtl: false,
            alert,
            on_close: None,
        }
    }

    /// Sets the viewport placement.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets how long the toast stays before the closing slide starts.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Renders the alert content right-to-left.
    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Registers a callback invoked exactly once when the toast is torn
    /// down, whether by its duration elapsing or a manual close.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ToastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastConfig")
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("rtl", &self.rtl)
            .field("alert", &self.alert)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached and fully visible.
    Mounted,
    /// Closing styling applied; teardown is pending.
    Closing {
        /// When the closing styling was applied, for exit-slide progress.
        since: Instant,
    },
}

/// Read-only snapshot of a live toast, for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
    pub id: ToastId,
    pub position: Position,
    pub rtl: bool,
    pub phase: ToastPhase,
    pub alert: &'a Alert,
}

/// Host surface a [`Toaster`] mounts toasts onto.
///
/// Imperative hosts attach and detach real nodes here; tests record the
/// calls; declarative hosts can use `()` and re-render from
/// [`Toaster::visible`] instead.
pub trait Surface {
    /// A toast node was created and should be rendered.
    fn attach(&mut self, toast: ToastView<'_>);

    /// The closing styling (reverse slide) should be applied to the node.
    fn set_closing(&mut self, id: ToastId);

    /// The node should be removed.
    fn detach(&mut self, id: ToastId);
}

/// No-op surface for hosts that render declaratively from controller state.
impl Surface for () {
    fn attach(&mut self, _toast: ToastView<'_>) {}
    fn set_closing(&mut self, _id: ToastId) {}
    fn detach(&mut self, _id: ToastId) {}
}

struct Instance {
    id: ToastId,
    position: Position,
    duration: Duration,
    rtl: bool,
    alert: Alert,
    on_close: Option<Box<dyn FnOnce()>>,
    mounted_at: Instant,
    phase: ToastPhase,
    teardown_at: Option<Instant>,
}

impl Instance {
    fn view(&self) -> ToastView<'_> {
        ToastView {
            id: self.id,
            position: self.position,
            rtl: self.rtl,
            phase: self.phase,
            alert: &self.alert,
        }
    }
}

/// Controller owning every live toast and its deadlines.
///
/// Time is threaded through explicitly (`now: Instant`) instead of read from
/// a global clock, so lifecycle behavior is reproducible in tests. Hosts
/// should call [`Toaster::tick`] periodically (every 100-500ms is plenty for
/// the 200ms grace window).
pub struct Toaster<S = ()> {
    surface: S,
    toasts: Vec<Instance>,
}

impl Toaster<()> {
    /// Creates a toaster with the no-op surface.
    #[must_use]
    pub fn new() -> Self {
        Self::with_surface(())
    }
}

impl Default for Toaster<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Toaster<S> {
    /// Creates a toaster mounting onto the given host surface.
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface,
            toasts: Vec::new(),
        }
    }

    /// Mounts a new toast.
    ///
    /// The closing styling is scheduled for `now + duration` and the node
    /// removal for 200ms after that, unless a manual close short-circuits
    /// the duration deadline first.
    pub fn show(&mut self, config: ToastConfig, now: Instant) -> ToastId {
        let ToastConfig {
            position,
            duration,
            rtl,
            alert,
            on_close,
        } = config;

        let instance = Instance {
            id: ToastId::new(),
            position,
            duration,
            rtl,
            alert,
            on_close,
            mounted_at: now,
            phase: ToastPhase::Mounted,
            teardown_at: None,
        };
        let id = instance.id;

        self.surface.attach(instance.view());
        self.toasts.push(instance);
        id
    }

    /// Manually closes a toast: applies the closing styling immediately and
    /// schedules teardown 200ms later.
    ///
    /// Returns `false` if the toast is unknown or already closing; a close
    /// that races the duration deadline inside the grace window is a no-op,
    /// so teardown never runs twice.
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        if !matches!(toast.phase, ToastPhase::Mounted) {
            return false;
        }

        toast.phase = ToastPhase::Closing { since: now };
        toast.teardown_at = Some(now + motion::TOAST_GRACE);
        self.surface.set_closing(id);
        true
    }

    /// Drives time-based transitions.
    ///
    /// Deadlines are anchored to the mount instant, not to when the tick
    /// arrives, so a late tick still removes the node at
    /// `mounted_at + duration + 200ms`.
    pub fn tick(&mut self, now: Instant) {
        let Self { surface, toasts } = self;

        for toast in toasts.iter_mut() {
            if matches!(toast.phase, ToastPhase::Mounted) {
                let closing_at = toast.mounted_at + toast.duration;
                if now >= closing_at {
                    toast.phase = ToastPhase::Closing { since: closing_at };
                    toast.teardown_at = Some(closing_at + motion::TOAST_GRACE);
                    surface.set_closing(toast.id);
                }
            }
        }

        let mut index = 0;
        while index < toasts.len() {
            let due = toasts[index]
                .teardown_at
                .is_some_and(|deadline| now >= deadline);
            if due {
                let mut toast = toasts.remove(index);
                surface.detach(toast.id);
                if let Some(callback) = toast.on_close.take() {
                    callback();
                }
            } else {
                index += 1;
            }
        }
    }

    /// Returns snapshots of every live toast, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = ToastView<'_>> {
        self.toasts.iter().map(Instance::view)
    }

    /// Returns the number of live toasts (mounted or closing).
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns a reference to the host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Severity;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Surface stub that records every call in order.
    #[derive(Default)]
    struct Recording {
        events: Vec<(String, ToastId)>,
    }

    impl Surface for Recording {
        fn attach(&mut self, toast: ToastView<'_>) {
            self.events.push(("attach".into(), toast.id));
        }
        fn set_closing(&mut self, id: ToastId) {
            self.events.push(("closing".into(), id));
        }
        fn detach(&mut self, id: ToastId) {
            self.events.push(("detach".into(), id));
        }
    }

    fn short_toast() -> ToastConfig {
        ToastConfig::new(Alert::info("hello")).duration(Duration::from_millis(1000))
    }

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn show_attaches_and_defaults_apply() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();

        let id = toaster.show(ToastConfig::new(Alert::success("saved")), t0);

        assert_eq!(toaster.surface().events, vec![("attach".into(), id)]);
        let view = toaster.visible().next().expect("one toast");
        assert_eq!(view.position, Position::BottomLeft);
        assert!(!view.rtl);
        assert_eq!(view.phase, ToastPhase::Mounted);
        assert_eq!(view.alert.severity(), Severity::Success);
    }

    #[test]
    fn default_duration_is_the_long_sentinel() {
        let config = ToastConfig::new(Alert::info("x"));
        assert_eq!(config.duration, Duration::from_millis(993_000));
    }

    #[test]
    fn auto_dismiss_removes_exactly_after_duration_plus_grace() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();
        let id = toaster.show(short_toast(), t0);

        // Just before the duration: still mounted, no closing styling.
        toaster.tick(t0 + Duration::from_millis(999));
        assert_eq!(toaster.surface().events.len(), 1);

        // At the duration: closing styling applied, node still present.
        toaster.tick(t0 + Duration::from_millis(1000));
        assert_eq!(
            toaster.surface().events.last(),
            Some(&("closing".into(), id))
        );
        assert_eq!(toaster.len(), 1);

        // Just before duration + grace: still present.
        toaster.tick(t0 + Duration::from_millis(1199));
        assert_eq!(toaster.len(), 1);

        // At duration + grace: removed.
        toaster.tick(t0 + Duration::from_millis(1200));
        assert!(toaster.is_empty());
        assert_eq!(toaster.surface().events.last(), Some(&("detach".into(), id)));
    }

    #[test]
    fn late_tick_runs_both_transitions_in_order() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();
        let id = toaster.show(short_toast(), t0);

        // One tick far past every deadline.
        toaster.tick(t0 + Duration::from_secs(10));

        assert!(toaster.is_empty());
        assert_eq!(
            toaster.surface().events,
            vec![
                ("attach".into(), id),
                ("closing".into(), id),
                ("detach".into(), id),
            ]
        );
    }

    #[test]
    fn manual_close_applies_closing_immediately_and_removes_after_grace() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();
        let id = toaster.show(short_toast(), t0);

        let t_close = t0 + Duration::from_millis(300);
        assert!(toaster.close(id, t_close));
        assert_eq!(
            toaster.surface().events.last(),
            Some(&("closing".into(), id))
        );

        // The original duration deadline no longer matters.
        toaster.tick(t_close + Duration::from_millis(199));
        assert_eq!(toaster.len(), 1);

        toaster.tick(t_close + Duration::from_millis(200));
        assert!(toaster.is_empty());
    }

    #[test]
    fn close_callback_fires_exactly_once_on_auto_dismiss() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        toaster.show(short_toast().on_close(move || counter.set(counter.get() + 1)), t0);

        toaster.tick(t0 + Duration::from_millis(1200));
        toaster.tick(t0 + Duration::from_millis(2000));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn close_callback_fires_exactly_once_on_manual_close() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        let id = toaster.show(
            short_toast().on_close(move || counter.set(counter.get() + 1)),
            t0,
        );

        toaster.close(id, t0 + Duration::from_millis(100));
        assert_eq!(calls.get(), 0, "callback waits for the grace window");

        toaster.tick(t0 + Duration::from_millis(300));
        toaster.tick(t0 + Duration::from_millis(1300));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn close_racing_the_duration_deadline_tears_down_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();
        let id = toaster.show(
            short_toast().on_close(move || counter.set(counter.get() + 1)),
            t0,
        );

        // Duration fires first, then a manual close lands inside the grace
        // window. The second close path must be a no-op.
        toaster.tick(t0 + Duration::from_millis(1000));
        assert!(!toaster.close(id, t0 + Duration::from_millis(1100)));

        toaster.tick(t0 + Duration::from_millis(1200));
        toaster.tick(t0 + Duration::from_millis(1400));

        assert_eq!(calls.get(), 1);
        let detaches = toaster
            .surface()
            .events
            .iter()
            .filter(|(name, _)| name == "detach")
            .count();
        assert_eq!(detaches, 1);
    }

    #[test]
    fn closing_a_second_time_is_a_no_op() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();
        let id = toaster.show(short_toast(), t0);

        assert!(toaster.close(id, t0 + Duration::from_millis(100)));
        assert!(!toaster.close(id, t0 + Duration::from_millis(150)));

        let closings = toaster
            .surface()
            .events
            .iter()
            .filter(|(name, _)| name == "closing")
            .count();
        assert_eq!(closings, 1);
    }

    #[test]
    fn closing_an_unknown_toast_is_a_no_op() {
        let mut toaster = Toaster::new();
        assert!(!toaster.close(ToastId::new(), Instant::now()));
    }

    #[test]
    fn each_toast_owns_its_own_deadlines() {
        let mut toaster = Toaster::with_surface(Recording::default());
        let t0 = Instant::now();

        let first = toaster.show(short_toast(), t0);
        let second = toaster.show(
            ToastConfig::new(Alert::info("later")).duration(Duration::from_millis(5000)),
            t0 + Duration::from_millis(500),
        );

        // First expires; second is untouched.
        toaster.tick(t0 + Duration::from_millis(1200));
        assert_eq!(toaster.len(), 1);
        assert_eq!(toaster.visible().next().map(|v| v.id), Some(second));

        // Closing the second doesn't resurrect the first.
        assert!(toaster.close(second, t0 + Duration::from_millis(1300)));
        toaster.tick(t0 + Duration::from_millis(1500));
        assert!(toaster.is_empty());

        let attach_order: Vec<ToastId> = toaster
            .surface()
            .events
            .iter()
            .filter(|(name, _)| name == "attach")
            .map(|(_, id)| *id)
            .collect();
        assert_eq!(attach_order, vec![first, second]);
    }

    #[test]
    fn closing_phase_records_when_the_slide_started() {
        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        toaster.show(short_toast(), t0);

        toaster.tick(t0 + Duration::from_millis(1050));
        let view = toaster.visible().next().expect("still sliding out");

        // Anchored to the duration deadline, not the tick arrival.
        assert_eq!(
            view.phase,
            ToastPhase::Closing {
                since: t0 + Duration::from_millis(1000)
            }
        );
    }
}
