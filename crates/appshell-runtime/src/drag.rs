#![forbid(unsafe_code)]

//! Drag-to-resize lifecycle for the navigation edge.
//!
//! A two-state machine:
//!
//! ```text
//! Idle -> Dragging -> Idle
//! ```
//!
//! Drag-start is accepted only when the resolved config allows dragging
//! and the nav is not collapsed. While dragging, pointer moves are
//! forwarded to [`LayoutStore::set_nav_width`]; pointer-up releases the
//! input subscription and ends the session. Every rejected event is an
//! explicit no-op with a reason, never an error.
//!
//! # Invariants
//!
//! 1. The pointer subscription is held exactly while dragging.
//! 2. Subscribe/unsubscribe are never issued redundantly, so a
//!    [`PointerSignals`] impl may treat them as infallible.
//! 3. [`teardown`](DragController::teardown) returns the machine to idle
//!    from any state, releasing the subscription; safe to call on root
//!    unmount even mid-drag.

use tracing::debug;

use super::store::LayoutStore;

/// Subscription seam to the windowing system's pointer events.
///
/// The controller guarantees balanced, non-redundant calls; implementations
/// register/unregister their move and up listeners here.
pub trait PointerSignals {
    /// Begin delivering pointer-move and pointer-up events.
    fn subscribe(&mut self);
    /// Stop delivering pointer events.
    fn unsubscribe(&mut self);
}

/// Lifecycle state of the drag machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Why a lifecycle event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragNoopReason {
    /// The resolved config has `draggable: false`.
    NotDraggable,
    /// The nav is collapsed; the rail edge is not draggable.
    NavCollapsed,
    /// A drag session is already in progress.
    AlreadyDragging,
    /// No drag session is in progress.
    NoActiveDrag,
}

/// Outcome of one lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    /// Idle -> Dragging; subscription acquired.
    Started,
    /// Pointer move forwarded to the store.
    Moved,
    /// Dragging -> Idle on pointer-up; subscription released.
    Ended,
    /// Dragging -> Idle via teardown; subscription released.
    Canceled,
    /// Event ignored.
    Noop(DragNoopReason),
}

/// Idle/dragging machine owning the pointer subscription.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    subscribed: bool,
}

impl DragController {
    /// A controller in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging)
    }

    /// Handle a drag-start gesture on the nav edge.
    pub fn drag_start(
        &mut self,
        store: &mut LayoutStore,
        signals: &mut impl PointerSignals,
    ) -> DragTransition {
        if self.is_dragging() {
            return DragTransition::Noop(DragNoopReason::AlreadyDragging);
        }
        let snap = store.snapshot();
        if !snap.draggable {
            return DragTransition::Noop(DragNoopReason::NotDraggable);
        }
        if snap.collapsed {
            return DragTransition::Noop(DragNoopReason::NavCollapsed);
        }

        self.acquire(signals);
        self.state = DragState::Dragging;
        store.set_dragged(true);
        debug!("drag started");
        DragTransition::Started
    }

    /// Handle a pointer move; forwards the coordinate while dragging.
    pub fn pointer_move(&mut self, store: &mut LayoutStore, screen_x: i32) -> DragTransition {
        if !self.is_dragging() {
            return DragTransition::Noop(DragNoopReason::NoActiveDrag);
        }
        store.set_nav_width(screen_x);
        DragTransition::Moved
    }

    /// Handle a pointer-up; ends the session and releases the subscription.
    pub fn pointer_up(
        &mut self,
        store: &mut LayoutStore,
        signals: &mut impl PointerSignals,
    ) -> DragTransition {
        if !self.is_dragging() {
            return DragTransition::Noop(DragNoopReason::NoActiveDrag);
        }
        self.release(signals);
        self.state = DragState::Idle;
        store.set_dragged(false);
        debug!("drag ended");
        DragTransition::Ended
    }

    /// Return to idle from any state, releasing the subscription.
    ///
    /// The cleanup path for a root torn down without a pointer-up; `None`
    /// when already idle.
    pub fn teardown(
        &mut self,
        store: &mut LayoutStore,
        signals: &mut impl PointerSignals,
    ) -> Option<DragTransition> {
        self.release(signals);
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        store.set_dragged(false);
        debug!("drag canceled by teardown");
        Some(DragTransition::Canceled)
    }

    fn acquire(&mut self, signals: &mut impl PointerSignals) {
        if !self.subscribed {
            signals.subscribe();
            self.subscribed = true;
        }
    }

    fn release(&mut self, signals: &mut impl PointerSignals) {
        if self.subscribed {
            signals.unsubscribe();
            self.subscribed = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use appshell_layout::LayoutConfig;

    /// Records subscription calls and asserts they stay balanced.
    #[derive(Debug, Default)]
    struct RecordingSignals {
        subscribes: u32,
        unsubscribes: u32,
    }

    impl PointerSignals for RecordingSignals {
        fn subscribe(&mut self) {
            self.subscribes += 1;
        }
        fn unsubscribe(&mut self) {
            self.unsubscribes += 1;
        }
    }

    fn draggable_store() -> LayoutStore {
        LayoutStore::new(LayoutConfig::new().draggable(true)).unwrap()
    }

    #[test]
    fn full_drag_session() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        assert_eq!(drag.drag_start(&mut store, &mut signals), DragTransition::Started);
        assert!(drag.is_dragging());
        assert!(store.snapshot().dragged);
        assert_eq!(signals.subscribes, 1);

        assert_eq!(drag.pointer_move(&mut store, 300), DragTransition::Moved);
        assert_eq!(store.snapshot().nav_width, 300);

        assert_eq!(drag.pointer_up(&mut store, &mut signals), DragTransition::Ended);
        assert!(!drag.is_dragging());
        assert!(!store.snapshot().dragged);
        assert_eq!(signals.unsubscribes, 1);
        // The dragged width persists after the session.
        assert_eq!(store.snapshot().nav_width, 300);
    }

    #[test]
    fn drag_start_rejected_when_not_draggable() {
        let mut store = LayoutStore::new(LayoutConfig::new()).unwrap();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        assert_eq!(
            drag.drag_start(&mut store, &mut signals),
            DragTransition::Noop(DragNoopReason::NotDraggable)
        );
        assert_eq!(signals.subscribes, 0);
        assert!(!store.snapshot().dragged);
    }

    #[test]
    fn drag_start_rejected_when_collapsed() {
        let mut store = draggable_store();
        store.set_collapsed(true);
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        assert_eq!(
            drag.drag_start(&mut store, &mut signals),
            DragTransition::Noop(DragNoopReason::NavCollapsed)
        );
        assert_eq!(signals.subscribes, 0);
    }

    #[test]
    fn second_drag_start_is_a_noop() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        drag.drag_start(&mut store, &mut signals);
        assert_eq!(
            drag.drag_start(&mut store, &mut signals),
            DragTransition::Noop(DragNoopReason::AlreadyDragging)
        );
        assert_eq!(signals.subscribes, 1);
    }

    #[test]
    fn moves_and_ups_outside_a_session_are_noops() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        assert_eq!(
            drag.pointer_move(&mut store, 300),
            DragTransition::Noop(DragNoopReason::NoActiveDrag)
        );
        assert_eq!(store.state().override_nav_width, None);
        assert_eq!(
            drag.pointer_up(&mut store, &mut signals),
            DragTransition::Noop(DragNoopReason::NoActiveDrag)
        );
        assert_eq!(signals.unsubscribes, 0);
    }

    #[test]
    fn teardown_mid_drag_releases_the_subscription() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        drag.drag_start(&mut store, &mut signals);
        assert_eq!(
            drag.teardown(&mut store, &mut signals),
            Some(DragTransition::Canceled)
        );
        assert!(!drag.is_dragging());
        assert!(!store.snapshot().dragged);
        assert_eq!(signals.subscribes, 1);
        assert_eq!(signals.unsubscribes, 1);
    }

    #[test]
    fn teardown_when_idle_is_a_noop() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        assert_eq!(drag.teardown(&mut store, &mut signals), None);
        assert_eq!(signals.unsubscribes, 0);
    }

    #[test]
    fn sessions_can_repeat_with_balanced_subscriptions() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        for _ in 0..3 {
            drag.drag_start(&mut store, &mut signals);
            drag.pointer_move(&mut store, 280);
            drag.pointer_up(&mut store, &mut signals);
        }
        assert_eq!(signals.subscribes, 3);
        assert_eq!(signals.unsubscribes, 3);
    }

    #[test]
    fn out_of_range_moves_keep_previous_width() {
        let mut store = draggable_store();
        let mut signals = RecordingSignals::default();
        let mut drag = DragController::new();

        drag.drag_start(&mut store, &mut signals);
        drag.pointer_move(&mut store, 300);
        drag.pointer_move(&mut store, 5000);
        drag.pointer_move(&mut store, -20);
        assert_eq!(store.snapshot().nav_width, 300);
    }
}
