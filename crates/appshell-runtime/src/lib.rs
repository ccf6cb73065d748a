#![forbid(unsafe_code)]

//! AppShell live side.
//!
//! This crate owns the mutable half of the engine:
//!
//! - [`LayoutStore`] - one per layout root; owns the live interaction state,
//!   recomputes the [`appshell_layout::LayoutSnapshot`] on every change, and
//!   re-broadcasts it to subscribed regions
//! - [`DragController`] - idle/dragging state machine translating pointer
//!   events into nav-width overrides
//! - [`PointerSignals`] - the subscribe/unsubscribe seam to the input system
//!
//! # Role in AppShell
//!
//! `appshell-layout` is pure; this crate is the single logical owner of
//! state per layout root. Consuming regions read snapshots and call the
//! store's mutators - they never mutate state directly, and independent
//! roots own independent stores.

pub mod drag;
pub mod store;

pub use drag::{DragController, DragNoopReason, DragState, DragTransition, PointerSignals};
pub use store::{LayoutStore, LiveState, Viewport};
