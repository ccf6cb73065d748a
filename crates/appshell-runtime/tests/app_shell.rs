//! End-to-end shell scenarios: config in, snapshots and region geometry out.

use appshell_layout::region::{self, RegionWidth};
use appshell_layout::{
    Breakpoint, LayoutConfig, NavAnchor, NavVariant, Response, ScreenValue, presets,
};
use appshell_runtime::{DragController, DragTransition, LayoutStore, PointerSignals};

#[derive(Default)]
struct NullSignals;

impl PointerSignals for NullSignals {
    fn subscribe(&mut self) {}
    fn unsubscribe(&mut self) {}
}

#[test]
fn phone_to_desktop_resize_reshapes_the_shell() {
    let mut store = LayoutStore::new(presets::default_layout()).unwrap();

    // Phone: temporary drawer, closed, zero width.
    store.resize(400);
    let snap = store.snapshot();
    assert_eq!(snap.screen, Breakpoint::Xs);
    assert_eq!(snap.nav_variant, NavVariant::Temporary);
    assert_eq!(snap.nav_width, 0);
    assert_eq!(region::content_geometry(snap).margin_left, 0);

    // Desktop: permanent nav at the configured width.
    store.resize(1600);
    let snap = store.snapshot();
    assert_eq!(snap.screen, Breakpoint::Lg);
    assert_eq!(snap.nav_variant, NavVariant::Permanent);
    assert_eq!(snap.nav_width, 256);
    assert_eq!(
        region::content_geometry(snap).width,
        RegionWidth::Reduced(256)
    );
}

#[test]
fn collapse_expand_cycle_drives_region_geometry() {
    let mut store = LayoutStore::new(LayoutConfig::new()).unwrap().with_screen(Breakpoint::Lg);

    store.set_collapsed(true);
    let snap = store.snapshot();
    assert_eq!(snap.nav_width, 64);
    assert_eq!(region::header_geometry(snap).margin_left, 64);
    assert_eq!(region::footer_geometry(snap).margin_left, 64);

    store.toggle_collapsed();
    assert_eq!(store.snapshot().nav_width, 256);
}

#[test]
fn drag_session_resizes_the_nav_for_every_region() {
    let config = LayoutConfig::new()
        .draggable(true)
        .content_response(Response::Squeezed)
        .footer_response(Response::Static);
    let mut store = LayoutStore::new(config).unwrap();
    let mut signals = NullSignals;
    let mut drag = DragController::new();

    assert_eq!(
        drag.drag_start(&mut store, &mut signals),
        DragTransition::Started
    );
    drag.pointer_move(&mut store, 340);
    drag.pointer_up(&mut store, &mut signals);

    let snap = store.snapshot();
    assert_eq!(snap.nav_width, 340);
    assert!(!snap.dragged);
    assert_eq!(region::content_geometry(snap).margin_left, 340);
    // Static footer ignores the nav entirely.
    let footer = region::footer_geometry(snap);
    assert_eq!(footer.margin_left, 0);
    assert_eq!(footer.width, RegionWidth::Full);
}

#[test]
fn right_anchored_shell_mirrors_drag_and_margins() {
    let config = LayoutConfig::new()
        .draggable(true)
        .nav_anchor(NavAnchor::Right);
    let mut store = LayoutStore::new(config).unwrap();
    store.resize(1920);

    let mut signals = NullSignals;
    let mut drag = DragController::new();
    drag.drag_start(&mut store, &mut signals);
    drag.pointer_move(&mut store, 1920 - 320);
    drag.pointer_up(&mut store, &mut signals);

    let snap = store.snapshot();
    assert_eq!(snap.nav_width, 320);
    let geo = region::content_geometry(snap);
    assert_eq!(geo.margin_left, 0);
    assert_eq!(geo.margin_right, 320);
}

#[test]
fn per_breakpoint_nav_width_follows_resizes() {
    let config = LayoutConfig::new().nav_width(
        ScreenValue::map()
            .at(Breakpoint::Sm, 200)
            .at(Breakpoint::Md, 256),
    );
    let mut store = LayoutStore::new(config).unwrap();

    store.resize(700);
    assert_eq!(store.snapshot().nav_width, 200);
    store.resize(1000);
    assert_eq!(store.snapshot().nav_width, 256);
    // Below sm inherits upward from sm.
    store.resize(300);
    assert_eq!(store.snapshot().nav_width, 200);
}

#[test]
fn snapshots_broadcast_to_multiple_regions() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut store = LayoutStore::new(LayoutConfig::new()).unwrap();

    let header_widths: Rc<RefCell<Vec<u16>>> = Rc::default();
    let content_margins: Rc<RefCell<Vec<u16>>> = Rc::default();

    let sink = Rc::clone(&header_widths);
    store.subscribe(move |snap| sink.borrow_mut().push(snap.nav_width));
    let sink = Rc::clone(&content_margins);
    store.subscribe(move |snap| {
        sink.borrow_mut().push(region::content_geometry(snap).margin_left);
    });

    store.set_collapsed(true);
    store.set_collapsed(false);

    assert_eq!(*header_widths.borrow(), vec![64, 256]);
    assert_eq!(*content_margins.borrow(), vec![64, 256]);
}
