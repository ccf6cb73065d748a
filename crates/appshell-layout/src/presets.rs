#![forbid(unsafe_code)]

//! Canned configurations for common app shells.
//!
//! Each preset returns a [`LayoutConfig`] that callers can further adjust
//! with the builder setters, so only deviations from the preset need to be
//! specified.

use super::Breakpoint;
use super::config::{HeaderPosition, HeaderResponse, LayoutConfig, NavVariant};
use super::responsive::ScreenValue;

/// The default shell: a temporary drawer on phones that becomes a
/// collapsible permanent nav from `sm` up.
#[must_use]
pub fn default_layout() -> LayoutConfig {
    LayoutConfig::new()
        .collapsible(
            ScreenValue::map()
                .at(Breakpoint::Xs, false)
                .at(Breakpoint::Sm, true),
        )
        .nav_variant(
            ScreenValue::map()
                .at(Breakpoint::Xs, NavVariant::Temporary)
                .at(Breakpoint::Sm, NavVariant::Permanent),
        )
}

/// A fixed shell: sticky header clipped across the top of the drawer.
#[must_use]
pub fn fixed_layout() -> LayoutConfig {
    default_layout()
        .header_position(HeaderPosition::Sticky)
        .header_response(HeaderResponse::Clipped)
}

/// A content-based shell: persistent drawer sized to its content, not
/// collapsible.
#[must_use]
pub fn content_based_layout() -> LayoutConfig {
    default_layout()
        .nav_width(ScreenValue::map().at(Breakpoint::Sm, 200).at(Breakpoint::Md, 256))
        .nav_variant(
            ScreenValue::map()
                .at(Breakpoint::Xs, NavVariant::Temporary)
                .at(Breakpoint::Sm, NavVariant::Persistent),
        )
        .collapsible(false)
}

/// A cozy shell: narrow persistent drawer on phones growing with the
/// screen, permanent from `sm` up.
#[must_use]
pub fn cozy_layout() -> LayoutConfig {
    default_layout()
        .nav_variant(
            ScreenValue::map()
                .at(Breakpoint::Xs, NavVariant::Persistent)
                .at(Breakpoint::Sm, NavVariant::Permanent),
        )
        .nav_width(
            ScreenValue::map()
                .at(Breakpoint::Xs, 64)
                .at(Breakpoint::Sm, 200)
                .at(Breakpoint::Md, 256),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
