#![forbid(unsafe_code)]

//! Per-region geometry derived from a [`LayoutSnapshot`].
//!
//! Rendering of the header, content, and footer lives outside this crate;
//! what each region needs from the engine is a margin on the anchor side
//! and whether its width shrinks to sit beside the nav or keeps the full
//! line. `squeezed` shrinks, `pushed` shifts at full width, `static` does
//! neither, and a `clipped` header spans the full width stacked above the
//! drawer.
//!
//! # Usage
//!
//! ```ignore
//! use appshell_layout::region::{content_geometry, RegionWidth};
//!
//! let geo = content_geometry(&snapshot);
//! // margin_left/margin_right in px; width Full or Reduced(nav px).
//! ```

use super::config::{HeaderResponse, NavAnchor, NavVariant, Response};
use super::snapshot::LayoutSnapshot;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Horizontal extent of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionWidth {
    /// The full container width.
    Full,
    /// The container width reduced by the given nav width, px.
    Reduced(u16),
}

/// Resolved geometry for one shell region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGeometry {
    /// Margin on the left edge, px.
    pub margin_left: u16,
    /// Margin on the right edge, px.
    pub margin_right: u16,
    /// Horizontal extent.
    pub width: RegionWidth,
}

fn anchored(anchor: NavAnchor, margin: u16, width: RegionWidth) -> RegionGeometry {
    match anchor {
        NavAnchor::Left => RegionGeometry {
            margin_left: margin,
            margin_right: 0,
            width,
        },
        NavAnchor::Right => RegionGeometry {
            margin_left: 0,
            margin_right: margin,
            width,
        },
    }
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// Geometry for the header bar.
#[must_use]
pub fn header_geometry(snap: &LayoutSnapshot) -> RegionGeometry {
    let margin = match snap.header_response {
        HeaderResponse::Clipped | HeaderResponse::Static => 0,
        HeaderResponse::Squeezed | HeaderResponse::Pushed => snap.nav_width,
    };
    let width = match snap.header_response {
        HeaderResponse::Squeezed => RegionWidth::Reduced(snap.nav_width),
        _ => RegionWidth::Full,
    };
    anchored(snap.nav_anchor, margin, width)
}

/// Geometry for the main content area.
#[must_use]
pub fn content_geometry(snap: &LayoutSnapshot) -> RegionGeometry {
    response_geometry(snap, snap.content_response)
}

/// Geometry for the footer bar.
#[must_use]
pub fn footer_geometry(snap: &LayoutSnapshot) -> RegionGeometry {
    response_geometry(snap, snap.footer_response)
}

fn response_geometry(snap: &LayoutSnapshot, response: Response) -> RegionGeometry {
    let margin = match response {
        Response::Static => 0,
        Response::Squeezed | Response::Pushed => snap.nav_width,
    };
    let width = match response {
        Response::Squeezed => RegionWidth::Reduced(snap.nav_width),
        Response::Static | Response::Pushed => RegionWidth::Full,
    };
    anchored(snap.nav_anchor, margin, width)
}

/// Whether the header stacks above the navigation drawer.
#[must_use]
pub fn header_above_nav(snap: &LayoutSnapshot) -> bool {
    snap.header_response == HeaderResponse::Clipped
}

/// Whether the header shows an open/close toggle for the nav.
///
/// A permanent nav has no toggle; it is always logically open.
#[must_use]
pub fn shows_menu_toggle(snap: &LayoutSnapshot) -> bool {
    snap.nav_variant != NavVariant::Permanent
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Breakpoint;
    use crate::config::{CurrentLayoutConfig, DEFAULTS};

    fn snap(cfg: CurrentLayoutConfig) -> LayoutSnapshot {
        LayoutSnapshot::compose(Breakpoint::Lg, &cfg, true, false, false, false, None)
    }

    #[test]
    fn squeezed_content_shrinks_beside_nav() {
        let geo = content_geometry(&snap(DEFAULTS));
        assert_eq!(geo.margin_left, 256);
        assert_eq!(geo.margin_right, 0);
        assert_eq!(geo.width, RegionWidth::Reduced(256));
    }

    #[test]
    fn static_content_keeps_full_line() {
        let cfg = CurrentLayoutConfig {
            content_response: Response::Static,
            ..DEFAULTS
        };
        let geo = content_geometry(&snap(cfg));
        assert_eq!(geo.margin_left, 0);
        assert_eq!(geo.width, RegionWidth::Full);
    }

    #[test]
    fn pushed_footer_shifts_at_full_width() {
        let cfg = CurrentLayoutConfig {
            footer_response: Response::Pushed,
            ..DEFAULTS
        };
        let geo = footer_geometry(&snap(cfg));
        assert_eq!(geo.margin_left, 256);
        assert_eq!(geo.width, RegionWidth::Full);
    }

    #[test]
    fn right_anchor_mirrors_margins() {
        let cfg = CurrentLayoutConfig {
            nav_anchor: NavAnchor::Right,
            ..DEFAULTS
        };
        let geo = content_geometry(&snap(cfg));
        assert_eq!(geo.margin_left, 0);
        assert_eq!(geo.margin_right, 256);
    }

    #[test]
    fn clipped_header_spans_full_width_above_nav() {
        let cfg = CurrentLayoutConfig {
            header_response: HeaderResponse::Clipped,
            ..DEFAULTS
        };
        let s = snap(cfg);
        let geo = header_geometry(&s);
        assert_eq!(geo.margin_left, 0);
        assert_eq!(geo.width, RegionWidth::Full);
        assert!(header_above_nav(&s));
    }

    #[test]
    fn squeezed_header_shrinks() {
        let geo = header_geometry(&snap(DEFAULTS));
        assert_eq!(geo.margin_left, 256);
        assert_eq!(geo.width, RegionWidth::Reduced(256));
    }

    #[test]
    fn geometry_tracks_effective_width_not_configured() {
        // Collapsed nav: regions see the collapsed width.
        let s = LayoutSnapshot::compose(Breakpoint::Lg, &DEFAULTS, true, true, false, false, None);
        assert_eq!(content_geometry(&s).margin_left, 64);

        // Closed temporary nav: regions see zero.
        let cfg = CurrentLayoutConfig {
            nav_variant: NavVariant::Temporary,
            ..DEFAULTS
        };
        let s = LayoutSnapshot::compose(Breakpoint::Lg, &cfg, false, false, false, false, None);
        assert_eq!(content_geometry(&s).margin_left, 0);
        assert_eq!(content_geometry(&s).width, RegionWidth::Reduced(0));
    }

    #[test]
    fn menu_toggle_hidden_for_permanent() {
        assert!(!shows_menu_toggle(&snap(DEFAULTS)));
        let cfg = CurrentLayoutConfig {
            nav_variant: NavVariant::Temporary,
            ..DEFAULTS
        };
        assert!(shows_menu_toggle(&snap(cfg)));
    }
}
