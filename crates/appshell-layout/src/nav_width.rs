#![forbid(unsafe_code)]

//! The nav-width decision table.
//!
//! Computes the effective navigation-panel width from resolved
//! configuration plus live state. A permanent nav is logically always open;
//! other variants occupy no width while closed. The live drag override
//! takes priority over the configured width but is clamped into
//! `[collapsedWidth, maxNavWidth]`, so dragging can never produce an
//! invalid or overflowing width.
//!
//! # Invariants
//!
//! 1. Collapsed (and collapsible) nav is exactly `collapsedWidth` wide.
//! 2. Expanded nav width lies in `[collapsedWidth, maxNavWidth]`.
//! 3. A closed persistent/temporary nav is 0 wide regardless of the rest.

use super::config::{CurrentLayoutConfig, NavVariant};

/// Effective navigation width for one snapshot, px.
///
/// `override_width` is the live drag width, if any.
#[must_use]
pub fn effective_nav_width(
    cfg: &CurrentLayoutConfig,
    collapsed: bool,
    open: bool,
    override_width: Option<u16>,
) -> u16 {
    if cfg.nav_variant == NavVariant::Permanent || open {
        if cfg.collapsible && collapsed {
            return cfg.collapsed_width;
        }
        // min(max(x, lo), hi): the hi bound wins if the config is inverted.
        override_width
            .unwrap_or(cfg.nav_width)
            .max(cfg.collapsed_width)
            .min(cfg.max_nav_width)
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
