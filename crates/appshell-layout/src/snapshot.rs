#![forbid(unsafe_code)]

//! The resolved read model broadcast to every shell region.
//!
//! A [`LayoutSnapshot`] merges the projected configuration with live
//! interaction state and the derived effective nav width. It has no
//! independent identity: any change to an input regenerates it entirely,
//! so regions can compare snapshots by value.
//!
//! Note `nav_width` here is the live effective width, not the configured
//! desired width - a collapsed permanent nav reports `collapsed_width`, a
//! closed temporary nav reports 0.

use serde::{Deserialize, Serialize};

use super::Breakpoint;
use super::config::{
    CurrentLayoutConfig, HeaderPosition, HeaderResponse, NavAnchor, NavVariant, Response,
};
use super::nav_width::effective_nav_width;

/// One consistent geometry snapshot for all shell regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    // Resolved configuration for the active screen.
    pub collapsible: bool,
    pub collapsed_width: u16,
    pub draggable: bool,
    pub nav_anchor: NavAnchor,
    pub nav_variant: NavVariant,
    pub max_nav_width: u16,
    pub header_position: HeaderPosition,
    pub header_response: HeaderResponse,
    pub content_response: Response,
    pub footer_response: Response,
    // Live state.
    pub open: bool,
    pub collapsed: bool,
    pub dragged: bool,
    pub contained: bool,
    pub screen: Breakpoint,
    /// Live effective nav width, px.
    pub nav_width: u16,
}

impl LayoutSnapshot {
    /// Compose a snapshot from resolved configuration and live state.
    ///
    /// Pure and deterministic; called on every recompute.
    #[must_use]
    pub fn compose(
        screen: Breakpoint,
        cfg: &CurrentLayoutConfig,
        open: bool,
        collapsed: bool,
        dragged: bool,
        contained: bool,
        override_nav_width: Option<u16>,
    ) -> Self {
        Self {
            collapsible: cfg.collapsible,
            collapsed_width: cfg.collapsed_width,
            draggable: cfg.draggable,
            nav_anchor: cfg.nav_anchor,
            nav_variant: cfg.nav_variant,
            max_nav_width: cfg.max_nav_width,
            header_position: cfg.header_position,
            header_response: cfg.header_response,
            content_response: cfg.content_response,
            footer_response: cfg.footer_response,
            open,
            collapsed,
            dragged,
            contained,
            screen,
            nav_width: effective_nav_width(cfg, collapsed, open, override_nav_width),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
