#![forbid(unsafe_code)]

//! The declarative configuration surface and its projection.
//!
//! [`LayoutConfig`] is the partial, per-breakpoint configuration an
//! embedding application supplies once per layout root. Every option may be
//! a scalar or a [`ScreenValue`] map; missing options take [`DEFAULTS`].
//! [`LayoutConfig::project`] flattens it into a [`CurrentLayoutConfig`] for
//! one breakpoint by resolving exactly the closed option set - the struct
//! itself is the closed set, and serde ignores unknown keys on input.
//!
//! # Invariants
//!
//! 1. Projection touches every recognized option and nothing else.
//! 2. Projection is pure; the same `(config, screen)` always yields the
//!    same `CurrentLayoutConfig`.
//! 3. A config that validates once validates at every breakpoint - the
//!    only failure is an empty map, which is screen-independent.
//!
//! # Failure Modes
//!
//! [`ConfigError`] from an empty per-breakpoint map, surfaced by
//! [`LayoutConfig::validate`] or at first projection.

use serde::{Deserialize, Serialize};

use super::Breakpoint;
use super::responsive::{ConfigError, ScreenValue, resolve_screen_value};

// ---------------------------------------------------------------------------
// Option domains
// ---------------------------------------------------------------------------

/// How the navigation panel behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Always present; ignores the open flag.
    Permanent,
    /// Remains open but can be hidden with a button.
    Persistent,
    /// Hides on click-away and selection.
    Temporary,
}

/// Which side of the screen holds the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAnchor {
    Left,
    Right,
}

/// Positioning applied to the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    Static,
    Relative,
    Sticky,
    Fixed,
    Absolute,
}

/// How the header reacts to the navigation panel's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderResponse {
    /// Header spans the full width, stacked above the nav.
    Clipped,
    /// Header keeps full width and position.
    Static,
    /// Header shrinks to fit beside the nav.
    Squeezed,
    /// Header keeps its width but is pushed aside.
    Pushed,
}

/// How the content or footer reacts to the navigation panel's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    /// Keep full width and position.
    Static,
    /// Shrink to fit beside the nav.
    Squeezed,
    /// Keep width but shift beside the nav.
    Pushed,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Partial, per-breakpoint layout configuration.
///
/// Any subset of options may be supplied; each may vary per breakpoint.
/// Serialized with the original camelCase option names, so e.g.
/// `{"navWidth": {"sm": 200, "md": 256}, "collapsible": false}` parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Can the navigation be collapsed to a narrow rail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<ScreenValue<bool>>,
    /// Width of the collapsed navigation, px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_width: Option<ScreenValue<u16>>,
    /// Can the navigation edge be dragged to resize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<ScreenValue<bool>>,
    /// Side of the screen holding the navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_anchor: Option<ScreenValue<NavAnchor>>,
    /// Navigation behavior variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_variant: Option<ScreenValue<NavVariant>>,
    /// Desired navigation width, px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_width: Option<ScreenValue<u16>>,
    /// Upper clamp for the navigation width, px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nav_width: Option<ScreenValue<u16>>,
    /// Positioning applied to the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_position: Option<ScreenValue<HeaderPosition>>,
    /// How the header responds to the nav width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_response: Option<ScreenValue<HeaderResponse>>,
    /// How the content responds to the nav width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_response: Option<ScreenValue<Response>>,
    /// How the footer responds to the nav width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_response: Option<ScreenValue<Response>>,
}

/// Configuration with every option resolved for one breakpoint.
///
/// Output of [`LayoutConfig::project`]; recomputed, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLayoutConfig {
    pub collapsible: bool,
    pub collapsed_width: u16,
    pub draggable: bool,
    pub nav_anchor: NavAnchor,
    pub nav_variant: NavVariant,
    pub nav_width: u16,
    pub max_nav_width: u16,
    pub header_position: HeaderPosition,
    pub header_response: HeaderResponse,
    pub content_response: Response,
    pub footer_response: Response,
}

/// Global defaults for every recognized option.
///
/// Consulted only as the fallback side of resolution; no behavior of its own.
pub const DEFAULTS: CurrentLayoutConfig = CurrentLayoutConfig {
    collapsible: true,
    collapsed_width: 64,
    draggable: false,
    nav_anchor: NavAnchor::Left,
    nav_variant: NavVariant::Permanent,
    nav_width: 256,
    max_nav_width: 512,
    header_position: HeaderPosition::Relative,
    header_response: HeaderResponse::Squeezed,
    content_response: Response::Squeezed,
    footer_response: Response::Squeezed,
};

impl Default for CurrentLayoutConfig {
    fn default() -> Self {
        DEFAULTS
    }
}

impl LayoutConfig {
    /// An empty configuration; every option falls back to [`DEFAULTS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every option for one breakpoint.
    pub fn project(&self, screen: Breakpoint) -> Result<CurrentLayoutConfig, ConfigError> {
        Ok(CurrentLayoutConfig {
            collapsible: resolve_screen_value(
                screen,
                self.collapsible.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.collapsible),
            )?,
            collapsed_width: resolve_screen_value(
                screen,
                self.collapsed_width.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.collapsed_width),
            )?,
            draggable: resolve_screen_value(
                screen,
                self.draggable.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.draggable),
            )?,
            nav_anchor: resolve_screen_value(
                screen,
                self.nav_anchor.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.nav_anchor),
            )?,
            nav_variant: resolve_screen_value(
                screen,
                self.nav_variant.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.nav_variant),
            )?,
            nav_width: resolve_screen_value(
                screen,
                self.nav_width.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.nav_width),
            )?,
            max_nav_width: resolve_screen_value(
                screen,
                self.max_nav_width.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.max_nav_width),
            )?,
            header_position: resolve_screen_value(
                screen,
                self.header_position.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.header_position),
            )?,
            header_response: resolve_screen_value(
                screen,
                self.header_response.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.header_response),
            )?,
            content_response: resolve_screen_value(
                screen,
                self.content_response.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.content_response),
            )?,
            footer_response: resolve_screen_value(
                screen,
                self.footer_response.as_ref(),
                &ScreenValue::Uniform(DEFAULTS.footer_response),
            )?,
        })
    }

    /// Reject configurations containing an empty per-breakpoint map.
    ///
    /// Resolution failure is screen-independent, so projecting at one
    /// breakpoint is sufficient; all five are checked anyway to keep the
    /// reported screen stable if that ever changes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for bp in Breakpoint::ALL {
            self.project(bp)?;
        }
        Ok(())
    }

    // --- Builder setters ---------------------------------------------------

    /// Set `collapsible`.
    #[must_use]
    pub fn collapsible(mut self, value: impl Into<ScreenValue<bool>>) -> Self {
        self.collapsible = Some(value.into());
        self
    }

    /// Set `collapsedWidth` (px).
    #[must_use]
    pub fn collapsed_width(mut self, value: impl Into<ScreenValue<u16>>) -> Self {
        self.collapsed_width = Some(value.into());
        self
    }

    /// Set `draggable`.
    #[must_use]
    pub fn draggable(mut self, value: impl Into<ScreenValue<bool>>) -> Self {
        self.draggable = Some(value.into());
        self
    }

    /// Set `navAnchor`.
    #[must_use]
    pub fn nav_anchor(mut self, value: impl Into<ScreenValue<NavAnchor>>) -> Self {
        self.nav_anchor = Some(value.into());
        self
    }

    /// Set `navVariant`.
    #[must_use]
    pub fn nav_variant(mut self, value: impl Into<ScreenValue<NavVariant>>) -> Self {
        self.nav_variant = Some(value.into());
        self
    }

    /// Set `navWidth` (px).
    #[must_use]
    pub fn nav_width(mut self, value: impl Into<ScreenValue<u16>>) -> Self {
        self.nav_width = Some(value.into());
        self
    }

    /// Set `maxNavWidth` (px).
    #[must_use]
    pub fn max_nav_width(mut self, value: impl Into<ScreenValue<u16>>) -> Self {
        self.max_nav_width = Some(value.into());
        self
    }

    /// Set `headerPosition`.
    #[must_use]
    pub fn header_position(mut self, value: impl Into<ScreenValue<HeaderPosition>>) -> Self {
        self.header_position = Some(value.into());
        self
    }

    /// Set `headerResponse`.
    #[must_use]
    pub fn header_response(mut self, value: impl Into<ScreenValue<HeaderResponse>>) -> Self {
        self.header_response = Some(value.into());
        self
    }

    /// Set `contentResponse`.
    #[must_use]
    pub fn content_response(mut self, value: impl Into<ScreenValue<Response>>) -> Self {
        self.content_response = Some(value.into());
        self
    }

    /// Set `footerResponse`.
    #[must_use]
    pub fn footer_response(mut self, value: impl Into<ScreenValue<Response>>) -> Self {
        self.footer_response = Some(value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
