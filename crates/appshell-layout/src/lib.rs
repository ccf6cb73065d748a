#![forbid(unsafe_code)]

//! App-shell layout resolution.
//!
//! This crate is the pure half of AppShell: it turns a declarative,
//! per-breakpoint [`LayoutConfig`] plus live interaction flags into one
//! consistent [`LayoutSnapshot`] that every shell region (header, nav,
//! content, footer) reads.
//!
//! - [`Breakpoint`] / [`Breakpoints`] - viewport-width buckets
//! - [`ScreenValue`] - a scalar or a sparse per-breakpoint mapping
//! - [`LayoutConfig`] - the declarative configuration surface
//! - [`effective_nav_width`] - the nav-width decision table
//! - [`LayoutSnapshot`] - the resolved read model
//! - [`region`] - per-region geometry (margins, widths, stacking)
//! - [`presets`] - canned configurations for common shells
//! - [`ProjectionCache`] - memoized configuration projection
//!
//! Everything here is synchronous and side-effect-free; the live state that
//! drives recomputation is owned by `appshell-runtime`.

pub mod cache;
pub mod config;
pub mod nav_width;
pub mod presets;
pub mod region;
pub mod responsive;
pub mod snapshot;

pub use cache::{ProjectionCache, ProjectionCacheStats};
pub use config::{
    CurrentLayoutConfig, DEFAULTS, HeaderPosition, HeaderResponse, LayoutConfig, NavAnchor,
    NavVariant, Response,
};
pub use nav_width::effective_nav_width;
pub use responsive::{ConfigError, ScreenMap, ScreenValue, resolve_screen_value};
pub use snapshot::LayoutSnapshot;

use serde::{Deserialize, Serialize};

/// Responsive breakpoint tiers for viewport widths.
///
/// Ordered from smallest to largest. Each variant represents a width
/// range determined by [`Breakpoints`].
///
/// | Breakpoint | Default Min Width | Typical Use               |
/// |-----------|--------------------|---------------------------|
/// | `Xs`      | < 600 px           | Phones                    |
/// | `Sm`      | 600-959 px         | Small tablets             |
/// | `Md`      | 960-1279 px        | Large tablets / laptops   |
/// | `Lg`      | 1280-1919 px       | Desktops                  |
/// | `Xl`      | 1920+ px           | Large desktops            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Extra small: narrowest tier.
    Xs,
    /// Small: compact layouts.
    Sm,
    /// Medium: standard content width.
    Md,
    /// Large: full desktop shell.
    Lg,
    /// Extra large: widest tier.
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Ordinal index (0-4).
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
            Breakpoint::Xl => 4,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Breakpoint thresholds for viewport-width classification.
///
/// Each field is the minimum width (in px) for that breakpoint.
/// Xs implicitly starts at width 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Minimum width for Sm.
    pub sm: u16,
    /// Minimum width for Md.
    pub md: u16,
    /// Minimum width for Lg.
    pub lg: u16,
    /// Minimum width for Xl.
    pub xl: u16,
}

impl Breakpoints {
    /// Default thresholds: 600 / 960 / 1280 / 1920 px.
    pub const DEFAULT: Self = Self {
        sm: 600,
        md: 960,
        lg: 1280,
        xl: 1920,
    };

    /// Create breakpoints with explicit thresholds.
    ///
    /// Values are sanitized to be monotonically non-decreasing.
    #[must_use]
    pub const fn new(sm: u16, md: u16, lg: u16, xl: u16) -> Self {
        let md = if md < sm { sm } else { md };
        let lg = if lg < md { md } else { lg };
        let xl = if xl < lg { lg } else { xl };
        Self { sm, md, lg, xl }
    }

    /// Classify a viewport width into a breakpoint bucket.
    #[inline]
    #[must_use]
    pub const fn classify_width(self, width: u16) -> Breakpoint {
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// Check if a width is at least a given breakpoint.
    #[inline]
    #[must_use]
    pub const fn at_least(self, width: u16, min: Breakpoint) -> bool {
        self.classify_width(width).index() >= min.index()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_ordered() {
        assert!(Breakpoint::Xs < Breakpoint::Sm);
        assert!(Breakpoint::Sm < Breakpoint::Md);
        assert!(Breakpoint::Md < Breakpoint::Lg);
        assert!(Breakpoint::Lg < Breakpoint::Xl);
    }

    #[test]
    fn all_is_ascending() {
        for pair in Breakpoint::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn classify_default_thresholds() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify_width(0), Breakpoint::Xs);
        assert_eq!(bp.classify_width(599), Breakpoint::Xs);
        assert_eq!(bp.classify_width(600), Breakpoint::Sm);
        assert_eq!(bp.classify_width(959), Breakpoint::Sm);
        assert_eq!(bp.classify_width(960), Breakpoint::Md);
        assert_eq!(bp.classify_width(1280), Breakpoint::Lg);
        assert_eq!(bp.classify_width(1920), Breakpoint::Xl);
        assert_eq!(bp.classify_width(u16::MAX), Breakpoint::Xl);
    }

    #[test]
    fn new_sanitizes_non_monotonic_thresholds() {
        let bp = Breakpoints::new(800, 700, 900, 850);
        assert_eq!(bp.sm, 800);
        assert_eq!(bp.md, 800);
        assert_eq!(bp.lg, 900);
        assert_eq!(bp.xl, 900);
    }

    #[test]
    fn at_least() {
        let bp = Breakpoints::DEFAULT;
        assert!(bp.at_least(1300, Breakpoint::Lg));
        assert!(bp.at_least(1300, Breakpoint::Xs));
        assert!(!bp.at_least(1300, Breakpoint::Xl));
    }

    #[test]
    fn label_and_display() {
        assert_eq!(Breakpoint::Md.label(), "md");
        assert_eq!(format!("{}", Breakpoint::Xl), "xl");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Breakpoint::Lg).unwrap();
        assert_eq!(json, "\"lg\"");
        let back: Breakpoint = serde_json::from_str("\"sm\"").unwrap();
        assert_eq!(back, Breakpoint::Sm);
    }
}
