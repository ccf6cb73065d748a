#![forbid(unsafe_code)]

//! Per-breakpoint value resolution.
//!
//! [`ScreenValue<T>`] is either one value that applies at every breakpoint
//! or a sparse [`ScreenMap<T>`] that sets values only where behavior
//! changes. Resolution searches downward from the requested breakpoint to
//! the nearest smaller entry, then upward to the nearest larger one, so a
//! config like `{md: 3, lg: 4}` gives `3` at `xs`/`sm`/`md` and `4` at
//! `lg`/`xl`.
//!
//! # Usage
//!
//! ```ignore
//! use appshell_layout::{Breakpoint, ScreenValue};
//!
//! let columns = ScreenValue::map().at(Breakpoint::Md, 3).at(Breakpoint::Lg, 4);
//! assert_eq!(columns.resolve(Breakpoint::Xs), Some(&3));
//! assert_eq!(columns.resolve(Breakpoint::Xl), Some(&4));
//! ```
//!
//! # Invariants
//!
//! 1. A `Uniform` value resolves to itself at every breakpoint.
//! 2. For a map, the nearest entry at or below the breakpoint wins; if none
//!    exists below, the nearest entry above wins.
//! 3. An empty map resolves to nothing; [`resolve_screen_value`] reports it
//!    as a [`ConfigError`] naming the screen and the offending value.
//!
//! # Failure Modes
//!
//! Only the empty-map case fails, and it is a caller bug in the supplied
//! configuration, not a runtime condition - there is no silent default.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Breakpoint;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A sparse mapping from breakpoints to values.
///
/// One optional slot per [`Breakpoint`]. Serialized as an object keyed by
/// breakpoint label, e.g. `{"xs": false, "sm": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
}

/// A configuration value that is either uniform across breakpoints or
/// specified per breakpoint.
///
/// Modeled as an explicit sum so the resolver's branch is exhaustive rather
/// than a runtime type check. Serialized untagged: a bare scalar or a
/// breakpoint-keyed object both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenValue<T> {
    /// The same value at every breakpoint.
    Uniform(T),
    /// Values set only at specific breakpoints, with nearest-neighbor
    /// fallback at the rest.
    PerScreen(ScreenMap<T>),
}

/// Error raised when a supplied configuration cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A per-breakpoint mapping had no entry reachable by either fallback
    /// search direction (i.e. it was empty).
    Unresolvable {
        /// The screen the resolution was attempted for.
        screen: Breakpoint,
        /// Debug rendering of the offending configured value.
        value: String,
        /// Debug rendering of the fallback that was in effect.
        fallback: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolvable {
                screen,
                value,
                fallback,
            } => {
                write!(
                    f,
                    "config not valid at {screen}: {value} (fallback {fallback})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ScreenMap
// ---------------------------------------------------------------------------

impl<T> ScreenMap<T> {
    /// An empty map. Useless on its own; populate with [`at`](Self::at).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Set the value for a specific breakpoint (builder pattern).
    #[must_use]
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, value);
        self
    }

    /// Set the value for a specific breakpoint (mutating).
    pub fn set(&mut self, bp: Breakpoint, value: T) {
        *self.slot_mut(bp) = Some(value);
    }

    /// The explicit value at a breakpoint, if any (no fallback search).
    #[must_use]
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.slot(bp).as_ref()
    }

    /// Whether no breakpoint has an explicit value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL.iter().all(|&bp| self.get(bp).is_none())
    }

    /// All explicitly set breakpoints and their values, ascending.
    pub fn explicit_values(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| self.get(bp).map(|v| (bp, v)))
    }

    fn slot(&self, bp: Breakpoint) -> &Option<T> {
        match bp {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
        }
    }

    fn slot_mut(&mut self, bp: Breakpoint) -> &mut Option<T> {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}

impl<T> Default for ScreenMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ScreenValue
// ---------------------------------------------------------------------------

impl<T> ScreenValue<T> {
    /// An empty per-breakpoint value (builder entry point).
    #[must_use]
    pub const fn map() -> Self {
        Self::PerScreen(ScreenMap::new())
    }

    /// Set the value for a specific breakpoint (builder pattern).
    ///
    /// Converts a `Uniform` value into a map with that value at `Xs`, so
    /// `ScreenValue::from(1).at(Md, 2)` behaves like `{xs: 1, md: 2}`.
    #[must_use]
    pub fn at(self, bp: Breakpoint, value: T) -> Self {
        let map = match self {
            Self::Uniform(base) => ScreenMap::new().at(Breakpoint::Xs, base),
            Self::PerScreen(map) => map,
        };
        Self::PerScreen(map.at(bp, value))
    }

    /// Resolve the value for a given breakpoint.
    ///
    /// Walks downward from `bp` to `Xs`, then upward from `bp` to `Xl`,
    /// returning the first explicit entry. `None` only for an empty map.
    #[must_use]
    pub fn resolve(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::PerScreen(map) => {
                let idx = bp.index();
                for i in (0..=idx).rev() {
                    if let Some(value) = map.get(Breakpoint::ALL[i]) {
                        return Some(value);
                    }
                }
                for i in idx + 1..Breakpoint::ALL.len() {
                    if let Some(value) = map.get(Breakpoint::ALL[i]) {
                        return Some(value);
                    }
                }
                None
            }
        }
    }
}

impl<T> From<T> for ScreenValue<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

/// Resolve the effective value for one breakpoint from an optionally
/// configured [`ScreenValue`] and a fallback.
///
/// When `configured` is absent the fallback is resolved instead. An empty
/// mapping is a [`ConfigError`] naming the screen and both values; it
/// propagates to the caller that supplied the configuration.
pub fn resolve_screen_value<T: Clone + fmt::Debug>(
    screen: Breakpoint,
    configured: Option<&ScreenValue<T>>,
    fallback: &ScreenValue<T>,
) -> Result<T, ConfigError> {
    let value = configured.unwrap_or(fallback);
    value
        .resolve(screen)
        .cloned()
        .ok_or_else(|| ConfigError::Unresolvable {
            screen,
            value: format!("{value:?}"),
            fallback: format!("{fallback:?}"),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
