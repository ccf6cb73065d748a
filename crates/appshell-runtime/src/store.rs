#![forbid(unsafe_code)]

//! The layout state store.
//!
//! One [`LayoutStore`] per layout root owns the live interaction state and
//! the declarative config, and recomputes the full [`LayoutSnapshot`]
//! whenever configuration, live state, or screen size changes. Every
//! recompute is synchronous and re-broadcasts the snapshot to subscribed
//! regions; the most recently processed event always wins.
//!
//! # Usage
//!
//! ```ignore
//! use appshell_layout::presets;
//! use appshell_runtime::LayoutStore;
//!
//! let mut store = LayoutStore::new(presets::default_layout())?;
//! store.resize(1440);
//! store.toggle_collapsed();
//! let nav = store.snapshot().nav_width;
//! ```
//!
//! # Invariants
//!
//! 1. The snapshot is always consistent with `(config, live state)`; there
//!    is no window where regions can observe a partial update.
//! 2. State is mutated only through the setters here.
//! 3. A drag candidate width outside `(collapsedWidth, maxNavWidth)` is
//!    dropped, not clamped, so the nav never jumps to a boundary mid-drag.
//!
//! # Failure Modes
//!
//! A malformed config (empty per-breakpoint map) is rejected at
//! construction or replacement with a [`ConfigError`]; after that,
//! recomputation cannot fail.

use tracing::{debug, trace};

use appshell_layout::{
    Breakpoint, Breakpoints, ConfigError, LayoutConfig, LayoutSnapshot, NavAnchor, ProjectionCache,
};

/// Cached projections cover the five breakpoints of a couple of configs.
const PROJECTION_CACHE_CAPACITY: usize = 16;

/// Container metrics used to convert pointer coordinates into widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left offset of the layout container, px.
    pub left: i32,
    /// Width of the layout container, px.
    pub width: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { left: 0, width: 1920 }
    }
}

/// Live interaction state for one layout root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveState {
    /// Is the navigation panel currently open.
    pub open: bool,
    /// Is the navigation currently collapsed.
    pub collapsed: bool,
    /// Is a drag session active.
    pub dragged: bool,
    /// Live drag width override, px.
    pub override_nav_width: Option<u16>,
    /// Breakpoint range the screen is currently in.
    pub screen: Breakpoint,
    /// Is the shell contained in a parent element rather than the viewport.
    pub contained: bool,
}

type Listener = Box<dyn FnMut(&LayoutSnapshot)>;

/// Owns live state and broadcasts recomputed snapshots.
pub struct LayoutStore {
    config: LayoutConfig,
    breakpoints: Breakpoints,
    viewport: Viewport,
    state: LiveState,
    cache: ProjectionCache,
    snapshot: LayoutSnapshot,
    listeners: Vec<Listener>,
}

impl LayoutStore {
    /// Create a store for one layout root.
    ///
    /// The initial screen is `Xl`. The nav starts closed: a permanent nav
    /// ignores the flag and shows anyway, and non-permanent variants wait
    /// for an explicit open (override with [`with_open`](Self::with_open)).
    /// Rejects configs containing an empty per-breakpoint map.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let screen = Breakpoint::Xl;
        let mut cache = ProjectionCache::new(PROJECTION_CACHE_CAPACITY);
        let current = cache.resolve(screen, &config)?;
        let state = LiveState {
            open: false,
            collapsed: false,
            dragged: false,
            override_nav_width: None,
            screen,
            contained: false,
        };
        let snapshot = LayoutSnapshot::compose(
            screen,
            &current,
            state.open,
            state.collapsed,
            state.dragged,
            state.contained,
            state.override_nav_width,
        );
        Ok(Self {
            config,
            breakpoints: Breakpoints::DEFAULT,
            viewport: Viewport::default(),
            state,
            cache,
            snapshot,
            listeners: Vec::new(),
        })
    }

    // --- Construction-time builders ----------------------------------------

    /// Override the breakpoint thresholds (builder pattern).
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Start at a specific screen.
    #[must_use]
    pub fn with_screen(mut self, screen: Breakpoint) -> Self {
        self.state.screen = screen;
        self.recompute();
        self
    }

    /// Start with the nav open instead of the closed default.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.state.open = open;
        self.recompute();
        self
    }

    /// Mark the shell as contained in a parent element.
    #[must_use]
    pub fn with_contained(mut self, contained: bool) -> Self {
        self.state.contained = contained;
        self.recompute();
        self
    }

    // --- Reads -------------------------------------------------------------

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    /// The current live state.
    #[must_use]
    pub fn state(&self) -> &LiveState {
        &self.state
    }

    /// Projection cache counters, for diagnostics.
    #[must_use]
    pub fn cache_stats(&self) -> appshell_layout::ProjectionCacheStats {
        self.cache.stats()
    }

    /// Register a region callback; invoked with every recomputed snapshot.
    ///
    /// Listeners live as long as the store (the layout root's lifetime).
    pub fn subscribe(&mut self, listener: impl FnMut(&LayoutSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // --- Mutators ----------------------------------------------------------

    /// Set the open flag explicitly.
    pub fn set_open(&mut self, open: bool) {
        trace!(open, "set_open");
        self.state.open = open;
        self.recompute();
    }

    /// Flip the open flag.
    pub fn toggle_open(&mut self) {
        let open = !self.state.open;
        self.set_open(open);
    }

    /// Set the collapsed flag explicitly.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        trace!(collapsed, "set_collapsed");
        self.state.collapsed = collapsed;
        self.recompute();
    }

    /// Flip the collapsed flag.
    pub fn toggle_collapsed(&mut self) {
        let collapsed = !self.state.collapsed;
        self.set_collapsed(collapsed);
    }

    /// Begin or end a drag session. Direct set only; no toggle form.
    pub fn set_dragged(&mut self, dragged: bool) {
        trace!(dragged, "set_dragged");
        self.state.dragged = dragged;
        self.recompute();
    }

    /// Translate an absolute pointer x-coordinate into a nav width
    /// override.
    ///
    /// The candidate is measured from the anchor edge of the container and
    /// committed only when strictly inside `(collapsedWidth, maxNavWidth)`;
    /// out-of-range candidates are dropped so the width never jumps to a
    /// boundary value.
    pub fn set_nav_width(&mut self, screen_x: i32) {
        let candidate = match self.snapshot.nav_anchor {
            NavAnchor::Left => screen_x - self.viewport.left,
            NavAnchor::Right => i32::from(self.viewport.width) - screen_x,
        };
        let lo = i32::from(self.snapshot.collapsed_width);
        let hi = i32::from(self.snapshot.max_nav_width);
        if candidate > lo && candidate < hi {
            trace!(candidate, "set_nav_width");
            self.state.override_nav_width = Some(candidate as u16);
            self.recompute();
        } else {
            trace!(candidate, lo, hi, "set_nav_width dropped out-of-range candidate");
        }
    }

    /// Set the active breakpoint directly (e.g. from an external observer).
    pub fn set_screen(&mut self, screen: Breakpoint) {
        trace!(%screen, "set_screen");
        self.state.screen = screen;
        self.recompute();
    }

    /// Process a viewport resize: classifies the width into a breakpoint
    /// and records the container width for right-anchor drag math.
    pub fn resize(&mut self, width: u16) {
        self.viewport.width = width;
        let screen = self.breakpoints.classify_width(width);
        trace!(width, %screen, "resize");
        self.state.screen = screen;
        self.recompute();
    }

    /// Record the container's left offset for left-anchor drag math.
    pub fn set_viewport_left(&mut self, left: i32) {
        self.viewport.left = left;
    }

    /// Replace the configuration wholesale.
    ///
    /// The previous config stays in effect when the new one is rejected.
    pub fn replace_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.recompute();
        Ok(())
    }

    // --- Recompute ---------------------------------------------------------

    fn recompute(&mut self) {
        match self.cache.resolve(self.state.screen, &self.config) {
            Ok(current) => {
                self.snapshot = LayoutSnapshot::compose(
                    self.state.screen,
                    &current,
                    self.state.open,
                    self.state.collapsed,
                    self.state.dragged,
                    self.state.contained,
                    self.state.override_nav_width,
                );
                debug!(
                    screen = %self.snapshot.screen,
                    nav_width = self.snapshot.nav_width,
                    open = self.snapshot.open,
                    collapsed = self.snapshot.collapsed,
                    "layout recomputed"
                );
                for listener in &mut self.listeners {
                    listener(&self.snapshot);
                }
            }
            Err(err) => {
                // Unreachable for validated configs; keep the previous
                // snapshot rather than propagate from a mutator.
                tracing::error!(%err, "layout recompute failed; keeping previous snapshot");
            }
        }
    }
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("snapshot", &self.snapshot)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
