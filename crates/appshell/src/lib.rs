#![forbid(unsafe_code)]

//! AppShell public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the layout and runtime crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Usage
//!
//! ```ignore
//! use appshell::prelude::*;
//!
//! let mut store = LayoutStore::new(presets::default_layout())?;
//! store.resize(1440);
//! let geo = region::content_geometry(store.snapshot());
//! ```

// --- Layout re-exports -----------------------------------------------------

pub use appshell_layout::{
    Breakpoint, Breakpoints, ConfigError, CurrentLayoutConfig, DEFAULTS, HeaderPosition,
    HeaderResponse, LayoutConfig, LayoutSnapshot, NavAnchor, NavVariant, ProjectionCache,
    ProjectionCacheStats, Response, ScreenMap, ScreenValue, effective_nav_width, presets, region,
    resolve_screen_value,
};

// --- Runtime re-exports ----------------------------------------------------

pub use appshell_runtime::{
    DragController, DragNoopReason, DragState, DragTransition, LayoutStore, LiveState,
    PointerSignals, Viewport,
};

/// Convenience imports for building a shell.
pub mod prelude {
    pub use appshell_layout::{
        Breakpoint, Breakpoints, LayoutConfig, LayoutSnapshot, NavAnchor, NavVariant, Response,
        ScreenValue, presets, region,
    };
    pub use appshell_runtime::{DragController, LayoutStore, PointerSignals};
}
