#![forbid(unsafe_code)]

//! Memoized configuration projection.
//!
//! Projection is a pure function of `(config, screen)`, so its result can
//! be cached. The store recomputes the snapshot on every interaction event;
//! most of those events (open/collapse toggles, drag moves) leave the
//! projection inputs untouched, and this cache makes those recomputes a
//! single hash lookup.
//!
//! # Usage
//!
//! ```ignore
//! use appshell_layout::{Breakpoint, LayoutConfig, ProjectionCache};
//!
//! let mut cache = ProjectionCache::new(16);
//! let config = LayoutConfig::new();
//! let current = cache.resolve(Breakpoint::Lg, &config)?;
//! ```
//!
//! # Invalidation
//!
//! The config fingerprint and the screen are both part of the key, so a
//! replaced config or a resize never serves a stale entry. `invalidate_all`
//! exists for callers that mutate a config in place behind the cache.
//!
//! # Eviction
//!
//! Least-recently-used entry is evicted when at capacity.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use super::Breakpoint;
use super::config::{CurrentLayoutConfig, LayoutConfig};
use super::responsive::ConfigError;

/// Key for projection cache lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    screen: Breakpoint,
    config_fingerprint: u64,
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    current: CurrentLayoutConfig,
    last_used: u64,
}

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// LRU cache of projected configurations.
#[derive(Debug)]
pub struct ProjectionCache {
    entries: FxHashMap<CacheKey, CacheEntry>,
    capacity: usize,
    tick: u64,
    stats: ProjectionCacheStats,
}

impl ProjectionCache {
    /// Create a cache holding at most `capacity` projections (min 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
            tick: 0,
            stats: ProjectionCacheStats::default(),
        }
    }

    /// Stable fingerprint of a configuration.
    #[must_use]
    pub fn fingerprint(config: &LayoutConfig) -> u64 {
        let mut hasher = FxHasher::default();
        config.hash(&mut hasher);
        hasher.finish()
    }

    /// Project `config` at `screen`, serving a cached result when one
    /// exists for the same fingerprint.
    pub fn resolve(
        &mut self,
        screen: Breakpoint,
        config: &LayoutConfig,
    ) -> Result<CurrentLayoutConfig, ConfigError> {
        let key = CacheKey {
            screen,
            config_fingerprint: Self::fingerprint(config),
        };
        self.tick += 1;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_used = self.tick;
            self.stats.hits += 1;
            return Ok(entry.current);
        }

        let current = config.project(screen)?;
        self.stats.misses += 1;
        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }
        self.entries.insert(
            key,
            CacheEntry {
                current,
                last_used: self.tick,
            },
        );
        Ok(current)
    }

    /// Drop every cached projection. Counters are kept.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of cached projections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no projections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters.
    #[must_use]
    pub fn stats(&self) -> ProjectionCacheStats {
        self.stats
    }

    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);
        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
