// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for defaults used across the application,
//! organized by category.

// ==========================================================================
// Guide Deck Defaults
// ==========================================================================

/// Whether the guide deck auto-advances by default.
pub const DEFAULT_AUTO_ADVANCE: bool = true;

/// Fallback display duration for slides that do not declare one (seconds).
pub const DEFAULT_SLIDE_DURATION_SECS: u32 = 8;

/// Minimum allowed per-slide duration (seconds).
pub const MIN_SLIDE_DURATION_SECS: u32 = 2;

/// Maximum allowed per-slide duration (seconds).
pub const MAX_SLIDE_DURATION_SECS: u32 = 60;

/// Cadence of the periodic tick that drives the auto-advance countdown
/// and notification auto-dismiss (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Preview / Pivot Defaults
// ==========================================================================

/// Number of pivot responses kept in the selection-keyed cache.
pub const DEFAULT_PIVOT_CACHE_ENTRIES: usize = 16;

/// Minimum pivot cache capacity.
pub const MIN_PIVOT_CACHE_ENTRIES: usize = 4;

/// Maximum pivot cache capacity.
pub const MAX_PIVOT_CACHE_ENTRIES: usize = 128;

/// Simulated latency of the bundled demo pivot source (milliseconds).
pub const DEFAULT_DEMO_LATENCY_MS: u64 = 350;

/// Maximum configurable demo latency (milliseconds).
pub const MAX_DEMO_LATENCY_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slide duration validation
    assert!(MIN_SLIDE_DURATION_SECS > 0);
    assert!(MAX_SLIDE_DURATION_SECS >= MIN_SLIDE_DURATION_SECS);
    assert!(DEFAULT_SLIDE_DURATION_SECS >= MIN_SLIDE_DURATION_SECS);
    assert!(DEFAULT_SLIDE_DURATION_SECS <= MAX_SLIDE_DURATION_SECS);

    // The tick must be fine-grained enough to hit the shortest slide
    // duration with sub-second error.
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < MIN_SLIDE_DURATION_SECS as u64 * 1_000);

    // Pivot cache validation
    assert!(MIN_PIVOT_CACHE_ENTRIES > 0);
    assert!(MAX_PIVOT_CACHE_ENTRIES >= MIN_PIVOT_CACHE_ENTRIES);
    assert!(DEFAULT_PIVOT_CACHE_ENTRIES >= MIN_PIVOT_CACHE_ENTRIES);
    assert!(DEFAULT_PIVOT_CACHE_ENTRIES <= MAX_PIVOT_CACHE_ENTRIES);

    // Demo latency validation
    assert!(DEFAULT_DEMO_LATENCY_MS <= MAX_DEMO_LATENCY_MS);
};
