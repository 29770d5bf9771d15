// SPDX-License-Identifier: MPL-2.0
//! Pivot preview data model.
//!
//! The preview panel renders pivot tables computed outside this crate; the
//! boundary is the [`PivotSource`] port. The bundled [`DemoPivotSource`]
//! stands in for the real analytics backend with a deterministic sample
//! table so the preview is fully navigable offline.
//!
//! Responses are cached per normalized selection (see
//! [`SelectionSet::cache_key`](crate::selection::SelectionSet::cache_key)),
//! and every request carries a generation counter so a response that arrives
//! after the selection has moved on is discarded instead of overwriting
//! fresher state.

pub mod cache;
pub mod source;

pub use cache::PivotCache;
pub use source::{DemoPivotSource, PivotSource};

/// A pivot request: the selected scope plus a generation stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRequest {
    /// Selected country IDs, in selection order.
    pub countries: Vec<String>,
    /// Selected category IDs, in selection order.
    pub categories: Vec<String>,
    /// Monotonic stamp; responses for an older generation are stale.
    pub generation: u64,
}

impl PivotRequest {
    /// Whether there is anything to pivot at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() || self.categories.is_empty()
    }
}

/// One cell of the pivot: populated metric count for a country × category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotCell {
    /// Metrics with data for this pair.
    pub populated: u32,
    /// Metrics the category tracks in total.
    pub tracked: u32,
}

impl PivotCell {
    /// Coverage as a percentage in `0..=100`.
    #[must_use]
    pub fn coverage_pct(&self) -> u32 {
        if self.tracked == 0 {
            return 0;
        }
        self.populated * 100 / self.tracked
    }
}

/// One row of the pivot table (a country across all selected categories).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub country_id: String,
    pub cells: Vec<PivotCell>,
}

impl PivotRow {
    /// Sum of populated metrics across the row.
    #[must_use]
    pub fn total_populated(&self) -> u32 {
        self.cells.iter().map(|c| c.populated).sum()
    }
}

/// A computed pivot table: countries as rows, categories as columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotTable {
    /// Category IDs, one per column, in request order.
    pub columns: Vec<String>,
    /// One row per requested country, in request order.
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Sum of populated metrics across the whole table.
    #[must_use]
    pub fn total_populated(&self) -> u32 {
        self.rows.iter().map(PivotRow::total_populated).sum()
    }
}

/// Lifecycle of the preview panel's pivot data.
///
/// Mirrors the loading/error/data triple the panel renders: `Failed`
/// carries a display message that is shown verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PivotStatus {
    /// Nothing requested yet (empty selection).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Ready(PivotTable),
    /// The latest request failed; the message is display-only.
    Failed(String),
}

impl PivotStatus {
    /// The table, if one is ready.
    #[must_use]
    pub fn table(&self) -> Option<&PivotTable> {
        match self {
            PivotStatus::Ready(table) => Some(table),
            _ => None,
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, PivotStatus::Loading)
    }
}
