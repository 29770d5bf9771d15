// SPDX-License-Identifier: MPL-2.0
//! Pivot computation port and the bundled demo implementation.
//!
//! The real analytics backend lives outside this crate. [`PivotSource`] is
//! the seam: implementations take a request and return a table or a display
//! message. The trait is synchronous; callers wrap invocations in an Iced
//! `Task` (simulated latency included) so the UI thread never blocks.

use super::{PivotCell, PivotRequest, PivotRow, PivotTable};
use crate::catalog::Catalog;
use std::sync::Arc;

/// Port for computing pivot tables from a selection scope.
///
/// Implementations must be `Send + Sync`: the computation runs on the
/// executor's worker threads.
pub trait PivotSource: Send + Sync {
    /// Computes a pivot table for the request.
    ///
    /// The error string is shown to the user verbatim.
    fn compute(&self, request: &PivotRequest) -> Result<PivotTable, String>;
}

/// Deterministic sample source used when no real backend is wired up.
///
/// Cell values are derived from a stable hash of the country/category pair,
/// so the same selection always previews the same table and tests can assert
/// exact values.
pub struct DemoPivotSource {
    catalog: Arc<Catalog>,
}

impl DemoPivotSource {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Populated metric count for one pair: a stable fraction (between 55%
    /// and 100%) of the category's tracked metrics. Unknown categories track
    /// zero metrics and therefore populate zero.
    fn populated_for(&self, country_id: &str, category_id: &str) -> PivotCell {
        let tracked = self
            .catalog
            .category(category_id)
            .map_or(0, |c| c.metric_count);
        if tracked == 0 {
            return PivotCell {
                populated: 0,
                tracked: 0,
            };
        }

        let coverage_pct = 55 + pair_hash(country_id, category_id) % 46; // 55..=100
        let populated = (tracked * coverage_pct / 100).min(tracked);
        PivotCell { populated, tracked }
    }
}

impl PivotSource for DemoPivotSource {
    fn compute(&self, request: &PivotRequest) -> Result<PivotTable, String> {
        if request.is_empty() {
            return Err("Select at least one country and one data layer".to_string());
        }

        let rows = request
            .countries
            .iter()
            .map(|country_id| PivotRow {
                country_id: country_id.clone(),
                cells: request
                    .categories
                    .iter()
                    .map(|category_id| self.populated_for(country_id, category_id))
                    .collect(),
            })
            .collect();

        Ok(PivotTable {
            columns: request.categories.clone(),
            rows,
        })
    }
}

/// FNV-1a over both identifiers, reduced to a small positive range.
fn pair_hash(a: &str, b: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in a.bytes().chain(std::iter::once(b'/')).chain(b.bytes()) {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash % 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> DemoPivotSource {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        DemoPivotSource::new(Arc::new(catalog))
    }

    fn request(countries: &[&str], categories: &[&str]) -> PivotRequest {
        PivotRequest {
            countries: countries.iter().map(|s| s.to_string()).collect(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            generation: 0,
        }
    }

    #[test]
    fn empty_request_is_rejected_with_display_message() {
        let result = source().compute(&request(&["SAU"], &[]));
        assert!(result.is_err());
    }

    #[test]
    fn table_shape_matches_request() {
        let table = source()
            .compute(&request(
                &["SAU", "ARE"],
                &["demographics", "nutrition", "health-outcomes"],
            ))
            .expect("demo source should compute");

        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].country_id, "SAU");
        assert_eq!(table.rows[0].cells.len(), 3);
    }

    #[test]
    fn computation_is_deterministic() {
        let request = request(&["SAU", "ARE"], &["demographics", "nutrition"]);
        let first = source().compute(&request).expect("compute");
        let second = source().compute(&request).expect("compute");
        assert_eq!(first, second);
    }

    #[test]
    fn populated_never_exceeds_tracked() {
        let table = source()
            .compute(&request(
                &["SAU", "ARE", "EGY", "IND"],
                &["demographics", "health-outcomes", "ncd-risk"],
            ))
            .expect("compute");

        for row in &table.rows {
            for cell in &row.cells {
                assert!(cell.populated <= cell.tracked);
                assert!(cell.populated > 0, "demo coverage floor is above zero");
            }
        }
    }

    #[test]
    fn unknown_category_yields_empty_cells() {
        let table = source()
            .compute(&request(&["SAU"], &["no-such-layer"]))
            .expect("compute");

        assert_eq!(
            table.rows[0].cells[0],
            PivotCell {
                populated: 0,
                tracked: 0
            }
        );
    }
}
