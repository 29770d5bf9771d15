// SPDX-License-Identifier: MPL-2.0
//! Controller for the insight detail overlay.
//!
//! At most one insight is displayed at a time: opening another replaces the
//! current one rather than stacking. Identifiers are resolved against the
//! static insight table; an identifier the table does not contain is a
//! silent no-op, so stale or mistyped references can never panic the UI.

use crate::catalog::{Catalog, Insight};

/// Holds the currently displayed insight, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightPanel {
    active: Option<Insight>,
}

impl InsightPanel {
    /// Creates a closed panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `id` against the catalog and displays it, replacing any
    /// insight already shown. Returns `true` if the overlay is now showing
    /// the requested insight.
    pub fn open(&mut self, id: &str, catalog: &Catalog) -> bool {
        match catalog.insight(id) {
            Some(insight) => {
                self.active = Some(insight.clone());
                true
            }
            None => false,
        }
    }

    /// Hides the overlay. Idempotent.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The insight currently on display.
    #[must_use]
    pub fn active(&self) -> Option<&Insight> {
        self.active.as_ref()
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog should parse")
    }

    #[test]
    fn new_panel_is_closed() {
        let panel = InsightPanel::new();
        assert!(!panel.is_open());
        assert!(panel.active().is_none());
    }

    #[test]
    fn open_resolves_known_id() {
        let catalog = catalog();
        let mut panel = InsightPanel::new();

        assert!(panel.open("coverage-depth", &catalog));
        assert!(panel.is_open());
        assert_eq!(
            panel.active().map(|i| i.id.as_str()),
            Some("coverage-depth")
        );
    }

    #[test]
    fn open_replaces_rather_than_stacks() {
        let catalog = catalog();
        let mut panel = InsightPanel::new();

        panel.open("coverage-depth", &catalog);
        panel.open("equity-gap", &catalog);

        assert_eq!(panel.active().map(|i| i.id.as_str()), Some("equity-gap"));
    }

    #[test]
    fn open_with_unknown_id_is_silent_noop() {
        let catalog = catalog();
        let mut panel = InsightPanel::new();

        assert!(!panel.open("no-such-insight", &catalog));
        assert!(!panel.is_open());

        // An already-open insight survives a failed open.
        panel.open("coverage-depth", &catalog);
        assert!(!panel.open("no-such-insight", &catalog));
        assert_eq!(
            panel.active().map(|i| i.id.as_str()),
            Some("coverage-depth")
        );
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = catalog();
        let mut panel = InsightPanel::new();
        panel.open("coverage-depth", &catalog);

        panel.close();
        assert!(!panel.is_open());
        panel.close();
        assert!(!panel.is_open());
    }
}
