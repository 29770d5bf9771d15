// SPDX-License-Identifier: MPL-2.0
//! Pivot preview lifecycle: request stamping, stale-response discard, the
//! selection-keyed cache, and the export snapshot built from the result.

use std::sync::Arc;
use vital_atlas::assets::ApiBase;
use vital_atlas::catalog::Catalog;
use vital_atlas::export;
use vital_atlas::pivot::{DemoPivotSource, PivotCache, PivotSource};
use vital_atlas::selection::SelectionSet;
use vital_atlas::ui::preview::State;

fn setup() -> (Arc<Catalog>, DemoPivotSource) {
    let catalog = Arc::new(Catalog::load().expect("embedded catalog should parse"));
    let source = DemoPivotSource::new(Arc::clone(&catalog));
    (catalog, source)
}

#[test]
fn request_compute_apply_round_trip() {
    let (_catalog, source) = setup();
    let mut preview = State::new();

    let countries = SelectionSet::from_ids(["SAU", "ARE"]);
    let categories = SelectionSet::from_ids(["demographics", "nutrition"]);

    let request = preview
        .begin_request(&countries, &categories)
        .expect("non-empty scope issues a request");
    assert!(preview.status().is_loading());

    let result = source.compute(&request);
    assert!(preview.apply_result(request.generation, result));

    let table = preview.status().table().expect("table is ready");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.columns.len(), 2);
}

#[test]
fn superseded_request_never_overwrites_newer_state() {
    let (_catalog, source) = setup();
    let mut preview = State::new();

    let categories = SelectionSet::from_ids(["demographics"]);
    let first_scope = SelectionSet::from_ids(["SAU"]);
    let second_scope = SelectionSet::from_ids(["SAU", "ARE"]);

    let first = preview.begin_request(&first_scope, &categories).unwrap();
    let second = preview.begin_request(&second_scope, &categories).unwrap();

    // Responses arrive out of order: newest first.
    assert!(preview.apply_result(second.generation, source.compute(&second)));
    let rows_after_second = preview.status().table().unwrap().rows.len();

    assert!(!preview.apply_result(first.generation, source.compute(&first)));
    assert_eq!(
        preview.status().table().unwrap().rows.len(),
        rows_after_second,
        "stale single-country response must not replace the two-country table"
    );
}

#[test]
fn cache_round_trip_by_selection_key() {
    let (_catalog, source) = setup();
    let mut cache = PivotCache::new(8);

    let countries = SelectionSet::from_ids(["QAT", "KWT"]);
    let categories = SelectionSet::from_ids(["ncd-risk"]);
    let key = format!("{}|{}", countries.cache_key(), categories.cache_key());

    let request = vital_atlas::pivot::PivotRequest {
        countries: countries.to_vec(),
        categories: categories.to_vec(),
        generation: 1,
    };
    let table = source.compute(&request).expect("demo computes");
    cache.put(key.clone(), table.clone());

    // A permuted selection with the same members resolves to the same key.
    let permuted = SelectionSet::from_ids(["KWT", "QAT"]);
    let permuted_key = format!("{}|{}", permuted.cache_key(), categories.cache_key());
    assert_eq!(cache.get(&permuted_key), Some(&table));
}

#[test]
fn export_snapshot_reflects_the_computed_table() {
    let (catalog, source) = setup();
    let mut preview = State::new();

    let countries = SelectionSet::from_ids(["SAU"]);
    let categories = SelectionSet::from_ids(["health-systems"]);
    let request = preview.begin_request(&countries, &categories).unwrap();
    preview.apply_result(request.generation, source.compute(&request));

    let csv = export::render_csv(
        &catalog,
        &ApiBase::from_base("https://cdn.vitalatlas.example"),
        &countries,
        &categories,
        preview.status().table(),
    );

    assert!(csv.contains("https://cdn.vitalatlas.example/flags/sau.svg"));
    assert!(csv.contains("layer,health-systems,Health Systems"));
    assert!(csv.contains("Saudi Arabia,"));
}
