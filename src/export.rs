// SPDX-License-Identifier: MPL-2.0
//! CSV export of the current selection and pivot snapshot.
//!
//! The preview panel's Export action writes exactly what the panel shows:
//! one row per selected country, one column per selected data layer, with
//! populated/tracked metric counts. Catalog-resolvable IDs are exported
//! under their display names; unknown IDs fall back to the raw identifier,
//! same as the views.

use crate::assets::ApiBase;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::pivot::PivotTable;
use crate::selection::SelectionSet;
use std::path::Path;

/// Suggested file name for the save dialog, e.g.
/// `vitalatlas-export-2026-08-07.csv`.
#[must_use]
pub fn default_file_name() -> String {
    let today = chrono::Local::now().format("%Y-%m-%d");
    format!("vitalatlas-export-{}.csv", today)
}

/// Renders the export document.
///
/// Without a computed table (selection still loading or empty), only the
/// selection header block is produced so the export is never an error.
#[must_use]
pub fn render_csv(
    catalog: &Catalog,
    api_base: &ApiBase,
    countries: &SelectionSet,
    categories: &SelectionSet,
    table: Option<&PivotTable>,
) -> String {
    let mut out = String::new();

    out.push_str("section,id,name,asset\n");
    for iso in countries.iter() {
        // Flag URLs resolve against the platform CDN; unknown IDs have no
        // asset and export an empty column.
        let flag_url = catalog
            .country(iso)
            .map(|c| api_base.asset_url(&c.flag_path))
            .unwrap_or_default();
        out.push_str(&format!(
            "country,{},{},{}\n",
            escape(iso),
            escape(catalog.country_label(iso)),
            escape(&flag_url)
        ));
    }
    for id in categories.iter() {
        out.push_str(&format!(
            "layer,{},{},\n",
            escape(id),
            escape(catalog.category_label(id))
        ));
    }

    if let Some(table) = table {
        out.push('\n');
        out.push_str("country");
        for column in &table.columns {
            out.push(',');
            out.push_str(&escape(catalog.category_label(column)));
        }
        out.push('\n');

        for row in &table.rows {
            out.push_str(&escape(catalog.country_label(&row.country_id)));
            for cell in &row.cells {
                out.push_str(&format!(",{}/{}", cell.populated, cell.tracked));
            }
            out.push('\n');
        }
    }

    out
}

/// Writes the rendered document, creating parent directories as needed.
pub fn write_csv(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::Export(format!("creating {}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, content)
        .map_err(|e| Error::Export(format!("writing {}: {}", path.display(), e)))
}

/// Quotes a CSV field only when it needs it.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
