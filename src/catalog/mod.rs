// SPDX-License-Identifier: MPL-2.0
//! Read-only reference catalogs embedded in the binary.
//!
//! The wizard, guide deck, and pivot preview all render from the same
//! `Catalog` instance parsed once at startup: countries, region groupings,
//! data categories, the slide deck, and the insight table. Nothing here is
//! ever mutated after load; selection state lives elsewhere and refers to
//! these entries by their string identifiers.

pub mod types;

pub use types::{
    CategoryInfo, CountrySummary, Insight, RegionDefinition, SlideDef, SlideDuration, SlideKind,
};

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct DataAsset;

#[derive(Deserialize)]
struct CountriesFile {
    #[serde(default)]
    country: Vec<CountrySummary>,
}

#[derive(Deserialize)]
struct RegionsFile {
    #[serde(default)]
    region: Vec<RegionDefinition>,
}

#[derive(Deserialize)]
struct CategoriesFile {
    #[serde(default)]
    category: Vec<CategoryInfo>,
}

#[derive(Deserialize)]
struct DeckFile {
    #[serde(default)]
    slide: Vec<SlideDef>,
}

#[derive(Deserialize)]
struct InsightsFile {
    #[serde(default)]
    insight: Vec<Insight>,
}

/// All reference data the UI renders from.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<CountrySummary>,
    regions: Vec<RegionDefinition>,
    categories: Vec<CategoryInfo>,
    deck: Vec<SlideDef>,
    insights: HashMap<String, Insight>,
}

impl Catalog {
    /// Loads and validates the embedded catalogs.
    ///
    /// Fails only on malformed or inconsistent embedded data, which the test
    /// suite guards against; end users never see these errors.
    pub fn load() -> Result<Self> {
        let countries: CountriesFile = read_asset("countries.toml")?;
        let regions: RegionsFile = read_asset("regions.toml")?;
        let categories: CategoriesFile = read_asset("categories.toml")?;
        let deck: DeckFile = read_asset("deck.toml")?;
        let insights: InsightsFile = read_asset("insights.toml")?;

        Self::from_parts(
            countries.country,
            regions.region,
            categories.category,
            deck.slide,
            insights.insight,
        )
    }

    /// Builds a catalog from already-parsed parts, validating cross-references.
    pub fn from_parts(
        countries: Vec<CountrySummary>,
        regions: Vec<RegionDefinition>,
        categories: Vec<CategoryInfo>,
        deck: Vec<SlideDef>,
        insights: Vec<Insight>,
    ) -> Result<Self> {
        ensure_unique("country", countries.iter().map(|c| c.iso_code.as_str()))?;
        ensure_unique("category", categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("slide", deck.iter().map(|s| s.id.as_str()))?;
        ensure_unique("insight", insights.iter().map(|i| i.id.as_str()))?;

        if deck.is_empty() {
            return Err(Error::Data("slide deck is empty".into()));
        }

        let insights: HashMap<String, Insight> = insights
            .into_iter()
            .map(|insight| (insight.id.clone(), insight))
            .collect();

        // Dangling references are tolerated at runtime (opening an unknown
        // insight is a no-op), but they are authoring mistakes worth a log.
        for slide in &deck {
            for insight_id in &slide.insight_ids {
                if !insights.contains_key(insight_id) {
                    log::warn!(
                        "slide '{}' references unknown insight '{}'",
                        slide.id,
                        insight_id
                    );
                }
            }
        }
        for region in &regions {
            for country_id in &region.country_ids {
                if !countries.iter().any(|c| &c.iso_code == country_id) {
                    log::warn!(
                        "region '{}' references unknown country '{}'",
                        region.id,
                        country_id
                    );
                }
            }
        }

        Ok(Self {
            countries,
            regions,
            categories,
            deck,
            insights,
        })
    }

    /// Countries in catalog order.
    pub fn countries(&self) -> &[CountrySummary] {
        &self.countries
    }

    /// Region quick-select groups in catalog order.
    pub fn regions(&self) -> &[RegionDefinition] {
        &self.regions
    }

    /// Data categories in catalog order.
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// The guide deck slides in presentation order.
    pub fn deck(&self) -> &[SlideDef] {
        &self.deck
    }

    /// Looks up a country by ISO code.
    pub fn country(&self, iso_code: &str) -> Option<&CountrySummary> {
        self.countries.iter().find(|c| c.iso_code == iso_code)
    }

    /// Looks up a category by ID.
    pub fn category(&self, id: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up an insight by ID.
    pub fn insight(&self, id: &str) -> Option<&Insight> {
        self.insights.get(id)
    }

    /// Display name for a country ID, falling back to the raw ID for
    /// identifiers the catalog cannot resolve.
    pub fn country_label<'a>(&'a self, iso_code: &'a str) -> &'a str {
        self.country(iso_code).map_or(iso_code, |c| c.name.as_str())
    }

    /// Display name for a category ID, falling back to the raw ID.
    pub fn category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map_or(id, |c| c.name.as_str())
    }
}

fn read_asset<T: serde::de::DeserializeOwned>(name: &str) -> Result<T> {
    let file = DataAsset::get(name)
        .ok_or_else(|| Error::Data(format!("embedded asset '{}' is missing", name)))?;
    let content = std::str::from_utf8(file.data.as_ref())
        .map_err(|e| Error::Data(format!("embedded asset '{}' is not UTF-8: {}", name, e)))?;
    toml::from_str(content).map_err(|e| Error::Data(format!("parsing '{}': {}", name, e)))
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::Data(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert!(!catalog.countries().is_empty());
        assert!(!catalog.regions().is_empty());
        assert!(!catalog.categories().is_empty());
        assert!(!catalog.deck().is_empty());
    }

    #[test]
    fn embedded_regions_reference_known_countries() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        for region in catalog.regions() {
            for iso in &region.country_ids {
                assert!(
                    catalog.country(iso).is_some(),
                    "region '{}' references unknown country '{}'",
                    region.id,
                    iso
                );
            }
        }
    }

    #[test]
    fn embedded_slides_reference_known_insights() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        for slide in catalog.deck() {
            for insight_id in &slide.insight_ids {
                assert!(
                    catalog.insight(insight_id).is_some(),
                    "slide '{}' references unknown insight '{}'",
                    slide.id,
                    insight_id
                );
            }
        }
    }

    #[test]
    fn embedded_insight_blocks_resolve_to_categories() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        for insight in catalog.deck().iter().flat_map(|s| &s.insight_ids) {
            if let Some(block) = catalog.insight(insight).and_then(|i| i.block_id.as_ref()) {
                assert!(
                    catalog.category(block).is_some(),
                    "insight '{}' deep-links to unknown block '{}'",
                    insight,
                    block
                );
            }
        }
    }

    #[test]
    fn lookup_by_known_ids_works() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert_eq!(catalog.country_label("SAU"), "Saudi Arabia");
        assert!(catalog.category("health-outcomes").is_some());
    }

    #[test]
    fn unknown_ids_fall_back_to_raw_identifier() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert_eq!(catalog.country_label("XXX"), "XXX");
        assert_eq!(catalog.category_label("made-up"), "made-up");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let country = |iso: &str| CountrySummary {
            iso_code: iso.into(),
            name: "X".into(),
            flag: "🏳️".into(),
            flag_path: "flags/x.svg".into(),
        };
        let slide = SlideDef {
            id: "one".into(),
            title: "One".into(),
            kind: SlideKind::Title,
            accent: "#000000".into(),
            duration_secs: None,
            body: vec![],
            insight_ids: vec![],
        };

        let result = Catalog::from_parts(
            vec![country("AAA"), country("AAA")],
            vec![],
            vec![],
            vec![slide],
            vec![],
        );
        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = Catalog::from_parts(vec![], vec![], vec![], vec![], vec![]);
        assert!(matches!(result, Err(Error::Data(_))));
    }
}
