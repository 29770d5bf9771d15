// SPDX-License-Identifier: MPL-2.0
//! Data types for the read-only reference catalogs.
//!
//! Everything in this module is deserialized once at startup from the
//! embedded TOML documents and never mutated afterwards.

use crate::app::config::{
    DEFAULT_SLIDE_DURATION_SECS, MAX_SLIDE_DURATION_SECS, MIN_SLIDE_DURATION_SECS,
};
use serde::Deserialize;

/// A country available for selection in the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountrySummary {
    /// ISO 3166-1 alpha-3 code, used as the opaque selection identifier.
    pub iso_code: String,
    /// Human-readable display name.
    pub name: String,
    /// Display glyph (flag emoji) shown next to the name.
    pub flag: String,
    /// Relative asset path of the flag image, resolved against the API base.
    pub flag_path: String,
}

/// A static grouping of countries with a display label, used by the
/// wizard's region quick-select row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionDefinition {
    pub id: String,
    pub label: String,
    pub glyph: String,
    pub country_ids: Vec<String>,
}

/// A selectable data category (a "data layer" in wizard terms).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    /// One-line description shown under the category name.
    pub summary: String,
    /// Number of metrics the platform tracks under this category.
    pub metric_count: u32,
}

/// Visual treatment of a guide slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Title,
    Concept,
    Metric,
    Conclusion,
}

/// Display duration of a single guide slide.
///
/// The newtype enforces validity at the type level: the value is always
/// within the supported range, so the auto-advance countdown can never be
/// armed with a nonsensical duration from a hand-edited deck file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDuration(u32);

impl SlideDuration {
    /// Creates a new slide duration, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_SLIDE_DURATION_SECS, MAX_SLIDE_DURATION_SECS))
    }

    /// Returns the duration in whole seconds.
    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// Returns the duration as a `std::time::Duration`.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_DURATION_SECS)
    }
}

/// One slide of the framework guide deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideDef {
    pub id: String,
    pub title: String,
    pub kind: SlideKind,
    /// Accent color as a `#rrggbb` hex string.
    pub accent: String,
    /// Per-slide auto-advance duration in seconds; the deck falls back to
    /// the configured default when absent.
    #[serde(default)]
    pub duration_secs: Option<u32>,
    /// Body copy, one paragraph per entry.
    #[serde(default)]
    pub body: Vec<String>,
    /// Insight overlays reachable from this slide.
    #[serde(default)]
    pub insight_ids: Vec<String>,
}

impl SlideDef {
    /// Resolved display duration, preferring the slide's own value.
    #[must_use]
    pub fn duration(&self, fallback_secs: u32) -> SlideDuration {
        SlideDuration::new(self.duration_secs.unwrap_or(fallback_secs))
    }

    /// Parses the accent color into RGB components in `0.0..=1.0`.
    ///
    /// Malformed values fall back to a neutral gray rather than failing;
    /// the accent is purely decorative.
    #[must_use]
    pub fn accent_rgb(&self) -> (f32, f32, f32) {
        parse_hex_rgb(&self.accent).unwrap_or((0.5, 0.5, 0.5))
    }
}

/// A pre-authored detail block shown in an overlay on demand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Insight {
    pub id: String,
    pub label: String,
    /// The headline statistic or claim.
    pub data_point: String,
    /// Source citation shown in the overlay footer.
    pub source: String,
    /// Optional pivot block this insight deep-links to.
    #[serde(default)]
    pub block_id: Option<String>,
}

fn parse_hex_rgb(value: &str) -> Option<(f32, f32, f32)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_duration_clamps_to_valid_range() {
        assert_eq!(SlideDuration::new(0).secs(), MIN_SLIDE_DURATION_SECS);
        assert_eq!(SlideDuration::new(10_000).secs(), MAX_SLIDE_DURATION_SECS);
        assert_eq!(SlideDuration::new(10).secs(), 10);
    }

    #[test]
    fn slide_duration_default_matches_config() {
        assert_eq!(SlideDuration::default().secs(), DEFAULT_SLIDE_DURATION_SECS);
    }

    #[test]
    fn slide_duration_as_duration_converts() {
        assert_eq!(
            SlideDuration::new(5).as_duration(),
            std::time::Duration::from_secs(5)
        );
    }

    #[test]
    fn slide_prefers_its_own_duration() {
        let slide = SlideDef {
            id: "s".into(),
            title: "t".into(),
            kind: SlideKind::Concept,
            accent: "#112233".into(),
            duration_secs: Some(4),
            body: vec![],
            insight_ids: vec![],
        };
        assert_eq!(slide.duration(9).secs(), 4);
    }

    #[test]
    fn slide_without_duration_uses_fallback() {
        let slide = SlideDef {
            id: "s".into(),
            title: "t".into(),
            kind: SlideKind::Concept,
            accent: "#112233".into(),
            duration_secs: None,
            body: vec![],
            insight_ids: vec![],
        };
        assert_eq!(slide.duration(9).secs(), 9);
    }

    #[test]
    fn accent_parses_hex_colors() {
        let slide = SlideDef {
            id: "s".into(),
            title: "t".into(),
            kind: SlideKind::Title,
            accent: "#ff8000".into(),
            duration_secs: None,
            body: vec![],
            insight_ids: vec![],
        };
        let (r, g, b) = slide.accent_rgb();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!((g - 0.502).abs() < 0.01);
        assert!(b.abs() < f32::EPSILON);
    }

    #[test]
    fn malformed_accent_falls_back_to_gray() {
        let slide = SlideDef {
            id: "s".into(),
            title: "t".into(),
            kind: SlideKind::Title,
            accent: "teal".into(),
            duration_secs: None,
            body: vec![],
            insight_ids: vec![],
        };
        assert_eq!(slide.accent_rgb(), (0.5, 0.5, 0.5));
    }
}
