// SPDX-License-Identifier: MPL-2.0
//! `vital_atlas` is the desktop explorer for the VitalAtlas health-data
//! analytics platform, built with the Iced GUI framework.
//!
//! It provides a two-phase selection wizard (countries, then data layers),
//! a slide-based framework guide with auto-advance and insight overlays,
//! and a live pivot-table preview with CSV export.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod error;
pub mod export;
pub mod flow;
pub mod pivot;
pub mod selection;
pub mod ui;

pub use app::config;
