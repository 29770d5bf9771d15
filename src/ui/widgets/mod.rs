// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod accent_rings;

pub use accent_rings::AccentRings;
