// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`wizard`] - Two-phase country/data-layer selection wizard
//! - [`guide`] - Slide-based framework guide with auto-advance and insights
//! - [`preview`] - Live pivot-table preview panel with CSV export
//! - [`settings`] - Application preferences and configuration
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (swipe gestures)
//! - [`widgets`] - Custom Iced widgets (accent ring motif)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod guide;
pub mod navbar;
pub mod notifications;
pub mod preview;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
pub mod wizard;
