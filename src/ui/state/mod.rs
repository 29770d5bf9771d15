// SPDX-License-Identifier: MPL-2.0
//! Shared interaction state types for UI components.

pub mod swipe;

pub use swipe::SwipeState;
