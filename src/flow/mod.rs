// SPDX-License-Identifier: MPL-2.0
//! Navigation state machines shared by the wizard and the guide deck.
//!
//! These types hold no widget state and perform no I/O; the UI components
//! own an instance each and translate raw input events into the transition
//! methods defined here. Every transition is total: out-of-range or
//! disallowed requests are ignored rather than surfaced as errors.

pub mod deck;
pub mod insight;
pub mod wizard;

pub use deck::{AutoAdvance, DeckMachine, Step};
pub use insight::InsightPanel;
pub use wizard::{PhaseMachine, PhaseStep, WizardPhase};
