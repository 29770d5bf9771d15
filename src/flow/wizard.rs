// SPDX-License-Identifier: MPL-2.0
//! Phase machine for the two-phase selection wizard.
//!
//! The wizard is a task flow, not a tour: moving backward is always allowed,
//! but moving forward past the country phase requires at least one selected
//! country. This is the single business-rule gate in the navigation core and
//! is deliberately absent from the guide deck (see [`crate::flow::deck`]).

/// Phases of the selection wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardPhase {
    Countries,
    DataLayers,
}

impl WizardPhase {
    /// All phases in display order.
    pub const ALL: [WizardPhase; 2] = [WizardPhase::Countries, WizardPhase::DataLayers];

    /// Position of this phase in the flow.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            WizardPhase::Countries => 0,
            WizardPhase::DataLayers => 1,
        }
    }

    /// Header label shown in the phase breadcrumb.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WizardPhase::Countries => "Countries",
            WizardPhase::DataLayers => "Data Layers",
        }
    }
}

/// Outcome of a requested phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStep {
    /// The cursor moved to a new phase.
    Moved(WizardPhase),
    /// Advancing past the last phase: the wizard is finished.
    Completed,
    /// The request was disallowed or out of range and was ignored.
    Ignored,
}

/// Bounds-checked cursor over the wizard phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseMachine {
    phase: WizardPhase,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseMachine {
    /// Starts at the first phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Countries,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn current(&self) -> WizardPhase {
        self.phase
    }

    /// Whether forward navigation is currently permitted.
    ///
    /// Leaving the country phase requires a non-empty country selection;
    /// there is no gate on finishing from the data-layer phase.
    #[must_use]
    pub fn can_advance(&self, countries_selected: usize) -> bool {
        match self.phase {
            WizardPhase::Countries => countries_selected > 0,
            WizardPhase::DataLayers => true,
        }
    }

    /// Advances one phase, or completes the wizard from the last phase.
    ///
    /// A blocked advance (empty country selection) is ignored.
    pub fn advance(&mut self, countries_selected: usize) -> PhaseStep {
        if !self.can_advance(countries_selected) {
            return PhaseStep::Ignored;
        }
        match self.phase {
            WizardPhase::Countries => {
                self.phase = WizardPhase::DataLayers;
                PhaseStep::Moved(self.phase)
            }
            WizardPhase::DataLayers => PhaseStep::Completed,
        }
    }

    /// Retreats one phase; a no-op at the first phase.
    pub fn back(&mut self) -> PhaseStep {
        match self.phase {
            WizardPhase::Countries => PhaseStep::Ignored,
            WizardPhase::DataLayers => {
                self.phase = WizardPhase::Countries;
                PhaseStep::Moved(self.phase)
            }
        }
    }

    /// Jumps to a phase via the breadcrumb header.
    ///
    /// Backward jumps are unconditional; forward jumps are subject to the
    /// same gate as [`advance`](Self::advance). Clicking the current phase
    /// is ignored.
    pub fn phase_click(&mut self, target: WizardPhase, countries_selected: usize) -> PhaseStep {
        if target == self.phase {
            return PhaseStep::Ignored;
        }
        if target.index() < self.phase.index() {
            self.phase = target;
            return PhaseStep::Moved(target);
        }
        if self.can_advance(countries_selected) {
            self.phase = target;
            PhaseStep::Moved(target)
        } else {
            PhaseStep::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_starts_at_countries() {
        let machine = PhaseMachine::new();
        assert_eq!(machine.current(), WizardPhase::Countries);
    }

    #[test]
    fn advance_is_blocked_without_countries() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.advance(0), PhaseStep::Ignored);
        assert_eq!(machine.current(), WizardPhase::Countries);
    }

    #[test]
    fn advance_moves_once_a_country_is_selected() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.advance(1), PhaseStep::Moved(WizardPhase::DataLayers));
        assert_eq!(machine.current(), WizardPhase::DataLayers);
    }

    #[test]
    fn advance_from_last_phase_completes_without_moving() {
        let mut machine = PhaseMachine::new();
        machine.advance(1);

        assert_eq!(machine.advance(1), PhaseStep::Completed);
        assert_eq!(machine.current(), WizardPhase::DataLayers);
    }

    #[test]
    fn completion_is_not_gated_on_selection_count() {
        // The gate only guards leaving the country phase; finishing with an
        // emptied selection afterwards is the caller's concern.
        let mut machine = PhaseMachine::new();
        machine.advance(3);
        assert_eq!(machine.advance(0), PhaseStep::Completed);
    }

    #[test]
    fn back_is_noop_at_first_phase() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.back(), PhaseStep::Ignored);
        assert_eq!(machine.current(), WizardPhase::Countries);
    }

    #[test]
    fn back_returns_to_countries() {
        let mut machine = PhaseMachine::new();
        machine.advance(1);

        assert_eq!(machine.back(), PhaseStep::Moved(WizardPhase::Countries));
        assert_eq!(machine.current(), WizardPhase::Countries);
    }

    #[test]
    fn forward_phase_click_with_empty_selection_is_ignored() {
        let mut machine = PhaseMachine::new();
        assert_eq!(
            machine.phase_click(WizardPhase::DataLayers, 0),
            PhaseStep::Ignored
        );
        assert_eq!(machine.current(), WizardPhase::Countries);
    }

    #[test]
    fn forward_phase_click_with_selection_transitions() {
        let mut machine = PhaseMachine::new();
        assert_eq!(
            machine.phase_click(WizardPhase::DataLayers, 2),
            PhaseStep::Moved(WizardPhase::DataLayers)
        );
    }

    #[test]
    fn backward_phase_click_is_always_allowed() {
        let mut machine = PhaseMachine::new();
        machine.advance(1);

        // Even with an (impossible in practice) empty count, backward is free.
        assert_eq!(
            machine.phase_click(WizardPhase::Countries, 0),
            PhaseStep::Moved(WizardPhase::Countries)
        );
    }

    #[test]
    fn clicking_current_phase_is_ignored() {
        let mut machine = PhaseMachine::new();
        assert_eq!(
            machine.phase_click(WizardPhase::Countries, 5),
            PhaseStep::Ignored
        );
    }
}
