//! Wizard state machine.
//!
//! Defines the lifecycle states of one wizard pass and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a wizard session.
///
/// A session moves from catalog loading through the question steps into a
/// single results fetch:
/// - `Loading`: fetching the question catalog
/// - `Asking(idx)`: presenting question `idx`
/// - `FetchingResults`: normalizing answers and fetching recommendations
/// - `ShowingResults`: results rendered, restart and shuffle available
/// - `Failed`: a fetch failed; recoverable only by a user-initiated restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    /// Catalog fetch outstanding.
    #[default]
    Loading,

    /// Presenting the question at the given step index.
    Asking(usize),

    /// Recommendation fetch outstanding.
    FetchingResults,

    /// Result set rendered.
    ShowingResults,

    /// A catalog or recommendation fetch failed.
    Failed,
}

impl WizardState {
    /// Returns true if user navigation events are meaningful in this state.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Asking(_) | Self::ShowingResults | Self::Failed)
    }

    /// Returns true while a fetch is outstanding. Conflicting input is
    /// ignored in transient states.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Loading | Self::FetchingResults)
    }

    /// Returns the step index when asking a question.
    pub fn step(&self) -> Option<usize> {
        match self {
            Self::Asking(idx) => Some(*idx),
            _ => None,
        }
    }
}

impl StateMachine for WizardState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardState::*;
        match (self, target) {
            // Catalog resolves into the first question, or fails
            (Loading, Asking(0)) | (Loading, Failed) => true,
            // Select/skip advance, back retreats
            (Asking(i), Asking(j)) => *j == i + 1 || *i == j + 1,
            // Advancing past the last question starts the results fetch
            (Asking(_), FetchingResults) => true,
            (FetchingResults, ShowingResults) | (FetchingResults, Failed) => true,
            // Restart, from results or from a recoverable failure
            (ShowingResults, Asking(0)) | (Failed, Asking(0)) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardState::*;
        match self {
            Loading => vec![Asking(0), Failed],
            Asking(idx) => {
                let mut targets = vec![Asking(idx + 1), FetchingResults];
                if *idx > 0 {
                    targets.push(Asking(idx - 1));
                }
                targets
            }
            FetchingResults => vec![ShowingResults, Failed],
            ShowingResults => vec![Asking(0)],
            Failed => vec![Asking(0)],
        }
    }
}
