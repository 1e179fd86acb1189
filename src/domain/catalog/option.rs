//! Answer option entity and its axis-specific details.

use std::collections::BTreeSet;

use crate::domain::foundation::OptionId;

/// One selectable answer within a question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
    sub: Option<String>,
    details: OptionDetails,
}

impl AnswerOption {
    /// Creates an option with its axis-specific details.
    pub fn new(
        id: OptionId,
        label: impl Into<String>,
        sub: Option<String>,
        details: OptionDetails,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            sub,
            details,
        }
    }

    /// Returns the option id.
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the secondary label, if any.
    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns the axis-specific details.
    pub fn details(&self) -> &OptionDetails {
        &self.details
    }
}

/// Axis-specific payload of an answer option.
///
/// The variant is selected by the question's axis when the catalog is
/// converted from the wire format, so downstream code matches on the
/// variant instead of probing for field presence.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionDetails {
    /// How long the outing may take.
    TimeBudget {
        min_minutes: Option<u32>,
        max_minutes: Option<u32>,
    },

    /// How far the user is willing to travel.
    TravelTime { max_travel_minutes: Option<u32> },

    /// Which transport modes are available.
    Mobility { modes: BTreeSet<String> },

    /// Whether children come along, and their age group.
    Kids {
        kids: Option<bool>,
        kid_age_group: Option<String>,
    },

    /// Desired activity level. The option id itself carries the meaning.
    Vibe,

    /// Indoor / outdoor preference.
    Setting { setting: Option<String> },

    /// Spending ceiling per person.
    Budget { max_eur_pp: Option<u32> },

    /// Option of a question outside the recognized axes. Carried through
    /// the wizard but never projected into criteria.
    Other,
}
