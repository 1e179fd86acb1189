//! Question entity, recognized axes, and the catalog.

use std::collections::HashMap;

use crate::domain::foundation::{AnswerKey, OptionId, QuestionId};

use super::option::AnswerOption;

/// Marker substring in a question's declared type that permits skipping.
const OPTIONAL_MARKER: &str = "optional";

/// The preference axes the normalizer knows how to project.
///
/// Derived from the question id. Questions outside this set are still
/// asked (the catalog drives step order) but their answers are dropped
/// during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionAxis {
    TimeBudget,
    TravelTime,
    Mobility,
    Kids,
    Vibe,
    Setting,
    Budget,
}

impl QuestionAxis {
    /// All recognized axes, in no particular order.
    pub const ALL: [QuestionAxis; 7] = [
        QuestionAxis::TimeBudget,
        QuestionAxis::TravelTime,
        QuestionAxis::Mobility,
        QuestionAxis::Kids,
        QuestionAxis::Vibe,
        QuestionAxis::Setting,
        QuestionAxis::Budget,
    ];

    /// Resolves a catalog question id to its axis, if recognized.
    pub fn from_id(id: &QuestionId) -> Option<Self> {
        match id.as_str() {
            "time_budget" => Some(QuestionAxis::TimeBudget),
            "travel_time_max" => Some(QuestionAxis::TravelTime),
            "mobility" => Some(QuestionAxis::Mobility),
            "kids" => Some(QuestionAxis::Kids),
            "vibe" => Some(QuestionAxis::Vibe),
            "setting" => Some(QuestionAxis::Setting),
            "budget" => Some(QuestionAxis::Budget),
            _ => None,
        }
    }

    /// Returns the catalog question id this axis corresponds to.
    pub fn question_id(&self) -> QuestionId {
        let id = match self {
            QuestionAxis::TimeBudget => "time_budget",
            QuestionAxis::TravelTime => "travel_time_max",
            QuestionAxis::Mobility => "mobility",
            QuestionAxis::Kids => "kids",
            QuestionAxis::Vibe => "vibe",
            QuestionAxis::Setting => "setting",
            QuestionAxis::Budget => "budget",
        };
        QuestionId::new(id)
    }
}

/// A single wizard question with its ordered options.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    text: String,
    declared_type: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question from catalog data.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        declared_type: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            declared_type: declared_type.into(),
            options,
        }
    }

    /// Returns the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Returns the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the declared type string as received from the catalog.
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// Returns the ordered options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Returns the option with the given id, if present.
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id() == id)
    }

    /// Returns true if the question may be skipped without an answer.
    pub fn is_optional(&self) -> bool {
        self.declared_type.contains(OPTIONAL_MARKER)
    }

    /// Returns the recognized axis of this question, if any.
    pub fn axis(&self) -> Option<QuestionAxis> {
        QuestionAxis::from_id(&self.id)
    }
}

/// The ordered question list driving the wizard.
///
/// Catalog order defines step order. Each (question id, option id) pair
/// is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Creates a catalog from an ordered question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Returns the questions in step order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the number of wizard steps.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the given step index.
    pub fn question_at(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    /// Returns the question with the given id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Builds a composite-key lookup over every option in the catalog.
    ///
    /// Stale selections (keys absent from the map) are simply not found,
    /// never an error.
    pub fn option_lookup(&self) -> HashMap<AnswerKey, (&Question, &AnswerOption)> {
        let mut lookup = HashMap::new();
        for question in &self.questions {
            for option in question.options() {
                lookup.insert(
                    AnswerKey::new(question.id().clone(), option.id().clone()),
                    (question, option),
                );
            }
        }
        lookup
    }
}
