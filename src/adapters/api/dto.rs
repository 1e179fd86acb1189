//! Wire DTOs for the catalog and recommendation endpoints.
//!
//! The wire format is sparse: option records carry whichever fields their
//! question needs. Conversion into domain types resolves the question's
//! axis first and builds the matching detail variant, so the sparseness
//! stays at this boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AnswerOption, Catalog, OptionDetails, Question, QuestionAxis};
use crate::domain::foundation::{OptionId, QuestionId};
use crate::domain::recommendation::{Criteria, RecommendationItem};

/// Body of `GET /api/questions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub wizard: Vec<QuestionDto>,
}

impl CatalogResponse {
    /// Converts the payload into a domain catalog, preserving order.
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.wizard.into_iter().map(QuestionDto::into_domain).collect())
    }
}

/// One question as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDto {
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(default, rename = "type")]
    pub question_type: String,

    #[serde(default)]
    pub options: Vec<OptionDto>,
}

impl QuestionDto {
    /// Builds the domain question, typing each option by the question's axis.
    pub fn into_domain(self) -> Question {
        let id = QuestionId::new(self.id);
        let axis = QuestionAxis::from_id(&id);
        let options = self
            .options
            .into_iter()
            .map(|o| o.into_domain(axis))
            .collect();
        Question::new(id, self.text, self.question_type, options)
    }
}

/// One option as it appears on the wire. Fields are sparse; which ones are
/// populated depends on the owning question.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionDto {
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub min_minutes: Option<u32>,

    #[serde(default)]
    pub max_minutes: Option<u32>,

    #[serde(default)]
    pub max_travel_minutes: Option<u32>,

    #[serde(default)]
    pub modes: Option<Vec<String>>,

    #[serde(default)]
    pub kids: Option<bool>,

    #[serde(default)]
    pub kid_age_group: Option<String>,

    #[serde(default)]
    pub setting: Option<String>,

    #[serde(default)]
    pub max_eur_pp: Option<u32>,
}

impl OptionDto {
    /// Builds the domain option with the detail variant the axis calls for.
    pub fn into_domain(self, axis: Option<QuestionAxis>) -> AnswerOption {
        let details = match axis {
            Some(QuestionAxis::TimeBudget) => OptionDetails::TimeBudget {
                min_minutes: self.min_minutes,
                max_minutes: self.max_minutes,
            },
            Some(QuestionAxis::TravelTime) => OptionDetails::TravelTime {
                max_travel_minutes: self.max_travel_minutes,
            },
            Some(QuestionAxis::Mobility) => OptionDetails::Mobility {
                modes: self
                    .modes
                    .map(|m| m.into_iter().collect::<BTreeSet<_>>())
                    .unwrap_or_default(),
            },
            Some(QuestionAxis::Kids) => OptionDetails::Kids {
                kids: self.kids,
                kid_age_group: self.kid_age_group,
            },
            Some(QuestionAxis::Vibe) => OptionDetails::Vibe,
            Some(QuestionAxis::Setting) => OptionDetails::Setting {
                setting: self.setting,
            },
            Some(QuestionAxis::Budget) => OptionDetails::Budget {
                max_eur_pp: self.max_eur_pp,
            },
            None => OptionDetails::Other,
        };
        AnswerOption::new(OptionId::new(self.id), self.label, self.sub, details)
    }
}

/// Body of `POST /api/recommend`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest<'a> {
    pub answers: &'a Criteria,
    pub limit: u32,
}

/// Response of `POST /api/recommend`. Origin and count are informational
/// and tolerated with defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub count: u32,

    #[serde(default)]
    pub items: Vec<RecommendationItem>,
}
