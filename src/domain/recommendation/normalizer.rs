//! Answer normalization - selections plus catalog in, criteria out.
//!
//! Pure and deterministic: identical selections and catalog always yield
//! structurally identical criteria. Called once per completed wizard pass.

use crate::domain::catalog::{Catalog, OptionDetails, QuestionAxis};
use crate::domain::foundation::AnswerKey;
use crate::domain::wizard::AnswerSheet;

use super::criteria::{Criteria, Vibe};

/// Upper time bound injected when an option omits `max_minutes`.
const FULL_DAY_MINUTES: u32 = 1440;

/// Travel bound injected when an option omits `max_travel_minutes`.
const UNBOUNDED_TRAVEL_MINUTES: u32 = 999;

/// Budget ceiling injected when an option omits `max_eur_pp`.
const UNBOUNDED_BUDGET_EUR: u32 = 999;

/// Age group reported when kids come along but no group was given.
const MIXED_AGE_GROUP: &str = "mixed";

/// Setting reported when an option omits one.
const ANY_SETTING: &str = "any";

/// Projects the recorded answers into normalized query criteria.
///
/// Only the recognized axes contribute; answers for other question ids are
/// dropped (permissive by design, so the catalog can grow without breaking
/// deployed clients). Skipped questions and selections whose (question,
/// option) pair is missing from the catalog contribute nothing.
pub fn normalize(answers: &AnswerSheet, catalog: &Catalog) -> Criteria {
    let lookup = catalog.option_lookup();
    let mut criteria = Criteria::default();

    for axis in QuestionAxis::ALL {
        let question_id = axis.question_id();
        let Some(option_id) = answers.chosen_option(&question_id) else {
            continue;
        };

        let key = AnswerKey::new(question_id, option_id.clone());
        let Some((_, option)) = lookup.get(&key) else {
            continue;
        };

        match option.details() {
            OptionDetails::TimeBudget {
                min_minutes,
                max_minutes,
            } => {
                criteria.time_min_minutes = Some(min_minutes.unwrap_or(0));
                criteria.time_max_minutes = Some(max_minutes.unwrap_or(FULL_DAY_MINUTES));
            }
            OptionDetails::TravelTime { max_travel_minutes } => {
                criteria.max_travel_minutes =
                    Some(max_travel_minutes.unwrap_or(UNBOUNDED_TRAVEL_MINUTES));
            }
            OptionDetails::Mobility { modes } => {
                criteria.modes = Some(modes.clone());
            }
            OptionDetails::Kids {
                kids,
                kid_age_group,
            } => {
                let kids_selected = *kids != Some(false);
                criteria.kids_selected = Some(kids_selected);
                criteria.kid_age_group = Some(if kids_selected {
                    Some(
                        kid_age_group
                            .clone()
                            .unwrap_or_else(|| MIXED_AGE_GROUP.to_string()),
                    )
                } else {
                    None
                });
            }
            OptionDetails::Vibe => {
                criteria.vibe = Vibe::from_option_id(option.id());
            }
            OptionDetails::Setting { setting } => {
                criteria.setting =
                    Some(setting.clone().unwrap_or_else(|| ANY_SETTING.to_string()));
            }
            OptionDetails::Budget { max_eur_pp } => {
                criteria.max_eur_pp = Some(max_eur_pp.unwrap_or(UNBOUNDED_BUDGET_EUR));
            }
            OptionDetails::Other => {}
        }
    }

    criteria
}
