//! Property tests for the normalization pipeline and progress math.

use proptest::prelude::*;

use adventure_sherpa::domain::catalog::{AnswerOption, Catalog, OptionDetails, Question};
use adventure_sherpa::domain::foundation::{OptionId, QuestionId};
use adventure_sherpa::domain::recommendation::normalize;
use adventure_sherpa::domain::wizard::{AnswerSheet, Selection, WizardProgress};

fn time_catalog(min_minutes: Option<u32>, max_minutes: Option<u32>) -> Catalog {
    Catalog::new(vec![Question::new(
        QuestionId::new("time_budget"),
        "How much time?",
        "single",
        vec![AnswerOption::new(
            OptionId::new("t1"),
            "Some time",
            None,
            OptionDetails::TimeBudget {
                min_minutes,
                max_minutes,
            },
        )],
    )])
}

fn vibe_catalog(option_id: &str) -> Catalog {
    Catalog::new(vec![Question::new(
        QuestionId::new("vibe"),
        "What pace?",
        "single",
        vec![AnswerOption::new(
            OptionId::new(option_id),
            "A pace",
            None,
            OptionDetails::Vibe,
        )],
    )])
}

fn sheet_with(question_id: &str, option_id: &str) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    sheet.record(
        QuestionId::new(question_id),
        Selection::Chosen(OptionId::new(option_id)),
    );
    sheet
}

proptest! {
    #[test]
    fn normalization_is_idempotent(
        min in proptest::option::of(0u32..1440),
        max in proptest::option::of(0u32..1440),
        answered in any::<bool>(),
    ) {
        let catalog = time_catalog(min, max);
        let sheet = if answered {
            sheet_with("time_budget", "t1")
        } else {
            AnswerSheet::new()
        };

        prop_assert_eq!(normalize(&sheet, &catalog), normalize(&sheet, &catalog));
    }

    #[test]
    fn time_bounds_fall_back_to_zero_and_full_day(
        min in proptest::option::of(1u32..600),
        max in proptest::option::of(600u32..1440),
    ) {
        let catalog = time_catalog(min, max);
        let criteria = normalize(&sheet_with("time_budget", "t1"), &catalog);

        prop_assert_eq!(criteria.time_min_minutes, Some(min.unwrap_or(0)));
        prop_assert_eq!(criteria.time_max_minutes, Some(max.unwrap_or(1440)));
    }

    #[test]
    fn vibe_ids_outside_the_table_never_constrain(id in "[a-z_]{1,16}") {
        prop_assume!(!matches!(id.as_str(), "v_calm" | "v_easy" | "v_sporty" | "v_action"));

        let catalog = vibe_catalog(&id);
        let criteria = normalize(&sheet_with("vibe", &id), &catalog);

        prop_assert_eq!(criteria.vibe, None);
    }

    #[test]
    fn last_recorded_selection_wins(options in proptest::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut sheet = AnswerSheet::new();
        for option in &options {
            sheet.record(
                QuestionId::new("vibe"),
                Selection::Chosen(OptionId::new(option.clone())),
            );
        }

        prop_assert_eq!(sheet.len(), 1);
        let last = options.last().unwrap();
        prop_assert_eq!(
            sheet.chosen_option(&QuestionId::new("vibe")),
            Some(&OptionId::new(last.clone()))
        );
    }

    #[test]
    fn progress_fraction_is_exactly_steps_over_total(total in 1usize..50, idx in 0usize..50) {
        prop_assume!(idx < total);

        let progress = WizardProgress::new(idx, total);
        prop_assert_eq!(progress.fraction(), idx as f64 / total as f64);
        prop_assert_eq!(progress.completed_steps(), idx);
    }
}
