//! Wizard session aggregate.
//!
//! One session owns everything a single wizard pass accumulates: the
//! loaded catalog, the answer sheet, the current state, and the result
//! set. Restart resets all of it atomically and bumps the session epoch.
//!
//! # Aggregate Boundary
//!
//! - Answers and results are mutated only through the session
//! - All navigation legality checks live here; illegal moves are silent
//!   no-ops reported as [`StepOutcome::Ignored`], never errors
//! - The session is pure state: fetching is the application layer's job

use rand::Rng;

use crate::domain::catalog::{Catalog, Question};
use crate::domain::foundation::{OptionId, SessionEpoch, SessionId, StateMachine, Timestamp};
use crate::domain::recommendation::{normalize, Criteria, RecommendationItem, ResultSet};

use super::answers::{AnswerSheet, Selection};
use super::errors::WizardError;
use super::progress::WizardProgress;
use super::state::WizardState;

/// What a navigation event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to another question.
    Advanced,

    /// Passed the final question; the results fetch should start now.
    ReadyForResults,

    /// Reset to the first question with a cleared sheet.
    Restarted,

    /// The event was not legal in the current state. Nothing changed.
    Ignored,
}

/// Aggregate for one wizard pass.
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: SessionId,
    state: WizardState,
    epoch: SessionEpoch,
    catalog: Option<Catalog>,
    answers: AnswerSheet,
    results: Option<ResultSet>,
    last_error: Option<WizardError>,
    started_at: Timestamp,
}

impl WizardSession {
    /// Creates a fresh session in `Loading` state.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            state: WizardState::Loading,
            epoch: SessionEpoch::initial(),
            catalog: None,
            answers: AnswerSheet::new(),
            results: None,
            last_error: None,
            started_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the current state.
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Returns the current epoch.
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    /// Returns the loaded catalog, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Returns the recorded answers.
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Returns the current result set, if any.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Returns the failure that put the session into `Failed`, if any.
    pub fn last_error(&self) -> Option<&WizardError> {
        self.last_error.as_ref()
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns the question currently being asked.
    pub fn current_question(&self) -> Option<&Question> {
        let idx = self.state.step()?;
        self.catalog.as_ref()?.question_at(idx)
    }

    /// Returns the progress snapshot for the current state.
    pub fn progress(&self) -> WizardProgress {
        let total = self.catalog.as_ref().map_or(0, Catalog::len);
        match self.state {
            WizardState::Asking(idx) => WizardProgress::new(idx, total),
            WizardState::FetchingResults | WizardState::ShowingResults => {
                WizardProgress::complete(total)
            }
            WizardState::Loading | WizardState::Failed => WizardProgress::new(0, total),
        }
    }

    /// Normalizes the recorded answers against the loaded catalog.
    pub fn criteria(&self) -> Criteria {
        match &self.catalog {
            Some(catalog) => normalize(&self.answers, catalog),
            None => Criteria::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Accepts a fetched catalog and enters the first question.
    ///
    /// An empty catalog fails the session. Reports arriving outside
    /// `Loading` are ignored.
    pub fn catalog_loaded(&mut self, catalog: Catalog) -> Result<(), WizardError> {
        if self.state != WizardState::Loading {
            return Ok(());
        }
        if catalog.is_empty() {
            let err = WizardError::CatalogEmpty;
            self.state = WizardState::Failed;
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.catalog = Some(catalog);
        self.state = WizardState::Asking(0);
        Ok(())
    }

    /// Records a failed catalog fetch. Terminal: there is no catalog to
    /// restart into.
    pub fn catalog_failed(&mut self, err: WizardError) {
        if self.state != WizardState::Loading {
            return;
        }
        self.state = WizardState::Failed;
        self.last_error = Some(err);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the chosen option for the current question and advances.
    ///
    /// The option id is recorded as-is; stale ids fall out later during
    /// normalization rather than failing here.
    pub fn select_option(&mut self, option_id: OptionId) -> StepOutcome {
        let Some(idx) = self.state.step() else {
            return StepOutcome::Ignored;
        };
        let Some(question_id) = self
            .catalog
            .as_ref()
            .and_then(|c| c.question_at(idx))
            .map(|q| q.id().clone())
        else {
            return StepOutcome::Ignored;
        };
        self.answers.record(question_id, Selection::Chosen(option_id));
        self.advance(idx)
    }

    /// Records an explicit skip and advances.
    ///
    /// Only legal when the current question is marked optional; otherwise
    /// the state is left unchanged.
    pub fn skip(&mut self) -> StepOutcome {
        let Some(idx) = self.state.step() else {
            return StepOutcome::Ignored;
        };
        let Some(question) = self.catalog.as_ref().and_then(|c| c.question_at(idx)) else {
            return StepOutcome::Ignored;
        };
        if !question.is_optional() {
            return StepOutcome::Ignored;
        }
        let question_id = question.id().clone();
        self.answers.record(question_id, Selection::Skipped);
        self.advance(idx)
    }

    /// Moves back one question, keeping the recorded answer for the
    /// question being returned to. A no-op at the first question.
    pub fn back(&mut self) -> StepOutcome {
        let Some(idx) = self.state.step() else {
            return StepOutcome::Ignored;
        };
        if idx == 0 {
            return StepOutcome::Ignored;
        }
        self.state = WizardState::Asking(idx - 1);
        StepOutcome::Advanced
    }

    fn advance(&mut self, idx: usize) -> StepOutcome {
        let total = self.catalog.as_ref().map_or(0, Catalog::len);
        if idx + 1 >= total {
            self.state = WizardState::FetchingResults;
            StepOutcome::ReadyForResults
        } else {
            self.state = WizardState::Asking(idx + 1);
            StepOutcome::Advanced
        }
    }

    /// Resets answers, results, and step to start over.
    ///
    /// Legal from the results screen and from a recoverable failure.
    /// Bumps the epoch so any response still in flight is discarded.
    pub fn restart(&mut self) -> StepOutcome {
        if !matches!(
            self.state,
            WizardState::ShowingResults | WizardState::Failed
        ) || self.catalog.is_none()
        {
            return StepOutcome::Ignored;
        }
        let target = WizardState::Asking(0);
        debug_assert!(self.state.can_transition_to(&target));
        self.answers.clear();
        self.results = None;
        self.last_error = None;
        self.epoch = self.epoch.next();
        self.state = target;
        StepOutcome::Restarted
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────────────────────

    /// Accepts a fetched result set.
    ///
    /// Returns false, discarding the set, when the epoch is stale or the
    /// session is not waiting for results.
    pub fn results_ready(&mut self, epoch: SessionEpoch, results: ResultSet) -> bool {
        if epoch != self.epoch || self.state != WizardState::FetchingResults {
            return false;
        }
        self.results = Some(results);
        self.state = WizardState::ShowingResults;
        true
    }

    /// Records a failed results fetch.
    ///
    /// Returns false when the epoch is stale or the session is not
    /// waiting for results.
    pub fn results_failed(&mut self, epoch: SessionEpoch, err: WizardError) -> bool {
        if epoch != self.epoch || self.state != WizardState::FetchingResults {
            return false;
        }
        self.results = None;
        self.state = WizardState::Failed;
        self.last_error = Some(err);
        true
    }

    /// Picks a random item from the current results, for shuffle.
    ///
    /// None outside the results screen or on an empty set.
    pub fn shuffle_pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RecommendationItem> {
        if self.state != WizardState::ShowingResults {
            return None;
        }
        self.results.as_ref()?.random_pick(rng)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AnswerOption, OptionDetails};
    use crate::domain::foundation::QuestionId;
    use crate::domain::recommendation::Vibe;
    use rand::rngs::mock::StepRng;

    fn item(url: &str) -> RecommendationItem {
        RecommendationItem {
            title: url.to_string(),
            slug: String::new(),
            summary: String::new(),
            url: url.to_string(),
            image: None,
            emoji_tags: Vec::new(),
            duration: None,
            travel_from: None,
            reasons: Vec::new(),
            score: 0.0,
        }
    }

    fn two_step_catalog() -> Catalog {
        Catalog::new(vec![
            Question::new(
                QuestionId::new("time_budget"),
                "How much time do you have?",
                "single",
                vec![AnswerOption::new(
                    OptionId::new("o1"),
                    "An hour or so",
                    None,
                    OptionDetails::TimeBudget {
                        min_minutes: Some(30),
                        max_minutes: Some(60),
                    },
                )],
            ),
            Question::new(
                QuestionId::new("vibe"),
                "What pace?",
                "single",
                vec![AnswerOption::new(
                    OptionId::new("v_calm"),
                    "Calm",
                    None,
                    OptionDetails::Vibe,
                )],
            ),
        ])
    }

    fn catalog_with_optional_second() -> Catalog {
        Catalog::new(vec![
            Question::new(QuestionId::new("time_budget"), "", "single", vec![]),
            Question::new(QuestionId::new("kids"), "", "single-optional", vec![]),
            Question::new(QuestionId::new("vibe"), "", "single", vec![]),
        ])
    }

    fn started_session(catalog: Catalog) -> WizardSession {
        let mut session = WizardSession::new();
        session.catalog_loaded(catalog).unwrap();
        session
    }

    // ───────────────────────────────────────────────────────────────
    // Catalog resolution
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_session_is_loading() {
        let session = WizardSession::new();
        assert_eq!(session.state(), WizardState::Loading);
        assert!(session.catalog().is_none());
    }

    #[test]
    fn catalog_with_questions_enters_first_step() {
        let session = started_session(two_step_catalog());
        assert_eq!(session.state(), WizardState::Asking(0));
        assert_eq!(
            session.current_question().unwrap().id().as_str(),
            "time_budget"
        );
    }

    #[test]
    fn empty_catalog_fails_the_session() {
        let mut session = WizardSession::new();
        let result = session.catalog_loaded(Catalog::new(vec![]));
        assert_eq!(result, Err(WizardError::CatalogEmpty));
        assert_eq!(session.state(), WizardState::Failed);
    }

    #[test]
    fn catalog_failure_is_terminal_without_restart_path() {
        let mut session = WizardSession::new();
        session.catalog_failed(WizardError::CatalogUnavailable("timeout".into()));
        assert_eq!(session.state(), WizardState::Failed);
        // No catalog, so restart has nothing to return to
        assert_eq!(session.restart(), StepOutcome::Ignored);
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn straight_through_reaches_fetch_exactly_once() {
        let mut session = started_session(two_step_catalog());
        assert_eq!(
            session.select_option(OptionId::new("o1")),
            StepOutcome::Advanced
        );
        assert_eq!(
            session.select_option(OptionId::new("v_calm")),
            StepOutcome::ReadyForResults
        );
        assert_eq!(session.state(), WizardState::FetchingResults);

        // Further navigation during the fetch is ignored
        assert_eq!(session.select_option(OptionId::new("o1")), StepOutcome::Ignored);
        assert_eq!(session.back(), StepOutcome::Ignored);
    }

    #[test]
    fn completed_pass_normalizes_recorded_answers() {
        let mut session = started_session(two_step_catalog());
        session.select_option(OptionId::new("o1"));
        session.select_option(OptionId::new("v_calm"));

        let criteria = session.criteria();
        assert_eq!(criteria.time_min_minutes, Some(30));
        assert_eq!(criteria.time_max_minutes, Some(60));
        assert_eq!(criteria.vibe, Some(Vibe::Calm));
    }

    #[test]
    fn back_at_first_question_is_a_no_op() {
        let mut session = started_session(two_step_catalog());
        assert_eq!(session.back(), StepOutcome::Ignored);
        assert_eq!(session.state(), WizardState::Asking(0));
    }

    #[test]
    fn back_keeps_the_previous_answer_and_allows_overwrite() {
        let mut session = started_session(two_step_catalog());
        session.select_option(OptionId::new("o1"));
        assert_eq!(session.back(), StepOutcome::Advanced);
        assert_eq!(session.state(), WizardState::Asking(0));
        assert_eq!(
            session.answers().chosen_option(&QuestionId::new("time_budget")),
            Some(&OptionId::new("o1"))
        );

        session.select_option(OptionId::new("o2"));
        assert_eq!(
            session.answers().chosen_option(&QuestionId::new("time_budget")),
            Some(&OptionId::new("o2"))
        );
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn skip_is_only_legal_on_optional_questions() {
        let mut session = started_session(catalog_with_optional_second());

        // First question is required
        assert_eq!(session.skip(), StepOutcome::Ignored);
        assert_eq!(session.state(), WizardState::Asking(0));
        assert!(session.answers().is_empty());

        session.select_option(OptionId::new("t1"));
        // Second question is optional
        assert_eq!(session.skip(), StepOutcome::Advanced);
        assert_eq!(session.state(), WizardState::Asking(2));
        assert_eq!(
            session.answers().selected(&QuestionId::new("kids")),
            Some(&Selection::Skipped)
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Results and epoch guarding
    // ───────────────────────────────────────────────────────────────

    fn session_awaiting_results() -> WizardSession {
        let mut session = started_session(two_step_catalog());
        session.select_option(OptionId::new("o1"));
        session.select_option(OptionId::new("v_calm"));
        session
    }

    #[test]
    fn results_ready_enters_results_screen() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        assert!(session.results_ready(epoch, ResultSet::new(vec![item("/a")])));
        assert_eq!(session.state(), WizardState::ShowingResults);
        assert_eq!(session.results().unwrap().len(), 1);
        assert!(session.progress().is_complete());
    }

    #[test]
    fn stale_epoch_results_are_discarded() {
        let mut session = session_awaiting_results();
        let stale = session.epoch();
        let accepted = session.results_ready(stale.next(), ResultSet::new(vec![item("/a")]));
        assert!(!accepted);
        assert_eq!(session.state(), WizardState::FetchingResults);
        assert!(session.results().is_none());
    }

    #[test]
    fn results_failure_enters_failed_with_error() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        assert!(session.results_failed(epoch, WizardError::RecommendationFetch("502".into())));
        assert_eq!(session.state(), WizardState::Failed);
        assert!(session.results().is_none());
        assert_eq!(
            session.last_error(),
            Some(&WizardError::RecommendationFetch("502".into()))
        );
    }

    #[test]
    fn restart_recovers_from_recommendation_failure() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        session.results_failed(epoch, WizardError::RecommendationFetch("502".into()));

        assert_eq!(session.restart(), StepOutcome::Restarted);
        assert_eq!(session.state(), WizardState::Asking(0));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn restart_clears_answers_results_and_bumps_epoch() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        session.results_ready(epoch, ResultSet::new(vec![item("/a")]));

        assert_eq!(session.restart(), StepOutcome::Restarted);
        assert_eq!(session.state(), WizardState::Asking(0));
        assert!(session.answers().is_empty());
        assert!(session.results().is_none());
        assert_eq!(session.epoch(), epoch.next());
        assert_eq!(session.progress().fraction(), 0.0);
    }

    #[test]
    fn restart_is_ignored_mid_questionnaire() {
        let mut session = started_session(two_step_catalog());
        session.select_option(OptionId::new("o1"));
        assert_eq!(session.restart(), StepOutcome::Ignored);
        assert_eq!(session.state(), WizardState::Asking(1));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn response_from_before_restart_is_discarded() {
        let mut session = session_awaiting_results();
        let old_epoch = session.epoch();
        session.results_ready(old_epoch, ResultSet::new(vec![item("/a")]));
        session.restart();

        // A late response from the superseded pass must not resurface
        assert!(!session.results_ready(old_epoch, ResultSet::new(vec![item("/b")])));
        assert_eq!(session.state(), WizardState::Asking(0));
        assert!(session.results().is_none());
    }

    // ───────────────────────────────────────────────────────────────
    // Shuffle
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn shuffle_outside_results_screen_yields_nothing() {
        let session = started_session(two_step_catalog());
        assert!(session.shuffle_pick(&mut StepRng::new(0, 1)).is_none());
    }

    #[test]
    fn shuffle_on_empty_results_yields_nothing() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        session.results_ready(epoch, ResultSet::new(vec![]));
        assert!(session.shuffle_pick(&mut StepRng::new(0, 1)).is_none());
    }

    #[test]
    fn shuffle_on_singleton_always_picks_it() {
        let mut session = session_awaiting_results();
        let epoch = session.epoch();
        session.results_ready(epoch, ResultSet::new(vec![item("/only")]));
        let picked = session.shuffle_pick(&mut StepRng::new(3, 11)).unwrap();
        assert_eq!(picked.url, "/only");
    }

    // ───────────────────────────────────────────────────────────────
    // Progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn progress_counts_steps_completed_so_far() {
        let mut session = started_session(catalog_with_optional_second());
        assert_eq!(session.progress().step_label(), "0/3");

        session.select_option(OptionId::new("t1"));
        assert_eq!(session.progress().step_label(), "1/3");
        assert!((session.progress().fraction() - 1.0 / 3.0).abs() < f64::EPSILON);
    }
}
