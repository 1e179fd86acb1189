//! WizardController - async orchestrator for one wizard session.
//!
//! Reacts to one external event at a time (the hosting shell's event loop
//! guarantees no two run concurrently), drives the session aggregate, and
//! pushes every render through the presenter port. The two fetches are the
//! only suspension points; responses arriving after a restart are dropped
//! by the session's epoch guard.

use std::sync::Arc;

use crate::domain::recommendation::ResultSet;
use crate::domain::wizard::{StepOutcome, WizardError, WizardSession};
use crate::ports::{CatalogSource, Presenter, RecommendationService, WizardEvent};

/// Result cap sent with every recommendation request.
pub const RESULT_LIMIT: u32 = 12;

/// Orchestrates the wizard flow between session, services, and presenter.
pub struct WizardController {
    session: WizardSession,
    catalog_source: Arc<dyn CatalogSource>,
    recommendations: Arc<dyn RecommendationService>,
    presenter: Arc<dyn Presenter>,
}

impl WizardController {
    /// Creates a controller with a fresh session.
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        recommendations: Arc<dyn RecommendationService>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            session: WizardSession::new(),
            catalog_source,
            recommendations,
            presenter,
        }
    }

    /// Returns the session for inspection by the hosting shell.
    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Fetches the catalog and renders the first question.
    ///
    /// An unreachable or empty catalog fails the session with a static
    /// message; there is no retry.
    pub async fn start(&mut self) {
        tracing::info!(session_id = %self.session.id(), "starting wizard session");

        match self.catalog_source.fetch_catalog().await {
            Ok(catalog) => match self.session.catalog_loaded(catalog) {
                Ok(()) => self.render_current_question(),
                Err(err) => {
                    tracing::warn!(session_id = %self.session.id(), %err, "catalog rejected");
                    self.presenter.show_error(&err.to_string());
                }
            },
            Err(err) => {
                let err = WizardError::CatalogUnavailable(err.to_string());
                tracing::warn!(session_id = %self.session.id(), %err, "catalog fetch failed");
                self.session.catalog_failed(err.clone());
                self.presenter.show_error(&err.to_string());
            }
        }
    }

    /// Handles one user event reported by the presenter.
    ///
    /// Events arriving while a fetch is outstanding, and navigation that
    /// is illegal in the current state, are ignored without rendering.
    pub async fn handle(&mut self, event: WizardEvent) {
        if self.session.state().is_transient() {
            tracing::debug!(?event, "event ignored while fetch outstanding");
            return;
        }

        match event {
            WizardEvent::Select(option_id) => {
                let outcome = self.session.select_option(option_id);
                self.after_step(outcome).await;
            }
            WizardEvent::Skip => {
                let outcome = self.session.skip();
                self.after_step(outcome).await;
            }
            WizardEvent::Back => {
                let outcome = self.session.back();
                self.after_step(outcome).await;
            }
            WizardEvent::Restart => {
                let outcome = self.session.restart();
                self.after_step(outcome).await;
            }
            WizardEvent::Shuffle => self.shuffle(),
        }
    }

    async fn after_step(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Advanced | StepOutcome::Restarted => self.render_current_question(),
            StepOutcome::ReadyForResults => self.fetch_results().await,
            StepOutcome::Ignored => {
                tracing::debug!(state = ?self.session.state(), "navigation ignored");
            }
        }
    }

    /// Normalizes the answers and performs the single results fetch.
    async fn fetch_results(&mut self) {
        let epoch = self.session.epoch();
        let criteria = self.session.criteria();
        tracing::info!(session_id = %self.session.id(), %epoch, "fetching recommendations");

        match self.recommendations.recommend(&criteria, RESULT_LIMIT).await {
            Ok(items) => {
                if self.session.results_ready(epoch, ResultSet::new(items)) {
                    self.presenter.set_progress(&self.session.progress());
                    let items = self
                        .session
                        .results()
                        .map(|r| r.items())
                        .unwrap_or_default();
                    self.presenter.show_results(items);
                } else {
                    tracing::debug!(%epoch, "discarding superseded recommendation response");
                }
            }
            Err(err) => {
                let err = WizardError::RecommendationFetch(err.to_string());
                tracing::warn!(session_id = %self.session.id(), %err, "recommendation fetch failed");
                if self.session.results_failed(epoch, err.clone()) {
                    self.presenter.show_error(&err.to_string());
                }
            }
        }
    }

    /// Picks a random result and requests navigation to it.
    fn shuffle(&mut self) {
        let mut rng = rand::thread_rng();
        let url = self
            .session
            .shuffle_pick(&mut rng)
            .map(|item| item.url.clone());
        match url {
            Some(url) if !url.is_empty() => self.presenter.navigate_to(&url),
            _ => tracing::debug!("shuffle ignored: no navigable results"),
        }
    }

    fn render_current_question(&self) {
        if let Some(question) = self.session.current_question() {
            self.presenter.set_progress(&self.session.progress());
            self.presenter.show_question(question, question.is_optional());
        }
    }
}
