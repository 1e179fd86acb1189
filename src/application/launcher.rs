//! WizardLauncher - single-initialization guard for the wizard flow.
//!
//! The wizard can be opened two ways: an explicit user action, or
//! automatically when the page's fragment identifier requests it on load.
//! Both routes go through one launcher instance, constructed exactly once
//! by the hosting shell, so the flow starts at most once per lifetime.
//! No ambient global flag is involved.

use std::sync::Arc;

use crate::ports::{CatalogSource, Presenter, RecommendationService};

use super::controller::WizardController;

/// How the wizard open was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTrigger {
    /// The user clicked the open affordance.
    UserAction,

    /// The page's fragment identifier requested the wizard on load.
    PageFragment,
}

/// Hands out the one controller a process lifetime gets.
pub struct WizardLauncher {
    catalog_source: Arc<dyn CatalogSource>,
    recommendations: Arc<dyn RecommendationService>,
    presenter: Arc<dyn Presenter>,
    launched: bool,
}

impl WizardLauncher {
    /// Creates the launcher with the dependencies the controller needs.
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        recommendations: Arc<dyn RecommendationService>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            catalog_source,
            recommendations,
            presenter,
            launched: false,
        }
    }

    /// Returns true once a launch has happened.
    pub fn launched(&self) -> bool {
        self.launched
    }

    /// Builds the controller on the first call; every later call, from
    /// either trigger, returns None.
    pub fn launch(&mut self, trigger: LaunchTrigger) -> Option<WizardController> {
        if self.launched {
            tracing::debug!(?trigger, "wizard already launched, ignoring");
            return None;
        }
        self.launched = true;
        tracing::info!(?trigger, "launching wizard");
        Some(WizardController::new(
            Arc::clone(&self.catalog_source),
            Arc::clone(&self.recommendations),
            Arc::clone(&self.presenter),
        ))
    }
}
