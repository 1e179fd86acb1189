//! Presenter Port - Boundary to whatever renders the wizard.
//!
//! The controller pushes data out through this trait and receives user
//! actions back as [`WizardEvent`] values. The presenter owns no wizard
//! state; it renders what it is given and reports what the user did.

use crate::domain::catalog::Question;
use crate::domain::foundation::OptionId;
use crate::domain::recommendation::RecommendationItem;
use crate::domain::wizard::WizardProgress;

/// A discrete user action reported by the presentation side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// An option of the current question was chosen.
    Select(OptionId),

    /// The current (optional) question was skipped.
    Skip,

    /// Go back one question.
    Back,

    /// Start over from the first question.
    Restart,

    /// Open one random item from the current results.
    Shuffle,
}

/// Port for rendering wizard output.
///
/// Methods take `&self`; implementations needing mutability use interior
/// mutability, which also keeps them shareable across the event loop.
pub trait Presenter: Send + Sync {
    /// Renders the current question and its options.
    fn show_question(&self, question: &Question, is_optional: bool);

    /// Renders the fetched result set.
    fn show_results(&self, items: &[RecommendationItem]);

    /// Renders a failure message.
    fn show_error(&self, message: &str);

    /// Updates the progress bar and step counter.
    fn set_progress(&self, progress: &WizardProgress);

    /// Requests navigation to an item's target.
    fn navigate_to(&self, url: &str);
}
