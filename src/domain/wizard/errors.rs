//! Wizard-specific error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Failures that end or interrupt a wizard pass.
///
/// Navigation misuse (back at the first question, skip on a required
/// question, stray events after results) is deliberately not represented
/// here: those are silent no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The catalog endpoint was unreachable or returned a failure.
    #[error("Could not load the question catalog: {0}")]
    CatalogUnavailable(String),

    /// The catalog loaded but contains no questions.
    #[error("The question catalog is empty")]
    CatalogEmpty,

    /// The recommendation fetch failed after the final step.
    #[error("Could not fetch recommendations: {0}")]
    RecommendationFetch(String),
}

impl WizardError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
            WizardError::CatalogEmpty => ErrorCode::CatalogEmpty,
            WizardError::RecommendationFetch(_) => ErrorCode::RecommendationUnavailable,
        }
    }

    /// Returns true if a restart can recover from this failure.
    ///
    /// Without a catalog there is nothing to restart into.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WizardError::RecommendationFetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_failure_kind() {
        assert_eq!(
            WizardError::CatalogUnavailable("timeout".into()).code(),
            ErrorCode::CatalogUnavailable
        );
        assert_eq!(WizardError::CatalogEmpty.code(), ErrorCode::CatalogEmpty);
        assert_eq!(
            WizardError::RecommendationFetch("503".into()).code(),
            ErrorCode::RecommendationUnavailable
        );
    }

    #[test]
    fn only_recommendation_failures_are_recoverable() {
        assert!(WizardError::RecommendationFetch("x".into()).is_recoverable());
        assert!(!WizardError::CatalogEmpty.is_recoverable());
        assert!(!WizardError::CatalogUnavailable("x".into()).is_recoverable());
    }

    #[test]
    fn messages_are_user_presentable() {
        let err = WizardError::RecommendationFetch("status 502".into());
        assert_eq!(
            err.to_string(),
            "Could not fetch recommendations: status 502"
        );
    }
}
