//! Recording presenter for tests.
//!
//! Captures every call the controller makes so tests can assert on the
//! exact render sequence without a UI.

use std::sync::{Arc, Mutex};

use crate::domain::catalog::Question;
use crate::domain::recommendation::RecommendationItem;
use crate::domain::wizard::WizardProgress;
use crate::ports::Presenter;

/// One captured presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Question {
        question_id: String,
        is_optional: bool,
    },
    Results {
        titles: Vec<String>,
    },
    Error {
        message: String,
    },
    Progress {
        completed: usize,
        total: usize,
    },
    Navigate {
        url: String,
    },
}

/// Presenter that records calls instead of rendering.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every captured call in order.
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().expect("recorder lock poisoned").clone()
    }

    /// Returns the last navigation target, if any.
    pub fn last_navigation(&self) -> Option<String> {
        self.calls()
            .into_iter()
            .rev()
            .find_map(|call| match call {
                PresenterCall::Navigate { url } => Some(url),
                _ => None,
            })
    }

    /// Returns the question ids shown, in order.
    pub fn shown_questions(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Question { question_id, .. } => Some(question_id),
                _ => None,
            })
            .collect()
    }

    /// Returns the error messages shown, in order.
    pub fn shown_errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Error { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: PresenterCall) {
        self.calls.lock().expect("recorder lock poisoned").push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn show_question(&self, question: &Question, is_optional: bool) {
        self.push(PresenterCall::Question {
            question_id: question.id().as_str().to_string(),
            is_optional,
        });
    }

    fn show_results(&self, items: &[RecommendationItem]) {
        self.push(PresenterCall::Results {
            titles: items.iter().map(|i| i.title.clone()).collect(),
        });
    }

    fn show_error(&self, message: &str) {
        self.push(PresenterCall::Error {
            message: message.to_string(),
        });
    }

    fn set_progress(&self, progress: &WizardProgress) {
        self.push(PresenterCall::Progress {
            completed: progress.completed_steps(),
            total: progress.total_steps(),
        });
    }

    fn navigate_to(&self, url: &str) {
        self.push(PresenterCall::Navigate {
            url: url.to_string(),
        });
    }
}
