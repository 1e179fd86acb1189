//! WizardProgress value object - step progress for one wizard pass.

use crate::domain::foundation::Percentage;

/// A snapshot of wizard progress.
///
/// Counts steps completed so far: at question `idx` the fraction is
/// `idx / total`, so the first question reports 0%. This matches the
/// observable behavior of the progress bar and is intentional; it is not
/// `(idx + 1) / total`. The results screen reports 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WizardProgress {
    completed_steps: usize,
    total_steps: usize,
}

impl WizardProgress {
    /// Creates a progress snapshot from completed and total step counts.
    pub fn new(completed_steps: usize, total_steps: usize) -> Self {
        Self {
            completed_steps: completed_steps.min(total_steps),
            total_steps,
        }
    }

    /// Creates the 100% snapshot shown with results.
    pub fn complete(total_steps: usize) -> Self {
        Self {
            completed_steps: total_steps,
            total_steps,
        }
    }

    /// Returns the number of steps completed so far.
    pub fn completed_steps(&self) -> usize {
        self.completed_steps
    }

    /// Returns the total number of steps.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns the fraction of steps completed (0.0 to 1.0).
    ///
    /// Zero when the catalog has no steps.
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        self.completed_steps as f64 / self.total_steps as f64
    }

    /// Returns the completion percentage.
    pub fn percent(&self) -> Percentage {
        Percentage::from_ratio(self.completed_steps, self.total_steps)
    }

    /// Returns the "completed/total" counter shown next to the bar.
    pub fn step_label(&self) -> String {
        format!("{}/{}", self.completed_steps, self.total_steps)
    }

    /// Returns true if every step is completed.
    pub fn is_complete(&self) -> bool {
        self.total_steps > 0 && self.completed_steps == self.total_steps
    }
}
