//! Wizard module - The step flow from first question to results.
//!
//! The session aggregate owns all per-pass state; the state enum defines
//! the legal transitions; the answer sheet and progress snapshot are the
//! value objects the rest of the system reads.

mod answers;
mod errors;
mod progress;
mod session;
mod state;

pub use answers::{AnswerSheet, Selection};
pub use errors::WizardError;
pub use progress::WizardProgress;
pub use session::{StepOutcome, WizardSession};
pub use state::WizardState;
