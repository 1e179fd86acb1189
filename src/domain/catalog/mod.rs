//! Catalog module - The externally sourced question list.
//!
//! The catalog drives the wizard: its order defines step order, and its
//! options carry the axis-specific data the normalizer projects into
//! query criteria.

mod option;
mod question;

pub use option::{AnswerOption, OptionDetails};
pub use question::{Catalog, Question, QuestionAxis};
