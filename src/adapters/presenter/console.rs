//! Console presenter - renders the wizard to stdout.
//!
//! Used by the binary. Questions print with numbered options so the input
//! loop can map digits back to option ids; navigation prints the target
//! url for the user to open.

use crate::domain::catalog::Question;
use crate::domain::recommendation::RecommendationItem;
use crate::domain::wizard::WizardProgress;
use crate::ports::Presenter;

/// Stdout renderer for the wizard flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    /// Creates a console presenter.
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn show_question(&self, question: &Question, is_optional: bool) {
        println!();
        println!("{}", question.text());
        for (i, option) in question.options().iter().enumerate() {
            match option.sub() {
                Some(sub) => println!("  [{}] {} — {}", i + 1, option.label(), sub),
                None => println!("  [{}] {}", i + 1, option.label()),
            }
        }
        if is_optional {
            println!("  (s to skip)");
        }
    }

    fn show_results(&self, items: &[RecommendationItem]) {
        println!();
        if items.is_empty() {
            println!("Nothing matched — try again with looser answers.");
            return;
        }
        println!("Your top picks:");
        for item in items {
            let emojis = item.emoji_tags.join(" ");
            println!("  {} {}", item.title, emojis);
            if !item.summary.is_empty() {
                println!("    {}", item.summary);
            }
            for reason in &item.reasons {
                println!("    · {}", reason);
            }
            if !item.url.is_empty() {
                println!("    → {}", item.url);
            }
        }
        println!("(x to shuffle, r to restart)");
    }

    fn show_error(&self, message: &str) {
        println!();
        println!("Something went wrong: {}", message);
    }

    fn set_progress(&self, progress: &WizardProgress) {
        println!(
            "[{}] {}",
            progress.percent(),
            progress.step_label()
        );
    }

    fn navigate_to(&self, url: &str) {
        println!();
        println!("Open this one: {}", url);
    }
}
