//! Presenter adapters - console output and a test recorder.

mod console;
mod recording;

pub use console::ConsolePresenter;
pub use recording::{PresenterCall, RecordingPresenter};
