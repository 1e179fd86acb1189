//! Console shell for the Adventure Sherpa wizard.
//!
//! Wires the HTTP adapters and console presenter together, launches the
//! wizard through the single-initialization guard, and feeds user input
//! back in as wizard events.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use adventure_sherpa::adapters::api::HttpApiClient;
use adventure_sherpa::adapters::presenter::ConsolePresenter;
use adventure_sherpa::application::{LaunchTrigger, WizardController, WizardLauncher};
use adventure_sherpa::config::AppConfig;
use adventure_sherpa::domain::wizard::WizardState;
use adventure_sherpa::ports::WizardEvent;

const HELP: &str = "(number to choose, s skip, b back, r restart, x shuffle, q quit)";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("adventure-sherpa: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api = Arc::new(HttpApiClient::new(&config.api));
    let presenter = Arc::new(ConsolePresenter::new());

    let mut launcher = WizardLauncher::new(api.clone(), api, presenter);
    let trigger = if config.wizard.auto_open {
        LaunchTrigger::PageFragment
    } else {
        LaunchTrigger::UserAction
    };
    let Some(mut controller) = launcher.launch(trigger) else {
        return Ok(());
    };

    controller.start().await;
    if session_is_dead(&controller) {
        return Ok(());
    }

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(event) = parse_input(line.trim(), &controller) else {
            continue;
        };
        if matches!(event, Input::Quit) {
            break;
        }
        if let Input::Event(event) = event {
            controller.handle(event).await;
            if session_is_dead(&controller) {
                break;
            }
        }
    }
    Ok(())
}

enum Input {
    Event(WizardEvent),
    Quit,
}

fn parse_input(input: &str, controller: &WizardController) -> Option<Input> {
    match input {
        "" => None,
        "q" => Some(Input::Quit),
        "s" => Some(Input::Event(WizardEvent::Skip)),
        "b" => Some(Input::Event(WizardEvent::Back)),
        "r" => Some(Input::Event(WizardEvent::Restart)),
        "x" => Some(Input::Event(WizardEvent::Shuffle)),
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => {
                let option_id = controller
                    .session()
                    .current_question()
                    .and_then(|q| q.options().get(n - 1))
                    .map(|o| o.id().clone());
                match option_id {
                    Some(id) => Some(Input::Event(WizardEvent::Select(id))),
                    None => {
                        println!("No option {} here.", n);
                        None
                    }
                }
            }
            _ => {
                println!("{}", HELP);
                None
            }
        },
    }
}

/// A failed session without a catalog has nothing left to do.
fn session_is_dead(controller: &WizardController) -> bool {
    controller.session().state() == WizardState::Failed
        && controller.session().catalog().is_none()
}
