//! Wizard shell configuration

use serde::Deserialize;

/// Configuration for how the hosting shell opens the wizard
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WizardConfig {
    /// Open the wizard immediately on startup (the fragment-identifier
    /// entry path), instead of waiting for the user to ask for it
    #[serde(default)]
    pub auto_open: bool,
}
