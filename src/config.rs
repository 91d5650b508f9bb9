use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;

/// Form configuration
///
/// Captures everything the host markup declares about a step form: the
/// panel order, the optional starting step, the indicator keys, and the
/// wire values of the type options. Passing this explicitly removes any
/// dependency on attribute-reading order.

/// Step the wizard falls back to when nothing else resolves
pub const TYPE_STEP: &str = "type";

/// Step the next control always advances to (fixed two-step transition)
pub const DETAILS_STEP: &str = "details";

/// Indicator key gated by the series selection rather than step position
pub const EPISODES_KEY: &str = "episodes";

fn default_step_order() -> Vec<String> {
    vec![TYPE_STEP.to_string(), DETAILS_STEP.to_string()]
}

fn default_indicator_keys() -> Vec<String> {
    vec![
        TYPE_STEP.to_string(),
        EPISODES_KEY.to_string(),
        DETAILS_STEP.to_string(),
    ]
}

fn default_option_values() -> Vec<String> {
    vec!["0".to_string(), "1".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Ordered step identifiers; insertion order defines completion ordering
    #[serde(default = "default_step_order")]
    pub step_order: Vec<String>,

    /// Markup-declared starting step
    #[serde(default)]
    pub initial_step: Option<String>,

    /// Indicator keys, in display order
    #[serde(default = "default_indicator_keys")]
    pub indicator_keys: Vec<String>,

    /// Wire values of the type options, in document order
    #[serde(default = "default_option_values")]
    pub option_values: Vec<String>,
}

impl FormConfig {
    /// Check the declaration invariants: unique step identifiers, and a
    /// declared initial step that actually names a panel.
    ///
    /// The wizard itself never requires this; it degrades on malformed
    /// input instead. Markup loaders can call it to surface authoring
    /// mistakes early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for step in &self.step_order {
            if !seen.insert(step.as_str()) {
                return Err(ConfigError::DuplicateStep(step.clone()));
            }
        }

        if let Some(initial) = &self.initial_step {
            if !self.step_order.iter().any(|step| step == initial) {
                return Err(ConfigError::UnknownInitialStep(initial.clone()));
            }
        }

        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            step_order: default_step_order(),
            initial_step: None,
            indicator_keys: default_indicator_keys(),
            option_values: default_option_values(),
        }
    }
}
