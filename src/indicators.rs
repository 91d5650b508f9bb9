/// Step indicator derivation
///
/// Indicators reflect both linear progress (steps already passed are
/// complete) and the conditional episodes entry, which only exists on the
/// series path and is never ahead of or behind the sequential steps.

use crate::config::{DETAILS_STEP, EPISODES_KEY};
use crate::selection::Selection;

/// Indicator status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStatus {
    /// Not yet reached; carries no marking
    #[default]
    Pending,

    /// Indicator for the step currently shown
    Active,

    /// Step earlier in the order than the current one
    Complete,

    /// Episodes entry while no series is selected
    Disabled,
}

impl IndicatorStatus {
    /// Class name the host document toggles for this status, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            IndicatorStatus::Pending => None,
            IndicatorStatus::Active => Some("is-active"),
            IndicatorStatus::Complete => Some("is-complete"),
            IndicatorStatus::Disabled => Some("is-disabled"),
        }
    }
}

/// Derive the status of a single indicator.
///
/// The episodes key is gated on the selection: disabled until series is
/// chosen, then active exactly while the details panel is shown and
/// complete otherwise. Every other key follows sequence position. Keys
/// absent from the step order stay pending.
pub fn indicator_status(
    key: &str,
    active_step: &str,
    step_order: &[String],
    selection: Selection,
) -> IndicatorStatus {
    if key == EPISODES_KEY {
        if !selection.is_series() {
            return IndicatorStatus::Disabled;
        }
        return if active_step == DETAILS_STEP {
            IndicatorStatus::Active
        } else {
            IndicatorStatus::Complete
        };
    }

    if key == active_step {
        return IndicatorStatus::Active;
    }

    let key_index = step_order.iter().position(|step| step == key);
    let active_index = step_order.iter().position(|step| step == active_step);
    match (key_index, active_index) {
        (Some(key_index), Some(active_index)) if key_index < active_index => {
            IndicatorStatus::Complete
        }
        _ => IndicatorStatus::Pending,
    }
}
