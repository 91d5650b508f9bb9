/// Rendered form projection
///
/// Mirrors the attribute and class toggles the host document receives.
/// The controller writes derived state into this structure; a host adapter
/// copies it onto real elements. Every companion element is optional, and
/// projecting onto a missing one is a no-op.

use crate::config::FormConfig;
use crate::fields::FieldState;
use crate::indicators::{indicator_status, IndicatorStatus};
use crate::selection::Selection;

/// One step panel and its hidden attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPanel {
    pub step: String,
    pub hidden: bool,
}

/// One type option card and its selected marking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCard {
    pub value: String,
    pub selected: bool,
}

/// One step indicator element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorBadge {
    pub key: String,
    pub status: IndicatorStatus,
}

/// Element the host adapter should move input focus to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstOption,
    NextControl,
}

/// Projection of the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub panels: Vec<StepPanel>,
    pub option_cards: Vec<OptionCard>,
    pub indicators: Vec<IndicatorBadge>,

    /// Disabled attribute of the next control; `None` when absent
    pub next_disabled: Option<bool>,

    /// Hidden marking of the film-only block; `None` when absent
    pub film_only_hidden: Option<bool>,

    /// Required attribute of the details field; `None` when absent
    pub details_required: Option<bool>,

    /// Hidden marking of the series hint; `None` when absent
    pub series_hint_hidden: Option<bool>,

    /// Pending focus request, consumed by the host adapter
    pub focus: Option<FocusTarget>,
}

impl FormView {
    /// Build a view with every companion element present, one panel per
    /// declared step and one card per declared option value.
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            panels: config
                .step_order
                .iter()
                .map(|step| StepPanel {
                    step: step.clone(),
                    hidden: true,
                })
                .collect(),
            option_cards: config
                .option_values
                .iter()
                .map(|value| OptionCard {
                    value: value.clone(),
                    selected: false,
                })
                .collect(),
            indicators: config
                .indicator_keys
                .iter()
                .map(|key| IndicatorBadge {
                    key: key.clone(),
                    status: IndicatorStatus::Pending,
                })
                .collect(),
            next_disabled: Some(true),
            film_only_hidden: Some(false),
            details_required: Some(true),
            series_hint_hidden: Some(true),
            focus: None,
        }
    }

    /// Show exactly the panel for `step`; hide the rest. If no panel
    /// matches, all end up hidden.
    pub fn show_panel(&mut self, step: &str) {
        for panel in &mut self.panels {
            panel.hidden = panel.step != step;
        }
    }

    /// Mark exactly the card matching the selection; clear the rest.
    pub fn mark_selected(&mut self, selection: Selection) {
        let value = selection.value();
        for card in &mut self.option_cards {
            card.selected = value == Some(card.value.as_str());
        }
    }

    /// Project conditional field state onto the companion elements.
    pub fn apply_fields(&mut self, fields: FieldState) {
        if let Some(disabled) = self.next_disabled.as_mut() {
            *disabled = !fields.next_enabled;
        }
        if let Some(hidden) = self.film_only_hidden.as_mut() {
            *hidden = !fields.film_only_visible;
        }
        if let Some(required) = self.details_required.as_mut() {
            *required = fields.details_required;
        }
        if let Some(hidden) = self.series_hint_hidden.as_mut() {
            *hidden = !fields.series_hint_visible;
        }
    }

    /// Recompute every indicator badge for the given step and selection.
    pub fn apply_indicators(
        &mut self,
        active_step: &str,
        step_order: &[String],
        selection: Selection,
    ) {
        for badge in &mut self.indicators {
            badge.status = indicator_status(&badge.key, active_step, step_order, selection);
        }
    }

    /// Step of the single visible panel, if any panel is visible
    pub fn visible_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|panel| !panel.hidden)
            .map(|panel| panel.step.as_str())
    }

    /// Status of the indicator for `key`, if such an indicator exists
    pub fn indicator(&self, key: &str) -> Option<IndicatorStatus> {
        self.indicators
            .iter()
            .find(|badge| badge.key == key)
            .map(|badge| badge.status)
    }

    /// Wire value of the card currently marked selected, if any
    pub fn selected_value(&self) -> Option<&str> {
        self.option_cards
            .iter()
            .find(|card| card.selected)
            .map(|card| card.value.as_str())
    }
}
