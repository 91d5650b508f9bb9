/// Wizard flow management
///
/// Owns the current step and selection, and keeps the form view
/// consistent with them after every command.

use tracing::debug;

use crate::config::{FormConfig, DETAILS_STEP, TYPE_STEP};
use crate::fields::FieldState;
use crate::selection::Selection;
use crate::view::{FocusTarget, FormView};

/// Boundary event delivered by a host adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A type option was activated, carrying its wire value
    OptionChosen(String),

    /// The next control was activated
    NextActivated,

    /// The previous control was activated
    PrevActivated,
}

/// Step wizard controller
#[derive(Debug, Clone)]
pub struct WizardFlow {
    config: FormConfig,
    current_step: String,
    selection: Selection,
    view: FormView,
}

impl WizardFlow {
    /// Create a wizard on its resolved starting step.
    pub fn new(config: FormConfig) -> Self {
        Self::with_current_step(config, None)
    }

    /// Create a wizard honoring a previously set current step, ahead of
    /// the configured initial step, the first declared step, and finally
    /// the literal type step. An empty step order is not an error; the
    /// wizard degrades to the fallback.
    pub fn with_current_step(config: FormConfig, previous: Option<String>) -> Self {
        let view = FormView::from_config(&config);
        let current_step = previous
            .or_else(|| config.initial_step.clone())
            .or_else(|| config.step_order.first().cloned())
            .unwrap_or_else(|| TYPE_STEP.to_string());

        debug!(step = %current_step, "wizard initialized");

        let mut flow = Self {
            config,
            current_step,
            selection: Selection::Unselected,
            view,
        };
        let step = flow.current_step.clone();
        flow.view.show_panel(&step);
        flow.sync_selection_state();
        flow
    }

    pub fn current_step(&self) -> &str {
        &self.current_step
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Mutable view access, for host adapters that drop elements the
    /// markup does not carry.
    pub fn view_mut(&mut self) -> &mut FormView {
        &mut self.view
    }

    /// Conditional field state for the current selection
    pub fn field_state(&self) -> FieldState {
        FieldState::derive(self.selection)
    }

    /// Show `step_name` and recompute indicators. Unknown names are
    /// accepted: no panel matches, so all panels end up hidden, and the
    /// indicators fall through to their defaults. Idempotent. Leaves the
    /// selection and its derived field state untouched.
    pub fn set_step(&mut self, step_name: &str) {
        debug!(step = step_name, "step change");
        self.current_step = step_name.to_string();
        self.view.show_panel(step_name);
        self.refresh_indicators();
    }

    /// Record a new selection and recompute everything derived from it:
    /// field state, option card markings, and indicators (the episodes
    /// entry can change status without a step change).
    pub fn set_selection(&mut self, selection: Selection) {
        debug!(selection = %selection, "selection change");
        self.selection = selection;
        self.sync_selection_state();
    }

    /// Advance to the details step. No-op while nothing is selected; the
    /// next control is disabled in that state.
    pub fn next(&mut self) {
        if !self.selection.is_made() {
            debug!("next ignored: nothing selected");
            return;
        }
        self.set_step(DETAILS_STEP);
    }

    /// Return to the type step and hand focus back to the first option.
    pub fn previous(&mut self) {
        self.set_step(TYPE_STEP);
        if !self.view.option_cards.is_empty() {
            self.view.focus = Some(FocusTarget::FirstOption);
        }
    }

    /// Dispatch a boundary event onto the matching command.
    ///
    /// An option chosen while the type panel is shown moves focus to the
    /// next control once that selection enabled it, so keyboard users can
    /// continue without tabbing.
    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::OptionChosen(value) => {
                self.set_selection(Selection::from_value(&value));
                if self.current_step == TYPE_STEP && self.view.next_disabled == Some(false) {
                    self.view.focus = Some(FocusTarget::NextControl);
                }
            }
            FormEvent::NextActivated => self.next(),
            FormEvent::PrevActivated => self.previous(),
        }
    }

    /// Take the pending focus request, if any. The host adapter calls
    /// this after each event and performs the real focus move.
    pub fn take_focus(&mut self) -> Option<FocusTarget> {
        self.view.focus.take()
    }

    fn sync_selection_state(&mut self) {
        let fields = FieldState::derive(self.selection);
        self.view.apply_fields(fields);
        self.view.mark_selected(self.selection);
        self.refresh_indicators();
    }

    fn refresh_indicators(&mut self) {
        self.view
            .apply_indicators(&self.current_step, &self.config.step_order, self.selection);
    }
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
