/// Step wizard for the add-title form
///
/// Drives a two-step form: a type selection step (film or series) gating
/// a details step, with a selection-gated episodes indicator. The state
/// machine is plain data; host adapters translate real input events into
/// [`FormEvent`]s and copy the [`FormView`] projection back onto their
/// elements.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── FormConfig  (step order, initial step, indicator keys, options)
///   ├── Selection   (unselected | film | series)
///   ├── FieldState  (pure derivation from the selection)
///   ├── indicators  (pure status derivation per indicator key)
///   └── FormView    (panels, cards, badges, companion elements)
/// ```
///
/// ## Usage
///
/// ```rust
/// use title_wizard::{FormConfig, FormEvent, IndicatorStatus, WizardFlow};
///
/// let mut flow = WizardFlow::new(FormConfig::default());
/// assert_eq!(flow.view().visible_panel(), Some("type"));
///
/// // User picks "series", then advances
/// flow.handle(FormEvent::OptionChosen("1".to_string()));
/// flow.handle(FormEvent::NextActivated);
///
/// assert_eq!(flow.view().visible_panel(), Some("details"));
/// assert_eq!(flow.view().indicator("episodes"), Some(IndicatorStatus::Active));
/// ```

pub mod config;
pub mod error;
pub mod selection;
pub mod fields;
pub mod indicators;
pub mod view;
pub mod flow;

// Re-export commonly used types
pub use config::{FormConfig, DETAILS_STEP, EPISODES_KEY, TYPE_STEP};
pub use error::ConfigError;
pub use fields::FieldState;
pub use flow::{FormEvent, WizardFlow};
pub use indicators::{indicator_status, IndicatorStatus};
pub use selection::Selection;
pub use view::{FocusTarget, FormView, IndicatorBadge, OptionCard, StepPanel};
