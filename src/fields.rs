/// Conditional field state
///
/// Everything here is a pure function of the type selection; nothing is
/// stored between recomputations.

use crate::selection::Selection;

/// Derived field and control state for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    /// Film-only content block is shown
    pub film_only_visible: bool,

    /// Details field carries the required attribute
    pub details_required: bool,

    /// Series hint block is shown
    pub series_hint_visible: bool,

    /// Next control accepts activation
    pub next_enabled: bool,
}

impl FieldState {
    pub fn derive(selection: Selection) -> Self {
        let is_series = selection.is_series();
        Self {
            film_only_visible: !is_series,
            details_required: !is_series,
            series_hint_visible: is_series,
            next_enabled: selection.is_made(),
        }
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::derive(Selection::Unselected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_state() {
        let fields = FieldState::derive(Selection::Unselected);
        assert!(fields.film_only_visible);
        assert!(fields.details_required);
        assert!(!fields.series_hint_visible);
        assert!(!fields.next_enabled);
    }

    #[test]
    fn test_film_state() {
        let fields = FieldState::derive(Selection::Film);
        assert!(fields.film_only_visible);
        assert!(fields.details_required);
        assert!(!fields.series_hint_visible);
        assert!(fields.next_enabled);
    }

    #[test]
    fn test_series_state() {
        let fields = FieldState::derive(Selection::Series);
        assert!(!fields.film_only_visible);
        assert!(!fields.details_required);
        assert!(fields.series_hint_visible);
        assert!(fields.next_enabled);
    }

    #[test]
    fn test_required_iff_not_series() {
        for selection in [Selection::Unselected, Selection::Film, Selection::Series] {
            let fields = FieldState::derive(selection);
            assert_eq!(fields.details_required, !selection.is_series());
        }
    }
}
