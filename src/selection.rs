/// Title type selection
///
/// Models the exclusive film/series choice that gates the wizard.

/// Selected title type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No option activated yet
    #[default]
    Unselected,

    /// Standalone film
    Film,

    /// Series with episodes
    Series,
}

impl Selection {
    /// Parse the wire value carried by an option input.
    ///
    /// `"1"` selects series; every other value selects film.
    pub fn from_value(value: &str) -> Self {
        if value == "1" {
            Selection::Series
        } else {
            Selection::Film
        }
    }

    /// Wire value of the matching option input, if any option is selected
    pub fn value(&self) -> Option<&'static str> {
        match self {
            Selection::Unselected => None,
            Selection::Film => Some("0"),
            Selection::Series => Some("1"),
        }
    }

    /// Check if the series option is selected
    pub fn is_series(&self) -> bool {
        matches!(self, Selection::Series)
    }

    /// Check if any option is selected
    pub fn is_made(&self) -> bool {
        !matches!(self, Selection::Unselected)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Selection::Unselected => "unselected",
            Selection::Film => "film",
            Selection::Series => "series",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(Selection::from_value("1"), Selection::Series);
        assert_eq!(Selection::from_value("0"), Selection::Film);
        // Anything that is not the series value counts as film
        assert_eq!(Selection::from_value("2"), Selection::Film);
        assert_eq!(Selection::from_value(""), Selection::Film);
    }

    #[test]
    fn test_value_round_trip() {
        assert_eq!(Selection::Film.value(), Some("0"));
        assert_eq!(Selection::Series.value(), Some("1"));
        assert_eq!(Selection::Unselected.value(), None);
    }

    #[test]
    fn test_is_series() {
        assert!(Selection::Series.is_series());
        assert!(!Selection::Film.is_series());
        assert!(!Selection::Unselected.is_series());
    }

    #[test]
    fn test_is_made() {
        assert!(Selection::Film.is_made());
        assert!(Selection::Series.is_made());
        assert!(!Selection::Unselected.is_made());
    }
}
