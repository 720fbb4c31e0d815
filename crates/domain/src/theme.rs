//! Theme — the two global visual presentation modes.

/// Visual mode applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// CSS class marking the document root, also the persisted value.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    /// Parse a persisted value. Only the exact class names are recognized.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark-theme" => Some(Self::Dark),
            "light-theme" => Some(Self::Light),
            _ => None,
        }
    }

    /// Icon shown on the toggle button for this mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{263E}",
            Self::Light => "\u{2600}",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn should_return_to_original_after_two_toggles() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn should_roundtrip_stored_class() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(theme.class()), Some(theme));
        }
    }

    #[test]
    fn should_reject_unknown_stored_value() {
        assert_eq!(Theme::from_stored("dark"), None);
        assert_eq!(Theme::from_stored(""), None);
        assert_eq!(Theme::from_stored("Light-Theme"), None);
    }
}
