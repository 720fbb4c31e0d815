//! Scroll reveal — a one-way `Hidden → Revealed` transition per section.

use serde::{Deserialize, Serialize};

/// Observer settings for revealing sections on scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// CSS selector of the observed sections.
    pub selector: String,
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// Class added once the element has been revealed.
    pub class: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            selector: ".projects-section".to_string(),
            threshold: 0.1,
            class: "fade-in".to_string(),
        }
    }
}

/// Visibility state of one observed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Terminal.
    Revealed,
}

impl RevealState {
    /// Next state after an intersection notification.
    #[must_use]
    pub fn on_intersection(self, intersecting: bool) -> Self {
        match self {
            Self::Hidden if intersecting => Self::Revealed,
            other => other,
        }
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}
