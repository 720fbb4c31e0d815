//! Site configuration — a TOML document where every field has a default.
//!
//! The web adapter embeds `folio.toml` at build time and hands it to
//! [`Config::parse`]. An empty document yields [`Config::default`].

use folio_domain::card::CardStyle;
use folio_domain::reveal::RevealSettings;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project data resource.
    pub data: DataConfig,
    /// Theme persistence.
    pub theme: ThemeConfig,
    /// Card presentation.
    pub cards: CardStyle,
    /// Scroll reveal observer.
    pub reveal: RevealSettings,
}

/// Where the project list is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// URL of the JSON document, relative to the page.
    pub url: String,
}

/// Theme preference storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding the theme class.
    pub storage_key: String,
}

impl Config {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.data.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "data.url must not be empty".to_string(),
            ));
        }
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Validation(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.reveal.selector.trim().is_empty() {
            return Err(ConfigError::Validation(
                "reveal.selector must not be empty".to_string(),
            ));
        }
        if self.reveal.class.is_empty() || self.reveal.class.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "reveal.class must be a single class name, got {:?}",
                self.reveal.class
            )));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: "data/projects.json".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.data.url, "data/projects.json");
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.cards.stagger_step_ms, 100);
        assert_eq!(config.reveal.selector, ".projects-section");
    }

    #[test]
    fn should_parse_empty_document_as_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [data]
            url = 'api/projects.json'

            [theme]
            storage_key = 'portfolio-theme'

            [cards]
            stagger_step_ms = 50
            placeholder_base = 'https://placehold.co/400x200'

            [reveal]
            selector = '.reveal'
            threshold = 0.25
            class = 'visible'
        ";
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.data.url, "api/projects.json");
        assert_eq!(config.theme.storage_key, "portfolio-theme");
        assert_eq!(config.cards.stagger_step_ms, 50);
        assert_eq!(config.cards.placeholder_base, "https://placehold.co/400x200");
        assert_eq!(config.reveal.selector, ".reveal");
        assert!((config.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.reveal.class, "visible");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [cards]
            stagger_step_ms = 80
        ";
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.cards.stagger_step_ms, 80);
        assert_eq!(
            config.cards.placeholder_base,
            "https://via.placeholder.com/400x200"
        );
        assert_eq!(config.data.url, "data/projects.json");
    }

    #[test]
    fn should_reject_threshold_above_one() {
        let result = Config::parse("[reveal]\nthreshold = 1.5");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_data_url() {
        let result = Config::parse("[data]\nurl = ''");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_storage_key() {
        let result = Config::parse("[theme]\nstorage_key = ''");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_reveal_class_that_is_not_a_single_token() {
        for class in ["''", "'fade in'"] {
            let result = Config::parse(&format!("[reveal]\nclass = {class}"));
            assert!(matches!(result, Err(ConfigError::Validation(_))), "{class}");
        }
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = Config::parse("invalid {{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
