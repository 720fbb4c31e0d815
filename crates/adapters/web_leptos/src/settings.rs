//! Build-time embedded site configuration.

use folio_app::config::Config;

const EMBEDDED: &str = include_str!("../folio.toml");

/// Parse the embedded `folio.toml`, falling back to defaults if it is invalid.
pub fn load() -> Config {
    Config::parse(EMBEDDED).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid embedded configuration, using defaults");
        Config::default()
    })
}
