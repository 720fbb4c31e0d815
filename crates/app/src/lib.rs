//! # folio-app
//!
//! Application layer — use-cases, **port definitions** (traits) and configuration.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProjectSource` — load the ordered project list
//!   - `PreferenceStore` — read/write one persisted string preference
//! - Define **driving/inbound** use-case structs:
//!   - `ThemeService` — load and toggle the persisted theme
//!   - `PortfolioService` — fetch projects and produce the bootstrap outcome
//! - Parse and validate the site configuration
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `toml`/`serde` for configuration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;
