//! # folio-domain
//!
//! Pure domain model for the folio portfolio front end.
//!
//! ## Responsibilities
//! - Define **project records** as supplied by the data source
//! - Define **tag filters** and the first-seen tag derivation
//! - Define the **chip bar** (single-select filter controls)
//! - Map records to declarative **card views** (the renderer)
//! - Define the **theme** and **reveal** state transitions
//! - Own the loaded **portfolio** state (full list plus selection)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod card;
pub mod chip;
pub mod portfolio;
pub mod project;
pub mod reveal;
pub mod tag;
pub mod theme;
