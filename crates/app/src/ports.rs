//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Futures returned by ports are not required to be `Send`: the only runtime
//! is the single-threaded browser event loop.

pub mod preference_store;
pub mod project_source;

pub use preference_store::PreferenceStore;
pub use project_source::ProjectSource;
