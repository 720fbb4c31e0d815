//! Preference store port — origin-scoped key/value string storage.

use crate::error::StorageError;

/// Durable string storage surviving page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage cannot be reached or read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage cannot be reached or written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
