//! Preference store backed by the browser's `localStorage`.

use folio_app::error::StorageError;
use folio_app::ports::PreferenceStore;

/// Origin-scoped `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}
