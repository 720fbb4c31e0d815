//! Theme service — load and toggle the persisted visual mode.

use folio_domain::theme::Theme;

use crate::ports::PreferenceStore;

/// Application service owning the current theme and its persistence.
///
/// Storage failures never block a theme change: the in-session mode still
/// flips, the failure is only logged.
#[derive(Debug, Clone)]
pub struct ThemeService<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Read the persisted preference stored under `key`.
    ///
    /// Falls back to [`Theme::Dark`] when the value is absent, unreadable,
    /// or not one of the known class names.
    #[tracing::instrument(skip(store))]
    pub fn load(store: S, key: &str) -> Self {
        let current = match store.get(key) {
            Ok(Some(value)) => Theme::from_stored(&value).unwrap_or_else(|| {
                tracing::warn!(%value, "ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unreadable, using default");
                Theme::default()
            }
        };
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    /// The theme currently applied.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip between dark and light, persist the new value and return it.
    #[tracing::instrument(skip(self), fields(from = %self.current))]
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.set(&self.key, self.current.class()) {
            tracing::warn!(error = %err, "theme preference not persisted");
        }
        self.current
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPreferenceStore {
        values: Mutex<HashMap<String, String>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl InMemoryPreferenceStore {
        fn with_value(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }
    }

    impl PreferenceStore for InMemoryPreferenceStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable);
            }
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const KEY: &str = "theme";

    #[test]
    fn should_default_to_dark_when_nothing_stored() {
        let svc = ThemeService::load(InMemoryPreferenceStore::default(), KEY);
        assert_eq!(svc.current(), Theme::Dark);
        assert_eq!(svc.store().value(KEY), None);
    }

    #[test]
    fn should_restore_stored_light_theme() {
        let store = InMemoryPreferenceStore::with_value(KEY, "light-theme");
        let svc = ThemeService::load(store, KEY);
        assert_eq!(svc.current(), Theme::Light);
    }

    #[test]
    fn should_default_to_dark_when_stored_value_unknown() {
        let store = InMemoryPreferenceStore::with_value(KEY, "solarized");
        let svc = ThemeService::load(store, KEY);
        assert_eq!(svc.current(), Theme::Dark);
    }

    #[test]
    fn should_persist_each_toggle() {
        let mut svc = ThemeService::load(InMemoryPreferenceStore::default(), KEY);
        assert_eq!(svc.toggle(), Theme::Light);
        assert_eq!(svc.store().value(KEY).as_deref(), Some("light-theme"));
        assert_eq!(svc.toggle(), Theme::Dark);
        assert_eq!(svc.store().value(KEY).as_deref(), Some("dark-theme"));
    }

    #[test]
    fn should_return_to_original_after_two_toggles() {
        let store = InMemoryPreferenceStore::with_value(KEY, "light-theme");
        let mut svc = ThemeService::load(store, KEY);
        svc.toggle();
        svc.toggle();
        assert_eq!(svc.current(), Theme::Light);
        assert_eq!(svc.store().value(KEY).as_deref(), Some("light-theme"));
    }

    #[test]
    fn should_default_to_dark_when_storage_unreadable() {
        let store = InMemoryPreferenceStore {
            fail_reads: true,
            ..Default::default()
        };
        let svc = ThemeService::load(store, KEY);
        assert_eq!(svc.current(), Theme::Dark);
    }

    #[test]
    fn should_still_toggle_in_session_when_write_fails() {
        let store = InMemoryPreferenceStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut svc = ThemeService::load(store, KEY);
        assert_eq!(svc.toggle(), Theme::Light);
        assert_eq!(svc.current(), Theme::Light);
        assert_eq!(svc.store().value(KEY), None);
    }
}
