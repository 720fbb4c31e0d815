//! Dark/light theme toggle button using `localStorage` for persistence.

use folio_app::services::theme_service::ThemeService;
use folio_domain::theme::Theme;
use leptos::prelude::*;

use crate::storage::LocalPreferenceStore;

/// Mark the document root with the theme class, dropping the other one.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    if let Err(err) = classes
        .remove_1(theme.toggled().class())
        .and_then(|()| classes.add_1(theme.class()))
    {
        tracing::warn!(error = ?err, %theme, "failed to apply theme class");
    }
}

/// A toggle button that switches between dark and light themes.
///
/// Reads the persisted theme and applies it as soon as the component is
/// created. Each click toggles and persists the new preference.
#[component]
pub fn ThemeToggle(
    /// Storage key holding the theme preference.
    #[prop(into)]
    storage_key: String,
) -> impl IntoView {
    let service = ThemeService::load(LocalPreferenceStore, &storage_key);
    apply_theme(service.current());

    let (theme, set_theme) = signal(service.current());
    let service = StoredValue::new(service);

    let toggle = move |_| {
        service.update_value(|svc| {
            let next = svc.toggle();
            apply_theme(next);
            set_theme.set(next);
        });
    };

    let label = move || theme.get().icon();

    view! {
        <button id="theme-toggle" class="theme-toggle" on:click=toggle title="Toggle theme">
            {label}
        </button>
    }
}
