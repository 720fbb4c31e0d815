use leptos::prelude::*;

pub mod api;
mod components;
mod pages;
pub mod reveal;
pub mod settings;
pub mod storage;

use components::ThemeToggle;
use pages::Home;

/// Root application component.
///
/// The theme toggle is created first so the persisted theme is applied
/// before the project fetch starts.
#[component]
pub fn App() -> impl IntoView {
    let config = settings::load();

    view! {
        <header class="site-header">
            <h1>"Portfolio"</h1>
            <ThemeToggle storage_key=config.theme.storage_key.clone()/>
        </header>
        <main>
            <Home config/>
        </main>
    }
}
