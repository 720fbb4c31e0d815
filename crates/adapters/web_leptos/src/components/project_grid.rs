//! Container holding the rendered project cards.

use folio_domain::card::CardView;
use leptos::prelude::*;

use super::ProjectCard;

/// The project container. Its content is rebuilt wholesale whenever `cards`
/// changes.
#[component]
pub fn ProjectGrid(
    /// Cards to display, in order.
    #[prop(into)]
    cards: Signal<Vec<CardView>>,
) -> impl IntoView {
    view! {
        <div id="project-container" class="project-grid">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <ProjectCard card/> })
                    .collect_view()
            }}
        </div>
    }
}
