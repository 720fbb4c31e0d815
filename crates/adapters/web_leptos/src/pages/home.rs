use folio_app::config::Config;
use folio_app::services::portfolio_service::{LoadOutcome, PortfolioService};
use folio_domain::card::CardStyle;
use folio_domain::portfolio::Portfolio;
use folio_domain::tag::TagFilter;
use leptos::prelude::*;

use crate::api::HttpProjectSource;
use crate::components::{FilterChips, ProjectGrid};
use crate::reveal::observe_sections;

/// Projects page: fetches the portfolio once, then renders chips and cards.
///
/// On failure the project container shows a single error message and no
/// chips are built.
#[component]
pub fn Home(config: Config) -> impl IntoView {
    let service = PortfolioService::new(HttpProjectSource::new(config.data.url.clone()));
    let outcome = LocalResource::new(move || {
        let service = service.clone();
        async move { service.load().await }
    });

    let reveal = config.reveal;
    Effect::new(move |_| {
        // Lives as long as this page; dropping it disconnects the observer.
        let _ = StoredValue::new_local(observe_sections(&reveal));
    });

    let style = config.cards;

    view! {
        <section class="projects-section" id="projects">
            <h2>"Projects"</h2>
            <Suspense fallback=move || view! {
                <div id="filter-chips" class="filter-chips"></div>
                <div id="project-container" class="project-grid">
                    <p class="loading">
                        <span class="spinner"></span>
                        "Loading projects\u{2026}"
                    </p>
                </div>
            }>
                {move || {
                    let style = style.clone();
                    Suspend::new(async move {
                        match outcome.await {
                            LoadOutcome::Ready(portfolio) => view! {
                                <PortfolioView portfolio style/>
                            }
                            .into_any(),
                            LoadOutcome::Failed { message } => view! {
                                <div id="filter-chips" class="filter-chips"></div>
                                <div id="project-container" class="project-grid">
                                    <p class="error">{message}</p>
                                </div>
                            }
                            .into_any(),
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

/// Chips and cards for a loaded portfolio; selecting a chip re-renders the cards.
#[component]
fn PortfolioView(portfolio: Portfolio, style: CardStyle) -> impl IntoView {
    let (portfolio, set_portfolio) = signal(portfolio);

    let chips = Signal::derive(move || portfolio.with(|p| p.chips().clone()));
    let cards = Signal::derive(move || portfolio.with(|p| p.cards(&style)));

    let on_select = Callback::new(move |filter: TagFilter| {
        set_portfolio.update(|p| {
            if !p.select(&filter) {
                tracing::debug!(%filter, "ignoring unknown filter");
            }
        });
    });

    view! {
        <FilterChips chips on_select/>
        <ProjectGrid cards/>
    }
}
