//! Project card component rendering one [`CardView`].

use folio_domain::card::{CardView, ImageView};
use leptos::prelude::*;
use web_sys::HtmlImageElement;

/// A single project card: image, tag badges, title, description and links.
#[component]
pub fn ProjectCard(
    /// The card to display.
    card: CardView,
) -> impl IntoView {
    let CardView {
        animation_delay,
        image,
        tags,
        title,
        description,
        links,
        ..
    } = card;

    let ImageView { src, alt, .. } = image.clone();

    view! {
        <div class="project-card fade-in" style=format!("animation-delay: {animation_delay}")>
            <div class="project-img">
                <img
                    src=src
                    alt=alt
                    on:error=move |ev| {
                        let img = event_target::<HtmlImageElement>(&ev);
                        if let Some(fallback) = image.fallback_for(&img.src()) {
                            img.set_src(fallback);
                        }
                    }
                />
            </div>
            <div class="project-content">
                <div class="project-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
                <h3>{title}</h3>
                <p>{description}</p>
                <div class="project-links">
                    {links.into_iter().map(|link| {
                        view! {
                            <a href=link.href target=link.target rel=link.rel class="link-btn">
                                {link.label}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
