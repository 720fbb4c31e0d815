//! Scroll reveal driven by an `IntersectionObserver`.
//!
//! Every element matching the configured selector gets the reveal class the
//! first time enough of it scrolls into view, and is then unobserved.

use folio_domain::reveal::{RevealSettings, RevealState};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Guard that disconnects the observer on drop (if one was created).
pub struct ScrollReveal {
    observer: Option<IntersectionObserver>,
    _on_intersect: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn reveal_state(element: &Element, class: &str) -> RevealState {
    if element.class_list().contains(class) {
        RevealState::Revealed
    } else {
        RevealState::Hidden
    }
}

fn sections(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::warn!(%selector, error = ?err, "invalid reveal selector");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Start observing every section matching `settings.selector`.
///
/// If the observer cannot be created, every section is revealed at once and
/// the returned guard is inert.
pub fn observe_sections(settings: &RevealSettings) -> ScrollReveal {
    let targets = sections(&settings.selector);
    let class = settings.class.clone();

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let before = reveal_state(&target, &class);
                let after = before.on_intersection(entry.is_intersecting());
                if after.is_revealed() && !before.is_revealed() {
                    if let Err(err) = target.class_list().add_1(&class) {
                        tracing::warn!(error = ?err, %class, "failed to reveal section");
                    }
                }
                if after.is_revealed() {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));

    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::warn!(error = ?err, "IntersectionObserver unavailable, revealing sections immediately");
            for target in &targets {
                if let Err(err) = target.class_list().add_1(&settings.class) {
                    tracing::warn!(error = ?err, class = %settings.class, "failed to reveal section");
                }
            }
            return ScrollReveal {
                observer: None,
                _on_intersect: None,
            };
        }
    };

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), "observing sections for reveal");

    ScrollReveal {
        observer: Some(observer),
        _on_intersect: Some(on_intersect),
    }
}
