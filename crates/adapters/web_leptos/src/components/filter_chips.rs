//! Filter chip bar: one button per tag, exactly one active.

use folio_domain::chip::ChipBar;
use folio_domain::tag::TagFilter;
use leptos::prelude::*;

/// The chip controls for the current [`ChipBar`].
#[component]
pub fn FilterChips(
    /// Chips and the active selection.
    #[prop(into)]
    chips: Signal<ChipBar>,
    /// Called with the filter of the clicked chip.
    on_select: Callback<TagFilter>,
) -> impl IntoView {
    view! {
        <div id="filter-chips" class="filter-chips">
            {move || {
                chips.with(|bar| {
                    bar.entries()
                        .map(|(chip, active)| {
                            let filter = chip.filter.clone();
                            let data_filter = filter.as_str().to_string();
                            let label = chip.label.clone();
                            view! {
                                <button
                                    class="chip"
                                    class:active=active
                                    data-filter=data_filter
                                    on:click=move |_| on_select.run(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
