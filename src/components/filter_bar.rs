//! Filter controls for the training-record grid.
//!
//! Every control routes through a `RecordsState` setter so the
//! filters-reset-paging invariant holds no matter which control changed.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::records::RecordsState;

/// Brand/model text filters, a single-category select, and multi-category
/// toggle chips.
#[component]
pub fn FilterBar() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Filter by brand"
                prop:value=move || records.with(|r| r.filter.brand.clone())
                on:input=move |ev| {
                    records.update(|r| r.set_brand_filter(event_target_value(&ev)));
                }
            />
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Filter by model"
                prop:value=move || records.with(|r| r.filter.model.clone())
                on:input=move |ev| {
                    records.update(|r| r.set_model_filter(event_target_value(&ev)));
                }
            />
            <select
                class="filter-bar__select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    records.update(|r| r.set_category_filter(Category::parse(&value)));
                }
            >
                <option value="" selected=move || records.with(|r| r.filter.category.is_none())>
                    "All categories"
                </option>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <option
                                value=category.as_str()
                                selected=move || {
                                    records.with(|r| r.filter.category == Some(category))
                                }
                            >
                                {category.as_str()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <div class="filter-bar__chips">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let active =
                            move || records.with(|r| r.filter.categories.contains(&category));
                        view! {
                            <button
                                class=move || {
                                    if active() { "chip chip--active" } else { "chip" }
                                }
                                on:click=move |_| records.update(|r| r.toggle_category(category))
                            >
                                {category.as_str()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
