//! Consumer prediction form.
//!
//! DESIGN
//! ======
//! All fields live in the shared `PredictState` so the form survives
//! navigation back from the result page. Submit validates via
//! `build_request`, fires `/predict`, persists the outcome under a fresh
//! UUID, and navigates to `/result/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Category, Transmission};
use crate::state::notify::NotifyState;
use crate::state::predict::{
    COMMON_ISSUES, MILEAGE_MAX, OTHER_ISSUE, OWNER_OPTIONS, PredictState, SELLER_TYPES,
};

/// The full estimate form, from motorcycle identity down to known issues.
#[component]
pub fn PredictorForm() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if predict.with_untracked(|p| p.calculating) {
            return;
        }
        let request = match predict.with_untracked(PredictState::build_request) {
            Ok(request) => request,
            Err(message) => {
                notify.update(|n| {
                    n.warning(message);
                });
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            predict.update(|p| p.calculating = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::predict_price(&request).await {
                    Ok(result) => {
                        let id = uuid::Uuid::new_v4().to_string();
                        let stored = crate::net::types::StoredPrediction::from_parts(
                            id.clone(),
                            &request,
                            result,
                        );
                        crate::util::storage::save_json(
                            &crate::state::predict::prediction_key(&id),
                            &stored,
                        );
                        predict.update(|p| p.calculating = false);
                        navigate(&format!("/result/{id}"), Default::default());
                    }
                    Err(message) => {
                        predict.update(|p| p.calculating = false);
                        notify.update(|n| {
                            n.error(message);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <form class="predictor" on:submit=on_submit>
            <fieldset class="predictor__group">
                <legend>"Motorcycle"</legend>
                <label class="predictor__field">
                    "Brand"
                    <input
                        type="text"
                        prop:value=move || predict.with(|p| p.brand.clone())
                        on:input=move |ev| {
                            predict.update(|p| p.brand = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="predictor__field">
                    "Model"
                    <input
                        type="text"
                        prop:value=move || predict.with(|p| p.model.clone())
                        on:input=move |ev| {
                            predict.update(|p| p.model = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="predictor__field">
                    "Category"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        predict.update(|p| p.category = Category::parse(&value));
                    }>
                        <option value="" selected=move || predict.with(|p| p.category.is_none())>
                            "Select category"
                        </option>
                        {Category::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || {
                                            predict.with(|p| p.category == Some(category))
                                        }
                                    >
                                        {category.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="predictor__field">
                    "Displacement (cc)"
                    <input
                        type="number"
                        prop:value=move || predict.with(|p| p.displacement.clone())
                        on:input=move |ev| {
                            predict.update(|p| p.displacement = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="predictor__field">
                    "Transmission"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        predict.update(|p| p.transmission = Transmission::parse(&value));
                    }>
                        <option
                            value=""
                            selected=move || predict.with(|p| p.transmission.is_none())
                        >
                            "Select transmission"
                        </option>
                        {Transmission::ALL
                            .into_iter()
                            .map(|transmission| {
                                view! {
                                    <option
                                        value=transmission.as_str()
                                        selected=move || {
                                            predict.with(|p| p.transmission == Some(transmission))
                                        }
                                    >
                                        {transmission.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="predictor__field">
                    "Production years"
                    <input
                        type="text"
                        placeholder="2018-2024"
                        prop:value=move || predict.with(|p| p.year_range.clone())
                        on:input=move |ev| {
                            predict.update(|p| p.year_range = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="predictor__field">
                    "Market price range (₱)"
                    <div class="predictor__pair">
                        <input
                            type="number"
                            placeholder="Min"
                            prop:value=move || predict.with(|p| p.price_min.clone())
                            on:input=move |ev| {
                                predict.update(|p| p.price_min = event_target_value(&ev));
                            }
                        />
                        <input
                            type="number"
                            placeholder="Max"
                            prop:value=move || predict.with(|p| p.price_max.clone())
                            on:input=move |ev| {
                                predict.update(|p| p.price_max = event_target_value(&ev));
                            }
                        />
                    </div>
                </label>
            </fieldset>

            <fieldset class="predictor__group">
                <legend>"Condition"</legend>
                <label class="predictor__field">
                    "Year acquired"
                    <input
                        type="number"
                        prop:value=move || predict.with(|p| p.year.clone())
                        on:input=move |ev| {
                            predict.update(|p| p.year = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="predictor__field">
                    {move || {
                        format!(
                            "Mileage: {}",
                            crate::util::format::format_km(predict.with(|p| p.mileage)),
                        )
                    }}
                    <input
                        type="range"
                        min="0"
                        max=MILEAGE_MAX.to_string()
                        step="500"
                        prop:value=move || predict.with(|p| p.mileage.to_string())
                        on:input=move |ev| {
                            if let Ok(km) = event_target_value(&ev).parse::<u32>() {
                                predict.update(|p| p.mileage = km);
                            }
                        }
                    />
                </label>
                <div class="predictor__field">
                    "Seller type"
                    <div class="predictor__options">
                        {SELLER_TYPES
                            .iter()
                            .map(|seller| {
                                let seller = *seller;
                                let active =
                                    move || predict.with(|p| p.seller_type == seller);
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if active() { "chip chip--active" } else { "chip" }
                                        }
                                        on:click=move |_| {
                                            predict.update(|p| p.seller_type = seller.to_owned());
                                        }
                                    >
                                        {seller}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="predictor__field">
                    "Previous owners"
                    <div class="predictor__options">
                        {OWNER_OPTIONS
                            .iter()
                            .map(|owner| {
                                let owner = *owner;
                                let active = move || predict.with(|p| p.owner == owner);
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if active() { "chip chip--active" } else { "chip" }
                                        }
                                        on:click=move |_| {
                                            predict.update(|p| p.owner = owner.to_owned());
                                        }
                                    >
                                        {owner}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="predictor__field">
                    "Known issues"
                    <div class="predictor__options">
                        {COMMON_ISSUES
                            .iter()
                            .chain(std::iter::once(&OTHER_ISSUE))
                            .map(|issue| {
                                let issue = *issue;
                                let active =
                                    move || predict.with(|p| p.issue_selected(issue));
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if active() { "chip chip--active" } else { "chip" }
                                        }
                                        on:click=move |_| {
                                            predict.update(|p| p.toggle_issue(issue));
                                        }
                                    >
                                        {issue}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    {move || {
                        predict
                            .with(|p| p.issue_selected(OTHER_ISSUE))
                            .then(|| {
                                view! {
                                    <input
                                        type="text"
                                        placeholder="Describe the issue"
                                        prop:value=move || {
                                            predict.with(|p| p.other_issues.clone())
                                        }
                                        on:input=move |ev| {
                                            predict.update(|p| {
                                                p.other_issues = event_target_value(&ev);
                                            });
                                        }
                                    />
                                }
                            })
                    }}
                </div>
            </fieldset>

            <div class="predictor__actions">
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| predict.update(PredictState::clear)
                >
                    "Clear"
                </button>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || predict.with(|p| p.calculating)
                >
                    {move || {
                        if predict.with(|p| p.calculating) {
                            "Calculating..."
                        } else {
                            "Get Estimate"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
