//! Result page: renders a stored prediction addressed by `/result/{id}`.
//!
//! The prediction itself never travels through the URL; the form persists it
//! under `prediction_{id}` before navigating here. A missing or unparseable
//! payload redirects back to the form rather than rendering a husk.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::StoredPrediction;
use crate::util::format::{format_km, format_peso};

/// Splits the backend's description into paragraphs. The API double-escapes
/// newlines, so literal `\n` sequences are unescaped before splitting on
/// blank lines.
#[must_use]
pub fn description_paragraphs(raw: &str) -> Vec<String> {
    raw.replace("\\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

#[component]
pub fn ResultPage() -> impl IntoView {
    let params = use_params_map();
    let stored = RwSignal::new(None::<StoredPrediction>);

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move |_| {
            let Some(id) = params.with(|p| p.get("id")) else {
                navigate("/", Default::default());
                return;
            };
            let key = crate::state::predict::prediction_key(&id);
            match crate::util::storage::load_json::<StoredPrediction>(&key) {
                Some(prediction) => stored.set(Some(prediction)),
                None => navigate("/", Default::default()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    view! {
        <main class="page page--result">
            {move || {
                let Some(prediction) = stored.get() else {
                    return view! { <p class="result__status">"Loading estimate..."</p> }
                        .into_any();
                };
                let price = format_peso(prediction.result.price_predicted);
                let breakdown = [
                    ("Model price", prediction.result.ml_price),
                    ("Market analysis", prediction.result.gpt_price),
                    ("Heuristic price", prediction.result.heuristic_price),
                ];
                view! {
                    <article class="result">
                        <header class="result__header">
                            <h1>{prediction.brand.clone()} " " {prediction.model.clone()}</h1>
                            <p class="result__price">{price}</p>
                            <p class="result__confidence">
                                "Confidence: " {prediction.result.confidence.clone()}
                            </p>
                        </header>
                        <ul class="result__breakdown">
                            {breakdown
                                .into_iter()
                                .filter_map(|(label, value)| {
                                    value
                                        .map(|v| {
                                            view! {
                                                <li>{label} ": " {format_peso(v)}</li>
                                            }
                                        })
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <section class="result__summary">
                            <p>
                                {prediction.specifications.category.clone()} " · "
                                {prediction.specifications.displacement} " cc · "
                                {prediction.specifications.transmission.clone()}
                            </p>
                            <p>
                                {prediction.condition.year} " · "
                                {format_km(prediction.condition.mileage)} " · "
                                {prediction.condition.seller_type.clone()} " seller"
                            </p>
                        </section>
                        <section class="result__description">
                            {description_paragraphs(&prediction.result.description)
                                .into_iter()
                                .map(|paragraph| view! { <p>{paragraph}</p> })
                                .collect::<Vec<_>>()}
                        </section>
                        <a class="btn" href="/">
                            "Estimate another"
                        </a>
                    </article>
                }
                .into_any()
            }}
        </main>
    }
}
