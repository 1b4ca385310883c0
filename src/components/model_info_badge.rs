//! Badge summarizing the currently trained model.
//!
//! Shows a loading placeholder, an unavailable marker on fetch failure, or
//! the model name with metrics and top features.

use leptos::prelude::*;

use crate::state::model::ModelState;
use crate::util::format::date_only;

/// Model metadata badge for the admin dashboard header.
#[component]
pub fn ModelInfoBadge() -> impl IntoView {
    let model = expect_context::<RwSignal<ModelState>>();

    view! {
        <div class="model-badge">
            {move || {
                let state = model.get();
                if state.loading {
                    return view! { <span class="model-badge__pill">"Loading model..."</span> }
                        .into_any();
                }
                let Some(info) = state.info else {
                    return view! {
                        <span class="model-badge__pill model-badge__pill--error">
                            "Model info unavailable"
                        </span>
                    }
                    .into_any();
                };
                view! {
                    <details class="model-badge__details">
                        <summary class="model-badge__pill model-badge__pill--ok">
                            "ML Model: " {info.model.name.clone()}
                        </summary>
                        <div class="model-badge__body">
                            <p>
                                {info.model.version.clone()} " · trained "
                                {date_only(&info.model.training_date).to_owned()}
                            </p>
                            <p>
                                "MAE " {format!("{:.2}", info.performance.mae)}
                                " · RMSE " {format!("{:.2}", info.performance.rmse)}
                                " · R² " {format!("{:.4}", info.performance.r2_score)}
                            </p>
                            <p>
                                {info.specs.features_count} " features, "
                                {info.specs.encoders_count} " encoders"
                            </p>
                            <ol class="model-badge__features">
                                {info
                                    .specs
                                    .top_features
                                    .iter()
                                    .map(|feature| view! { <li>{feature.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ol>
                        </div>
                    </details>
                }
                .into_any()
            }}
        </div>
    }
}
