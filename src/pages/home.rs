//! Landing page: hero copy plus the prediction form.

use leptos::prelude::*;

use crate::components::predictor_form::PredictorForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page page--home">
            <section class="hero">
                <h1>"MotoPrice"</h1>
                <p class="hero__tagline">
                    "Get a fair second-hand price estimate for your motorcycle in seconds."
                </p>
                <p class="hero__hint">
                    "Fill in the specifications and condition below. The estimate blends a "
                    "trained pricing model with market heuristics."
                </p>
            </section>
            <PredictorForm />
        </main>
    }
}
