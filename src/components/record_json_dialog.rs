//! Read-only dialog showing a training record as raw JSON.

#[cfg(test)]
#[path = "record_json_dialog_test.rs"]
mod record_json_dialog_test;

use leptos::prelude::*;

use crate::net::types::TrainingRecord;

/// Pretty-printed wire-shape JSON for `record`.
#[must_use]
pub fn record_json(record: &TrainingRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_owned())
}

/// JSON inspection dialog. `record` holds `None` when closed; the caller
/// opens it by setting a clone of the row to inspect.
#[component]
pub fn RecordJsonDialog(record: RwSignal<Option<TrainingRecord>>) -> impl IntoView {
    let on_close = move |_| record.set(None);

    view! {
        {move || {
            record
                .get()
                .map(|r| {
                    view! {
                        <div class="dialog-backdrop" on:click=on_close>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2 class="dialog__title">
                                    {r.brand.clone()} " " {r.model.clone()}
                                </h2>
                                <pre class="dialog__json">{record_json(&r)}</pre>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=on_close>
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
