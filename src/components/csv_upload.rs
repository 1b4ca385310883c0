//! CSV bulk-upload control plus template download.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::records::RecordsState;

/// Template download button and file picker for `POST /api/training/bulk`.
///
/// Row-level validation errors come back inside a successful response and are
/// surfaced as a warning notice, distinct from a failed upload.
#[component]
pub fn CsvUpload() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let uploading = RwSignal::new(false);

    let on_template = move |_| {
        crate::util::csv_template::download_template();
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Reset so picking the same file again re-fires the change event.
            input.set_value("");
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_training_csv(&file).await {
                    Ok(resp) => {
                        let (partial, text) = crate::net::api::upload_summary(&resp);
                        notify.update(|n| {
                            if partial {
                                n.warning(text);
                            } else {
                                n.success(text);
                            }
                        });
                        records.update(RecordsState::invalidate);
                    }
                    Err(message) => {
                        notify.update(|n| {
                            n.error(message);
                        });
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, records, notify);
        }
    };

    view! {
        <div class="csv-upload">
            <button class="btn" on:click=on_template>
                "CSV Template"
            </button>
            <label class="btn csv-upload__picker">
                {move || if uploading.get() { "Uploading..." } else { "Upload CSV" }}
                <input
                    class="csv-upload__input"
                    type="file"
                    accept=".csv"
                    disabled=move || uploading.get()
                    on:change=on_file
                />
            </label>
        </div>
    }
}
