//! Modal dialog for editing a single training record.

use leptos::prelude::*;

use crate::net::types::TrainingRecord;
use crate::state::notify::NotifyState;
use crate::state::records::RecordsState;

fn text_value(
    record: RwSignal<Option<TrainingRecord>>,
    get: fn(&TrainingRecord) -> String,
) -> String {
    record.with(|r| r.as_ref().map(get).unwrap_or_default())
}

fn set_field(
    record: RwSignal<Option<TrainingRecord>>,
    set: fn(&mut TrainingRecord, String),
    value: String,
) {
    record.update(|r| {
        if let Some(r) = r.as_mut() {
            set(r, value);
        }
    });
}

/// Edit dialog over a draft record. `record` holds `None` when closed; the
/// caller opens it by setting a clone of the row to edit. Saving PUTs the
/// draft and invalidates the record list on success.
#[component]
pub fn RecordEditDialog(record: RwSignal<Option<TrainingRecord>>) -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let saving = RwSignal::new(false);

    let on_close = move |_| record.set(None);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let Some(draft) = record.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_training_record(&draft).await {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Record updated".to_owned());
                        });
                        records.update(RecordsState::invalidate);
                        record.set(None);
                    }
                    Err(message) => {
                        notify.update(|n| {
                            n.error(message);
                        });
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, records, notify);
        }
    };

    view! {
        {move || {
            record
                .with(Option::is_some)
                .then(|| {
                    view! {
                        <div class="dialog-backdrop" on:click=on_close>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2 class="dialog__title">"Edit Record"</h2>
                                <label class="dialog__field">
                                    "Brand"
                                    <input
                                        type="text"
                                        prop:value=move || text_value(record, |r| r.brand.clone())
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| r.brand = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Model"
                                    <input
                                        type="text"
                                        prop:value=move || text_value(record, |r| r.model.clone())
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| r.model = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Category"
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            text_value(record, |r| r.specifications.category.clone())
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| r.specifications.category = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Displacement (cc)"
                                    <input
                                        type="number"
                                        prop:value=move || {
                                            text_value(
                                                record,
                                                |r| r.specifications.displacement.to_string(),
                                            )
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| {
                                                    r.specifications.displacement = v
                                                        .parse()
                                                        .unwrap_or(r.specifications.displacement);
                                                },
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Transmission"
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            text_value(
                                                record,
                                                |r| r.specifications.transmission.clone(),
                                            )
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| r.specifications.transmission = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Year"
                                    <input
                                        type="number"
                                        prop:value=move || {
                                            text_value(record, |r| r.condition.year.to_string())
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| {
                                                    r.condition.year =
                                                        v.parse().unwrap_or(r.condition.year);
                                                },
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Mileage (km)"
                                    <input
                                        type="number"
                                        prop:value=move || {
                                            text_value(record, |r| r.condition.mileage.to_string())
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| {
                                                    r.condition.mileage =
                                                        v.parse().unwrap_or(r.condition.mileage);
                                                },
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Known issues"
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            text_value(record, |r| r.condition.known_issues.clone())
                                        }
                                        on:input=move |ev| {
                                            set_field(
                                                record,
                                                |r, v| r.condition.known_issues = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                </label>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=on_close>
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || saving.get()
                                        on:click=on_save
                                    >
                                        {move || if saving.get() { "Saving..." } else { "Save" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
