//! Paginated training-record grid with row selection and bulk delete.
//!
//! DESIGN
//! ======
//! The table renders whatever page `RecordsState` currently holds; it never
//! fetches on its own. Mutations (delete, bulk delete) go through the REST
//! helpers and then invalidate the controller so the owning page refetches.

use leptos::prelude::*;

use crate::net::types::TrainingRecord;
use crate::state::notify::NotifyState;
use crate::state::records::{RecordsState, SortKey};
use crate::util::columns::record_columns;

const PAGE_SIZES: [u64; 3] = [10, 25, 50];

fn delete_one(records: RwSignal<RecordsState>, notify: RwSignal<NotifyState>, id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_training_record(id).await {
                Ok(()) => {
                    notify.update(|n| {
                        n.success("Record deleted".to_owned());
                    });
                    records.update(|r| {
                        r.deselect(id);
                        r.invalidate();
                    });
                }
                Err(message) => {
                    notify.update(|n| {
                        n.error(message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (records, notify, id);
    }
}

fn delete_selected(records: RwSignal<RecordsState>, notify: RwSignal<NotifyState>) {
    let ids = records.with_untracked(RecordsState::selected_ids);
    if ids.is_empty() {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::bulk_delete_training(ids).await {
                Ok(resp) => {
                    let text = crate::state::records::bulk_delete_summary(&resp);
                    notify.update(|n| {
                        if resp.is_partial() {
                            n.warning(text);
                        } else {
                            n.success(text);
                        }
                    });
                    records.update(|r| {
                        r.clear_selection();
                        r.invalidate();
                    });
                }
                Err(message) => {
                    notify.update(|n| {
                        n.error(message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (records, notify, ids);
    }
}

/// Record grid plus its pagination footer.
///
/// `on_edit` and `on_view` receive a clone of the row's record; the dialogs
/// own the copy from there, so edits never touch the table until the refetch
/// lands. Header clicks cycle a client-side sort over the cached page.
#[component]
pub fn RecordTable(
    on_edit: Callback<TrainingRecord>,
    on_view: Callback<TrainingRecord>,
) -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let columns = record_columns();

    view! {
        <div class="record-table">
            {move || {
                let state = records.get();
                if state.loading {
                    return view! { <p class="record-table__status">"Loading records..."</p> }
                        .into_any();
                }
                if let Some(message) = state.error.clone() {
                    return view! {
                        <p class="record-table__status record-table__status--error">{message}</p>
                    }
                    .into_any();
                }
                if state.records.is_empty() {
                    return view! { <p class="record-table__status">"No records found."</p> }
                        .into_any();
                }
                view! {
                    <table class=move || {
                        if records.with(|r| r.fetching) {
                            "record-table__grid record-table__grid--stale"
                        } else {
                            "record-table__grid"
                        }
                    }>
                        <thead>
                            <tr>
                                <th>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            records.with(RecordsState::page_fully_selected)
                                        }
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            records.update(|r| r.set_page_selected(checked));
                                        }
                                    />
                                </th>
                                {columns
                                    .iter()
                                    .map(|c| {
                                        let Some(key) = SortKey::parse(c.key) else {
                                            return view! { <th>{c.header}</th> }.into_any();
                                        };
                                        let indicator = move || {
                                            records.with(|r| {
                                                if r.sort_key != Some(key) {
                                                    ""
                                                } else if r.sort_descending {
                                                    " ▼"
                                                } else {
                                                    " ▲"
                                                }
                                            })
                                        };
                                        view! {
                                            <th>
                                                <button
                                                    class="record-table__sort"
                                                    on:click=move |_| {
                                                        records.update(|r| r.toggle_sort(key));
                                                    }
                                                >
                                                    {c.header} {indicator}
                                                </button>
                                            </th>
                                        }
                                        .into_any()
                                    })
                                    .collect::<Vec<_>>()}
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {state
                                .sorted_records()
                                .into_iter()
                                .map(|record| {
                                    let cells = columns
                                        .iter()
                                        .map(|c| view! { <td>{(c.render)(&record)}</td> })
                                        .collect::<Vec<_>>();
                                    let id = record.id;
                                    let row = record.clone();
                                    let row_json = record.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    disabled=id.is_none()
                                                    prop:checked=move || {
                                                        id.is_some_and(|id| {
                                                            records.with(|r| r.selected.contains(&id))
                                                        })
                                                    }
                                                    on:change=move |_| {
                                                        if let Some(id) = id {
                                                            records.update(|r| r.toggle_selected(id));
                                                        }
                                                    }
                                                />
                                            </td>
                                            {cells}
                                            <td class="record-table__actions">
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| on_edit.run(row.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| on_view.run(row_json.clone())
                                                >
                                                    "JSON"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    disabled=id.is_none()
                                                    on:click=move |_| {
                                                        if let Some(id) = id {
                                                            delete_one(records, notify, id);
                                                        }
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
            <div class="record-table__footer">
                <span class="record-table__range">
                    {move || records.with(RecordsState::display_range)}
                </span>
                <button
                    class="btn btn--small"
                    disabled=move || records.with(|r| r.page_index == 0 || r.fetching)
                    on:click=move |_| records.update(RecordsState::prev_page)
                >
                    "Previous"
                </button>
                <button
                    class="btn btn--small"
                    disabled=move || records.with(|r| !r.has_more() || r.fetching)
                    on:click=move |_| records.update(RecordsState::next_page)
                >
                    "Next"
                </button>
                <select
                    class="record-table__page-size"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u64>() {
                            records.update(|r| r.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || records.with(|r| r.page_size == size)
                                >
                                    {size.to_string()} " per page"
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                {move || {
                    let count = records.with(|r| r.selected.len());
                    (count > 0)
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| delete_selected(records, notify)
                                >
                                    {format!("Delete Selected ({count})")}
                                </button>
                            }
                        })
                }}
            </div>
        </div>
    }
}
