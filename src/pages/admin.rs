//! Admin dashboard: training-record grid plus model controls.
//!
//! DESIGN
//! ======
//! The page owns all fetching. Record fetches are keyed on a memo of
//! (offset, query params, refresh sequence) so the effect only re-runs when
//! the query itself changes, not on every controller write; a resolved page
//! replaces the cached one wholesale. Model info is fetched once per visit.

use leptos::prelude::*;

use crate::components::csv_upload::CsvUpload;
use crate::components::filter_bar::FilterBar;
use crate::components::model_info_badge::ModelInfoBadge;
use crate::components::record_edit_dialog::RecordEditDialog;
use crate::components::record_json_dialog::RecordJsonDialog;
use crate::components::record_table::RecordTable;
use crate::components::train_button::TrainButton;
use crate::net::types::TrainingRecord;
use crate::state::model::ModelState;
use crate::state::records::RecordsState;
use crate::state::session::SessionState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let model = expect_context::<RwSignal<ModelState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let editing = RwSignal::new(None::<TrainingRecord>);
    let viewing = RwSignal::new(None::<TrainingRecord>);

    #[cfg(feature = "hydrate")]
    {
        // Entering the dashboard marks the session; there is no credential
        // gate in this client, the flag only scopes what gets persisted.
        session.update(|s| s.admin_authenticated = true);
        session.with_untracked(SessionState::persist);

        model.update(|m| m.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_model_info().await {
                Ok(info) => model.update(|m| m.apply_info(info)),
                Err(message) => model.update(|m| m.apply_error(message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (model, session);
    }

    // Re-fetch only when the effective query changes. The memo collapses the
    // controller's incidental writes (loading flags, selection) so a resolved
    // page cannot re-trigger its own fetch.
    let query_key =
        Memo::new(move |_| records.with(|r| (r.offset(), r.page_params(), r.refresh_seq)));
    Effect::new(move |_| {
        let (offset, params, _) = query_key.get();
        #[cfg(feature = "hydrate")]
        {
            records.update(|r| r.fetching = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_training_page(offset, &params).await {
                    Ok(page) => records.update(|r| r.apply_page(page)),
                    Err(message) => records.update(|r| r.apply_error(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (offset, params);
        }
    });

    let on_edit = Callback::new(move |record: TrainingRecord| {
        editing.set(Some(record));
    });
    let on_view = Callback::new(move |record: TrainingRecord| {
        viewing.set(Some(record));
    });

    view! {
        <main class="page page--admin">
            <header class="admin-header">
                <h1>"Training Data"</h1>
                <div class="admin-header__tools">
                    <ModelInfoBadge />
                    <TrainButton />
                </div>
            </header>
            <section class="admin-toolbar">
                <FilterBar />
                <CsvUpload />
            </section>
            <RecordTable on_edit=on_edit on_view=on_view />
            <RecordEditDialog record=editing />
            <RecordJsonDialog record=viewing />
        </main>
    }
}
