//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_list::NoticeList;
use crate::pages::{admin::AdminPage, home::HomePage, result::ResultPage};
use crate::state::{
    model::ModelState, notify::NotifyState, predict::PredictState, records::RecordsState,
    session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// session context is restored from browser storage exactly once here so the
/// rest of the app reads and writes a plain in-memory object with explicit
/// persist points.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let records = RwSignal::new(RecordsState::default());
    let model = RwSignal::new(ModelState::default());
    let predict = RwSignal::new(PredictState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(records);
    provide_context(model);
    provide_context(predict);
    provide_context(notify);

    view! {
        <Stylesheet id="leptos" href="/pkg/motoprice.css"/>
        <Title text="Moto Price Predictor"/>

        <NoticeList/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("result"), ParamSegment("id")) view=ResultPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
