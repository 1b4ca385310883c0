//! Transient notice overlay rendered above every page.

use leptos::prelude::*;

use crate::state::notify::{NoticeKind, NotifyState};

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "notice notice--info",
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Warning => "notice notice--warning",
        NoticeKind::Error => "notice notice--error",
    }
}

/// Stacked dismissible notices fed by [`NotifyState`].
#[component]
pub fn NoticeList() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="notice-list">
            {move || {
                notify
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice_class(notice.kind)>
                                <span class="notice__text">{notice.text}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| notify.update(|n| n.dismiss(id))
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
