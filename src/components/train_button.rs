//! Train-trigger button with the client-side cooldown countdown.

use leptos::prelude::*;

use crate::state::model::ModelState;
use crate::state::notify::NotifyState;
use crate::state::session::{SessionState, cooldown_label, now_ms, train_disabled};

/// Button firing `POST /train`, disabled while a request is in flight or the
/// cooldown window is still open. The countdown re-arms from the persisted
/// timestamp, so a reload mid-cooldown picks up where it left off.
#[component]
pub fn TrainButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let model = expect_context::<RwSignal<ModelState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    // 1 Hz tick so the countdown label stays current against wall-clock time.
    let tick = RwSignal::new(0u64);
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                tick.update(|t| *t += 1);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let remaining = move || {
        tick.get();
        session.with(|s| s.cooldown_remaining_ms(now_ms()))
    };
    let disabled = move || train_disabled(model.with(|m| m.training), remaining());
    let label = move || {
        if model.with(|m| m.training) {
            "Training...".to_owned()
        } else if let Some(ms) = remaining() {
            format!("Train Model ({})", cooldown_label(ms))
        } else {
            "Train Model".to_owned()
        }
    };

    let on_train = move |_| {
        if disabled() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            model.update(|m| m.training = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::trigger_training().await {
                    Ok(resp) => {
                        model.update(|m| m.training = false);
                        session.update(|s| s.record_training(now_ms()));
                        session.with_untracked(SessionState::persist);
                        notify.update(|n| {
                            n.success(resp.message);
                        });
                        // Training replaces the active model; refresh the
                        // badge's version, date, and metrics.
                        match crate::net::api::fetch_model_info().await {
                            Ok(info) => model.update(|m| m.apply_info(info)),
                            Err(message) => model.update(|m| m.apply_error(message)),
                        }
                    }
                    Err(message) => {
                        model.update(|m| m.training = false);
                        notify.update(|n| {
                            n.error(message);
                        });
                    }
                }
            });
        }
    };

    view! {
        <button class="btn train-button" disabled=disabled on:click=on_train>
            {label}
        </button>
    }
}
