//! Door unlock button with a simulated unlock cycle.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::task::{UNLOCK_DELAY_MS, UNLOCKED_HOLD_MS};
use crate::state::task::{ActionLabels, TaskStatus};

/// Unlock button: `UNLOCK` → `UNLOCKING...` → `UNLOCKED` → `UNLOCK`.
///
/// Clicks while an unlock is in flight are ignored.
#[component]
pub fn UnlockButton() -> impl IntoView {
    let status = RwSignal::new(TaskStatus::<(), String>::Idle);

    let on_click = move |_| {
        let started = status.try_update(|s| s.start()).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(UNLOCK_DELAY_MS).await;
            status.update(|s| s.finish(Ok(())));
            gloo_timers::future::TimeoutFuture::new(UNLOCKED_HOLD_MS).await;
            status.update(|s| {
                if !s.is_pending() {
                    s.reset();
                }
            });
        });
    };

    view! {
        <button
            class="unlock-btn"
            class:unlocking=move || status.get().is_pending()
            on:click=on_click
        >
            <span class="lock-icon"></span>
            {move || ActionLabels::UNLOCK.label(&status.get())}
        </button>
    }
}
