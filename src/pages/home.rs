//! Home page: greeting, door unlock, and the user's reservations.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::unlock_button::UnlockButton;
use crate::net::types::Reservation;
use crate::state::auth::AuthState;
use crate::util::date::format_date;

/// Guarded landing page for students.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reservations = RwSignal::new(None::<Vec<Reservation>>);
    let info = RwSignal::new(String::new());

    if crate::util::auth::guard_page_load() {
        auth.update(|a| a.loading = true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let user = crate::net::auth_client::browser_client().fetch_current_user(false).await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    let on_check_reservations = move |_| {
        info.set("Loading your reservations...".to_owned());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::auth_client::browser_client().my_reservations().await {
                Ok(list) => {
                    info.set(String::new());
                    reservations.set(Some(list));
                }
                Err(e) => info.set(format!("Could not load reservations: {e}")),
            }
        });
    };

    let on_logout = move |_| {
        auth.update(|a| a.user = None);
        crate::net::auth_client::browser_client().logout();
    };

    let reservation_rows = move || {
        reservations.get().map(|list| {
            if list.is_empty() {
                return view! { <li class="reservation reservation--empty">"No reservations yet."</li> }.into_any();
            }
            list.into_iter()
                .map(|r| {
                    let id = r.id;
                    let on_cancel = move |_| {
                        #[cfg(feature = "csr")]
                        leptos::task::spawn_local(async move {
                            match crate::net::auth_client::browser_client().cancel_reservation(id).await {
                                Ok(()) => reservations.update(|list| {
                                    if let Some(list) = list {
                                        list.retain(|r| r.id != id);
                                    }
                                }),
                                Err(e) => info.set(format!("Cancel failed: {e}")),
                            }
                        });
                        #[cfg(not(feature = "csr"))]
                        let _ = id;
                    };
                    view! {
                        <li class="reservation">
                            <span class="reservation__seat">{r.seat_code}</span>
                            <span class="reservation__status">{r.status}</span>
                            <span class="reservation__time">{format_date(&r.start_time)}</span>
                            <button class="reservation__cancel" on:click=on_cancel>"Cancel"</button>
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{move || format!("Welcome, {}", auth.get().display_name())}</h1>
                <button class="btn home-page__logout" on:click=on_logout>"Log out"</button>
            </header>
            <section class="home-page__actions">
                <UnlockButton/>
                <a href="/rooms" class="btn btn--primary">"Reserve"</a>
                <a href="/schedule" class="btn">"Lecture Schedule"</a>
                <button class="check-reserve-btn btn" on:click=on_check_reservations>
                    "My Reservations"
                </button>
            </section>
            <Show when=move || !info.get().is_empty()>
                <p class="home-page__info">{move || info.get()}</p>
            </Show>
            <ul class="home-page__reservations">{reservation_rows}</ul>
        </div>
    }
}
