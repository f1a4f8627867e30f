//! Seat picker page: category filter, seat map, details, reservation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The confirmed room arrives as the `room` query parameter and titles the
//! page. Seats come from `GET /api/seats`. The last picked seat is restored from
//! durable storage, and reserving goes through the authenticated helper so a
//! stale token lands the user back on the sign-in page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::seat_info_panel::SeatInfoPanel;
use crate::state::room::RoomChoice;
use crate::state::seat::{SeatFilter, SeatSelection};
use crate::state::task::{ActionLabels, TaskStatus};
use crate::util::storage::WebStorage;

#[component]
pub fn SeatSelectionPage() -> impl IntoView {
    let seats = RwSignal::new(SeatSelection::default());
    let reserve = RwSignal::new(TaskStatus::<String, String>::Idle);
    let message = RwSignal::new(String::new());
    let query = use_query_map();
    let room_heading = move || {
        query
            .with(|q| q.get("room"))
            .and_then(|raw| RoomChoice::parse(&raw))
            .map_or_else(|| "Select a Seat".to_owned(), |choice| format!("Select a Seat in {}", choice.room))
    };

    if crate::util::auth::guard_page_load() {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::auth_client::browser_client();
            match client.list_seats().await {
                Ok(list) => seats.set(SeatSelection::restore(list, client.durable_store())),
                Err(e) => message.set(format!("Could not load seats: {e}")),
            }
        });
    }

    let on_reserve = move |_| {
        let Some(code) = seats.with_untracked(|s| s.selected().map(|seat| seat.seat_code.clone())) else {
            message.set("Select a seat first.".to_owned());
            return;
        };
        let started = reserve.try_update(|t| t.start()).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::auth_client::browser_client();
            let result = client
                .create_reservation(&code)
                .await
                .map(|reservation| reservation.seat_code)
                .map_err(|e| e.to_string());
            match &result {
                Ok(booked) => {
                    seats.update(|s| s.mark_booked(booked));
                    message.set("Reservation submitted successfully!".to_owned());
                }
                Err(e) => message.set(format!("Reservation failed: {e}")),
            }
            reserve.update(|t| t.finish(result));
        });
        #[cfg(not(feature = "csr"))]
        let _ = code;
    };

    let filter_buttons = SeatFilter::ALL
        .into_iter()
        .map(|filter| {
            view! {
                <button
                    class="filter-button"
                    class:active=move || seats.with(|s| s.filter() == filter)
                    on:click=move |_| seats.update(|s| s.set_filter(filter))
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    let seat_map = move || {
        seats.with(|state| {
            state
                .seats()
                .iter()
                .map(|seat| {
                    let code = seat.seat_code.clone();
                    let label = seat.seat_code.clone();
                    let data_seat = seat.seat_code.clone();
                    let booked = !seat.is_available();
                    let selected = state.is_selected(&seat.seat_code);
                    let display = if state.is_visible(seat) { "block" } else { "none" };
                    view! {
                        <button
                            class="seat"
                            class:available={!booked}
                            class:booked=booked
                            class:selected=selected
                            data-seat=data_seat
                            data-type=seat.seat_type.as_str()
                            style:display=display
                            disabled=booked
                            on:click=move |_| seats.update(|s| s.click_and_persist(&code, &WebStorage::local()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="seat-selection-page">
            <header class="seat-selection-page__header">
                <a href="/rooms" class="back-arrow">"←"</a>
                <h1>{room_heading}</h1>
            </header>
            <nav class="seat-filters">{filter_buttons}</nav>
            <div class="seat-layout">
                <section class="seat-map">{seat_map}</section>
                <SeatInfoPanel seats=seats/>
            </div>
            <button
                class="reserve-btn"
                class:reserving=move || reserve.get().is_pending()
                disabled=move || reserve.get().is_pending()
                on:click=on_reserve
            >
                {move || ActionLabels::RESERVE.label(&reserve.get())}
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="seat-selection-page__message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
