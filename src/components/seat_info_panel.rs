//! Side panel describing the selected seat.

use leptos::prelude::*;

use crate::state::seat::SeatSelection;

/// Seat number, type, and features of the current selection.
#[component]
pub fn SeatInfoPanel(seats: RwSignal<SeatSelection>) -> impl IntoView {
    let seat_number = move || {
        seats.with(|s| {
            s.selected()
                .map_or_else(|| "None".to_owned(), |seat| seat.seat_code.clone())
        })
    };
    let type_label = move || seats.with(|s| s.details().map_or("-", |d| d.type_label));
    let features = move || seats.with(|s| s.details().map_or("-", |d| d.features));

    view! {
        <aside class="seat-info">
            <div class="info-row">
                <span class="info-label">"Seat"</span>
                <span class="info-value" id="selected-seat-number">{seat_number}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"Type"</span>
                <span class="info-value">{type_label}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"Features"</span>
                <span class="info-value">{features}</span>
            </div>
        </aside>
    }
}
