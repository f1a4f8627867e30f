//! Occupancy heatmap for one lecture.

use leptos::prelude::*;

use crate::state::heatmap::heatmap_rows;

/// Seat rows coloured by occupancy bucket, with an aisle gap.
#[component]
pub fn HeatmapGrid(#[prop(into)] lecture_id: Signal<String>) -> impl IntoView {
    view! {
        <div class="heatmap-seats">
            {move || {
                heatmap_rows(&lecture_id.get())
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="seat-row">
                                {row
                                    .into_iter()
                                    .map(|cell| {
                                        let seat_class = format!("seat {}", cell.level.css_class());
                                        view! {
                                            <div class=seat_class>
                                                <span class="seat-icon">{format!("{}%", cell.percent)}</span>
                                            </div>
                                            {cell.aisle_after.then(|| view! { <div class="aisle"></div> })}
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
