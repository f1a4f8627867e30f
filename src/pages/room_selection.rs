//! Room picker page: block, floor, then one of the generated rooms.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::room::{Block, FLOORS, RoomSelection};

#[component]
pub fn RoomSelectionPage() -> impl IntoView {
    let picker = RwSignal::new(RoomSelection::new());
    let navigate = use_navigate();

    let on_confirm = move |_| {
        if let Some(choice) = picker.get_untracked().confirmed() {
            log::info!("room confirmed: {}", choice.room);
            navigate(&choice.seats_route(), NavigateOptions::default());
        }
    };

    let room_grid = move || {
        picker.with(|p| {
            if p.rooms().is_empty() {
                return view! { <div class="room-placeholder">"Please select a block first"</div> }.into_any();
            }
            p.rooms()
                .iter()
                .map(|label| {
                    let active_label = label.clone();
                    let click_label = label.clone();
                    view! {
                        <button
                            class="room-btn"
                            class:active=move || picker.with(|p| p.room() == Some(active_label.as_str()))
                            on:click=move |_| {
                                picker.update(|p| {
                                    p.select_room(&click_label);
                                });
                            }
                        >
                            {label.clone()}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="room-selection-page">
            <header class="room-selection-page__header">
                <a href="/" class="back-arrow">"←"</a>
                <h1>"Select a Room"</h1>
            </header>

            <section class="block-buttons">
                {Block::ALL
                    .into_iter()
                    .map(|block| {
                        view! {
                            <button
                                class="block-btn"
                                class:active=move || picker.with(|p| p.block() == Some(block))
                                data-block=block.letter()
                                on:click=move |_| picker.update(|p| p.select_block(block))
                            >
                                {format!("Block {}", block.letter())}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="floor-buttons">
                {FLOORS
                    .into_iter()
                    .map(|floor| {
                        view! {
                            <button
                                class="floor-btn"
                                class:active=move || picker.with(|p| p.floor() == floor)
                                data-floor=floor.to_string()
                                on:click=move |_| picker.update(|p| p.select_floor(floor))
                            >
                                {format!("Level {floor}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="room-grid">{room_grid}</section>

            <footer class="room-summary">
                <span id="selected-block">{move || picker.with(RoomSelection::block_label)}</span>
                <span id="selected-floor">{move || picker.with(RoomSelection::floor)}</span>
                <span id="selected-room">{move || picker.with(|p| p.room_label().to_owned())}</span>
                <button
                    id="confirm-location"
                    class="btn btn--primary"
                    disabled=move || !picker.with(RoomSelection::can_confirm)
                    on:click=on_confirm
                >
                    "Confirm"
                </button>
            </footer>
        </div>
    }
}
