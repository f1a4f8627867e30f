//! Lecture schedule with a per-lecture occupancy heatmap modal.

use leptos::prelude::*;

use crate::components::heatmap_grid::HeatmapGrid;

/// One scheduled lecture row.
struct ScheduleEntry {
    lecture_id: &'static str,
    title: &'static str,
    time: &'static str,
    room: &'static str,
}

static SCHEDULE: [ScheduleEntry; 3] = [
    ScheduleEntry {
        lecture_id: "CP3405-LA",
        title: "CP3405 Lecture A",
        time: "Mon 09:00 - 11:00",
        room: "A1-01",
    },
    ScheduleEntry {
        lecture_id: "CP3405-PA",
        title: "CP3405 Practical A",
        time: "Tue 13:00 - 15:00",
        room: "C2-04",
    },
    ScheduleEntry {
        lecture_id: "CP3405-PB",
        title: "CP3405 Practical B",
        time: "Thu 10:00 - 12:00",
        room: "C2-05",
    },
];

/// Lecture list; each entry opens the heatmap modal.
#[component]
pub fn SchedulePage() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);
    let _ = crate::util::auth::guard_page_load();

    let lecture_id = Signal::derive(move || {
        open.get()
            .map(|index| SCHEDULE[index].lecture_id.to_owned())
            .unwrap_or_default()
    });
    let modal_text = move |pick: fn(&ScheduleEntry) -> &'static str| open.get().map_or("", |index| pick(&SCHEDULE[index]));

    view! {
        <div class="schedule-page">
            <header class="schedule-page__header">
                <a href="/" class="back-arrow">"←"</a>
                <h1>"Lecture Schedule"</h1>
            </header>
            <ul class="schedule-list">
                {SCHEDULE
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <li class="schedule-item" data-lecture-id=entry.lecture_id>
                                <h4>{entry.title}</h4>
                                <span class="schedule-status">{entry.time}</span>
                                <span class="detail-item">{entry.room}</span>
                                <button class="view-heatmap-btn" on:click=move |_| open.set(Some(index))>
                                    "View heatmap"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || open.get().is_some()>
                <div class="heatmap-modal" on:click=move |_| open.set(None)>
                    <div class="heatmap-modal__content" on:click=|ev| ev.stop_propagation()>
                        <button class="close-modal" on:click=move |_| open.set(None)>"×"</button>
                        <h3>{move || modal_text(|e| e.title)}</h3>
                        <p>{move || modal_text(|e| e.time)} " · " {move || modal_text(|e| e.room)}</p>
                        <HeatmapGrid lecture_id=lecture_id/>
                    </div>
                </div>
            </Show>
        </div>
    }
}
