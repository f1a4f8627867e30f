//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, room_selection::RoomSelectionPage, schedule::SchedulePage, seat_selection::SeatSelectionPage,
    signin::SigninPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="smartseat" href="/pkg/smartseat.css"/>
        <Title text="SmartSeat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("A01_signin_credentials.html") view=SigninPage/>
                <Route path=StaticSegment("rooms") view=RoomSelectionPage/>
                <Route path=StaticSegment("seats") view=SeatSelectionPage/>
                <Route path=StaticSegment("schedule") view=SchedulePage/>
            </Routes>
        </Router>
    }
}
