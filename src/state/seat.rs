//! Seat picker state: single selection, category filter, detail panel.
//!
//! DESIGN
//! ======
//! At most one seat is selected. Clicking the selected seat clears it,
//! clicking another available seat moves the selection. Booked seats never
//! react to clicks and are only shown under the `All` filter.
//!
//! The last selected seat code is written to durable storage whenever a
//! seat becomes selected, and restored on the next visit if still free.

#[cfg(test)]
#[path = "seat_test.rs"]
mod seat_test;

use crate::config::SELECTED_SEAT_KEY;
use crate::net::types::{Seat, SeatStatus, SeatType};
use crate::util::storage::KeyValueStore;

/// Seat category filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeatFilter {
    #[default]
    All,
    Only(SeatType),
}

impl SeatFilter {
    pub const ALL: [SeatFilter; 4] = [
        SeatFilter::All,
        SeatFilter::Only(SeatType::Standard),
        SeatFilter::Only(SeatType::Accessible),
        SeatFilter::Only(SeatType::Quiet),
    ];

    /// Parse a filter button's `data-filter` value.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        SeatType::parse(raw).map(Self::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(SeatType::Standard) => "Standard",
            Self::Only(SeatType::Accessible) => "Accessible",
            Self::Only(SeatType::Quiet) => "Quiet",
        }
    }
}

/// Static attributes shown in the side panel for a seat type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatDetails {
    pub type_label: &'static str,
    pub features: &'static str,
}

/// Side-panel details for `seat_type`.
pub fn seat_details(seat_type: SeatType) -> SeatDetails {
    match seat_type {
        SeatType::Standard => SeatDetails {
            type_label: "Standard",
            features: "Power outlet, good visibility",
        },
        SeatType::Accessible => SeatDetails {
            type_label: "Accessible",
            features: "Wheelchair accessible, extra space, power outlet",
        },
        SeatType::Quiet => SeatDetails {
            type_label: "Quiet Zone",
            features: "Reduced noise area, power outlet, good visibility",
        },
    }
}

/// Seat picker state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<Seat>,
    selected: Option<String>,
    filter: SeatFilter,
}

impl SeatSelection {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self {
            seats,
            selected: None,
            filter: SeatFilter::All,
        }
    }

    /// Build from `seats`, reselecting the stored seat if it is still available.
    pub fn restore(seats: Vec<Seat>, store: &impl KeyValueStore) -> Self {
        let mut state = Self::new(seats);
        if let Some(code) = store.get(SELECTED_SEAT_KEY) {
            if state.find_available(&code).is_some() {
                state.selected = Some(code);
            }
        }
        state
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn filter(&self) -> SeatFilter {
        self.filter
    }

    pub fn selected(&self) -> Option<&Seat> {
        let code = self.selected.as_deref()?;
        self.seats.iter().find(|seat| seat.seat_code == code)
    }

    pub fn is_selected(&self, seat_code: &str) -> bool {
        self.selected.as_deref() == Some(seat_code)
    }

    /// React to a click on `seat_code`.
    ///
    /// Returns the newly selected code, or `None` when the click cleared the
    /// selection or hit a booked/unknown seat.
    pub fn click(&mut self, seat_code: &str) -> Option<&str> {
        self.find_available(seat_code)?;
        if self.is_selected(seat_code) {
            self.selected = None;
            return None;
        }
        self.selected = Some(seat_code.to_owned());
        self.selected.as_deref()
    }

    /// Click and persist the new selection to durable storage.
    pub fn click_and_persist(&mut self, seat_code: &str, store: &impl KeyValueStore) {
        if let Some(code) = self.click(seat_code) {
            store.set(SELECTED_SEAT_KEY, code);
        }
    }

    pub fn set_filter(&mut self, filter: SeatFilter) {
        self.filter = filter;
    }

    /// Whether `seat` is shown under the current filter.
    pub fn is_visible(&self, seat: &Seat) -> bool {
        match (seat.status, self.filter) {
            (_, SeatFilter::All) => true,
            (SeatStatus::Booked, SeatFilter::Only(_)) => false,
            (SeatStatus::Available, SeatFilter::Only(kind)) => seat.seat_type == kind,
        }
    }

    /// Seats shown under the current filter, in listing order.
    pub fn visible_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|seat| self.is_visible(seat))
    }

    /// Side-panel details for the selected seat.
    pub fn details(&self) -> Option<SeatDetails> {
        self.selected().map(|seat| seat_details(seat.seat_type))
    }

    /// Mark `seat_code` booked, e.g. after a reservation succeeds, and drop
    /// it from the selection.
    pub fn mark_booked(&mut self, seat_code: &str) {
        if let Some(seat) = self.seats.iter_mut().find(|seat| seat.seat_code == seat_code) {
            seat.status = SeatStatus::Booked;
        }
        if self.is_selected(seat_code) {
            self.selected = None;
        }
    }

    fn find_available(&self, seat_code: &str) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|seat| seat.seat_code == seat_code && seat.is_available())
    }
}
