//! Per-lecture seat occupancy heatmap.
//!
//! Occupancy percentages are fixed per lecture. Rows render left to right
//! with an aisle after the third seat.

#[cfg(test)]
#[path = "heatmap_test.rs"]
mod heatmap_test;

/// Seats to the left of the aisle in every row.
pub const AISLE_AFTER: usize = 3;

const CP3405_LA: [[u8; 6]; 5] = [
    [85, 90, 70, 40, 30, 20],
    [95, 100, 80, 60, 45, 35],
    [60, 75, 90, 85, 70, 50],
    [30, 45, 60, 70, 55, 40],
    [20, 30, 40, 50, 35, 25],
];

const CP3405_PA: [[u8; 6]; 5] = [
    [40, 30, 20, 10, 5, 0],
    [50, 40, 30, 20, 15, 5],
    [60, 50, 40, 30, 25, 15],
    [70, 60, 50, 40, 35, 25],
    [80, 70, 60, 50, 45, 35],
];

const CP3405_PB: [[u8; 6]; 5] = [
    [20, 25, 30, 35, 40, 45],
    [15, 20, 25, 30, 35, 40],
    [10, 15, 20, 25, 30, 35],
    [5, 10, 15, 20, 25, 30],
    [0, 5, 10, 15, 20, 25],
];

/// Lectures with occupancy data, in schedule order.
pub const LECTURES: [&str; 3] = ["CP3405-LA", "CP3405-PA", "CP3405-PB"];

/// Occupancy bucket used for seat colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccupancyLevel {
    Low,
    Medium,
    High,
}

impl OccupancyLevel {
    /// `<= 30` is low, `<= 70` is medium, anything above is high.
    pub fn classify(percent: u8) -> Self {
        match percent {
            0..=30 => Self::Low,
            31..=70 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "low-occupancy",
            Self::Medium => "medium-occupancy",
            Self::High => "high-occupancy",
        }
    }
}

/// One rendered heatmap seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeatmapCell {
    pub percent: u8,
    pub level: OccupancyLevel,
    /// Whether an aisle follows this seat.
    pub aisle_after: bool,
}

/// Heatmap rows for `lecture_id`; empty for unknown lectures.
pub fn heatmap_rows(lecture_id: &str) -> Vec<Vec<HeatmapCell>> {
    let grid: &[[u8; 6]] = match lecture_id {
        "CP3405-LA" => &CP3405_LA,
        "CP3405-PA" => &CP3405_PA,
        "CP3405-PB" => &CP3405_PB,
        _ => return Vec::new(),
    };
    grid.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, &percent)| HeatmapCell {
                    percent,
                    level: OccupancyLevel::classify(percent),
                    aisle_after: col + 1 == AISLE_AFTER,
                })
                .collect()
        })
        .collect()
}
