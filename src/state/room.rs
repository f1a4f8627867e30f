//! Block / floor / room picker state.
//!
//! DESIGN
//! ======
//! The room listing is derived from the chosen block and floor, so changing
//! either one regenerates the listing and clears the room. Confirmation is
//! derived, never stored: it is available exactly when both a block and a
//! room are chosen.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

/// Rooms generated per floor.
pub const ROOMS_PER_FLOOR: u8 = 15;

/// Floors offered by the picker, in display order.
pub const FLOORS: [u8; 4] = [1, 2, 3, 4];

/// Campus blocks that contain bookable rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    A,
    B,
    C,
    E,
}

impl Block {
    pub const ALL: [Block; 4] = [Block::A, Block::B, Block::C, Block::E];

    /// Parse the letter carried by a block button.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::E => "E",
        }
    }
}

/// Label of room `index` (1-based) on `floor` of `block`, e.g. `A2-03`.
pub fn room_label(block: Block, floor: u8, index: u8) -> String {
    format!("{}{floor}-{index:02}", block.letter())
}

/// A complete, confirmable choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomChoice {
    pub block: Block,
    pub floor: u8,
    pub room: String,
}

impl RoomChoice {
    /// Parse a generated room label such as `A2-03`.
    ///
    /// Only labels the picker could have produced are accepted.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let block = Block::parse(label.get(..1)?)?;
        let (floor, index) = label.get(1..)?.split_once('-')?;
        let floor: u8 = floor.parse().ok()?;
        let index: u8 = index.parse().ok()?;
        if !FLOORS.contains(&floor) || !(1..=ROOMS_PER_FLOOR).contains(&index) {
            return None;
        }
        Some(Self {
            block,
            floor,
            room: room_label(block, floor, index),
        })
    }

    /// Seat picker route carrying this room as the `room` query parameter.
    pub fn seats_route(&self) -> String {
        format!("/seats?room={}", self.room)
    }
}

/// Picker state for block, floor, and room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSelection {
    block: Option<Block>,
    floor: u8,
    room: Option<String>,
    rooms: Vec<String>,
}

impl Default for RoomSelection {
    fn default() -> Self {
        Self {
            block: None,
            floor: 1,
            room: None,
            rooms: Vec::new(),
        }
    }
}

impl RoomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self) -> Option<Block> {
        self.block
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Rooms for the current block and floor; empty until a block is chosen.
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// Choose a block, regenerate rooms for the current floor, clear the room.
    pub fn select_block(&mut self, block: Block) {
        self.block = Some(block);
        self.regenerate();
    }

    /// Choose a floor, keep the block, regenerate rooms, clear the room.
    pub fn select_floor(&mut self, floor: u8) {
        self.floor = floor;
        self.regenerate();
    }

    /// Choose a room from the current listing.
    ///
    /// Returns `false` and leaves the state untouched for labels that are
    /// not listed.
    pub fn select_room(&mut self, label: &str) -> bool {
        if !self.rooms.iter().any(|room| room == label) {
            return false;
        }
        self.room = Some(label.to_owned());
        true
    }

    pub fn can_confirm(&self) -> bool {
        self.block.is_some() && self.room.is_some()
    }

    /// The complete choice, if confirmable.
    pub fn confirmed(&self) -> Option<RoomChoice> {
        Some(RoomChoice {
            block: self.block?,
            floor: self.floor,
            room: self.room.clone()?,
        })
    }

    /// Header text for the block, e.g. `Blk A`.
    pub fn block_label(&self) -> String {
        self.block
            .map_or_else(|| "Not selected".to_owned(), |block| format!("Blk {}", block.letter()))
    }

    /// Header text for the room.
    pub fn room_label(&self) -> &str {
        self.room.as_deref().unwrap_or("Not selected")
    }

    fn regenerate(&mut self) {
        self.room = None;
        self.rooms = match self.block {
            Some(block) => (1..=ROOMS_PER_FLOOR)
                .map(|index| room_label(block, self.floor, index))
                .collect(),
            None => Vec::new(),
        };
    }
}
