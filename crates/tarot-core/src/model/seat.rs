use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of players at the table.
pub const PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    pub const LOOP: [Seat; PLAYERS] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::North),
            1 => Some(Seat::East),
            2 => Some(Seat::South),
            3 => Some(Seat::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        self.offset(1)
    }

    /// Seat that plays at `position` (0-based, play order) when `self` leads.
    pub const fn offset(self, position: usize) -> Seat {
        Self::LOOP[(self as usize + position) % PLAYERS]
    }

    /// Play-order position of `other` in a trick led by `self`.
    pub const fn distance_to(self, other: Seat) -> usize {
        (other as usize + PLAYERS - self as usize) % PLAYERS
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        };
        f.write_str(label)
    }
}
