use crate::model::card::{Card, SUITED_BASE};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of cards in each suited block.
pub const SUIT_LEN: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowest identifier of the block.
    pub const fn low(self) -> u8 {
        SUITED_BASE + SUIT_LEN * self as u8
    }

    /// One past the highest identifier of the block.
    pub const fn high(self) -> u8 {
        self.low() + SUIT_LEN
    }

    /// Suit of a suited card; `None` for trumps and the Excuse.
    pub const fn of(card: Card) -> Option<Self> {
        let id = card.id();
        if id < SUITED_BASE {
            return None;
        }
        Self::from_index(((id - SUITED_BASE) / SUIT_LEN) as usize)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
        };
        f.write_str(symbol)
    }
}
