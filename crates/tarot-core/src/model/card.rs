use crate::error::RulesError;
use crate::model::rank::Rank;
use crate::model::suit::{SUIT_LEN, Suit};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 78;
/// Strongest trump identifier.
pub const MAX_TRUMP: u8 = 21;
/// Identifier of the first suited card.
pub const SUITED_BASE: u8 = 22;

/// A card identified by its position in the 78-card encoding:
/// `0` is the Excuse, `1..=21` the trumps, `22..=77` four suited blocks of 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Excuse,
    Trump(u8),
    Suited { suit: Suit, rank: Rank },
}

impl Card {
    pub const EXCUSE: Card = Card(0);

    pub const fn from_id(id: u8) -> Result<Self, RulesError> {
        if (id as usize) < DECK_SIZE {
            Ok(Card(id))
        } else {
            Err(RulesError::CardOutOfRange { id })
        }
    }

    pub const fn trump(strength: u8) -> Result<Self, RulesError> {
        if strength >= 1 && strength <= MAX_TRUMP {
            Ok(Card(strength))
        } else {
            Err(RulesError::CardOutOfRange { id: strength })
        }
    }

    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Card(suit.low() + rank.offset())
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_excuse(self) -> bool {
        self.0 == 0
    }

    pub const fn is_trump(self) -> bool {
        self.0 >= 1 && self.0 <= MAX_TRUMP
    }

    pub const fn is_suited(self) -> bool {
        self.0 >= SUITED_BASE
    }

    pub const fn suit(self) -> Option<Suit> {
        Suit::of(self)
    }

    pub fn kind(self) -> CardKind {
        match self.0 {
            0 => CardKind::Excuse,
            id @ 1..=MAX_TRUMP => CardKind::Trump(id),
            // Construction keeps ids below DECK_SIZE, so both lookups are in range.
            id => CardKind::Suited {
                suit: Suit::ALL[((id - SUITED_BASE) / SUIT_LEN) as usize],
                rank: Rank::ORDERED[((id - SUITED_BASE) % SUIT_LEN) as usize],
            },
        }
    }

    /// Every card in identifier order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = RulesError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_id(id)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            CardKind::Excuse => f.write_str("EX"),
            CardKind::Trump(strength) => write!(f, "T{strength}"),
            CardKind::Suited { suit, rank } => write!(f, "{rank}{suit}"),
        }
    }
}
