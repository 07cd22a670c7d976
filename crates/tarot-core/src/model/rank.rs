use core::fmt;
use serde::{Deserialize, Serialize};

/// Rank inside a suited block. The discriminant is the offset from the
/// block's lowest identifier, so ordering by rank equals ordering by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Knight = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ORDERED: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn from_offset(offset: u8) -> Option<Self> {
        if (offset as usize) < Self::ORDERED.len() {
            Some(Self::ORDERED[offset as usize])
        } else {
            None
        }
    }

    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Court cards (Jack, Knight, Queen, King).
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Knight | Rank::Queen | Rank::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Ace => "1",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Knight => "C",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_offset_maps() {
        assert_eq!(Rank::from_offset(11), Some(Rank::Knight));
        assert_eq!(Rank::from_offset(14), None);
    }

    #[test]
    fn display_matches_symbols() {
        assert_eq!(Rank::Knight.to_string(), "C");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert!(Rank::King.is_face());
        assert!(!Rank::Ten.is_face());
    }
}
