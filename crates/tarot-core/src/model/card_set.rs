use crate::error::RulesError;
use crate::model::card::{Card, DECK_SIZE, MAX_TRUMP};
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// An unordered set of cards stored as the low 78 bits of a `u128`.
///
/// Used for hands, the dog and the cards already played in a trick. Bit `i`
/// is set when the card with identifier `i` is in the set, which makes the
/// type a direct stand-in for the boolean masks exchanged with a policy model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct CardSet(u128);

impl CardSet {
    const MASK: u128 = (1u128 << DECK_SIZE) - 1;
    const TRUMPS: u128 = ((1u128 << (MAX_TRUMP + 1)) - 1) & !1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn full() -> Self {
        Self(Self::MASK)
    }

    /// Every trump, Excuse excluded.
    pub const fn all_trumps() -> Self {
        Self(Self::TRUMPS)
    }

    /// Every card of one suited block.
    pub const fn all_of(suit: Suit) -> Self {
        let block = (1u128 << (suit.high() - suit.low())) - 1;
        Self(block << suit.low())
    }

    /// Builds a set from a boolean mask indexed by card identifier.
    pub fn from_mask(mask: &[bool]) -> Result<Self, RulesError> {
        Self::from_named_mask("card", mask)
    }

    pub(crate) fn from_named_mask(field: &'static str, mask: &[bool]) -> Result<Self, RulesError> {
        if mask.len() != DECK_SIZE {
            return Err(RulesError::MaskLength {
                field,
                len: mask.len(),
            });
        }
        let bits = mask
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .fold(0u128, |acc, (index, _)| acc | (1u128 << index));
        Ok(Self(bits))
    }

    pub fn to_mask(&self) -> [bool; DECK_SIZE] {
        std::array::from_fn(|index| self.0 & (1u128 << index) != 0)
    }

    /// `1.0` for members, `0.0` otherwise; the shape a policy head multiplies
    /// its logits by.
    pub fn to_f32_mask(&self) -> [f32; DECK_SIZE] {
        std::array::from_fn(|index| if self.0 & (1u128 << index) != 0 { 1.0 } else { 0.0 })
    }

    pub const fn contains(&self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    /// Returns `true` when the card was not already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(card);
        self.0 |= Self::bit(card);
        fresh
    }

    /// Returns `true` when the card was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 &= !Self::bit(card);
        present
    }

    pub const fn with(self, card: Card) -> Self {
        Self(self.0 | Self::bit(card))
    }

    pub const fn without(self, card: Card) -> Self {
        Self(self.0 & !Self::bit(card))
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn has_excuse(&self) -> bool {
        self.contains(Card::EXCUSE)
    }

    /// Trumps in the set, Excuse excluded.
    pub const fn trumps(self) -> Self {
        self.intersection(Self::all_trumps())
    }

    pub const fn suit(self, suit: Suit) -> Self {
        self.intersection(Self::all_of(suit))
    }

    pub fn highest_trump(&self) -> Option<Card> {
        self.trumps().highest()
    }

    pub fn highest(&self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        let id = 127 - self.0.leading_zeros();
        Card::from_id(id as u8).ok()
    }

    pub fn lowest(&self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        Card::from_id(self.0.trailing_zeros() as u8).ok()
    }

    /// Members in ascending identifier order.
    pub fn iter(&self) -> CardSetIter {
        CardSetIter(self.0)
    }

    const fn bit(card: Card) -> u128 {
        1u128 << card.id()
    }
}

/// Drains a copy of the set from the lowest identifier upwards.
#[derive(Debug, Clone)]
pub struct CardSetIter(u128);

impl Iterator for CardSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let id = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Card::from_id(id).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CardSetIter {}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = CardSetIter;

    fn into_iter(self) -> CardSetIter {
        self.iter()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CardSet::empty(), |set, card| set.with(card))
    }
}

impl TryFrom<Vec<u8>> for CardSet {
    type Error = RulesError;

    fn try_from(ids: Vec<u8>) -> Result<Self, Self::Error> {
        let mut set = CardSet::empty();
        for id in ids {
            let card = Card::from_id(id)?;
            if !set.insert(card) {
                return Err(RulesError::DuplicateCard(card));
            }
        }
        Ok(set)
    }
}

impl From<CardSet> for Vec<u8> {
    fn from(set: CardSet) -> Self {
        set.iter().map(u8::from).collect()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, card) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
