use crate::model::card::{Card, DECK_SIZE};
use crate::model::card_set::CardSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 78 cards in identifier order.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(Card::all());
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards `start..start + len` of the current order as a set.
    pub(crate) fn block(&self, start: usize, len: usize) -> CardSet {
        self.cards[start..start + len].iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::model::card_set::CardSet;

    #[test]
    fn standard_deck_has_78_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.cards().len(), 78);
        let unique: CardSet = deck.cards().iter().copied().collect();
        assert_eq!(unique, CardSet::full());
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn blocks_follow_deck_order() {
        let deck = Deck::standard();
        let block = deck.block(20, 4);
        let ids: Vec<u8> = block.iter().map(u8::from).collect();
        assert_eq!(ids, vec![20, 21, 22, 23]);
    }
}
