use crate::error::RulesError;
use crate::model::card::DECK_SIZE;
use crate::model::card_set::CardSet;
use crate::model::deck::Deck;
use crate::model::seat::{PLAYERS, Seat};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cards set aside at deal time.
pub const DOG_SIZE: usize = 6;
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 18;

/// Initial hands and dog of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    hands: [CardSet; PLAYERS],
    dog: CardSet,
}

impl Deal {
    /// The first six cards of the deck go to the dog, then four consecutive
    /// blocks of eighteen to North, East, South and West.
    pub fn from_deck(deck: &Deck) -> Self {
        let dog = deck.block(0, DOG_SIZE);
        let hands = std::array::from_fn(|seat| deck.block(DOG_SIZE + seat * HAND_SIZE, HAND_SIZE));
        Self { hands, dog }
    }

    pub fn hand(&self, seat: Seat) -> CardSet {
        self.hands[seat.index()]
    }

    pub fn hands(&self) -> &[CardSet; PLAYERS] {
        &self.hands
    }

    pub fn dog(&self) -> CardSet {
        self.dog
    }

    /// Dog and hands are pairwise disjoint, correctly sized, and together
    /// hold the whole deck.
    pub fn is_partition(&self) -> bool {
        let mut seen = self.dog;
        if seen.len() != DOG_SIZE {
            return false;
        }
        for hand in &self.hands {
            if hand.len() != HAND_SIZE || !seen.is_disjoint(hand) {
                return false;
            }
            seen = seen.union(*hand);
        }
        seen == CardSet::full()
    }

    pub fn hand_masks(&self) -> [[bool; DECK_SIZE]; PLAYERS] {
        self.hands.map(|hand| hand.to_mask())
    }

    pub fn dog_mask(&self) -> [bool; DECK_SIZE] {
        self.dog.to_mask()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let deal: Deal = serde_json::from_str(json)?;
        if !deal.is_partition() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "dog and hands do not partition the deck",
            ));
        }
        Ok(deal)
    }
}

/// A batch of deals laid out as `f32` one-hot rows, `hands[game][seat][card]`
/// and `dog[game][card]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DealTensors {
    pub hands: Vec<[[f32; DECK_SIZE]; PLAYERS]>,
    pub dog: Vec<[f32; DECK_SIZE]>,
}

impl DealTensors {
    pub fn from_deals(deals: &[Deal]) -> Self {
        Self {
            hands: deals
                .iter()
                .map(|deal| deal.hands.map(|hand| hand.to_f32_mask()))
                .collect(),
            dog: deals.iter().map(|deal| deal.dog.to_f32_mask()).collect(),
        }
    }

    pub fn games(&self) -> usize {
        self.dog.len()
    }
}

/// Deals `games` independent games, each from a fresh uniform shuffle drawn
/// from `rng`.
pub fn generate_deals<R: Rng + ?Sized>(games: usize, rng: &mut R) -> Result<Vec<Deal>, RulesError> {
    if games == 0 {
        return Err(RulesError::InvalidGameCount(games));
    }
    Ok((0..games)
        .map(|_| Deal::from_deck(&Deck::shuffled(&mut *rng)))
        .collect())
}

/// Seeded source of deal batches.
///
/// Every game is shuffled by its own `StdRng` seeded from the generator's
/// stream, so a batch depends only on the generator seed and on how many
/// games were drawn before it, whether it is produced sequentially or across
/// the rayon pool.
#[derive(Debug, Clone)]
pub struct DealGenerator {
    seed: u64,
    rng: StdRng,
}

impl DealGenerator {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self, games: usize) -> Result<Vec<Deal>, RulesError> {
        let seeds = self.game_seeds(games)?;
        let deals: Vec<Deal> = seeds.into_iter().map(deal_for_seed).collect();
        debug!(
            target: "tarot_core::deal",
            seed = self.seed,
            games,
            "generated deals"
        );
        Ok(deals)
    }

    pub fn generate_parallel(&mut self, games: usize) -> Result<Vec<Deal>, RulesError> {
        let seeds = self.game_seeds(games)?;
        let deals: Vec<Deal> = seeds.into_par_iter().map(deal_for_seed).collect();
        debug!(
            target: "tarot_core::deal",
            seed = self.seed,
            games,
            parallel = true,
            "generated deals"
        );
        Ok(deals)
    }

    fn game_seeds(&mut self, games: usize) -> Result<Vec<u64>, RulesError> {
        if games == 0 {
            return Err(RulesError::InvalidGameCount(games));
        }
        Ok((0..games).map(|_| self.rng.next_u64()).collect())
    }
}

impl Default for DealGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn deal_for_seed(seed: u64) -> Deal {
    Deal::from_deck(&Deck::shuffled_with_seed(seed))
}
