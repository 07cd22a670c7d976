use crate::error::RulesError;
use crate::model::card::{Card, SUITED_BASE};
use crate::model::card_set::CardSet;
use crate::model::seat::PLAYERS;
use tracing::trace;

/// Play-order position (`0..4`) of the player who wins a completed trick.
///
/// An Excuse lead is skipped and the trick is judged from the second card.
/// Otherwise the strongest trump wins if any trump was played, and failing
/// that the highest card of the led suit.
pub fn trick_winner(plays: &[Card; PLAYERS]) -> Result<usize, RulesError> {
    let mut seen = CardSet::empty();
    for &card in plays {
        if !seen.insert(card) {
            return Err(RulesError::DuplicateCard(card));
        }
    }
    let winner = resolve(plays);
    trace!(
        target: "tarot_core::winner",
        plays = ?plays.map(u8::from),
        winner,
        "trick resolved"
    );
    Ok(winner)
}

/// Raw-identifier form of [`trick_winner`].
pub fn trick_winner_ids(plays: &[u8]) -> Result<usize, RulesError> {
    if plays.len() != PLAYERS {
        return Err(RulesError::TrickLength { len: plays.len() });
    }
    let mut cards = [Card::EXCUSE; PLAYERS];
    for (slot, &id) in cards.iter_mut().zip(plays) {
        *slot = Card::from_id(id)?;
    }
    trick_winner(&cards)
}

fn resolve(plays: &[Card]) -> usize {
    let Some((&lead, rest)) = plays.split_first() else {
        return 0;
    };
    if lead.is_excuse() && !rest.is_empty() {
        return 1 + resolve(rest);
    }

    if plays.iter().any(|card| card.is_trump()) {
        return first_argmax(plays.iter().map(|&card| trump_weight(card)));
    }

    match lead.suit() {
        Some(suit) => {
            let (low, high) = (i32::from(suit.low()), i32::from(suit.high()));
            first_argmax(plays.iter().map(|&card| follow_weight(card, low, high)))
        }
        // A lone Excuse.
        None => 0,
    }
}

/// Trumps keep their strength, every other card scores zero or below.
fn trump_weight(card: Card) -> i32 {
    let id = i32::from(card.id());
    id * (i32::from(SUITED_BASE) - id).signum()
}

/// Positive only strictly inside `(low, high)`; zero on either bound and for
/// the Excuse; negative elsewhere.
fn follow_weight(card: Card, low: i32, high: i32) -> i32 {
    let id = i32::from(card.id());
    id * ((id - low).signum() + (high - id).signum() - 1)
}

// Ties go to the earliest position.
fn first_argmax(weights: impl Iterator<Item = i32>) -> usize {
    let mut best: Option<(usize, i32)> = None;
    for (position, weight) in weights.enumerate() {
        match best {
            Some((_, top)) if weight <= top => {}
            _ => best = Some((position, weight)),
        }
    }
    best.map_or(0, |(position, _)| position)
}
