use crate::error::RulesError;
use crate::game::deal::{Deal, HAND_SIZE};
use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::seat::{PLAYERS, Seat};
use crate::model::trick::{Trick, TrickError};
use thiserror::Error;
use tracing::debug;

/// Card play for one deal: hands, the trick on the table, completed tricks
/// and a ledger of every card played so far.
///
/// Owned by the caller; the rules functions it calls keep no state.
#[derive(Debug, Clone)]
pub struct RoundState {
    hands: [CardSet; PLAYERS],
    dog: CardSet,
    current_trick: Trick,
    trick_history: Vec<CompletedTrick>,
    played: CardSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    pub trick: Trick,
    pub winner: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Seat, trick_number: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("every card of the round has been played")]
    RoundComplete,
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{seat} does not hold {card}")]
    CardNotInHand { seat: Seat, card: Card },
    #[error("{0} was already played this round")]
    AlreadyPlayed(Card),
    #[error("{card} may not be played; legal cards are {legal}")]
    IllegalCard { card: Card, legal: CardSet },
    #[error(transparent)]
    Trick(#[from] TrickError),
    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl RoundState {
    pub fn deal(deal: &Deal, leader: Seat) -> Self {
        Self {
            hands: *deal.hands(),
            dog: deal.dog(),
            current_trick: Trick::new(leader),
            trick_history: Vec::with_capacity(HAND_SIZE),
            played: CardSet::empty(),
        }
    }

    pub fn hand(&self, seat: Seat) -> CardSet {
        self.hands[seat.index()]
    }

    pub fn dog(&self) -> CardSet {
        self.dog
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[CompletedTrick] {
        &self.trick_history
    }

    pub fn tricks_completed(&self) -> usize {
        self.trick_history.len()
    }

    /// Every card played this round, the current trick included.
    pub fn played_cards(&self) -> CardSet {
        self.played
    }

    pub fn is_complete(&self) -> bool {
        self.hands.iter().all(CardSet::is_empty)
    }

    pub fn expected_to_play(&self) -> Option<Seat> {
        if self.is_complete() {
            return None;
        }
        self.current_trick.next_to_play()
    }

    pub fn legal_moves(&self, seat: Seat) -> Result<CardSet, PlayError> {
        Ok(self.current_trick.legal_moves(&self.hands[seat.index()])?)
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        let expected = self.expected_to_play().ok_or(PlayError::RoundComplete)?;
        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        if !self.hands[seat.index()].contains(card) {
            return Err(PlayError::CardNotInHand { seat, card });
        }

        if self.played.contains(card) {
            return Err(PlayError::AlreadyPlayed(card));
        }

        let legal = self.legal_moves(seat)?;
        if !legal.contains(card) {
            return Err(PlayError::IllegalCard { card, legal });
        }

        self.current_trick.play(seat, card)?;
        self.hands[seat.index()].remove(card);
        self.played.insert(card);

        if !self.current_trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let winner = self.current_trick.winner()?;
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        self.trick_history.push(CompletedTrick {
            trick: finished,
            winner,
        });
        let trick_number = self.trick_history.len();
        debug!(
            target: "tarot_core::round",
            trick_number,
            winner = %winner,
            "trick completed"
        );
        Ok(PlayOutcome::TrickCompleted {
            winner,
            trick_number,
        })
    }
}
