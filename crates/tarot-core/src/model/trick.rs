use crate::error::RulesError;
use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::seat::{PLAYERS, Seat};
use crate::rules::{legal_moves, trick_winner};
use thiserror::Error;

/// A trick being played, in play order from `leader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("trick has {plays} plays; a winner needs 4")]
    Incomplete { plays: usize },
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{0} has already played this trick")]
    AlreadyPlayed(Seat),
    #[error("{0} is already on the table")]
    CardAlreadyInTrick(Card),
    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Seat expected to play next, `None` once the trick is complete.
    pub fn next_to_play(&self) -> Option<Seat> {
        (!self.is_complete()).then(|| self.leader.offset(self.plays.len()))
    }

    pub fn played_cards(&self) -> CardSet {
        self.plays.iter().map(|play| play.card).collect()
    }

    pub fn first_card(&self) -> Option<Card> {
        self.plays.first().map(|play| play.card)
    }

    pub fn second_card(&self) -> Option<Card> {
        self.plays.get(1).map(|play| play.card)
    }

    /// Cards of `hand` that may be played onto this trick.
    pub fn legal_moves(&self, hand: &CardSet) -> Result<CardSet, RulesError> {
        legal_moves(
            hand,
            &self.played_cards(),
            self.first_card(),
            self.second_card(),
        )
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        let Some(expected) = self.next_to_play() else {
            return Err(TrickError::TrickComplete);
        };

        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        if self.plays.iter().any(|play| play.card == card) {
            return Err(TrickError::CardAlreadyInTrick(card));
        }

        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// Cards in play order once all four players have played.
    pub fn cards(&self) -> Option<[Card; PLAYERS]> {
        if !self.is_complete() {
            return None;
        }
        Some(std::array::from_fn(|position| self.plays[position].card))
    }

    pub fn winner(&self) -> Result<Seat, TrickError> {
        let cards = self.cards().ok_or(TrickError::Incomplete {
            plays: self.plays.len(),
        })?;
        let position = trick_winner(&cards)?;
        Ok(self.plays[position].seat)
    }
}
