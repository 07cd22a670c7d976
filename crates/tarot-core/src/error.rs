use crate::model::card::Card;
use thiserror::Error;

/// Input validation failures raised by the rules engine.
///
/// Every public entry point checks its preconditions before computing
/// anything, so an error here means no partial result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("card identifier {id} is outside 0..=77")]
    CardOutOfRange { id: u8 },
    #[error("{field} mask has {len} entries, expected 78")]
    MaskLength { field: &'static str, len: usize },
    #[error("trick already holds {played} cards; nothing is left to play")]
    TrickFull { played: usize },
    #[error("{0} is both held in hand and marked as played")]
    CardHeldAndPlayed(Card),
    #[error("cards were played but no first move was given")]
    MissingFirstMove,
    #[error("first move {0} given for an empty trick")]
    UnexpectedFirstMove(Card),
    #[error("first move {0} is not marked as played")]
    FirstMoveNotPlayed(Card),
    #[error("two or more cards were played but no second move was given")]
    MissingSecondMove,
    #[error("second move {0} given before two cards were played")]
    UnexpectedSecondMove(Card),
    #[error("second move {0} is not marked as played")]
    SecondMoveNotPlayed(Card),
    #[error("second move {0} repeats the first move")]
    SecondMoveRepeatsFirst(Card),
    #[error("a completed trick has exactly 4 plays, got {len}")]
    TrickLength { len: usize },
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    #[error("deal request must ask for at least one game, got {0}")]
    InvalidGameCount(usize),
}
