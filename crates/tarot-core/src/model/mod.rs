//! Card encoding and the value types built on it.
//!
//! This module is composed of:
//! - `card`, `suit`, `rank`: the 78-identifier deck encoding.
//! - `card_set`: 78-bit sets used for hands, the dog and trick masks.
//! - `deck`, `seat`: shuffling and table positions.
//! - `trick`: a trick being played, checked against the rules.

pub mod card;
pub mod card_set;
pub mod deck;
pub mod rank;
pub mod seat;
pub mod suit;
pub mod trick;

pub use card::{Card, CardKind, DECK_SIZE};
pub use card_set::CardSet;
pub use seat::{PLAYERS, Seat};
pub use suit::Suit;
