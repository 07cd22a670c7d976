//! Stateless play rules: which cards may be played and who takes a trick.

pub mod legal;
pub mod winner;

pub use legal::{legal_moves, legal_moves_mask};
pub use winner::{trick_winner, trick_winner_ids};
