pub mod deal;
pub mod round;

pub use deal::{DOG_SIZE, Deal, DealGenerator, DealTensors, HAND_SIZE, generate_deals};
pub use round::{CompletedTrick, PlayError, PlayOutcome, RoundState};
