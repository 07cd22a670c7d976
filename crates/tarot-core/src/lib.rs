//! Rules engine for four-player French Tarot card play.
//!
//! Cards are identified by `0..=77`: the Excuse is `0`, trumps are `1..=21`
//! and the four suits occupy consecutive blocks of fourteen from `22`.
//! The engine answers three questions without keeping any state between
//! calls: which cards a player may play next ([`rules::legal_moves`]), who
//! takes a completed trick ([`rules::trick_winner`]), and how a batch of
//! games is dealt ([`game::DealGenerator`]).

pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod rules;

pub use error::RulesError;

pub struct EngineInfo;

impl EngineInfo {
    pub const fn name() -> &'static str {
        "tarot-core"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::EngineInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(EngineInfo::name(), "tarot-core");
        assert!(!EngineInfo::version().is_empty());
    }
}
