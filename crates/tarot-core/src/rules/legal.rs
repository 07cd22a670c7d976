use crate::error::RulesError;
use crate::model::card::{Card, CardKind, DECK_SIZE};
use crate::model::card_set::CardSet;
use crate::model::seat::PLAYERS;
use crate::model::suit::Suit;
use tracing::{debug, trace};

/// Cards of `hand` that may legally be played next.
///
/// `played` holds the cards already on the table in the current trick,
/// `first` and `second` the cards played by the first two players of the
/// trick (`None` until that player has played). The result is always a
/// subset of `hand`, and is non-empty whenever `hand` is.
///
/// Rules, in order:
/// - leading a trick: anything;
/// - Excuse led: free if it is the only card down, otherwise the trick is
///   judged as if the second card had been led;
/// - trump led: overtrump if possible (or play the Excuse), else any trump,
///   else anything;
/// - suit led: follow suit (or play the Excuse), else trump as if trump had
///   been led, else anything.
pub fn legal_moves(
    hand: &CardSet,
    played: &CardSet,
    first: Option<Card>,
    second: Option<Card>,
) -> Result<CardSet, RulesError> {
    validate(hand, played, first, second).inspect_err(|err| {
        debug!(
            target: "tarot_core::legal",
            error = %err,
            hand = %hand,
            played = %played,
            "rejected legal move request"
        );
    })?;
    Ok(resolve(*hand, *played, first, second))
}

/// Boolean-mask form of [`legal_moves`] for callers holding raw arrays.
pub fn legal_moves_mask(
    hand: &[bool],
    played: &[bool],
    first: Option<u8>,
    second: Option<u8>,
) -> Result<[bool; DECK_SIZE], RulesError> {
    let hand = CardSet::from_named_mask("hand", hand)?;
    let played = CardSet::from_named_mask("played", played)?;
    let first = first.map(Card::from_id).transpose()?;
    let second = second.map(Card::from_id).transpose()?;
    legal_moves(&hand, &played, first, second).map(|legal| legal.to_mask())
}

fn validate(
    hand: &CardSet,
    played: &CardSet,
    first: Option<Card>,
    second: Option<Card>,
) -> Result<(), RulesError> {
    let count = played.len();
    if count >= PLAYERS {
        return Err(RulesError::TrickFull { played: count });
    }
    if let Some(card) = hand.intersection(*played).lowest() {
        return Err(RulesError::CardHeldAndPlayed(card));
    }

    match first {
        None if count > 0 => return Err(RulesError::MissingFirstMove),
        Some(card) if count == 0 => return Err(RulesError::UnexpectedFirstMove(card)),
        Some(card) if !played.contains(card) => return Err(RulesError::FirstMoveNotPlayed(card)),
        _ => {}
    }

    match second {
        None if count >= 2 => Err(RulesError::MissingSecondMove),
        Some(card) if count < 2 => Err(RulesError::UnexpectedSecondMove(card)),
        Some(card) if Some(card) == first => Err(RulesError::SecondMoveRepeatsFirst(card)),
        Some(card) if !played.contains(card) => Err(RulesError::SecondMoveNotPlayed(card)),
        _ => Ok(()),
    }
}

// Works on its own copies of the trick state; an Excuse lead is rewritten
// as a lead by the second player and the loop runs again.
fn resolve(
    hand: CardSet,
    mut played: CardSet,
    mut first: Option<Card>,
    mut second: Option<Card>,
) -> CardSet {
    loop {
        if played.is_empty() {
            return hand;
        }
        let Some(lead) = first else {
            return hand;
        };

        match lead.kind() {
            CardKind::Excuse => {
                if played.len() == 1 {
                    return hand;
                }
                trace!(
                    target: "tarot_core::legal",
                    next_lead = ?second,
                    "excuse led; judging trick from the second card"
                );
                played.remove(Card::EXCUSE);
                first = second.take();
            }
            CardKind::Trump(_) => return follow_trump(hand, played),
            CardKind::Suited { suit, .. } => return follow_suit(hand, played, suit),
        }
    }
}

fn follow_trump(hand: CardSet, played: CardSet) -> CardSet {
    let best_played = played.highest_trump().map_or(0, Card::id);
    let best_held = hand.highest_trump().map_or(0, Card::id);

    if best_held >= best_played {
        // Forced overtrump.
        let stronger: CardSet = hand
            .trumps()
            .iter()
            .filter(|trump| trump.id() > best_played)
            .collect();
        stronger.union(excuse_of(hand))
    } else if best_held > 0 {
        hand.intersection(CardSet::all_trumps().with(Card::EXCUSE))
    } else {
        hand
    }
}

fn follow_suit(hand: CardSet, played: CardSet, suit: Suit) -> CardSet {
    let following = hand.suit(suit);
    if !following.is_empty() {
        return following.union(excuse_of(hand));
    }
    if !hand.trumps().is_empty() {
        trace!(
            target: "tarot_core::legal",
            led = %suit,
            "void in led suit; trump is forced"
        );
        return follow_trump(hand, played);
    }
    hand
}

fn excuse_of(hand: CardSet) -> CardSet {
    hand.intersection(CardSet::empty().with(Card::EXCUSE))
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, legal_moves_mask};
    use crate::error::RulesError;
    use crate::model::card::{Card, DECK_SIZE};
    use crate::model::card_set::CardSet;

    fn cards(ids: &[u8]) -> CardSet {
        ids.iter().map(|&id| Card::from_id(id).unwrap()).collect()
    }

    fn card(id: u8) -> Card {
        Card::from_id(id).unwrap()
    }

    fn legal(hand: &[u8], played: &[u8], first: Option<u8>, second: Option<u8>) -> CardSet {
        legal_moves(
            &cards(hand),
            &cards(played),
            first.map(card),
            second.map(card),
        )
        .unwrap()
    }

    #[test]
    fn leader_may_play_anything() {
        let hand = [0, 3, 25, 60];
        assert_eq!(legal(&hand, &[], None, None), cards(&hand));
    }

    #[test]
    fn lone_excuse_imposes_nothing() {
        let hand = [3, 25, 60];
        assert_eq!(legal(&hand, &[0], Some(0), None), cards(&hand));
    }

    #[test]
    fn forced_overtrump_keeps_only_stronger_trumps() {
        assert_eq!(legal(&[2, 10, 30], &[5], Some(5), None), cards(&[10]));
    }

    #[test]
    fn overtrump_allows_the_excuse() {
        assert_eq!(legal(&[0, 2, 10, 30], &[5], Some(5), None), cards(&[0, 10]));
    }

    #[test]
    fn overtrump_measures_against_best_trump_played() {
        // Trump 5 led, trump 12 on top; only 14 beats it.
        assert_eq!(
            legal(&[4, 9, 14, 40], &[5, 12], Some(5), Some(12)),
            cards(&[14])
        );
    }

    #[test]
    fn undertrumping_allows_any_trump_and_the_excuse() {
        assert_eq!(
            legal(&[0, 2, 3, 30, 50], &[18], Some(18), None),
            cards(&[0, 2, 3])
        );
    }

    #[test]
    fn no_trump_on_trump_lead_frees_the_hand() {
        let hand = [0, 30, 50];
        assert_eq!(legal(&hand, &[18], Some(18), None), cards(&hand));
    }

    #[test]
    fn must_follow_suit_or_excuse() {
        // Spades block is 22..36.
        assert_eq!(
            legal(&[0, 5, 23, 35, 36], &[30], Some(30), None),
            cards(&[0, 23, 35])
        );
    }

    #[test]
    fn void_in_suit_must_trump() {
        assert_eq!(legal(&[4, 9, 40], &[30], Some(30), None), cards(&[4, 9]));
    }

    #[test]
    fn void_in_suit_must_overtrump_a_trump_already_played() {
        assert_eq!(
            legal(&[0, 4, 9, 40], &[30, 7], Some(30), Some(7)),
            cards(&[0, 9])
        );
    }

    #[test]
    fn void_in_suit_with_weak_trumps_plays_any_trump() {
        assert_eq!(
            legal(&[0, 4, 6, 40], &[30, 7], Some(30), Some(7)),
            cards(&[0, 4, 6])
        );
    }

    #[test]
    fn void_in_suit_and_trump_frees_the_hand() {
        let hand = [0, 40, 60];
        assert_eq!(legal(&hand, &[30], Some(30), None), cards(&hand));
    }

    #[test]
    fn excuse_lead_is_judged_from_second_card() {
        // Excuse then spade 30: must follow spades.
        assert_eq!(
            legal(&[23, 40, 8], &[0, 30], Some(0), Some(30)),
            cards(&[23])
        );
        // Excuse then trump 12, third card trump 15: must beat 15.
        assert_eq!(
            legal(&[13, 16, 40], &[0, 12, 15], Some(0), Some(12)),
            cards(&[16])
        );
    }

    #[test]
    fn result_is_a_subset_of_hand() {
        let hand = cards(&[1, 2, 22, 45, 70]);
        let result = legal_moves(&hand, &cards(&[50]), Some(card(50)), None).unwrap();
        assert!(result.is_subset(&hand));
        assert_eq!(result, cards(&[1, 2]));
    }

    #[test]
    fn trump_lead_must_be_marked_played() {
        let err = legal_moves(&cards(&[2, 10]), &cards(&[6]), Some(card(5)), None).unwrap_err();
        assert_eq!(err, RulesError::FirstMoveNotPlayed(card(5)));
    }

    #[test]
    fn validation_rejects_inconsistent_trick_state() {
        let hand = cards(&[2, 10]);
        assert_eq!(
            legal_moves(&hand, &cards(&[5]), None, None),
            Err(RulesError::MissingFirstMove)
        );
        assert_eq!(
            legal_moves(&hand, &CardSet::empty(), Some(card(5)), None),
            Err(RulesError::UnexpectedFirstMove(card(5)))
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[5, 6]), Some(card(5)), None),
            Err(RulesError::MissingSecondMove)
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[5]), Some(card(5)), Some(card(6))),
            Err(RulesError::UnexpectedSecondMove(card(6)))
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[5, 6]), Some(card(5)), Some(card(5))),
            Err(RulesError::SecondMoveRepeatsFirst(card(5)))
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[5, 6]), Some(card(5)), Some(card(7))),
            Err(RulesError::SecondMoveNotPlayed(card(7)))
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[10]), Some(card(10)), None),
            Err(RulesError::CardHeldAndPlayed(card(10)))
        );
        assert_eq!(
            legal_moves(&hand, &cards(&[5, 6, 7, 8]), Some(card(5)), Some(card(6))),
            Err(RulesError::TrickFull { played: 4 })
        );
    }

    #[test]
    fn mask_form_validates_shape_and_range() {
        let mut hand = [false; DECK_SIZE];
        hand[2] = true;
        hand[10] = true;
        hand[30] = true;
        let mut played = [false; DECK_SIZE];
        played[5] = true;
        let hand_before = hand;
        let played_before = played;

        let legal = legal_moves_mask(&hand, &played, Some(5), None).unwrap();
        let chosen: Vec<usize> = (0..DECK_SIZE).filter(|&i| legal[i]).collect();
        assert_eq!(chosen, vec![10]);
        assert_eq!(hand, hand_before);
        assert_eq!(played, played_before);

        assert_eq!(
            legal_moves_mask(&hand[..77], &played, Some(5), None),
            Err(RulesError::MaskLength {
                field: "hand",
                len: 77
            })
        );
        assert_eq!(
            legal_moves_mask(&hand, &played, Some(78), None),
            Err(RulesError::CardOutOfRange { id: 78 })
        );
    }
}
