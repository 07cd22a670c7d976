use tarot_core::RulesError;
use tarot_core::game::{DealGenerator, DealTensors};
use tarot_core::model::{Card, CardSet, DECK_SIZE};
use tarot_core::rules::{legal_moves, legal_moves_mask, trick_winner, trick_winner_ids};

fn card(id: u8) -> Card {
    Card::from_id(id).expect("valid id")
}

fn cards(ids: &[u8]) -> CardSet {
    ids.iter().map(|&id| card(id)).collect()
}

fn mask(ids: &[u8]) -> [bool; DECK_SIZE] {
    let mut mask = [false; DECK_SIZE];
    for &id in ids {
        mask[id as usize] = true;
    }
    mask
}

#[test]
fn forced_overtrump_on_trump_lead() {
    let legal = legal_moves(&cards(&[2, 10, 30]), &cards(&[5]), Some(card(5)), None)
        .expect("valid trick state");
    assert_eq!(legal, cards(&[10]));

    let raw = legal_moves_mask(&mask(&[2, 10, 30]), &mask(&[5]), Some(5), None)
        .expect("valid trick state");
    assert_eq!(raw, mask(&[10]));
}

#[test]
fn excuse_led_trick_goes_to_strongest_trump() {
    let plays = [0, 8, 3, 19].map(card);
    assert_eq!(trick_winner(&plays), Ok(3));
    assert_eq!(trick_winner_ids(&[0, 8, 3, 19]), Ok(3));
}

#[test]
fn led_suit_decides_when_no_trump_falls() {
    // Spades block is 22..36; 40 is a heart and cannot win.
    assert_eq!(trick_winner_ids(&[30, 22, 35, 40]), Ok(2));
}

#[test]
fn seeded_deals_are_reproducible() {
    let first = DealGenerator::with_seed(0xDEC0).generate(1).expect("one game");
    let again = DealGenerator::with_seed(0xDEC0).generate(1).expect("one game");
    let other = DealGenerator::with_seed(0xDEC1).generate(1).expect("one game");
    assert_eq!(first, again);
    assert_ne!(first, other);

    let tensors = DealTensors::from_deals(&first);
    assert_eq!(tensors.games(), 1);
}

#[test]
fn trump_lead_missing_from_played_mask_is_rejected() {
    let err = legal_moves_mask(&mask(&[2, 10]), &mask(&[30]), Some(5), None).unwrap_err();
    assert_eq!(err, RulesError::FirstMoveNotPlayed(card(5)));
}

#[test]
fn legal_move_mask_feeds_a_policy_head() {
    let hand = cards(&[0, 3, 23, 24, 70]);
    let legal = legal_moves(&hand, &cards(&[25]), Some(card(25)), None).expect("valid");
    let weights = legal.to_f32_mask();
    let playable: Vec<usize> = (0..DECK_SIZE).filter(|&i| weights[i] > 0.0).collect();
    assert_eq!(playable, vec![0, 23, 24]);
}
