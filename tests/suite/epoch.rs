//! Runtime-checked selection tests

use pick_types::{StaleChoiceError, StampedChoice, Suit, select_one_checked};

#[test]
fn returns_whichever_is_not_clubs() {
    let picked = select_one_checked([Suit::Clubs, Suit::Diamonds], |[first, second]| {
        let is_clubs = matches!(first.get(), Ok(Suit::Clubs));
        if is_clubs { second } else { first }
    });
    assert_eq!(picked, Ok(Suit::Diamonds));
}

#[test]
fn single_entry_menu_returns_its_entry() {
    assert_eq!(select_one_checked([7_u8], |[only]| only), Ok(7));
}

#[test]
fn captured_choice_fails_in_a_later_selection() {
    let mut captured: Option<StampedChoice<Suit>> = None;
    let first_round = select_one_checked([Suit::Clubs, Suit::Diamonds], |[clubs, diamonds]| {
        captured = Some(clubs);
        diamonds
    });
    assert_eq!(first_round, Ok(Suit::Diamonds));

    let captured = captured.expect("chooser ran");
    let origin = captured.epoch();
    assert!(matches!(
        captured.get(),
        Err(StaleChoiceError::Expired { epoch }) if epoch == origin
    ));

    let second_round = select_one_checked([Suit::Hearts, Suit::Spades], move |_| captured);
    match second_round {
        Err(StaleChoiceError::Mismatched { expected, found }) => {
            assert_eq!(found, origin);
            assert_ne!(expected, origin);
        }
        other => panic!("captured choice was accepted: {other:?}"),
    }
}

#[test]
fn every_call_gets_a_fresh_epoch() {
    let mut epochs = Vec::new();
    for _ in 0..3 {
        let _ = select_one_checked([1, 2], |[first, _]| {
            epochs.push(first.epoch());
            first
        });
    }
    epochs.dedup();
    assert_eq!(epochs.len(), 3);
}

#[test]
fn nested_selections_are_independent() {
    let mut captured = None;
    let _ = select_one_checked(["a"], |[only]| {
        captured = Some(select_one_checked(["b"], |[inner]| inner));
        only
    });
    assert_eq!(captured, Some(Ok("b")));
}
