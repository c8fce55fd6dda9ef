//! Statically checked selection tests

use pick_types::{Choice, Menu, Suit, select_one, try_select_one};

#[test]
fn single_entry_menu_returns_its_entry() {
    assert_eq!(select_one([Suit::Spades], |[only]| only), Suit::Spades);
}

#[test]
fn returns_whichever_is_not_clubs() {
    let picked = select_one([Suit::Clubs, Suit::Diamonds], |[first, second]| {
        if *first == Suit::Clubs { second } else { first }
    });
    assert_eq!(picked, Suit::Diamonds);
}

#[test]
fn third_element_is_hearts_however_the_others_are_ordered() {
    let others = [Suit::Clubs, Suit::Diamonds, Suit::Spades];
    let orderings = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for [a, b, c] in orderings {
        let menu = [others[a], others[b], Suit::Hearts, others[c]];
        let picked = select_one(menu, |[_, _, third, _]| third);
        assert_eq!(picked, Suit::Hearts);
    }
}

#[test]
fn chooser_can_inspect_before_deciding() {
    let picked = select_one(Suit::ALL, |choices| {
        choices
            .into_iter()
            .max_by_key(|choice| choice.get().symbol())
            .unwrap_or_else(|| unreachable!("menu is not empty"))
    });
    // ♦ (U+2666) sorts after ♣ ♥ ♠.
    assert_eq!(picked, Suit::Diamonds);
}

#[test]
fn positions_follow_menu_order() {
    let picked = select_one(["a", "b", "c", "d"], |choices| {
        let seen = choices.each_ref().map(Choice::position);
        assert_eq!(seen, [0, 1, 2, 3]);
        let [first, ..] = choices;
        first
    });
    assert_eq!(picked, "a");
}

#[test]
fn unselected_entries_are_dropped_with_the_call() {
    use std::rc::Rc;

    let tracked = Rc::new(());
    let menu = [Rc::clone(&tracked), Rc::clone(&tracked), Rc::clone(&tracked)];
    assert_eq!(Rc::strong_count(&tracked), 4);

    let kept = select_one(menu, |[_, middle, _]| middle);
    assert_eq!(Rc::strong_count(&tracked), 2);
    drop(kept);
    assert_eq!(Rc::strong_count(&tracked), 1);
}

#[test]
fn try_select_one_releases_on_error() {
    let result: Result<Suit, String> = try_select_one([Suit::Hearts, Suit::Hearts], |choices| {
        let [first, second] = choices;
        if first.get() == second.get() {
            Err(format!("both entries are {}", *first))
        } else {
            Ok(first)
        }
    });
    assert_eq!(result, Err("both entries are hearts".to_string()));
}

#[test]
fn menu_selection_is_pointer_identical() {
    let menu = Menu::new([String::from("north"), String::from("south")]);
    let picked = menu.select(|[_, south]| south);
    assert!(std::ptr::eq(picked, &menu.entries()[1]));
    assert_eq!(picked, "south");
}

#[test]
fn menu_from_vec_rejects_wrong_length() {
    let err = Menu::<Suit, 4>::try_from(vec![Suit::Clubs]).unwrap_err();
    assert_eq!(err.expected, 4);
    assert_eq!(err.found, 1);
}
