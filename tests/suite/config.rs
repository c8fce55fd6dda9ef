//! Config loading tests

use pick_config::{ConfigError, PickConfig, Strategy};
use pick_types::Suit;

use crate::common::{menu_literal, write_config};

#[test]
fn loads_menu_strategy_and_logging() {
    let menu = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    let (_dir, path) = write_config(&format!(
        "[round]\nmenu = {}\nstrategy = {{ kind = \"avoid\", suit = \"spades\" }}\n\n[logging]\nfilter = \"debug\"\n",
        menu_literal(&menu)
    ));

    let config = PickConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.log_filter(), Some("debug"));
    let round = config.round.unwrap();
    assert_eq!(round.menu.unwrap().menu().entries(), &menu);
    assert_eq!(round.strategy, Some(Strategy::Avoid(Suit::Spades)));
}

#[test]
fn duplicate_suits_are_a_parse_error() {
    let menu = [Suit::Spades, Suit::Spades, Suit::Diamonds, Suit::Clubs];
    let (_dir, path) = write_config(&format!("[round]\nmenu = {}\n", menu_literal(&menu)));

    let err = PickConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn out_of_range_position_is_a_parse_error() {
    let (_dir, path) = write_config("[round]\nstrategy = { kind = \"position\", index = 4 }\n");
    let err = PickConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("outside a menu of 4 entries"));
}

#[test]
fn unknown_suit_is_a_parse_error() {
    let (_dir, path) = write_config("[round]\nstrategy = { kind = \"avoid\", suit = \"stars\" }\n");
    assert!(PickConfig::load_from(&path).is_err());
}
