//! Selection strategies for a round.
//!
//! A strategy is a branded chooser: it receives the round's choices and hands
//! one of them back, so whatever it decides, the result is a menu entry.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use pick_types::{Choice, ParseSuitError, Suit};

use crate::menu::SUIT_MENU_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("position {index} is outside a menu of {size} entries")]
    PositionOutOfRange { index: usize, size: usize },
    #[error("every entry is {0}; nothing left to choose")]
    NoEligibleChoice(Suit),
    #[error("unknown strategy {0:?} (expected first, last, position:<n>, or avoid:<suit>)")]
    Unknown(String),
    #[error("invalid position {0:?}")]
    InvalidPosition(String),
    #[error(transparent)]
    ParseSuit(#[from] ParseSuitError),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawStrategy {
    First,
    Last,
    Position { index: usize },
    Avoid { suit: Suit },
}

/// How a round picks its suit.
///
/// Invariant: `Position` indexes inside a suit menu (enforced via
/// `#[serde(try_from)]` and [`Strategy::position`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawStrategy")]
pub enum Strategy {
    #[default]
    First,
    Last,
    Position(usize),
    /// The first entry that is not this suit.
    Avoid(Suit),
}

impl TryFrom<RawStrategy> for Strategy {
    type Error = StrategyError;

    fn try_from(raw: RawStrategy) -> Result<Self, Self::Error> {
        match raw {
            RawStrategy::First => Ok(Strategy::First),
            RawStrategy::Last => Ok(Strategy::Last),
            RawStrategy::Position { index } => Strategy::position(index),
            RawStrategy::Avoid { suit } => Ok(Strategy::Avoid(suit)),
        }
    }
}

impl Strategy {
    pub fn position(index: usize) -> Result<Self, StrategyError> {
        if index >= SUIT_MENU_SIZE {
            return Err(StrategyError::PositionOutOfRange {
                index,
                size: SUIT_MENU_SIZE,
            });
        }
        Ok(Strategy::Position(index))
    }

    /// Pick one of `choices`.
    ///
    /// Fails only when the menu cannot satisfy the strategy: a position past
    /// the end, or a menu holding nothing but the avoided suit.
    pub fn choose<'id, const N: usize>(
        &self,
        choices: [Choice<'id, Suit>; N],
    ) -> Result<Choice<'id, Suit>, StrategyError> {
        let size = N;
        let mut choices = choices.into_iter();
        let picked = match *self {
            Strategy::First => choices.next(),
            Strategy::Last => choices.next_back(),
            Strategy::Position(index) => {
                return choices
                    .nth(index)
                    .ok_or(StrategyError::PositionOutOfRange { index, size });
            }
            Strategy::Avoid(suit) => {
                return choices
                    .find(|choice| **choice != suit)
                    .ok_or(StrategyError::NoEligibleChoice(suit));
            }
        };
        picked.ok_or(StrategyError::PositionOutOfRange { index: 0, size })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::First => f.write_str("first"),
            Strategy::Last => f.write_str("last"),
            Strategy::Position(index) => write!(f, "position:{index}"),
            Strategy::Avoid(suit) => write!(f, "avoid:{suit}"),
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (kind, arg) = match trimmed.split_once(':') {
            Some((kind, arg)) => (kind.trim(), Some(arg.trim())),
            None => (trimmed, None),
        };
        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("first", None) => Ok(Strategy::First),
            ("last", None) => Ok(Strategy::Last),
            ("position", Some(arg)) => {
                let index = arg
                    .parse()
                    .map_err(|_| StrategyError::InvalidPosition(arg.to_string()))?;
                Strategy::position(index)
            }
            ("avoid", Some(arg)) => Ok(Strategy::Avoid(arg.parse()?)),
            _ => Err(StrategyError::Unknown(s.to_string())),
        }
    }
}
