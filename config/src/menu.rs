use serde::Deserialize;
use thiserror::Error;

use pick_types::{Menu, Suit};

pub const SUIT_MENU_SIZE: usize = Suit::ALL.len();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuConfigError {
    #[error("round menu must list exactly 4 suits, found {0}")]
    WrongSize(usize),
    #[error("round menu lists {0} more than once")]
    DuplicateSuit(Suit),
}

/// A menu offering every suit exactly once, in a configured order.
///
/// Invariant: the four entries are distinct (enforced via
/// `#[serde(try_from)]` at the deserialization boundary).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Suit>")]
pub struct SuitMenu(Menu<Suit, SUIT_MENU_SIZE>);

impl SuitMenu {
    #[must_use]
    pub fn menu(&self) -> &Menu<Suit, SUIT_MENU_SIZE> {
        &self.0
    }

    #[must_use]
    pub fn into_menu(self) -> Menu<Suit, SUIT_MENU_SIZE> {
        self.0
    }
}

impl Default for SuitMenu {
    fn default() -> Self {
        Self(Menu::new(Suit::ALL))
    }
}

impl TryFrom<Vec<Suit>> for SuitMenu {
    type Error = MenuConfigError;

    fn try_from(suits: Vec<Suit>) -> Result<Self, Self::Error> {
        for (i, suit) in suits.iter().enumerate() {
            if suits[..i].contains(suit) {
                return Err(MenuConfigError::DuplicateSuit(*suit));
            }
        }
        let menu = Menu::try_from(suits).map_err(|err| MenuConfigError::WrongSize(err.found))?;
        Ok(Self(menu))
    }
}
