use std::env;

use pick_types::{Suit, try_select_one};

use crate::menu::SuitMenu;
use crate::strategy::{Strategy, StrategyError};
use crate::PickConfig;

/// Selects the strategy when the config file does not.
pub const STRATEGY_ENV: &str = "PICK_STRATEGY";

/// One fully resolved round: the menu offered and the strategy choosing from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Round {
    menu: SuitMenu,
    strategy: Strategy,
}

impl Round {
    #[must_use]
    pub fn new(menu: SuitMenu, strategy: Strategy) -> Self {
        Self { menu, strategy }
    }

    /// Resolve from the config file, then `PICK_STRATEGY`, then defaults.
    #[must_use]
    pub fn from_env(config: Option<&PickConfig>) -> Self {
        let env_strategy = env::var(STRATEGY_ENV).ok();
        Self::resolve(config, env_strategy.as_deref())
    }

    #[must_use]
    pub fn resolve(config: Option<&PickConfig>, env_strategy: Option<&str>) -> Self {
        let round = config.and_then(|cfg| cfg.round.as_ref());
        let menu = round
            .and_then(|round| round.menu.clone())
            .unwrap_or_default();
        let strategy = round
            .and_then(|round| round.strategy)
            .or_else(|| env_strategy.and_then(parse_env_strategy))
            .unwrap_or_default();
        Self { menu, strategy }
    }

    #[must_use]
    pub fn menu(&self) -> &SuitMenu {
        &self.menu
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn play(&self) -> Result<Suit, StrategyError> {
        let entries = *self.menu.menu().entries();
        let suit = try_select_one(entries, |choices| self.strategy.choose(choices))?;
        tracing::info!(%suit, strategy = %self.strategy, "round played");
        Ok(suit)
    }
}

fn parse_env_strategy(raw: &str) -> Option<Strategy> {
    match raw.parse() {
        Ok(strategy) => Some(strategy),
        Err(err) => {
            tracing::warn!("Ignoring {STRATEGY_ENV}={raw:?}: {err}");
            None
        }
    }
}
