//! pick CLI - binary entry point.
//!
//! Plays one round and prints the selected suit on stdout. Logs go to
//! stderr so the output stays scriptable.
//!
//! ```text
//! main() -> PickConfig::load() -> init_tracing() -> Round::from_env() -> Round::play()
//! ```
//!
//! Configuration comes from `$PICK_CONFIG` or `~/.pick/config.toml`; the
//! strategy falls back to `$PICK_STRATEGY` when the file does not set one.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pick_config::{PickConfig, Round};

/// `RUST_LOG` first, then the config file's `[logging] filter`, then `info`.
fn init_tracing(config_filter: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let loaded = PickConfig::load();
    let filter = loaded
        .as_ref()
        .ok()
        .and_then(Option::as_ref)
        .and_then(PickConfig::log_filter);
    init_tracing(filter);

    let config = loaded.context("failed to load pick config")?;
    if let Some(path) = PickConfig::path() {
        tracing::debug!(path = %path.display(), found = config.is_some(), "Config resolved");
    }

    let round = Round::from_env(config.as_ref());
    tracing::debug!(strategy = %round.strategy(), "Round resolved");

    let suit = round.play().context("round could not pick a suit")?;
    println!("{suit}");
    Ok(())
}
