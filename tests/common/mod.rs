//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use pick_types::Suit;
use tempfile::TempDir;

/// Write `contents` to `config.toml` inside a fresh temp dir.
///
/// The dir must outlive every use of the returned path.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

/// TOML list literal for a suit menu, e.g. `["clubs", "hearts"]`.
pub fn menu_literal(suits: &[Suit]) -> String {
    let names: Vec<String> = suits.iter().map(|suit| format!("\"{suit}\"")).collect();
    format!("[{}]", names.join(", "))
}
