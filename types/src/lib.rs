//! Scope-bound exclusive choice.
//!
//! Hand a decision function a fixed menu and get back exactly one of the
//! menu's own entries. The function receives opaque [`Choice`] handles, one
//! per entry, and must return one of them. Two guarantees hold by
//! construction:
//!
//! - The result is one of the menu entries. A `Choice` has no public
//!   constructor, so a chooser cannot invent one.
//! - No choice outlives its call. Every handle carries a lifetime brand that
//!   is fresh for that call, so a handle kept from one selection cannot be
//!   used in another.
//!
//! [`select_one`] enforces both at compile time. [`select_one_checked`] is
//! the runtime-checked fallback for choosers that cannot be generic over the
//! brand; it tags handles with an [`Epoch`] and fails with
//! [`StaleChoiceError`] instead.
//!
//! This crate has no IO and no async.

mod choice;
mod epoch;
mod menu;
mod suit;

pub use choice::{Choice, ScopeGuard};
pub use epoch::{Epoch, StaleChoiceError, StampedChoice, select_one_checked};
pub use menu::{Menu, MenuSizeError, select_one, try_select_one};
pub use suit::{ParseSuitError, Suit};
