//! Fixed-size menus and the statically checked selection entry points.

use thiserror::Error;

use crate::choice::{Choice, ScopeGuard, enter_scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("menu needs exactly {expected} entries, found {found}")]
pub struct MenuSizeError {
    pub expected: usize,
    pub found: usize,
}

fn mint_all<'id, T, const N: usize>(
    guard: ScopeGuard<'id>,
    entries: [T; N],
) -> [Choice<'id, T>; N] {
    let mut position = 0;
    entries.map(|value| {
        let choice = guard.mint(value, position);
        position += 1;
        choice
    })
}

/// Let `chooser` pick exactly one entry of `menu` and return its value.
///
/// The chooser receives one [`Choice`] per entry, all branded with a lifetime
/// that exists only for this call. It must hand one of them back unchanged.
/// Returning anything else, or keeping a choice for later, does not compile.
///
/// ```
/// use pick_types::{Suit, select_one};
///
/// let picked = select_one([Suit::Clubs, Suit::Diamonds], |[first, second]| {
///     if *first == Suit::Clubs { second } else { first }
/// });
/// assert_eq!(picked, Suit::Diamonds);
/// ```
///
/// A bare value is not a choice:
///
/// ```compile_fail
/// use pick_types::{Suit, select_one};
///
/// let picked = select_one([Suit::Clubs, Suit::Diamonds], |_choices| Suit::Hearts);
/// ```
///
/// Nor is a genuine choice from a different menu:
///
/// ```compile_fail
/// use pick_types::{Suit, select_one};
///
/// let _ = select_one([Suit::Clubs, Suit::Diamonds], |[first, second]| {
///     let _ = select_one([Suit::Hearts, Suit::Spades], |_inner| first);
///     second
/// });
/// ```
///
/// An empty menu is rejected when the call is monomorphized.
pub fn select_one<T, const N: usize, F>(menu: [T; N], chooser: F) -> T
where
    F: for<'id> FnOnce([Choice<'id, T>; N]) -> Choice<'id, T>,
{
    const { assert!(N > 0, "a menu must offer at least one entry") };
    enter_scope(|guard| {
        let picked = chooser(mint_all(guard, menu));
        tracing::trace!(position = picked.position(), menu_size = N, "choice selected");
        picked.into_inner()
    })
}

/// Like [`select_one`], for choosers that can decline with an error.
///
/// The brand ends on the error path as well. `E` is fixed outside the call,
/// so an error value cannot carry a choice out with it.
pub fn try_select_one<T, E, const N: usize, F>(menu: [T; N], chooser: F) -> Result<T, E>
where
    F: for<'id> FnOnce([Choice<'id, T>; N]) -> Result<Choice<'id, T>, E>,
{
    const { assert!(N > 0, "a menu must offer at least one entry") };
    enter_scope(|guard| -> Result<T, E> {
        let picked = chooser(mint_all(guard, menu))?;
        tracing::trace!(position = picked.position(), menu_size = N, "choice selected");
        Ok(picked.into_inner())
    })
}

/// An ordered, fixed-size set of candidates owned by the caller.
///
/// `N` is at least one; `Menu<T, 0>` fails to build as soon as it is
/// constructed. A menu can be consumed by one selection
/// ([`Menu::into_selected`]) or selected from repeatedly by reference
/// ([`Menu::select`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Menu<T, const N: usize> {
    entries: [T; N],
}

impl<T, const N: usize> Menu<T, N> {
    pub const SIZE: usize = N;

    #[must_use]
    pub const fn new(entries: [T; N]) -> Self {
        const { assert!(N > 0, "a menu must offer at least one entry") };
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[T; N] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.entries
    }

    /// Select one entry without consuming the menu.
    ///
    /// The returned reference points into this menu.
    pub fn select<'m, F>(&'m self, chooser: F) -> &'m T
    where
        F: for<'id> FnOnce([Choice<'id, &'m T>; N]) -> Choice<'id, &'m T>,
    {
        select_one(self.entries.each_ref(), chooser)
    }

    pub fn try_select<'m, E, F>(&'m self, chooser: F) -> Result<&'m T, E>
    where
        F: for<'id> FnOnce([Choice<'id, &'m T>; N]) -> Result<Choice<'id, &'m T>, E>,
    {
        try_select_one(self.entries.each_ref(), chooser)
    }

    pub fn into_selected<F>(self, chooser: F) -> T
    where
        F: for<'id> FnOnce([Choice<'id, T>; N]) -> Choice<'id, T>,
    {
        select_one(self.entries, chooser)
    }
}

impl<T, const N: usize> From<[T; N]> for Menu<T, N> {
    fn from(entries: [T; N]) -> Self {
        Self::new(entries)
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Menu<T, N> {
    type Error = MenuSizeError;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        let found = entries.len();
        let entries: [T; N] = entries
            .try_into()
            .map_err(|_| MenuSizeError { expected: N, found })?;
        Ok(Self::new(entries))
    }
}

impl<T, const N: usize> AsRef<[T]> for Menu<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.entries
    }
}

impl<'m, T, const N: usize> IntoIterator for &'m Menu<T, N> {
    type Item = &'m T;
    type IntoIter = std::slice::Iter<'m, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
