//! Branded selection handles.
//!
//! A [`Choice`] can only be minted through a [`ScopeGuard`], and a guard only
//! exists inside [`enter_scope`]. The guard's lifetime `'id` is invariant and
//! universally quantified, so two guards never share a brand and no `Choice`
//! can outlive the scope that minted it.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// Invariant over `'id`: neither shortened nor lengthened by subtyping.
type Brand<'id> = PhantomData<fn(&'id ()) -> &'id ()>;

/// Zero-sized marker tying every [`Choice`] it mints to one selection call.
///
/// There is no public constructor. The only way to obtain a guard is to be
/// inside a selection scope opened by this crate, and the guard's brand
/// cannot be named outside that scope.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScopeGuard<'id> {
    _brand: Brand<'id>,
}

impl<'id> ScopeGuard<'id> {
    pub(crate) fn mint<T>(self, value: T, position: usize) -> Choice<'id, T> {
        Choice {
            value,
            position,
            _guard: self,
        }
    }
}

impl fmt::Debug for ScopeGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScopeGuard")
    }
}

/// Run `body` with a guard whose brand is fresh for this call.
///
/// `R` is chosen by the caller and so cannot mention the brand; nothing
/// minted from the guard can leave `body`.
pub(crate) fn enter_scope<R>(body: impl for<'id> FnOnce(ScopeGuard<'id>) -> R) -> R {
    body(ScopeGuard {
        _brand: PhantomData,
    })
}

/// An opaque handle to one menu entry, valid only inside the selection call
/// that produced it.
///
/// Consumers can inspect the wrapped value and its position in the menu, and
/// can hand the handle back by value. They cannot build one, clone one, or
/// keep one past the call:
///
/// ```compile_fail
/// use pick_types::{Choice, Suit, select_one};
///
/// // Fields are private: a choice cannot be fabricated from a bare value.
/// let picked = select_one([Suit::Clubs, Suit::Diamonds], |_choices| Choice {
///     value: Suit::Hearts,
///     position: 0,
/// });
/// ```
///
/// ```compile_fail
/// use pick_types::{Suit, select_one};
///
/// // Stashing a choice outside the chooser would let it outlive its call.
/// let mut stash = None;
/// let _ = select_one([Suit::Clubs, Suit::Diamonds], |[first, second]| {
///     stash = Some(first);
///     second
/// });
/// ```
pub struct Choice<'id, T> {
    value: T,
    position: usize,
    _guard: ScopeGuard<'id>,
}

impl<T> Choice<'_, T> {
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Zero-based index of this entry in the menu it was minted from.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Choice<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T> AsRef<T> for Choice<'_, T> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Choice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("position", &self.position)
            .field("value", &self.value)
            .finish()
    }
}
