//! Runtime-checked selection for choosers that cannot be branded.
//!
//! [`select_one`](crate::select_one) rejects stale or foreign choices at
//! compile time, but it needs a higher-ranked closure. Strategies that are
//! stored, boxed as `'static`, or otherwise unable to name a brand use
//! [`select_one_checked`] instead: every call mints a fresh [`Epoch`], stamps
//! each choice with it, and refuses choices whose epoch is foreign or over.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

/// Identity of one checked selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Epoch(NonZeroU64);

impl Epoch {
    fn next() -> Self {
        let raw = NEXT_EPOCH.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and would need 2^64 calls to wrap.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch#{}", self.0)
    }
}

/// A choice was used outside the selection call that produced it.
///
/// Always an API misuse: the caller kept a choice past its call, or handed
/// a choice from one call to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StaleChoiceError {
    #[error("choice from {found} was returned to the selection running under {expected}")]
    Mismatched { expected: Epoch, found: Epoch },
    #[error("choice from {epoch} was used after its selection ended")]
    Expired { epoch: Epoch },
}

#[derive(Debug)]
struct EpochState {
    epoch: Epoch,
    live: AtomicBool,
}

/// Open epoch for one call. Dropping it expires every choice stamped with it,
/// on every exit path including unwinding.
struct EpochScope {
    state: Arc<EpochState>,
}

impl EpochScope {
    fn open() -> Self {
        Self {
            state: Arc::new(EpochState {
                epoch: Epoch::next(),
                live: AtomicBool::new(true),
            }),
        }
    }

    fn epoch(&self) -> Epoch {
        self.state.epoch
    }

    fn stamp<T>(&self, value: T, position: usize) -> StampedChoice<T> {
        StampedChoice {
            value,
            position,
            state: Arc::clone(&self.state),
        }
    }

    fn redeem<T>(&self, choice: StampedChoice<T>) -> Result<T, StaleChoiceError> {
        let found = choice.epoch();
        if found != self.epoch() {
            return Err(StaleChoiceError::Mismatched {
                expected: self.epoch(),
                found,
            });
        }
        if !choice.is_live() {
            return Err(StaleChoiceError::Expired { epoch: found });
        }
        tracing::trace!(
            epoch = found.value(),
            position = choice.position,
            "checked choice selected"
        );
        Ok(choice.value)
    }
}

impl Drop for EpochScope {
    fn drop(&mut self) {
        self.state.live.store(false, Ordering::Release);
    }
}

/// A choice stamped with the epoch of the call that produced it.
///
/// Unlike [`Choice`](crate::Choice) this type is `'static` whenever `T` is,
/// so it can be kept around. Doing so is still misuse; it is caught when the
/// value is next read or redeemed.
pub struct StampedChoice<T> {
    value: T,
    position: usize,
    state: Arc<EpochState>,
}

impl<T> StampedChoice<T> {
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.state.epoch
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the call that produced this choice is still running.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.state.live.load(Ordering::Acquire)
    }

    pub fn get(&self) -> Result<&T, StaleChoiceError> {
        if self.is_live() {
            Ok(&self.value)
        } else {
            let err = StaleChoiceError::Expired {
                epoch: self.epoch(),
            };
            tracing::warn!(%err, "stale choice inspected");
            Err(err)
        }
    }
}

impl<T> fmt::Debug for StampedChoice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampedChoice")
            .field("epoch", &self.epoch())
            .field("position", &self.position)
            .field("live", &self.is_live())
            .finish_non_exhaustive()
    }
}

/// Runtime-checked counterpart of [`select_one`](crate::select_one).
///
/// The chooser gets one stamped choice per entry and must return one of
/// them. A choice from any other call is refused with
/// [`StaleChoiceError::Mismatched`]; the epoch is expired when this function
/// returns, however it returns.
pub fn select_one_checked<T, const N: usize, F>(
    menu: [T; N],
    chooser: F,
) -> Result<T, StaleChoiceError>
where
    F: FnOnce([StampedChoice<T>; N]) -> StampedChoice<T>,
{
    const { assert!(N > 0, "a menu must offer at least one entry") };
    let scope = EpochScope::open();
    let mut position = 0;
    let choices = menu.map(|value| {
        let choice = scope.stamp(value, position);
        position += 1;
        choice
    });
    let picked = chooser(choices);
    scope.redeem(picked).inspect_err(|err| {
        tracing::warn!(%err, "stale choice rejected");
    })
}
