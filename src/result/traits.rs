//! Standard trait impls: copying, comparison, hashing, `Debug` output and
//! conversion to and from [`core::result::Result`].

use core::fmt;
use core::hash::{Hash, Hasher};

use super::{Result, State};
use crate::config;
use crate::fault;

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    /// Deep-copies the live payload.
    ///
    /// A consumed source is a misuse fault under strict checks; under
    /// permissive checks the copy is an equally consumed, empty container.
    fn clone(&self) -> Self {
        match self.view_or_state() {
            Ok(Ok(value)) => Self::Ok(value.clone()),
            Ok(Err(error)) => Self::Err(error.clone()),
            Err(state) => {
                if config::get().is_strict() {
                    fault::wrong_state("clone()", state);
                }
                Self::vacant(state)
            }
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Result<T, E> {
    /// Two live results are equal when they hold the same side with equal
    /// payloads. Comparing a consumed result is a misuse fault.
    fn eq(&self, other: &Self) -> bool {
        match (self.view("eq()"), other.view("eq()")) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T: Hash, E: Hash> Hash for Result<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.view("hash()") {
            Ok(value) => {
                true.hash(state);
                value.hash(state);
            }
            Err(error) => {
                false.hash(state);
                error.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view_or_state() {
            Ok(Ok(value)) => f.debug_tuple("Ok").field(value).finish(),
            Ok(Err(error)) => f.debug_tuple("Err").field(error).finish(),
            Err(state) => write!(f, "{state}"),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T, E> Result<T, E> {
    /// Borrows the live payload, or reports the consumed state without
    /// faulting.
    fn view_or_state(&self) -> core::result::Result<core::result::Result<&T, &E>, State> {
        match self.state {
            State::Ok | State::Err => Ok(self.view("view")),
            consumed => Err(consumed),
        }
    }
}
