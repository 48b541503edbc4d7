//! Misuse faults: the diagnostic boundary of the crate.
//!
//! Every call that violates the consumption contract of a
//! [`Result`](crate::Result) (unwrapping the wrong side, unwrapping twice,
//! viewing a consumed container, copying one under strict checks) ends in
//! [`raise`]. Domain errors never come through here.
//!
//! What `raise` does is decided once by [`config`](crate::config):
//! - [`FailureMode::Unwind`]: panic with the [`MisuseFault`] itself as the
//!   payload, so [`catch`] (or `std::panic::catch_unwind`) can recover it.
//! - [`FailureMode::Abort`]: write the diagnostic to stderr and abort.

use core::fmt;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use crate::config::{self, FailureMode};
use crate::result::State;

/// A violation of a result's consumption contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisuseFault {
    operation: &'static str,
    found: State,
    message: String,
}

impl MisuseFault {
    /// Creates a fault for `operation` invoked on a result in state `found`.
    pub fn new(operation: &'static str, found: State, message: impl Into<String>) -> Self {
        Self {
            operation,
            found,
            message: message.into(),
        }
    }

    /// The method that was misused, e.g. `"unwrap()"`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The state the result was in when the fault was raised.
    pub fn found(&self) -> State {
        self.found
    }

    /// Returns `true` if the result had already been consumed, as opposed to
    /// holding the opposite side.
    pub fn is_use_after_consume(&self) -> bool {
        self.found.is_consumed()
    }

    /// The rendered diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MisuseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MisuseFault {}

/// Aborts the current flow with `fault`, according to the configured
/// [`FailureMode`].
#[cold]
#[inline(never)]
pub fn raise(fault: MisuseFault) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        operation = fault.operation,
        state = %fault.found,
        "{}",
        fault.message
    );

    match config::get().on_misuse {
        FailureMode::Unwind => panic::panic_any(fault),
        FailureMode::Abort => {
            eprintln!("\n{fault}");
            std::process::abort()
        }
    }
}

/// Runs `f`, converting a [`MisuseFault`] raised inside it into `Err`.
///
/// Panics that do not carry a `MisuseFault` are resumed untouched.
///
/// # Errors
/// Returns the fault if `f` misused a result.
pub fn catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, MisuseFault> {
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<MisuseFault>() {
            Ok(fault) => Err(*fault),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// [`catch`] for closures that capture `&mut` state.
///
/// # Errors
/// Returns the fault if `f` misused a result.
pub fn catch_mut<R>(f: impl FnOnce() -> R) -> Result<R, MisuseFault> {
    catch(AssertUnwindSafe(f))
}

/// Formats a diagnostic and raises it as a [`MisuseFault`].
///
/// ```should_panic
/// use strict_result::{misuse, State};
///
/// misuse!("unwrap()", State::MovedOk, "Called {} on {} result!", "unwrap()", "a moved");
/// ```
#[macro_export]
macro_rules! misuse {
    ($operation:expr, $found:expr, $($arg:tt)+) => {
        $crate::fault::raise($crate::fault::MisuseFault::new(
            $operation,
            $found,
            ::std::format!($($arg)+),
        ))
    };
}

/// Raises the standard "Called `op` on `<state>` result!" fault.
#[cold]
pub(crate) fn wrong_state(operation: &'static str, found: State) -> ! {
    crate::misuse!(
        operation,
        found,
        "Panic: Called {} on {} result!",
        operation,
        found.describe()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_recovers_fault() {
        let fault = catch(|| wrong_state("unwrap()", State::Err)).unwrap_err();
        assert_eq!(fault.operation(), "unwrap()");
        assert_eq!(fault.found(), State::Err);
        assert!(!fault.is_use_after_consume());
        assert_eq!(fault.message(), "Panic: Called unwrap() on an erroneous result!");
    }

    #[test]
    fn test_catch_passes_value_through() {
        assert_eq!(catch(|| 7), Ok(7));
    }

    #[test]
    fn test_display_is_message() {
        let fault = MisuseFault::new("as_ref()", State::Moved, "gone");
        assert!(fault.is_use_after_consume());
        assert_eq!(fault.to_string(), "gone");
    }

    #[test]
    #[should_panic(expected = "not a fault")]
    fn test_catch_resumes_foreign_panics() {
        let _ = catch(|| panic!("not a fault"));
    }
}
