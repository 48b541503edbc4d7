//! `Result`, a move-only Ok/Err container that remembers being consumed.
//!
//! Unlike [`core::result::Result`], the consuming accessors here take
//! `&mut self`: the payload is moved out and the container stays behind in a
//! consumed [`State`]. A second `unwrap()` on the same instance is therefore
//! detected at run time and raised as a [`MisuseFault`](crate::MisuseFault)
//! instead of being rejected at compile time. Combinators that produce a new
//! container (`map`, `all`, `match_owned`, ...) take `self` by value.
//!
//! Storage is a raw two-field union plus a one-byte discriminant; see
//! [`slot`] for the audited unsafe operations.

mod combinators;
mod slot;
mod state;
mod traits;

pub use state::State;

use crate::config;
use crate::fault;
use slot::Slot;

/// Either a success payload `T` or an error payload `E`, with tracked
/// consumption.
///
/// # Example
///
/// ```rust
/// use strict_result::{ok, Result};
///
/// let mut r: Result<i32, String> = ok(10);
/// assert!(r.is_ok());
/// assert_eq!(r.unwrap(), 10);
/// assert!(r.is_consumed());
/// ```
pub struct Result<T, E> {
    slot: Slot<T, E>,
    state: State,
}

/// Wraps `value` as a success. The error type is inferred at the call site.
#[inline]
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Wraps `value` as an error. The success type is inferred at the call site.
#[inline]
pub fn err<T, E>(value: E) -> Result<T, E> {
    Result::Err(value)
}

impl<T, E> Result<T, E> {
    /// Constructs a live success.
    #[allow(non_snake_case)]
    #[inline]
    pub const fn Ok(value: T) -> Self {
        Self {
            slot: Slot::ok(value),
            state: State::Ok,
        }
    }

    /// Constructs a live error.
    #[allow(non_snake_case)]
    #[inline]
    pub const fn Err(value: E) -> Self {
        Self {
            slot: Slot::err(value),
            state: State::Err,
        }
    }

    /// A container with no payload, already in `state`.
    #[inline]
    const fn vacant(state: State) -> Self {
        Self {
            slot: Slot::vacant(),
            state,
        }
    }

    /// The current lifecycle state.
    #[inline(always)]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns `true` if this result holds a success payload.
    ///
    /// Once the payload has been moved out this reports `false`. Use
    /// [`State::was_ok`] on [`state`](Self::state) to ask about the original tag.
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok)
    }

    /// Returns `true` if this result holds an error payload.
    ///
    /// Reports `false` once consumed, like [`is_ok`](Self::is_ok).
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        matches!(self.state, State::Err)
    }

    /// Returns `true` once the payload has been moved out.
    #[inline(always)]
    pub const fn is_consumed(&self) -> bool {
        self.state.is_consumed()
    }

    /// Borrows the live payload without consuming it.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    #[allow(clippy::should_implement_trait)]
    pub fn as_ref(&self) -> core::result::Result<&T, &E> {
        self.view("as_ref()")
    }

    /// Mutably borrows the live payload without consuming it.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    #[allow(clippy::should_implement_trait)]
    pub fn as_mut(&mut self) -> core::result::Result<&mut T, &mut E> {
        match self.state {
            // SAFETY: state `Ok` means the `ok` field is live.
            State::Ok => Ok(unsafe { self.slot.ok_mut() }),
            // SAFETY: state `Err` means the `err` field is live.
            State::Err => Err(unsafe { self.slot.err_mut() }),
            found => fault::wrong_state("as_mut()", found),
        }
    }

    /// Moves the success payload out.
    ///
    /// # Panics
    /// Raises a misuse fault if the result is an error or was already
    /// consumed.
    pub fn unwrap(&mut self) -> T {
        match self.state {
            State::Ok => self.move_ok(),
            found => fault::wrong_state("unwrap()", found),
        }
    }

    /// Moves the error payload out.
    ///
    /// # Panics
    /// Raises a misuse fault if the result is a success or was already
    /// consumed.
    pub fn unwrap_err(&mut self) -> E {
        match self.state {
            State::Err => self.move_err(),
            found => fault::wrong_state("unwrap_err()", found),
        }
    }

    /// Moves the success payload out, or raises a misuse fault carrying
    /// `message`.
    ///
    /// # Panics
    /// If the result is not a live success.
    pub fn expect(&mut self, message: &str) -> T {
        match self.state {
            State::Ok => self.move_ok(),
            found => crate::misuse!("expect()", found, "{}", message),
        }
    }

    /// Moves the error payload out, or raises a misuse fault carrying
    /// `message`.
    ///
    /// # Panics
    /// If the result is not a live error.
    pub fn expect_err(&mut self, message: &str) -> E {
        match self.state {
            State::Err => self.move_err(),
            found => crate::misuse!("expect_err()", found, "{}", message),
        }
    }

    /// Moves the success payload out, or returns `fallback` for an error.
    ///
    /// The error payload stays in place on the fallback path.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn unwrap_or(&mut self, fallback: T) -> T {
        match self.state {
            State::Ok => self.move_ok(),
            State::Err => fallback,
            found => fault::wrong_state("unwrap_or()", found),
        }
    }

    /// Moves the success payload out, or calls `producer` for an error.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn unwrap_or_else<F>(&mut self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.state {
            State::Ok => self.move_ok(),
            State::Err => producer(),
            found => fault::wrong_state("unwrap_or_else()", found),
        }
    }

    /// Moves the success payload out, or returns `T::default()` for an error.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn unwrap_or_default(&mut self) -> T
    where
        T: Default,
    {
        match self.state {
            State::Ok => self.move_ok(),
            State::Err => T::default(),
            found => fault::wrong_state("unwrap_or_default()", found),
        }
    }

    /// Moves the whole container out of `self`, leaving it [`State::Moved`].
    ///
    /// Under [`CheckMode::Strict`](crate::CheckMode::Strict) taking an
    /// already consumed result is a misuse fault; under `Permissive` the
    /// consumed state is carried over to the returned container.
    ///
    /// # Panics
    /// See above.
    pub fn take(&mut self) -> Self {
        let state = self.state;
        if state.is_consumed() {
            if config::get().is_strict() {
                fault::wrong_state("take()", state);
            }
            self.state = State::Moved;
            return Self::vacant(state);
        }
        self.state = State::Moved;
        Self {
            // SAFETY: the source is now `Moved`, so the live field is owned
            // by the returned slot only.
            slot: unsafe { self.slot.take_all() },
            state,
        }
    }

    /// Converts into a [`core::result::Result`], consuming the container.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn into_std(mut self) -> core::result::Result<T, E> {
        self.take_payload("into_std()")
    }

    /// Moves out whichever payload is live.
    #[inline]
    pub(crate) fn take_payload(&mut self, operation: &'static str) -> core::result::Result<T, E> {
        match self.state {
            State::Ok => Ok(self.move_ok()),
            State::Err => Err(self.move_err()),
            found => fault::wrong_state(operation, found),
        }
    }

    #[inline]
    fn view(&self, operation: &'static str) -> core::result::Result<&T, &E> {
        match self.state {
            // SAFETY: state `Ok` means the `ok` field is live.
            State::Ok => Ok(unsafe { self.slot.ok_ref() }),
            // SAFETY: state `Err` means the `err` field is live.
            State::Err => Err(unsafe { self.slot.err_ref() }),
            found => fault::wrong_state(operation, found),
        }
    }

    /// Requires `state == Ok`.
    #[inline(always)]
    fn move_ok(&mut self) -> T {
        debug_assert_eq!(self.state, State::Ok);
        self.state = State::MovedOk;
        // SAFETY: the state was `Ok`, and is now `MovedOk`, so the slot is
        // never read or dropped again.
        unsafe { self.slot.take_ok() }
    }

    /// Requires `state == Err`.
    #[inline(always)]
    fn move_err(&mut self) -> E {
        debug_assert_eq!(self.state, State::Err);
        self.state = State::MovedErr;
        // SAFETY: as in `move_ok`, for the `err` field.
        unsafe { self.slot.take_err() }
    }
}

impl<T, E> Drop for Result<T, E> {
    fn drop(&mut self) {
        match self.state {
            // SAFETY: the live field matches the state and is dropped once.
            State::Ok => unsafe { self.slot.drop_ok() },
            // SAFETY: as above.
            State::Err => unsafe { self.slot.drop_err() },
            // Vacated by a move; nothing to finalize.
            State::Moved | State::MovedOk | State::MovedErr => {}
        }
    }
}
