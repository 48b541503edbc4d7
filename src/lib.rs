//! # `strict_result` - Move-Only Results With Consumption Tracking
//!
//! A generic Ok/Err container whose payload is moved, never copied, through
//! every unwrap site, and whose discriminant remembers that it was consumed.
//! Unwrapping twice, unwrapping the wrong side, or viewing a consumed
//! container is detected at run time and raised as a [`MisuseFault`].
//!
//! ## Two error channels
//!
//! - **Domain errors** are values of `E` held by an `Err` result. They are
//!   ordinary data: handle them with [`Result::match_owned`],
//!   [`Result::map_err`], the `unwrap_or*` family, or forward them with
//!   [`try_result!`]. They never raise a fault.
//! - **Misuse faults** are violations of the consumption contract. They go
//!   through [`fault::raise`], which unwinds with the [`MisuseFault`] as the
//!   panic payload (catchable with [`fault::catch`]) or aborts the process,
//!   depending on [`config`].
//!
//! ## Lifecycle
//!
//! A result starts in [`State::Ok`] or [`State::Err`]. Consuming accessors
//! (`unwrap`, `unwrap_err`, `expect`, ...) take `&mut self`, move the payload
//! out and leave the container in [`State::MovedOk`] / [`State::MovedErr`].
//! [`Result::take`] moves the whole container out of a place and leaves
//! [`State::Moved`] behind. Dropping a result finalizes the live payload, if
//! any, exactly once.
//!
//! ## Example
//!
//! ```rust
//! use strict_result::{err, fault, ok, Result};
//!
//! let mut r: Result<i32, String> = ok(10);
//! assert_eq!(r.as_ref(), Ok(&10));
//! assert_eq!(r.unwrap(), 10);
//!
//! // A second unwrap is a misuse fault, not a silent copy.
//! let fault = fault::catch_mut(|| r.unwrap()).unwrap_err();
//! assert!(fault.is_use_after_consume());
//!
//! let mut e: Result<i32, String> = err("bad input".to_string());
//! assert_eq!(e.unwrap_or(0), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod fault;
mod macros;
pub mod result;

pub use config::{CheckMode, Config, ConfigError, FailureMode};
pub use fault::MisuseFault;
pub use result::{err, ok, Result, State};

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // The discriminant is a single byte.
    assert!(mem::size_of::<State>() == 1);

    // Union storage: payload plus one tag byte, rounded to alignment.
    assert!(mem::size_of::<Result<u64, u64>>() == 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<Result<u8, u8>>() == 2);
    assert!(mem::size_of::<Result<(), ()>>() == 1);
};
