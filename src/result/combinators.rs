//! Consuming combinators: each takes `self`, moves the live payload out
//! exactly once, and builds the next container.

use super::Result;

impl<T, E> Result<T, E> {
    /// Dispatches to exactly one handler with the moved-out payload.
    ///
    /// ```rust
    /// use strict_result::err;
    ///
    /// let msg = err::<i32, _>(10).match_owned(|x| format!("ok {x}"), |e| format!("err {e}"));
    /// assert_eq!(msg, "err 10");
    /// ```
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn match_owned<R, OnOk, OnErr>(mut self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self.take_payload("match_owned()") {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Dispatches to exactly one handler with a borrow of the payload.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn match_ref<'a, R, OnOk, OnErr>(&'a self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(&'a T) -> R,
        OnErr: FnOnce(&'a E) -> R,
    {
        match self.view("match_ref()") {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Applies `project` to a success payload; an error is forwarded as is.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn map<U, P>(mut self, project: P) -> Result<U, E>
    where
        P: FnOnce(T) -> U,
    {
        match self.take_payload("map()") {
            Ok(value) => Result::Ok(project(value)),
            Err(error) => Result::Err(error),
        }
    }

    /// Applies `project` to an error payload; a success is forwarded as is.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn map_err<F, P>(mut self, project: P) -> Result<T, F>
    where
        P: FnOnce(E) -> F,
    {
        match self.take_payload("map_err()") {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(project(error)),
        }
    }

    /// Short-circuit AND: returns `other` if `self` is a success (dropping
    /// `self`'s payload), otherwise `self`'s error.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn all<U>(mut self, other: Result<U, E>) -> Result<U, E> {
        match self.take_payload("all()") {
            Ok(_) => other,
            Err(error) => Result::Err(error),
        }
    }

    /// Lazy [`all`](Self::all): `producer` runs only if `self` is a success.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn all_then<U, P>(mut self, producer: P) -> Result<U, E>
    where
        P: FnOnce() -> Result<U, E>,
    {
        match self.take_payload("all_then()") {
            Ok(_) => producer(),
            Err(error) => Result::Err(error),
        }
    }

    /// Monadic bind: feeds a success payload to `next`; an error is
    /// forwarded as is.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn and_then<U, P>(mut self, next: P) -> Result<U, E>
    where
        P: FnOnce(T) -> Result<U, E>,
    {
        match self.take_payload("and_then()") {
            Ok(value) => next(value),
            Err(error) => Result::Err(error),
        }
    }

    /// Short-circuit OR: returns `other` if `self` is an error (dropping
    /// `self`'s payload), otherwise `self`'s success retyped to `F`.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn any<F>(mut self, other: Result<T, F>) -> Result<T, F> {
        match self.take_payload("any()") {
            Ok(value) => Result::Ok(value),
            Err(_) => other,
        }
    }

    /// Lazy [`any`](Self::any): `producer` runs only if `self` is an error.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn any_else<F, P>(mut self, producer: P) -> Result<T, F>
    where
        P: FnOnce() -> Result<T, F>,
    {
        match self.take_payload("any_else()") {
            Ok(value) => Result::Ok(value),
            Err(_) => producer(),
        }
    }

    /// The success payload, if any.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn ok(mut self) -> Option<T> {
        self.take_payload("ok()").ok()
    }

    /// The error payload, if any.
    ///
    /// # Panics
    /// Raises a misuse fault if the result was already consumed.
    pub fn err(mut self) -> Option<E> {
        self.take_payload("err()").err()
    }
}
