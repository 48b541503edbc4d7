//! Unsafe, centralized operations on the two-variant payload union.
//!
//! `Result` stores its payload in a [`Slot`] and tracks which field is live
//! in a separate [`State`](super::State). These helpers are the single place
//! to audit:
//! - borrows of the live field (`ok_ref` / `err_mut` / ...)
//! - moves out of the live field (`take_ok` / `take_err`)
//! - finalization of the live field (`drop_ok` / `drop_err`)
//!
//! ## Core invariant
//! The `ok` field is initialized exactly when the owner's state is `Ok`, and
//! the `err` field exactly when it is `Err`. In every consumed state the slot
//! is vacant: its bytes are unspecified and must never be read or dropped.

use core::mem::ManuallyDrop;

/// Raw storage for either payload.
pub(crate) union Slot<T, E> {
    ok: ManuallyDrop<T>,
    err: ManuallyDrop<E>,
    vacant: (),
}

impl<T, E> Slot<T, E> {
    #[inline(always)]
    pub(crate) const fn ok(value: T) -> Self {
        Self { ok: ManuallyDrop::new(value) }
    }

    #[inline(always)]
    pub(crate) const fn err(value: E) -> Self {
        Self { err: ManuallyDrop::new(value) }
    }

    /// A slot with no live field, for containers created in a consumed state.
    #[inline(always)]
    pub(crate) const fn vacant() -> Self {
        Self { vacant: () }
    }

    /// # Safety
    /// The `ok` field must be live.
    #[inline(always)]
    pub(crate) unsafe fn ok_ref(&self) -> &T {
        // SAFETY: caller asserts the `ok` field is live.
        unsafe { &self.ok }
    }

    /// # Safety
    /// The `err` field must be live.
    #[inline(always)]
    pub(crate) unsafe fn err_ref(&self) -> &E {
        // SAFETY: caller asserts the `err` field is live.
        unsafe { &self.err }
    }

    /// # Safety
    /// The `ok` field must be live.
    #[inline(always)]
    pub(crate) unsafe fn ok_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the `ok` field is live; `&mut self` is exclusive.
        unsafe { &mut self.ok }
    }

    /// # Safety
    /// The `err` field must be live.
    #[inline(always)]
    pub(crate) unsafe fn err_mut(&mut self) -> &mut E {
        // SAFETY: caller asserts the `err` field is live; `&mut self` is exclusive.
        unsafe { &mut self.err }
    }

    /// Moves the success payload out, leaving the slot vacant.
    ///
    /// # Safety
    /// - The `ok` field must be live.
    /// - The caller must record the move (flip the owner's state) before the
    ///   slot can be observed again, so it is never read or dropped twice.
    #[inline(always)]
    pub(crate) unsafe fn take_ok(&mut self) -> T {
        // SAFETY: caller asserts liveness and move bookkeeping.
        unsafe { ManuallyDrop::take(&mut self.ok) }
    }

    /// Moves the error payload out, leaving the slot vacant.
    ///
    /// # Safety
    /// Same contract as [`Slot::take_ok`] for the `err` field.
    #[inline(always)]
    pub(crate) unsafe fn take_err(&mut self) -> E {
        // SAFETY: caller asserts liveness and move bookkeeping.
        unsafe { ManuallyDrop::take(&mut self.err) }
    }

    /// Bitwise-moves the whole slot out, leaving `self` vacant.
    ///
    /// # Safety
    /// The caller must mark the source as consumed so the live field (if any)
    /// is owned by exactly one slot afterwards.
    #[inline(always)]
    pub(crate) unsafe fn take_all(&mut self) -> Self {
        // SAFETY: caller asserts ownership transfer bookkeeping.
        unsafe { core::ptr::read(self) }
    }

    /// Runs the success payload's destructor in place.
    ///
    /// # Safety
    /// - The `ok` field must be live.
    /// - Must not be called more than once for the same payload.
    #[inline(always)]
    pub(crate) unsafe fn drop_ok(&mut self) {
        // SAFETY: caller asserts liveness and drop uniqueness.
        unsafe { ManuallyDrop::drop(&mut self.ok) }
    }

    /// Runs the error payload's destructor in place.
    ///
    /// # Safety
    /// Same contract as [`Slot::drop_ok`] for the `err` field.
    #[inline(always)]
    pub(crate) unsafe fn drop_err(&mut self) {
        // SAFETY: caller asserts liveness and drop uniqueness.
        unsafe { ManuallyDrop::drop(&mut self.err) }
    }
}
