//! The lifecycle discriminant of a [`Result`](super::Result).

use core::fmt;

/// Which slot of a result is live, and whether it has been consumed.
///
/// Bit `0x4` is the "consumed" flag; the low bits keep the original tag so a
/// consumed result still remembers which side it was.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The success slot holds a live payload.
    Ok = 0x1,
    /// The error slot holds a live payload.
    Err = 0x2,
    /// The whole container was moved out with [`Result::take`](super::Result::take).
    Moved = 0x4,
    /// The success payload was moved out.
    MovedOk = 0x5,
    /// The error payload was moved out.
    MovedErr = 0x6,
}

const CONSUMED: u8 = 0x4;

impl State {
    /// Returns `true` once the payload (or the whole container) has been moved out.
    #[inline(always)]
    pub const fn is_consumed(self) -> bool {
        (self as u8) & CONSUMED != 0
    }

    /// Returns `true` for `Ok` and `MovedOk`.
    #[inline(always)]
    pub const fn was_ok(self) -> bool {
        matches!(self, Self::Ok | Self::MovedOk)
    }

    /// Returns `true` for `Err` and `MovedErr`.
    #[inline(always)]
    pub const fn was_err(self) -> bool {
        matches!(self, Self::Err | Self::MovedErr)
    }

    /// The state a live result moves to once its payload is taken.
    ///
    /// Consumed states map to themselves.
    #[inline(always)]
    pub const fn consumed(self) -> Self {
        match self {
            Self::Ok | Self::MovedOk => Self::MovedOk,
            Self::Err | Self::MovedErr => Self::MovedErr,
            Self::Moved => Self::Moved,
        }
    }

    /// Article + adjective used in misuse diagnostics ("an OK", "a moved").
    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Ok => "an OK",
            Self::Err => "an erroneous",
            Self::Moved | Self::MovedOk | Self::MovedErr => "a moved",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
            Self::Moved => "Moved",
            Self::MovedOk => "MovedOk",
            Self::MovedErr => "MovedErr",
        };
        f.write_str(name)
    }
}
