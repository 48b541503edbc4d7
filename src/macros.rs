/// Early-return propagation for [`Result`](crate::Result).
///
/// Evaluates the expression once. A success yields its payload; an error
/// returns `err(From::from(payload))` from the enclosing function, whose
/// error type must implement `From` of the inner error type.
///
/// # Example
///
/// ```rust
/// use strict_result::{err, ok, try_result, Result};
///
/// fn divide(a: f64, b: f64) -> Result<f64, &'static str> {
///     if b == 0.0 {
///         return err("division by zero");
///     }
///     ok(a / b)
/// }
///
/// fn divide_then_root(a: f64, b: f64) -> Result<f64, &'static str> {
///     let quotient = try_result!(divide(a, b));
///     ok(quotient.sqrt())
/// }
///
/// assert_eq!(divide_then_root(16.0, 4.0), ok(2.0));
/// assert_eq!(divide_then_root(5.0, 0.0), err("division by zero"));
/// ```
///
/// The two-argument form assigns the payload to an existing place:
///
/// ```rust
/// use strict_result::{ok, try_result, Result};
///
/// struct Totals {
///     last: i32,
/// }
///
/// fn record(r: Result<i32, ()>, totals: &mut Totals) -> Result<i32, ()> {
///     let doubled: i32;
///     try_result!(r, totals.last);
///     try_result!(ok::<i32, ()>(totals.last * 2), doubled);
///     ok(doubled)
/// }
///
/// let mut totals = Totals { last: 0 };
/// assert_eq!(record(ok(4), &mut totals), ok(8));
/// assert_eq!(totals.last, 4);
/// ```
#[macro_export]
macro_rules! try_result {
    ($expr:expr, $place:expr) => {
        $place = $crate::try_result!($expr);
    };
    ($expr:expr) => {
        match $crate::Result::into_std($expr) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return $crate::err(::core::convert::From::from(error))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{err, ok, Result};
    use std::cell::Cell;

    fn parse(input: &str) -> Result<i32, String> {
        match input.parse::<i32>() {
            Ok(n) => ok(n),
            Err(e) => err(e.to_string()),
        }
    }

    fn sum(a: &str, b: &str) -> Result<i32, String> {
        let x = try_result!(parse(a));
        let y;
        try_result!(parse(b), y);
        ok(x + y)
    }

    #[test]
    fn test_try_result_success() {
        assert_eq!(sum("2", "3"), ok(5));
    }

    #[test]
    fn test_try_result_forwards_first_error() {
        assert_eq!(sum("x", "3"), err("invalid digit found in string".to_string()));
    }

    #[test]
    fn test_try_result_assigns_existing_place() {
        fn overwrite(input: &str, slot: &mut i32) -> Result<(), String> {
            try_result!(parse(input), *slot);
            ok(())
        }

        let mut slot = 1;
        assert_eq!(overwrite("7", &mut slot), ok(()));
        assert_eq!(slot, 7);
        assert!(overwrite("nope", &mut slot).is_err());
        assert_eq!(slot, 7);
    }

    #[test]
    fn test_try_result_evaluates_once() {
        let evaluations = Cell::new(0);
        let f = || -> Result<i32, ()> {
            let v = try_result!({
                evaluations.set(evaluations.get() + 1);
                ok::<i32, ()>(1)
            });
            ok(v)
        };
        assert_eq!(f(), ok(1));
        assert_eq!(evaluations.get(), 1);
    }
}
