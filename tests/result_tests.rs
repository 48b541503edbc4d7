use std::cell::Cell;

use strict_result::fault::{catch, catch_mut};
use strict_result::{err, ok, Result, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Unit;

fn test_ok() -> Result<i32, Unit> {
    ok(10)
}

fn test_err() -> Result<Unit, i32> {
    err(10)
}

#[test]
fn test_factories_infer_missing_side() {
    assert_eq!(test_ok().unwrap(), 10);
    assert_eq!(test_err().unwrap_err(), 10);
}

#[test]
fn test_is_ok_is_err() {
    assert!(ok::<_, Unit>(10).is_ok());
    assert!(!ok::<_, Unit>(10).is_err());
    assert!(err::<Unit, _>(10).is_err());
    assert!(!err::<Unit, _>(10).is_ok());
}

#[test]
fn test_consumption_clears_is_ok_and_is_err() {
    let mut r: Result<i32, i32> = ok(1);
    assert!(r.is_ok());
    r.unwrap();
    assert!(!r.is_ok());
    assert!(!r.is_err());
    assert!(r.state().was_ok());
    assert!(r.is_consumed());

    let mut r: Result<i32, i32> = err(1);
    assert!(r.is_err());
    r.unwrap_err();
    assert!(!r.is_err());
    assert!(!r.is_ok());
    assert!(r.state().was_err());
    assert_eq!(r.state(), State::MovedErr);
}

#[test]
fn test_as_ref_does_not_consume() {
    let mut result: Result<String, i32> = ok("ten".to_string());
    {
        let view = result.as_ref().unwrap();
        assert_eq!(view, "ten");
    }
    assert_eq!(result.state(), State::Ok);
    assert_eq!(result.unwrap(), "ten");
}

#[test]
fn test_match_runs_only_error_handler() {
    let ok_ran = Cell::new(false);
    let seen = err::<i32, i32>(10).match_owned(
        |_| {
            ok_ran.set(true);
            0
        },
        |e| e,
    );
    assert_eq!(seen, 10);
    assert!(!ok_ran.get());
}

#[test]
fn test_map() {
    let square = |x: i32| x * x;
    assert_eq!(ok::<_, Unit>(10).map(square).unwrap(), 100);
    assert_eq!(err::<Unit, _>(10).map_err(square).unwrap_err(), 100);
}

#[test]
fn test_eq() {
    assert_eq!(ok::<i32, i32>(10), ok::<i32, i32>(10));
    assert_eq!(err::<i32, i32>(10), err::<i32, i32>(10));
    assert_ne!(ok::<i32, i32>(10), err::<i32, i32>(10));
}

#[test]
fn test_double_unwrap_is_misuse() {
    let mut r: Result<Vec<u8>, Unit> = ok(vec![1, 2, 3]);
    assert_eq!(r.unwrap(), vec![1, 2, 3]);

    let fault = catch_mut(|| r.unwrap()).unwrap_err();
    assert_eq!(fault.operation(), "unwrap()");
    assert_eq!(fault.found(), State::MovedOk);
    assert!(fault.is_use_after_consume());
    assert_eq!(fault.to_string(), "Panic: Called unwrap() on a moved result!");
}

#[test]
fn test_wrong_side_is_distinguished_from_consumed() {
    let wrong_side = catch(|| err::<i32, i32>(1).unwrap()).unwrap_err();
    assert!(!wrong_side.is_use_after_consume());
    assert!(wrong_side.message().contains("an erroneous"));

    let mut r: Result<i32, i32> = ok(1);
    r.unwrap();
    let consumed = catch_mut(|| r.unwrap_err()).unwrap_err();
    assert!(consumed.is_use_after_consume());
    assert!(consumed.message().contains("a moved"));
}

#[test]
fn test_unwrap_or_fallback() {
    assert_eq!(err::<i32, Unit>(Unit).unwrap_or(7), 7);
    assert_eq!(ok::<i32, Unit>(3).unwrap_or(7), 3);
}

#[test]
fn test_unwrap_or_else_is_lazy() {
    let invoked = Cell::new(false);
    let value = ok::<i32, Unit>(3).unwrap_or_else(|| {
        invoked.set(true);
        7
    });
    assert_eq!(value, 3);
    assert!(!invoked.get());

    let value = err::<i32, Unit>(Unit).unwrap_or_else(|| {
        invoked.set(true);
        7
    });
    assert_eq!(value, 7);
    assert!(invoked.get());
}

#[test]
fn test_unwrap_or_on_consumed_is_misuse() {
    let mut r: Result<i32, Unit> = ok(3);
    r.unwrap();
    let fault = catch_mut(|| r.unwrap_or(7)).unwrap_err();
    assert_eq!(fault.operation(), "unwrap_or()");
}

#[test]
fn test_all_any_short_circuit() {
    assert_eq!(err::<i32, &str>("e").all(ok::<u8, &str>(1)), err("e"));
    assert_eq!(ok::<i32, &str>(5).any(err::<i32, u8>(1)), ok(5));
    assert_eq!(ok::<i32, &str>(5).all(ok::<u8, &str>(1)), ok(1));
    assert_eq!(err::<i32, &str>("e").any(err::<i32, u8>(1)), err(1));
}

#[test]
fn test_domain_errors_never_fault() {
    let outcome = catch(|| {
        let mut r: Result<i32, String> = err("not found".to_string());
        let fallback = r.unwrap_or_default();
        let message = r.map_err(|e| e.to_uppercase()).match_owned(|_| String::new(), |e| e);
        (fallback, message)
    });
    assert_eq!(outcome, Ok((0, "NOT FOUND".to_string())));
}
