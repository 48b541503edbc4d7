//! Runs with `CheckMode::Permissive`. The configuration is process-wide, so
//! these tests live in their own binary and every test installs it first.

use strict_result::fault::catch_mut;
use strict_result::{config, err, ok, CheckMode, Config, ConfigError, Result, State};

fn permissive() {
    config::init(Config::permissive()).expect("permissive configuration");
}

#[test]
fn test_init_is_idempotent_for_equal_config() {
    permissive();
    assert_eq!(config::init(Config::permissive()), Ok(()));
    assert_eq!(config::get().checks, CheckMode::Permissive);
}

#[test]
fn test_init_rejects_different_config() {
    permissive();
    assert_eq!(
        config::init(Config::strict()),
        Err(ConfigError::AlreadyInitialized(Config::permissive()))
    );
}

#[test]
fn test_clone_of_consumed_carries_state() {
    permissive();
    let mut r: Result<String, u8> = ok("x".to_string());
    r.unwrap();
    let copy = r.clone();
    assert_eq!(copy.state(), State::MovedOk);
    assert!(!copy.is_ok());
    assert!(copy.state().was_ok());
    assert!(copy.is_consumed());
}

#[test]
fn test_take_of_consumed_carries_state() {
    permissive();
    let mut r: Result<u8, String> = err("x".to_string());
    r.unwrap_err();
    let taken = r.take();
    assert_eq!(taken.state(), State::MovedErr);
    assert_eq!(r.state(), State::Moved);
}

#[test]
fn test_accessors_still_fault() {
    permissive();
    let mut r: Result<u8, u8> = ok(1);
    r.unwrap();
    let mut copy = r.clone();
    let fault = catch_mut(|| copy.unwrap()).unwrap_err();
    assert_eq!(fault.found(), State::MovedOk);
    let fault = catch_mut(|| r.as_ref().is_ok()).unwrap_err();
    assert_eq!(fault.operation(), "as_ref()");
}
