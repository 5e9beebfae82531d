//! Outcome construction, mapping, and conversion tests

use std::cell::Cell;
use std::num::ParseIntError;

use tessera::{CaughtPanic, Either, Outcome};

use crate::common::init_tracing;

#[test]
fn of_value_converts_to_right() {
    let either = Outcome::<_, String>::of_value(42).into_either();
    assert!(either.is_right());
    assert_eq!(either.right(), Some(42));
}

#[test]
fn of_failure_converts_to_left() {
    let either = Outcome::<i32, _>::of_failure("boom").into_either();
    assert!(either.is_left());
    assert_eq!(either.left(), Some("boom"));
}

#[test]
fn map_on_value_equals_value_of_mapped() {
    let f = |n: i32| n * n - 1;
    for x in [-3, 0, 7] {
        assert_eq!(
            Outcome::<_, String>::of_value(x).map(f),
            Outcome::of_value(f(x))
        );
    }
}

#[test]
fn map_on_failure_never_calls_function() {
    let calls = Cell::new(0);
    let mapped = Outcome::<i32, _>::of_failure("nope").map(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });
    assert_eq!(mapped, Outcome::of_failure("nope"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_in_function_form() {
    let result: Outcome<&str, ParseIntError> = Outcome::of_value("abc");
    assert_eq!(Outcome::map(result, str::len), Outcome::Value(3));
}

#[test]
fn either_round_trip_is_identity() {
    let values: [Outcome<u8, char>; 2] = [Outcome::Value(1), Outcome::Failure('x')];
    for outcome in values {
        let either: Either<char, u8> = outcome.into();
        assert_eq!(Outcome::from(either), outcome);
    }
}

#[test]
fn of_captures_parse_errors() {
    let parsed: Outcome<i32, ParseIntError> = Outcome::of(|| "12x".parse::<i32>());
    assert!(parsed.is_failure());
    assert_eq!(
        parsed.map_failure(|e| e.to_string()).failure().as_deref(),
        Some("invalid digit found in string")
    );
}

#[test]
fn of_does_not_capture_panics() {
    let caught = Outcome::catching(|| {
        let _: Outcome<i32, String> = Outcome::of(|| -> Result<i32, String> { panic!("escaped") });
    });
    assert_eq!(
        caught.failure().map(|p| p.message().to_owned()),
        Some("escaped".to_owned())
    );
}

#[test]
fn catching_turns_panic_into_failure() {
    init_tracing();
    let outcome: Outcome<i32, CaughtPanic> = Outcome::catching(|| panic!("Boo"));
    match outcome {
        Outcome::Failure(caught) => assert_eq!(caught.message(), "Boo"),
        Outcome::Value(value) => panic!("expected failure, got {value}"),
    }
}

#[test]
fn result_interop() {
    let result: Result<i32, String> = Err("bad".to_owned());
    let outcome = Outcome::from(result);
    assert_eq!(outcome.clone().into_result(), Err("bad".to_owned()));
    assert_eq!(outcome.value_or_else(|e| e.len() as i32), 3);
}
