//! FizzBuzz integration tests.
//!
//! These tests check the generated sequence against the checked-in
//! expected-output fixture and the divisibility properties of each entry.

use proptest::prelude::*;

use rule_fizzbuzz::fizzbuzz::{fixture, fizz_buzz_range, fizz_buzz_values, render, FizzBuzzValue};
use rule_fizzbuzz::{FizzBuzzConfig, FizzBuzzError};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fizzbuzz.txt");

/// Reference classification of a single integer.
fn classify(n: i64) -> FizzBuzzValue {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => FizzBuzzValue::FizzBuzz,
        (true, false) => FizzBuzzValue::Fizz,
        (false, true) => FizzBuzzValue::Buzz,
        (false, false) => FizzBuzzValue::Number(n),
    }
}

/// The generated output matches the fixture line for line.
#[test]
fn test_output_matches_fixture() {
    let values = fizz_buzz_values();
    let expected = fixture::load_expected(FIXTURE).unwrap();
    fixture::verify(&values, &expected).unwrap();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, expected);
}

/// Only non-multiples of 3 and 5 survive as bare numbers.
#[test]
fn test_numbers_are_not_multiples() {
    for value in fizz_buzz_values() {
        if let Some(n) = value.as_number() {
            assert_ne!(n % 3, 0, "{n} should have been replaced");
            assert_ne!(n % 5, 0, "{n} should have been replaced");
        }
    }
}

/// Length and order follow the input range.
#[test]
fn test_length_and_order() {
    let values = fizz_buzz_values();
    assert_eq!(values.len(), 100);
    for (idx, value) in values.iter().enumerate() {
        let n = idx as i64 + 1;
        assert_eq!(*value, classify(n), "mismatch at N = {n}");
    }
}

#[test]
fn test_concrete_scenarios() {
    let values = fizz_buzz_values();
    assert_eq!(values[0].to_string(), "1");
    assert_eq!(values[2].to_string(), "Fizz");
    assert_eq!(values[4].to_string(), "Buzz");
    assert_eq!(values[14].to_string(), "FizzBuzz");
    assert_eq!(values[99].to_string(), "Buzz");
}

#[test]
fn test_render_matches_fixture_text() {
    let text = std::fs::read_to_string(FIXTURE).unwrap();
    assert_eq!(render(&fizz_buzz_values()), text.trim_end());
}

#[test]
fn test_wrong_fixture_is_rejected() {
    let mut expected = fixture::load_expected(FIXTURE).unwrap();
    expected[14] = "Fizz".to_string();
    match fixture::verify(&fizz_buzz_values(), &expected) {
        Err(FizzBuzzError::FixtureMismatch { line, actual, .. }) => {
            assert_eq!(line, 15);
            assert_eq!(actual, "FizzBuzz");
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }

    expected.truncate(50);
    assert!(matches!(
        fixture::verify(&fizz_buzz_values()[..60], &expected),
        Err(FizzBuzzError::FixtureMismatch { line: 15, .. })
    ));
}

proptest! {
    /// Any integer range produces one correctly classified entry per value.
    #[test]
    fn prop_range_classification(start in -10_000i64..10_000, len in 0i64..300) {
        let config = FizzBuzzConfig::default().with_range(start, start + len);
        let values = fizz_buzz_range(&config).unwrap();

        prop_assert_eq!(values.len() as i64, len + 1);
        for (offset, value) in values.iter().enumerate() {
            let n = start + offset as i64;
            prop_assert_eq!(*value, classify(n));
        }
    }

    /// A multiple of 15 never yields Fizz or Buzz on its own.
    #[test]
    fn prop_fifteen_is_fizzbuzz(k in -1_000i64..1_000) {
        let n = k * 15;
        let values = fizz_buzz_range(&FizzBuzzConfig::default().with_range(n, n)).unwrap();
        prop_assert_eq!(values, vec![FizzBuzzValue::FizzBuzz]);
    }
}
