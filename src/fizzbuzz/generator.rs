//! FizzBuzz built on a `RuleSet`.

use std::cell::RefCell;

use tracing::debug;

use crate::core::{FizzBuzzConfig, Result};
use crate::rules::RuleSet;

use super::value::FizzBuzzValue;

/// Build the FizzBuzz rule set, recording into `sink`.
///
/// 1. Multiple of 15 records `FizzBuzz` and stops (so 3 and 5 don't fire).
/// 2. Multiple of 3 records `Fizz`.
/// 3. Multiple of 5 records `Buzz`.
/// 4. Anything else records the number itself.
pub fn fizz_buzz_rules(sink: &RefCell<Vec<FizzBuzzValue>>) -> RuleSet<'_, i64> {
    let mut rules = RuleSet::new();
    rules.add_last(
        |x: &i64| x % 15 == 0,
        move |_: &i64| sink.borrow_mut().push(FizzBuzzValue::FizzBuzz),
    );
    rules.add(
        |x: &i64| x % 3 == 0,
        move |_: &i64| sink.borrow_mut().push(FizzBuzzValue::Fizz),
    );
    rules.add(
        |x: &i64| x % 5 == 0,
        move |_: &i64| sink.borrow_mut().push(FizzBuzzValue::Buzz),
    );
    rules.add_default(move |x: &i64| sink.borrow_mut().push(FizzBuzzValue::Number(*x)));
    rules
}

/// Run the FizzBuzz rules over the configured range.
pub fn fizz_buzz_range(config: &FizzBuzzConfig) -> Result<Vec<FizzBuzzValue>> {
    config.validate()?;

    let sink = RefCell::new(Vec::with_capacity(config.len().min(1 << 16)));
    let mut rules = fizz_buzz_rules(&sink);
    rules
        .process_many(config.values())
        .unwrap_or_else(|never| match never {});
    drop(rules);

    let values = sink.into_inner();
    debug!(start = config.start, end = config.end, count = values.len(), "generated values");
    Ok(values)
}

/// For N in [1, 100], return the corresponding FizzBuzz list.
pub fn fizz_buzz_values() -> Vec<FizzBuzzValue> {
    let sink = RefCell::new(Vec::with_capacity(100));
    let mut rules = fizz_buzz_rules(&sink);
    rules
        .process_many(1..=100_i64)
        .unwrap_or_else(|never| match never {});
    drop(rules);
    sink.into_inner()
}

/// Join values with newlines, one per line.
pub fn render(values: &[FizzBuzzValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
