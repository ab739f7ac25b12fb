//! FizzBuzz, as a consumer of the rule engine.
//!
//! For N in [1, 100]: multiples of 3 become "Fizz", multiples of 5 become
//! "Buzz", multiples of both become "FizzBuzz", and everything else is the
//! number itself. The logic is just four registrations on a
//! [`RuleSet`](crate::rules::RuleSet); see [`fizz_buzz_rules`].
//!
//! ## Example Usage
//!
//! ```
//! use rule_fizzbuzz::fizzbuzz::{fizz_buzz_range, render, FizzBuzzValue};
//! use rule_fizzbuzz::core::FizzBuzzConfig;
//!
//! let values = fizz_buzz_range(&FizzBuzzConfig::default().with_range(1, 5)).unwrap();
//! assert_eq!(values[2], FizzBuzzValue::Fizz);
//! assert_eq!(render(&values), "1\n2\nFizz\n4\nBuzz");
//! ```

pub mod fixture;
mod generator;
mod value;

pub use generator::{fizz_buzz_range, fizz_buzz_rules, fizz_buzz_values, render};
pub use value::FizzBuzzValue;
