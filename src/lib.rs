//! # rule-fizzbuzz
//!
//! FizzBuzz implemented on top of a tiny ordered rule engine.
//!
//! ## Design Principles
//!
//! 1. **Insertion Order Is Priority**: Rules are tested in the order they
//!    were added. There is no other priority or conflict resolution.
//!
//! 2. **First Match With Last Stops**: Every matching rule fires until a
//!    rule flagged `last` matches; defaults fire only when nothing matched.
//!
//! 3. **Errors Pass Through**: The engine never creates or wraps errors.
//!    Whatever a condition, action or hook returns is handed back as-is.
//!
//! ## Modules
//!
//! - `core`: Error type and configuration
//! - `rules`: `Rule` and `RuleSet`
//! - `fizzbuzz`: The FizzBuzz consumer, rendering and fixture checks

pub mod core;
pub mod rules;
pub mod fizzbuzz;

// Re-export commonly used types
pub use crate::core::{FizzBuzzConfig, FizzBuzzError, Result};

pub use crate::rules::{
    Action, ActionOutcome, Condition, ConditionOutcome,
    ProcessOutcome, Rule, RuleSet,
};

pub use crate::fizzbuzz::{
    fizz_buzz_range, fizz_buzz_rules, fizz_buzz_values, render, FizzBuzzValue,
};
