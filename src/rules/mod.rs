//! Ordered condition/action rule engine.
//!
//! A [`RuleSet`] holds [`Rule`]s in the order they were added. Each value
//! passed to [`RuleSet::process`] is tested against every rule in turn:
//!
//! - Every rule that matches runs its action, in order.
//! - A rule added with [`RuleSet::add_last`] stops evaluation for the value
//!   once it matches.
//! - Default actions run, all of them and in order, only when no rule
//!   matched.
//! - Optional before/after hooks run around each value.
//!
//! There are no priorities beyond insertion order and no conflict
//! resolution beyond first-match-with-last-stops.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use rule_fizzbuzz::rules::RuleSet;
//!
//! let log = RefCell::new(Vec::new());
//! let mut rules: RuleSet<'_, str> = RuleSet::new();
//!
//! // Matches exactly "a".
//! rules.add_last(|x: &str| x == "a", |_: &str| log.borrow_mut().push("Found an a!".to_string()));
//!
//! // Would also match "a", but the rule above is `last`.
//! rules.add(
//!     |x: &str| x.starts_with('a') && x.ends_with('a'),
//!     |_: &str| log.borrow_mut().push("Found an a...a!".to_string()),
//! );
//!
//! rules.process("a").unwrap();
//! rules.process("axxxa").unwrap();
//!
//! // No rule and no default: nothing happens.
//! rules.process("b").unwrap();
//!
//! rules.add_default(|x: &str| log.borrow_mut().push(format!("Unknown: {x}")));
//! rules.process_many(["axxxa", "a", "b"]).unwrap();
//!
//! drop(rules);
//! assert_eq!(
//!     log.into_inner(),
//!     vec![
//!         "Found an a!",
//!         "Found an a...a!",
//!         "Found an a...a!",
//!         "Found an a!",
//!         "Unknown: b",
//!     ]
//! );
//! ```
//!
//! ## Errors
//!
//! Conditions may return `Result<bool, E>` and actions or hooks
//! `Result<(), E>` on a set built with [`RuleSet::fallible`]. The first
//! error aborts the current value (and the rest of a batch) and is
//! returned unchanged.

mod rule;
mod ruleset;

pub use rule::{Action, ActionOutcome, Condition, ConditionOutcome, Rule};
pub use ruleset::{ProcessOutcome, RuleSet};
