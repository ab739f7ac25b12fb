//! Ordered rule container.
//!
//! A `RuleSet` tests each value against its rules in insertion order and
//! runs the actions of the rules that match. Default actions run only for
//! values that matched no rule at all.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::rule::{boxed_action, Action, ActionOutcome, ConditionOutcome, Rule};

/// Hook run after each value. Takes no arguments.
type AfterHook<'a, E> = Box<dyn FnMut() -> Result<(), E> + 'a>;

/// What happened while processing one value.
///
/// Informational only: the observable effects of processing are whatever
/// the registered actions and hooks do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// At least one rule matched; defaults were skipped.
    Matched {
        /// Number of rule actions that ran.
        rules_fired: usize,
        /// A `last` rule matched and cut evaluation short.
        stopped_early: bool,
    },
    /// No rule matched; every default action ran.
    Defaulted {
        /// Number of default actions that ran (may be 0).
        defaults_fired: usize,
    },
}

impl ProcessOutcome {
    /// True if at least one rule matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// An ordered set of rules plus default actions and per-value hooks.
///
/// The set knows nothing about the values it processes, and the values
/// need not know about the set. `T` may be unsized (`RuleSet<str>`).
///
/// `E` is the error type of the registered procedures. The engine never
/// produces errors itself; a failing condition, action or hook aborts the
/// current value and its error is returned as-is. With the default
/// `E = Infallible`, processing cannot fail.
pub struct RuleSet<'a, T: ?Sized, E = Infallible> {
    /// Rules in insertion order.
    /// SmallVec keeps typical sets (a handful of rules) inline.
    rules: SmallVec<[Rule<'a, T, E>; 4]>,

    /// Actions for values that match no rule, in insertion order.
    defaults: SmallVec<[Action<'a, T, E>; 2]>,

    /// Called with each value before any rule is tested.
    before_processing: Option<Action<'a, T, E>>,

    /// Called after each value has been processed.
    after_processing: Option<AfterHook<'a, E>>,
}

impl<T: ?Sized, E> Default for RuleSet<'_, T, E> {
    fn default() -> Self {
        Self {
            rules: SmallVec::new(),
            defaults: SmallVec::new(),
            before_processing: None,
            after_processing: None,
        }
    }
}

impl<'a, T: ?Sized> RuleSet<'a, T> {
    /// Create an empty rule set whose procedures cannot fail.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, T: ?Sized, E> RuleSet<'a, T, E> {
    /// Create an empty rule set whose procedures may fail with `E`.
    pub fn fallible() -> Self {
        Self::default()
    }

    /// Set the hook called before each value is processed (builder pattern).
    ///
    /// The hook receives the value about to be processed.
    #[must_use]
    pub fn with_before_processing<F, O>(mut self, hook: F) -> Self
    where
        F: FnMut(&T) -> O + 'a,
        O: ActionOutcome<E>,
    {
        self.before_processing = Some(boxed_action(hook));
        self
    }

    /// Set the hook called after each value is processed (builder pattern).
    #[must_use]
    pub fn with_after_processing<F, O>(mut self, mut hook: F) -> Self
    where
        F: FnMut() -> O + 'a,
        O: ActionOutcome<E>,
    {
        self.after_processing = Some(Box::new(move || hook().into_result()));
        self
    }

    /// Add a rule.
    ///
    /// `condition` takes the value and returns whether the rule applies;
    /// `action` takes the same value and does something with it.
    pub fn add<C, CO, A, AO>(&mut self, condition: C, action: A)
    where
        C: Fn(&T) -> CO + 'a,
        CO: ConditionOutcome<E>,
        A: FnMut(&T) -> AO + 'a,
        AO: ActionOutcome<E>,
    {
        self.add_rule(Rule::new(condition, action));
    }

    /// Add a rule that stops evaluation for a value once it matches.
    pub fn add_last<C, CO, A, AO>(&mut self, condition: C, action: A)
    where
        C: Fn(&T) -> CO + 'a,
        CO: ConditionOutcome<E>,
        A: FnMut(&T) -> AO + 'a,
        AO: ActionOutcome<E>,
    {
        self.add_rule(Rule::new(condition, action).last());
    }

    /// Append a pre-built rule, keeping its `last` flag.
    pub fn add_rule(&mut self, rule: Rule<'a, T, E>) {
        self.rules.push(rule);
    }

    /// Add a default action.
    ///
    /// Default actions run, in the order added, for values that don't
    /// match at least one rule.
    pub fn add_default<A, AO>(&mut self, action: A)
    where
        A: FnMut(&T) -> AO + 'a,
        AO: ActionOutcome<E>,
    {
        self.defaults.push(boxed_action(action));
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of registered default actions.
    #[must_use]
    pub fn default_count(&self) -> usize {
        self.defaults.len()
    }

    /// Test `value` against the rules and run the matching action(s).
    ///
    /// Every matching rule fires, in order, until a `last` rule matches.
    /// If nothing matched, all default actions fire instead. The hooks
    /// wrap the whole thing.
    pub fn process(&mut self, value: &T) -> Result<ProcessOutcome, E> {
        if let Some(hook) = self.before_processing.as_mut() {
            hook(value)?;
        }

        let mut rules_fired = 0;
        let mut stopped_early = false;
        for rule in &mut self.rules {
            if rule.matches(value)? {
                rule.fire(value)?;
                rules_fired += 1;
                if rule.is_last() {
                    stopped_early = true;
                    break;
                }
            }
        }

        let outcome = if rules_fired == 0 {
            for action in &mut self.defaults {
                action(value)?;
            }
            ProcessOutcome::Defaulted {
                defaults_fired: self.defaults.len(),
            }
        } else {
            ProcessOutcome::Matched {
                rules_fired,
                stopped_early,
            }
        };
        trace!(?outcome, "processed value");

        if let Some(hook) = self.after_processing.as_mut() {
            hook()?;
        }

        Ok(outcome)
    }

    /// Process each value in order.
    ///
    /// Stops at the first error; values after it are not processed.
    pub fn process_many<I>(&mut self, values: I) -> Result<(), E>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut processed = 0usize;
        for value in values {
            self.process(value.borrow())?;
            processed += 1;
        }
        debug!(processed, rules = self.rules.len(), "processed batch");
        Ok(())
    }
}

impl<T: ?Sized, E> fmt::Debug for RuleSet<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .field("defaults", &self.defaults.len())
            .field("before_processing", &self.before_processing.is_some())
            .field("after_processing", &self.after_processing.is_some())
            .finish()
    }
}
