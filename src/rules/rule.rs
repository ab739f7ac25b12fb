//! A single condition/action binding.
//!
//! Rules are usually built through [`RuleSet::add`](super::RuleSet::add),
//! but can be constructed directly and registered with
//! [`RuleSet::add_rule`](super::RuleSet::add_rule).

use std::convert::Infallible;
use std::fmt;

/// Boxed predicate over a value.
pub type Condition<'a, T, E = Infallible> = Box<dyn Fn(&T) -> Result<bool, E> + 'a>;

/// Boxed side-effecting procedure over a value.
pub type Action<'a, T, E = Infallible> = Box<dyn FnMut(&T) -> Result<(), E> + 'a>;

/// Return types accepted from a condition.
///
/// Implemented for `bool` (a plain predicate) and `Result<bool, E>`
/// (a predicate that can fail). Lets one constructor take both.
pub trait ConditionOutcome<E> {
    /// Convert into the engine's matching result.
    fn into_match(self) -> Result<bool, E>;
}

impl<E> ConditionOutcome<E> for bool {
    fn into_match(self) -> Result<bool, E> {
        Ok(self)
    }
}

impl<E> ConditionOutcome<E> for Result<bool, E> {
    fn into_match(self) -> Result<bool, E> {
        self
    }
}

/// Return types accepted from an action or hook.
///
/// Implemented for `()` and `Result<(), E>`.
pub trait ActionOutcome<E> {
    /// Convert into the engine's action result.
    fn into_result(self) -> Result<(), E>;
}

impl<E> ActionOutcome<E> for () {
    fn into_result(self) -> Result<(), E> {
        Ok(())
    }
}

impl<E> ActionOutcome<E> for Result<(), E> {
    fn into_result(self) -> Result<(), E> {
        self
    }
}

/// Box a plain or fallible action into the stored form.
pub(crate) fn boxed_action<'a, T, E, A, O>(mut action: A) -> Action<'a, T, E>
where
    T: ?Sized,
    A: FnMut(&T) -> O + 'a,
    O: ActionOutcome<E>,
{
    Box::new(move |value: &T| action(value).into_result())
}

/// A condition, the action to run when it holds, and the `last` flag.
///
/// When a `last` rule matches, no later rule in the same set is tested for
/// that value (like the `L` flag of an Apache `RewriteRule`).
pub struct Rule<'a, T: ?Sized, E = Infallible> {
    condition: Condition<'a, T, E>,
    action: Action<'a, T, E>,
    last: bool,
}

impl<'a, T: ?Sized, E> Rule<'a, T, E> {
    /// Create a new rule. `last` defaults to `false`.
    ///
    /// The condition may return `bool` or `Result<bool, E>`; the action may
    /// return `()` or `Result<(), E>`.
    pub fn new<C, CO, A, AO>(condition: C, action: A) -> Self
    where
        C: Fn(&T) -> CO + 'a,
        CO: ConditionOutcome<E>,
        A: FnMut(&T) -> AO + 'a,
        AO: ActionOutcome<E>,
    {
        let condition: Condition<'a, T, E> =
            Box::new(move |value: &T| condition(value).into_match());
        Self {
            condition,
            action: boxed_action(action),
            last: false,
        }
    }

    /// Mark this rule as last (builder pattern).
    #[must_use]
    pub fn last(self) -> Self {
        self.with_last(true)
    }

    /// Set the last flag (builder pattern).
    #[must_use]
    pub fn with_last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Whether a match on this rule stops evaluation for the value.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Test whether `value` matches this rule.
    ///
    /// Errors from the condition are returned unchanged.
    pub fn matches(&self, value: &T) -> Result<bool, E> {
        (self.condition)(value)
    }

    /// Run the action on `value`.
    pub fn fire(&mut self, value: &T) -> Result<(), E> {
        (self.action)(value)
    }
}

impl<T: ?Sized, E> fmt::Debug for Rule<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
