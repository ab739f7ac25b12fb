//! FizzBuzz output values.

use serde::{Deserialize, Serialize};

/// One entry of the FizzBuzz sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FizzBuzzValue {
    /// The input value, unchanged (not a multiple of 3 or 5).
    Number(i64),
    /// Multiple of 3.
    Fizz,
    /// Multiple of 5.
    Buzz,
    /// Multiple of both 3 and 5.
    FizzBuzz,
}

impl FizzBuzzValue {
    /// True for values that passed through as numbers.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The number, if this value is one.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for FizzBuzzValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}
