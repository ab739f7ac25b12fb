//! FizzBuzz configuration.

use serde::{Deserialize, Serialize};

use super::error::{FizzBuzzError, Result};

/// Inclusive range of integers to run through the FizzBuzz rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FizzBuzzConfig {
    /// First value processed.
    pub start: i64,

    /// Last value processed (inclusive).
    pub end: i64,
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self { start: 1, end: 100 }
    }
}

impl FizzBuzzConfig {
    /// Create a config with a custom start.
    #[must_use]
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Create a config with a custom end.
    #[must_use]
    pub fn with_end(mut self, end: i64) -> Self {
        self.end = end;
        self
    }

    /// Create a config with a custom inclusive range.
    #[must_use]
    pub fn with_range(self, start: i64, end: i64) -> Self {
        self.with_start(start).with_end(end)
    }

    /// Reject inverted ranges.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(FizzBuzzError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of values in the range (0 if inverted).
    #[must_use]
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::try_from(self.end.abs_diff(self.start)).map_or(usize::MAX, |d| d.saturating_add(1))
        }
    }

    /// True if the range holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Iterate the configured values in increasing order.
    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FizzBuzzConfig::default();
        assert_eq!(config.start, 1);
        assert_eq!(config.end, 100);
        assert_eq!(config.len(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FizzBuzzConfig::default().with_start(-5).with_end(5);
        assert_eq!(config.values().collect::<Vec<_>>().len(), 11);
        assert_eq!(config.len(), 11);

        let config = FizzBuzzConfig::default().with_range(7, 7);
        assert_eq!(config.len(), 1);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = FizzBuzzConfig::default().with_range(10, 1);
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
        assert!(matches!(
            config.validate(),
            Err(FizzBuzzError::InvalidRange { start: 10, end: 1 })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = FizzBuzzConfig::default().with_range(3, 30);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: FizzBuzzConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
