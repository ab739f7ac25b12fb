//! Expected-output fixtures.
//!
//! A fixture is a plain text file with one value per line. Trailing
//! whitespace at the end of the file is ignored.

use std::path::Path;

use tracing::debug;

use crate::core::{FizzBuzzError, Result};

use super::value::FizzBuzzValue;

/// Split fixture text into expected lines.
pub fn parse_expected(text: &str) -> Vec<String> {
    text.trim_end().lines().map(str::to_owned).collect()
}

/// Read and parse a fixture file.
pub fn load_expected(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FizzBuzzError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let expected = parse_expected(&text);
    debug!(path = %path.display(), lines = expected.len(), "loaded fixture");
    Ok(expected)
}

/// Compare values, stringified, against expected lines.
///
/// Reports the first differing line, or a length mismatch if one side is
/// a prefix of the other.
pub fn verify(values: &[FizzBuzzValue], expected: &[String]) -> Result<()> {
    for (idx, (value, want)) in values.iter().zip(expected).enumerate() {
        let actual = value.to_string();
        if actual != *want {
            return Err(FizzBuzzError::FixtureMismatch {
                line: idx + 1,
                expected: want.clone(),
                actual,
            });
        }
    }

    if values.len() != expected.len() {
        return Err(FizzBuzzError::LengthMismatch {
            expected: expected.len(),
            actual: values.len(),
        });
    }

    Ok(())
}
