//! Core types shared across the crate.
//!
//! - `FizzBuzzError`: errors from configuration and fixture handling
//! - `FizzBuzzConfig`: the range of values to generate

pub mod config;
pub mod error;

pub use config::FizzBuzzConfig;
pub use error::{FizzBuzzError, Result};
