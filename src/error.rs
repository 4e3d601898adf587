//! # Error Types
//!
//! This module defines the error type shared by the desk-assignment search.
//! The search operators themselves (construction, repair, crossover, mutation,
//! fitness) cannot fail; errors only arise when the problem data is built from
//! its raw record, when options are validated, or when a run is driven with a
//! population that cannot support its configuration.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use hotdesk::error::{ScheduleError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(ScheduleError::EmptyPopulation);
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use hotdesk::error::{ScheduleError, OptionExt};
//!
//! fn best_score(scores: &[u64]) -> hotdesk::error::Result<u64> {
//!     scores.iter().min().copied().ok_or_else_schedule(||
//!         ScheduleError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_score(&[3, 1, 2]).unwrap(), 1);
//! ```

use thiserror::Error;

/// Represents errors that can occur while preparing or running a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The raw problem record refers to an identifier that was never declared.
    #[error("Unknown {kind} identifier: '{name}'")]
    UnknownIdentifier { kind: &'static str, name: String },

    /// A declared identifier list contains the same name twice.
    #[error("Duplicate {kind} identifier: '{name}'")]
    DuplicateIdentifier { kind: &'static str, name: String },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a selection cannot be carried out.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for desk-assignment operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, ScheduleError>` using a closure
    /// to generate the error.
    fn ok_or_else_schedule<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ScheduleError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_schedule<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ScheduleError,
    {
        self.ok_or_else(err_fn)
    }
}
