//! Error types for lesson plan generation.
//!
//! Every failure in the core is fatal for the run: numbering and rendering are
//! deterministic, so nothing here is retried.
//!
//! # Examples
//!
//! ```
//! use lps_core::{Error, Result};
//!
//! fn check_count(count: i64) -> Result<()> {
//!     if count < 1 {
//!         return Err(Error::InvalidArgument(format!("count must be positive, got {count}")));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_count(0).unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use thiserror::Error;

/// Main error type for lesson plan generation.
#[derive(Error, Debug)]
pub enum Error {
    /// Two or more lessons share an id.
    ///
    /// The id keys the generated objectives macro, so duplicates would produce
    /// conflicting definitions. Raised before any rendering and lists every
    /// offending id.
    #[error("Duplicate lesson ids: {}", ids.join(", "))]
    DuplicateIds {
        /// Every id that occurs more than once, in sorted order
        ids: Vec<String>,
    },

    /// Invalid argument error.
    ///
    /// Raised when a value is outside the accepted domain, for example a
    /// Roman numeral request outside `1..=3999`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation ran before the state it depends on was established.
    ///
    /// Raised when a lesson is rendered before its owning unit numbered it.
    #[error("Precondition failed: {message}")]
    Precondition {
        /// Description of the missing precondition
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
        /// Underlying Handlebars error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if this is a duplicate-id validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_core::Error;
    ///
    /// let err = Error::DuplicateIds { ids: vec!["A".to_string()] };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::DuplicateIds { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a precondition error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_core::Error;
    ///
    /// let err = Error::Precondition {
    ///     message: "lesson not numbered".to_string(),
    /// };
    /// assert!(err.is_precondition_error());
    /// ```
    #[must_use]
    pub const fn is_precondition_error(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }

    /// Returns the duplicate ids carried by a validation error.
    ///
    /// Returns an empty slice for every other variant.
    #[must_use]
    pub fn duplicate_ids(&self) -> &[String] {
        match self {
            Self::DuplicateIds { ids } => ids,
            _ => &[],
        }
    }
}

/// Type alias for `Result` with our `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
