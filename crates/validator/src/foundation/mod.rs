//! Building blocks shared by chains and bound validators
//!
//! - **Outcomes**: [`PredicateOutcome`] turns a predicate's answer into pass,
//!   fail, or raised
//! - **Failures**: [`Failure`], [`WrappedError`], [`ValidationFailures`]
//! - **Conditions**: [`Condition`] guards conditional assertions
//! - **Nil**: [`Nullable`] decides when an optional chain skips its assertions
//! - **Misuse**: [`ChainError`] for invalid arguments
//!
//! # Two failure channels
//!
//! A predicate that answers `false` produces a plain message. A predicate that
//! raises (returns `Err`) produces a [`WrappedError`] holding both
//! the assertion's message and the original error. Both count as failures,
//! only the second counts as an error:
//!
//! ```
//! use vouch_validator::Validator;
//!
//! let chain = Validator::new(-3)
//!     .assert(|n: &i32| *n > 0, "must be positive")
//!     .assert(|n: &i32| u8::try_from(*n).map(|_| true), "must fit in a byte");
//!
//! assert_eq!(chain.failures(), vec!["must be positive", "must fit in a byte"]);
//! assert_eq!(chain.errors().len(), 1);
//! ```

// Module declarations
pub mod condition;
pub mod error;
pub mod nullable;
pub mod outcome;

// Re-export everything at the foundation level for convenience
pub use condition::Condition;
pub use error::{BoxError, ChainError, Failure, ValidationFailures, WrappedError};
pub use nullable::Nullable;
pub use outcome::PredicateOutcome;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of finishing a chain: the value on success, every failure otherwise.
pub type ChainResult<'a, T> = Result<&'a T, ValidationFailures>;
