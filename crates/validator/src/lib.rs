//! # vouch-validator
//!
//! Immutable validation chains that accumulate human-readable failures.
//!
//! ## Quick Start
//!
//! ```
//! use vouch_validator::prelude::*;
//!
//! let name = Validator::new("al")
//!     .assert(|s: &&str| s.chars().count() >= 3, "must be at least 3 characters")
//!     .assert(|s: &&str| s.bytes().all(|b| b.is_ascii_digit()), "must be numeric");
//!
//! assert_eq!(
//!     name.failures(),
//!     vec!["must be at least 3 characters", "must be numeric"]
//! );
//! ```
//!
//! ## Failures and errors
//!
//! A predicate answering `false` records a plain failure. A predicate that
//! returns `Err` records a [`WrappedError`] that keeps both the assertion's
//! message and the original error. Panics are not caught; they propagate to
//! the caller like any other panic. [`Validator::failures`] lists
//! every message; [`Validator::errors`] lists only the wrapped errors.
//!
//! ## Reusable chains
//!
//! [`Validator::with_assert`] and [`Validator::with_assert_when`] bind
//! assertions into a [`BoundValidator`] that can be applied to many values and
//! extended without affecting the original. See the [`bound`] module.
//!
//! ## Features
//!
//! - `checks` (default): ready-made predicates in [`checks`]
//! - `tracing`: debug events when predicates raise, trace events when
//!   optional chains skip

pub mod bound;
pub mod chain;
#[cfg(feature = "checks")]
pub mod checks;
pub mod foundation;
pub mod json;
pub mod prelude;

pub use bound::{BoundAssertion, BoundValidator};
pub use chain::{Validator, is_validator};
pub use foundation::{
    BoxError, ChainError, ChainResult, Condition, Failure, Nullable, PredicateOutcome,
    ValidationFailures, WrappedError,
};
