//! Prelude module for convenient imports.
//!
//! Provides a single `use vouch_validator::prelude::*;` import that brings
//! in the chain types, failure types, and the ready-made predicates.
//!
//! # Examples
//!
//! ```
//! use vouch_validator::prelude::*;
//!
//! let username = Validator::with_assert(|s: &String| s.len() >= 3, "too short")
//!     .with_assert(|s: &String| s.len() <= 20, "too long");
//! assert!(!username.apply("alice".to_owned()).has_failures());
//! ```

// ============================================================================
// FOUNDATION: Failures, conditions, outcomes
// ============================================================================

pub use crate::foundation::{
    ChainError, Condition, Failure, Nullable, PredicateOutcome, ValidationFailures, WrappedError,
};

// ============================================================================
// CHAINS
// ============================================================================

pub use crate::bound::BoundValidator;
pub use crate::chain::{Validator, is_validator};

// ============================================================================
// CHECKS-GATED: Ready-made predicates
// ============================================================================

#[cfg(feature = "checks")]
pub use crate::checks::*;
