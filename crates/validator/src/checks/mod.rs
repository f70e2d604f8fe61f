//! Ready-made predicates
//!
//! Small constructors returning closures that plug straight into
//! [`Validator::assert`](crate::Validator::assert) and
//! [`Validator::with_assert`](crate::Validator::with_assert). They carry no
//! message of their own; the caller supplies it with the assertion.
//!
//! - **String**: [`not_empty`], [`min_length`], [`max_length`],
//!   [`exact_length`], [`starts_with`], [`ends_with`], [`all_digits`],
//!   [`email_format`], [`matches`]
//! - **Numeric**: [`in_range`], [`at_least`], [`at_most`]
//!
//! # Examples
//!
//! ```
//! use vouch_validator::Validator;
//! use vouch_validator::checks::{email_format, max_length};
//!
//! let email = Validator::<String>::with_assert(email_format(), "must be an email")
//!     .with_assert(max_length(64), "must be at most 64 characters");
//!
//! assert!(!email.apply("ada@example.com".to_owned()).has_failures());
//! assert_eq!(email.apply("ada".to_owned()).failures(), vec!["must be an email"]);
//! ```

pub mod numeric;
pub mod string;

pub use numeric::{at_least, at_most, in_range};
pub use string::{
    all_digits, email_format, ends_with, exact_length, matches, max_length, min_length, not_empty,
    starts_with,
};
