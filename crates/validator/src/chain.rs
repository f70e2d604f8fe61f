//! The immutable assertion chain
//!
//! [`Validator`] wraps a value and records the failures of every assertion
//! applied to it. Each assertion consumes the chain and returns a new one;
//! clones taken earlier keep seeing exactly the failures they had.
//!
//! # Examples
//!
//! ```
//! use vouch_validator::Validator;
//!
//! let age = Validator::new(17)
//!     .assert(|n: &i32| *n >= 18, "must be an adult")
//!     .assert(|n: &i32| *n < 130, "must be a plausible age");
//!
//! assert!(age.has_failures());
//! assert!(!age.has_errors());
//! assert_eq!(age.failures(), vec!["must be an adult"]);
//! ```
//!
//! # Optional chains
//!
//! ```
//! use vouch_validator::Validator;
//!
//! let nickname = Validator::optional(None::<String>)
//!     .assert(|s: &Option<String>| s.is_some(), "never recorded");
//! assert!(!nickname.has_failures());
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::bound::BoundValidator;
use crate::foundation::outcome;
use crate::foundation::{
    ChainResult, Condition, Failure, Nullable, PredicateOutcome, ValidationFailures, WrappedError,
};

// ============================================================================
// VALIDATOR
// ============================================================================

/// A value together with the failures of the assertions applied to it.
///
/// The value is fixed at construction. The failure list only grows, in the
/// order the assertions were applied.
pub struct Validator<T> {
    value: Arc<T>,
    failures: Arc<Vec<Failure>>,
    optional: bool,
    nil: bool,
}

impl<T> Validator<T> {
    /// Starts a chain for `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
            failures: Arc::default(),
            optional: false,
            nil: false,
        }
    }

    /// Starts an optional chain: when `value` is nil, every assertion passes
    /// without being evaluated.
    pub fn optional(value: T) -> Self
    where
        T: Nullable,
    {
        let nil = value.is_nil();
        Self {
            value: Arc::new(value),
            failures: Arc::default(),
            optional: true,
            nil,
        }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if the chain was started with [`Validator::optional`].
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns true if assertions on this chain are skipped.
    pub fn is_skipping(&self) -> bool {
        self.optional && self.nil
    }

    // ------------------------------------------------------------------------
    // Assertions
    // ------------------------------------------------------------------------

    /// Applies `predicate` and records `message` if it does not pass.
    ///
    /// - `false` / `Ok(false)` records a plain failure
    /// - `Err(_)` records a [`WrappedError`]
    /// - `true` / `Ok(true)` records nothing
    ///
    /// A panicking predicate is not caught. Return `Err` from a fallible
    /// check instead of panicking.
    pub fn assert<P, R>(mut self, predicate: P, message: impl Into<Cow<'static, str>>) -> Self
    where
        P: FnOnce(&T) -> R,
        R: PredicateOutcome,
    {
        if self.is_skipping() {
            #[cfg(feature = "tracing")]
            tracing::trace!("optional value is nil, assertion skipped");
            return self;
        }

        if let Some(failure) = outcome::evaluate(&*self.value, predicate, message.into()) {
            Arc::make_mut(&mut self.failures).push(failure);
        }
        self
    }

    /// Applies the assertion only when `condition` holds for the value.
    ///
    /// `condition` is a `bool` or a [`Condition`]. The condition is evaluated
    /// before the optional short-circuit; when it does not hold the chain is
    /// returned unchanged.
    pub fn assert_when<P, R>(
        self,
        condition: impl Into<Condition<T>>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: FnOnce(&T) -> R,
        R: PredicateOutcome,
    {
        if condition.into().holds(&self.value) {
            self.assert(predicate, message)
        } else {
            self
        }
    }

    // ------------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------------

    /// Returns true if any assertion failed or raised.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if any predicate raised.
    pub fn has_errors(&self) -> bool {
        self.failures.iter().any(Failure::is_error)
    }

    /// Number of recorded failures.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// A copy of every recorded failure, plain and wrapped, in order.
    pub fn failures_and_errors(&self) -> Vec<Failure> {
        self.failures.as_ref().clone()
    }

    /// The message of every recorded failure, in order.
    pub fn failures(&self) -> Vec<&str> {
        self.failures.iter().map(Failure::message).collect()
    }

    /// Only the wrapped errors, in order.
    pub fn errors(&self) -> Vec<&WrappedError> {
        self.failures.iter().filter_map(Failure::as_error).collect()
    }

    /// Finishes the chain.
    ///
    /// ```
    /// use vouch_validator::Validator;
    ///
    /// let port = Validator::new(80_u16).assert(|p: &u16| *p >= 1024, "must be unprivileged");
    /// let err = port.check().unwrap_err();
    /// assert_eq!(err.to_string(), "1 validation failure(s): must be unprivileged");
    /// ```
    pub fn check(&self) -> ChainResult<'_, T> {
        if self.has_failures() {
            Err(ValidationFailures::new(self.failures_and_errors()))
        } else {
            Ok(self.value())
        }
    }

    // ------------------------------------------------------------------------
    // Bound validators
    // ------------------------------------------------------------------------

    /// Binds an unconditional assertion into a reusable [`BoundValidator`].
    ///
    /// ```
    /// use vouch_validator::Validator;
    ///
    /// let short = Validator::with_assert(|s: &String| s.len() <= 8, "must be short");
    /// assert!(!short.apply("tiny".to_owned()).has_failures());
    /// assert!(short.apply("much too long".to_owned()).has_failures());
    /// ```
    pub fn with_assert<P, R>(
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> BoundValidator<T>
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        BoundValidator::new().with_assert(predicate, message)
    }

    /// Binds a conditional assertion into a reusable [`BoundValidator`].
    pub fn with_assert_when<P, R>(
        condition: impl Into<Condition<T>>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> BoundValidator<T>
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        BoundValidator::new().with_assert_when(condition, predicate, message)
    }
}

impl<T: 'static> Validator<T> {
    /// Returns true if `value` is a `Validator<T>`, optional or not, with any
    /// number of assertions applied.
    ///
    /// The check is per value type. An optional chain over `Option<i32>` is a
    /// `Validator<Option<i32>>` and is only recognised under that type.
    pub fn is_validator(value: &dyn Any) -> bool {
        value.is::<Self>()
    }
}

/// Returns true if `value` is a chain over `T`, optional or not.
///
/// Chains are recognised by their value type. Check an optional chain over
/// `Option<_>` under that `Option` type:
///
/// ```
/// use vouch_validator::{Validator, is_validator};
///
/// assert!(is_validator::<i32>(&Validator::new(1)));
/// assert!(!is_validator::<i32>(&1));
///
/// let maybe = Validator::optional(Some(1));
/// assert!(is_validator::<Option<i32>>(&maybe));
/// assert!(!is_validator::<i32>(&maybe));
///
/// let wrapped = Validator::optional(None::<i32>).assert(|v: &Option<i32>| v.is_some(), "m");
/// assert!(is_validator::<Option<i32>>(&wrapped));
/// ```
pub fn is_validator<T: 'static>(value: &dyn Any) -> bool {
    Validator::<T>::is_validator(value)
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            failures: Arc::clone(&self.failures),
            optional: self.optional,
            nil: self.nil,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("value", &self.value)
            .field("failures", &self.failures)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Debugging aid only; the format is not stable.
impl<T: fmt::Debug> fmt::Display for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.optional {
            "Validator::optional"
        } else {
            "Validator"
        };
        write!(f, "{name}({:?}, [", self.value)?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        f.write_str("])")
    }
}
