//! Reusable, pre-built assertion chains
//!
//! A [`BoundValidator`] is an immutable list of bound assertions. Applying it
//! to a value starts a fresh [`Validator`] and folds every bound assertion
//! over it, in the order they were bound. The result is an ordinary chain that
//! can be extended further.
//!
//! Extending a bound validator returns a new one; the original stays usable
//! and unchanged, and any number of derived validators may share it.
//!
//! # Examples
//!
//! ```
//! use vouch_validator::Validator;
//!
//! let string = Validator::with_assert(|s: &String| !s.is_empty(), "must not be empty");
//! let email = string.with_assert(|s: &String| s.contains('@'), "must be an email");
//!
//! assert_eq!(
//!     email.apply(String::new()).failures(),
//!     vec!["must not be empty", "must be an email"]
//! );
//! assert!(!email.apply("a@b.com".to_owned()).has_failures());
//! assert!(!string.apply("no-at-sign".to_owned()).has_failures());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::chain::Validator;
use crate::foundation::{BoxError, Condition, Nullable, PredicateOutcome};

type BoundPredicate<T> = Arc<dyn Fn(&T) -> Result<bool, BoxError> + Send + Sync>;

// ============================================================================
// BOUND ASSERTION
// ============================================================================

/// One `(condition, predicate, message)` layer of a [`BoundValidator`].
pub struct BoundAssertion<T> {
    condition: Condition<T>,
    predicate: BoundPredicate<T>,
    message: Cow<'static, str>,
}

impl<T> BoundAssertion<T> {
    fn new<P, R>(condition: Condition<T>, predicate: P, message: Cow<'static, str>) -> Self
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        Self {
            condition,
            predicate: Arc::new(move |value: &T| predicate(value).into_outcome()),
            message,
        }
    }

    /// The failure message recorded when this assertion does not pass.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The condition guarding this assertion.
    pub fn condition(&self) -> &Condition<T> {
        &self.condition
    }

    /// Returns true unless the assertion was bound unconditionally.
    pub fn is_conditional(&self) -> bool {
        !matches!(self.condition, Condition::Always(true))
    }

    fn apply(&self, chain: Validator<T>) -> Validator<T> {
        chain.assert_when(
            self.condition.clone(),
            |value: &T| (self.predicate)(value),
            self.message.clone(),
        )
    }
}

impl<T> fmt::Debug for BoundAssertion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundAssertion")
            .field("condition", &self.condition)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BOUND VALIDATOR
// ============================================================================

/// A reusable factory of pre-asserted chains.
///
/// An empty bound validator behaves like [`Validator::new`].
pub struct BoundValidator<T> {
    assertions: Vec<Arc<BoundAssertion<T>>>,
}

impl<T> BoundValidator<T> {
    /// A bound validator with no assertions.
    pub fn new() -> Self {
        Self {
            assertions: Vec::new(),
        }
    }

    /// Returns a new bound validator with one more unconditional assertion.
    pub fn with_assert<P, R>(&self, predicate: P, message: impl Into<Cow<'static, str>>) -> Self
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        self.with_assert_when(true, predicate, message)
    }

    /// Returns a new bound validator with one more conditional assertion.
    ///
    /// ```
    /// use vouch_validator::{Condition, Validator};
    ///
    /// let card = Validator::with_assert_when(
    ///     Condition::when(|s: &String| s.starts_with('5')),
    ///     |s: &String| s.len() == 16,
    ///     "must be 16 digits",
    /// )
    /// .with_assert_when(
    ///     Condition::when(|s: &String| s.starts_with('3')),
    ///     |s: &String| s.len() == 15,
    ///     "must be 15 digits",
    /// );
    ///
    /// assert_eq!(card.apply("5123".to_owned()).failures(), vec!["must be 16 digits"]);
    /// assert_eq!(card.apply("3123".to_owned()).failures(), vec!["must be 15 digits"]);
    /// ```
    pub fn with_assert_when<P, R>(
        &self,
        condition: impl Into<Condition<T>>,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        let assertion = BoundAssertion::new(condition.into(), predicate, message.into());
        self.layered(assertion)
    }

    pub(crate) fn layered(&self, assertion: BoundAssertion<T>) -> Self {
        let mut assertions = Vec::with_capacity(self.assertions.len() + 1);
        assertions.extend(self.assertions.iter().cloned());
        assertions.push(Arc::new(assertion));
        Self { assertions }
    }

    /// Starts a chain for `value` with every bound assertion applied.
    pub fn apply(&self, value: T) -> Validator<T> {
        self.apply_to(Validator::new(value))
    }

    /// Like [`apply`](Self::apply), but starts an optional chain.
    pub fn apply_optional(&self, value: T) -> Validator<T>
    where
        T: Nullable,
    {
        self.apply_to(Validator::optional(value))
    }

    /// Applies every bound assertion, in order, on top of an existing chain.
    pub fn apply_to(&self, chain: Validator<T>) -> Validator<T> {
        self.assertions
            .iter()
            .fold(chain, |chain, assertion| assertion.apply(chain))
    }

    /// The bound assertions, oldest first.
    pub fn assertions(&self) -> impl ExactSizeIterator<Item = &BoundAssertion<T>> {
        self.assertions.iter().map(|assertion| &**assertion)
    }

    /// Number of bound assertions.
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}

impl<T> Default for BoundValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BoundValidator<T> {
    fn clone(&self) -> Self {
        Self {
            assertions: self.assertions.clone(),
        }
    }
}

impl<T> fmt::Debug for BoundValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.assertions.iter().map(|assertion| &**assertion))
            .finish()
    }
}
