//! Failure records and error types
//!
//! A chain records two kinds of outcome for a failed assertion:
//!
//! - [`Failure::Plain`] when the predicate answered `false`
//! - [`Failure::Wrapped`] when the predicate raised (returned `Err`)
//!
//! Misuse of the API is reported through [`ChainError`] and never enters a
//! chain's failure list.
//!
//! All messages use `Cow<'static, str>` so static messages do not allocate.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Boxed error accepted from fallible predicates.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// WRAPPED ERROR
// ============================================================================

/// A predicate that raised instead of answering.
///
/// `message` is the failure message supplied with the assertion, not the
/// message of the underlying error. The original error is kept untouched and
/// is reachable through [`cause`](WrappedError::cause) or
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use vouch_validator::Validator;
///
/// let chain = Validator::new("12a").assert(
///     |s: &&str| s.parse::<u32>().map(|n| n > 0),
///     "must be a positive number",
/// );
///
/// let errors = chain.errors();
/// assert_eq!(errors[0].message(), "must be a positive number");
/// assert!(errors[0].downcast_cause::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct WrappedError {
    message: Cow<'static, str>,
    #[source]
    cause: Arc<dyn StdError + Send + Sync + 'static>,
}

impl WrappedError {
    /// Kind tag distinguishing wrapped errors from plain failure messages.
    pub const KIND: &'static str = "ValidationError";

    /// Wraps `cause` under the assertion's failure message.
    pub fn new(message: impl Into<Cow<'static, str>>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            cause: Arc::from(cause.into()),
        }
    }

    /// The failure message supplied with the assertion.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error the predicate raised.
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Attempts to view the raised error as a concrete type.
    #[must_use]
    pub fn downcast_cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    /// Returns true if both values hold the very same raised error.
    #[must_use]
    pub fn same_cause(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cause, &other.cause)
    }

    pub(crate) fn kind(&self) -> &'static str {
        Self::KIND
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// One recorded outcome of a failed assertion.
#[derive(Debug, Clone)]
pub enum Failure {
    /// The predicate answered `false`.
    Plain(Cow<'static, str>),
    /// The predicate raised.
    Wrapped(WrappedError),
}

impl Failure {
    /// The human-readable message, whichever channel produced it.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Plain(message) => message,
            Self::Wrapped(error) => error.message(),
        }
    }

    /// Returns true for [`Failure::Wrapped`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }

    /// Returns the wrapped error, if this failure is one.
    #[must_use]
    pub fn as_error(&self) -> Option<&WrappedError> {
        match self {
            Self::Plain(_) => None,
            Self::Wrapped(error) => Some(error),
        }
    }

    /// Converts the failure to a JSON structure for reporting.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Plain(message) => json!({
                "kind": "Failure",
                "message": message,
            }),
            Self::Wrapped(error) => json!({
                "kind": error.kind(),
                "message": error.message(),
                "cause": error.cause().to_string(),
            }),
        }
    }
}

impl From<WrappedError> for Failure {
    fn from(error: WrappedError) -> Self {
        Self::Wrapped(error)
    }
}

/// Debug rendering: plain failures as a JSON string, wrapped errors as
/// `ValidationError("message")`.
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(message) => f.write_str(&quoted(message)),
            Self::Wrapped(error) => write!(f, "{}({})", error.kind(), quoted(error.message())),
        }
    }
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

fn quoted(message: &str) -> String {
    serde_json::to_string(message).unwrap_or_else(|_| format!("{message:?}"))
}

// ============================================================================
// CHAIN ERROR
// ============================================================================

/// Misuse of the chain API.
///
/// These are programming errors, returned synchronously to the caller and
/// never recorded as failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChainError {
    /// A dynamic condition was neither a boolean nor a function.
    #[error("condition must be a boolean or a function of the value, found {found}")]
    InvalidCondition {
        /// Kind of value that was supplied.
        found: &'static str,
    },
}

// ============================================================================
// VALIDATION FAILURES
// ============================================================================

/// Every failure of a finished chain, in the order the assertions ran.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{} validation failure(s): {}", .failures.len(), join_messages(.failures))]
pub struct ValidationFailures {
    failures: Vec<Failure>,
}

impl ValidationFailures {
    pub(crate) fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always false for a value produced by a chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterates over the failures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Messages of every failure, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(Failure::message).collect()
    }

    /// Only the wrapped errors, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<&WrappedError> {
        self.failures.iter().filter_map(Failure::as_error).collect()
    }

    /// Extracts the failures.
    #[must_use]
    pub fn into_inner(self) -> Vec<Failure> {
        self.failures
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

fn join_messages(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(Failure::message)
        .collect::<Vec<_>>()
        .join("; ")
}
