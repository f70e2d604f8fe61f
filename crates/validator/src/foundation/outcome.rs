//! Predicate outcomes
//!
//! A predicate answers with something that implements [`PredicateOutcome`]:
//! a strict `bool`, or `Result<bool, E>` when the check itself can fail.
//! There is no truthiness coercion; anything other than `true` or `Ok(true)`
//! is a failure.

use std::borrow::Cow;

use super::error::{BoxError, Failure, WrappedError};

/// The answer of a predicate.
///
/// # Examples
///
/// ```
/// use vouch_validator::PredicateOutcome;
///
/// assert!(true.into_outcome().unwrap());
/// assert!(Ok::<bool, std::fmt::Error>(false).into_outcome().is_ok());
/// assert!(Err::<bool, _>(std::fmt::Error).into_outcome().is_err());
/// ```
pub trait PredicateOutcome {
    /// `Ok(answer)` when the predicate answered, `Err` when it raised.
    fn into_outcome(self) -> Result<bool, BoxError>;
}

impl PredicateOutcome for bool {
    #[inline]
    fn into_outcome(self) -> Result<bool, BoxError> {
        Ok(self)
    }
}

impl<E> PredicateOutcome for Result<bool, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn into_outcome(self) -> Result<bool, BoxError> {
        self.map_err(Into::into)
    }
}

/// Runs `predicate` against `value` and turns its answer into a failure
/// record, if any.
///
/// An `Err` answer becomes [`Failure::Wrapped`]. A panicking predicate is not
/// caught: the panic unwinds through the chain to the caller, and the panic
/// hook reports it as usual.
pub(crate) fn evaluate<T, P, R>(value: &T, predicate: P, message: Cow<'static, str>) -> Option<Failure>
where
    T: ?Sized,
    P: FnOnce(&T) -> R,
    R: PredicateOutcome,
{
    match predicate(value).into_outcome() {
        Ok(true) => None,
        Ok(false) => Some(Failure::Plain(message)),
        Err(cause) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = %message, cause = %cause, "predicate returned an error");
            Some(Failure::Wrapped(WrappedError::new(message, cause)))
        }
    }
}
