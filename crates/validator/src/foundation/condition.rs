//! Conditions guarding an assertion
//!
//! A condition is either a fixed boolean or a function of the wrapped value.
//! The two shapes are variants of [`Condition`], so there is no third,
//! invalid shape to reject at runtime. Dynamic input goes through
//! [`Condition::from_json`](crate::json) instead.

use std::fmt;
use std::sync::Arc;

/// Decides whether a conditional assertion runs.
///
/// # Examples
///
/// ```
/// use vouch_validator::{Condition, Validator};
///
/// let card = Validator::new(String::from("5105"))
///     .assert_when(
///         Condition::when(|s: &String| s.starts_with('5')),
///         |s: &String| s.len() == 16,
///         "must be 16 digits",
///     )
///     .assert_when(false, |_: &String| false, "never checked");
///
/// assert_eq!(card.failures(), vec!["must be 16 digits"]);
/// ```
pub enum Condition<T: ?Sized> {
    /// A fixed answer.
    Always(bool),
    /// Evaluated against the wrapped value.
    When(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T: ?Sized> Condition<T> {
    /// Builds a condition from a function of the wrapped value.
    pub fn when<F>(condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::When(Arc::new(condition))
    }

    /// Evaluates the condition for `value`.
    pub fn holds(&self, value: &T) -> bool {
        match self {
            Self::Always(answer) => *answer,
            Self::When(condition) => condition(value),
        }
    }

    /// Returns true for the function variant.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::When(_))
    }
}

impl<T: ?Sized> Clone for Condition<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Always(answer) => Self::Always(*answer),
            Self::When(condition) => Self::When(Arc::clone(condition)),
        }
    }
}

impl<T: ?Sized> Default for Condition<T> {
    fn default() -> Self {
        Self::Always(true)
    }
}

impl<T: ?Sized> From<bool> for Condition<T> {
    fn from(answer: bool) -> Self {
        Self::Always(answer)
    }
}

impl<T: ?Sized> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always(answer) => f.debug_tuple("Always").field(answer).finish(),
            Self::When(_) => f.write_str("When(<fn>)"),
        }
    }
}
