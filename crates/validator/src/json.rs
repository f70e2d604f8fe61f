//! JSON interop for dynamically typed callers.
//!
//! Conditions arriving as JSON are checked at runtime: a JSON boolean is a
//! fixed condition, anything else is rejected with
//! [`ChainError::InvalidCondition`] before the chain is touched. JSON `null`
//! counts as nil for optional chains, and chains can be reported as JSON.
//!
//! # Examples
//!
//! ```
//! use vouch_validator::{ChainError, Validator};
//! use serde_json::{Value, json};
//!
//! let chain = Validator::new(json!(1))
//!     .try_assert_when(&json!(true), Value::is_string, "must be a string")
//!     .unwrap();
//! assert_eq!(chain.failures(), vec!["must be a string"]);
//!
//! let misuse = Validator::new(json!(1)).try_assert_when(&json!("yes"), Value::is_string, "m");
//! assert_eq!(misuse.unwrap_err(), ChainError::InvalidCondition { found: "string" });
//! ```

use std::borrow::Cow;

use serde_json::{Value, json};

use crate::bound::BoundValidator;
use crate::chain::Validator;
use crate::foundation::{ChainError, Condition, Failure, Nullable, PredicateOutcome};

impl Nullable for Value {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// Name of a JSON value's kind, as reported in [`ChainError::InvalidCondition`].
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T: ?Sized> Condition<T> {
    /// Reads a condition from JSON. Only booleans are accepted.
    pub fn from_json(value: &Value) -> Result<Self, ChainError> {
        match value {
            Value::Bool(answer) => Ok(Self::Always(*answer)),
            other => Err(ChainError::InvalidCondition {
                found: kind_of(other),
            }),
        }
    }
}

impl<T: ?Sized> TryFrom<&Value> for Condition<T> {
    type Error = ChainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl<T> Validator<T> {
    /// [`assert_when`](Validator::assert_when) with a condition read from JSON.
    ///
    /// An invalid condition is returned as an error; nothing is recorded.
    pub fn try_assert_when<P, R>(
        self,
        condition: &Value,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ChainError>
    where
        P: FnOnce(&T) -> R,
        R: PredicateOutcome,
    {
        let condition = Condition::from_json(condition)?;
        Ok(self.assert_when(condition, predicate, message))
    }

    /// [`with_assert_when`](Validator::with_assert_when) with a condition read
    /// from JSON.
    pub fn try_with_assert_when<P, R>(
        condition: &Value,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<BoundValidator<T>, ChainError>
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        BoundValidator::new().try_with_assert_when(condition, predicate, message)
    }

    /// Reports the chain's failures as JSON.
    ///
    /// ```
    /// use vouch_validator::Validator;
    /// use serde_json::json;
    ///
    /// let chain = Validator::new(3).assert(|n: &i32| *n > 5, "must exceed five");
    /// assert_eq!(
    ///     chain.to_json(),
    ///     json!({
    ///         "failures": [{"kind": "Failure", "message": "must exceed five"}],
    ///         "has_errors": false,
    ///     })
    /// );
    /// ```
    pub fn to_json(&self) -> Value {
        let failures: Vec<Value> = self
            .failures_and_errors()
            .iter()
            .map(Failure::to_json_value)
            .collect();
        json!({
            "failures": failures,
            "has_errors": self.has_errors(),
        })
    }
}

impl<T> BoundValidator<T> {
    /// [`with_assert_when`](BoundValidator::with_assert_when) with a condition
    /// read from JSON.
    pub fn try_with_assert_when<P, R>(
        &self,
        condition: &Value,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ChainError>
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutcome,
    {
        let condition = Condition::from_json(condition)?;
        Ok(self.with_assert_when(condition, predicate, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(json!(1), "number")]
    #[case(json!("foo"), "string")]
    #[case(json!(null), "null")]
    #[case(json!([]), "array")]
    #[case(json!({}), "object")]
    fn non_boolean_condition_is_rejected(#[case] condition: Value, #[case] found: &str) {
        let result = Validator::new(json!(1)).try_assert_when(&condition, |_: &Value| false, "m");
        match result {
            Err(ChainError::InvalidCondition { found: actual }) => assert_eq!(actual, found),
            Ok(_) => panic!("condition {condition} must be rejected"),
        }
    }

    #[test]
    fn invalid_condition_is_rejected_even_when_optional_value_is_nil() {
        let result =
            Validator::optional(Value::Null).try_assert_when(&json!(0), |_: &Value| false, "m");
        assert!(result.is_err());
    }

    #[rstest]
    #[case(true, 1)]
    #[case(false, 0)]
    fn boolean_condition_is_accepted(#[case] answer: bool, #[case] expected: usize) {
        let chain = Validator::new(json!(1))
            .try_assert_when(&json!(answer), Value::is_string, "must be a string")
            .unwrap();
        assert_eq!(chain.failure_count(), expected);
    }

    #[test]
    fn bound_validator_rejects_invalid_condition() {
        let result = Validator::try_with_assert_when(&json!("true"), Value::is_string, "m");
        assert!(matches!(
            result,
            Err(ChainError::InvalidCondition { found: "string" })
        ));

        let bound = Validator::try_with_assert_when(&json!(true), Value::is_string, "m").unwrap();
        assert!(bound.try_with_assert_when(&json!([true]), Value::is_string, "m").is_err());
        assert_eq!(bound.len(), 1);
    }

    #[test]
    fn json_null_is_nil() {
        assert!(Validator::optional(Value::Null)
            .assert(Value::is_string, "must be a string")
            .failures()
            .is_empty());
        assert_eq!(
            Validator::optional(json!(1))
                .assert(Value::is_string, "must be a string")
                .failures(),
            vec!["must be a string"]
        );
    }

    #[test]
    fn condition_try_from() {
        let condition = Condition::<Value>::try_from(&json!(false)).unwrap();
        assert!(!condition.holds(&json!(1)));
    }

    #[test]
    fn wrapped_errors_in_json_report() {
        let chain = Validator::new(json!("x")).assert(
            |v: &Value| {
                v.as_str()
                    .ok_or("not text")
                    .and_then(|s| s.parse::<i32>().map(|_| true).map_err(|_| "not a number"))
            },
            "must be numeric text",
        );

        assert_eq!(
            chain.to_json(),
            json!({
                "failures": [{
                    "kind": "ValidationError",
                    "message": "must be numeric text",
                    "cause": "not a number",
                }],
                "has_errors": true,
            })
        );
    }
}
