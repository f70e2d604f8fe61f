use serde_json::{Value, json};
use vouch_validator::{Validator, ValidationFailures};

#[derive(Debug, thiserror::Error)]
#[error("registry offline")]
struct RegistryOffline;

fn sample_chain() -> Validator<Value> {
    Validator::new(json!({"user": "ada"}))
        .assert(|v: &Value| v.get("email").is_some(), "must have an email")
        .assert(
            |_: &Value| Err::<bool, _>(RegistryOffline),
            "must be a registered user",
        )
}

#[test]
fn display_snapshot() {
    insta::assert_snapshot!(
        sample_chain().to_string(),
        @r#"Validator(Object {"user": String("ada")}, ["must have an email", ValidationError("must be a registered user")])"#
    );
}

#[test]
fn optional_display_snapshot() {
    insta::assert_snapshot!(
        Validator::optional(Value::Null).to_string(),
        @"Validator::optional(Null, [])"
    );
}

#[test]
fn json_report_snapshot() {
    insta::assert_json_snapshot!(sample_chain().to_json(), @r#"
    {
      "failures": [
        {
          "kind": "Failure",
          "message": "must have an email"
        },
        {
          "cause": "registry offline",
          "kind": "ValidationError",
          "message": "must be a registered user"
        }
      ],
      "has_errors": true
    }
    "#);
}

#[test]
fn check_error_snapshot() {
    let chain = sample_chain();
    let failures: ValidationFailures = chain.check().unwrap_err();
    insta::assert_snapshot!(
        failures.to_string(),
        @"2 validation failure(s): must have an email; must be a registered user"
    );
}
