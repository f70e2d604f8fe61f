//! Property-based tests for vouch-validator.

use proptest::prelude::*;
use vouch_validator::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("predicate exploded")]
struct Exploded;

// ============================================================================
// SINGLE ASSERTION OUTCOMES
// ============================================================================

proptest! {
    #[test]
    fn passing_predicate_records_nothing(v in any::<i64>(), m in ".{0,20}") {
        let chain = Validator::new(v).assert(|_: &i64| true, m);
        prop_assert!(!chain.has_failures());
    }

    #[test]
    fn failing_predicate_records_its_message(v in any::<i64>(), m in ".{0,20}") {
        let chain = Validator::new(v).assert(|_: &i64| false, m.clone());
        prop_assert_eq!(chain.failures(), vec![m.as_str()]);
        prop_assert!(!chain.has_errors());
    }

    #[test]
    fn raising_predicate_records_wrapped_error(v in any::<i64>(), m in ".{0,20}") {
        let chain = Validator::new(v).assert(|_: &i64| Err::<bool, _>(Exploded), m.clone());
        prop_assert!(chain.has_errors());
        prop_assert_eq!(chain.failures(), vec![m.as_str()]);

        let errors = chain.errors();
        prop_assert_eq!(errors[0].message(), m.as_str());
        prop_assert!(errors[0].downcast_cause::<Exploded>().is_some());
    }
}

// ============================================================================
// NON-MUTATION: extending a chain never changes the original
// ============================================================================

proptest! {
    #[test]
    fn extending_twice_from_the_same_chain(v in any::<i32>(), threshold in any::<i32>()) {
        let base = Validator::new(v);
        let first = base.clone().assert(move |n: &i32| *n > threshold, "above");
        let second = base.clone().assert(move |n: &i32| *n > threshold, "above");

        prop_assert_eq!(first.failures(), second.failures());
        prop_assert!(!base.has_failures());
    }
}

// ============================================================================
// CONDITIONS: assert_when(true) == assert, assert_when(false) == no-op
// ============================================================================

proptest! {
    #[test]
    fn fixed_true_condition_matches_assert(v in any::<i32>(), bound in any::<i32>()) {
        let direct = Validator::new(v).assert(move |n: &i32| *n < bound, "below");
        let guarded = Validator::new(v).assert_when(true, move |n: &i32| *n < bound, "below");
        prop_assert_eq!(direct.failures(), guarded.failures());
    }

    #[test]
    fn fixed_false_condition_is_a_no_op(v in any::<i32>(), pass in any::<bool>()) {
        let chain = Validator::new(v).assert_when(false, move |_: &i32| pass, "never");
        prop_assert!(!chain.has_failures());
    }

    #[test]
    fn function_condition_applies_iff_it_holds(v in any::<i32>()) {
        let chain = Validator::new(v).assert_when(
            Condition::when(|n: &i32| n % 2 == 0),
            |_: &i32| false,
            "even values are rejected",
        );
        prop_assert_eq!(chain.has_failures(), v % 2 == 0);
    }
}

// ============================================================================
// ORDERING: failures follow application order
// ============================================================================

proptest! {
    #[test]
    fn failures_follow_application_order(answers in prop::collection::vec(any::<bool>(), 0..16)) {
        let chain = answers.iter().enumerate().fold(Validator::new(()), |chain, (i, &pass)| {
            chain.assert(move |_: &()| pass, format!("assertion {i}"))
        });

        let expected: Vec<String> = answers
            .iter()
            .enumerate()
            .filter(|(_, pass)| !**pass)
            .map(|(i, _)| format!("assertion {i}"))
            .collect();

        prop_assert_eq!(chain.failures(), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn optional_nil_never_fails(answers in prop::collection::vec(any::<bool>(), 0..8)) {
        let chain = answers.iter().fold(Validator::optional(None::<u8>), |chain, &pass| {
            chain.assert(move |_: &Option<u8>| pass, "m").assert_when(true, |_: &Option<u8>| false, "n")
        });
        prop_assert!(!chain.has_failures());
    }
}

// ============================================================================
// BOUND VALIDATORS: apply == the same chain built by hand
// ============================================================================

proptest! {
    #[test]
    fn bound_matches_hand_built_chain(v in any::<i16>()) {
        let bound = Validator::with_assert(|n: &i16| *n > 0, "positive")
            .with_assert(|n: &i16| n % 3 == 0, "multiple of three");

        let by_hand = Validator::new(v)
            .assert(|n: &i16| *n > 0, "positive")
            .assert(|n: &i16| n % 3 == 0, "multiple of three");

        let applied = bound.apply(v);
        prop_assert_eq!(applied.failures(), by_hand.failures());
    }
}
