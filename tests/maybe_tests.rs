//! Tests for Maybe<T>.
//!
//! Tests cover:
//! - Absence classification by `unit` and `unit_by`
//! - `when`, `fold`, `get_or_else`
//! - Absorption through `map`, `flat_map`, `filter`, `fail_when`
//! - `lift` and `bind` over tuples and vectors

#![cfg(feature = "algebra")]

use std::rc::Rc;

use rstest::rstest;
use uplift::algebra::{Either, Maybe};

// =============================================================================
// Classification
// =============================================================================

#[rstest]
fn unit_keeps_zero_and_false() {
    assert_eq!(Maybe::unit(0), Maybe::Just(0));
    assert_eq!(Maybe::unit(false), Maybe::Just(false));
    assert_eq!(Maybe::unit(String::new()), Maybe::Just(String::new()));
}

#[rstest]
fn unit_rejects_absent_values() {
    assert_eq!(Maybe::unit(None::<i32>), Maybe::Nothing);
    assert_eq!(Maybe::unit(f64::NAN), Maybe::Nothing);
    assert_eq!(Maybe::unit(f32::NAN), Maybe::Nothing);
}

#[rstest]
fn unit_looks_through_pointers() {
    assert!(Maybe::unit(Rc::new(f64::NAN)).is_nothing());
    assert!(Maybe::unit(Box::new(None::<u8>)).is_nothing());
    assert!(Maybe::unit(&3_u8).is_just());
}

#[rstest]
fn unit_by_uses_injected_predicate() {
    let positive = |n: i32| Maybe::unit_by(n, |value| *value <= 0);
    assert_eq!(positive(3), Maybe::Just(3));
    assert_eq!(positive(0), Maybe::Nothing);
}

#[rstest]
fn nothing_is_default() {
    assert_eq!(Maybe::<i32>::default(), Maybe::nothing());
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn fold_takes_matching_branch() {
    let describe = |maybe: Maybe<i32>| maybe.fold(|| "nothing".to_string(), |v| format!("just {v}"));
    assert_eq!(describe(Maybe::unit(2)), "just 2");
    assert_eq!(describe(Maybe::nothing()), "nothing");
}

#[rstest]
fn get_or_else_is_lazy() {
    assert_eq!(Maybe::unit(10).get_or_else(|| panic!("must not run")), 10);
    assert_eq!(Maybe::<i32>::nothing().get_or_else(|| 0), 0);
}

#[rstest]
fn as_ref_borrows() {
    let owned = Maybe::unit("text".to_string());
    assert_eq!(owned.as_ref().map(|s| s.len()), Maybe::Just(4));
    assert!(owned.is_just());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_chain() {
    let result = Maybe::unit(10).map(|x| x * 2).map(|x| x + 1);
    assert_eq!(result, Maybe::Just(21));
}

#[rstest]
fn map_to_nan_becomes_nothing() {
    assert_eq!(Maybe::unit(-4.0_f64).map(f64::sqrt), Maybe::Nothing);
}

#[rstest]
fn nothing_absorbs_everything() {
    let nothing = Maybe::<i32>::nothing();
    assert_eq!(nothing.map(|_| -> i32 { panic!("map") }), Maybe::Nothing);
    assert_eq!(
        nothing.flat_map(|_| -> Maybe<i32> { panic!("flat_map") }),
        Maybe::Nothing
    );
    assert_eq!(nothing.filter(|_| panic!("filter")), Maybe::Nothing);
    assert_eq!(nothing.fail_when(|_| panic!("fail_when")), Maybe::Nothing);
}

#[rstest]
#[case(4, Maybe::Just(4))]
#[case(-4, Maybe::Nothing)]
fn fail_when_is_filter_complement(#[case] value: i32, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::unit(value).fail_when(|x| *x < 0), expected);
    assert_eq!(Maybe::unit(value).filter(|x| *x >= 0), expected);
}

#[rstest]
fn as_either_carries_fallback() {
    assert_eq!(Maybe::<i32>::nothing().as_either(|| "missing"), Either::Left("missing"));
}

// =============================================================================
// Uplifting
// =============================================================================

#[rstest]
fn lift_sums_present_values() {
    let sum = Maybe::lift(|(a, b): (f64, f64)| a + b);
    assert_eq!(sum((2.0, 4.0)), Maybe::Just(6.0));
    assert_eq!(sum((2.0, f64::NAN)), Maybe::Nothing);
}

#[rstest]
fn lift_turns_panic_into_nothing() {
    let parse = Maybe::lift(|text: &str| text.parse::<i32>().unwrap());
    assert_eq!(parse("12"), Maybe::Just(12));
    assert_eq!(parse("twelve"), Maybe::Nothing);
}

#[rstest]
fn bind_over_heterogeneous_tuple() {
    let label = Maybe::bind(|(name, count): (&str, usize)| format!("{name}:{count}"));
    assert_eq!(
        label((Maybe::unit("apples"), Maybe::unit(3))),
        Maybe::Just("apples:3".to_string())
    );
}

#[rstest]
fn bind_over_vector() {
    let product = Maybe::bind(|values: Vec<i64>| values.iter().product::<i64>());
    assert_eq!(
        product(vec![Maybe::unit(2), Maybe::unit(3), Maybe::unit(4)]),
        Maybe::Just(24)
    );
    assert_eq!(product(vec![Maybe::unit(2), Maybe::nothing()]), Maybe::Nothing);
    assert_eq!(product(Vec::new()), Maybe::Just(1));
}

#[rstest]
fn bind_guards_the_function() {
    let divide = Maybe::bind(|(a, b): (i32, i32)| a / b);
    assert_eq!(divide((Maybe::unit(8), Maybe::unit(0))), Maybe::Nothing);
}

#[rstest]
fn bind_result_can_be_rebound() {
    let add = Maybe::bind(|(a, b): (i32, i32)| a + b);
    let double = Maybe::bind(|(x,): (i32,)| x * 2);
    assert_eq!(double((add((Maybe::unit(1), Maybe::unit(2))),)), Maybe::Just(6));
}
