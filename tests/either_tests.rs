//! Tests for Either<L, R>.
//!
//! Tests cover:
//! - `unit`, `unit_by` and `when` construction
//! - Absorption of `Left` through transformations
//! - `lift` panic capture and `bind` first-left propagation
//! - Conversions to and from `Result`

#![cfg(feature = "algebra")]

use rstest::rstest;
use uplift::algebra::{Either, Maybe, Signal};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn unit_classifies_with_fallback() {
    let fail = || "Invalid computation";
    assert_eq!(Either::unit(fail, 10), Either::Right(10));
    assert!(Either::unit(fail, f64::NAN).is_left());
    assert_eq!(Either::unit(fail, None::<i32>), Either::Left("Invalid computation"));
}

#[rstest]
fn unit_by_injected_predicate() {
    let nonempty = |items: Vec<i32>| Either::unit_by(|| "empty", items, Vec::is_empty);
    assert_eq!(nonempty(vec![1]), Either::Right(vec![1]));
    assert_eq!(nonempty(Vec::new()), Either::Left("empty"));
}

#[rstest]
#[case(true, Either::Right(1))]
#[case(false, Either::Left("no"))]
fn when_selects_branch(#[case] predicate: bool, #[case] expected: Either<&str, i32>) {
    assert_eq!(Either::when(predicate, || "no", || 1), expected);
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn fold_takes_matching_branch() {
    let render = |either: Either<&str, i32>| either.fold(|l| format!("L:{l}"), |r| format!("R:{r}"));
    assert_eq!(render(Either::left("e")), "L:e");
    assert_eq!(render(Either::right(1)), "R:1");
}

#[rstest]
fn accessors() {
    let left: Either<&str, i32> = Either::left("e");
    let right: Either<&str, i32> = Either::right(3);
    assert_eq!(left.left_ref(), Some(&"e"));
    assert_eq!(left.right_ref(), None);
    assert_eq!(right.into_right(), Some(3));
    assert_eq!(left.into_left(), Some("e"));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn left_absorbs_transformations() {
    let left: Either<&str, i32> = Either::left("e");
    assert_eq!(left.map(|_| -> i32 { panic!("map") }), Either::Left("e"));
    assert_eq!(
        left.flat_map(|_| -> Either<&str, i32> { panic!("flat_map") }),
        Either::Left("e")
    );
    assert_eq!(left.filter(|_| panic!("filter"), || "other"), Either::Left("e"));
    assert_eq!(
        left.map_checked(|| "other", |_| -> i32 { panic!("map_checked") }),
        Either::Left("e")
    );
}

#[rstest]
fn map_checked_sends_absent_to_left() {
    let right: Either<&str, Option<i32>> = Either::right(Some(2));
    assert_eq!(right.map_checked(|| "gone", |_| None::<i32>), Either::Left("gone"));
}

#[rstest]
fn flat_map_chains_validation() {
    let positive = |x: i32| Either::when(x > 0, || format!("{x} is not positive"), || x);
    let even = |x: i32| Either::when(x % 2 == 0, || format!("{x} is odd"), || x);

    assert_eq!(Either::right(4).flat_map(positive).flat_map(even), Either::Right(4));
    assert_eq!(
        Either::right(3).flat_map(positive).flat_map(even),
        Either::Left("3 is odd".to_string())
    );
    assert_eq!(
        Either::right(-2).flat_map(positive).flat_map(even),
        Either::Left("-2 is not positive".to_string())
    );
}

#[rstest]
fn to_maybe_discards_payload() {
    assert_eq!(Either::<&str, i32>::left("e").to_maybe(), Maybe::Nothing);
    assert_eq!(Either::<&str, i32>::right(1).to_maybe(), Maybe::Just(1));
}

// =============================================================================
// Uplifting
// =============================================================================

#[rstest]
fn lift_divides() {
    let divide = Either::lift(
        || "err".to_string(),
        |(a, b): (i32, i32)| {
            if b == 0 {
                panic!("err");
            }
            a / b
        },
    );
    assert_eq!(divide((8, 4)), Either::Right(2));
    assert_eq!(divide((8, 0)), Either::Left("err".to_string()));
}

#[rstest]
fn lift_keeps_signal_payload() {
    #[derive(Debug, PartialEq)]
    struct Code(u16);

    let explode = Either::<Signal, i32>::lift(
        || Signal::new("fallback"),
        |_: ()| std::panic::panic_any(Code(404)),
    );
    let payload = explode(()).into_left().expect("left");
    assert_eq!(payload.downcast_ref::<Code>(), Some(&Code(404)));
}

#[rstest]
fn lift_uses_fallback_for_absent_result() {
    let root = Either::lift(|| "negative".to_string(), |x: f64| x.sqrt());
    assert_eq!(root(-1.0), Either::Left("negative".to_string()));
    assert_eq!(root(9.0), Either::Right(3.0));
}

#[rstest]
fn bind_returns_original_left_payload() {
    let sum = Either::bind(|| "fresh".to_string(), |(a, b): (i32, i32)| a + b);
    let left = |payload: &str| Either::<String, i32>::left(payload.to_string());
    assert_eq!(sum((left("L1"), Either::right(10))), left("L1"));
    assert_eq!(sum((Either::right(10), left("L2"))), left("L2"));
    assert_eq!(sum((Either::right(5), Either::right(10))), Either::Right(15));
}

#[rstest]
fn bind_uses_fallback_only_for_absent_result() {
    let ratio = Either::bind(|| "undefined".to_string(), |(a, b): (f64, f64)| a / b);
    assert_eq!(
        ratio((Either::right(0.0), Either::right(0.0))),
        Either::Left("undefined".to_string())
    );
}

#[rstest]
fn bind_over_vector() {
    let total = Either::bind(|| "overflow".to_string(), |values: Vec<u8>| {
        values.iter().map(|v| u32::from(*v)).sum::<u32>()
    });
    let arguments = vec![
        Either::right(200_u8),
        Either::right(100),
        Either::left("bad input".to_string()),
    ];
    assert_eq!(total(arguments), Either::Left("bad input".to_string()));
}

#[rstest]
fn bind_captures_panic_as_left() {
    let divide = Either::bind(|| "fail".to_string(), |(a, b): (i32, i32)| a / b);
    let outcome = std::panic::catch_unwind(|| divide((Either::right(8), Either::right(0))));
    assert_eq!(
        outcome.ok(),
        Some(Either::Left("attempt to divide by zero".to_string()))
    );
}

#[rstest]
fn bind_panic_payload_is_not_the_fallback() {
    let checked = Either::bind(
        || "absent".to_string(),
        |(values,): (Vec<i32>,)| -> i32 { values[3] },
    );
    match checked((Either::right(vec![1, 2]),)) {
        Either::Left(message) => assert!(message.contains("index out of bounds")),
        Either::Right(_) => panic!("expected Left"),
    }
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn result_round_trip() {
    let parsed: Either<std::num::ParseIntError, i32> = "5".parse::<i32>().into();
    assert_eq!(parsed.clone().into_result().ok(), Some(5));
    let back: Result<i32, std::num::ParseIntError> = parsed.into();
    assert_eq!(back, Ok(5));
}

#[rstest]
fn as_ref_borrows_either_side() {
    let left: Either<String, i32> = Either::Left("missing".to_string());
    assert_eq!(left.as_ref().map(|value| value + 1), Either::Left(&"missing".to_string()));
    let right: Either<String, i32> = Either::Right(4);
    assert_eq!(right.as_ref().right_ref(), Some(&&4));
}
