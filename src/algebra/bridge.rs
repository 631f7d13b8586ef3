//! Conversions between the three containers.
//!
//! | From → To | value path | absorbing path |
//! |---|---|---|
//! | `Maybe → Either` | `Just(v) → Right(v)` | `Nothing → Left(left())`, lazily |
//! | `Either → Maybe` | `Right(v) → Just(v)` | `Left(_) → Nothing` |
//! | `Try → Either` | `Success(v) → Right(v)` | `Failure(s) → Left(s)` |
//! | `Try → Maybe` | `Success(v) → Just(v)` | `Failure(_) → Nothing` |
//!
//! The methods live on the containers themselves ([`Maybe::as_either`],
//! [`Either::to_maybe`], [`Try::as_either`], [`Try::to_maybe`]); this module
//! adds the matching `From` conversions for the payload-free directions.
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::{Either, Maybe};
//!
//! let round_trip = Maybe::unit(5).as_either(|| "x").to_maybe();
//! assert_eq!(round_trip, Maybe::Just(5));
//!
//! let maybe: Maybe<i32> = Either::<&str, i32>::left("e").into();
//! assert_eq!(maybe, Maybe::Nothing);
//! ```

use super::attempt::Try;
use super::either::Either;
use super::maybe::Maybe;
use super::signal::Signal;

impl<L, R> From<Either<L, R>> for Maybe<R> {
    fn from(either: Either<L, R>) -> Self {
        either.to_maybe()
    }
}

impl<T> From<Try<T>> for Maybe<T> {
    fn from(attempt: Try<T>) -> Self {
        attempt.to_maybe()
    }
}

impl<T> From<Try<T>> for Either<Signal, T> {
    fn from(attempt: Try<T>) -> Self {
        attempt.as_either()
    }
}

impl<T> From<Either<Signal, T>> for Try<T> {
    fn from(either: Either<Signal, T>) -> Self {
        either.fold(Self::Failure, Self::Success)
    }
}

impl<T> From<Result<T, Signal>> for Try<T> {
    fn from(result: Result<T, Signal>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(signal) => Self::Failure(signal),
        }
    }
}
