//! Either type - a success value or an explicit failure payload.
//!
//! This module provides the `Either<L, R>` type, which is either a `Left(L)`
//! carrying a failure payload or a `Right(R)` carrying a value. It mirrors
//! [`Maybe`] but keeps the reason for the failure:
//!
//! - `Left` is absorbing: `flat_map`, `map` and `filter` return it unchanged
//! - [`Either::unit`] classifies its input like [`Maybe::unit`] and builds the
//!   `Left` payload lazily from a fallback
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::Either;
//!
//! let parse = |text: &str| -> Either<String, i32> {
//!     Either::unit(|| format!("not a number: {text}"), text.parse::<i32>().ok())
//!         .map(|parsed| parsed.unwrap_or_default())
//! };
//!
//! assert_eq!(parse("41").map(|n| n + 1), Either::Right(42));
//! assert_eq!(parse("x").map(|n| n + 1), Either::Left("not a number: x".to_string()));
//! ```

use std::fmt;
use std::ops::ControlFlow;

use super::absence::Absence;
use super::attempt::Try;
use super::maybe::Maybe;
use super::signal::Signal;
use super::uplift::{Arguments, EitherFamily};

/// A value that is either a failure payload (`Left`) or a result (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the failure payload
/// * `R` - The type of the result
///
/// # Laws
///
/// - **Left Identity**: `Either::right(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(Either::right) == m`
/// - **Absorption**: `Either::left(e).flat_map(f) == Either::left(e)`
///
/// # Examples
///
/// ```rust
/// use uplift::algebra::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// let failure: Either<String, i32> = Either::left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(payload: L) -> Self {
        Self::Left(payload)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Classifies `value`: `Left(fail())` if it is absent, `Right(value)`
    /// otherwise.
    ///
    /// `fail` is only evaluated on the `Left` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let fail = || "Invalid computation";
    /// assert_eq!(Either::unit(fail, 10), Either::Right(10));
    /// assert_eq!(Either::unit(fail, None::<i32>), Either::Left("Invalid computation"));
    /// ```
    #[inline]
    pub fn unit<F>(fail: F, value: R) -> Self
    where
        R: Absence,
        F: FnOnce() -> L,
    {
        if value.is_absent() {
            Self::Left(fail())
        } else {
            Self::Right(value)
        }
    }

    /// Classifies `value` with an explicit absence predicate.
    #[inline]
    pub fn unit_by<F, P>(fail: F, value: R, is_absent: P) -> Self
    where
        F: FnOnce() -> L,
        P: FnOnce(&R) -> bool,
    {
        if is_absent(&value) {
            Self::Left(fail())
        } else {
            Self::Right(value)
        }
    }

    /// Selects a branch eagerly: `Right(right())` if `predicate` holds,
    /// otherwise `Left(left())`.
    ///
    /// Only the selected branch is evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let checked = |n: i32| Either::when(n >= 0, || "negative", || n);
    /// assert_eq!(checked(3), Either::Right(3));
    /// assert_eq!(checked(-3), Either::Left("negative"));
    /// ```
    #[inline]
    pub fn when<F, G>(predicate: bool, left: F, right: G) -> Self
    where
        F: FnOnce() -> L,
        G: FnOnce() -> R,
    {
        if predicate {
            Self::Right(right())
        } else {
            Self::Left(left())
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(payload) => Some(payload),
            Self::Right(_) => None,
        }
    }

    /// Returns `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(payload) => Some(payload),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(payload) => Either::Left(payload),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts into a `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(payload) => left_function(payload),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// `Left` is returned unchanged without calling `function`.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(payload) => Either::Left(payload),
            Self::Right(value) => function(value),
        }
    }

    /// Applies `function` to the right value.
    ///
    /// The result is not classified; use [`map_checked`](Self::map_checked)
    /// to send absent results to `Left`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.flat_map(|value| Either::Right(function(value)))
    }

    /// Applies `function` to the right value and classifies the result.
    ///
    /// Equivalent to `flat_map(|v| Either::unit(fail, function(v)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let right: Either<&str, f64> = Either::right(-1.0);
    /// assert_eq!(right.map_checked(|| "Could not select", f64::sqrt), Either::Left("Could not select"));
    /// ```
    #[inline]
    pub fn map_checked<U, F, G>(self, fail: F, function: G) -> Either<L, U>
    where
        U: Absence,
        F: FnOnce() -> L,
        G: FnOnce(R) -> U,
    {
        self.flat_map(|value| Either::unit(fail, function(value)))
    }

    /// Applies `function` to the left payload.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(payload) => Either::Left(function(payload)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Keeps `Right(v)` only if `predicate(&v)` holds, otherwise produces
    /// `Left(failure())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let even = |e: Either<&'static str, i32>| e.filter(|x| x % 2 == 0, || "odd");
    /// assert_eq!(even(Either::right(4)), Either::Right(4));
    /// assert_eq!(even(Either::right(3)), Either::Left("odd"));
    /// assert_eq!(even(Either::left("earlier")), Either::Left("earlier"));
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce() -> L,
    {
        match self {
            Self::Right(value) if predicate(&value) => Self::Right(value),
            Self::Right(_) => Self::Left(failure()),
            Self::Left(payload) => Self::Left(payload),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(payload) => Either::Right(payload),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Bridges
    // =========================================================================

    /// Converts into a `Maybe`, discarding the `Left` payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::{Either, Maybe};
    ///
    /// assert_eq!(Either::<&str, i32>::right(5).to_maybe(), Maybe::Just(5));
    /// assert_eq!(Either::<&str, i32>::left("e").to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        self.fold(|_| Maybe::Nothing, Maybe::Just)
    }

    // =========================================================================
    // Uplifting
    // =========================================================================

    /// Lifts a function so that it returns an `Either`.
    ///
    /// The function runs inside a [`Try`] guard:
    ///
    /// - a normal return `v` becomes `Either::unit(fail, v)`, so an absent
    ///   result yields `Left(fail())`
    /// - a panic becomes `Left(L::from(signal))`; `fail` is not consulted
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let divide = Either::lift(
    ///     || "Invalid arguments".to_string(),
    ///     |(a, b): (f64, f64)| {
    ///         if b == 0.0 {
    ///             panic!("err");
    ///         }
    ///         a / b
    ///     },
    /// );
    /// assert_eq!(divide((8.0, 4.0)), Either::Right(2.0));
    /// assert_eq!(divide((8.0, 0.0)), Either::Left("err".to_string()));
    /// assert_eq!(divide((f64::NAN, 1.0)), Either::Left("Invalid arguments".to_string()));
    /// ```
    pub fn lift<A, F, G>(fail: F, function: G) -> impl Fn(A) -> Self
    where
        L: From<Signal>,
        R: Absence,
        F: Fn() -> L,
        G: Fn(A) -> R,
    {
        move |arguments| {
            Try::unit(|| function(arguments))
                .fold(|signal| Self::Left(L::from(signal)), |value| Self::unit(&fail, value))
        }
    }

    /// Binds a function over raw values to a sequence of `Either` arguments.
    ///
    /// If any argument is `Left`, the first one in sequence order is
    /// returned with its own payload; `fail` is not consulted and `function`
    /// is not called. Otherwise `function` runs over the unwrapped values
    /// inside a [`Try`] guard: a normal return is classified with
    /// [`Either::unit`] and a panic becomes `Left(L::from(signal))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    ///
    /// let sum = Either::bind(|| "Invalid Either arguments".to_string(), |(a, b): (i32, i32)| a + b);
    /// assert_eq!(sum((Either::right(5), Either::right(10))), Either::Right(15));
    /// assert_eq!(sum((Either::left("L1".to_string()), Either::right(10))), Either::Left("L1".to_string()));
    /// assert_eq!(sum((Either::right(5), Either::left("L2".to_string()))), Either::Left("L2".to_string()));
    ///
    /// let divide = Either::bind(|| "fail".to_string(), |(a, b): (i32, i32)| a / b);
    /// assert_eq!(divide((Either::right(8), Either::right(0))), Either::Left("attempt to divide by zero".to_string()));
    /// ```
    pub fn bind<Args, F, G>(fail: F, function: G) -> impl Fn(Args) -> Self
    where
        L: From<Signal>,
        R: Absence,
        Args: Arguments<EitherFamily<L>>,
        F: Fn() -> L,
        G: Fn(Args::Values) -> R,
    {
        move |arguments| match arguments.unwrap_all() {
            ControlFlow::Break(payload) => Self::Left(payload),
            ControlFlow::Continue(values) => Try::unit(|| function(values))
                .fold(|signal| Self::Left(L::from(signal)), |value| Self::unit(&fail, value)),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(payload),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(payload) => formatter.debug_tuple("Left").field(payload).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(payload) => write!(formatter, "Left {payload}"),
            Self::Right(value) => write!(formatter, "Right {value}"),
        }
    }
}
