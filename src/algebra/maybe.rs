//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which is either `Just(T)` or
//! `Nothing`. Unlike `Option`, the smart constructor [`Maybe::unit`]
//! classifies its input: values that stand for "no value" (see
//! [`Absence`]) become `Nothing`.
//!
//! `Nothing` carries no diagnostic. When the reason for a missing value
//! matters, convert to an [`Either`] with [`Maybe::as_either`].
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::Maybe;
//!
//! let value = Maybe::unit(10)
//!     .map(|x| x * 2)
//!     .filter(|x| x % 4 == 0)
//!     .get_or_else(|| 0);
//! assert_eq!(value, 20);
//!
//! // NaN classifies as absent
//! let sum = Maybe::lift(|(a, b): (f64, f64)| a + b);
//! assert_eq!(sum((2.0, 4.0)), Maybe::Just(6.0));
//! assert_eq!(sum((2.0, f64::NAN)), Maybe::Nothing);
//! ```

use std::fmt;
use std::ops::ControlFlow;

use super::absence::Absence;
use super::attempt::Try;
use super::either::Either;
use super::uplift::{Arguments, MaybeFamily};

/// An optional value.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Laws
///
/// For pure `f` and `g` whose results are present:
///
/// - **Identity**: `m.map(|x| x) == m`
/// - **Composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
/// - **Absorption**: `Nothing.map(f) == Nothing`, `Nothing.flat_map(f) == Nothing`
///
/// # Examples
///
/// ```rust
/// use uplift::algebra::Maybe;
///
/// let present = Maybe::unit(0);
/// assert_eq!(present, Maybe::Just(0));
///
/// let absent = Maybe::unit(None::<i32>);
/// assert!(absent.is_nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Classifies `value`: `Nothing` if it is absent, `Just(value)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::unit(0), Maybe::Just(0));
    /// assert_eq!(Maybe::unit(false), Maybe::Just(false));
    /// assert_eq!(Maybe::unit(f64::NAN), Maybe::Nothing);
    /// assert_eq!(Maybe::unit(None::<i32>), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn unit(value: T) -> Self
    where
        T: Absence,
    {
        if value.is_absent() {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// Classifies `value` with an explicit absence predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let nonempty = |text: &str| Maybe::unit_by(text.to_string(), |s| s.is_empty());
    /// assert!(nonempty("").is_nothing());
    /// assert_eq!(nonempty("a"), Maybe::Just("a".to_string()));
    /// ```
    #[inline]
    pub fn unit_by<P>(value: T, is_absent: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if is_absent(&value) {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// Returns `Just(just())` if `predicate` holds, otherwise `Nothing`.
    ///
    /// `just` is only evaluated on the `Just` path, and its result is not
    /// classified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::when(true, || 3), Maybe::Just(3));
    /// assert_eq!(Maybe::when(false, || 3), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn when<F>(predicate: bool, just: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if predicate {
            Self::Just(just())
        } else {
            Self::Nothing
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` by taking exactly one of the two paths.
    ///
    /// The absorbing path comes first, as in [`Option::map_or_else`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "nothing".to_string(), |v| format!("just {v}"));
    /// assert_eq!(describe(Maybe::unit(10)), "just 10");
    /// assert_eq!(describe(Maybe::nothing()), "nothing");
    /// ```
    #[inline]
    pub fn fold<B, N, J>(self, nothing: N, just: J) -> B
    where
        N: FnOnce() -> B,
        J: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
        }
    }

    /// Returns the wrapped value or evaluates `fallback`.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(fallback, |value| value)
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(|| None, Some)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Chains a computation that may itself produce `Nothing`.
    ///
    /// `Nothing` is returned unchanged without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let half = |x: i32| Maybe::when(x % 2 == 0, || x / 2);
    /// assert_eq!(Maybe::unit(12).flat_map(half), Maybe::Just(6));
    /// assert_eq!(Maybe::unit(7).flat_map(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to the value and classifies the result.
    ///
    /// Equivalent to `flat_map(|v| Maybe::unit(function(v)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::unit(10).map(|x| x * 2), Maybe::Just(20));
    /// assert_eq!(Maybe::unit(12).map(|_| None::<i32>), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Absence,
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Maybe::unit(function(value)))
    }

    /// Keeps `Just(v)` only if `predicate(&v)` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Downgrades `Just(v)` to `Nothing` when `predicate(&v)` holds.
    ///
    /// The complement of [`filter`](Self::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let reading = Maybe::unit(-3).fail_when(|x| *x < 0);
    /// assert!(reading.is_nothing());
    /// ```
    #[inline]
    pub fn fail_when<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    // =========================================================================
    // Bridges
    // =========================================================================

    /// Converts into an `Either`, building the `Left` payload lazily.
    ///
    /// `left` is only evaluated for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::unit(5).as_either(|| "x"), Either::Right(5));
    /// assert_eq!(Maybe::<i32>::nothing().as_either(|| "x"), Either::Left("x"));
    /// ```
    #[inline]
    pub fn as_either<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        self.fold(|| Either::Left(left()), Either::Right)
    }

    // =========================================================================
    // Uplifting
    // =========================================================================

    /// Lifts a function so that it returns a `Maybe`.
    ///
    /// The function runs inside a [`Try`] guard. A normal return is
    /// classified with [`Maybe::unit`]; a panic becomes `Nothing` and the
    /// captured signal is discarded.
    ///
    /// Several parameters are passed as one tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let divide = Maybe::lift(|(a, b): (i32, i32)| a / b);
    /// assert_eq!(divide((8, 4)), Maybe::Just(2));
    /// assert_eq!(divide((8, 0)), Maybe::Nothing);
    /// ```
    pub fn lift<A, F>(function: F) -> impl Fn(A) -> Self
    where
        T: Absence,
        F: Fn(A) -> T,
    {
        move |arguments| Try::unit(|| function(arguments)).fold(|_| Self::Nothing, Self::unit)
    }

    /// Binds a function over raw values to a sequence of `Maybe` arguments.
    ///
    /// If any argument is `Nothing` the result is `Nothing` and `function`
    /// is not called. Otherwise the unwrapped values are passed to
    /// `function` inside a [`Try`] guard and the result is classified with
    /// [`Maybe::unit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Maybe;
    ///
    /// let sum = Maybe::bind(|(a, b): (i32, i32)| a + b);
    /// assert_eq!(sum((Maybe::unit(5), Maybe::unit(10))), Maybe::Just(15));
    /// assert_eq!(sum((Maybe::nothing(), Maybe::unit(10))), Maybe::Nothing);
    ///
    /// let total = Maybe::bind(|values: Vec<i32>| values.iter().sum::<i32>());
    /// assert_eq!(total(vec![Maybe::unit(1), Maybe::unit(2)]), Maybe::Just(3));
    /// ```
    pub fn bind<Args, F>(function: F) -> impl Fn(Args) -> Self
    where
        T: Absence,
        Args: Arguments<MaybeFamily>,
        F: Fn(Args::Values) -> T,
    {
        move |arguments| match arguments.unwrap_all() {
            ControlFlow::Break(()) => Self::Nothing,
            ControlFlow::Continue(values) => {
                Try::unit(|| function(values)).fold(|_| Self::Nothing, Self::unit)
            }
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nothing_renders() {
        assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
    }

    #[rstest]
    fn just_renders() {
        assert_eq!(Maybe::unit(10).to_string(), "Just 10");
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(-1.5, true)]
    #[case(f64::NAN, false)]
    fn unit_classifies_floats(#[case] value: f64, #[case] expected_just: bool) {
        assert_eq!(Maybe::unit(value).is_just(), expected_just);
    }

    #[rstest]
    fn when_does_not_evaluate_on_false() {
        let result: Maybe<i32> = Maybe::when(false, || panic!("must not run"));
        assert!(result.is_nothing());
    }

    #[rstest]
    fn map_reclassifies() {
        assert_eq!(Maybe::unit(12).map(|_| f64::NAN), Maybe::Nothing);
    }

    #[rstest]
    fn filter_on_nothing_skips_predicate() {
        let result = Maybe::<i32>::Nothing.filter(|_| panic!("must not run"));
        assert!(result.is_nothing());
    }

    #[rstest]
    fn filter_downgrades() {
        assert_eq!(Maybe::unit(10).filter(|x| x % 3 == 0), Maybe::Nothing);
        assert_eq!(Maybe::unit(9).filter(|x| x % 3 == 0), Maybe::Just(9));
    }

    #[rstest]
    fn get_or_else() {
        assert_eq!(Maybe::unit(10).get_or_else(|| 0), 10);
        assert_eq!(Maybe::unit(None::<i32>).map(|_| 1).get_or_else(|| 0), 0);
    }

    #[rstest]
    fn as_either_is_lazy_on_just() {
        let either: Either<String, i32> = Maybe::unit(1).as_either(|| panic!("must not run"));
        assert_eq!(either, Either::Right(1));
    }

    #[rstest]
    fn lift_discards_signal() {
        let explode = Maybe::lift(|x: i32| -> i32 { panic!("boom {x}") });
        assert_eq!(explode(1), Maybe::Nothing);
    }

    #[rstest]
    fn bind_short_circuits_before_calling() {
        let sum = Maybe::bind(|(_, _): (i32, i32)| -> i32 { panic!("must not run") });
        assert_eq!(sum((Maybe::unit(2), Maybe::nothing())), Maybe::Nothing);
    }

    #[rstest]
    fn bind_classifies_result() {
        let ratio = Maybe::bind(|(a, b): (f64, f64)| a / b);
        assert_eq!(ratio((Maybe::unit(0.0), Maybe::unit(0.0))), Maybe::Nothing);
        assert_eq!(ratio((Maybe::unit(1.0), Maybe::unit(2.0))), Maybe::Just(0.5));
    }

    #[rstest]
    fn option_roundtrip() {
        assert_eq!(Maybe::from(Some(3)), Maybe::Just(3));
        assert_eq!(Option::<i32>::from(Maybe::<i32>::Nothing), None);
    }
}
