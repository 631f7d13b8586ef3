//! Try type - guarded evaluation.
//!
//! `Try<T>` is the outcome of running a computation inside a panic boundary:
//! `Success(T)` when it returned normally, `Failure(Signal)` when it
//! panicked. The boundary is total: every panic payload is captured, whatever
//! its type, and no panic escapes a guarded evaluation.
//!
//! `Try` is also the guard used by the `lift` operations of
//! [`Maybe`](super::Maybe) and [`Either`](super::Either).
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::Try;
//!
//! let divide = Try::lift(|(a, b): (i32, i32)| {
//!     if b == 0 {
//!         panic!("Cannot divide by zero.");
//!     }
//!     a / b
//! });
//!
//! assert_eq!(divide((8, 4)).to_string(), "Success 2");
//! assert_eq!(divide((8, 0)).to_string(), "Failure Cannot divide by zero.");
//! ```

use std::any::Any;
use std::fmt;
use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::either::Either;
use super::maybe::Maybe;
use super::signal::Signal;
use super::uplift::{Arguments, TryFamily};

/// The outcome of a guarded evaluation.
///
/// # Laws
///
/// - **Left Identity**: `Try::success(a).flat_map(f)` behaves as `f(a)`
/// - **Absorption**: `Failure(s).flat_map(f)` is `Failure(s)` with the same payload
/// - **Totality**: `Try::unit(thunk)` never panics
pub enum Try<T> {
    /// The computation panicked with the captured signal.
    Failure(Signal),
    /// The computation returned normally.
    Success(T),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Evaluates `thunk` immediately inside the panic boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Try;
    ///
    /// assert!(Try::unit(|| 10).is_success());
    /// assert!(Try::unit(|| -> i32 { panic!("It went kaboom!") }).is_failure());
    /// ```
    pub fn unit<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let signal = Signal::from_panic(payload);
                tracing::debug!(payload = ?signal, "captured panic in guarded evaluation");
                Self::Failure(signal)
            }
        }
    }

    /// Lifts a function so that every invocation is guarded.
    ///
    /// Several parameters are passed as one tuple.
    pub fn lift<A, F>(function: F) -> impl Fn(A) -> Self
    where
        F: Fn(A) -> T,
    {
        move |arguments| Self::unit(|| function(arguments))
    }

    /// Creates a `Success` without evaluating anything.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` carrying `payload` as its signal.
    #[inline]
    pub fn failure<P: Any + Send>(payload: P) -> Self {
        Self::Failure(Signal::new(payload))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the captured signal, if any.
    #[inline]
    pub const fn signal(&self) -> Option<&Signal> {
        match self {
            Self::Failure(signal) => Some(signal),
            Self::Success(_) => None,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Try` by taking exactly one of the two paths.
    ///
    /// The absorbing path comes first, matching [`Either::fold`].
    #[inline]
    pub fn fold<B, F, S>(self, failure: F, success: S) -> B
    where
        F: FnOnce(Signal) -> B,
        S: FnOnce(T) -> B,
    {
        match self {
            Self::Failure(signal) => failure(signal),
            Self::Success(value) => success(value),
        }
    }

    /// Returns the value, or re-raises the captured signal unchanged.
    ///
    /// # Panics
    ///
    /// Resumes unwinding with the original payload if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Try;
    ///
    /// assert_eq!(Try::unit(|| 3).get_or_raise(), 3);
    ///
    /// let rethrown = std::panic::catch_unwind(|| Try::<i32>::failure("boom").get_or_raise());
    /// assert_eq!(rethrown.unwrap_err().downcast_ref::<&str>(), Some(&"boom"));
    /// ```
    pub fn get_or_raise(self) -> T {
        match self {
            Self::Failure(signal) => signal.raise(),
            Self::Success(value) => value,
        }
    }

    /// Converts into a `Result`, with the signal as the error.
    ///
    /// # Errors
    ///
    /// Returns `Err(signal)` for a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, Signal> {
        self.fold(Err, Ok)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Chains a computation that is itself a `Try`.
    ///
    /// `Failure` is returned unchanged without calling `function`.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Failure(signal) => Try::Failure(signal),
            Self::Success(value) => function(value),
        }
    }

    /// Applies `function` to the value inside the panic boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Try;
    ///
    /// let parsed = Try::unit(|| "12").map(|text| text.parse::<i32>().unwrap());
    /// assert_eq!(parsed.into_result().ok(), Some(12));
    ///
    /// let broken = Try::unit(|| "x").map(|text| text.parse::<i32>().unwrap());
    /// assert!(broken.is_failure());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Try::unit(|| function(value)))
    }

    /// Keeps `Success(v)` only if `predicate(&v)` holds, otherwise produces a
    /// `Failure` carrying `failure()`.
    #[inline]
    pub fn filter<P, F, E>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
        E: Any + Send,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(_) => Self::failure(failure()),
            Self::Failure(signal) => Self::Failure(signal),
        }
    }

    // =========================================================================
    // Bridges
    // =========================================================================

    /// Converts into an `Either`, with the signal as the `Left` payload.
    #[inline]
    pub fn as_either(self) -> Either<Signal, T> {
        self.fold(Either::Left, Either::Right)
    }

    /// Converts into a `Maybe`, discarding the signal.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.fold(|_| Maybe::Nothing, Maybe::Just)
    }

    // =========================================================================
    // Uplifting
    // =========================================================================

    /// Binds a function over raw values to a sequence of `Try` arguments.
    ///
    /// If any argument is a `Failure`, the first one in sequence order is
    /// returned unchanged. Otherwise `function` is evaluated over the
    /// unwrapped values inside the panic boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Try;
    ///
    /// let divide = Try::bind(|(a, b): (i32, i32)| a / b);
    ///
    /// let quotient = divide((Try::unit(|| 8), Try::unit(|| 4)));
    /// assert_eq!(quotient.into_result().ok(), Some(2));
    ///
    /// let first = divide((Try::failure("First parameter is Invalid"), Try::unit(|| 4)));
    /// assert_eq!(first.to_string(), "Failure First parameter is Invalid");
    /// ```
    pub fn bind<Args, F>(function: F) -> impl Fn(Args) -> Self
    where
        Args: Arguments<TryFamily>,
        F: Fn(Args::Values) -> T,
    {
        move |arguments| match arguments.unwrap_all() {
            ControlFlow::Break(signal) => Self::Failure(signal),
            ControlFlow::Continue(values) => Self::unit(|| function(values)),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Signal> {
    fn from(attempt: Try<T>) -> Self {
        attempt.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(signal) => formatter.debug_tuple("Failure").field(signal).finish(),
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(signal) => write!(formatter, "Failure {signal}"),
            Self::Success(value) => write!(formatter, "Success {value}"),
        }
    }
}
