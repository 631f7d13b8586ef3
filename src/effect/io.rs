//! IO - deferred computations.
//!
//! An [`IO<A>`] wraps a thunk producing an `A`. Building, mapping and
//! chaining an `IO` never evaluates anything; the wrapped work runs only when
//! [`IO::resolve`] is called.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use uplift::effect::IO;
//!
//! let evaluated = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&evaluated);
//!
//! let io = IO::unit(move || {
//!     flag.set(true);
//!     1 + 5
//! })
//! .map(|sum| sum * 2);
//!
//! assert!(!evaluated.get());
//! assert_eq!(io.resolve(), 12);
//! assert!(evaluated.get());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::algebra::{Signal, Try};

/// A deferred computation producing an `A`.
///
/// # Laws
///
/// - **Left Identity**: `IO::pure(a).flat_map(f).resolve() == f(a).resolve()`
/// - **Right Identity**: `m.flat_map(IO::pure).resolve() == m.resolve()`
/// - **Associativity**: `m.flat_map(f).flat_map(g)` resolves like `m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    thunk: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Defers `thunk` until the `IO` is resolved.
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Alias for [`IO::new`].
    #[inline]
    pub fn unit<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::new(thunk)
    }

    /// Wraps an already computed value.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Lifts a function so that each invocation returns a deferred `IO`
    /// instead of evaluating immediately.
    ///
    /// Several parameters are passed as one tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::effect::IO;
    ///
    /// let sum = IO::lift(|(a, b): (i32, i32)| a + b);
    /// assert_eq!(sum((8, 4)).resolve(), 12);
    /// ```
    pub fn lift<T, F>(function: F) -> impl Fn(T) -> Self
    where
        T: 'static,
        F: Fn(T) -> A + 'static,
    {
        let function = Rc::new(function);
        move |arguments| {
            let function = Rc::clone(&function);
            Self::new(move || function(arguments))
        }
    }

    /// Lifts a function whose leading arguments are bound up front.
    ///
    /// `defaults` is cloned into every call and passed before the call-time
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::effect::IO;
    ///
    /// let greet = IO::lift_with("Hello".to_string(), |greeting: String, name: &str| {
    ///     format!("{greeting}, {name}")
    /// });
    /// assert_eq!(greet("world").resolve(), "Hello, world");
    /// assert_eq!(greet("there").resolve(), "Hello, there");
    /// ```
    pub fn lift_with<D, T, F>(defaults: D, function: F) -> impl Fn(T) -> Self
    where
        D: Clone + 'static,
        T: 'static,
        F: Fn(D, T) -> A + 'static,
    {
        let function = Rc::new(function);
        move |arguments| {
            let function = Rc::clone(&function);
            let defaults = defaults.clone();
            Self::new(move || function(defaults, arguments))
        }
    }

    /// Evaluates the deferred computation.
    pub fn resolve(self) -> A {
        (self.thunk)()
    }

    /// Applies `function` to the result once resolved.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.resolve()))
    }

    /// Continues with the `IO` produced from the result once resolved.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.resolve()).resolve())
    }

    /// Alias for [`IO::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Resolves `self` for its effects, then continues with `next`.
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        self.flat_map(move |_| next)
    }

    /// Defers a guarded resolution: a panic while resolving becomes a
    /// `Failure` instead of unwinding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::effect::IO;
    ///
    /// let attempt = IO::new(|| -> i32 { panic!("It went kaboom!") }).attempt();
    /// assert_eq!(attempt.resolve().to_string(), "Failure It went kaboom!");
    /// ```
    pub fn attempt(self) -> IO<Try<A>> {
        IO::new(move || Try::unit(|| self.resolve()))
    }

    /// Recovers from a panic while resolving by handing the captured signal
    /// to `handler`.
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(Signal) -> A + 'static,
    {
        IO::new(move || self.attempt().resolve().fold(handler, |value| value))
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}
