//! Stack-safe recursion via trampolining.
//!
//! A [`Trampoline<A>`] is one step of a computation that eventually produces
//! an `A`: either the finished value (`Done`) or a thunk computing the next
//! step (`Call`). [`Trampoline::run`] bounces through the steps in a loop, so
//! stack usage stays constant however many steps the computation takes.
//!
//! # Examples
//!
//! ```rust
//! use uplift::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::call(move || count_down(n - 1))
//!     }
//! }
//!
//! assert_eq!(count_down(100_000).run(), 0);
//! assert_eq!(Trampoline::call(|| Trampoline::done(6)).to_string(), "Pending");
//! assert_eq!(Trampoline::done(6).to_string(), "Done");
//! ```
//!
//! Recursive definitions that are awkward to write as free functions can be
//! described declaratively with [`Recursion`] and driven with
//! [`Trampoline::build`].
//!
//! # Continuations
//!
//! `flat_map` and `map` never wrap the step they extend. Each one records a
//! type-erased continuation, and [`Trampoline::run`] keeps the pending ones
//! on a heap-allocated stack: a step that finishes pops and applies the
//! continuation on top. Non-tail recursion such as
//! `call(|| sum(n - 1)).map(|s| s + n)` therefore runs in constant stack
//! space and linear time, and only the continuation stack grows with depth.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::recursion::{Driver, Recursion};
use crate::algebra::Either;

/// A deferred step: calling it yields the next trampoline state.
pub type Thunk<A> = Box<dyn FnOnce() -> Trampoline<A> + 'static>;

type Erased = Box<dyn Any>;

/// A continuation from an erased value to the next erased step.
type Arrow = Box<dyn FnOnce(Erased) -> Step>;

/// The type-erased form of a trampoline that the run loop interprets.
enum Step {
    Done(Erased),
    Call(Box<dyn FnOnce() -> Step>),
    Bind(Box<dyn Continuation>),
}

/// A step extended by continuations.
///
/// `unfold` pushes the continuations onto the run loop's stack, innermost
/// last, and returns the step to evaluate first.
trait Continuation {
    fn unfold(self: Box<Self>, continuations: &mut Vec<Arrow>) -> Step;
}

#[doc(hidden)]
pub struct ContinuationBox<A> {
    continuation: Box<dyn Continuation>,
    output: PhantomData<fn() -> A>,
}

impl<A> ContinuationBox<A> {
    fn new<C: Continuation + 'static>(continuation: C) -> Self {
        Self {
            continuation: Box::new(continuation),
            output: PhantomData,
        }
    }
}

/// `trampoline` followed by `arrow`.
struct FlatMap<A> {
    trampoline: Trampoline<A>,
    arrow: Arrow,
}

impl<A: 'static> Continuation for FlatMap<A> {
    fn unfold(self: Box<Self>, continuations: &mut Vec<Arrow>) -> Step {
        let Self { trampoline, arrow } = *self;
        continuations.push(arrow);
        trampoline.into_step()
    }
}

/// A run suspended at a `Call`, with the continuations it had pending.
struct Suspended {
    step: Step,
    continuations: Vec<Arrow>,
}

impl Continuation for Suspended {
    fn unfold(self: Box<Self>, continuations: &mut Vec<Arrow>) -> Step {
        let Self {
            step,
            continuations: pending,
        } = *self;
        continuations.extend(pending);
        step
    }
}

fn restore<A: 'static>(value: Erased) -> A {
    *value
        .downcast::<A>()
        .expect("Type mismatch in trampoline continuation")
}

/// One step of a stack-safe computation producing an `A`.
///
/// # Laws
///
/// - **Left Identity**: `Trampoline::done(a).flat_map(f).run() == f(a).run()`
/// - **Right Identity**: `m.flat_map(Trampoline::done).run() == m.run()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run() == m.flat_map(|x| f(x).flat_map(g)).run()`
///
/// `Trampoline` holds boxed non-`Send` closures and is confined to the thread
/// that built it.
pub enum Trampoline<A> {
    /// The computation has finished with this value.
    Done(A),
    /// More work remains; the thunk produces the next step.
    Call(Thunk<A>),
    #[doc(hidden)]
    FlatMapInternal(ContinuationBox<A>),
}

static_assertions::assert_not_impl_any!(Trampoline<i32>: Send, Sync);

impl<A> Trampoline<A> {
    /// Creates a finished step.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a pending step. The thunk is not evaluated until the
    /// trampoline is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::control::Trampoline;
    ///
    /// let trampoline = Trampoline::call(|| Trampoline::done(2 + 4));
    /// assert!(trampoline.is_pending());
    /// assert_eq!(trampoline.run(), 6);
    /// ```
    #[inline]
    pub fn call<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Call(Box::new(thunk))
    }

    /// Alias for [`Trampoline::done`].
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::done(value)
    }

    /// Returns `true` if this step is finished.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns `true` if more work remains.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        !self.is_done()
    }
}

impl<A: 'static> Trampoline<A> {
    /// Builds a driver for a declaratively described recursion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::control::{Recursion, Trampoline};
    ///
    /// let factorial = Trampoline::build(
    ///     Recursion::new(
    ///         |(n, _): &(u64, u64)| *n < 2,
    ///         |(n, accumulator), stepper| stepper.step((n - 1, n * accumulator)),
    ///         |(_, accumulator)| accumulator,
    ///     )
    ///     .init(|stepper, n: u64| stepper.step((n, 1))),
    /// );
    ///
    /// assert_eq!(factorial.run(10), 3_628_800);
    /// ```
    pub fn build<S: 'static, I: 'static>(recursion: Recursion<S, A, I>) -> Driver<S, A, I> {
        recursion.build()
    }

    /// Runs the trampoline to completion in constant stack space.
    pub fn run(self) -> A {
        let mut current = match self {
            Self::Done(value) => return value,
            other => other.into_step(),
        };
        let mut continuations: Vec<Arrow> = Vec::new();
        let mut bounces: u64 = 0;

        loop {
            current = match current {
                Step::Done(value) => match continuations.pop() {
                    Some(arrow) => arrow(value),
                    None => {
                        tracing::trace!(bounces, "trampoline finished");
                        return restore(value);
                    }
                },
                Step::Call(thunk) => thunk(),
                Step::Bind(continuation) => continuation.unfold(&mut continuations),
            };
            bounces += 1;
        }
    }

    /// Advances until the next pending thunk or the final value.
    ///
    /// Returns `Right(value)` when finished and `Left(thunk)` when another
    /// bounce is needed. Continuations still pending are carried by the
    /// returned thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Either;
    /// use uplift::control::Trampoline;
    ///
    /// match Trampoline::call(|| Trampoline::done(42)).resume() {
    ///     Either::Left(thunk) => assert!(matches!(thunk().resume(), Either::Right(42))),
    ///     Either::Right(_) => unreachable!(),
    /// }
    /// ```
    pub fn resume(self) -> Either<Thunk<A>, A> {
        let mut current = match self {
            Self::Done(value) => return Either::Right(value),
            Self::Call(thunk) => return Either::Left(thunk),
            Self::FlatMapInternal(continuation) => Step::Bind(continuation.continuation),
        };
        let mut continuations: Vec<Arrow> = Vec::new();

        loop {
            current = match current {
                Step::Done(value) => match continuations.pop() {
                    Some(arrow) => arrow(value),
                    None => return Either::Right(restore(value)),
                },
                Step::Call(next) => {
                    let thunk: Thunk<A> = Box::new(move || {
                        Self::FlatMapInternal(ContinuationBox::new(Suspended {
                            step: next(),
                            continuations,
                        }))
                    });
                    return Either::Left(thunk);
                }
                Step::Bind(continuation) => continuation.unfold(&mut continuations),
            };
        }
    }

    /// Applies `function` to the final value.
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |value| Trampoline::done(function(value)))
    }

    /// Continues with the trampoline produced from the final value.
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        Trampoline::FlatMapInternal(ContinuationBox::new(FlatMap {
            trampoline: self,
            arrow: Box::new(move |value| function(restore(value)).into_step()),
        }))
    }

    /// Alias for [`Trampoline::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self`, discards its value and continues with `next`.
    #[inline]
    pub fn then<B: 'static>(self, next: Trampoline<B>) -> Trampoline<B> {
        self.flat_map(move |_| next)
    }

    fn into_step(self) -> Step {
        match self {
            Self::Done(value) => Step::Done(Box::new(value)),
            Self::Call(thunk) => Step::Call(Box::new(move || thunk().into_step())),
            Self::FlatMapInternal(continuation) => Step::Bind(continuation.continuation),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Call(_) => formatter.debug_tuple("Call").field(&"<thunk>").finish(),
            Self::FlatMapInternal(_) => formatter
                .debug_tuple("FlatMapInternal")
                .field(&"<continuation>")
                .finish(),
        }
    }
}

impl<A> fmt::Display for Trampoline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(if self.is_done() { "Done" } else { "Pending" })
    }
}

impl<A> From<A> for Trampoline<A> {
    fn from(value: A) -> Self {
        Self::Done(value)
    }
}
