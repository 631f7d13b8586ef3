//! Declarative recursion driven by a trampoline.
//!
//! A [`Recursion`] describes a recursive algorithm as a state machine over a
//! state `S`:
//!
//! - `predicate(&state)` decides whether the recursion bottoms out;
//! - `done(state)` produces the result for a terminal state;
//! - `call(state, stepper)` produces the next step for any other state,
//!   re-entering the machine through [`Stepper::step`].
//!
//! An optional `init` maps the driver's input onto the first step. Building
//! the recursion yields a [`Driver`] that runs the machine on a
//! [`Trampoline`], so the recursion depth never reaches the call stack.
//!
//! # Examples
//!
//! Fibonacci by continuation composition:
//!
//! ```rust
//! use uplift::control::{Recursion, Trampoline};
//!
//! let fibonacci = Trampoline::build(Recursion::<u64, u64>::new(
//!     |n| *n <= 2,
//!     |n, stepper| {
//!         let next = stepper.clone();
//!         stepper
//!             .step(n - 1)
//!             .flat_map(move |a| next.step(n - 2).map(move |b| a + b))
//!     },
//!     |_| 1,
//! ));
//!
//! assert_eq!(fibonacci.run(10), 55);
//! ```

use std::fmt;
use std::rc::Rc;

use super::trampoline::Trampoline;

type PredicateFn<S> = Box<dyn Fn(&S) -> bool>;
type CallFn<S, A> = Box<dyn Fn(S, &Stepper<S, A>) -> Trampoline<A>>;
type DoneFn<S, A> = Box<dyn Fn(S) -> A>;
type InitFn<S, A, I> = Box<dyn Fn(&Stepper<S, A>, I) -> Trampoline<A>>;

struct Machine<S, A> {
    predicate: PredicateFn<S>,
    call: CallFn<S, A>,
    done: DoneFn<S, A>,
}

/// Description of a recursive algorithm, consumed by [`Recursion::build`].
///
/// `I` is the input type of the resulting [`Driver`]; it defaults to the
/// state type and changes with [`Recursion::init`].
pub struct Recursion<S, A, I = S> {
    machine: Machine<S, A>,
    init: InitFn<S, A, I>,
}

impl<S: 'static, A: 'static> Recursion<S, A> {
    /// Describes a recursion whose input is its initial state.
    pub fn new<P, C, D>(predicate: P, call: C, done: D) -> Self
    where
        P: Fn(&S) -> bool + 'static,
        C: Fn(S, &Stepper<S, A>) -> Trampoline<A> + 'static,
        D: Fn(S) -> A + 'static,
    {
        Self {
            machine: Machine {
                predicate: Box::new(predicate),
                call: Box::new(call),
                done: Box::new(done),
            },
            init: Box::new(|stepper: &Stepper<S, A>, state: S| stepper.step(state)),
        }
    }
}

impl<S: 'static, A: 'static, I: 'static> Recursion<S, A, I> {
    /// Replaces the entry point.
    ///
    /// `init` receives the stepper and the driver's input and returns the
    /// first step, usually by seeding extra state such as an accumulator.
    pub fn init<J, F>(self, init: F) -> Recursion<S, A, J>
    where
        F: Fn(&Stepper<S, A>, J) -> Trampoline<A> + 'static,
    {
        Recursion {
            machine: self.machine,
            init: Box::new(init),
        }
    }

    /// Finishes the description and returns its driver.
    pub fn build(self) -> Driver<S, A, I> {
        Driver {
            stepper: Stepper {
                machine: Rc::new(self.machine),
            },
            init: self.init,
        }
    }
}

/// Re-entry point into a running recursion.
///
/// Cloning a stepper is cheap; clones share the same machine.
pub struct Stepper<S, A> {
    machine: Rc<Machine<S, A>>,
}

impl<S: 'static, A: 'static> Stepper<S, A> {
    /// Produces the step for `state`.
    ///
    /// Returns `Done(done(state))` when the predicate holds and otherwise a
    /// pending step that evaluates `call(state, stepper)` when bounced.
    pub fn step(&self, state: S) -> Trampoline<A> {
        if (self.machine.predicate)(&state) {
            Trampoline::done((self.machine.done)(state))
        } else {
            let stepper = self.clone();
            Trampoline::call(move || (stepper.machine.call)(state, &stepper))
        }
    }
}

impl<S, A> Clone for Stepper<S, A> {
    fn clone(&self) -> Self {
        Self {
            machine: Rc::clone(&self.machine),
        }
    }
}

impl<S, A> fmt::Debug for Stepper<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Stepper").finish_non_exhaustive()
    }
}

/// A built recursion, runnable any number of times.
pub struct Driver<S, A, I = S> {
    stepper: Stepper<S, A>,
    init: InitFn<S, A, I>,
}

impl<S: 'static, A: 'static, I> Driver<S, A, I> {
    /// Returns the first step for `input` without running it.
    pub fn trampoline(&self, input: I) -> Trampoline<A> {
        (self.init)(&self.stepper, input)
    }

    /// Runs the recursion for `input` to completion.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn run(&self, input: I) -> A {
        self.trampoline(input).run()
    }
}

impl<S, A, I> fmt::Debug for Driver<S, A, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Driver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn factorial() -> Driver<(u64, u64), u64, u64> {
        Recursion::new(
            |(n, _): &(u64, u64)| *n < 2,
            |(n, accumulator), stepper| stepper.step((n - 1, n.wrapping_mul(accumulator))),
            |(_, accumulator)| accumulator,
        )
        .init(|stepper, n: u64| stepper.step((n, 1)))
        .build()
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(10, 3_628_800)]
    fn factorial_values(#[case] n: u64, #[case] expected: u64) {
        assert_eq!(factorial().run(n), expected);
    }

    #[rstest]
    fn driver_is_reusable() {
        let driver = factorial();
        assert_eq!(driver.run(5), 120);
        assert_eq!(driver.run(6), 720);
    }

    #[rstest]
    fn terminal_input_is_done_immediately() {
        assert!(factorial().trampoline(1).is_done());
        assert!(factorial().trampoline(3).is_pending());
    }

    #[rstest]
    fn predicate_sees_each_state_once() {
        use std::cell::Cell;

        let checks = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&checks);
        let countdown = Recursion::new(
            move |n: &u32| {
                counter.set(counter.get() + 1);
                *n == 0
            },
            |n, stepper| stepper.step(n - 1),
            |n| n,
        )
        .build();

        assert_eq!(countdown.run(4), 0);
        assert_eq!(checks.get(), 5);
    }
}
