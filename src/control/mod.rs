//! Stack-safe control flow.
//!
//! - [`Trampoline`]: a step of a computation run in a loop instead of on the
//!   call stack
//! - [`Recursion`]: a declarative description of a recursive algorithm,
//!   built into a [`Driver`] that runs it on a trampoline
//!
//! # Examples
//!
//! Mutual recursion expressed as one state machine:
//!
//! ```rust
//! use uplift::control::{Recursion, Trampoline};
//!
//! #[derive(Clone, Copy)]
//! enum Parity {
//!     Even(u64),
//!     Odd(u64),
//! }
//!
//! let is_even = Trampoline::build(
//!     Recursion::new(
//!         |state: &Parity| matches!(state, Parity::Even(0) | Parity::Odd(0)),
//!         |state, stepper| match state {
//!             Parity::Even(n) => stepper.step(Parity::Odd(n - 1)),
//!             Parity::Odd(n) => stepper.step(Parity::Even(n - 1)),
//!         },
//!         |state| matches!(state, Parity::Even(0)),
//!     )
//!     .init(|stepper, n: u64| stepper.step(Parity::Even(n))),
//! );
//!
//! assert!(is_even.run(100_000));
//! assert!(!is_even.run(7));
//! ```

mod recursion;
mod trampoline;

pub use recursion::{Driver, Recursion, Stepper};
pub use trampoline::{Thunk, Trampoline};
