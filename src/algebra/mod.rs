//! Container algebras for optional values, recoverable failures and guarded
//! evaluation.
//!
//! This module provides three closed sum types:
//!
//! - [`Maybe`]: an optional value (`Just` | `Nothing`)
//! - [`Either`]: a disjoint result (`Left` | `Right`) carrying a failure payload
//! - [`Try`]: a guarded evaluation (`Success` | `Failure`) that turns a panic
//!   into data
//!
//! All three share the uplifting protocol defined by [`Uplift`] and
//! [`Arguments`]:
//!
//! - `lift` turns an ordinary (possibly panicking) function into one that
//!   returns a container.
//! - `bind` turns a function over raw values into one over containers,
//!   short-circuiting on the first absorbing argument.
//!
//! ## Absorbing states
//!
//! `Nothing`, `Left` and `Failure` are absorbing: once reached, `map`,
//! `flat_map` and `filter` return them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::{Either, Maybe, Try};
//!
//! let just = Maybe::unit(10).map(|x| x * 2).filter(|x| *x > 5);
//! assert_eq!(just, Maybe::Just(20));
//!
//! let nan = Maybe::unit(f64::NAN);
//! assert!(nan.is_nothing());
//!
//! let either = Maybe::unit(5).as_either(|| "missing");
//! assert_eq!(either, Either::Right(5));
//!
//! let attempt = Try::unit(|| -> i32 { panic!("kaboom") });
//! assert_eq!(attempt.to_maybe(), Maybe::Nothing);
//! ```

mod absence;
mod attempt;
mod bridge;
mod either;
mod maybe;
mod signal;
mod uplift;

pub use absence::Absence;
pub use attempt::Try;
pub use either::Either;
pub use maybe::Maybe;
pub use signal::Signal;
pub use uplift::{Arguments, EitherFamily, Family, MaybeFamily, TryFamily, Uplift};

#[cfg(feature = "derive")]
pub use uplift_derive::Absence;

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Try<i32>: Send);
static_assertions::assert_not_impl_any!(Try<i32>: Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send);
