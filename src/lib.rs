//! # uplift
//!
//! Value-wrapping containers for optional values, recoverable failures and
//! guarded computation, plus a trampoline engine that turns unbounded
//! recursion into constant-stack iteration.
//!
//! ## Overview
//!
//! - **Algebra**: [`Maybe`](algebra::Maybe), [`Either`](algebra::Either) and
//!   [`Try`](algebra::Try), unified by a shared `lift`/`bind` uplifting protocol
//! - **Control**: [`Trampoline`](control::Trampoline) and the
//!   [`Recursion`](control::Recursion) builder for stack-safe recursion
//! - **Effect**: [`IO`](effect::IO), a deferred thunk for side-effecting functions
//!
//! ## Feature Flags
//!
//! - `algebra`: The container algebras and the uplift protocol
//! - `control`: Trampoline engine and recursion driver
//! - `effect`: Deferred side effects
//! - `derive`: `#[derive(Absence)]` for user types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use uplift::prelude::*;
//!
//! let sum = Maybe::bind(|(a, b): (i32, i32)| a + b);
//! assert_eq!(sum((Maybe::unit(5), Maybe::unit(10))), Maybe::Just(15));
//! assert_eq!(sum((Maybe::unit(5), Maybe::nothing())), Maybe::Nothing);
//!
//! let divide = Either::lift(|| "invalid".to_string(), |(a, b): (i32, i32)| a / b);
//! assert_eq!(divide((8, 2)), Either::Right(4));
//! assert!(divide((8, 0)).is_left());
//! ```
//!
//! ## Panics as signals
//!
//! Guarded evaluation (`Try`, and every `lift` and `bind` on `Maybe`,
//! `Either` and `Try`) captures panics with
//! [`std::panic::catch_unwind`]. It relies on the default `panic = "unwind"`
//! strategy; under `panic = "abort"` a panic inside a guard still aborts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use uplift::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
