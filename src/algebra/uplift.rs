//! The shared `lift`/`bind` uplifting protocol.
//!
//! `bind` on every container takes a function over raw values and returns a
//! function over containers. The containers are passed as one ordered
//! sequence, either a tuple (values may differ in type) or a `Vec`
//! (homogeneous). Unwrapping walks the sequence left to right and stops at
//! the first absorbing state, which is handed back unchanged.
//!
//! A sequence may only mix containers of the same [`Family`]. Passing a
//! `Maybe` where `bind` expects `Either` arguments is a programmer error and
//! is rejected at compile time:
//!
//! ```rust,compile_fail
//! use uplift::algebra::{Either, Maybe};
//!
//! let sum = Either::bind(|| "invalid".to_string(), |(a, b): (i32, i32)| a + b);
//! let _ = sum((Either::<String, i32>::right(1), Maybe::unit(2)));
//! ```
//!
//! ```rust,compile_fail
//! use uplift::algebra::Maybe;
//!
//! let sum = Maybe::bind(|(a, b): (i32, i32)| a + b);
//! let _ = sum((2, 4));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use uplift::algebra::{Arguments, Either, EitherFamily};
//!
//! let arguments = (
//!     Either::<&str, i32>::right(1),
//!     Either::<&str, String>::right("two".to_string()),
//! );
//! assert_eq!(
//!     Arguments::<EitherFamily<&str>>::unwrap_all(arguments),
//!     ControlFlow::Continue((1, "two".to_string()))
//! );
//!
//! let arguments = vec![Either::right(1), Either::left("first"), Either::left("second")];
//! assert_eq!(
//!     Arguments::<EitherFamily<&str>>::unwrap_all(arguments),
//!     ControlFlow::<&str, Vec<i32>>::Break("first")
//! );
//! ```

use std::marker::PhantomData;
use std::ops::ControlFlow;

use super::attempt::Try;
use super::either::Either;
use super::maybe::Maybe;
use super::signal::Signal;

/// Marker for a kind of container.
///
/// A family names the payload its absorbing state carries: `()` for
/// `Nothing`, `L` for `Left(L)`, [`Signal`] for `Failure`.
pub trait Family {
    /// The payload of the absorbing state.
    type Absorbed;
}

/// The family of [`Maybe`] containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeFamily {}

/// The family of [`Either`] containers with left type `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EitherFamily<L>(PhantomData<L>);

/// The family of [`Try`] containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryFamily {}

impl Family for MaybeFamily {
    type Absorbed = ();
}

impl<L> Family for EitherFamily<L> {
    type Absorbed = L;
}

impl Family for TryFamily {
    type Absorbed = Signal;
}

/// A container that can be unwrapped or short-circuited.
///
/// # Laws
///
/// - **Faithfulness**: `into_flow` returns `Continue(v)` exactly for the value
///   state, and `Break(payload)` with the payload untouched for the absorbing
///   state.
pub trait Uplift: Sized {
    /// The container's family.
    type Family: Family;

    /// The type of the wrapped value.
    type Value;

    /// Splits the container into its value or its absorbing payload.
    fn into_flow(self) -> ControlFlow<<Self::Family as Family>::Absorbed, Self::Value>;
}

impl<T> Uplift for Maybe<T> {
    type Family = MaybeFamily;
    type Value = T;

    #[inline]
    fn into_flow(self) -> ControlFlow<(), T> {
        match self {
            Self::Nothing => ControlFlow::Break(()),
            Self::Just(value) => ControlFlow::Continue(value),
        }
    }
}

impl<L, R> Uplift for Either<L, R> {
    type Family = EitherFamily<L>;
    type Value = R;

    #[inline]
    fn into_flow(self) -> ControlFlow<L, R> {
        match self {
            Self::Left(payload) => ControlFlow::Break(payload),
            Self::Right(value) => ControlFlow::Continue(value),
        }
    }
}

impl<T> Uplift for Try<T> {
    type Family = TryFamily;
    type Value = T;

    #[inline]
    fn into_flow(self) -> ControlFlow<Signal, T> {
        match self {
            Self::Failure(signal) => ControlFlow::Break(signal),
            Self::Success(value) => ControlFlow::Continue(value),
        }
    }
}

/// An ordered sequence of containers of family `K`.
///
/// Implemented for tuples of one to eight containers and for `Vec<C>`.
pub trait Arguments<K: Family> {
    /// The unwrapped values, in the same shape as the sequence.
    type Values;

    /// Unwraps every container, or returns the first absorbing payload in
    /// sequence order.
    fn unwrap_all(self) -> ControlFlow<K::Absorbed, Self::Values>;
}

macro_rules! tuple_arguments {
    ($($container:ident),+) => {
        paste::paste! {
            impl<K: Family, $($container: Uplift<Family = K>),+> Arguments<K> for ($($container,)+) {
                type Values = ($($container::Value,)+);

                #[inline]
                fn unwrap_all(self) -> ControlFlow<K::Absorbed, Self::Values> {
                    let ($([<$container:lower>],)+) = self;
                    $(
                        let [<$container:lower>] = [<$container:lower>].into_flow()?;
                    )+
                    ControlFlow::Continue(($([<$container:lower>],)+))
                }
            }
        }
    };
}

tuple_arguments!(C1);
tuple_arguments!(C1, C2);
tuple_arguments!(C1, C2, C3);
tuple_arguments!(C1, C2, C3, C4);
tuple_arguments!(C1, C2, C3, C4, C5);
tuple_arguments!(C1, C2, C3, C4, C5, C6);
tuple_arguments!(C1, C2, C3, C4, C5, C6, C7);
tuple_arguments!(C1, C2, C3, C4, C5, C6, C7, C8);

impl<K: Family, C: Uplift<Family = K>> Arguments<K> for Vec<C> {
    type Values = Vec<C::Value>;

    fn unwrap_all(self) -> ControlFlow<K::Absorbed, Self::Values> {
        let mut values = Vec::with_capacity(self.len());
        for container in self {
            values.push(container.into_flow()?);
        }
        ControlFlow::Continue(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn unwrap_maybe<A: Arguments<MaybeFamily>>(arguments: A) -> ControlFlow<(), A::Values> {
        arguments.unwrap_all()
    }

    #[rstest]
    fn single_element_tuple() {
        assert_eq!(
            unwrap_maybe((Maybe::Just(1),)),
            ControlFlow::Continue((1,))
        );
    }

    #[rstest]
    fn heterogeneous_tuple_unwraps_in_order() {
        let arguments = (Maybe::Just(1), Maybe::Just("two"), Maybe::Just(3.0));
        assert_eq!(unwrap_maybe(arguments), ControlFlow::Continue((1, "two", 3.0)));
    }

    #[rstest]
    fn any_nothing_breaks() {
        let arguments = (Maybe::Just(1), Maybe::<&str>::Nothing, Maybe::Just(3.0));
        assert_eq!(unwrap_maybe(arguments), ControlFlow::Break(()));
    }

    #[rstest]
    fn eight_element_tuple() {
        let arguments = (
            Maybe::Just(1),
            Maybe::Just(2),
            Maybe::Just(3),
            Maybe::Just(4),
            Maybe::Just(5),
            Maybe::Just(6),
            Maybe::Just(7),
            Maybe::Just(8),
        );
        assert_eq!(
            unwrap_maybe(arguments),
            ControlFlow::Continue((1, 2, 3, 4, 5, 6, 7, 8))
        );
    }

    #[rstest]
    fn first_left_wins() {
        let arguments = (
            Either::<&str, i32>::Right(1),
            Either::<&str, i32>::Left("L1"),
            Either::<&str, i32>::Left("L2"),
        );
        assert_eq!(
            Arguments::<EitherFamily<&str>>::unwrap_all(arguments),
            ControlFlow::Break("L1")
        );
    }

    #[rstest]
    fn first_failure_wins() {
        let arguments = vec![
            Try::Success(1),
            Try::Failure(Signal::new("first")),
            Try::Failure(Signal::new("second")),
        ];
        match Arguments::<TryFamily>::unwrap_all(arguments) {
            ControlFlow::Break(signal) => assert_eq!(signal.message(), Some("first")),
            ControlFlow::Continue(_) => panic!("expected the first failure"),
        }
    }

    #[rstest]
    fn empty_vec_continues() {
        let arguments: Vec<Maybe<i32>> = Vec::new();
        assert_eq!(unwrap_maybe(arguments), ControlFlow::Continue(Vec::new()));
    }

    #[rstest]
    fn vec_unwraps_all() {
        let arguments = vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)];
        assert_eq!(unwrap_maybe(arguments), ControlFlow::Continue(vec![1, 2, 3]));
    }
}
