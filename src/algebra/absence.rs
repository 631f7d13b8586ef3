//! Classification of absent values.
//!
//! [`Maybe::unit`](super::Maybe::unit) and [`Either::unit`](super::Either::unit)
//! decide between the present and the absent path by asking the value itself
//! through the [`Absence`] trait. The rule is explicit per type instead of a
//! universal truthiness heuristic:
//!
//! | Type | Absent when |
//! |------|-------------|
//! | `f32`, `f64` | the value is NaN |
//! | `Option<T>` | the value is `None` |
//! | integers, `bool`, `char`, `str`, `String`, `Vec<T>` | never |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | `T` is absent |
//!
//! In particular `0`, `false` and the empty string are present.
//!
//! Types outside this table either implement the trait by hand, derive it
//! with `#[derive(Absence)]`, or supply an ad-hoc predicate through
//! `unit_by`.
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::Absence;
//!
//! assert!(!0i32.is_absent());
//! assert!(!false.is_absent());
//! assert!(!"".is_absent());
//! assert!(f64::NAN.is_absent());
//! assert!(None::<i32>.is_absent());
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// A type whose values can be classified as absent.
///
/// # Laws
///
/// - **Stability**: `is_absent` is a pure function of the value; classifying
///   the same value twice yields the same answer.
/// - **Complement**: `is_present() == !is_absent()`.
///
/// # Examples
///
/// ```rust
/// use uplift::algebra::{Absence, Maybe};
///
/// struct Reading(i32);
///
/// impl Absence for Reading {
///     fn is_absent(&self) -> bool {
///         self.0 < 0
///     }
/// }
///
/// assert!(Maybe::unit(Reading(-1)).is_nothing());
/// assert!(Maybe::unit(Reading(3)).is_just());
/// ```
pub trait Absence {
    /// Returns `true` if this value stands for "no value".
    fn is_absent(&self) -> bool;

    /// Returns `true` if this value is a legitimate value.
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Absence for $ty {
                #[inline]
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )*
    };
}

always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl Absence for f32 {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl Absence for f64 {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl<T> Absence for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Absence for Vec<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Absence + ?Sized> Absence for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Rc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Absence + ?Sized> Absence for Arc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
