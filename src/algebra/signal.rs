//! Captured panic payloads.
//!
//! A [`Signal`] is whatever a guarded computation panicked with: the payload
//! of `panic!("...")` (a `&'static str` or a `String`) or any value raised with
//! [`std::panic::panic_any`]. It is kept exactly as it was raised, untyped,
//! and can be inspected by downcasting.
//!
//! # Examples
//!
//! ```rust
//! use uplift::algebra::{Signal, Try};
//!
//! #[derive(Debug, PartialEq)]
//! struct Code(u32);
//!
//! let attempt: Try<i32> = Try::unit(|| std::panic::panic_any(Code(1)));
//! let signal = attempt.fold(|signal| signal, |_| unreachable!());
//! assert_eq!(signal.downcast_ref::<Code>(), Some(&Code(1)));
//! ```

use std::any::Any;
use std::fmt;
use std::panic;

/// An untyped failure payload captured from a panic.
///
/// `Signal` is the failure payload of [`Try`](super::Try) and the value
/// handed to `L::from` when an `Either` lift or bind captures a panic.
pub struct Signal {
    payload: Box<dyn Any + Send + 'static>,
}

impl Signal {
    /// Wraps an arbitrary value as a signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplift::algebra::Signal;
    ///
    /// let signal = Signal::new("boom");
    /// assert_eq!(signal.message(), Some("boom"));
    /// ```
    pub fn new<P: Any + Send>(payload: P) -> Self {
        Self {
            payload: Box::new(payload),
        }
    }

    /// Wraps the payload returned by [`std::panic::catch_unwind`].
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns `true` if the payload has type `P`.
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Returns a reference to the payload if it has type `P`.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Takes the payload out if it has type `P`, otherwise returns the signal
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the payload is not a `P`.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        self.payload
            .downcast::<P>()
            .map(|payload| *payload)
            .map_err(Self::from_panic)
    }

    /// Returns the panic message when the payload is textual.
    ///
    /// `panic!("literal")` raises a `&'static str` and `panic!("{x}")` raises
    /// a `String`; both are recognized.
    pub fn message(&self) -> Option<&str> {
        self.downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.downcast_ref::<String>().map(String::as_str))
    }

    /// Consumes the signal and returns the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the captured payload unchanged.
    ///
    /// The panic hook is not invoked again.
    pub fn raise(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.debug_tuple("Signal").field(&message).finish(),
            None => formatter.debug_tuple("Signal").field(&"<opaque>").finish(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "{message}"),
            None => write!(formatter, "<opaque signal>"),
        }
    }
}

impl std::error::Error for Signal {}

impl From<Signal> for String {
    fn from(signal: Signal) -> Self {
        match signal.downcast::<Self>() {
            Ok(message) => message,
            Err(signal) => match signal.downcast::<&'static str>() {
                Ok(message) => message.to_owned(),
                Err(signal) => signal.to_string(),
            },
        }
    }
}

impl From<Signal> for Box<dyn Any + Send + 'static> {
    fn from(signal: Signal) -> Self {
        signal.into_payload()
    }
}
