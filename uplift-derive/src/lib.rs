//! Derive macro for `uplift` absence classification.
//!
//! `#[derive(Absence)]` implements `uplift::algebra::Absence` so that a user
//! type can be classified by `Maybe::unit` and `Either::unit`.
//!
//! - Structs are always present.
//! - A single-field struct marked `#[absence(transparent)]` delegates to its
//!   field.
//! - Enum variants marked `#[absent]` are absent; all other variants are
//!   present.
//!
//! # Example
//!
//! ```rust,ignore
//! use uplift::algebra::{Absence, Maybe};
//!
//! #[derive(Absence)]
//! enum Reading {
//!     Value(f64),
//!     #[absent]
//!     Offline,
//! }
//!
//! #[derive(Absence)]
//! #[absence(transparent)]
//! struct Celsius(f64);
//!
//! assert!(Maybe::unit(Reading::Offline).is_nothing());
//! assert!(Maybe::unit(Celsius(f64::NAN)).is_nothing());
//! assert!(Maybe::unit(Celsius(0.0)).is_just());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod absence;

use proc_macro::TokenStream;

/// Derives `uplift::algebra::Absence`.
///
/// # Attributes
///
/// - `#[absent]` on an enum variant marks that variant as absent.
/// - `#[absence(transparent)]` on a struct with exactly one field delegates
///   classification to that field, which must implement `Absence` itself.
///
/// Unions are rejected.
#[proc_macro_derive(Absence, attributes(absent, absence))]
pub fn derive_absence(input: TokenStream) -> TokenStream {
    absence::derive_absence_impl(input)
}
