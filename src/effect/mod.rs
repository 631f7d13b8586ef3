//! Deferred effects.
//!
//! [`IO`] delays a computation until it is explicitly resolved. It adds no
//! scheduling or concurrency; it only moves the moment of evaluation.

mod io;

pub use io::IO;
