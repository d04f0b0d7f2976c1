#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Verdict Library
//!
//! The `Outcome` tagged union and the adapters that move failures between
//! outcomes and raised signals.
//!
//! # Modules
//!
//! - [`outcome`]: the union, its constructors and wire shape
//! - [`error`]: raised signals and their defaults
//! - [`catch`]: raised signal to outcome adapters
//!
//! Outcome to raised signal goes through methods on [`Outcome`]:
//! [`unwrap`](Outcome::unwrap), [`unwrap_with`](Outcome::unwrap_with),
//! [`unwrap_with_async`](Outcome::unwrap_with_async),
//! [`assert_ok`](Outcome::assert_ok) and
//! [`assert_ok_with`](Outcome::assert_ok_with).

pub mod catch;
pub mod error;
pub mod outcome;
mod proptests;
mod unwrap;

// Re-exports for convenience
pub use catch::{
    Caught, Intercepted, Produced, catch_err, catch_err_if, catch_err_sync, catch_err_sync_if,
};
pub use error::{Signal, SignalPayload, describe, raise};
pub use outcome::{DISCRIMINANT, Outcome, make_err, make_ok, make_when};
