//! Turning `Err` outcomes into raised signals.
//!
//! Every function here either hands back the `Ok` side or raises; a raised
//! signal is never swallowed, retried, or swapped for a default value.
//!
//! The synchronous forms report the caller's location in the panic.
//! `unwrap_with_async` cannot: `#[track_caller]` does not apply to `async fn`,
//! so its panic points into this module.

use std::any::Any;
use std::future::Future;

use crate::error::{Signal, raise};
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Extracts the success payload, raising [`Signal::Unwrapped`] on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{make_ok, Outcome};
    ///
    /// let outcome: Outcome<u32, ()> = make_ok(42);
    /// assert_eq!(outcome.unwrap(), 42);
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(payload) => payload,
            Outcome::Err(_) => {
                tracing::debug!(signal = %Signal::Unwrapped, "Raising on unwrapped error");
                Signal::Unwrapped.raise()
            }
        }
    }

    /// Extracts the success payload, raising `on_failure(self)` on `Err`.
    ///
    /// The producer receives the failing outcome and its return value is
    /// the raised signal.
    #[track_caller]
    pub fn unwrap_with<P, F>(self, on_failure: F) -> T
    where
        F: FnOnce(Self) -> P,
        P: Any + Send + 'static,
    {
        match self {
            Outcome::Ok(payload) => payload,
            failed @ Outcome::Err(_) => {
                let signal = on_failure(failed);
                tracing::debug!("Raising produced signal on unwrapped error");
                raise(signal)
            }
        }
    }

    /// Asynchronous form of [`unwrap_with`](Self::unwrap_with).
    ///
    /// The producer's future is awaited and its output raised. The panic
    /// location is inside this crate, not at the caller.
    pub async fn unwrap_with_async<P, F, Fut>(self, on_failure: F) -> T
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = P>,
        P: Any + Send + 'static,
    {
        match self {
            Outcome::Ok(payload) => payload,
            failed @ Outcome::Err(_) => {
                let signal = on_failure(failed).await;
                tracing::debug!("Raising awaited signal on unwrapped error");
                raise(signal)
            }
        }
    }

    /// Returns on `Ok`, raises [`Signal::Asserted`] on `Err`.
    #[track_caller]
    pub fn assert_ok(&self) {
        if self.is_err() {
            tracing::debug!(signal = %Signal::Asserted, "Raising on asserted error");
            Signal::Asserted.raise()
        }
    }

    /// Returns on `Ok`, raises `on_failure(self)` on `Err`.
    #[track_caller]
    pub fn assert_ok_with<P, F>(&self, on_failure: F)
    where
        F: FnOnce(&Self) -> P,
        P: Any + Send + 'static,
    {
        if self.is_err() {
            let signal = on_failure(self);
            tracing::debug!("Raising produced signal on asserted error");
            raise(signal)
        }
    }
}
