//! Adapters from raised signals back to outcomes.
//!
//! The callback runs to completion (or raises) before the adapter decides
//! between `Ok` and `Err`. An optional filter picks which signals become
//! `Err`; the rest keep unwinding untouched, so unrelated failures are not
//! disguised as modeled ones.
//!
//! Interception relies on unwinding. Under `panic = "abort"` a raised signal
//! ends the process and no adapter ever sees it. Intercepted signals still
//! pass through the global panic hook first, so the default hook prints
//! each one to stderr even when it becomes an `Err`; install a quieter hook
//! with `std::panic::set_hook` if that noise matters.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::error::{SignalPayload, describe};
use crate::outcome::Outcome;

/// Success payload of a [`Caught`] outcome: what the callback returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Produced<T> {
    /// The callback's return value.
    pub value: T,
}

/// Failure payload of a [`Caught`] outcome: the intercepted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intercepted<S> {
    /// The signal the callback raised.
    pub caught: S,
}

/// Outcome of running a callback under one of the `catch_err` adapters.
pub type Caught<T, S = SignalPayload> = Outcome<Produced<T>, Intercepted<S>>;

/// Runs `callback`, converting any raised signal into `Err`.
///
/// ```
/// use verdict::{catch_err_sync, raise};
///
/// let caught = catch_err_sync(|| 7);
/// assert_eq!(caught.ok().map(|produced| produced.value), Some(7));
///
/// let caught = catch_err_sync(|| -> u8 { raise("boom") });
/// assert!(caught.is_err());
/// ```
pub fn catch_err_sync<T, F>(callback: F) -> Caught<T>
where
    F: FnOnce() -> T,
{
    catch_err_sync_if(callback, |_| true)
}

/// Runs `callback`, converting a raised signal into `Err` when `test`
/// accepts it.
///
/// A rejected signal is re-raised with its original payload.
pub fn catch_err_sync_if<T, F, P>(callback: F, test: P) -> Caught<T>
where
    F: FnOnce() -> T,
    P: FnOnce(&(dyn Any + Send)) -> bool,
{
    settle(panic::catch_unwind(AssertUnwindSafe(callback)), test)
}

/// Asynchronous form of [`catch_err_sync`].
pub async fn catch_err<T, F, Fut>(callback: F) -> Caught<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    catch_err_if(callback, |_| true).await
}

/// Asynchronous form of [`catch_err_sync_if`].
///
/// Signals raised while building the future and while polling it are both
/// intercepted.
pub async fn catch_err_if<T, F, Fut, P>(callback: F, test: P) -> Caught<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    P: FnOnce(&(dyn Any + Send)) -> bool,
{
    let result = match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
        Err(payload) => Err(payload),
    };
    settle(result, test)
}

fn settle<T, P>(result: std::thread::Result<T>, test: P) -> Caught<T>
where
    P: FnOnce(&(dyn Any + Send)) -> bool,
{
    let payload = match result {
        Ok(value) => return Outcome::Ok(Produced { value }),
        Err(payload) => payload,
    };

    if test(&*payload) {
        tracing::debug!(signal = %describe(&*payload), "Intercepted raised signal");
        Outcome::Err(Intercepted { caught: payload })
    } else {
        tracing::debug!(signal = %describe(&*payload), "Filter rejected signal, re-raising");
        panic::resume_unwind(payload)
    }
}
