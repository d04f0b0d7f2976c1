//! Raised signals: the failure values that escape through unwinding.

use std::any::Any;

/// What an unwinding panic carries.
///
/// Anything `Any + Send` can be raised, so intercepted signals are kept
/// opaque and inspected by downcasting.
pub type SignalPayload = Box<dyn Any + Send>;

/// Default signals raised by the library when no producer is given.
///
/// A default is raised as its [`message`](Signal::message), a plain
/// `&'static str`, so the standard panic hook prints it when nothing
/// intercepts the signal. [`Signal::from_payload`] recognizes it again.
///
/// All variants are marked with `#[non_exhaustive]` so new defaults can be
/// added without breaking matches downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Signal {
    /// An `Err` outcome was unwrapped.
    #[error("Error was unwrapped")]
    Unwrapped,

    /// An `Err` outcome was asserted to be `Ok`.
    #[error("Error was asserted")]
    Asserted,
}

impl Signal {
    /// The text a default signal is raised with.
    pub fn message(self) -> &'static str {
        match self {
            Signal::Unwrapped => "Error was unwrapped",
            Signal::Asserted => "Error was asserted",
        }
    }

    /// Recognizes a default signal in an intercepted payload.
    ///
    /// Matches the raised message text as well as a `Signal` raised as-is.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Option<Self> {
        if let Some(signal) = payload.downcast_ref::<Signal>() {
            return Some(*signal);
        }
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            *message
        } else {
            payload.downcast_ref::<String>()?.as_str()
        };
        [Signal::Unwrapped, Signal::Asserted]
            .into_iter()
            .find(|signal| signal.message() == message)
    }

    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        raise(self.message())
    }
}

/// Raises `payload` as a signal.
///
/// The payload unwinds up the stack until something intercepts it, such as
/// [`catch_err_sync`](crate::catch_err_sync) or `std::panic::catch_unwind`.
/// The panic location reported is the caller's. Only `&str` and `String`
/// payloads are printed by the standard panic hook.
#[track_caller]
pub fn raise<P>(payload: P) -> !
where
    P: Any + Send + 'static,
{
    std::panic::panic_any(payload)
}

/// Renders a signal payload for logs and diagnostics.
///
/// Recognizes string messages (what `panic!` produces) and [`Signal`];
/// every other payload renders as a placeholder.
pub fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(signal) = payload.downcast_ref::<Signal>() {
        signal.to_string()
    } else {
        "<opaque signal>".to_string()
    }
}
