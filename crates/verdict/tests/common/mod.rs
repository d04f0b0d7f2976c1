//! Common test utilities for verdict integration tests.

use std::panic::{AssertUnwindSafe, catch_unwind};

use verdict::SignalPayload;

/// Stand-in for a typed exception raised by foreign code.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeError {
    /// Offending value.
    pub value: i64,
}

/// Installs a test-writer subscriber so library events show up per test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verdict=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Runs `f` and returns the signal it raised.
pub fn raised<R>(f: impl FnOnce() -> R) -> SignalPayload {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => unreachable!("Expected a raised signal"),
        Err(payload) => payload,
    }
}
