//! Property-based tests for outcomes and adapters.
