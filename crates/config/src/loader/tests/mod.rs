//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching environment variables use `serial_test` and `temp_env`.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
