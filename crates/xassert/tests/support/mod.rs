// crates/xassert/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and fixtures for xassert integration tests.
// ============================================================================
//! ## Overview
//! Shared helpers for Result-based tests and for inspecting failures.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use xassert::AssertResult;
use xassert::AssertionFailed;
use xassert::Predicate;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across xassert integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns the failure of an assertion that was expected to fail.
///
/// # Errors
/// Returns a `TestError` when the assertion passed or failed with another
/// predicate.
pub fn expect_failure(outcome: AssertResult, predicate: Predicate) -> TestResult<AssertionFailed> {
    match outcome {
        Ok(()) => Err(Box::new(TestError::new(format!("`{predicate}` passed unexpectedly")))),
        Err(failure) if failure.predicate == predicate => Ok(failure),
        Err(failure) => Err(Box::new(TestError::new(format!(
            "expected `{predicate}` failure, got `{}`",
            failure.predicate
        )))),
    }
}

// ========================================================================
// Writers
// ========================================================================

/// Shared in-memory writer whose contents stay readable after the sink
/// takes ownership of a clone.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    /// Bytes written so far.
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates a new empty shared buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents as a string.
    pub fn to_string_lossy(&self) -> String {
        let guard = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&guard).to_string()
    }

    /// Returns each written line parsed as JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.to_string_lossy()
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A writer that always fails, for testing error paths.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated write failure"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
