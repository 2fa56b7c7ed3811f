// crates/xassert/src/sink/log.rs
// ============================================================================
// Module: Log Sink
// Description: JSON-lines evaluation log wrapped around another sink.
// Purpose: Keep an audit trail of assertion outcomes.
// Dependencies: crate::{error, sink}, serde_json, std
// ============================================================================

//! ## Overview
//! [`LogSink`] writes one JSON record per evaluation (or per failure when
//! configured with [`LogSink::failures_only`]) and then delegates to an inner
//! sink, which decides how the failure is signaled.
//! Invariants:
//! - Log write errors never change the outcome of an assertion; they are
//!   counted and exposed through [`LogSink::write_failures`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde_json::json;

use crate::error::AssertResult;
use crate::error::OperandRecord;
use crate::sink::Evaluation;
use crate::sink::FailureSink;

// ============================================================================
// SECTION: Log Sink
// ============================================================================

/// JSON-lines logging sink.
pub struct LogSink<W: Write + Send, S: FailureSink> {
    /// Output writer for log records.
    writer: Mutex<W>,
    /// Sink that signals the outcome after logging.
    inner: S,
    /// Whether passing evaluations are skipped.
    failures_only: bool,
    /// Monotonic sequence number for records.
    sequence: AtomicU64,
    /// Number of records that could not be written.
    write_failures: AtomicU64,
}

impl<W: Write + Send, S: FailureSink> LogSink<W, S> {
    /// Creates a log sink that records every evaluation.
    pub const fn new(writer: W, inner: S) -> Self {
        Self {
            writer: Mutex::new(writer),
            inner,
            failures_only: false,
            sequence: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Creates a log sink that records failing evaluations only.
    pub const fn failures_only(writer: W, inner: S) -> Self {
        Self {
            writer: Mutex::new(writer),
            inner,
            failures_only: true,
            sequence: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Returns the wrapped sink.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns how many records failed to write.
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes the record for one evaluation.
    fn write_record(&self, evaluation: &Evaluation<'_>) -> Result<(), String> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let operands: Vec<OperandRecord> =
            evaluation.operands.iter().map(OperandRecord::render).collect();
        let record = json!({
            "seq": seq,
            "predicate": evaluation.predicate,
            "group": evaluation.predicate.group(),
            "passed": evaluation.passed,
            "operands": operands,
        });
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *guard, &record).map_err(|err| err.to_string())?;
        guard.write_all(b"\n").map_err(|err| err.to_string())?;
        guard.flush().map_err(|err| err.to_string())?;
        drop(guard);
        Ok(())
    }
}

impl<W: Write + Send, S: FailureSink> FailureSink for LogSink<W, S> {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        if !(self.failures_only && evaluation.passed) && self.write_record(evaluation).is_err() {
            self.write_failures.fetch_add(1, Ordering::Relaxed);
        }
        self.inner.evaluate(evaluation)
    }
}
