// crates/xassert/tests/sink.rs
// ============================================================================
// Module: Failure Sink Tests
// Description: Reference sinks and the JSON-lines evaluation log.
// ============================================================================
//! ## Overview
//! Exercises every reference sink through real predicates and checks that
//! predicates forward exactly one evaluation per call.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::io;
use std::io::Write;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use support::FailingWriter;
use support::SharedBuffer;
use support::TestResult;
use support::ensure;
use support::expect_failure;
use xassert::AssertionFailed;
use xassert::Asserter;
use xassert::CallbackSink;
use xassert::FailureSink;
use xassert::LogSink;
use xassert::PanicSink;
use xassert::Predicate;
use xassert::PredicateGroup;
use xassert::RecordingSink;
use xassert::ResultSink;

// ============================================================================
// SECTION: Recording Sink
// ============================================================================

#[test]
fn recording_sink_sees_every_evaluation() -> TestResult {
    let check = Asserter::new(RecordingSink::new());
    check.equal(5, 5)?;
    check.equal(5, 6)?;
    check.contains_str("lo", "hello")?;
    check.count_equals(2, &[1, 2, 3])?;

    let sink = check.sink();
    ensure(sink.len() == 4, "one record per predicate call")?;
    let outcomes: Vec<(Predicate, bool)> =
        sink.records().iter().map(|record| (record.predicate, record.passed)).collect();
    ensure(
        outcomes
            == [
                (Predicate::Equal, true),
                (Predicate::Equal, false),
                (Predicate::ContainsStr, true),
                (Predicate::CountEquals, false),
            ],
        format!("unexpected outcomes: {outcomes:?}"),
    )?;
    ensure(sink.failures().len() == 2, "two failures recorded")?;
    Ok(())
}

#[test]
fn recording_sink_failures_match_result_sink() -> TestResult {
    let recording = Asserter::new(RecordingSink::new());
    recording.in_range(15, 1, 10)?;
    let signaled =
        expect_failure(Asserter::new(ResultSink).in_range(15, 1, 10), Predicate::InRange)?;
    ensure(recording.sink().failures() == vec![signaled], "same failure from both sinks")?;
    recording.sink().clear();
    ensure(recording.sink().is_empty(), "cleared")?;
    ensure(recording.sink().last().is_none(), "no last record")?;
    Ok(())
}

// ============================================================================
// SECTION: Panic Sink
// ============================================================================

#[test]
fn panic_sink_returns_normally_on_pass() -> TestResult {
    let check = Asserter::panicking();
    check.equal(1, 1)?;
    check.in_range(5, 1, 10)?;
    Ok(())
}

#[test]
#[should_panic(expected = "assertion `equal` failed (expected: 1, actual: 2)")]
fn panic_sink_unwinds_with_rendered_failure() {
    let check = Asserter::new(PanicSink);
    let _ = check.equal(1, 2);
}

#[test]
fn panic_sink_payload_is_the_message() -> TestResult {
    let check = Asserter::panicking();
    let payload = panic::catch_unwind(|| check.is_true(false)).unwrap_err();
    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    ensure(message == "assertion `true` failed (condition: false)", message.clone())?;
    Ok(())
}

// ============================================================================
// SECTION: Callback Sink
// ============================================================================

#[test]
fn callback_sink_decides_the_signal() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let check = Asserter::new(CallbackSink::new(move |evaluation| {
        log.lock().unwrap().push(evaluation.predicate);
        if evaluation.predicate == Predicate::Fail {
            return Ok(());
        }
        if evaluation.passed {
            Ok(())
        } else {
            Err(AssertionFailed::from_evaluation(evaluation))
        }
    }));
    check.fail()?;
    check.less_than(1, 2)?;
    expect_failure(check.less_than(2, 1), Predicate::LessThan)?;
    let seen = seen.lock().unwrap().clone();
    ensure(
        seen == [Predicate::Fail, Predicate::LessThan, Predicate::LessThan],
        format!("unexpected sequence: {seen:?}"),
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Log Sink
// ============================================================================

#[test]
fn log_sink_writes_one_json_line_per_evaluation() -> TestResult {
    let buffer = SharedBuffer::new();
    let check = Asserter::new(LogSink::new(buffer.clone(), ResultSink));
    check.equal(5, 5)?;
    expect_failure(check.equal(5, 6), Predicate::Equal)?;

    let lines = buffer.json_lines();
    ensure(lines.len() == 2, "two records")?;
    ensure(lines[0]["seq"] == 1 && lines[1]["seq"] == 2, "sequence numbers")?;
    ensure(lines[0]["passed"] == true && lines[1]["passed"] == false, "outcomes")?;
    ensure(lines[1]["predicate"] == "equal", "predicate label")?;
    ensure(lines[1]["group"] == PredicateGroup::Equality.as_str(), "group label")?;
    ensure(lines[1]["operands"][0]["role"] == "expected", "first operand role")?;
    ensure(lines[1]["operands"][1]["rendered"] == "6", "second operand value")?;
    ensure(check.sink().write_failures() == 0, "no write failures")?;
    Ok(())
}

#[test]
fn log_sink_failures_only_skips_passes() -> TestResult {
    let buffer = SharedBuffer::new();
    let check = Asserter::new(LogSink::failures_only(buffer.clone(), RecordingSink::new()));
    check.starts_with("he", "hello")?;
    check.starts_with("lo", "hello")?;
    check.is_empty(&[0_u8; 0])?;

    let lines = buffer.json_lines();
    ensure(lines.len() == 1, "only the failure is logged")?;
    ensure(lines[0]["predicate"] == "starts_with", "failed predicate logged")?;
    ensure(lines[0]["seq"] == 1, "sequence counts written records")?;
    ensure(check.sink().inner().len() == 3, "inner sink still sees everything")?;
    Ok(())
}

#[test]
fn log_write_errors_never_change_the_outcome() -> TestResult {
    let check = Asserter::new(LogSink::new(FailingWriter, ResultSink));
    check.is_true(true)?;
    expect_failure(check.is_true(false), Predicate::True)?;
    ensure(check.sink().write_failures() == 2, "both writes counted as failed")?;
    Ok(())
}

/// Writer that panics on its first flush, leaving the sink's mutex poisoned.
struct PanicOnFirstFlush {
    /// Destination for written bytes.
    buffer: SharedBuffer,
    /// Whether the panic already happened.
    panicked: bool,
}

impl Write for PanicOnFirstFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.panicked {
            self.panicked = true;
            panic!("flush interrupted");
        }
        Ok(())
    }
}

#[test]
fn log_sink_keeps_writing_after_poisoned_writer() -> TestResult {
    let buffer = SharedBuffer::new();
    let writer = PanicOnFirstFlush {
        buffer: buffer.clone(),
        panicked: false,
    };
    let check = Asserter::new(LogSink::new(writer, ResultSink));
    let interrupted = panic::catch_unwind(AssertUnwindSafe(|| check.is_true(true)));
    ensure(interrupted.is_err(), "first write panics")?;

    expect_failure(check.is_true(false), Predicate::True)?;
    let lines = buffer.json_lines();
    ensure(lines.len() == 2, "record after the panic is still written")?;
    ensure(lines[1]["seq"] == 2 && lines[1]["passed"] == false, "second record")?;
    ensure(check.sink().write_failures() == 0, "poisoning is not a write failure")?;
    Ok(())
}

#[test]
fn log_sink_returns_its_writer() -> TestResult {
    let check = Asserter::new(LogSink::new(Vec::<u8>::new(), ResultSink));
    check.null(None::<u8>)?;
    let bytes = check.into_sink().into_writer();
    let text = String::from_utf8(bytes)?;
    ensure(text.ends_with('\n'), "records are newline terminated")?;
    ensure(text.contains("\"predicate\":\"null\""), "predicate written")?;
    Ok(())
}

// ============================================================================
// SECTION: Shared Sinks
// ============================================================================

#[test]
fn shared_sink_collects_from_many_threads() -> TestResult {
    let sink = Arc::new(RecordingSink::new());
    let handles: Vec<_> = (0 .. 4)
        .map(|worker| {
            let check = Asserter::new(Arc::clone(&sink));
            thread::spawn(move || {
                for value in 0 .. 10 {
                    let _ = check.less_than(value, worker * 3);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    ensure(sink.len() == 40, "every evaluation recorded")?;
    ensure(sink.failures().len() == 22, "values at or above each bound fail")?;
    Ok(())
}

#[test]
fn boxed_dynamic_sinks_are_interchangeable() -> TestResult {
    let sinks: Vec<Box<dyn FailureSink>> =
        vec![Box::new(ResultSink), Box::new(RecordingSink::new())];
    let outcomes: Vec<bool> =
        sinks.into_iter().map(|sink| Asserter::new(sink).equal(1, 2).is_err()).collect();
    ensure(outcomes == [true, false], "result sink signals, recording sink records")?;
    Ok(())
}
