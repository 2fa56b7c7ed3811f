// crates/xassert/src/sink/panic.rs
// ============================================================================
// Module: Panic Sink
// Description: Sink that signals failures by unwinding.
// Purpose: Match the behavior of the standard `assert!` family.
// Dependencies: crate::{error, sink}
// ============================================================================

//! ## Overview
//! [`PanicSink`] panics with the rendered [`AssertionFailed`] message, so a
//! failure unwinds out of the test body exactly like `assert_eq!`. The panic
//! can be caught with `std::panic::catch_unwind` or the `panics` predicate.

use crate::error::AssertResult;
use crate::error::AssertionFailed;
use crate::sink::Evaluation;
use crate::sink::FailureSink;

/// Sink that panics on failure.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
/// - Never returns `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicSink;

impl FailureSink for PanicSink {
    #[allow(
        clippy::panic,
        clippy::panic_in_result_fn,
        reason = "Unwinding is the failure signal of this sink."
    )]
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        if !evaluation.passed {
            panic!("{}", AssertionFailed::from_evaluation(evaluation));
        }
        Ok(())
    }
}
