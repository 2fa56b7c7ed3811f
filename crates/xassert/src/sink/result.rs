// crates/xassert/src/sink/result.rs
// ============================================================================
// Module: Result Sink
// Description: Sink that signals failures as error values.
// Purpose: Let tests propagate assertion failures with `?`.
// Dependencies: crate::{error, sink}
// ============================================================================

//! ## Overview
//! [`ResultSink`] is the default sink. A failing evaluation becomes
//! `Err(AssertionFailed)`, which aborts the rest of a `Result`-returning test
//! body when propagated with `?`.

use crate::error::AssertResult;
use crate::error::AssertionFailed;
use crate::sink::Evaluation;
use crate::sink::FailureSink;

/// Sink returning [`AssertionFailed`] on failure.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSink;

impl FailureSink for ResultSink {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        if evaluation.passed {
            Ok(())
        } else {
            Err(AssertionFailed::from_evaluation(evaluation))
        }
    }
}
