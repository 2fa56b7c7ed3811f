// crates/xassert/src/sink/record.rs
// ============================================================================
// Module: Recording Sink
// Description: Sink that records evaluations instead of signaling.
// Purpose: Observe the predicate layer without failing the caller.
// Dependencies: crate::{error, predicate, sink}, serde, std::sync
// ============================================================================

//! ## Overview
//! [`RecordingSink`] keeps an ordered log of every evaluation it receives and
//! always returns `Ok(())`. It is the substitute sink for testing predicates
//! and for tooling that wants to inspect outcomes after the fact.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AssertResult;
use crate::error::AssertionFailed;
use crate::error::OperandRecord;
use crate::predicate::Predicate;
use crate::sink::Evaluation;
use crate::sink::FailureSink;

// ============================================================================
// SECTION: Evaluation Records
// ============================================================================

/// Owned copy of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Predicate that was evaluated.
    pub predicate: Predicate,
    /// Whether the predicate held.
    pub passed: bool,
    /// Rendered operands in declaration order.
    pub operands: Vec<OperandRecord>,
}

impl EvaluationRecord {
    /// Captures an evaluation.
    #[must_use]
    pub fn capture(evaluation: &Evaluation<'_>) -> Self {
        Self {
            predicate: evaluation.predicate,
            passed: evaluation.passed,
            operands: evaluation.operands.iter().map(OperandRecord::render).collect(),
        }
    }

    /// Converts a failed record into the failure it would have signaled.
    #[must_use]
    pub fn to_failure(&self) -> Option<AssertionFailed> {
        if self.passed {
            return None;
        }
        Some(AssertionFailed {
            predicate: self.predicate,
            operands: self.operands.iter().cloned().collect(),
        })
    }
}

// ============================================================================
// SECTION: Recording Sink
// ============================================================================

/// Sink that records evaluations and never signals.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Evaluations in arrival order.
    records: Mutex<Vec<EvaluationRecord>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded evaluations.
    #[must_use]
    pub fn records(&self) -> Vec<EvaluationRecord> {
        self.lock().clone()
    }

    /// Returns the failures that a signaling sink would have raised.
    #[must_use]
    pub fn failures(&self) -> Vec<AssertionFailed> {
        self.lock().iter().filter_map(EvaluationRecord::to_failure).collect()
    }

    /// Returns the most recent evaluation, if any.
    #[must_use]
    pub fn last(&self) -> Option<EvaluationRecord> {
        self.lock().last().cloned()
    }

    /// Returns the number of recorded evaluations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every recorded evaluation.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Locks the record buffer, recovering from poisoning.
    fn lock(&self) -> MutexGuard<'_, Vec<EvaluationRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FailureSink for RecordingSink {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        self.lock().push(EvaluationRecord::capture(evaluation));
        Ok(())
    }
}
