// crates/xassert/src/sink/mod.rs
// ============================================================================
// Module: Failure Sinks
// Description: The capability that turns a predicate outcome into a signal.
// Purpose: Decouple predicate evaluation from failure reporting.
// Dependencies: crate::{error, predicate}, std
// ============================================================================

//! ## Overview
//! Predicates never report failures themselves. They build an [`Evaluation`]
//! and hand it to a [`FailureSink`], which returns normally on a pass and
//! signals [`AssertionFailed`](crate::AssertionFailed) on a failure.
//! Invariants:
//! - A passing evaluation never produces an error.
//! - Operands are borrowed; only sinks render them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::AssertResult;
use crate::predicate::Predicate;

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// A borrowed operand of a predicate.
#[derive(Clone, Copy)]
pub struct Operand<'a> {
    /// Operand role within the predicate (for example `expected`).
    pub role: &'static str,
    /// Operand value, rendered only on demand.
    pub value: &'a dyn fmt::Debug,
}

impl<'a> Operand<'a> {
    /// Creates an operand.
    #[must_use]
    pub const fn new(role: &'static str, value: &'a dyn fmt::Debug) -> Self {
        Self {
            role,
            value,
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operand").field("role", &self.role).field("value", self.value).finish()
    }
}

/// Outcome of one predicate call, handed to a sink.
///
/// # Invariants
/// - Exists only for the duration of one assertion call.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<'a> {
    /// Predicate that was evaluated.
    pub predicate: Predicate,
    /// Whether the predicate held.
    pub passed: bool,
    /// Operands in declaration order.
    pub operands: &'a [Operand<'a>],
}

// ============================================================================
// SECTION: Sink Trait
// ============================================================================

/// Converts predicate outcomes into pass or failure signals.
pub trait FailureSink: Send + Sync {
    /// Forwards one evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailed`](crate::AssertionFailed) when the sink
    /// signals failures by value and the evaluation did not pass.
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult;
}

impl<S: FailureSink + ?Sized> FailureSink for &S {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        (**self).evaluate(evaluation)
    }
}

impl<S: FailureSink + ?Sized> FailureSink for Box<S> {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        (**self).evaluate(evaluation)
    }
}

impl<S: FailureSink + ?Sized> FailureSink for Arc<S> {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        (**self).evaluate(evaluation)
    }
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod callback;
pub mod log;
pub mod panic;
pub mod record;
pub mod result;

pub use callback::CallbackSink;
pub use log::LogSink;
pub use panic::PanicSink;
pub use record::EvaluationRecord;
pub use record::RecordingSink;
pub use result::ResultSink;
