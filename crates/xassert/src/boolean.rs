// crates/xassert/src/boolean.rs
// ============================================================================
// Module: Boolean Predicates
// Description: True/false checks.
// Dependencies: crate::{asserter, error, predicate, sink}
// ============================================================================

//! True/false checks; no coercion from other types.

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

impl<S: FailureSink> Asserter<S> {
    /// Asserts that a condition is true.
    ///
    /// # Errors
    ///
    /// Signals a failure when the condition is false.
    pub fn is_true(&self, condition: bool) -> AssertResult {
        self.signal(Predicate::True, condition, &[Operand::new("condition", &condition)])
    }

    /// Asserts that a condition is false.
    ///
    /// # Errors
    ///
    /// Signals a failure when the condition is true.
    pub fn is_false(&self, condition: bool) -> AssertResult {
        self.signal(Predicate::False, !condition, &[Operand::new("condition", &condition)])
    }
}
