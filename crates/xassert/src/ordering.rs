// crates/xassert/src/ordering.rs
// ============================================================================
// Module: Ordering Predicates
// Description: Generic comparison and inclusive range containment.
// Purpose: Evaluate ordering predicates through three-way comparison.
// Dependencies: crate::{asserter, error, predicate, sink}, std::cmp
// ============================================================================

//! ## Overview
//! Ordering predicates accept any `PartialOrd` type and evaluate the
//! three-way comparison returned by `partial_cmp`. Incomparable operands (a
//! NaN, for instance) satisfy none of the relations, so every ordering check
//! on them fails and `not_in_range` passes.
//! Invariants:
//! - `not_in_range` is the negation of the boolean `in_range` computes, never
//!   a separate comparison.
//! - `min > max` is not rejected; the range is empty and `in_range` fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

// ============================================================================
// SECTION: Comparison Helpers
// ============================================================================

/// Returns whether `min <= value <= max`.
#[must_use]
pub fn range_contains<T: PartialOrd + ?Sized>(value: &T, min: &T, max: &T) -> bool {
    value.partial_cmp(min).is_some_and(Ordering::is_ge)
        && value.partial_cmp(max).is_some_and(Ordering::is_le)
}

/// Evaluates `a` against `b` and tests the ordering with `relation`.
fn compare_with<T: PartialOrd + ?Sized>(a: &T, b: &T, relation: fn(Ordering) -> bool) -> bool {
    a.partial_cmp(b).is_some_and(relation)
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

#[allow(
    clippy::needless_pass_by_value,
    reason = "Operands are taken by value so call sites can pass literals and temporaries."
)]
impl<S: FailureSink> Asserter<S> {
    /// Asserts that `a > b`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `a` does not order strictly after `b`.
    pub fn greater_than<T: PartialOrd + fmt::Debug>(&self, a: T, b: T) -> AssertResult {
        self.compare(Predicate::GreaterThan, &a, &b, Ordering::is_gt)
    }

    /// Asserts that `a < b`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `a` does not order strictly before `b`.
    pub fn less_than<T: PartialOrd + fmt::Debug>(&self, a: T, b: T) -> AssertResult {
        self.compare(Predicate::LessThan, &a, &b, Ordering::is_lt)
    }

    /// Asserts that `a >= b`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `a` orders before `b` or is incomparable.
    pub fn greater_than_or_equal<T: PartialOrd + fmt::Debug>(&self, a: T, b: T) -> AssertResult {
        self.compare(Predicate::GreaterThanOrEqual, &a, &b, Ordering::is_ge)
    }

    /// Asserts that `a <= b`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `a` orders after `b` or is incomparable.
    pub fn less_than_or_equal<T: PartialOrd + fmt::Debug>(&self, a: T, b: T) -> AssertResult {
        self.compare(Predicate::LessThanOrEqual, &a, &b, Ordering::is_le)
    }

    /// Asserts that `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `value` lies outside the range.
    pub fn in_range<T: PartialOrd + fmt::Debug>(&self, value: T, min: T, max: T) -> AssertResult {
        let passed = range_contains(&value, &min, &max);
        self.signal(
            Predicate::InRange,
            passed,
            &[
                Operand::new("value", &value),
                Operand::new("min", &min),
                Operand::new("max", &max),
            ],
        )
    }

    /// Asserts that `value` lies outside `[min, max]`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `value` lies inside the range.
    pub fn not_in_range<T: PartialOrd + fmt::Debug>(
        &self,
        value: T,
        min: T,
        max: T,
    ) -> AssertResult {
        let passed = !range_contains(&value, &min, &max);
        self.signal(
            Predicate::NotInRange,
            passed,
            &[
                Operand::new("value", &value),
                Operand::new("min", &min),
                Operand::new("max", &max),
            ],
        )
    }

    /// Forwards a binary ordering check.
    fn compare<T: PartialOrd + fmt::Debug>(
        &self,
        predicate: Predicate,
        a: &T,
        b: &T,
        relation: fn(Ordering) -> bool,
    ) -> AssertResult {
        let passed = compare_with(a, b, relation);
        self.signal(predicate, passed, &[Operand::new("a", a), Operand::new("b", b)])
    }
}
