// crates/xassert/src/string.rs
// ============================================================================
// Module: String Predicates
// Description: Substring, prefix and suffix checks.
// Purpose: Evaluate ordinal string containment.
// Dependencies: crate::{asserter, error, predicate, sink}
// ============================================================================

//! ## Overview
//! All string checks are ordinal and case-sensitive byte-sequence matches on
//! UTF-8 text. There is no locale or case-folding mode. The empty string is a
//! substring, prefix and suffix of every string.

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

impl<S: FailureSink> Asserter<S> {
    /// Asserts that `actual` contains `substring`.
    ///
    /// # Errors
    ///
    /// Signals a failure when the substring is absent.
    pub fn contains_str(&self, substring: &str, actual: &str) -> AssertResult {
        self.signal(
            Predicate::ContainsStr,
            actual.contains(substring),
            &[Operand::new("substring", &substring), Operand::new("actual", &actual)],
        )
    }

    /// Asserts that `actual` does not contain `substring`.
    ///
    /// # Errors
    ///
    /// Signals a failure when the substring is present.
    pub fn does_not_contain_str(&self, substring: &str, actual: &str) -> AssertResult {
        self.signal(
            Predicate::DoesNotContainStr,
            !actual.contains(substring),
            &[Operand::new("substring", &substring), Operand::new("actual", &actual)],
        )
    }

    /// Asserts that `actual` starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` does not start with the prefix.
    pub fn starts_with(&self, prefix: &str, actual: &str) -> AssertResult {
        self.signal(
            Predicate::StartsWith,
            actual.starts_with(prefix),
            &[Operand::new("prefix", &prefix), Operand::new("actual", &actual)],
        )
    }

    /// Asserts that `actual` ends with `suffix`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` does not end with the suffix.
    pub fn ends_with(&self, suffix: &str, actual: &str) -> AssertResult {
        self.signal(
            Predicate::EndsWith,
            actual.ends_with(suffix),
            &[Operand::new("suffix", &suffix), Operand::new("actual", &actual)],
        )
    }
}
