// crates/xassert/src/tolerance.rs
// ============================================================================
// Module: Tolerance Predicates
// Description: Approximate equality for `f32` and `f64`.
// Purpose: Compare floats against a closed tolerance interval.
// Dependencies: crate::{asserter, error, ordering, predicate, sink}, serde
// ============================================================================

//! ## Overview
//! `actual` is approximately equal to `expected` when it lies in the closed
//! interval `[expected - delta, expected + delta]`. The interval test is the
//! ordering group's inclusive range containment, so the boundary passes and
//! `delta = 0` degenerates to exact equality. Any NaN empties the interval.
//!
//! Each precision keeps its own default delta:
//! [`F32_DEFAULT_DELTA`] and [`F64_DEFAULT_DELTA`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::ops::Add;
use std::ops::Sub;

use serde::Deserialize;
use serde::Serialize;

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::ordering::range_contains;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

// ============================================================================
// SECTION: Default Deltas
// ============================================================================

/// Default delta for `f32` comparisons.
pub const F32_DEFAULT_DELTA: f32 = 0.000_01;

/// Default delta for `f64` comparisons.
///
/// About five ULPs at magnitude 1, which is tighter than typical accumulated
/// error. Kept at this value; override per call or through [`Tolerances`]
/// when a computation needs slack.
pub const F64_DEFAULT_DELTA: f64 = 0.000_000_000_000_001;

/// Default deltas applied by the two-argument tolerance predicates.
///
/// # Invariants
/// - Deltas are expected to be finite and non-negative; a negative delta
///   yields an empty interval and every approximate comparison fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// Default delta for `f32` comparisons.
    pub f32_delta: f32,
    /// Default delta for `f64` comparisons.
    pub f64_delta: f64,
}

impl Tolerances {
    /// Per-precision default deltas.
    pub const DEFAULT: Self = Self {
        f32_delta: F32_DEFAULT_DELTA,
        f64_delta: F64_DEFAULT_DELTA,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// SECTION: Precision Trait
// ============================================================================

mod sealed {
    //! Restricts [`super::Precision`] to the built-in float types.

    /// Sealing marker.
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point precision usable with the tolerance predicates.
pub trait Precision:
    sealed::Sealed + Copy + PartialOrd + fmt::Debug + Add<Output = Self> + Sub<Output = Self>
{
    /// Default delta for this precision.
    const DEFAULT_DELTA: Self;

    /// Returns the delta configured for this precision.
    fn configured_delta(tolerances: &Tolerances) -> Self;
}

impl Precision for f32 {
    const DEFAULT_DELTA: Self = F32_DEFAULT_DELTA;

    fn configured_delta(tolerances: &Tolerances) -> Self {
        tolerances.f32_delta
    }
}

impl Precision for f64 {
    const DEFAULT_DELTA: Self = F64_DEFAULT_DELTA;

    fn configured_delta(tolerances: &Tolerances) -> Self {
        tolerances.f64_delta
    }
}

/// Returns whether `actual` lies in `[expected - delta, expected + delta]`.
#[must_use]
pub fn within_tolerance<F: Precision>(expected: F, actual: F, delta: F) -> bool {
    range_contains(&actual, &(expected - delta), &(expected + delta))
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

impl<S: FailureSink> Asserter<S> {
    /// Asserts that `actual` is within the configured default delta of
    /// `expected`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` lies outside the interval.
    pub fn approx_equal<F: Precision>(&self, expected: F, actual: F) -> AssertResult {
        self.approx_equal_within(expected, actual, F::configured_delta(&self.tolerances()))
    }

    /// Asserts that `actual` is within `delta` of `expected` (inclusive).
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` lies outside the interval.
    pub fn approx_equal_within<F: Precision>(
        &self,
        expected: F,
        actual: F,
        delta: F,
    ) -> AssertResult {
        let passed = within_tolerance(expected, actual, delta);
        self.signal(
            Predicate::ApproxEqual,
            passed,
            &[
                Operand::new("expected", &expected),
                Operand::new("actual", &actual),
                Operand::new("delta", &delta),
            ],
        )
    }

    /// Asserts that `actual` is farther than the configured default delta from
    /// `not_expected`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` lies inside the interval.
    pub fn not_approx_equal<F: Precision>(&self, not_expected: F, actual: F) -> AssertResult {
        self.not_approx_equal_within(
            not_expected,
            actual,
            F::configured_delta(&self.tolerances()),
        )
    }

    /// Asserts that `actual` lies outside `[not_expected - delta,
    /// not_expected + delta]`.
    ///
    /// # Errors
    ///
    /// Signals a failure when `actual` lies inside the interval.
    pub fn not_approx_equal_within<F: Precision>(
        &self,
        not_expected: F,
        actual: F,
        delta: F,
    ) -> AssertResult {
        let passed = !within_tolerance(not_expected, actual, delta);
        self.signal(
            Predicate::NotApproxEqual,
            passed,
            &[
                Operand::new("not_expected", &not_expected),
                Operand::new("actual", &actual),
                Operand::new("delta", &delta),
            ],
        )
    }
}
