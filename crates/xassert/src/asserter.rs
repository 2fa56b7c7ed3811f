// crates/xassert/src/asserter.rs
// ============================================================================
// Module: Asserter
// Description: A failure sink paired with tolerance defaults.
// Purpose: Host every predicate as a method over an injected sink.
// Dependencies: crate::{error, predicate, sink, tolerance}
// ============================================================================

//! ## Overview
//! [`Asserter`] is the entry point of the predicate layer. Each predicate
//! group adds methods to it from its own module; all of them end in
//! [`Asserter::signal`], which wraps the outcome in an [`Evaluation`] and
//! forwards it to the sink.
//!
//! The default asserter uses [`ResultSink`], so failures come back as
//! `Err(AssertionFailed)`:
//!
//! ```
//! use xassert::Asserter;
//!
//! # fn main() -> xassert::AssertResult {
//! let check: Asserter = Asserter::default();
//! check.equal(5, 5)?;
//! check.in_range(5, 1, 10)?;
//! assert!(check.equal(5, 6).is_err());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::Evaluation;
use crate::sink::FailureSink;
use crate::sink::Operand;
use crate::sink::PanicSink;
use crate::sink::ResultSink;
use crate::tolerance::Tolerances;

// ============================================================================
// SECTION: Asserter
// ============================================================================

/// Predicate host bound to a failure sink.
///
/// # Invariants
/// - Holds no state besides the sink and its tolerance defaults; any state
///   belongs to the sink.
#[derive(Debug, Clone, Default)]
pub struct Asserter<S = ResultSink> {
    /// Sink receiving every evaluation.
    sink: S,
    /// Default deltas for the two-argument tolerance predicates.
    tolerances: Tolerances,
}

/// Asserter whose sink is chosen at runtime (see `AssertConfig`).
pub type DynAsserter = Asserter<Box<dyn FailureSink>>;

impl Asserter<PanicSink> {
    /// Creates an asserter that panics on failure.
    #[must_use]
    pub const fn panicking() -> Self {
        Self::new(PanicSink)
    }
}

impl<S> Asserter<S> {
    /// Creates an asserter over a sink with the per-precision default deltas.
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            tolerances: Tolerances::DEFAULT,
        }
    }

    /// Replaces the default deltas used by the two-argument tolerance checks.
    #[must_use]
    pub const fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the configured default deltas.
    #[must_use]
    pub const fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Consumes the asserter and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FailureSink> Asserter<S> {
    /// Forwards a computed outcome to the sink.
    ///
    /// # Errors
    ///
    /// Returns whatever the sink signals for a failed evaluation.
    pub fn signal(
        &self,
        predicate: Predicate,
        passed: bool,
        operands: &[Operand<'_>],
    ) -> AssertResult {
        self.sink.evaluate(&Evaluation {
            predicate,
            passed,
            operands,
        })
    }
}
