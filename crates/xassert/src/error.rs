// crates/xassert/src/error.rs
// ============================================================================
// Module: Assertion Failure
// Description: The single failure kind raised by failing assertions.
// Purpose: Carry the predicate and rendered operands out of a failed check.
// Dependencies: crate::{predicate, sink}, serde, smallvec, std::fmt
// ============================================================================

//! ## Overview
//! [`AssertionFailed`] is what a failing assertion propagates. It owns the
//! predicate name and each operand rendered once by the sink, so it can
//! outlive the borrowed values of the evaluation that produced it and can be
//! serialized into logs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::predicate::Predicate;
use crate::sink::Evaluation;
use crate::sink::Operand;

// ============================================================================
// SECTION: Operand Records
// ============================================================================

/// Rendered operand captured in a failure.
///
/// # Invariants
/// - `rendered` is the `Debug` rendering of the operand at failure time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRecord {
    /// Operand role within the predicate (for example `expected`).
    pub role: String,
    /// `Debug` rendering of the operand value.
    pub rendered: String,
}

impl OperandRecord {
    /// Renders a borrowed operand into an owned record.
    #[must_use]
    #[allow(clippy::use_debug, reason = "Operands are reported through their Debug rendering.")]
    pub fn render(operand: &Operand<'_>) -> Self {
        Self {
            role: operand.role.to_string(),
            rendered: format!("{:?}", operand.value),
        }
    }
}

// ============================================================================
// SECTION: Assertion Failure
// ============================================================================

/// A predicate evaluated to false.
///
/// # Invariants
/// - `operands` preserves the order in which the predicate declared them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailed {
    /// Predicate that failed.
    pub predicate: Predicate,
    /// Operands rendered at failure time.
    pub operands: SmallVec<[OperandRecord; 3]>,
}

impl AssertionFailed {
    /// Creates a failure with no operands.
    #[must_use]
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            operands: SmallVec::new(),
        }
    }

    /// Renders a failure from an evaluation.
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation<'_>) -> Self {
        Self {
            predicate: evaluation.predicate,
            operands: evaluation.operands.iter().map(OperandRecord::render).collect(),
        }
    }

    /// Appends a rendered operand.
    #[must_use]
    pub fn with_operand(mut self, role: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.operands.push(OperandRecord {
            role: role.into(),
            rendered: rendered.into(),
        });
        self
    }

    /// Returns the rendered operand for a role, if present.
    #[must_use]
    pub fn operand(&self, role: &str) -> Option<&str> {
        self.operands
            .iter()
            .find(|record| record.role == role)
            .map(|record| record.rendered.as_str())
    }
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for AssertionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertion `{}` failed", self.predicate)?;
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            write!(f, " ({}: {}", first.role, first.rendered)?;
            for record in operands {
                write!(f, ", {}: {}", record.role, record.rendered)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailed {}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Outcome of a single assertion.
pub type AssertResult<T = ()> = Result<T, AssertionFailed>;
