// crates/xassert/src/exception.rs
// ============================================================================
// Module: Exception Expectation Predicates
// Description: Expect an action to return an error of a kind, or to panic.
// Purpose: Consume expected failures raised by user code and report mismatches.
// Dependencies: crate::{asserter, error, predicate, sink}, std::{any, error, panic}
// ============================================================================

//! ## Overview
//! [`Asserter::throws`] runs an action whose result implements [`Raises`] and
//! passes when the raised error itself is an `E`; a wrapper whose cause is an
//! `E` does not match. [`Asserter::panics`] passes when the action unwinds.
//! Both are the only predicates that consume a failure raised by user code;
//! a matching failure is swallowed and everything else becomes an assertion
//! failure.
//!
//! ```
//! use std::num::ParseIntError;
//!
//! use xassert::Asserter;
//!
//! # fn main() -> xassert::AssertResult {
//! let check: Asserter = Asserter::default();
//! check.throws::<ParseIntError, _>(|| "seven".parse::<u8>())?;
//! assert!(check.throws::<ParseIntError, _>(|| "7".parse::<u8>()).is_err());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::any::type_name;
use std::error::Error;
use std::panic;
use std::panic::UnwindSafe;

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

// ============================================================================
// SECTION: Raised Errors
// ============================================================================

/// Boxed error raised by an action.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Outcome of an action that may raise an error.
pub trait Raises {
    /// Returns the raised error, or `None` when the action succeeded.
    fn into_raised(self) -> Option<BoxError>;
}

impl Raises for () {
    fn into_raised(self) -> Option<BoxError> {
        None
    }
}

impl<T, X: Into<BoxError>> Raises for Result<T, X> {
    fn into_raised(self) -> Option<BoxError> {
        self.err().map(Into::into)
    }
}

/// Returns whether the raised error is of kind `E`.
fn raised_kind_is<E: Error + 'static>(raised: Option<&BoxError>) -> bool {
    raised.is_some_and(|error| {
        let error: &(dyn Error + 'static) = &**error;
        error.is::<E>()
    })
}

/// Renders a panic payload when it carries a message.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "<non-string panic payload>".to_string()
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

impl<S: FailureSink> Asserter<S> {
    /// Asserts that `action` raises an error of kind `E`.
    ///
    /// Name the result type with `_`: `throws::<ParseIntError, _>(...)`.
    /// Returning `()` or `Ok` counts as raising nothing.
    ///
    /// # Errors
    ///
    /// Signals a failure when nothing is raised or the raised error is of
    /// another kind. Causes reachable through `source()` are not inspected.
    pub fn throws<E, R>(&self, action: impl FnOnce() -> R) -> AssertResult
    where
        E: Error + 'static,
        R: Raises,
    {
        let raised = action().into_raised();
        let passed = raised_kind_is::<E>(raised.as_ref());
        let expected = type_name::<E>();
        self.signal(
            Predicate::Throws,
            passed,
            &[Operand::new("expected_kind", &expected), Operand::new("raised", &raised)],
        )
    }

    /// Asserts that `action` panics. The panic is caught and consumed.
    ///
    /// Wrap captured state in [`std::panic::AssertUnwindSafe`] when the
    /// closure is not unwind safe. The global panic hook still runs, so the
    /// panic message appears in captured test output.
    ///
    /// # Errors
    ///
    /// Signals a failure when the action returns normally.
    pub fn panics<R>(&self, action: impl FnOnce() -> R + UnwindSafe) -> AssertResult {
        let payload = panic::catch_unwind(action).err().map(|payload| panic_message(&*payload));
        self.signal(Predicate::Panics, payload.is_some(), &[Operand::new("panic", &payload)])
    }
}
