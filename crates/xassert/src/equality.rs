// crates/xassert/src/equality.rs
// ============================================================================
// Module: Equality and Identity Predicates
// Description: Value equality, null checks, identity, runtime type, fail.
// Purpose: Evaluate equality-family predicates and forward them to the sink.
// Dependencies: crate::{asserter, error, predicate, sink}, std::{any, fmt, ptr}
// ============================================================================

//! ## Overview
//! Equality uses `PartialEq` as-is. `Option` stands in for null, so
//! `equal(None::<i32>, None)` passes. Identity compares addresses with
//! [`std::ptr::eq`] and ignores values entirely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::any::type_name;
use std::fmt;
use std::ptr;

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

// ============================================================================
// SECTION: Predicates
// ============================================================================

#[allow(
    clippy::needless_pass_by_value,
    reason = "Operands are taken by value so call sites can pass literals and temporaries."
)]
impl<S: FailureSink> Asserter<S> {
    /// Asserts that two values are equal.
    ///
    /// Use [`Asserter::approx_equal`] for floating-point values.
    ///
    /// # Errors
    ///
    /// Signals a failure when `expected != actual`.
    pub fn equal<T: PartialEq + fmt::Debug>(&self, expected: T, actual: T) -> AssertResult {
        let passed = expected == actual;
        self.signal(
            Predicate::Equal,
            passed,
            &[Operand::new("expected", &expected), Operand::new("actual", &actual)],
        )
    }

    /// Asserts that two values are not equal.
    ///
    /// # Errors
    ///
    /// Signals a failure when `not_expected == actual`.
    pub fn not_equal<T: PartialEq + fmt::Debug>(
        &self,
        not_expected: T,
        actual: T,
    ) -> AssertResult {
        let passed = not_expected != actual;
        self.signal(
            Predicate::NotEqual,
            passed,
            &[Operand::new("not_expected", &not_expected), Operand::new("actual", &actual)],
        )
    }

    /// Asserts that a value is `None`.
    ///
    /// # Errors
    ///
    /// Signals a failure when the value is `Some`.
    pub fn null<T: fmt::Debug>(&self, value: Option<T>) -> AssertResult {
        self.signal(Predicate::Null, value.is_none(), &[Operand::new("value", &value)])
    }

    /// Asserts that a value is `Some`.
    ///
    /// # Errors
    ///
    /// Signals a failure when the value is `None`.
    pub fn not_null<T: fmt::Debug>(&self, value: Option<T>) -> AssertResult {
        self.signal(Predicate::NotNull, value.is_some(), &[Operand::new("value", &value)])
    }

    /// Asserts that two references point at the same instance.
    ///
    /// Zero-sized values may share an address even when they are distinct
    /// bindings.
    ///
    /// # Errors
    ///
    /// Signals a failure when the references denote different instances.
    pub fn same<T: ?Sized>(&self, expected: &T, actual: &T) -> AssertResult {
        let expected_addr: *const T = expected;
        let actual_addr: *const T = actual;
        self.signal(
            Predicate::Same,
            ptr::eq(expected, actual),
            &[Operand::new("expected", &expected_addr), Operand::new("actual", &actual_addr)],
        )
    }

    /// Asserts that two references point at different instances.
    ///
    /// # Errors
    ///
    /// Signals a failure when the references denote the same instance.
    pub fn not_same<T: ?Sized>(&self, expected: &T, actual: &T) -> AssertResult {
        let expected_addr: *const T = expected;
        let actual_addr: *const T = actual;
        self.signal(
            Predicate::NotSame,
            !ptr::eq(expected, actual),
            &[Operand::new("expected", &expected_addr), Operand::new("actual", &actual_addr)],
        )
    }

    /// Asserts that the runtime type of `value` is exactly `T`.
    ///
    /// Pass the contents of a `Box<dyn Any>` with `boxed.as_ref()`; `&boxed`
    /// would check the box itself.
    ///
    /// # Errors
    ///
    /// Signals a failure when the runtime type differs.
    pub fn is_type<T: Any>(&self, value: &dyn Any) -> AssertResult {
        let expected = type_name::<T>();
        let actual = Any::type_id(value);
        self.signal(
            Predicate::IsType,
            value.is::<T>(),
            &[Operand::new("expected_type", &expected), Operand::new("actual_type_id", &actual)],
        )
    }

    /// Asserts that the runtime type of `value` is not `T`.
    ///
    /// # Errors
    ///
    /// Signals a failure when the runtime type is `T`.
    pub fn is_not_type<T: Any>(&self, value: &dyn Any) -> AssertResult {
        let excluded = type_name::<T>();
        let actual = Any::type_id(value);
        self.signal(
            Predicate::IsNotType,
            !value.is::<T>(),
            &[Operand::new("excluded_type", &excluded), Operand::new("actual_type_id", &actual)],
        )
    }

    /// Fails unconditionally; marks code paths that must not be reached.
    ///
    /// # Errors
    ///
    /// Always signals a failure.
    pub fn fail(&self) -> AssertResult {
        self.signal(Predicate::Fail, false, &[])
    }
}
