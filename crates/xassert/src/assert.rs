// crates/xassert/src/assert.rs
// ============================================================================
// Module: Free-Function Call Surface
// Description: Every predicate as a free function over the default asserter.
// Purpose: Let tests write `assert::equal(5, x)?` without building an asserter.
// Dependencies: crate::{asserter, collection, error, sink, tolerance}
// ============================================================================

//! ## Overview
//! Each function here forwards to the [`Asserter`] method of the same name on
//! an asserter bound to [`ResultSink`] with the default deltas. Failures come
//! back as `Err(AssertionFailed)`.
//!
//! ```
//! use xassert::assert;
//!
//! # fn main() -> xassert::AssertResult {
//! assert::equal("ready", "ready")?;
//! assert::approx_equal(0.1_f64 + 0.2, 0.3)?;
//! assert::contains(&3, &vec![1, 2, 3])?;
//! assert!(assert::is_true(false).is_err());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::UnwindSafe;

use crate::asserter::Asserter;
use crate::collection::Collection;
use crate::error::AssertResult;
use crate::exception::Raises;
use crate::sink::ResultSink;
use crate::tolerance::Precision;

/// Asserter backing every free function.
const DEFAULT: Asserter = Asserter::new(ResultSink);

// ============================================================================
// SECTION: Equality and Identity
// ============================================================================

/// See [`Asserter::equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `expected != actual`.
pub fn equal<T: PartialEq + fmt::Debug>(expected: T, actual: T) -> AssertResult {
    DEFAULT.equal(expected, actual)
}

/// See [`Asserter::not_equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `not_expected == actual`.
pub fn not_equal<T: PartialEq + fmt::Debug>(not_expected: T, actual: T) -> AssertResult {
    DEFAULT.not_equal(not_expected, actual)
}

/// See [`Asserter::null`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the value is `Some`.
pub fn null<T: fmt::Debug>(value: Option<T>) -> AssertResult {
    DEFAULT.null(value)
}

/// See [`Asserter::not_null`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the value is `None`.
pub fn not_null<T: fmt::Debug>(value: Option<T>) -> AssertResult {
    DEFAULT.not_null(value)
}

/// See [`Asserter::same`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] for different instances.
pub fn same<T: ?Sized>(expected: &T, actual: &T) -> AssertResult {
    DEFAULT.same(expected, actual)
}

/// See [`Asserter::not_same`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] for the same instance.
pub fn not_same<T: ?Sized>(expected: &T, actual: &T) -> AssertResult {
    DEFAULT.not_same(expected, actual)
}

/// See [`Asserter::is_type`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the runtime type is not `T`.
pub fn is_type<T: Any>(value: &dyn Any) -> AssertResult {
    DEFAULT.is_type::<T>(value)
}

/// See [`Asserter::is_not_type`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the runtime type is `T`.
pub fn is_not_type<T: Any>(value: &dyn Any) -> AssertResult {
    DEFAULT.is_not_type::<T>(value)
}

/// See [`Asserter::fail`].
///
/// # Errors
///
/// Always returns [`crate::AssertionFailed`].
pub fn fail() -> AssertResult {
    DEFAULT.fail()
}

// ============================================================================
// SECTION: Tolerance
// ============================================================================

/// See [`Asserter::approx_equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `actual` is outside the default delta.
pub fn approx_equal<F: Precision>(expected: F, actual: F) -> AssertResult {
    DEFAULT.approx_equal(expected, actual)
}

/// See [`Asserter::approx_equal_within`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `actual` is outside `delta`.
pub fn approx_equal_within<F: Precision>(expected: F, actual: F, delta: F) -> AssertResult {
    DEFAULT.approx_equal_within(expected, actual, delta)
}

/// See [`Asserter::not_approx_equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `actual` is inside the default delta.
pub fn not_approx_equal<F: Precision>(not_expected: F, actual: F) -> AssertResult {
    DEFAULT.not_approx_equal(not_expected, actual)
}

/// See [`Asserter::not_approx_equal_within`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `actual` is inside `delta`.
pub fn not_approx_equal_within<F: Precision>(
    not_expected: F,
    actual: F,
    delta: F,
) -> AssertResult {
    DEFAULT.not_approx_equal_within(not_expected, actual, delta)
}

// ============================================================================
// SECTION: Boolean
// ============================================================================

/// See [`Asserter::is_true`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the condition is false.
pub fn is_true(condition: bool) -> AssertResult {
    DEFAULT.is_true(condition)
}

/// See [`Asserter::is_false`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the condition is true.
pub fn is_false(condition: bool) -> AssertResult {
    DEFAULT.is_false(condition)
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// See [`Asserter::greater_than`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] unless `a > b`.
pub fn greater_than<T: PartialOrd + fmt::Debug>(a: T, b: T) -> AssertResult {
    DEFAULT.greater_than(a, b)
}

/// See [`Asserter::less_than`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] unless `a < b`.
pub fn less_than<T: PartialOrd + fmt::Debug>(a: T, b: T) -> AssertResult {
    DEFAULT.less_than(a, b)
}

/// See [`Asserter::greater_than_or_equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] unless `a >= b`.
pub fn greater_than_or_equal<T: PartialOrd + fmt::Debug>(a: T, b: T) -> AssertResult {
    DEFAULT.greater_than_or_equal(a, b)
}

/// See [`Asserter::less_than_or_equal`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] unless `a <= b`.
pub fn less_than_or_equal<T: PartialOrd + fmt::Debug>(a: T, b: T) -> AssertResult {
    DEFAULT.less_than_or_equal(a, b)
}

/// See [`Asserter::in_range`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `value` is outside `[min, max]`.
pub fn in_range<T: PartialOrd + fmt::Debug>(value: T, min: T, max: T) -> AssertResult {
    DEFAULT.in_range(value, min, max)
}

/// See [`Asserter::not_in_range`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when `value` is inside `[min, max]`.
pub fn not_in_range<T: PartialOrd + fmt::Debug>(value: T, min: T, max: T) -> AssertResult {
    DEFAULT.not_in_range(value, min, max)
}

// ============================================================================
// SECTION: String
// ============================================================================

/// See [`Asserter::contains_str`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the substring is absent.
pub fn contains_str(substring: &str, actual: &str) -> AssertResult {
    DEFAULT.contains_str(substring, actual)
}

/// See [`Asserter::does_not_contain_str`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the substring is present.
pub fn does_not_contain_str(substring: &str, actual: &str) -> AssertResult {
    DEFAULT.does_not_contain_str(substring, actual)
}

/// See [`Asserter::starts_with`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the prefix does not match.
pub fn starts_with(prefix: &str, actual: &str) -> AssertResult {
    DEFAULT.starts_with(prefix, actual)
}

/// See [`Asserter::ends_with`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the suffix does not match.
pub fn ends_with(suffix: &str, actual: &str) -> AssertResult {
    DEFAULT.ends_with(suffix, actual)
}

// ============================================================================
// SECTION: Collection
// ============================================================================

/// See [`Asserter::is_empty`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the collection has elements.
pub fn is_empty<C: Collection + fmt::Debug + ?Sized>(collection: &C) -> AssertResult {
    DEFAULT.is_empty(collection)
}

/// See [`Asserter::is_not_empty`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the collection is empty.
pub fn is_not_empty<C: Collection + fmt::Debug + ?Sized>(collection: &C) -> AssertResult {
    DEFAULT.is_not_empty(collection)
}

/// See [`Asserter::contains`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when no element equals `item`.
pub fn contains<C>(item: &C::Item, collection: &C) -> AssertResult
where
    C: Collection + fmt::Debug + ?Sized,
    C::Item: fmt::Debug,
{
    DEFAULT.contains(item, collection)
}

/// See [`Asserter::does_not_contain`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when an element equals `item`.
pub fn does_not_contain<C>(item: &C::Item, collection: &C) -> AssertResult
where
    C: Collection + fmt::Debug + ?Sized,
    C::Item: fmt::Debug,
{
    DEFAULT.does_not_contain(item, collection)
}

/// See [`Asserter::count_equals`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the count differs.
pub fn count_equals<C: Collection + fmt::Debug + ?Sized>(
    expected_count: usize,
    collection: &C,
) -> AssertResult {
    DEFAULT.count_equals(expected_count, collection)
}

/// See [`Asserter::count_not_equals`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the count matches.
pub fn count_not_equals<C: Collection + fmt::Debug + ?Sized>(
    expected_count: usize,
    collection: &C,
) -> AssertResult {
    DEFAULT.count_not_equals(expected_count, collection)
}

// ============================================================================
// SECTION: Exception Expectation
// ============================================================================

/// See [`Asserter::throws`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] unless the action raises an `E`.
pub fn throws<E: Error + 'static, R: Raises>(action: impl FnOnce() -> R) -> AssertResult {
    DEFAULT.throws::<E, R>(action)
}

/// See [`Asserter::panics`].
///
/// # Errors
///
/// Returns [`crate::AssertionFailed`] when the action returns normally.
pub fn panics<R>(action: impl FnOnce() -> R + UnwindSafe) -> AssertResult {
    DEFAULT.panics(action)
}
