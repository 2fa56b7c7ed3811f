// crates/xassert/src/predicate.rs
// ============================================================================
// Module: Predicate Names
// Description: Stable identifiers for every assertion predicate.
// Purpose: Label evaluations and failures without carrying formatted text.
// Dependencies: serde::{Deserialize, Serialize}, std::fmt
// ============================================================================

//! ## Overview
//! Every assertion forwards a [`Predicate`] to its sink so diagnostics, logs,
//! and recording sinks can identify the check without parsing messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Predicate Groups
// ============================================================================

/// Cohesive predicate families.
///
/// # Invariants
/// - Variants are stable for log and diagnostic labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateGroup {
    /// Value equality, null checks, identity, runtime type, manual failure.
    Equality,
    /// Approximate floating-point equality.
    Tolerance,
    /// True/false checks.
    Boolean,
    /// Generic ordering and range containment.
    Ordering,
    /// Substring, prefix and suffix checks.
    String,
    /// Emptiness, membership and count checks.
    Collection,
    /// Expected errors and panics raised by user code.
    Exception,
}

impl PredicateGroup {
    /// Returns a stable label for the group.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equality => "equality",
            Self::Tolerance => "tolerance",
            Self::Boolean => "boolean",
            Self::Ordering => "ordering",
            Self::String => "string",
            Self::Collection => "collection",
            Self::Exception => "exception",
        }
    }
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Named assertion predicate.
///
/// # Invariants
/// - Variants are stable for log and diagnostic labeling.
/// - Each variant belongs to exactly one [`PredicateGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Values compare equal.
    Equal,
    /// Values compare unequal.
    NotEqual,
    /// Value is `None`.
    Null,
    /// Value is `Some`.
    NotNull,
    /// References denote the same instance.
    Same,
    /// References denote distinct instances.
    NotSame,
    /// Runtime type matches.
    IsType,
    /// Runtime type differs.
    IsNotType,
    /// Unconditional failure.
    Fail,
    /// Float lies within the tolerance interval.
    ApproxEqual,
    /// Float lies outside the tolerance interval.
    NotApproxEqual,
    /// Condition is true.
    True,
    /// Condition is false.
    False,
    /// Left operand orders strictly after the right.
    GreaterThan,
    /// Left operand orders strictly before the right.
    LessThan,
    /// Left operand orders after or equal to the right.
    GreaterThanOrEqual,
    /// Left operand orders before or equal to the right.
    LessThanOrEqual,
    /// Value lies within the inclusive range.
    InRange,
    /// Value lies outside the inclusive range.
    NotInRange,
    /// String contains a substring.
    ContainsStr,
    /// String does not contain a substring.
    DoesNotContainStr,
    /// String starts with a prefix.
    StartsWith,
    /// String ends with a suffix.
    EndsWith,
    /// Collection has no elements.
    IsEmpty,
    /// Collection has at least one element.
    IsNotEmpty,
    /// Collection holds an item.
    Contains,
    /// Collection does not hold an item.
    DoesNotContain,
    /// Collection count matches.
    CountEquals,
    /// Collection count differs.
    CountNotEquals,
    /// Action returns an error of the expected kind.
    Throws,
    /// Action panics.
    Panics,
}

impl Predicate {
    /// Returns a stable label for the predicate.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Null => "null",
            Self::NotNull => "not_null",
            Self::Same => "same",
            Self::NotSame => "not_same",
            Self::IsType => "is_type",
            Self::IsNotType => "is_not_type",
            Self::Fail => "fail",
            Self::ApproxEqual => "approx_equal",
            Self::NotApproxEqual => "not_approx_equal",
            Self::True => "true",
            Self::False => "false",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::GreaterThanOrEqual => "greater_than_or_equal",
            Self::LessThanOrEqual => "less_than_or_equal",
            Self::InRange => "in_range",
            Self::NotInRange => "not_in_range",
            Self::ContainsStr => "contains_str",
            Self::DoesNotContainStr => "does_not_contain_str",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
            Self::Contains => "contains",
            Self::DoesNotContain => "does_not_contain",
            Self::CountEquals => "count_equals",
            Self::CountNotEquals => "count_not_equals",
            Self::Throws => "throws",
            Self::Panics => "panics",
        }
    }

    /// Returns the group this predicate belongs to.
    #[must_use]
    pub const fn group(self) -> PredicateGroup {
        match self {
            Self::Equal
            | Self::NotEqual
            | Self::Null
            | Self::NotNull
            | Self::Same
            | Self::NotSame
            | Self::IsType
            | Self::IsNotType
            | Self::Fail => PredicateGroup::Equality,
            Self::ApproxEqual | Self::NotApproxEqual => PredicateGroup::Tolerance,
            Self::True | Self::False => PredicateGroup::Boolean,
            Self::GreaterThan
            | Self::LessThan
            | Self::GreaterThanOrEqual
            | Self::LessThanOrEqual
            | Self::InRange
            | Self::NotInRange => PredicateGroup::Ordering,
            Self::ContainsStr | Self::DoesNotContainStr | Self::StartsWith | Self::EndsWith => {
                PredicateGroup::String
            }
            Self::IsEmpty
            | Self::IsNotEmpty
            | Self::Contains
            | Self::DoesNotContain
            | Self::CountEquals
            | Self::CountNotEquals => PredicateGroup::Collection,
            Self::Throws | Self::Panics => PredicateGroup::Exception,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
