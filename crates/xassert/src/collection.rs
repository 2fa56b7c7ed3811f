// crates/xassert/src/collection.rs
// ============================================================================
// Module: Collection Predicates
// Description: Emptiness, membership and count checks.
// Purpose: Evaluate collection predicates over a small collection contract.
// Dependencies: crate::{asserter, error, predicate, sink}, smallvec, std::collections
// ============================================================================

//! ## Overview
//! [`Collection`] exposes the two facts the collection predicates need: an
//! element count and a membership test under the element type's equality.
//! Maps are collections of `(key, value)` pairs; a pair is a member when the
//! key is present and its value compares equal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::LinkedList;
use std::collections::VecDeque;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;

use smallvec::Array;
use smallvec::SmallVec;

use crate::asserter::Asserter;
use crate::error::AssertResult;
use crate::predicate::Predicate;
use crate::sink::FailureSink;
use crate::sink::Operand;

// ============================================================================
// SECTION: Collection Trait
// ============================================================================

/// Finite collection with a count and a membership test.
pub trait Collection {
    /// Element type.
    type Item;

    /// Returns the number of elements.
    fn count(&self) -> usize;

    /// Returns whether `item` is an element.
    fn has_item(&self, item: &Self::Item) -> bool;
}

impl<T: PartialEq> Collection for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> Collection for [T; N] {
    type Item = T;

    fn count(&self) -> usize {
        N
    }

    fn has_item(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Collection for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Collection for VecDeque<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> Collection for LinkedList<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, H: BuildHasher> Collection for HashSet<T, H> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<K: Eq + Hash, V: PartialEq, H: BuildHasher> Collection for HashMap<K, V, H> {
    type Item = (K, V);

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, (key, value): &(K, V)) -> bool {
        self.get(key) == Some(value)
    }
}

impl<K: Ord, V: PartialEq> Collection for BTreeMap<K, V> {
    type Item = (K, V);

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, (key, value): &(K, V)) -> bool {
        self.get(key) == Some(value)
    }
}

impl<A: Array> Collection for SmallVec<A>
where
    A::Item: PartialEq,
{
    type Item = A::Item;

    fn count(&self) -> usize {
        self.len()
    }

    fn has_item(&self, item: &A::Item) -> bool {
        self.as_slice().contains(item)
    }
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

impl<S: FailureSink> Asserter<S> {
    /// Asserts that a collection has no elements.
    ///
    /// # Errors
    ///
    /// Signals a failure when the collection has elements.
    pub fn is_empty<C>(&self, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
    {
        let count = collection.count();
        self.signal(
            Predicate::IsEmpty,
            count == 0,
            &[Operand::new("count", &count), Operand::new("collection", &collection)],
        )
    }

    /// Asserts that a collection has at least one element.
    ///
    /// # Errors
    ///
    /// Signals a failure when the collection is empty.
    pub fn is_not_empty<C>(&self, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
    {
        let count = collection.count();
        self.signal(
            Predicate::IsNotEmpty,
            count != 0,
            &[Operand::new("count", &count), Operand::new("collection", &collection)],
        )
    }

    /// Asserts that `collection` holds `item`.
    ///
    /// # Errors
    ///
    /// Signals a failure when no element equals `item`.
    pub fn contains<C>(&self, item: &C::Item, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
        C::Item: fmt::Debug,
    {
        self.signal(
            Predicate::Contains,
            collection.has_item(item),
            &[Operand::new("item", item), Operand::new("collection", &collection)],
        )
    }

    /// Asserts that `collection` does not hold `item`.
    ///
    /// # Errors
    ///
    /// Signals a failure when an element equals `item`.
    pub fn does_not_contain<C>(&self, item: &C::Item, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
        C::Item: fmt::Debug,
    {
        self.signal(
            Predicate::DoesNotContain,
            !collection.has_item(item),
            &[Operand::new("item", item), Operand::new("collection", &collection)],
        )
    }

    /// Asserts that `collection` has exactly `expected_count` elements.
    ///
    /// # Errors
    ///
    /// Signals a failure when the count differs.
    pub fn count_equals<C>(&self, expected_count: usize, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
    {
        let count = collection.count();
        self.signal(
            Predicate::CountEquals,
            count == expected_count,
            &[
                Operand::new("expected_count", &expected_count),
                Operand::new("count", &count),
                Operand::new("collection", &collection),
            ],
        )
    }

    /// Asserts that `collection` does not have `expected_count` elements.
    ///
    /// # Errors
    ///
    /// Signals a failure when the count matches.
    pub fn count_not_equals<C>(&self, expected_count: usize, collection: &C) -> AssertResult
    where
        C: Collection + fmt::Debug + ?Sized,
    {
        let count = collection.count();
        self.signal(
            Predicate::CountNotEquals,
            count != expected_count,
            &[
                Operand::new("expected_count", &expected_count),
                Operand::new("count", &count),
                Operand::new("collection", &collection),
            ],
        )
    }
}
