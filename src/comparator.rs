//! Comparison capability for ordered containers.
//!
//! This module provides [`Comparator`], the pluggable ordering seam used by
//! [`OrderedList`](crate::list::OrderedList), together with [`NaturalOrder`],
//! the zero-sized comparator that delegates to [`Ord`].
//!
//! # Comparator Contract
//!
//! A comparator must be a **strict total order** over every value inserted
//! into one list instance, for the whole life of that instance. The list
//! performs no consistency checking: an inconsistent comparator (one whose
//! results change over time, or that is not transitive) silently corrupts
//! the ordering of the list. A comparator that panics is a caller bug; the
//! panic propagates unchanged and is never trapped or substituted with a
//! default result.
//!
//! # Two Styles, One Trait
//!
//! Both comparator styles are supported through the same trait:
//!
//! - **Capability**: the element type knows how to order itself, via
//!   [`NaturalOrder`] and an [`Ord`] bound.
//! - **Free function**: any `Fn(&T, &T) -> Ordering` closure is a
//!   [`Comparator`] through a blanket implementation, so an ad-hoc ordering
//!   can be supplied at construction time.
//!
//! # Examples
//!
//! ```rust
//! use orderedlist::comparator::{Comparator, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! let natural = NaturalOrder;
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! // Closures are comparators too: order by string length.
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"aa", &"b"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total-order comparison between two values of the same domain.
///
/// Implementations must define a strict total order over the set of values
/// ever inserted into one list instance and must stay consistent for the
/// life of that instance; see the [module docs](self) for the full contract.
pub trait Comparator<T> {
    /// Compares `left` against `right`, returning `Less`, `Equal`, or
    /// `Greater`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Comparator that delegates to the element type's [`Ord`] implementation.
///
/// This is the capability style: "this type knows how to compare itself to
/// another value of compatible type". It is the default comparator of
/// [`OrderedList`](crate::list::OrderedList).
///
/// # Examples
///
/// ```rust
/// use orderedlist::comparator::{Comparator, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&"a", &"aa"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Any ordering closure is a comparator.
impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn natural_order_matches_ord(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: Ordering,
    ) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    fn natural_order_on_strings_is_lexicographic() {
        assert_eq!(NaturalOrder.compare(&"1", &"a"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"a", &"aa"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"aa", &"b"), Ordering::Less);
    }

    #[rstest]
    fn closure_comparator_inverts_order() {
        let reversed = |left: &i32, right: &i32| right.cmp(left);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.compare(&2, &1), Ordering::Less);
        assert_eq!(reversed.compare(&2, &2), Ordering::Equal);
    }

    #[rstest]
    fn closure_comparator_can_ignore_parts_of_the_value() {
        let by_key = |left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0);
        assert_eq!(by_key.compare(&(1, 'a'), &(1, 'z')), Ordering::Equal);
        assert_eq!(by_key.compare(&(1, 'z'), &(2, 'a')), Ordering::Less);
    }
}
