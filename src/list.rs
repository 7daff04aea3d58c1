//! Comparator-ordered sequence with bounded range queries.
//!
//! This module provides [`OrderedList`], a sequence kept in ascending order
//! by a pluggable [`Comparator`], and [`RangeIter`], a bidirectional cursor
//! over a bounded portion of the sequence.
//!
//! # Overview
//!
//! `OrderedList` trades asymptotic guarantees for simplicity: insertion is a
//! linear scan with an O(1) tail fast path, aimed at small sequences. Small
//! lists (up to 8 elements) are stored inline without heap allocation.
//! Duplicate keys are permitted and keep their relative insertion order.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity        |
//! |--------------|-------------------|
//! | `insert`     | O(n), O(1) append when the value is the new maximum |
//! | `remove`     | O(n)              |
//! | `contains`   | O(n)              |
//! | `range`      | O(n + k)          |
//! | `range_iter` | O(n) to anchor, O(1) per step |
//! | `len`        | O(1)              |
//! | `iter`       | O(1) + O(n)       |
//!
//! # Interval Conventions
//!
//! [`OrderedList::range`] returns the **half-open** interval `[start, end)`.
//! [`RangeIter`] re-validates every step against the **strictly open**
//! interval `(start, end)`. The asymmetry is deliberate and part of the
//! observable contract: the anchor element returned by
//! [`RangeIter::value`] at creation may compare equal to `start`, but a
//! later `prev` landing back on it is terminal. See
//! [`OrderedList::range_iter`] for details.
//!
//! # Examples
//!
//! ```rust
//! use orderedlist::list::OrderedList;
//!
//! let mut list = OrderedList::new();
//! list.insert("c");
//! list.insert("a");
//! list.insert("b");
//!
//! let window: Vec<&&str> = list.range(&"a", &"c");
//! assert_eq!(window, [&"a", &"b"]);
//! ```

use crate::comparator::{Comparator, NaturalOrder};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Number of elements stored inline before the backing store spills to the
/// heap.
const INLINE_CAPACITY: usize = 8;

/// A sequence of elements maintained in ascending comparator order.
///
/// Elements are owned by the list from `insert` until `remove` (or until the
/// list is dropped). The comparator `C` is fixed at construction and must be
/// a strict total order over every value the list will ever hold; see the
/// [`Comparator`] contract.
///
/// Equal-comparing elements are kept in insertion order (stable insert).
///
/// The list is single-threaded by design: no internal synchronization is
/// provided, and callers needing shared access must wrap the whole list in
/// their own lock.
///
/// # Examples
///
/// ```rust
/// use orderedlist::list::OrderedList;
///
/// let mut list = OrderedList::new();
/// list.insert(3);
/// list.insert(1);
/// list.insert(2);
///
/// let front_to_back: Vec<&i32> = list.iter().collect();
/// assert_eq!(front_to_back, [&1, &2, &3]);
/// ```
///
/// With a closure comparator:
///
/// ```rust
/// use orderedlist::list::OrderedList;
///
/// let mut by_length = OrderedList::with_comparator(
///     |left: &&str, right: &&str| left.len().cmp(&right.len()),
/// );
/// by_length.insert("aaa");
/// by_length.insert("b");
/// assert_eq!(by_length.iter().collect::<Vec<_>>(), [&"b", &"aaa"]);
/// ```
#[derive(Clone)]
pub struct OrderedList<T, C = NaturalOrder> {
    entries: SmallVec<[T; INLINE_CAPACITY]>,
    comparator: C,
}

impl<T> OrderedList<T> {
    /// Creates an empty list ordered by [`NaturalOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedlist::list::OrderedList;
    ///
    /// let list: OrderedList<i32> = OrderedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedList<T, C> {
    /// Creates an empty list ordered by the given comparator.
    ///
    /// The comparator is fixed for the life of the list.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            entries: SmallVec::new(),
            comparator,
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the elements in ascending comparator order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T, C: Comparator<T>> OrderedList<T, C> {
    /// Inserts a value, keeping the sequence sorted.
    ///
    /// If the value is strictly greater than the current maximum (or the
    /// list is empty) it is appended directly. Otherwise the list is scanned
    /// from the front and the value is placed immediately before the first
    /// strictly greater element, so equal-comparing values keep their
    /// relative insertion order.
    ///
    /// # Complexity
    ///
    /// O(n) worst case; O(1) comparisons for the append fast path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedlist::list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.insert(2);
    /// list.insert(1);
    /// list.insert(3); // tail fast path
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn insert(&mut self, value: T) {
        // Empty list or new maximum: append without scanning.
        let append = match self.entries.last() {
            None => true,
            Some(last) => self.comparator.compare(last, &value) == Ordering::Less,
        };
        if append {
            self.entries.push(value);
            return;
        }

        let position = self
            .entries
            .iter()
            .position(|entry| self.comparator.compare(entry, &value) == Ordering::Greater);

        match position {
            Some(position) => self.entries.insert(position, value),
            // Nothing compares greater (the all-equal case): append.
            None => self.entries.push(value),
        }
    }

    /// Removes the first element comparing equal to `key` and returns it.
    ///
    /// `key` is used for comparison only; it need not be the stored
    /// instance. Returns `None` without touching the sequence when no
    /// element compares equal; absence is not an error.
    ///
    /// # Complexity
    ///
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedlist::list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&2), None);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let position = self
            .entries
            .iter()
            .position(|entry| self.comparator.compare(entry, key) == Ordering::Equal)?;
        Some(self.entries.remove(position))
    }

    /// Returns `true` if some element compares equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(n).
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.entries
            .iter()
            .any(|entry| self.comparator.compare(entry, key) == Ordering::Equal)
    }

    /// Returns a snapshot of the half-open interval `[start, end)`.
    ///
    /// Every stored element `e` with `compare(e, start) >= 0` and
    /// `compare(e, end) < 0` is included, in ascending order. Neither bound
    /// needs to be present in the list. When no element is at or after
    /// `start` the snapshot is empty.
    ///
    /// # Complexity
    ///
    /// O(n) to locate the start plus O(k) for the k collected elements; the
    /// collection scan stops at the first element at or past `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedlist::list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// for value in [10, 20, 30, 40] {
    ///     list.insert(value);
    /// }
    /// assert_eq!(list.range(&15, &40), [&20, &30]); // 40 itself excluded
    /// assert_eq!(list.range(&50, &90), Vec::<&i32>::new());
    /// ```
    #[must_use]
    pub fn range(&self, start: &T, end: &T) -> Vec<&T> {
        let Some(anchor) = self.first_at_or_after(start) else {
            return Vec::new();
        };

        self.entries[anchor..]
            .iter()
            .take_while(|entry| self.comparator.compare(entry, end) == Ordering::Less)
            .collect()
    }

    /// Returns a cursor anchored at the first element at or after `start`,
    /// or `None` when the list is empty or no such element exists.
    ///
    /// The anchor satisfies `compare(anchor, start) >= 0` and is returned by
    /// [`RangeIter::value`] as-is, even when it compares equal to `start`
    /// or falls at or past `end`. Stepping with [`RangeIter::next`] or
    /// [`RangeIter::prev`] re-validates against the strictly open interval
    /// `(start, end)`, so an anchor equal to `start` is never reachable
    /// again once stepped off. This asymmetry with [`range`](Self::range) is
    /// part of the contract.
    ///
    /// The cursor borrows the list: the borrow checker rejects structural
    /// mutation while any cursor is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedlist::list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// for value in ["a", "b", "c"] {
    ///     list.insert(value);
    /// }
    ///
    /// let cursor = list.range_iter(&"b", &"z").unwrap();
    /// assert_eq!(cursor.value(), &"b");
    /// let cursor = cursor.next().unwrap();
    /// assert_eq!(cursor.value(), &"c");
    /// // "b" fails the strict lower bound on the way back.
    /// assert!(cursor.prev().is_none());
    /// ```
    #[must_use]
    pub fn range_iter<'a>(&'a self, start: &'a T, end: &'a T) -> Option<RangeIter<'a, T, C>> {
        let anchor = self.first_at_or_after(start)?;
        Some(RangeIter {
            list: self,
            position: anchor,
            start,
            end,
        })
    }

    /// Position of the first element with `compare(entry, key) >= 0`.
    fn first_at_or_after(&self, key: &T) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| self.comparator.compare(entry, key) != Ordering::Less)
    }
}

impl<T, C: Default> Default for OrderedList<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedList<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T, C> IntoIterator for OrderedList<T, C> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE_CAPACITY]>;

    /// Consumes the list, releasing ownership of the elements in ascending
    /// order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Diagnostic dump of the sequence. The format is not stable.
impl<T: fmt::Display, C> fmt::Display for OrderedList<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for entry in &self.entries {
            write!(formatter, " {entry}")?;
        }
        write!(formatter, " ]")
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedList<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.entries.iter()).finish()
    }
}

/// A read-only cursor over one bounded traversal of an [`OrderedList`].
///
/// A cursor always sits on an element; exhaustion is reported as `None`
/// from [`next`](Self::next) / [`prev`](Self::prev), so [`value`](Self::value)
/// is total. Both stepping directions are terminal: once `None` is returned
/// there is no wraparound or re-entry, and stepping is re-checked against
/// the strictly open interval `(start, end)` fixed at creation.
///
/// The cursor is `Copy`; keeping an old cursor around after stepping is
/// cheap and valid.
pub struct RangeIter<'a, T, C = NaturalOrder> {
    list: &'a OrderedList<T, C>,
    position: usize,
    start: &'a T,
    end: &'a T,
}

impl<'a, T, C: Comparator<T>> RangeIter<'a, T, C> {
    /// Returns the element under the cursor.
    ///
    /// The reference borrows the list, not the cursor, so it stays valid
    /// after the cursor is stepped or dropped.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.list.entries[self.position]
    }

    /// Steps to the structural successor, or `None` when the successor is
    /// off the end of the list or outside the open interval `(start, end)`.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.step_to(self.position.checked_add(1)?)
    }

    /// Steps to the structural predecessor, or `None` when the predecessor
    /// is off the front of the list or outside the open interval
    /// `(start, end)`.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.step_to(self.position.checked_sub(1)?)
    }

    fn step_to(&self, position: usize) -> Option<Self> {
        self.within_range(position).then(|| Self {
            position,
            ..*self
        })
    }

    /// Strictly open bound check: `start < entry < end`.
    fn within_range(&self, position: usize) -> bool {
        let Some(entry) = self.list.entries.get(position) else {
            return false;
        };

        self.list.comparator.compare(entry, self.start) == Ordering::Greater
            && self.list.comparator.compare(entry, self.end) == Ordering::Less
    }
}

impl<T, C> Clone for RangeIter<'_, T, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for RangeIter<'_, T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for RangeIter<'_, T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RangeIter")
            .field("position", &self.position)
            .field("start", self.start)
            .field("end", self.end)
            .finish_non_exhaustive()
    }
}
