//! # orderedlist
//!
//! A comparator-ordered sequence with half-open range queries and
//! bidirectional range cursors.
//!
//! ## Overview
//!
//! This library provides one data structure, [`OrderedList`](list::OrderedList):
//! a sequence kept in ascending order by a pluggable
//! [`Comparator`](comparator::Comparator), aimed at small collections where
//! a linear insertion scan beats the constant factors of a balanced tree.
//! It offers:
//!
//! - **Stable sorted insertion**: equal-comparing values keep their
//!   relative insertion order; a new maximum is appended without a scan.
//! - **Half-open range snapshots**: `range(start, end)` materializes
//!   `[start, end)` by comparator, with neither bound required to exist.
//! - **Bounded cursors**: `range_iter(start, end)` anchors a
//!   [`RangeIter`](list::RangeIter) that steps forward and backward,
//!   re-validating every step against the open interval `(start, end)`.
//! - **Pluggable ordering**: order by the element's own [`Ord`] via
//!   [`NaturalOrder`](comparator::NaturalOrder), or by any
//!   `Fn(&T, &T) -> Ordering` closure.
//!
//! The container is single-threaded and unsynchronized; callers that share
//! it across threads must wrap it in their own lock.
//!
//! ## Example
//!
//! ```rust
//! use orderedlist::prelude::*;
//!
//! let mut list = OrderedList::new();
//! for word in ["c", "a", "b", "aa", "1"] {
//!     list.insert(word);
//! }
//!
//! assert_eq!(list.range(&"1", &"b"), [&"1", &"a", &"aa"]);
//!
//! let cursor = list.range_iter(&"b", &"z").unwrap();
//! assert_eq!(cursor.value(), &"b");
//! assert_eq!(cursor.next().unwrap().value(), &"c");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use orderedlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{Comparator, NaturalOrder};
    pub use crate::list::{OrderedList, RangeIter};
}

pub mod comparator;
pub mod list;
