//! # Forward List
//!
//! A singly linked list with a sentinel head, backed by a node arena.
//!
//! ## Core Components
//!
//! - [`list::ForwardList`]: the list. Front insertion and removal, insertion
//!   and removal after a cursor, copy, swap, and lexicographic comparison.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: forward-only positions in
//!   a list, used for traversal and as anchors for `insert_after` /
//!   `erase_after`. The two compare equal when they name the same position.
//! - [`traits`]: the `Link` abstraction shared by the sentinel head and the
//!   value nodes.
//! - [`iter`]: borrowing and owning iterators.
//!
//! ## Cursor validity
//!
//! Cursors are plain `Copy` handles. Each one records the list that issued it
//! and, for element positions, the generation of the arena slot it names.
//! A list rejects (by panicking) cursors issued by another list and cursors
//! whose element has been removed, so a dangling position is a detected bug
//! rather than a memory error.
//!
//! - Removing an element makes cursors to that element stale.
//! - [`ForwardList::clear`] makes all element cursors stale.
//! - [`ForwardList::assign`] and `clone_from` replace the list identity, so
//!   every earlier cursor is rejected.
//! - [`ForwardList::swap`] moves the identity along with the elements.
//!
//! ## Examples
//!
//! ```
//! use mola_forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//! let first = list.begin();
//!
//! let inserted = list.insert_after(first, 99);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 99, 2, 3]);
//! assert_eq!(list[inserted], 99);
//!
//! let after = list.erase_after(first);
//! assert_eq!(list[after], 2);
//! assert_eq!(list, ForwardList::from([1, 2, 3]));
//!
//! assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]));
//! ```

pub mod traits;
pub mod node;
pub mod cursor;
pub mod list;
pub mod iter;
pub mod error;
mod arena;
mod cmp;

pub use cursor::{Cursor, CursorMut};
pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{swap, ForwardList};

#[cfg(test)]
mod tests;
