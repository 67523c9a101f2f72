//! Linked list collections.
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::linked_list::forward::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//!
//! let pos = list.begin();
//! let inserted = list.insert_after(pos, 99);
//! assert_eq!(list[inserted], 99);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 99, 2, 3]);
//!
//! list.erase_after(pos);
//! assert_eq!(list, ForwardList::from([1, 2, 3]));
//! ```
pub mod forward;
