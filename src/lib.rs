//! Forward (singly linked) list collections.
//!
//! See [`linked_list::forward`] for the list itself.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{Cursor, CursorMut, ForwardList, ListError};
