use mola_forward_list_derive::Node;

use super::traits::{Link, SlotIndex};

/// A link in a forward list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardLink {
    next: Option<SlotIndex>,
}

impl Link for ForwardLink {
    #[inline]
    fn next(&self) -> Option<SlotIndex> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<SlotIndex>) {
        self.next = next;
    }
}

/// The sentinel in front of the first node. It owns the chain but holds no
/// element, so it never shares a layout with a value node.
#[derive(Node, Debug, Default)]
#[node(crate_path = "crate")]
pub(crate) struct Head {
    link: ForwardLink,
}

/// A node holding one element.
#[derive(Node, Debug)]
#[node(crate_path = "crate")]
pub(crate) struct ForwardNode<T> {
    link: ForwardLink,
    data: T,
}

impl<T> ForwardNode<T> {
    #[inline]
    pub(crate) fn new(data: T, next: Option<SlotIndex>) -> Self {
        Self {
            link: ForwardLink { next },
            data,
        }
    }
}
