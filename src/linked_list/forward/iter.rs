use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::arena::{Arena, Slot};
use super::list::ForwardList;
use super::node::ForwardNode;
use super::traits::{Link, NodeWithData, SlotIndex};

/// An iterator over the elements of a [`ForwardList`], front to back.
pub struct Iter<'a, T> {
    nodes: &'a Arena<ForwardNode<T>>,
    current: Option<SlotIndex>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<ForwardNode<T>>, first: Option<SlotIndex>) -> Self {
        Self {
            remaining: nodes.len(),
            nodes,
            current: first,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.node(self.current?);
        self.current = node.next();
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over the elements of a [`ForwardList`], front to back.
pub struct IterMut<'a, T> {
    slots: NonNull<Slot<ForwardNode<T>>>,
    slot_count: usize,
    current: Option<SlotIndex>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut Arena<ForwardNode<T>>, first: Option<SlotIndex>) -> Self {
        Self {
            slot_count: nodes.slot_count(),
            remaining: nodes.len(),
            slots: nodes.slots_ptr(),
            current: first,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        debug_assert!(index < self.slot_count);
        // The chain is acyclic, so each slot is visited at most once and the
        // returned borrows never alias. The arena is exclusively borrowed for
        // 'a, so no slot moves while they are alive.
        let slot = unsafe { &mut *self.slots.as_ptr().add(index) };
        let node = slot
            .occupied_mut()
            .expect("list chain points at a vacant slot");
        self.current = node.next();
        self.remaining -= 1;
        Some(node.data_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`ForwardList`].
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (!self.list.is_empty()).then(|| self.list.pop_front())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
