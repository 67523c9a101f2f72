use core::fmt;
use core::ops::{Index, IndexMut};

use super::arena::{Arena, Generation};
use super::cursor::{Anchor, Cursor, CursorMut, ListId, Position};
use super::error::ListError;
use super::iter::{IntoIter, Iter, IterMut};
use super::node::{ForwardNode, Head};
use super::traits::{Link, NodeWithData, SlotIndex};

/// A singly linked list with a sentinel head.
///
/// Nodes live in an arena owned by the list and link to each other by slot
/// index. Positions are named by [`Cursor`] / [`CursorMut`] handles, which
/// stay valid for as long as the node they name is in the list.
pub struct ForwardList<T> {
    head: Head,
    nodes: Arena<ForwardNode<T>>,
    id: ListId,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            head: Head::default(),
            nodes: Arena::new(),
            id: ListId::fresh(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: Head::default(),
            nodes: Arena::with_capacity(capacity),
            id: ListId::fresh(),
        }
    }

    /// Builds a list holding the values of `iter` in order, reporting
    /// allocation failure instead of aborting.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        let mut tail = None;
        for value in iter {
            list.nodes.try_reserve_slot()?;
            tail = Some(list.link_after(tail, value));
        }
        Ok(list)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Releases unused node storage.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    pub fn front(&self) -> Option<&T> {
        self.head.next().map(|index| self.nodes.node(index).data())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let index = self.head.next()?;
        Some(self.nodes.node_mut(index).data_mut())
    }

    /// Inserts `value` as the new first element.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.next();
        let index = self.nodes.insert(ForwardNode::new(value, next));
        self.head.set_next(Some(index));
    }

    /// Like [`push_front`](Self::push_front), but reports allocation failure
    /// and returns a cursor to the new first element. The list is unchanged
    /// on error.
    pub fn try_push_front(&mut self, value: T) -> Result<CursorMut, ListError> {
        self.nodes.try_reserve_slot()?;
        self.push_front(value);
        Ok(self.begin_mut())
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        let Some(index) = self.head.next() else {
            panic!("pop_front: the list is empty");
        };
        let node = self.nodes.remove(index);
        self.head.set_next(node.next());
        node.into_data()
    }

    /// Inserts `value` right after `pos` and returns a cursor to it.
    ///
    /// `pos` may be [`before_begin`](Self::before_begin), which inserts at the
    /// front.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end cursor, is stale, or belongs to another list.
    pub fn insert_after(&mut self, pos: impl Into<Cursor>, value: T) -> CursorMut {
        let at = self.link_slot(pos.into().position(), "insert_after");
        let index = self.link_after(at, value);
        self.cursor_mut_to(Some(index))
    }

    /// Like [`insert_after`](Self::insert_after), but reports allocation
    /// failure. The list is unchanged on error.
    ///
    /// # Panics
    ///
    /// Same as [`insert_after`](Self::insert_after).
    pub fn try_insert_after(
        &mut self,
        pos: impl Into<Cursor>,
        value: T,
    ) -> Result<CursorMut, ListError> {
        let at = self.link_slot(pos.into().position(), "try_insert_after");
        self.nodes.try_reserve_slot()?;
        let index = self.link_after(at, value);
        Ok(self.cursor_mut_to(Some(index)))
    }

    /// Destroys the element after `pos` and returns a cursor to the element
    /// that followed it, or the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if no element follows `pos`, or if `pos` is stale or belongs to
    /// another list.
    pub fn erase_after(&mut self, pos: impl Into<Cursor>) -> CursorMut {
        let (value, next) = self.unlink_after(pos.into().position(), "erase_after");
        drop(value);
        next
    }

    /// Removes the element after `pos` and returns it.
    ///
    /// # Panics
    ///
    /// Same as [`erase_after`](Self::erase_after).
    pub fn remove_after(&mut self, pos: impl Into<Cursor>) -> T {
        self.unlink_after(pos.into().position(), "remove_after").0
    }

    /// Destroys every element. Cursors to elements become stale; the
    /// before-begin and end cursors stay usable.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.head.set_next(None);
        self.nodes.clear();
        tracing::trace!(dropped, "forward list cleared");
    }

    /// Exchanges the contents of two lists without touching any element.
    ///
    /// Cursors follow the elements: a cursor issued by `self` is afterwards
    /// accepted by `other`, and the other way round.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Replaces the contents with the values of `iter`, in order.
    ///
    /// The new chain is built in a separate list and swapped in only once it
    /// is complete, so a panic while producing values leaves `self`
    /// untouched. Every cursor previously issued by `self` is invalidated.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut fresh = iter.into_iter().collect::<Self>();
        self.swap(&mut fresh);
    }

    /// Like [`assign`](Self::assign), but reports allocation failure. The
    /// list is unchanged on error.
    pub fn try_assign<I>(&mut self, iter: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut fresh = Self::try_from_iter(iter)?;
        self.swap(&mut fresh);
        Ok(())
    }

    /// Cursor to the first element, or the end cursor when empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.position_of(self.head.next()))
    }

    pub fn end(&self) -> Cursor {
        Cursor::new(self.position(Anchor::End))
    }

    /// Cursor to the sentinel in front of the first element.
    pub fn before_begin(&self) -> Cursor {
        Cursor::new(self.position(Anchor::BeforeBegin))
    }

    pub fn begin_mut(&mut self) -> CursorMut {
        self.cursor_mut_to(self.head.next())
    }

    pub fn end_mut(&mut self) -> CursorMut {
        CursorMut::new(self.position(Anchor::End))
    }

    pub fn before_begin_mut(&mut self) -> CursorMut {
        CursorMut::new(self.position(Anchor::BeforeBegin))
    }

    /// The element at `pos`, or `None` for the before-begin and end cursors
    /// and for cursors that are stale or belong to another list.
    pub fn get(&self, pos: impl Into<Cursor>) -> Option<&T> {
        self.live_slot(pos.into().position())
            .map(|index| self.nodes.node(index).data())
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, pos: CursorMut) -> Option<&mut T> {
        let index = self.live_slot(pos.position())?;
        Some(self.nodes.node_mut(index).data_mut())
    }

    /// Whether `pos` names a position that currently exists in this list.
    pub fn is_valid(&self, pos: impl Into<Cursor>) -> bool {
        let pos = pos.into().position();
        pos.list == self.id
            && match pos.anchor {
                Anchor::Node { index, generation } => self.nodes.is_live(index, generation),
                Anchor::BeforeBegin | Anchor::End => true,
            }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head.next())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let first = self.head.next();
        IterMut::new(&mut self.nodes, first)
    }

    pub(crate) fn advance(&self, pos: Position) -> Position {
        self.check_owner(pos, "move_next");
        let next = match pos.anchor {
            Anchor::BeforeBegin => self.head.next(),
            Anchor::Node { index, generation } => {
                self.check_live(index, generation, "move_next");
                self.nodes.node(index).next()
            }
            Anchor::End => panic!("move_next: cannot advance past the end"),
        };
        self.position_of(next)
    }

    /// Resolve the link a cursor names for insert/erase-after. `None` is the
    /// sentinel.
    fn link_slot(&self, pos: Position, op: &str) -> Option<SlotIndex> {
        self.check_owner(pos, op);
        match pos.anchor {
            Anchor::BeforeBegin => None,
            Anchor::Node { index, generation } => {
                self.check_live(index, generation, op);
                Some(index)
            }
            Anchor::End => panic!("{op}: cursor is past the end"),
        }
    }

    fn live_slot(&self, pos: Position) -> Option<SlotIndex> {
        match pos.anchor {
            Anchor::Node { index, generation }
                if pos.list == self.id && self.nodes.is_live(index, generation) =>
            {
                Some(index)
            }
            _ => None,
        }
    }

    fn element_slot(&self, pos: Position, op: &str) -> SlotIndex {
        self.check_owner(pos, op);
        match pos.anchor {
            Anchor::Node { index, generation } => {
                self.check_live(index, generation, op);
                index
            }
            Anchor::BeforeBegin => panic!("{op}: cannot dereference the before-begin cursor"),
            Anchor::End => panic!("{op}: cannot dereference the end cursor"),
        }
    }

    #[inline]
    fn check_owner(&self, pos: Position, op: &str) {
        assert!(pos.list == self.id, "{op}: cursor belongs to another list");
    }

    #[inline]
    fn check_live(&self, index: SlotIndex, generation: Generation, op: &str) {
        assert!(
            self.nodes.is_live(index, generation),
            "{op}: cursor refers to a removed element"
        );
    }

    fn link(&self, at: Option<SlotIndex>) -> &dyn Link {
        match at {
            None => &self.head,
            Some(index) => self.nodes.node(index),
        }
    }

    fn link_mut(&mut self, at: Option<SlotIndex>) -> &mut dyn Link {
        match at {
            None => &mut self.head,
            Some(index) => self.nodes.node_mut(index),
        }
    }

    /// Store `value` in a new node right after `at` and return its slot.
    fn link_after(&mut self, at: Option<SlotIndex>, value: T) -> SlotIndex {
        let next = self.link(at).next();
        let index = self.nodes.insert(ForwardNode::new(value, next));
        self.link_mut(at).set_next(Some(index));
        index
    }

    fn unlink_after(&mut self, pos: Position, op: &str) -> (T, CursorMut) {
        let at = self.link_slot(pos, op);
        let Some(index) = self.link(at).next() else {
            panic!("{op}: no element follows the cursor");
        };
        let node = self.nodes.remove(index);
        let next = node.next();
        self.link_mut(at).set_next(next);
        (node.into_data(), self.cursor_mut_to(next))
    }

    fn last_slot(&self) -> Option<SlotIndex> {
        let mut last = None;
        let mut current = self.head.next();
        while let Some(index) = current {
            last = Some(index);
            current = self.nodes.node(index).next();
        }
        last
    }

    #[inline]
    fn position(&self, anchor: Anchor) -> Position {
        Position {
            list: self.id,
            anchor,
        }
    }

    fn position_of(&self, slot: Option<SlotIndex>) -> Position {
        self.position(match slot {
            Some(index) => Anchor::Node {
                index,
                generation: self.nodes.generation(index),
            },
            None => Anchor::End,
        })
    }

    #[inline]
    fn cursor_mut_to(&self, slot: Option<SlotIndex>) -> CursorMut {
        CursorMut::new(self.position_of(slot))
    }
}

/// Exchanges two lists; same as [`ForwardList::swap`].
#[inline]
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        let mut tail = None;
        for value in iter {
            tail = Some(list.link_after(tail, value));
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Appends at the back. Walks to the current tail once.
impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_slot();
        for value in iter {
            tail = Some(self.link_after(tail, value));
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Index<Cursor> for ForwardList<T> {
    type Output = T;

    fn index(&self, pos: Cursor) -> &T {
        let index = self.element_slot(pos.position(), "index");
        self.nodes.node(index).data()
    }
}

impl<T> Index<CursorMut> for ForwardList<T> {
    type Output = T;

    fn index(&self, pos: CursorMut) -> &T {
        &self[pos.as_cursor()]
    }
}

impl<T> IndexMut<CursorMut> for ForwardList<T> {
    fn index_mut(&mut self, pos: CursorMut) -> &mut T {
        let index = self.element_slot(pos.position(), "index_mut");
        self.nodes.node_mut(index).data_mut()
    }
}
