use core::num::NonZeroUsize;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::arena::Generation;
use super::list::ForwardList;
use super::traits::SlotIndex;

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(1);

/// Identity of one list instance. Moves with the chain on `swap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(NonZeroUsize);

impl ListId {
    pub(crate) fn fresh() -> Self {
        Self::issue(&NEXT_LIST_ID)
    }

    /// Takes the next id from `counter`.
    ///
    /// # Panics
    ///
    /// Panics once the counter is exhausted, rather than wrapping around and
    /// reusing an id that may still be live.
    fn issue(counter: &AtomicUsize) -> Self {
        let id = counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .unwrap_or_else(|_| panic!("list id counter exhausted"));
        Self(NonZeroUsize::new(id).unwrap_or_else(|| unreachable!("list ids start at 1")))
    }
}

/// What a cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchor {
    /// The sentinel in front of the first element.
    BeforeBegin,
    Node {
        index: SlotIndex,
        generation: Generation,
    },
    /// One past the last element.
    End,
}

/// The identity shared by [`Cursor`] and [`CursorMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    pub(crate) list: ListId,
    pub(crate) anchor: Anchor,
}

/// A read-only position in a [`ForwardList`].
///
/// Cursors do not borrow the list. Every list operation that takes a cursor
/// checks that it was issued by that list and that the node it names still
/// exists, and panics otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: Position,
}

/// A position in a [`ForwardList`] through which the element may be written.
///
/// Converts into a [`Cursor`]; the reverse conversion does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorMut {
    pos: Position,
}

impl Cursor {
    #[inline]
    pub(crate) const fn new(pos: Position) -> Self {
        Self { pos }
    }

    #[inline]
    pub(crate) const fn position(self) -> Position {
        self.pos
    }

    /// Whether this is the one-past-the-end cursor.
    pub fn is_end(&self) -> bool {
        self.pos.anchor == Anchor::End
    }

    /// Whether this is the before-begin cursor.
    pub fn is_before_begin(&self) -> bool {
        self.pos.anchor == Anchor::BeforeBegin
    }

    /// Step to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is the end cursor, is stale, or belongs to
    /// another list.
    pub fn move_next<T>(&mut self, list: &ForwardList<T>) -> &mut Self {
        self.pos = list.advance(self.pos);
        self
    }

    /// The position after this one.
    ///
    /// # Panics
    ///
    /// Same as [`Cursor::move_next`].
    #[must_use]
    pub fn successor<T>(mut self, list: &ForwardList<T>) -> Self {
        self.move_next(list);
        self
    }
}

impl CursorMut {
    #[inline]
    pub(crate) const fn new(pos: Position) -> Self {
        Self { pos }
    }

    #[inline]
    pub(crate) const fn position(self) -> Position {
        self.pos
    }

    /// Whether this is the one-past-the-end cursor.
    pub fn is_end(&self) -> bool {
        self.pos.anchor == Anchor::End
    }

    /// Whether this is the before-begin cursor.
    pub fn is_before_begin(&self) -> bool {
        self.pos.anchor == Anchor::BeforeBegin
    }

    /// Step to the next position. See [`Cursor::move_next`].
    pub fn move_next<T>(&mut self, list: &ForwardList<T>) -> &mut Self {
        self.pos = list.advance(self.pos);
        self
    }

    /// The position after this one. See [`Cursor::successor`].
    #[must_use]
    pub fn successor<T>(mut self, list: &ForwardList<T>) -> Self {
        self.move_next(list);
        self
    }

    /// Drop write access.
    #[inline]
    pub fn as_cursor(self) -> Cursor {
        Cursor::new(self.pos)
    }
}

impl From<CursorMut> for Cursor {
    #[inline]
    fn from(cursor: CursorMut) -> Self {
        cursor.as_cursor()
    }
}

impl PartialEq<CursorMut> for Cursor {
    #[inline]
    fn eq(&self, other: &CursorMut) -> bool {
        self.pos == other.pos
    }
}

impl PartialEq<Cursor> for CursorMut {
    #[inline]
    fn eq(&self, other: &Cursor) -> bool {
        self.pos == other.pos
    }
}
