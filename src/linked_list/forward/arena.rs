use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::ptr::NonNull;

use super::traits::SlotIndex;

/// Generation of an arena slot, bumped each time the slot's node is destroyed.
pub(crate) type Generation = u32;

enum Entry<N> {
    Occupied(N),
    Vacant { next_free: Option<SlotIndex> },
}

pub(crate) struct Slot<N> {
    generation: Generation,
    entry: Entry<N>,
}

impl<N> Slot<N> {
    #[inline]
    pub(crate) fn occupied_mut(&mut self) -> Option<&mut N> {
        match &mut self.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }
}

/// Slot storage for list nodes with an intrusive free list.
///
/// Nodes refer to each other by slot index. Every slot carries a generation
/// so that a handle taken before a node was destroyed can be told apart from
/// whatever node reuses the slot later.
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<SlotIndex>,
    len: usize,
    /// Generation given to newly pushed slots. Raised past every generation
    /// that was dropped by `clear` or `shrink_to_fit`.
    floor: Generation,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
            floor: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Make sure the next `insert` does not need to allocate.
    pub(crate) fn try_reserve_slot(&mut self) -> Result<(), TryReserveError> {
        if self.free_head.is_some() || self.slots.len() < self.slots.capacity() {
            return Ok(());
        }
        self.slots
            .try_reserve(1)
            .inspect(|_| {
                tracing::trace!(capacity = self.slots.capacity(), "forward list arena grew");
            })
            .inspect_err(|err| {
                tracing::debug!(%err, slots = self.slots.len(), "forward list arena failed to grow");
            })
    }

    /// Store a node, reusing a vacant slot when there is one.
    pub(crate) fn insert(&mut self, node: N) -> SlotIndex {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free_head = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
                };
                slot.entry = Entry::Occupied(node);
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: self.floor,
                    entry: Entry::Occupied(node),
                });
                index
            }
        }
    }

    /// Take the node out of `index`, retiring the slot's current generation.
    pub(crate) fn remove(&mut self, index: SlotIndex) -> N {
        let slot = &mut self.slots[index];
        let vacant = Entry::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut slot.entry, vacant) {
            Entry::Occupied(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_head = Some(index);
                self.len -= 1;
                node
            }
            Entry::Vacant { next_free } => {
                slot.entry = Entry::Vacant { next_free };
                unreachable!("arena slot {index} is already vacant")
            }
        }
    }

    #[inline]
    pub(crate) fn generation(&self, index: SlotIndex) -> Generation {
        self.slots[index].generation
    }

    /// Whether `index` holds a node that was stored under `generation`.
    #[inline]
    pub(crate) fn is_live(&self, index: SlotIndex, generation: Generation) -> bool {
        self.slots.get(index).is_some_and(|slot| {
            slot.generation == generation && matches!(slot.entry, Entry::Occupied(_))
        })
    }

    #[inline]
    pub(crate) fn node(&self, index: SlotIndex) -> &N {
        match &self.slots[index].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("arena slot {index} is vacant"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: SlotIndex) -> &mut N {
        match self.slots[index].occupied_mut() {
            Some(node) => node,
            None => unreachable!("arena slot {index} is vacant"),
        }
    }

    /// Base pointer of the slot storage, for iterators that hand out
    /// disjoint `&mut` borrows of different slots.
    #[inline]
    pub(crate) fn slots_ptr(&mut self) -> NonNull<Slot<N>> {
        NonNull::from(self.slots.as_mut_slice()).cast()
    }

    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every node. Capacity is kept.
    ///
    /// The bookkeeping is reset before any node is dropped, so a panicking
    /// `Drop` still leaves an empty, consistent arena behind.
    pub(crate) fn clear(&mut self) {
        self.floor = self
            .slots
            .iter()
            .map(|slot| slot.generation.wrapping_add(1))
            .fold(self.floor, Generation::max);
        self.free_head = None;
        self.len = 0;
        self.slots.clear();
    }

    /// Release trailing vacant slots and excess capacity.
    pub(crate) fn shrink_to_fit(&mut self) {
        let before = self.slots.capacity();
        while let Some(slot) = self.slots.last() {
            if !matches!(slot.entry, Entry::Vacant { .. }) {
                break;
            }
            self.floor = self.floor.max(slot.generation);
            self.slots.pop();
        }

        // The popped slots may have been anywhere in the free list.
        self.free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Vacant { next_free } = &mut slot.entry {
                *next_free = self.free_head;
                self.free_head = Some(index);
            }
        }

        self.slots.shrink_to_fit();
        tracing::trace!(before, after = self.slots.capacity(), "forward list arena shrunk");
    }
}
