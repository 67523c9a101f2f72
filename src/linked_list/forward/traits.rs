/// Index of a slot in a list's node arena.
pub type SlotIndex = usize;

/// A trait for a forward link: anything that points at the next node.
///
/// Both the sentinel head and the value nodes are links, which lets
/// insert-after and erase-after treat the front of the list like any other
/// position.
pub trait Link {
    /// Get the slot of the next node
    fn next(&self) -> Option<SlotIndex>;

    /// Set the slot of the next node
    fn set_next(&mut self, next: Option<SlotIndex>);
}

/// A trait for a link that carries an element.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node, returning its data
    fn into_data(self) -> Self::Data
    where
        Self: Sized;
}
