/// A non-owning reference to a node of a [`List`](crate::List).
///
/// A `Handle` is plain data: it never keeps a node alive. It names a slot of
/// the list's node arena together with the generation that slot had when the
/// node was created, and the identity of the list that owns it. Once the node
/// is removed (by [`remove`], [`pop_front`], [`pop_back`] or [`clear`]) the
/// slot generation moves on, and every operation taking the handle rejects it
/// with [`Error::InvalidHandle`]. Handles obtained from one list are rejected
/// by any other list, including clones of it.
///
/// [`remove`]: crate::List::remove
/// [`pop_front`]: crate::List::pop_front
/// [`pop_back`]: crate::List::pop_back
/// [`clear`]: crate::List::clear
/// [`Error::InvalidHandle`]: crate::Error::InvalidHandle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) owner: u64,
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl Handle {
    /// Returns the arena slot of the node, for debugging or external maps.
    pub fn slot(&self) -> usize {
        self.index
    }
}
