use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::list::handle::Handle;
use crate::{Handles, IntoIter, Iter, IterMut};

pub mod handle;
pub mod iterator;
pub mod persist;

mod algorithms;

/// The `List` is a doubly-linked list whose nodes live in an arena owned by
/// the list. It allows inserting and removing elements at any known node in
/// constant time. In compromise, accessing or mutating elements by position
/// takes *O*(*n*) time.
///
/// The `List` contains:
/// - the node arena `slots`, where each slot is either an occupied node or a
///   link in the chain of vacant slots;
/// - the `head` and `tail` slot indices (both `None` iff the list is empty);
/// - the head of the vacant chain, recycled before the arena grows;
/// - the length `len` and the `owner` identity stamped into every [`Handle`].
///
/// # Naming Conventions
///
/// - *index*: a position `0..len` in traversal order;
/// - *slot*: a position in the arena, unrelated to traversal order.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    vacant: Option<usize>,
    /// the length of the list
    pub(crate) len: usize,
    owner: u64,
}

pub(crate) struct Slot<T> {
    pub(crate) generation: u64,
    pub(crate) entry: Entry<T>,
}

pub(crate) enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next: Option<usize> },
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
    pub(crate) element: T,
}

fn next_owner() -> u64 {
    static OWNERS: AtomicU64 = AtomicU64::new(0);
    OWNERS.fetch_add(1, Ordering::Relaxed)
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_slot(&self) -> Option<usize> {
        self.head
    }
    pub(crate) fn tail_slot(&self) -> Option<usize> {
        self.tail
    }
    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }

    pub(crate) fn node(&self, slot: usize) -> &Node<T> {
        match &self.slots[slot].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("vacant slot {} is linked into the list", slot),
        }
    }
    pub(crate) fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match &mut self.slots[slot].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("vacant slot {} is linked into the list", slot),
        }
    }

    pub(crate) fn handle_of(&self, slot: usize) -> Handle {
        Handle {
            owner: self.owner,
            index: slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Map a handle back to its slot, rejecting handles of other lists and
    /// handles whose node has been removed.
    pub(crate) fn resolve(&self, handle: Handle) -> Result<usize> {
        if handle.owner != self.owner {
            return Err(Error::InvalidHandle);
        }
        match self.slots.get(handle.index) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(_),
            }) if *generation == handle.generation => Ok(handle.index),
            _ => Err(Error::InvalidHandle),
        }
    }

    /// Find the slot of the node at position `at` by walking from the head.
    pub(crate) fn slot_at(&self, at: usize) -> Result<usize> {
        let out_of_range = Error::IndexOutOfRange {
            index: at,
            len: self.len,
        };
        if at >= self.len {
            return Err(out_of_range);
        }
        let mut current = self.head;
        for _ in 0..at {
            current = current.and_then(|slot| self.node(slot).next);
        }
        current.ok_or(out_of_range)
    }

    /// Link `prev` and `next` to each other. A `None` side stands for the
    /// list boundary, so `head` or `tail` is updated instead.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Take a vacant slot (or grow the arena) and store `node` in it.
    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.vacant {
            Some(slot) => {
                let entry = std::mem::replace(&mut self.slots[slot].entry, Entry::Occupied(node));
                self.vacant = match entry {
                    Entry::Vacant { next } => next,
                    Entry::Occupied(_) => unreachable!("occupied slot {} in the vacant chain", slot),
                };
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Free an occupied slot, invalidating every handle to it.
    fn release(&mut self, slot: usize) -> Node<T> {
        let vacant = Entry::Vacant { next: self.vacant };
        let entry = &mut self.slots[slot];
        entry.generation += 1;
        let node = match std::mem::replace(&mut entry.entry, vacant) {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("released slot {} twice", slot),
        };
        self.vacant = Some(slot);
        node
    }

    /// Attach a new node holding `element` between `prev` and `next`, which
    /// must be adjacent (a `None` side being the list boundary).
    pub(crate) fn attach_node(
        &mut self,
        prev: Option<usize>,
        next: Option<usize>,
        element: T,
    ) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let slot = self.allocate(Node {
            next,
            prev,
            element,
        });
        self.connect(prev, Some(slot));
        self.connect(Some(slot), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(slot));
            self.assert_adjacent(Some(slot), next);
        }
        slot
    }

    /// Detach the node at `slot` from the list, free the slot and return the
    /// element.
    pub(crate) fn detach_node(&mut self, slot: usize) -> T {
        let (prev, next) = {
            let node = self.node(slot);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.release(slot).element
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => assert_eq!(self.node(prev).next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.node(next).prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use dlist::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            vacant: None,
            len: 0,
            owner: next_owner(),
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Always returns `false`: the list has no capacity ceiling other than
    /// available memory.
    #[inline]
    pub fn is_full(&self) -> bool {
        false
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// Every handle into the list becomes invalid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// let one = list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// assert!(list.value(one).is_err());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
        // Only vacant slots remain. A fresh owner keeps old handles rejected
        // once the arena is reused from slot 0.
        self.slots.clear();
        self.vacant = None;
        self.owner = next_owner();
    }

    /// Takes all elements out of the list, leaving it empty.
    ///
    /// Handles into the list stay valid for the returned list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let head = list.head().unwrap();
    ///
    /// let moved = list.take();
    /// assert!(list.is_empty());
    /// assert_eq!(list.head(), None);
    /// assert_eq!(moved.value(head).unwrap(), &1);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the handle of the first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<Handle> {
        self.head.map(|slot| self.handle_of(slot))
    }

    /// Returns the handle of the last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<Handle> {
        self.tail.map(|slot| self.handle_of(slot))
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).element)
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.head?;
        Some(&mut self.node_mut(slot).element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).element)
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.tail?;
        Some(&mut self.node_mut(slot).element)
    }

    /// Adds an element first in the list, and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time (amortized over arena
    /// growth).
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// let one = list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// assert_eq!(list.head(), Some(one));
    /// ```
    pub fn push_front(&mut self, elt: T) -> Handle {
        let slot = self.attach_node(None, self.head, elt);
        self.handle_of(slot)
    }

    /// Removes the first element and returns it, or [`Error::EmptyContainer`]
    /// if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert!(matches!(list.pop_front(), Err(Error::EmptyContainer)));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front().unwrap(), 3);
    /// assert_eq!(list.pop_front().unwrap(), 1);
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let slot = self.head.ok_or(Error::EmptyContainer)?;
        Ok(self.detach_node(slot))
    }

    /// Appends an element to the back of a list, and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time (amortized over arena
    /// growth).
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) -> Handle {
        let slot = self.attach_node(self.tail, None, elt);
        self.handle_of(slot)
    }

    /// Removes the last element from a list and returns it, or
    /// [`Error::EmptyContainer`] if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_back().is_err());
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back().unwrap(), 3);
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let slot = self.tail.ok_or(Error::EmptyContainer)?;
        Ok(self.detach_node(slot))
    }

    /// Inserts an element right after the node `at`, and returns the handle of
    /// the new node.
    ///
    /// Nothing happens if `at` is `None`. A handle that does not belong to
    /// this list, or whose node has been removed, is rejected with
    /// [`Error::InvalidHandle`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert_after(list.head(), 99).unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 99, 2, 3]);
    ///
    /// assert_eq!(list.insert_after(None, 7).unwrap(), None);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn insert_after(&mut self, at: Option<Handle>, elt: T) -> Result<Option<Handle>> {
        let at = match at {
            Some(at) => self.resolve(at)?,
            None => return Ok(None),
        };
        let next = self.node(at).next;
        let slot = self.attach_node(Some(at), next, elt);
        Ok(Some(self.handle_of(slot)))
    }

    /// Removes the node `at` and returns its element.
    ///
    /// Nothing happens if `at` is `None`. A handle that does not belong to
    /// this list, or whose node has already been removed, is rejected with
    /// [`Error::InvalidHandle`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// let head = list.head();
    /// assert_eq!(list.remove(head).unwrap(), Some(1));
    /// assert_eq!(list.remove(list.tail()).unwrap(), Some(5));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 4]);
    ///
    /// // The removed node cannot be reached again.
    /// assert!(matches!(list.remove(head), Err(Error::InvalidHandle)));
    /// ```
    pub fn remove(&mut self, at: Option<Handle>) -> Result<Option<T>> {
        match at {
            Some(at) => {
                let slot = self.resolve(at)?;
                Ok(Some(self.detach_node(slot)))
            }
            None => Ok(None),
        }
    }

    /// Returns a reference to the element of the node `at`.
    pub fn value(&self, at: Handle) -> Result<&T> {
        let slot = self.resolve(at)?;
        Ok(&self.node(slot).element)
    }

    /// Returns a mutable reference to the element of the node `at`.
    pub fn value_mut(&mut self, at: Handle) -> Result<&mut T> {
        let slot = self.resolve(at)?;
        Ok(&mut self.node_mut(slot).element)
    }

    /// Returns the handle of the node following `at`, or `None` if `at` is
    /// the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// let head = list.head().unwrap();
    /// let second = list.next_of(head).unwrap().unwrap();
    /// assert_eq!(list.value(second).unwrap(), &'b');
    /// assert_eq!(list.next_of(second).unwrap(), None);
    /// assert_eq!(list.prev_of(second).unwrap(), Some(head));
    /// ```
    pub fn next_of(&self, at: Handle) -> Result<Option<Handle>> {
        let slot = self.resolve(at)?;
        Ok(self.node(slot).next.map(|next| self.handle_of(next)))
    }

    /// Returns the handle of the node preceding `at`, or `None` if `at` is
    /// the head.
    pub fn prev_of(&self, at: Handle) -> Result<Option<Handle>> {
        let slot = self.resolve(at)?;
        Ok(self.node(slot).prev.map(|prev| self.handle_of(prev)))
    }

    /// Returns a reference to the element at position `at`, or
    /// [`Error::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time. Use [`iter`](List::iter)
    /// to visit every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(1).unwrap(), &2);
    /// assert!(matches!(
    ///     list.get(5),
    ///     Err(Error::IndexOutOfRange { index: 5, len: 3 })
    /// ));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        let slot = self.slot_at(at)?;
        Ok(&self.node(slot).element)
    }

    /// Returns a mutable reference to the element at position `at`, or
    /// [`Error::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        let slot = self.slot_at(at)?;
        Ok(&mut self.node_mut(slot).element)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a forward iterator over the handles of the nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b"]);
    /// let handles = Vec::from_iter(list.handles());
    /// assert_eq!(Some(handles[0]), list.head());
    /// assert_eq!(Some(handles[1]), list.tail());
    /// ```
    #[inline]
    pub fn handles(&self) -> Handles<'_, T> {
        Handles::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// After this operation, `other` becomes empty and its handles are
    /// invalid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.extend(other.take());
    }

    #[cfg(test)]
    pub(crate) fn assert_well_formed(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());
        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }

        let mut prev = None;
        let mut current = self.head;
        for _ in 0..self.len {
            let slot = current.expect("forward walk ended early");
            assert_eq!(self.node(slot).prev, prev);
            prev = current;
            current = self.node(slot).next;
        }
        assert_eq!(current, None);
        assert_eq!(prev, self.tail);

        let mut next = None;
        let mut current = self.tail;
        for _ in 0..self.len {
            let slot = current.expect("backward walk ended early");
            assert_eq!(self.node(slot).next, next);
            next = current;
            current = self.node(slot).prev;
        }
        assert_eq!(current, None);
        assert_eq!(next, self.head);

        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot.entry, Entry::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.assert_well_formed();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.head(), list.tail());
        assert_eq!(list.pop_back().unwrap(), 1);
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(matches!(list.pop_front(), Err(Error::EmptyContainer)));
        assert!(matches!(list.pop_back(), Err(Error::EmptyContainer)));

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front().unwrap(), 1);
        assert!(list.pop_back().is_err());
        assert!(list.is_empty());
        list.assert_well_formed();

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_well_formed();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front().unwrap(), 2);
        assert_eq!(list.pop_back().unwrap(), 3);

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front().unwrap(), 1);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drain_order() {
        let mut list = List::new();
        for i in 0..5 {
            list.push_back(i);
        }
        let drained = Vec::from_iter(std::iter::from_fn(|| list.pop_front().ok()));
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(list.is_empty());

        for i in 0..5 {
            list.push_front(i);
        }
        let drained = Vec::from_iter(std::iter::from_fn(|| list.pop_back().ok()));
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        list.assert_well_formed();
    }

    #[test]
    fn list_insert_after_and_remove() {
        let mut list = List::from_iter(1..=5);
        let inserted = list.insert_after(list.head(), 99).unwrap().unwrap();
        assert_eq!(list.len(), 6);
        list_eq(&list, vec![1, 99, 2, 3, 4, 5]);
        assert_eq!(list.value(inserted).unwrap(), &99);

        list.insert_after(list.tail(), 6).unwrap();
        assert_eq!(list.back(), Some(&6));
        list_eq(&list, vec![1, 99, 2, 3, 4, 5, 6]);

        assert_eq!(list.remove(Some(inserted)).unwrap(), Some(99));
        list_eq(&list, vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(list.remove(list.head()).unwrap(), Some(1));
        assert_eq!(list.remove(list.tail()).unwrap(), Some(6));
        list_eq(&list, 2..=5);

        let middle = list.next_of(list.head().unwrap()).unwrap();
        assert_eq!(list.remove(middle).unwrap(), Some(3));
        list_eq(&list, vec![2, 4, 5]);
    }

    #[test]
    fn list_none_handles_are_noops() {
        let mut list = List::from_iter(0..3);
        assert_eq!(list.insert_after(None, 9).unwrap(), None);
        assert_eq!(list.remove(None).unwrap(), None);
        list_eq(&list, 0..3);
    }

    #[test]
    fn list_rejects_stale_handles() {
        let mut list = List::from_iter(0..3);
        let head = list.head().unwrap();
        let tail = list.tail().unwrap();

        assert_eq!(list.pop_front().unwrap(), 0);
        assert!(matches!(list.value(head), Err(Error::InvalidHandle)));
        assert!(matches!(list.remove(Some(head)), Err(Error::InvalidHandle)));
        assert!(matches!(
            list.insert_after(Some(head), 7),
            Err(Error::InvalidHandle)
        ));

        // The freed slot is recycled, but the old handle still mismatches.
        let recycled = list.push_back(3);
        assert_eq!(recycled.slot(), head.slot());
        assert_ne!(recycled, head);
        assert!(list.value(head).is_err());
        assert_eq!(list.value(recycled).unwrap(), &3);
        list_eq(&list, vec![1, 2, 3]);

        list.clear();
        assert!(list.value(tail).is_err());
        list.push_back(10);
        assert!(list.value(tail).is_err());
        list.assert_well_formed();
    }

    #[test]
    fn list_generations_do_not_wrap_at_32_bits() {
        let mut list = List::from([1, 2]);
        let slot = list.head().unwrap().slot();
        assert_eq!(list.pop_front().unwrap(), 1);
        list.slots[slot].generation = u64::from(u32::MAX);

        let old = list.push_front(0);
        assert_eq!(old.slot(), slot);
        assert_eq!(list.pop_front().unwrap(), 0);
        let new = list.push_front(1);
        assert_eq!(new.slot(), slot);
        assert_eq!(new.generation, u64::from(u32::MAX) + 1);
        assert!(matches!(list.value(old), Err(Error::InvalidHandle)));
        list_eq(&list, vec![1, 2]);
    }

    #[test]
    fn list_rejects_foreign_handles() {
        let list = List::from_iter(0..3);
        let mut other = List::from_iter(0..3);
        let head = list.head().unwrap();
        assert_eq!(head.slot(), other.head().unwrap().slot());
        assert!(matches!(other.value(head), Err(Error::InvalidHandle)));
        assert!(other.remove(Some(head)).is_err());
        list_eq(&other, 0..3);
    }

    #[test]
    fn list_take() {
        let mut list = List::from_iter(1..=3);
        let head = list.head().unwrap();
        let moved = list.take();
        list_eq(&moved, 1..=3);
        list_eq(&list, None);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert!(list.value(head).is_err());
        assert_eq!(moved.value(head).unwrap(), &1);

        // The source stays usable.
        list.push_back(4);
        list_eq(&list, Some(4));

        let mut list = moved;
        list = std::mem::take(&mut list);
        list_eq(&list, 1..=3);
    }

    #[test]
    fn list_get() {
        let mut list = List::from_iter(0..5);
        for i in 0..5 {
            assert_eq!(list.get(i).unwrap(), &(i as i32));
        }
        *list.get_mut(2).unwrap() = 20;
        list_eq(&list, vec![0, 1, 20, 3, 4]);
        assert!(matches!(
            list.get(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        ));
        assert!(List::<i32>::new().get(0).is_err());
        assert!(list.get_mut(7).is_err());
    }

    #[test]
    fn list_navigation() {
        let list = List::from_iter(0..4);
        let mut forward = vec![];
        let mut current = list.head();
        while let Some(handle) = current {
            forward.push(*list.value(handle).unwrap());
            current = list.next_of(handle).unwrap();
        }
        assert_eq!(forward, vec![0, 1, 2, 3]);

        let mut backward = vec![];
        let mut current = list.tail();
        while let Some(handle) = current {
            backward.push(*list.value(handle).unwrap());
            current = list.prev_of(handle).unwrap();
        }
        assert_eq!(backward, vec![3, 2, 1, 0]);
    }

    #[test]
    fn list_append() {
        let mut list = List::from_iter(0..3);
        let mut other = List::from_iter(3..6);
        let other_head = other.head().unwrap();
        list.append(&mut other);
        list_eq(&list, 0..6);
        list_eq(&other, None);
        assert!(list.value(other_head).is_err());

        list.append(&mut List::new());
        list_eq(&list, 0..6);
    }

    #[test]
    fn list_len() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front().unwrap();
        assert_eq!(list.len(), 0);

        list.append(&mut List::from_iter(0..5));
        assert_eq!(list.len(), 5);

        list.remove(list.tail()).unwrap();
        assert_eq!(list.len(), 4);

        list.insert_after(list.head(), 7).unwrap();
        assert_eq!(list.len(), 5);

        list.clear();
        assert_eq!(list.len(), 0);
        list.assert_well_formed();
    }

    #[test]
    fn list_from_array_and_vec() {
        list_eq(&List::from([1, 2, 3]), 1..=3);
        list_eq(&List::from(vec!['x', 'y']), vec!['x', 'y']);
        list_eq(&List::<u8>::from([]), None);
    }
}
