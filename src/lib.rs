//! This crate provides a doubly-linked list whose nodes are owned by an arena
//! inside the list, and addressed from the outside through checked handles.
//!
//! The [`List`] allows inserting, removing elements at any known node in
//! constant time. In compromise, accessing or mutating elements by position
//! take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use dlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4, 5]);
//!
//! list.insert_after(list.head(), 99).unwrap(); // insert 99 after the first node
//! assert_eq!(list, List::from([1, 99, 2, 3, 4, 5]));
//!
//! list.remove(list.head()).unwrap(); // remove the first and the last node
//! list.remove(list.tail()).unwrap();
//! assert_eq!(list, List::from([99, 2, 3, 4]));
//!
//! assert_eq!(list.pop_front().unwrap(), 99);
//! assert_eq!(list.get(1).unwrap(), &3);
//! assert_eq!(list.to_string(), "2 3 4");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!                       slots (arena)
//!          ┌──────────┬──────────┬──────────┬──────────┐
//!          │  slot 0  │  slot 1  │  slot 2  │  slot 3  │
//!          │ gen 0    │ gen 1    │ gen 0    │ gen 0    │
//!          │ ╔══════╗ │ ┌╌╌╌╌╌╌┐ │ ╔══════╗ │ ╔══════╗ │
//!          │ ║ next ║─┼─┼╌╌╌╌╌╌┼─┼→║ next ║─┼→║ next ║─┼─→ None
//!  None ←──┼─║ prev ║←┼─┼╌╌╌╌╌╌┼─┼─║ prev ║←┼─║ prev ║ │
//!          │ ║  T   ║ │ ┊vacant┊ │ ║  T   ║ │ ║  T   ║ │
//!          │ ╚══════╝ │ └╌╌╌╌╌╌┘ │ ╚══════╝ │ ╚══════╝ │
//!          └────↑─────┴────↑─────┴──────────┴────↑─────┘
//!            ╔══╧═══╗  ╔═══╧══╗               ╔═══╧══╗
//!            ║ head ║  ║vacant║               ║ tail ║
//!            ╟──────╢  ╚══════╝               ╚══════╝
//!            ║ len  ║
//!            ╚══════╝
//!              List
//! ```
//! The `List` contains:
//! - the arena of slots. An occupied slot holds a node: the element and the
//!   `next`/`prev` slot indices of its neighbours in the list. A vacant slot
//!   is a link in the chain of free slots, reused before the arena grows;
//! - the `head` and `tail` slot indices, both `None` in an empty list;
//! - the length `len`.
//!
//! Each slot carries a generation, bumped whenever its node is removed.
//!
//! # Handles
//!
//! Growing operations return a [`Handle`] to the new node, and [`List::head`],
//! [`List::tail`], [`List::handles`] and [`List::find_all`] hand out handles
//! to existing nodes. A handle is a non-owning `Copy` value naming the list,
//! the slot and the slot generation. [`List::insert_after`] and
//! [`List::remove`] take an `Option<Handle>`, where `None` is a no-op.
//!
//! Once its node is removed, a handle is rejected with
//! [`Error::InvalidHandle`], even if the slot is reused by another node. A
//! handle of one list is rejected by every other list.
//!
//! ## Examples
//!
//! ```
//! use dlist::{Error, List};
//!
//! let mut list = List::from(["a", "b", "c"]);
//! let b = list.find_all(&"b").pop_front().unwrap();
//!
//! assert_eq!(list.remove(Some(b)).unwrap(), Some("b"));
//! list.push_back("d"); // reuses the slot of "b"
//! assert!(matches!(list.value(b), Err(Error::InvalidHandle)));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list). [`Handles`] walks the handles of the nodes instead.
//!
//! ## Examples
//!
//! ```
//! use dlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Persistence
//!
//! See the [`persist`](list::persist) module for the binary and the text
//! formats.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Handles`]: crate::Handles

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::handle::Handle;
#[doc(inline)]
pub use list::iterator::{Handles, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
