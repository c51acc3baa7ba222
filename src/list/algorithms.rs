use crate::list::handle::Handle;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, IndexMut};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite the elements of `self` in place, then trim or extend it to
    /// the length of `other`. Handles to the overwritten nodes stay valid.
    fn clone_from(&mut self, other: &Self) {
        let mut source = other.iter();
        for elem in self.iter_mut() {
            match source.next() {
                Some(elem_other) => elem.clone_from(elem_other),
                None => break,
            }
        }
        while self.len() > other.len() {
            // `self` is longer than `other`, so it is not empty.
            let _ = self.pop_back();
        }
        self.extend(source.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Indexing by position, panicking when out of bounds like slices do.
///
/// Prefer [`List::get`] to handle the out-of-range case as an error.
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, at: usize) -> &T {
        match self.get(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, at: usize) -> &mut T {
        match self.get_mut(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Concatenation of two borrowed lists, see [`List::concat`].
impl<T: Clone> Add<&List<T>> for &List<T> {
    type Output = List<T>;

    fn add(self, other: &List<T>) -> List<T> {
        self.concat(other)
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the number of elements equal to the given value.
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
    /// let list = List::from([1, 2, 3, 2, 4, 2, 5]);
    /// assert_eq!(list.count(&2), 3);
    /// assert_eq!(list.count(&6), 0);
    /// ```
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.iter().filter(|e| *e == x).count()
    }

    /// Returns the handles of all the nodes whose element equals the given
    /// value, in traversal order.
    ///
    /// The handles are rejected once their nodes are removed from `self`.
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
    /// let mut list = List::from(['a', 'b', 'a', 'c']);
    /// let found = list.find_all(&'a');
    /// assert_eq!(found.len(), 2);
    ///
    /// for handle in found {
    ///     *list.value_mut(handle).unwrap() = 'z';
    /// }
    /// assert_eq!(list, List::from(['z', 'b', 'z', 'c']));
    /// ```
    pub fn find_all(&self, x: &T) -> List<Handle>
    where
        T: PartialEq<T>,
    {
        self.handles()
            .zip(self.iter())
            .filter(|(_, e)| *e == x)
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Returns a new list holding clones of the elements of `self`, followed
    /// by clones of the elements of `other`. Both operands are left untouched.
    ///
    /// The same operation is available as `&a + &b`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let a = List::from([1, 2, 3]);
    /// let b = List::from([4, 5, 6]);
    ///
    /// assert_eq!(a.concat(&b), List::from([1, 2, 3, 4, 5, 6]));
    /// assert_eq!(&b + &a, List::from([4, 5, 6, 1, 2, 3]));
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.len(), 3);
    /// ```
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        assert_eq!(List::from([1, 2, 3]), List::from([1, 2, 3]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2]));
        assert_ne!(List::from([1, 2]), List::from([1, 2, 3]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 5, 3]));
        assert_eq!(List::<i32>::new(), List::new());
        assert_ne!(List::from([0]), List::new());
    }

    #[test]
    fn list_eq_ignores_arena_layout() {
        let mut recycled = List::from_iter(0..4);
        recycled.pop_front().unwrap();
        recycled.push_front(0);
        recycled.assert_well_formed();
        assert_eq!(recycled, List::from_iter(0..4));
        assert_eq!(hash_of(&recycled), hash_of(&List::from_iter(0..4)));
    }

    #[test]
    fn list_cmp() {
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
        assert!(List::<i32>::new() < List::from([0]));
    }

    #[test]
    fn list_clone_is_deep() {
        let mut original = List::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        original.push_back(4);
        assert_eq!(original.len(), 4);
        assert_eq!(copy.len(), 3);

        copy[0] = 10;
        assert_eq!(original[0], 1);
        assert_eq!(copy, List::from([10, 2, 3]));
        copy.assert_well_formed();

        // Handles of the source are foreign to the copy.
        let head = original.head().unwrap();
        assert!(copy.value(head).is_err());
    }

    #[test]
    fn list_clone_from() {
        fn check(dst: &[i32], src: &[i32]) {
            let mut list = List::from_iter(dst.iter().copied());
            let source = List::from_iter(src.iter().copied());
            list.clone_from(&source);
            list.assert_well_formed();
            assert_eq!(list, source);
        }
        check(&[1, 2, 3], &[4, 5]);
        check(&[1], &[4, 5, 6]);
        check(&[], &[4, 5]);
        check(&[1, 2], &[]);
        check(&[1, 2], &[3, 4]);

        let mut list = List::from([1, 2, 3]);
        let head = list.head().unwrap();
        list.clone_from(&List::from([7, 8]));
        assert_eq!(list.value(head).unwrap(), &7);
    }

    #[test]
    fn list_self_assignment() {
        let mut list = List::from([1, 2, 3]);
        list = list.clone();
        list.assert_well_formed();
        assert_eq!(list, List::from([1, 2, 3]));

        list = std::mem::take(&mut list);
        list.assert_well_formed();
        assert_eq!(list, List::from([1, 2, 3]));
    }

    #[test]
    fn list_index() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list[0], 1);
        assert_eq!(list[2], 3);
        list[1] *= 10;
        assert_eq!(list, List::from([1, 20, 3]));
    }

    #[test]
    #[should_panic(expected = "index 5 out of range for list of length 3")]
    fn list_index_out_of_range() {
        let list = List::from([1, 2, 3]);
        let _value = list[5];
    }

    #[test]
    fn list_count_and_contains() {
        let list = List::from([1, 2, 3, 2, 4, 2, 5]);
        assert_eq!(list.count(&2), 3);
        assert_eq!(list.count(&5), 1);
        assert_eq!(list.count(&9), 0);
        assert!(list.contains(&4));
        assert!(!list.contains(&9));
        assert_eq!(List::<i32>::new().count(&0), 0);
    }

    #[test]
    fn list_find_all() {
        let mut list = List::from([1, 2, 3, 2, 4, 2, 5]);
        let found = list.find_all(&2);
        assert_eq!(found.len(), 3);
        for handle in &found {
            assert_eq!(list.value(*handle).unwrap(), &2);
        }
        assert!(list.find_all(&9).is_empty());

        for handle in found.iter().copied() {
            list.remove(Some(handle)).unwrap();
        }
        assert_eq!(list, List::from([1, 3, 4, 5]));
        list.assert_well_formed();

        // Removed nodes cannot be reached through the old handles.
        assert!(found.iter().all(|handle| list.value(*handle).is_err()));
    }

    #[test]
    fn list_concat() {
        let a = List::from([1, 2, 3]);
        let b = List::from([4, 5, 6]);
        let c = &a + &b;
        c.assert_well_formed();
        assert_eq!(c, List::from([1, 2, 3, 4, 5, 6]));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);

        let empty = List::new();
        assert_eq!(&a + &empty, a);
        assert_eq!(&empty + &a, a);
        assert_eq!(&empty + &empty, List::<i32>::new());
    }
}
