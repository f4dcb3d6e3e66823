use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use log::trace;

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the front (head) to the back. Every node owns the
/// node after it, so the whole chain is owned by the list and released when the list is dropped.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` / `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `prepend` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `append` | `O(n)` |
/// | `at` / `get` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `traverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// There is no tail pointer, so appending has to walk the whole chain. Prefer [`prepend`] when
/// order of insertion doesn't matter, or build the list with [`FromIterator`], which appends in
/// `O(1)` per element.
///
/// The list deliberately doesn't implement [`Clone`]; duplicating it would silently copy every
/// node.
///
/// [`prepend`]: LinkedList::prepend
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the LinkedList. Identical to [`LinkedList::len`].
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Adds the provided element to the back of the LinkedList, after walking to the last node.
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Adds the provided element to the front of the LinkedList, making it the new head.
    pub fn prepend(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Invokes `callback` once for every element, from front to back, along with the element's
    /// index. An empty list never invokes it.
    ///
    /// The indices passed here are the same ones accepted by [`at`](LinkedList::at) and
    /// [`remove`](LinkedList::remove).
    pub fn traverse<F: FnMut(&T, usize)>(&self, mut callback: F) {
        for (index, value) in self.iter().enumerate() {
            callback(value, index);
        }
    }

    /// Returns a reference to the element at the provided `index`, or [`None`] if it is out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, or [`None`] if it is
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator, which panics
    /// instead.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;
        self.iter_mut().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Removes the element at `index`, returning true if an element was removed. If the index is
    /// out of bounds (which includes every index of an empty list), the list is left untouched
    /// and false is returned.
    ///
    /// Removing index 0 of a list with one element succeeds and leaves the list empty.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.try_remove(index) {
            Ok(_) => true,
            Err(error) => {
                trace!("remove: {error}");
                false
            },
        }
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than doing
    /// nothing if the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len;

        // The link pointing at the node to remove: either the head or its predecessor's next.
        let link = self.link_mut(index);
        let node = link.take().ok_or(IndexOutOfBounds { index, len })?;
        let Node { value, next } = *node;
        *link = next;

        self.len -= 1;
        Ok(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns a copy of the element at the provided `index`, or [`None`] if it is out of bounds.
    pub fn at(&self, index: usize) -> Option<T> {
        match self.try_get(index) {
            Ok(value) => Some(value.clone()),
            Err(error) => {
                trace!("at: {error}");
                None
            },
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Returns the link that owns the node at `index`. Stops early at the end of the chain, so an
    /// out of bounds index yields the trailing (empty) link.
    pub(crate) fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Walks the chain and checks that it holds exactly `len` nodes.
    #[cfg(test)]
    pub(crate) fn verify_len(&self) {
        let mut count = 0;
        let mut link = &self.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        assert_eq!(count, self.len, "Stored length should match the number of linked nodes.");
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut len = 0;

        // Keep hold of the trailing link so that each push is O(1).
        let mut link = &mut list.head;
        for value in iter {
            link = &mut link.insert(Node::boxed(value, None)).next;
            len += 1;
        }

        list.len = len;
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time, otherwise dropping the head would recurse down the chain.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The length prefix terminates the variable length sequence.
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}
