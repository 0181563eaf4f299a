// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Persistent Linked List
//!
//! `List<T>` is an immutable, singly-linked cons list. Nodes are shared
//! through `Arc`, so prepending, dropping a prefix, and cloning never copy
//! elements, and a `List<T>` is `Send + Sync` whenever `T` is.
//!
//! The list has no random access: reaching position `n` costs `n` steps.
//! This is the sequence model the linked slicing strategies in
//! `crate::strategy` traverse. For repeated slicing of the same source,
//! convert once with `to_vec` and use `crate::indexed` instead.
//!
//! ## Highlights
//!
//! - Bounded primitives: `take_front(n)` (new prefix, shares the whole list
//!   when `n` reaches past its end) and `drop_front(n)` (shared suffix).
//! - `into_reversed` moves elements out of uniquely owned nodes and only
//!   clones where nodes are shared.
//! - Dropping a list is iterative, so very long lists never exhaust the
//!   call stack on destruction.
//!
//! ## Usage
//!
//! ```rust
//! use slicer::list;
//! use slicer::list::List;
//!
//! let xs: List<i32> = list![1, 2, 3, 4];
//! assert_eq!(xs.len(), 4);
//! assert_eq!(xs.drop_front(1).take_front(2), list![2, 3]);
//! assert_eq!(format!("{}", xs), "[1, 2, 3, 4]");
//! ```

use crate::strategy::lazy::SliceIter;
use slicer_core::window::Window;
use std::{
    hash::{Hash, Hasher},
    iter::FusedIterator,
    sync::Arc,
};

/// Builds a `List` from a comma-separated sequence of elements.
///
/// # Examples
///
/// ```rust
/// # use slicer::list;
/// # use slicer::list::List;
/// let empty: List<u8> = list![];
/// assert!(empty.is_empty());
///
/// let xs = list!["a", "b"];
/// assert_eq!(xs.head(), Some(&"a"));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::list::List::from(vec![$($element),+])
    };
}

#[derive(Debug)]
struct Node<T> {
    head: T,
    tail: List<T>,
}

/// A persistent, immutable, singly-linked list.
pub struct List<T> {
    node: Option<Arc<Node<T>>>,
}

/// A borrowing iterator over the elements of a `List`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.node.as_deref();
        Some(&node.head)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<T> List<T> {
    /// Creates the empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { node: None }
    }

    /// Creates a list with `head` in front of `tail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer::list;
    /// # use slicer::list::List;
    /// let xs = List::cons(1, list![2, 3]);
    /// assert_eq!(xs, list![1, 2, 3]);
    /// ```
    #[inline]
    pub fn cons(head: T, tail: List<T>) -> Self {
        Self {
            node: Some(Arc::new(Node { head, tail })),
        }
    }

    /// Returns a new list with `head` in front of this one. The receiver is
    /// shared, not copied.
    #[inline]
    pub fn prepend(&self, head: T) -> Self {
        Self::cons(head, self.clone())
    }

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.node.as_deref().map(|node| &node.head)
    }

    /// Returns the list after the first element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn tail(&self) -> Option<&List<T>> {
        self.node.as_deref().map(|node| &node.tail)
    }

    /// Splits the list into its first element and the rest.
    #[inline]
    pub fn uncons(&self) -> Option<(&T, &List<T>)> {
        self.node.as_deref().map(|node| (&node.head, &node.tail))
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the number of elements. Costs a full traversal.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.node.as_deref(),
        }
    }

    /// Returns the element at `position`, or `None` if the list is shorter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer::list;
    /// let xs = list!['x', 'y'];
    /// assert_eq!(xs.get(1), Some(&'y'));
    /// assert_eq!(xs.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.drop_front_ref(position).head()
    }

    /// Returns the suffix that remains after skipping the first `n`
    /// elements. The suffix is shared with `self`; no element is copied.
    ///
    /// Dropping more elements than the list holds yields the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer::list;
    /// # use slicer::list::List;
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.drop_front(2), list![3]);
    /// assert_eq!(xs.drop_front(10), List::new());
    /// ```
    #[inline]
    pub fn drop_front(&self, n: usize) -> List<T> {
        self.drop_front_ref(n).clone()
    }

    /// Walks `n` nodes forward and borrows the suffix found there.
    fn drop_front_ref(&self, n: usize) -> &List<T> {
        let mut current = self;
        for _ in 0..n {
            match current.tail() {
                Some(tail) => current = tail,
                None => break,
            }
        }
        current
    }

    /// Returns a lazy iterator over the positions selected by `window`.
    ///
    /// Nothing is traversed until the iterator is first advanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer::list;
    /// # use slicer_core::window::Window;
    /// let xs = list![1, 2, 3, 4, 5];
    /// let sum: i32 = xs.slice_iter(Window::new(1, 3)).sum();
    /// assert_eq!(sum, 9);
    /// ```
    #[inline]
    pub fn slice_iter(&self, window: Window) -> SliceIter<'_, T> {
        SliceIter::new(self.iter(), window)
    }
}

impl<T> List<T>
where
    T: Clone,
{
    /// Returns a list of the first `n` elements.
    ///
    /// If the list has at most `n` elements, the whole list is returned
    /// shared rather than copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer::list;
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.take_front(2), list![1, 2]);
    /// assert_eq!(xs.take_front(0), list![]);
    /// assert_eq!(xs.take_front(7), xs);
    /// ```
    pub fn take_front(&self, n: usize) -> List<T> {
        let mut prefix: Vec<&T> = Vec::new();
        let mut iter = self.iter();
        while prefix.len() < n {
            match iter.next() {
                Some(item) => prefix.push(item),
                None => return self.clone(),
            }
        }
        prefix
            .into_iter()
            .rev()
            .fold(List::new(), |acc, item| List::cons(item.clone(), acc))
    }

    /// Returns a new list with the elements in reverse order.
    #[inline]
    pub fn reverse(&self) -> List<T> {
        self.iter()
            .fold(List::new(), |acc, item| List::cons(item.clone(), acc))
    }

    /// Consumes the list and returns it reversed.
    ///
    /// Elements of nodes owned only by this list are moved; elements of
    /// nodes shared with other lists are cloned.
    pub fn into_reversed(mut self) -> List<T> {
        let mut reversed = List::new();
        let mut next = self.node.take();
        while let Some(node) = next {
            let (head, tail) = match Arc::try_unwrap(node) {
                Ok(mut node) => {
                    let tail = node.tail.node.take();
                    (node.head, tail)
                }
                Err(shared) => (shared.head.clone(), shared.tail.node.clone()),
            };
            reversed = List::cons(head, reversed);
            next = tail;
        }
        reversed
    }

    /// Copies the elements into a `Vec<T>`, giving O(1) positional access
    /// for repeated slicing.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.node.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.iter().eq(other.iter()),
        }
    }
}

impl<T> Eq for List<T> where T: Eq {}

impl<T> Hash for List<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for item in self.iter() {
            item.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> std::fmt::Debug for List<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> std::fmt::Display for List<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(List::new(), |acc, item| List::cons(item, acc))
    }
}

impl<T> FromIterator<T> for List<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_is_empty() {
        let xs: List<i32> = List::new();
        assert!(xs.is_empty());
        assert_eq!(xs.len(), 0);
        assert_eq!(xs.head(), None);
        assert!(xs.tail().is_none());
        assert_eq!(xs, List::default());
    }

    #[test]
    fn test_cons_head_tail() {
        let xs = List::cons(1, List::cons(2, List::new()));
        assert_eq!(xs.head(), Some(&1));
        assert_eq!(xs.tail().and_then(List::head), Some(&2));
        let (h, t) = xs.uncons().unwrap();
        assert_eq!(*h, 1);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_prepend_shares_receiver() {
        let base = list![2, 3];
        let xs = base.prepend(1);
        assert_eq!(xs, list![1, 2, 3]);
        assert_eq!(base, list![2, 3]);
        let shared = xs.tail().unwrap();
        assert!(Arc::ptr_eq(
            shared.node.as_ref().unwrap(),
            base.node.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_from_vec_and_iter_preserve_order() {
        let xs = List::from(vec!["a", "b", "c"]);
        assert_eq!(xs.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        let ys: List<_> = (1..=4).collect();
        assert_eq!(ys.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get() {
        let xs = list![10, 20, 30];
        assert_eq!(xs.get(0), Some(&10));
        assert_eq!(xs.get(2), Some(&30));
        assert_eq!(xs.get(3), None);
        assert_eq!(List::<i32>::new().get(0), None);
    }

    #[test]
    fn test_drop_front() {
        let xs = list![1, 2, 3, 4];
        assert_eq!(xs.drop_front(0), xs);
        assert_eq!(xs.drop_front(3), list![4]);
        assert_eq!(xs.drop_front(4), list![]);
        assert_eq!(xs.drop_front(usize::MAX), list![]);
    }

    #[test]
    fn test_take_front() {
        let xs = list![1, 2, 3, 4];
        assert_eq!(xs.take_front(0), list![]);
        assert_eq!(xs.take_front(1), list![1]);
        assert_eq!(xs.take_front(4), xs);
        assert_eq!(xs.take_front(usize::MAX), xs);
    }

    #[test]
    fn test_take_front_past_end_shares_list() {
        let xs = list![1, 2];
        let ys = xs.take_front(5);
        assert!(Arc::ptr_eq(
            xs.node.as_ref().unwrap(),
            ys.node.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_reverse_and_into_reversed() {
        let xs = list![1, 2, 3];
        assert_eq!(xs.reverse(), list![3, 2, 1]);
        // Shared nodes are cloned, the original survives.
        assert_eq!(xs.clone().into_reversed(), list![3, 2, 1]);
        assert_eq!(xs, list![1, 2, 3]);
        // Unique nodes are moved.
        assert_eq!(
            list![String::from("a"), String::from("b")].into_reversed(),
            list![String::from("b"), String::from("a")]
        );
        assert_eq!(List::<u8>::new().into_reversed(), list![]);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = list![1, 2, 3];
        let b: List<i32> = vec![1, 2, 3].into();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, list![1, 2]);
        assert_ne!(a, list![1, 2, 4]);
    }

    #[test]
    fn test_formatting() {
        let xs = list![1, 2, 3];
        assert_eq!(format!("{}", xs), "[1, 2, 3]");
        assert_eq!(format!("{:?}", xs), "[1, 2, 3]");
        assert_eq!(format!("{}", List::<i32>::new()), "[]");
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let xs: List<u32> = (0..1_000_000).collect();
        assert_eq!(xs.len(), 1_000_000);
        drop(xs);
    }

    #[test]
    fn test_dropping_shared_suffix_keeps_other_owner_alive() {
        let xs = list![1, 2, 3, 4];
        let suffix = xs.drop_front(2);
        drop(xs);
        assert_eq!(suffix, list![3, 4]);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<List<i32>>();
        assert_send_sync::<List<String>>();
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let xs = list![1, 2, 3];
        let mut total = 0;
        for x in &xs {
            total += x;
        }
        assert_eq!(total, 6);
    }
}
