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

//! # Lazy Window Iteration
//!
//! `SliceIter` yields the elements of a list that fall inside a `Window`
//! without building a new list. Construction is O(1); the skipped prefix is
//! walked on the first call to `next`, and iteration stops at the window
//! end. Callers that only want to fold, filter, or forward the selected
//! elements can chain adapters directly onto it and never materialize the
//! slice.
//!
//! `LazyStrategy` is the materializing form: it collects a `SliceIter` into a
//! fresh `List`.
//!
//! ```rust
//! use slicer::list;
//! use slicer_core::window::Window;
//!
//! let xs = list![1, 2, 3, 4, 5, 6];
//! let evens: Vec<i32> = xs
//!     .slice_iter(Window::new(1, 4))
//!     .filter(|x| *x % 2 == 0)
//!     .copied()
//!     .collect();
//! assert_eq!(evens, vec![2, 4]);
//! ```

use crate::{
    list::{Iter, List},
    strategy::SliceStrategy,
};
use slicer_core::window::Window;
use std::iter::FusedIterator;

/// A lazy iterator over the elements of a list inside a window.
#[derive(Debug, Clone)]
pub struct SliceIter<'a, T> {
    inner: Iter<'a, T>,
    pending_skip: usize,
    remaining: usize,
}

impl<'a, T> SliceIter<'a, T> {
    /// Creates a new `SliceIter` over `inner`, restricted to `window`.
    #[inline]
    pub(crate) fn new(inner: Iter<'a, T>, window: Window) -> Self {
        Self {
            inner,
            pending_skip: window.skip(),
            remaining: window.take(),
        }
    }
}

impl<'a, T> Iterator for SliceIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while self.pending_skip > 0 {
            self.inner.next()?;
            self.pending_skip -= 1;
        }
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The list length is unknown until traversal reaches its end.
        (0, Some(self.remaining))
    }
}

impl<T> FusedIterator for SliceIter<'_, T> {}

/// Slices by materializing a `SliceIter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyStrategy;

impl SliceStrategy for LazyStrategy {
    #[inline]
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        list.slice_iter(window).cloned().collect()
    }

    fn name(&self) -> &str {
        "Lazy"
    }
}
