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

//! # Position Windows
//!
//! A `Window` is the resolved form of a slice request: skip the first `skip`
//! positions, then keep at most `take` positions. Windows are always
//! non-negative and half-open, `[skip, skip + take)`, and are produced by
//! `SliceBounds::resolve` or `SliceBounds::resolve_within`.
//!
//! A window resolved without knowledge of the sequence length may reach far
//! past the end of the sequence (`take` saturates at `usize::MAX`). Linked
//! traversals simply stop when the sequence runs out; indexable storage
//! calls `Window::clip` first.
//!
//! ```rust
//! use slicer_core::window::Window;
//!
//! let w = Window::new(2, 5);
//! assert_eq!(w.as_range(), 2..7);
//! assert_eq!(w.clip(4).as_range(), 2..4);
//! ```

use std::{cmp::min, ops::Range};

/// A half-open window `[skip, skip + take)` over sequence positions.
///
/// # Invariants
///
/// `skip + take` is computed with saturation, so a window never wraps
/// around `usize::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Window {
    skip: usize,
    take: usize,
}

impl Window {
    /// The window that selects nothing, anchored at position zero.
    pub const EMPTY: Self = Self { skip: 0, take: 0 };

    /// Creates a new `Window` that skips `skip` positions and keeps up to
    /// `take` positions after them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::window::Window;
    /// let w = Window::new(3, 4);
    /// assert_eq!(w.skip(), 3);
    /// assert_eq!(w.take(), 4);
    /// ```
    #[inline]
    pub const fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    /// Returns the number of leading positions excluded from the window.
    #[inline]
    pub const fn skip(&self) -> usize {
        self.skip
    }

    /// Returns the maximum number of positions selected by the window.
    #[inline]
    pub const fn take(&self) -> usize {
        self.take
    }

    /// Returns `true` if the window selects no positions at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::window::Window;
    /// assert!(Window::EMPTY.is_empty());
    /// assert!(Window::new(7, 0).is_empty());
    /// assert!(!Window::new(0, 1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.take == 0
    }

    /// Returns the first position past the window, saturating at `usize::MAX`.
    #[inline]
    pub const fn end_exclusive(&self) -> usize {
        self.skip.saturating_add(self.take)
    }

    /// Returns the last position selected by the window, or `None` if the
    /// window is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::window::Window;
    /// assert_eq!(Window::new(2, 5).last(), Some(6));
    /// assert_eq!(Window::new(2, 0).last(), None);
    /// ```
    #[inline]
    pub const fn last(&self) -> Option<usize> {
        if self.take == 0 {
            None
        } else {
            Some(self.skip.saturating_add(self.take - 1))
        }
    }

    /// Returns `true` if `position` lies inside the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::window::Window;
    /// let w = Window::new(2, 3);
    /// assert!(!w.contains(1));
    /// assert!(w.contains(2));
    /// assert!(w.contains(4));
    /// assert!(!w.contains(5));
    /// ```
    #[inline]
    pub const fn contains(&self, position: usize) -> bool {
        position >= self.skip && position - self.skip < self.take
    }

    /// Clips the window to a sequence of length `len`.
    ///
    /// The clipped window never extends past `len`. A window that starts at
    /// or after `len` becomes the empty window anchored at `len`, so that
    /// `as_range` stays a valid range for indexing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::window::Window;
    /// assert_eq!(Window::new(1, 10).clip(4), Window::new(1, 3));
    /// assert_eq!(Window::new(9, 2).clip(4), Window::new(4, 0));
    /// assert_eq!(Window::new(0, 2).clip(4), Window::new(0, 2));
    /// ```
    #[inline]
    pub fn clip(self, len: usize) -> Self {
        if self.skip >= len {
            return Self { skip: len, take: 0 };
        }
        Self {
            skip: self.skip,
            take: min(self.take, len - self.skip),
        }
    }

    /// Returns the window as a `Range<usize>`.
    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.skip..self.end_exclusive()
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Window[{}, {})", self.skip, self.end_exclusive())
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.skip, self.end_exclusive())
    }
}

impl From<Window> for Range<usize> {
    #[inline]
    fn from(window: Window) -> Self {
        window.as_range()
    }
}

impl From<Range<usize>> for Window {
    /// Converts a `Range<usize>` into a window. Inverted ranges become empty.
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self {
            skip: range.start,
            take: range.end.saturating_sub(range.start),
        }
    }
}
