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

//! Slicing composed from the bounded list primitives.

use crate::{list::List, strategy::SliceStrategy};
use slicer_core::window::Window;

/// Slices by composing the bounded primitives: `drop_front(skip)` then
/// `take_front(take)`.
///
/// Two sequential passes, the first of which shares rather than copies. When
/// the window runs past the end of the list the remaining suffix is returned
/// shared, without copying any element.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropTakeStrategy;

impl SliceStrategy for DropTakeStrategy {
    #[inline]
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        list.drop_front(window.skip()).take_front(window.take())
    }

    fn name(&self) -> &str {
        "DropTake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_slice() {
        let xs = list!['a', 'b', 'c', 'd'];
        assert_eq!(DropTakeStrategy.slice(&xs, Window::new(1, 2)), list!['b', 'c']);
        assert_eq!(DropTakeStrategy.slice(&xs, Window::new(2, 9)), list!['c', 'd']);
        assert_eq!(DropTakeStrategy.slice(&xs, Window::new(4, 1)), list![]);
    }

    #[test]
    fn test_overrunning_window_shares_suffix() {
        let xs = list![1, 2, 3];
        let sliced = DropTakeStrategy.slice(&xs, Window::new(1, usize::MAX));
        // Structural sharing: the suffix list is identical to the tail.
        assert_eq!(sliced, xs.drop_front(1));
        assert_eq!(sliced.len(), 2);
    }
}
