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

//! Slicing by position filtering.

use crate::{list::List, strategy::SliceStrategy};
use slicer_core::window::Window;

/// Slices by filtering enumerated positions.
///
/// A single traversal keeps elements whose position lies inside the window
/// and discards the rest. The traversal stops at the window end instead of
/// scanning the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterStrategy;

impl SliceStrategy for FilterStrategy {
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        let end = window.end_exclusive();
        list.iter()
            .enumerate()
            .take_while(|(position, _)| *position < end)
            .filter(|(position, _)| window.contains(*position))
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn name(&self) -> &str {
        "Filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_slice() {
        let xs = list![10, 20, 30, 40];
        assert_eq!(FilterStrategy.slice(&xs, Window::new(0, 1)), list![10]);
        assert_eq!(FilterStrategy.slice(&xs, Window::new(3, 1)), list![40]);
        assert_eq!(FilterStrategy.slice(&xs, Window::new(3, 0)), list![]);
        assert_eq!(FilterStrategy.slice(&xs, Window::new(0, 100)), xs);
    }
}
