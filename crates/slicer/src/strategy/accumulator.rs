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

//! Single-pass slicing with a reversed accumulator.

use crate::{list::List, strategy::SliceStrategy};
use slicer_core::window::Window;

/// Slices in a single iterative pass.
///
/// Kept elements are pushed onto an accumulator list, which therefore holds
/// the partial result in reverse; one final `into_reversed` restores the
/// original order. Uses constant stack and O(window) auxiliary storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccumulatorStrategy;

impl SliceStrategy for AccumulatorStrategy {
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        let end = window.end_exclusive();
        let mut reversed = List::new();

        for (position, item) in list.iter().enumerate() {
            if position >= end {
                break;
            }
            if position >= window.skip() {
                reversed = List::cons(item.clone(), reversed);
            }
        }

        reversed.into_reversed()
    }

    fn name(&self) -> &str {
        "Accumulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_slice_middle() {
        let xs = list![1, 2, 3, 4, 5];
        assert_eq!(AccumulatorStrategy.slice(&xs, Window::new(1, 3)), list![2, 3, 4]);
    }

    #[test]
    fn test_slice_past_end_truncates() {
        let xs = list![1, 2, 3];
        assert_eq!(AccumulatorStrategy.slice(&xs, Window::new(1, 10)), list![2, 3]);
        assert_eq!(AccumulatorStrategy.slice(&xs, Window::new(5, 10)), list![]);
    }

    #[test]
    fn test_slice_deep_list_uses_constant_stack() {
        let xs: List<u32> = (0..500_000).collect();
        let sliced = AccumulatorStrategy.slice(&xs, Window::new(499_990, 100));
        assert_eq!(sliced.to_vec(), (499_990..500_000).collect::<Vec<_>>());
    }
}
