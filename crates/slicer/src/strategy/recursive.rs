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

//! Direct recursive drop-then-take.
//!
//! The drop phase recurses once per skipped element and the take phase
//! recurses once per kept element, building the result as the stack
//! unwinds. Stack usage is therefore proportional to the window end, which
//! makes this strategy unsuitable for lists whose length cannot be bounded
//! up front. It is kept as the reference formulation that the iterative
//! strategies are checked against.

use crate::{list::List, strategy::SliceStrategy};
use slicer_core::window::Window;

/// Slices by direct (non-tail) recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveStrategy;

fn drop_recursive<T>(list: &List<T>, n: usize) -> &List<T> {
    match list.uncons() {
        Some((_, tail)) if n > 0 => drop_recursive(tail, n - 1),
        _ => list,
    }
}

fn take_recursive<T>(list: &List<T>, n: usize) -> List<T>
where
    T: Clone,
{
    match list.uncons() {
        Some((head, tail)) if n > 0 => List::cons(head.clone(), take_recursive(tail, n - 1)),
        _ => List::new(),
    }
}

impl SliceStrategy for RecursiveStrategy {
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        take_recursive(drop_recursive(list, window.skip()), window.take())
    }

    fn name(&self) -> &str {
        "Recursive"
    }
}
