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

//! Slicing strategies over persistent linked lists
//!
//! Every strategy receives a `List<T>` and an already resolved `Window`, so
//! the bounds policy is applied once, before any strategy runs, and all
//! strategies agree on every input. They differ only in how they traverse:
//!
//! - `recursive`: direct recursive drop then take; the result is built as
//!   the call stack unwinds. Stack depth grows with the window end, so this
//!   strategy is never the default.
//! - `accumulator`: one iterative pass collecting into a reversed list that
//!   is reversed once at the end. Constant stack. The default.
//! - `drop_take`: bounded `drop_front` followed by bounded `take_front`.
//! - `filter`: one pass over enumerated positions keeping those inside the
//!   window, stopping at the window end.
//! - `lazy`: materializes a `SliceIter`, the lazy window iterator that
//!   callers can also consume directly to chain further processing.
//!
//! All strategies stop traversing at the window end (or the list end,
//! whichever comes first), giving O(position reached) time.

pub mod accumulator;
pub mod drop_take;
pub mod filter;
pub mod lazy;
pub mod recursive;

use crate::list::List;
use accumulator::AccumulatorStrategy;
use drop_take::DropTakeStrategy;
use filter::FilterStrategy;
use lazy::LazyStrategy;
use recursive::RecursiveStrategy;
use slicer_core::window::Window;

/// A way of materializing the elements of a list that fall inside a window.
pub trait SliceStrategy {
    /// Returns a new list holding the elements of `list` at the positions
    /// selected by `window`, in their original order.
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone;

    /// Returns the name of the strategy.
    fn name(&self) -> &str;
}

/// The selectable slicing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// See `recursive::RecursiveStrategy`.
    Recursive,
    /// See `accumulator::AccumulatorStrategy`.
    #[default]
    Accumulator,
    /// See `drop_take::DropTakeStrategy`.
    DropTake,
    /// See `filter::FilterStrategy`.
    Filter,
    /// See `lazy::LazyStrategy`.
    Lazy,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Recursive,
        Strategy::Accumulator,
        Strategy::DropTake,
        Strategy::Filter,
        Strategy::Lazy,
    ];

    /// Returns `true` if the strategy uses call-stack space proportional to
    /// the window end.
    #[inline]
    pub const fn is_stack_bound(&self) -> bool {
        matches!(self, Self::Recursive)
    }
}

impl SliceStrategy for Strategy {
    fn slice<T>(&self, list: &List<T>, window: Window) -> List<T>
    where
        T: Clone,
    {
        tracing::trace!(strategy = self.name(), %window, "slicing list");
        match self {
            Self::Recursive => RecursiveStrategy.slice(list, window),
            Self::Accumulator => AccumulatorStrategy.slice(list, window),
            Self::DropTake => DropTakeStrategy.slice(list, window),
            Self::Filter => FilterStrategy.slice(list, window),
            Self::Lazy => LazyStrategy.slice(list, window),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Recursive => "Recursive",
            Self::Accumulator => "Accumulator",
            Self::DropTake => "DropTake",
            Self::Filter => "Filter",
            Self::Lazy => "Lazy",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
