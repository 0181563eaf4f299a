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

//! # Slicer
//!
//! Contiguous sub-range extraction with **inclusive** bounds: the slice of a
//! sequence for `[start, end]` holds the elements at positions `p` with
//! `start <= p <= end`, in their original order.
//!
//! ## Modules
//!
//! - `list`: The persistent, `Arc`-shared singly-linked `List<T>` with the
//!   bounded `take_front`/`drop_front` primitives.
//! - `strategy`: Five interchangeable traversals over a list (`Recursive`,
//!   `Accumulator`, `DropTake`, `Filter`, `Lazy`) behind the `SliceStrategy`
//!   trait, plus the lazy `SliceIter`.
//! - `indexed`: Bounds-clamped sub-ranges over contiguous storage.
//! - `slicer`: The configured `Slicer` front end and its `SlicerConfig`.
//!
//! ## Bounds
//!
//! Bounds are resolved by `slicer_core` under a `BoundsPolicy` before any
//! traversal, so every strategy observes the same rules:
//!
//! - `end < start` selects nothing.
//! - An empty sequence always yields an empty slice.
//! - `Clamp` (default) clamps a negative start to zero and truncates an end
//!   past the sequence; it never fails.
//! - `Strict` rejects both with `InvalidRange`.
//!
//! ## Usage
//!
//! ```rust
//! use slicer::{list, slice};
//!
//! let letters = list!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
//! assert_eq!(slice(&letters, 2, 6), list!["c", "d", "e", "f", "g"]);
//! assert_eq!(slice(&letters, 8, 20), list!["i", "j"]);
//! assert_eq!(slice(&letters, 6, 2), list![]);
//! ```

pub mod indexed;
pub mod list;
pub mod slicer;
pub mod strategy;

pub use list::List;
pub use slicer::{Slicer, SlicerBuilder, SlicerConfig};
pub use slicer_core::{
    bounds::{BoundsPolicy, InvalidRange, SliceBounds},
    window::Window,
};
pub use strategy::{SliceStrategy, Strategy, lazy::SliceIter};

use num_traits::PrimInt;

/// Returns a new list holding the elements of `list` at positions
/// `start..=end`.
///
/// Uses `BoundsPolicy::Clamp` and the default `Strategy::Accumulator`, so it
/// never fails and never recurses. Use `Slicer` for another policy or
/// strategy.
///
/// # Examples
///
/// ```rust
/// use slicer::{list, slice, List};
///
/// assert_eq!(slice(&list![1, 2, 3, 4, 5], 1, 3), list![2, 3, 4]);
/// assert_eq!(slice(&List::<i32>::new(), 0, 3), list![]);
/// assert_eq!(slice(&list![1, 2, 3], 5, 9), list![]);
/// assert_eq!(slice(&list![1, 2, 3], -2, 0), list![1]);
/// ```
#[inline]
pub fn slice<T, I>(list: &List<T>, start: I, end: I) -> List<T>
where
    T: Clone,
    I: PrimInt,
{
    Strategy::default().slice(list, SliceBounds::new(start, end).clamped())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_concrete_scenarios() {
        let letters = list!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        assert_eq!(slice(&letters, 2, 6), list!["c", "d", "e", "f", "g"]);
        assert_eq!(slice(&List::<i32>::new(), 0, 3), list![]);
        assert_eq!(slice(&list![1, 2, 3], 5, 9), list![]);
        assert_eq!(slice(&list![1, 2, 3, 4, 5], 1, 3), list![2, 3, 4]);
    }

    #[test]
    fn test_slice_matches_default_slicer() {
        let xs: List<u16> = (0..32).collect();
        let slicer = Slicer::default();
        for (start, end) in [(-3i64, 4i64), (0, 31), (10, 50), (40, 60), (7, 6)] {
            assert_eq!(Ok(slice(&xs, start, end)), slicer.slice_list(&xs, start, end));
        }
    }

    #[test]
    fn test_slice_full_range_is_identity() {
        let xs = list![3, 1, 4, 1, 5];
        assert_eq!(slice(&xs, 0, xs.len() - 1), xs);
    }

    #[test]
    fn test_slice_accepts_any_integer_type() {
        let xs = list![1, 2, 3];
        assert_eq!(slice(&xs, 1u8, 2u8), list![2, 3]);
        assert_eq!(slice(&xs, 1usize, 2usize), list![2, 3]);
        assert_eq!(slice(&xs, -1i128, 0i128), list![1]);
    }
}
