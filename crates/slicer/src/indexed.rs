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

//! # Slicing Contiguous Storage
//!
//! Sequences with O(1) positional access do not need a traversal: the
//! bounds are resolved against the known length, clipped, and used as a
//! sub-range directly. `slice_indexed` borrows the selected run, so a slice
//! costs O(1); `slice_to_vec` copies exactly the selected elements, so it
//! costs O(result length) no matter how far from the front the run starts.
//!
//! To slice a `List` repeatedly, convert it once with `List::to_vec` and
//! slice the vector.
//!
//! ```rust
//! use slicer::indexed::{slice_clamped, slice_indexed};
//! use slicer_core::bounds::{BoundsPolicy, InvalidRange};
//!
//! let xs = [1, 2, 3, 4, 5];
//! assert_eq!(slice_clamped(&xs, 1, 3), &[2, 3, 4]);
//! assert_eq!(slice_clamped(&xs, -2, 1), &[1, 2]);
//! assert_eq!(
//!     slice_indexed(&xs, 3, 9, BoundsPolicy::Strict),
//!     Err(InvalidRange::EndPastLength { end: 9, len: 5 })
//! );
//! ```

use num_traits::PrimInt;
use slicer_core::bounds::{BoundsPolicy, InvalidRange, SliceBounds};

/// Borrows the elements of `items` at positions `start..=end`.
///
/// # Errors
///
/// Only under `BoundsPolicy::Strict`; see `SliceBounds::resolve_within`.
#[inline]
pub fn slice_indexed<T, I>(
    items: &[T],
    start: I,
    end: I,
    policy: BoundsPolicy,
) -> Result<&[T], InvalidRange>
where
    I: PrimInt,
{
    let window = SliceBounds::new(start, end).resolve_within(items.len(), policy)?;
    Ok(items.get(window.as_range()).unwrap_or_default())
}

/// Copies the elements of `items` at positions `start..=end` into a new
/// vector.
///
/// # Errors
///
/// Only under `BoundsPolicy::Strict`; see `SliceBounds::resolve_within`.
#[inline]
pub fn slice_to_vec<T, I>(
    items: &[T],
    start: I,
    end: I,
    policy: BoundsPolicy,
) -> Result<Vec<T>, InvalidRange>
where
    T: Clone,
    I: PrimInt,
{
    slice_indexed(items, start, end, policy).map(<[T]>::to_vec)
}

/// Borrows the elements of `items` at positions `start..=end` under
/// `BoundsPolicy::Clamp`. Never fails.
#[inline]
pub fn slice_clamped<T, I>(items: &[T], start: I, end: I) -> &[T]
where
    I: PrimInt,
{
    let window = SliceBounds::new(start, end).clamped().clip(items.len());
    items.get(window.as_range()).unwrap_or_default()
}
