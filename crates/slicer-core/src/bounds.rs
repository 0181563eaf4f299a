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

//! # Inclusive Slice Bounds
//!
//! `SliceBounds<I>` describes a request for the positions `p` with
//! `start <= p <= end`, where `start` and `end` are any primitive integer
//! type. Requests are not required to be well formed: `end` may precede
//! `start`, `start` may be negative, and `end` may overrun the sequence.
//! How those cases are treated is decided by a `BoundsPolicy`:
//!
//! | Case                   | `Clamp` (default)     | `Strict`                      |
//! |------------------------|-----------------------|-------------------------------|
//! | `end < start`          | empty                 | empty                         |
//! | `start < 0`            | start clamped to `0`  | `InvalidRange::NegativeStart` |
//! | `end >= len`           | truncated to `len`    | `InvalidRange::EndPastLength` |
//! | empty input sequence   | empty                 | empty                         |
//!
//! A negative start is rejected under `Strict` before the inversion check,
//! so `[-3, -5]` is an error rather than an empty slice.
//!
//! ## Usage
//!
//! ```rust
//! use slicer_core::bounds::{BoundsPolicy, InvalidRange, SliceBounds};
//! use slicer_core::window::Window;
//!
//! let bounds = SliceBounds::new(-2, 3);
//! assert_eq!(bounds.resolve(BoundsPolicy::Clamp), Ok(Window::new(0, 4)));
//! assert_eq!(
//!     bounds.resolve(BoundsPolicy::Strict),
//!     Err(InvalidRange::NegativeStart { start: -2 })
//! );
//! ```

use crate::window::Window;
use num_traits::PrimInt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Decides how bounds outside the addressable positions of a sequence are
/// treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundsPolicy {
    /// Negative starts are clamped to zero and overrunning ends are
    /// truncated to the sequence length. Never fails.
    #[default]
    Clamp,
    /// Negative starts and ends past the last element are caller errors.
    Strict,
}

impl BoundsPolicy {
    /// Returns `true` if this is the `Strict` policy.
    #[inline]
    pub const fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl std::fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "Clamp"),
            Self::Strict => write!(f, "Strict"),
        }
    }
}

/// The error raised when bounds are rejected by `BoundsPolicy::Strict`.
///
/// Bound values are reported widened to `i128`. Unsigned values larger than
/// `i128::MAX` are reported as `i128::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidRange {
    /// The inclusive start bound is below zero.
    #[error("slice start {start} is negative")]
    NegativeStart { start: i128 },
    /// The inclusive end bound addresses a position the sequence does not have.
    #[error("slice end {end} lies past the end of a sequence of length {len}")]
    EndPastLength { end: i128, len: usize },
}

/// Inclusive bounds `[start, end]` of a slice request.
///
/// # Examples
///
/// ```rust
/// # use slicer_core::bounds::SliceBounds;
/// let b = SliceBounds::new(2u32, 6u32);
/// assert_eq!(b.start(), 2);
/// assert_eq!(b.end(), 6);
/// assert!(!b.is_inverted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceBounds<I> {
    start: I,
    end: I,
}

/// Widens a primitive integer to `i128`, saturating values that do not fit.
///
/// Only unsigned values above `i128::MAX` fail the conversion; negative
/// values of every primitive type fit.
#[inline(always)]
fn widen<I>(value: I) -> i128
where
    I: PrimInt,
{
    value.to_i128().unwrap_or(i128::MAX)
}

/// Narrows a non-negative `i128` to `usize`, saturating at `usize::MAX`.
#[inline(always)]
fn narrow(value: i128) -> usize {
    debug_assert!(value >= 0, "called `narrow` with a negative value");
    usize::try_from(value).unwrap_or(usize::MAX)
}

impl<I> SliceBounds<I>
where
    I: PrimInt,
{
    /// Creates new inclusive bounds. Any pair of values is accepted.
    #[inline]
    pub fn new(start: I, end: I) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> I {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub fn end(&self) -> I {
        self.end
    }

    /// Returns `true` if `end < start`, which always selects nothing.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Resolves the bounds into a position window without knowing the
    /// sequence length.
    ///
    /// The returned window may extend past the end of the sequence; linked
    /// traversals stop when the sequence runs out. Under `Strict` the caller
    /// is still responsible for verifying that the window's last position
    /// exists (see `end_past_length`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange::NegativeStart` if `start < 0` and `policy` is
    /// `Strict`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::bounds::{BoundsPolicy, SliceBounds};
    /// # use slicer_core::window::Window;
    /// let w = SliceBounds::new(2, 6).resolve(BoundsPolicy::Clamp).unwrap();
    /// assert_eq!(w, Window::new(2, 5));
    ///
    /// let inverted = SliceBounds::new(6, 2).resolve(BoundsPolicy::Strict).unwrap();
    /// assert!(inverted.is_empty());
    /// ```
    pub fn resolve(self, policy: BoundsPolicy) -> Result<Window, InvalidRange> {
        let start = widen(self.start);
        if policy.is_strict() && start < 0 {
            tracing::debug!(%start, end = %widen(self.end), "rejecting negative slice start");
            return Err(InvalidRange::NegativeStart { start });
        }
        Ok(self.clamped())
    }

    /// Resolves the bounds under `BoundsPolicy::Clamp`. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::bounds::SliceBounds;
    /// # use slicer_core::window::Window;
    /// assert_eq!(SliceBounds::new(-4, 1).clamped(), Window::new(0, 2));
    /// assert!(SliceBounds::new(-4, -1).clamped().is_empty());
    /// ```
    pub fn clamped(self) -> Window {
        let start = widen(self.start);
        let end = widen(self.end);
        if start < 0 {
            tracing::debug!(%start, %end, "clamping negative slice start to zero");
        }
        // Widening saturates, so inversion is decided on the original values.
        if self.is_inverted() {
            return Window::EMPTY;
        }
        Self::window_from(start.max(0), end)
    }

    /// Resolves the bounds against a sequence of known length `len`.
    ///
    /// The returned window is clipped to `len`, so `as_range()` is always a
    /// valid index range for a sequence of that length. An empty sequence
    /// yields the empty window under every policy.
    ///
    /// # Errors
    ///
    /// Under `Strict`, returns `InvalidRange::NegativeStart` for a negative
    /// start and `InvalidRange::EndPastLength` if the (non-inverted) bounds
    /// address a position at or after `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slicer_core::bounds::{BoundsPolicy, InvalidRange, SliceBounds};
    /// # use slicer_core::window::Window;
    /// let b = SliceBounds::new(5, 9);
    /// assert_eq!(b.resolve_within(3, BoundsPolicy::Clamp), Ok(Window::new(3, 0)));
    /// assert_eq!(
    ///     b.resolve_within(3, BoundsPolicy::Strict),
    ///     Err(InvalidRange::EndPastLength { end: 9, len: 3 })
    /// );
    /// ```
    pub fn resolve_within(
        self,
        len: usize,
        policy: BoundsPolicy,
    ) -> Result<Window, InvalidRange> {
        if len == 0 {
            return Ok(Window::EMPTY);
        }

        let window = self.resolve(policy)?;
        if policy.is_strict() && window.last().is_some_and(|last| last >= len) {
            tracing::debug!(
                end = %widen(self.end),
                len,
                "rejecting slice end past sequence length"
            );
            return Err(self.end_past_length(len));
        }

        Ok(window.clip(len))
    }

    /// Builds the `EndPastLength` error for these bounds and a sequence of
    /// length `len`.
    ///
    /// Linked sequences learn their length only by traversal, so strict
    /// callers probe the window's last position first and only measure the
    /// full length when reporting this error.
    #[inline]
    pub fn end_past_length(&self, len: usize) -> InvalidRange {
        InvalidRange::EndPastLength {
            end: widen(self.end),
            len,
        }
    }

    /// Builds the window for a non-negative `start`.
    #[inline(always)]
    fn window_from(start: i128, end: i128) -> Window {
        debug_assert!(start >= 0, "called `window_from` with a negative start");
        if end < start {
            return Window::EMPTY;
        }
        // `end - start` cannot overflow: start >= 0.
        let take = (end - start).saturating_add(1);
        Window::new(narrow(start), narrow(take))
    }
}

impl<I> From<RangeInclusive<I>> for SliceBounds<I>
where
    I: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<I>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<I> From<(I, I)> for SliceBounds<I>
where
    I: PrimInt,
{
    #[inline]
    fn from((start, end): (I, I)) -> Self {
        Self::new(start, end)
    }
}

impl<I> std::fmt::Display for SliceBounds<I>
where
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn b(start: IntegerType, end: IntegerType) -> SliceBounds<IntegerType> {
        SliceBounds::new(start, end)
    }

    #[test]
    fn test_resolve_in_range() {
        assert_eq!(b(2, 6).resolve(BoundsPolicy::Clamp), Ok(Window::new(2, 5)));
        assert_eq!(b(2, 6).resolve(BoundsPolicy::Strict), Ok(Window::new(2, 5)));
        assert_eq!(b(0, 0).resolve(BoundsPolicy::Clamp), Ok(Window::new(0, 1)));
    }

    #[test]
    fn test_resolve_inverted_is_empty() {
        for policy in [BoundsPolicy::Clamp, BoundsPolicy::Strict] {
            let w = b(6, 2).resolve(policy).unwrap();
            assert!(w.is_empty());
        }
    }

    #[test]
    fn test_resolve_negative_start_clamp() {
        assert_eq!(b(-3, 2).resolve(BoundsPolicy::Clamp), Ok(Window::new(0, 3)));
        // Negative end after clamping the start selects nothing.
        assert!(b(-5, -1).resolve(BoundsPolicy::Clamp).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_negative_start_strict() {
        assert_eq!(
            b(-3, 2).resolve(BoundsPolicy::Strict),
            Err(InvalidRange::NegativeStart { start: -3 })
        );
        // Checked before inversion.
        assert_eq!(
            b(-3, -5).resolve(BoundsPolicy::Strict),
            Err(InvalidRange::NegativeStart { start: -3 })
        );
    }

    #[test]
    fn test_resolve_extreme_values_saturate() {
        let w = b(0, IntegerType::MAX).resolve(BoundsPolicy::Clamp).unwrap();
        assert_eq!(w.skip(), 0);
        assert_eq!(w.take(), narrow(IntegerType::MAX as i128 + 1));

        let w = SliceBounds::new(i128::MIN, i128::MAX)
            .resolve(BoundsPolicy::Clamp)
            .unwrap();
        assert_eq!(w.skip(), 0);
        assert_eq!(w.take(), usize::MAX);

        let w = SliceBounds::new(u128::MAX - 1, u128::MAX)
            .resolve(BoundsPolicy::Clamp)
            .unwrap();
        assert_eq!(w.skip(), usize::MAX);
    }

    #[test]
    fn test_resolve_saturated_inverted_bounds_stay_empty() {
        let bounds = SliceBounds::new(u128::MAX, u128::MAX - 1);
        assert!(bounds.is_inverted());
        assert!(bounds.clamped().is_empty());
        for policy in [BoundsPolicy::Clamp, BoundsPolicy::Strict] {
            assert!(bounds.resolve(policy).unwrap().is_empty());
            assert_eq!(bounds.resolve_within(3, policy), Ok(Window::new(0, 0)));
        }
    }

    #[test]
    fn test_resolve_unsigned() {
        let w = SliceBounds::new(1u8, 3u8).resolve(BoundsPolicy::Strict).unwrap();
        assert_eq!(w, Window::new(1, 3));
    }

    #[test]
    fn test_resolve_within_truncates_under_clamp() {
        assert_eq!(
            b(1, 100).resolve_within(5, BoundsPolicy::Clamp),
            Ok(Window::new(1, 4))
        );
        assert_eq!(
            b(5, 9).resolve_within(3, BoundsPolicy::Clamp),
            Ok(Window::new(3, 0))
        );
    }

    #[test]
    fn test_resolve_within_rejects_overrun_under_strict() {
        assert_eq!(
            b(1, 5).resolve_within(5, BoundsPolicy::Strict),
            Err(InvalidRange::EndPastLength { end: 5, len: 5 })
        );
        assert_eq!(
            b(1, 4).resolve_within(5, BoundsPolicy::Strict),
            Ok(Window::new(1, 4))
        );
        // Inverted bounds never overrun.
        assert_eq!(
            b(9, 2).resolve_within(5, BoundsPolicy::Strict),
            Ok(Window::new(0, 0))
        );
    }

    #[test]
    fn test_resolve_within_empty_sequence_is_always_empty() {
        for policy in [BoundsPolicy::Clamp, BoundsPolicy::Strict] {
            assert_eq!(b(0, 3).resolve_within(0, policy), Ok(Window::EMPTY));
            assert_eq!(b(-4, 3).resolve_within(0, policy), Ok(Window::EMPTY));
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SliceBounds::from(2..=6), b(2, 6));
        assert_eq!(SliceBounds::from((2, 6)), b(2, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", b(-1, 4)), "[-1, 4]");
        assert_eq!(format!("{}", BoundsPolicy::Strict), "Strict");
        assert_eq!(
            InvalidRange::EndPastLength { end: 9, len: 3 }.to_string(),
            "slice end 9 lies past the end of a sequence of length 3"
        );
        assert_eq!(
            InvalidRange::NegativeStart { start: -1 }.to_string(),
            "slice start -1 is negative"
        );
    }
}
