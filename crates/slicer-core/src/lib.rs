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

//! # Slicer Core
//!
//! Bounds primitives shared by every slicing strategy in the `slicer`
//! workspace. A caller describes the range it wants with inclusive
//! `SliceBounds<I>` over any primitive integer type; a `BoundsPolicy`
//! decides how out-of-range bounds are treated; the outcome is a
//! non-negative, half-open `Window` that strategies consume directly.
//!
//! ## Modules
//!
//! - `bounds`: Inclusive `[start, end]` bounds, the `BoundsPolicy` that
//!   governs negative starts and overrunning ends, and the `InvalidRange`
//!   error raised by the strict policy.
//! - `window`: The resolved `[skip, skip + take)` position window, with
//!   clipping against a known length and conversion to `Range<usize>`.
//!
//! ## Purpose
//!
//! Resolving bounds exactly once, before any traversal starts, guarantees
//! that every strategy observes the same policy. Strategies never see raw
//! (possibly negative) integers.

pub mod bounds;
pub mod window;
