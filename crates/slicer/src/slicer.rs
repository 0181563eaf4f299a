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

//! # Configured Slicing
//!
//! `Slicer` is the configured entry point: it carries a `SlicerConfig`
//! (bounds policy and list strategy) and applies the policy exactly once per
//! request, handing the resolved `Window` to the chosen strategy. Lists and
//! contiguous storage are sliced under the same policy.
//!
//! ```rust
//! use slicer::{list, BoundsPolicy, InvalidRange, Slicer, Strategy};
//!
//! let slicer = Slicer::builder()
//!     .policy(BoundsPolicy::Strict)
//!     .strategy(Strategy::DropTake)
//!     .build();
//!
//! let xs = list![1, 2, 3, 4, 5];
//! assert_eq!(slicer.slice_list(&xs, 1, 3), Ok(list![2, 3, 4]));
//! assert_eq!(
//!     slicer.slice_list(&xs, 3, 7),
//!     Err(InvalidRange::EndPastLength { end: 7, len: 5 })
//! );
//! ```

use crate::{
    indexed,
    list::List,
    strategy::{SliceStrategy, Strategy, lazy::SliceIter},
};
use num_traits::PrimInt;
use slicer_core::{
    bounds::{BoundsPolicy, InvalidRange, SliceBounds},
    window::Window,
};

/// Configuration of a `Slicer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlicerConfig {
    /// How negative starts and overrunning ends are treated.
    pub policy: BoundsPolicy,
    /// How lists are traversed. Ignored for contiguous storage.
    pub strategy: Strategy,
}

impl std::fmt::Display for SlicerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SlicerConfig(policy: {}, strategy: {})",
            self.policy, self.strategy
        )
    }
}

/// A builder for `Slicer`.
///
/// Starts from `SlicerConfig::default()`: `BoundsPolicy::Clamp` with the
/// `Strategy::Accumulator` traversal.
#[derive(Debug, Clone, Default)]
pub struct SlicerBuilder {
    config: SlicerConfig,
}

impl SlicerBuilder {
    /// Creates a new builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bounds policy.
    #[inline]
    pub fn policy(mut self, policy: BoundsPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Sets the list traversal strategy.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Builds the `Slicer`.
    #[inline]
    pub fn build(self) -> Slicer {
        Slicer::new(self.config)
    }
}

/// Slices lists and contiguous storage under a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slicer {
    config: SlicerConfig,
}

impl Slicer {
    /// Creates a new `Slicer` from a configuration.
    #[inline]
    pub fn new(config: SlicerConfig) -> Self {
        Self { config }
    }

    /// Returns a builder starting from the default configuration.
    #[inline]
    pub fn builder() -> SlicerBuilder {
        SlicerBuilder::new()
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    /// Returns the bounds policy.
    #[inline]
    pub fn policy(&self) -> BoundsPolicy {
        self.config.policy
    }

    /// Returns the list traversal strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Resolves `[start, end]` into a window over `list` under the
    /// configured policy.
    ///
    /// The length of a list is only known by traversal, so under `Strict`
    /// the window's last position is probed (O(end)) and the full length is
    /// only measured when building the error.
    ///
    /// # Errors
    ///
    /// Only under `BoundsPolicy::Strict`.
    pub fn window<T, I>(
        &self,
        list: &List<T>,
        start: I,
        end: I,
    ) -> Result<Window, InvalidRange>
    where
        I: PrimInt,
    {
        if list.is_empty() {
            return Ok(Window::EMPTY);
        }

        let bounds = SliceBounds::new(start, end);
        let window = bounds.resolve(self.config.policy)?;
        if self.config.policy.is_strict()
            && window.last().is_some_and(|last| list.get(last).is_none())
        {
            let len = list.len();
            tracing::debug!(len, "rejecting slice end past list length");
            return Err(bounds.end_past_length(len));
        }

        Ok(window)
    }

    /// Returns a new list holding the elements of `list` at positions
    /// `start..=end`, traversed with the configured strategy.
    ///
    /// # Errors
    ///
    /// Only under `BoundsPolicy::Strict`.
    pub fn slice_list<T, I>(
        &self,
        list: &List<T>,
        start: I,
        end: I,
    ) -> Result<List<T>, InvalidRange>
    where
        T: Clone,
        I: PrimInt,
    {
        let window = self.window(list, start, end)?;
        Ok(self.config.strategy.slice(list, window))
    }

    /// Returns a lazy iterator over the elements of `list` at positions
    /// `start..=end`, regardless of the configured strategy.
    ///
    /// # Errors
    ///
    /// Only under `BoundsPolicy::Strict`.
    pub fn iter<'a, T, I>(
        &self,
        list: &'a List<T>,
        start: I,
        end: I,
    ) -> Result<SliceIter<'a, T>, InvalidRange>
    where
        I: PrimInt,
    {
        let window = self.window(list, start, end)?;
        Ok(list.slice_iter(window))
    }

    /// Borrows the elements of `items` at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// Only under `BoundsPolicy::Strict`.
    #[inline]
    pub fn slice_slice<'a, T, I>(
        &self,
        items: &'a [T],
        start: I,
        end: I,
    ) -> Result<&'a [T], InvalidRange>
    where
        I: PrimInt,
    {
        indexed::slice_indexed(items, start, end, self.config.policy)
    }

    /// Copies the elements of `items` at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// Only under `BoundsPolicy::Strict`.
    #[inline]
    pub fn slice_to_vec<T, I>(
        &self,
        items: &[T],
        start: I,
        end: I,
    ) -> Result<Vec<T>, InvalidRange>
    where
        T: Clone,
        I: PrimInt,
    {
        indexed::slice_to_vec(items, start, end, self.config.policy)
    }
}

impl std::fmt::Display for Slicer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slicer({})", self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    fn strict(strategy: Strategy) -> Slicer {
        Slicer::builder()
            .policy(BoundsPolicy::Strict)
            .strategy(strategy)
            .build()
    }

    fn clamp(strategy: Strategy) -> Slicer {
        Slicer::builder().strategy(strategy).build()
    }

    #[test]
    fn test_builder_defaults() {
        let slicer = Slicer::builder().build();
        assert_eq!(slicer, Slicer::default());
        assert_eq!(slicer.policy(), BoundsPolicy::Clamp);
        assert_eq!(slicer.strategy(), Strategy::Accumulator);
        assert_eq!(
            format!("{}", slicer),
            "Slicer(SlicerConfig(policy: Clamp, strategy: Accumulator))"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let slicer = strict(Strategy::Filter);
        assert_eq!(
            *slicer.config(),
            SlicerConfig {
                policy: BoundsPolicy::Strict,
                strategy: Strategy::Filter,
            }
        );
    }

    #[test]
    fn test_clamp_scenarios_for_every_strategy() {
        for strategy in Strategy::ALL {
            let slicer = clamp(strategy);
            assert_eq!(slicer.slice_list(&list![1, 2, 3, 4, 5], 1, 3), Ok(list![2, 3, 4]));
            assert_eq!(slicer.slice_list(&list![1, 2, 3], 5, 9), Ok(list![]));
            assert_eq!(slicer.slice_list(&List::<i32>::new(), 0, 3), Ok(list![]));
            assert_eq!(slicer.slice_list(&list![1, 2, 3], -4, 0), Ok(list![1]));
            assert_eq!(slicer.slice_list(&list![1, 2, 3], 2, 1), Ok(list![]));
        }
    }

    #[test]
    fn test_strict_scenarios_for_every_strategy() {
        for strategy in Strategy::ALL {
            let slicer = strict(strategy);
            assert_eq!(slicer.slice_list(&list![1, 2, 3, 4, 5], 1, 3), Ok(list![2, 3, 4]));
            assert_eq!(
                slicer.slice_list(&list![1, 2, 3], 5, 9),
                Err(InvalidRange::EndPastLength { end: 9, len: 3 })
            );
            assert_eq!(
                slicer.slice_list(&list![1, 2, 3], -1, 1),
                Err(InvalidRange::NegativeStart { start: -1 })
            );
            assert_eq!(slicer.slice_list(&List::<i32>::new(), 0, 3), Ok(list![]));
            assert_eq!(slicer.slice_list(&list![1, 2, 3], 2, 1), Ok(list![]));
            assert_eq!(slicer.slice_list(&list![1, 2, 3], 0, 2), Ok(list![1, 2, 3]));
        }
    }

    #[test]
    fn test_lists_and_slices_share_policy() {
        for policy in [BoundsPolicy::Clamp, BoundsPolicy::Strict] {
            let slicer = Slicer::builder().policy(policy).build();
            let items = vec![1, 2, 3, 4];
            let list: List<_> = items.iter().copied().collect();
            for (start, end) in [(0, 3), (1, 2), (-1, 2), (2, 9), (3, 1), (4, 4)] {
                let from_list = slicer.slice_list(&list, start, end).map(|l| l.to_vec());
                let from_vec = slicer.slice_to_vec(&items, start, end);
                assert_eq!(from_list, from_vec, "{} on [{}, {}]", policy, start, end);
                assert_eq!(
                    slicer.slice_slice(&items, start, end).map(<[i32]>::to_vec),
                    from_vec
                );
            }
        }
    }

    #[test]
    fn test_saturated_inverted_bounds_are_empty_under_strict() {
        let xs = list![1, 2, 3];
        let slicer = strict(Strategy::Accumulator);
        assert_eq!(slicer.slice_list(&xs, u128::MAX, u128::MAX - 1), Ok(list![]));
        assert_eq!(slicer.slice_to_vec(&[1, 2, 3], u128::MAX, u128::MAX - 1), Ok(vec![]));
    }

    #[test]
    fn test_iter_is_lazy_and_policy_checked() {
        let xs = list![1, 2, 3, 4, 5];
        let total: i32 = clamp(Strategy::Recursive).iter(&xs, 1, 3).unwrap().sum();
        assert_eq!(total, 9);
        assert!(strict(Strategy::Lazy).iter(&xs, 1, 5).is_err());
    }
}
