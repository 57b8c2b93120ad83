use std::ops::ControlFlow;

use super::{CollectingAndThen, Mapping, assert_collector};

/// Describes a reduction over items of type `T`.
///
/// A collector is split into three phases:
///
/// - [`supply()`](Collector::supply): creates a fresh accumulator.
/// - [`accumulate()`](Collector::accumulate): folds one item into an accumulator and
///   returns whether the accumulator still accepts items.
/// - [`finish()`](Collector::finish): turns the accumulator into the final result.
///
/// All three take `&self`. The collector is immutable configuration, and the
/// accumulator produced by [`supply()`](Collector::supply) is the only mutable
/// state of a reduction. That is what lets one collector value drive any number of
/// independent reductions, including the nested ones run by
/// [`partition_downstream()`] or [`grouping_by_downstream()`].
///
/// `&C` is a collector whenever `C` is, so a collector can be lent out instead of
/// moved.
///
/// # Implementing
///
/// Pick an accumulator type, then fold into it.
///
/// ```
/// use std::ops::ControlFlow;
/// use streamfold::prelude::*;
///
/// /// Counts words longer than a threshold.
/// struct LongWords(usize);
///
/// impl<'a> Collector<&'a str> for LongWords {
///     type Accumulator = usize;
///     type Output = usize;
///
///     fn supply(&self) -> usize {
///         0
///     }
///
///     fn accumulate(&self, count: &mut usize, word: &'a str) -> ControlFlow<()> {
///         if word.len() > self.0 {
///             *count += 1;
///         }
///         ControlFlow::Continue(())
///     }
///
///     fn finish(&self, count: usize) -> usize {
///         count
///     }
/// }
///
/// let long_words = LongWords(3);
/// let words = ["the", "noble", "and", "the", "singer"];
///
/// assert_eq!(Stream::of(words).collect(&long_words), 2);
/// // Same configuration, independent reduction.
/// assert_eq!(Stream::of(["swordswoman"]).collect(&long_words), 1);
/// ```
///
/// [`partition_downstream()`]: crate::collectors::partition_downstream
/// [`grouping_by_downstream()`]: crate::collectors::grouping_by_downstream
pub trait Collector<T> {
    /// The mutable state of one reduction.
    type Accumulator;

    /// The result produced by [`finish()`](Collector::finish).
    type Output;

    /// Creates a new, empty accumulator.
    fn supply(&self) -> Self::Accumulator;

    /// Folds one item into the accumulator.
    ///
    /// Returns [`Break(())`] if the accumulator will not accept any further item,
    /// or [`Continue(())`] otherwise. Drivers stop feeding on [`Break(())`], so a
    /// collector can end a reduction early (for example, [`to_map()`] does this on
    /// its first duplicate key). Feeding an accumulator after it has signalled
    /// [`Break(())`] has unspecified results, though it is never unsafe.
    ///
    /// [`Break(())`]: ControlFlow::Break
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`to_map()`]: crate::collectors::to_map
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()>;

    /// Turns the accumulator into the result of the reduction.
    ///
    /// Drivers call this exactly once, after the last call to
    /// [`accumulate()`](Collector::accumulate).
    fn finish(&self, accum: Self::Accumulator) -> Self::Output;

    /// Folds items from an iterator into the accumulator until either the
    /// iterator is exhausted or the accumulator stops accepting items.
    ///
    /// Items after the one that caused the stop are left in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{prelude::*, collectors};
    ///
    /// let to_list = collectors::to_list();
    /// let mut accum = to_list.supply();
    ///
    /// assert!(to_list.collect_many(&mut accum, [1, 2]).is_continue());
    /// assert!(to_list.collect_many(&mut accum, [3]).is_continue());
    /// assert_eq!(to_list.finish(accum), [1, 2, 3]);
    /// ```
    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        // `try_for_each` rather than `for`, since adaptors like `chain` fold faster.
        items
            .into_iter()
            .try_for_each(|item| self.accumulate(accum, item))
    }

    /// Runs a whole reduction: supplies an accumulator, folds the items into it,
    /// and finishes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{prelude::*, collectors};
    ///
    /// let sum = collectors::reducing_identity(0, |a, b| a + b);
    ///
    /// assert_eq!(sum.collect_then_finish([1, 2, 3]), 6);
    /// assert_eq!(sum.collect_then_finish([]), 0);
    /// ```
    fn collect_then_finish(&self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let mut accum = self.supply();
        // Whether it stopped early doesn't matter. Either way we are done.
        let _ = self.collect_many(&mut accum, items);
        self.finish(accum)
    }

    /// Creates a collector that transforms every item with `mapper` before
    /// feeding it to this collector.
    ///
    /// This is the method form of [`mapping()`](crate::collectors::mapping).
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{prelude::*, collectors};
    ///
    /// let lengths = collectors::to_list().map(|s: &str| s.len());
    ///
    /// assert_eq!(Stream::of(["a", "bcd", "ef"]).collect(lengths), [1, 3, 2]);
    /// ```
    #[inline]
    fn map<U, F>(self, mapper: F) -> Mapping<Self, F>
    where
        Self: Sized,
        F: Fn(U) -> T,
    {
        assert_collector::<_, U>(Mapping::new(self, mapper))
    }

    /// Creates a collector that post-processes the finished result of this
    /// collector through `finisher`.
    ///
    /// This is the method form of
    /// [`collecting_and_then()`](crate::collectors::collecting_and_then).
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{prelude::*, collectors};
    ///
    /// let len = collectors::to_set().and_then(|set| set.len());
    ///
    /// assert_eq!(Stream::of([1, 2, 1, 3, 2]).collect(len), 3);
    /// ```
    #[inline]
    fn and_then<R, F>(self, finisher: F) -> CollectingAndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> R,
    {
        assert_collector::<_, T>(CollectingAndThen::new(self, finisher))
    }
}

impl<T, C> Collector<T> for &C
where
    C: Collector<T> + ?Sized,
{
    type Accumulator = C::Accumulator;

    type Output = C::Output;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        (**self).supply()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        (**self).accumulate(accum, item)
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        (**self).finish(accum)
    }

    #[inline]
    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        (**self).collect_many(accum, items)
    }
}
