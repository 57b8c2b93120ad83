use super::Stream;
use crate::collector::Collector;

/// Extends [`Iterator`] with methods for working with [`Stream`]s and
/// [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Wraps this iterator in a [`Stream`].
    ///
    /// Equivalent to [`Stream::of(self)`](Stream::of).
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::prelude::*;
    ///
    /// let evens = (0..10).into_stream().filter(|n| n % 2 == 0).to_list();
    ///
    /// assert_eq!(evens, [0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    fn into_stream(self) -> Stream<Self>
    where
        Self: Sized,
    {
        Stream::of(self)
    }

    /// Feeds items from this iterator into the collector till the collector
    /// stops accumulating or the iterator is exhausted, and returns the
    /// collector's output.
    ///
    /// Items after the one the collector stopped on stay in the iterator.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{prelude::*, collectors};
    ///
    /// let mut words = ["a", "b", "a", "c"].into_iter();
    /// let first_clash = words.feed_into(collectors::to_map(|w: &&str| *w, |_| ()));
    ///
    /// assert!(first_clash.is_err());
    /// assert_eq!(words.next(), Some("c"));
    /// ```
    #[inline]
    fn feed_into<C>(&mut self, collector: C) -> C::Output
    where
        C: Collector<Self::Item>,
    {
        collector.collect_then_finish(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
