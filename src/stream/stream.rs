use std::{
    cmp::Ordering,
    hash::Hash,
    iter::{Chain, Empty, Filter, FlatMap, Fuse, Inspect, Map, Take},
    ops::Add,
    vec,
};

use itertools::{Itertools, Unique};
use num_traits::{PrimInt, ToPrimitive};
use tracing::trace;

use super::{IntRange, Iterate, Truthy};
use crate::{
    collector::Collector,
    error::{Result, StreamError},
};

/// A lazy, single-pass pipeline over a cursor `I`.
///
/// A `Stream` is built from a source ([`of()`](Stream::of), [`range()`](Stream::range),
/// [`iterate()`](Stream::iterate), ...), extended with intermediate stages that
/// take the stream by value ([`filter()`](Stream::filter), [`map()`](Stream::map),
/// [`limit()`](Stream::limit), ...), and driven by a terminal operation
/// ([`to_list()`](Stream::to_list), [`collect()`](Stream::collect), ...).
///
/// Nothing is pulled from the source until a terminal operation asks for it,
/// and then only as much as that operation needs. Stages are statically
/// composed, so a stream costs the same as the equivalent iterator chain.
///
/// Terminal operations borrow the stream mutably and drive its cursor in
/// place. Running a second one observes only what the first left behind:
///
/// ```
/// use streamfold::Stream;
///
/// let mut digits = Stream::range(5);
///
/// assert_eq!(digits.find_first(), Some(0));
/// assert_eq!(digits.to_list(), [1, 2, 3, 4]);
/// // Exhausted, not an error.
/// assert_eq!(digits.to_list(), []);
/// ```
///
/// Consuming an infinite source through an operation that needs every element
/// ([`count()`](Stream::count), [`to_list()`](Stream::to_list),
/// [`sorted()`](Stream::sorted), ...) never returns. Bound it with
/// [`limit()`](Stream::limit) first.
#[derive(Debug)]
pub struct Stream<I> {
    iter: I,
}

impl<I: Iterator> Stream<I> {
    /// Creates a stream over anything iterable, including a cursor that is
    /// already partially consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let mut words = "a bb ccc".split(' ');
    /// words.next();
    ///
    /// assert_eq!(Stream::of(words).map(str::len).to_list(), [2, 3]);
    /// ```
    #[inline]
    pub fn of<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }
}

impl<T> Stream<Empty<T>> {
    /// Creates a stream that is already exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let mut nothing = Stream::empty();
    ///
    /// assert!(nothing.all_match(|c: &char| c.is_alphabetic()));
    /// assert_eq!(nothing.count(), 0);
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self {
            iter: std::iter::empty(),
        }
    }
}

impl<T, F> Stream<Iterate<T, F>>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    /// Creates an infinite stream of `seed`, `step(&seed)`, `step(&step(&seed))`, ...
    ///
    /// Successors are computed only when pulled.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let powers = Stream::iterate(1, |x| x * 2).limit(5).to_list();
    ///
    /// assert_eq!(powers, [1, 2, 4, 8, 16]);
    /// ```
    #[inline]
    pub fn iterate(seed: T, step: F) -> Self {
        Self {
            iter: Iterate::new(seed, step),
        }
    }
}

impl<T: PrimInt> Stream<IntRange<T>> {
    /// Creates a stream of `0, 1, ..., stop - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::range(5).to_list(), [0, 1, 2, 3, 4]);
    /// assert_eq!(Stream::range(-1).to_list(), []);
    /// ```
    #[inline]
    pub fn range(stop: T) -> Self {
        Self::range_by(T::zero(), stop, T::one())
    }

    /// Creates a stream of `start, start + 1, ..., stop - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::range_between(0, 5).to_list(), [0, 1, 2, 3, 4]);
    /// assert_eq!(Stream::range_between(3_u8, 3).count(), 0);
    /// ```
    #[inline]
    pub fn range_between(start: T, stop: T) -> Self {
        Self::range_by(start, stop, T::one())
    }

    /// Creates a stream of `start, start + step, ...` that ends before reaching
    /// `stop`. A negative `step` counts down.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::range_by(2, 10, 3).to_list(), [2, 5, 8]);
    /// assert_eq!(Stream::range_by(5, 0, -2).to_list(), [5, 3, 1]);
    /// ```
    #[inline]
    pub fn range_by(start: T, stop: T, step: T) -> Self {
        Self {
            iter: IntRange::new(start, stop, step),
        }
    }
}

impl<A, B> Stream<Chain<A, B>>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Creates a stream of everything in `a` followed by everything in `b`.
    ///
    /// `b` is not touched until `a` is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let mut both = Stream::concat(Stream::range(2), Stream::of([7, 8]));
    ///
    /// assert_eq!(both.to_list(), [0, 1, 7, 8]);
    /// ```
    #[inline]
    pub fn concat(a: Stream<A>, b: Stream<B>) -> Self {
        Self {
            iter: a.iter.chain(b.iter),
        }
    }
}

// Intermediate stages.
impl<I: Iterator> Stream<I> {
    /// Keeps only the elements for which `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Stream<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream::of(self.iter.filter(predicate))
    }

    /// Transforms every element with `mapper`, one at a time as they are pulled.
    #[inline]
    pub fn map<B, F>(self, mapper: F) -> Stream<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Stream::of(self.iter.map(mapper))
    }

    /// Expands every element into a sequence and flattens the sequences.
    ///
    /// Each nested sequence is drained before the next element is pulled.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let pairs = Stream::range(3).flat_map(|n| [n, n * 10]).to_list();
    ///
    /// assert_eq!(pairs, [0, 0, 1, 10, 2, 20]);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Stream<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Stream::of(self.iter.flat_map(mapper))
    }

    /// Calls `action` on every element as it passes through.
    ///
    /// The action runs once per element, at the moment the element is pulled
    /// downstream.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use streamfold::Stream;
    ///
    /// let log = RefCell::new(vec![]);
    /// let mut stream = Stream::range(3)
    ///     .peek(|n| log.borrow_mut().push(format!("peek {n}")))
    ///     .map(|n| n * 2);
    ///
    /// stream.for_each(|n| log.borrow_mut().push(format!("got {n}")));
    ///
    /// assert_eq!(
    ///     *log.borrow(),
    ///     ["peek 0", "got 0", "peek 1", "got 2", "peek 2", "got 4"],
    /// );
    /// ```
    #[inline]
    pub fn peek<F>(self, action: F) -> Stream<Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Stream::of(self.iter.inspect(action))
    }

    /// Yields at most `n` elements.
    ///
    /// The upstream is never pulled past the `n`-th element, so this is how an
    /// infinite stream is bounded.
    #[inline]
    pub fn limit(self, n: usize) -> Stream<Take<I>> {
        Stream::of(self.iter.take(n))
    }

    /// Drops the first `n` elements right away, before this method returns.
    ///
    /// If fewer than `n` elements remain, the resulting stream is exhausted.
    /// The result is fused: an upstream that ran dry while skipping is never
    /// pulled again.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let mut source = [1, 2, 3, 4].into_iter();
    /// {
    ///     let _rest = Stream::of(source.by_ref()).skip(3);
    /// }
    ///
    /// // Already drained, even though nothing pulled from `_rest`.
    /// assert_eq!(source.next(), Some(4));
    /// ```
    pub fn skip(self, n: usize) -> Stream<Fuse<I>> {
        let mut iter = self.iter.fuse();
        if let Some(last) = n.checked_sub(1) {
            let _ = iter.nth(last);
        }

        trace!(n, "skip drained");
        Stream::of(iter)
    }

    /// Suppresses elements equal to one already yielded. The first occurrence
    /// is kept.
    ///
    /// Each first occurrence is cloned into the set of seen elements, hence the
    /// `Clone` bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let unique = Stream::of([3, 1, 3, 2, 1]).distinct().to_list();
    ///
    /// assert_eq!(unique, [3, 1, 2]);
    /// ```
    #[inline]
    pub fn distinct(self) -> Stream<Unique<I>>
    where
        I::Item: Clone + Eq + Hash,
    {
        Stream::of(self.iter.unique())
    }

    /// Buffers every remaining element and yields them in ascending order.
    ///
    /// The sort is stable. Unlike other stages, this one drains the whole
    /// upstream right away.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::of([3, 1, 2]).sorted().to_list(), [1, 2, 3]);
    /// ```
    pub fn sorted(self) -> Stream<vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let sorted = self.iter.sorted();
        trace!(buffered = sorted.len(), "sorted buffered upstream");
        Stream::of(sorted)
    }

    /// Like [`sorted()`](Stream::sorted), ordering with `compare`.
    pub fn sorted_by<F>(self, compare: F) -> Stream<vec::IntoIter<I::Item>>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        let sorted = self.iter.sorted_by(compare);
        trace!(buffered = sorted.len(), "sorted buffered upstream");
        Stream::of(sorted)
    }

    /// Like [`sorted()`](Stream::sorted), ordering by the key `key_fn` extracts.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let by_len = Stream::of(["ccc", "a", "bb", "d"])
    ///     .sorted_by_key(|s| s.len())
    ///     .to_list();
    ///
    /// assert_eq!(by_len, ["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sorted_by_key<K, F>(self, key_fn: F) -> Stream<vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let sorted = self.iter.sorted_by_key(key_fn);
        trace!(buffered = sorted.len(), "sorted buffered upstream");
        Stream::of(sorted)
    }
}

// Terminal operations.
impl<I: Iterator> Stream<I> {
    /// Returns whether `predicate` holds for every remaining element.
    ///
    /// Stops at the first element that fails it. `true` if there is nothing left.
    #[inline]
    pub fn all_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.all(|item| predicate(&item))
    }

    /// Returns whether `predicate` holds for some remaining element.
    ///
    /// Stops at the first element that satisfies it. `false` if there is
    /// nothing left.
    #[inline]
    pub fn any_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.any(|item| predicate(&item))
    }

    /// Returns whether no remaining element is [truthy](Truthy).
    ///
    /// This takes no predicate: it looks at the elements themselves. Use
    /// [`none_match_by()`](Stream::none_match_by) to test a predicate instead,
    /// or [`map()`](Stream::map) the elements first.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert!(Stream::of([0, 0, 0]).none_match());
    /// assert!(!Stream::of(["", "", "x"]).none_match());
    /// assert!(Stream::range(10).map(|n| n > 10).none_match());
    /// ```
    #[inline]
    pub fn none_match(&mut self) -> bool
    where
        I::Item: Truthy,
    {
        !self.iter.any(|item| item.is_truthy())
    }

    /// Returns whether `predicate` fails for every remaining element.
    ///
    /// Stops at the first element that satisfies it. `true` if there is
    /// nothing left.
    #[inline]
    pub fn none_match_by<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        !self.iter.any(|item| predicate(&item))
    }

    /// Counts the remaining elements, exhausting the stream.
    #[inline]
    pub fn count(&mut self) -> usize {
        self.iter.by_ref().count()
    }

    /// Pulls the next element, if any.
    ///
    /// Only that one element is consumed.
    #[inline]
    pub fn find_first(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Pulls some remaining element, if any.
    ///
    /// Evaluation is sequential, so this is always the next element, same as
    /// [`find_first()`](Stream::find_first).
    #[inline]
    pub fn find_any(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Calls `action` on every remaining element in order.
    #[inline]
    pub fn for_each<F>(&mut self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.iter.by_ref().for_each(action);
    }

    /// Returns the greatest remaining element.
    ///
    /// If several elements are equally greatest, the last one is returned.
    ///
    /// # Errors
    ///
    /// [`StreamError::EmptySequence`] if there is nothing left.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{Stream, StreamError};
    ///
    /// assert_eq!(Stream::of([2, 7, 1]).max(), Ok(7));
    /// assert_eq!(Stream::of(Vec::<i32>::new()).max(), Err(StreamError::EmptySequence));
    /// ```
    #[inline]
    pub fn max(&mut self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.by_ref().max().ok_or(StreamError::EmptySequence)
    }

    /// Returns the least remaining element.
    ///
    /// If several elements are equally least, the first one is returned.
    ///
    /// # Errors
    ///
    /// [`StreamError::EmptySequence`] if there is nothing left.
    #[inline]
    pub fn min(&mut self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.by_ref().min().ok_or(StreamError::EmptySequence)
    }

    /// Folds the remaining elements left to right with `op`, seeded with the
    /// first one.
    ///
    /// Returns `None` if there is nothing left.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::of([1, 2, 3]).reduce(|a, b| a + b), Some(6));
    /// assert_eq!(Stream::of(Vec::<i32>::new()).reduce(|a, b| a + b), None);
    /// ```
    #[inline]
    pub fn reduce<F>(&mut self, op: F) -> Option<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.iter.by_ref().reduce(op)
    }

    /// Folds the remaining elements left to right into `identity` with `op`.
    ///
    /// Returns `identity` unchanged if there is nothing left. The result may be
    /// of a different type than the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let total_len = Stream::of(["a", "bc"]).reduce_identity(0, |len, s| len + s.len());
    ///
    /// assert_eq!(total_len, 3);
    /// ```
    #[inline]
    pub fn reduce_identity<U, F>(&mut self, identity: U, op: F) -> U
    where
        F: FnMut(U, I::Item) -> U,
    {
        self.iter.by_ref().fold(identity, op)
    }

    /// Adds up the remaining elements.
    ///
    /// Returns `None` if there is nothing left. Use
    /// [`reduce_identity()`](Stream::reduce_identity) with a zero to get a
    /// number in every case.
    #[inline]
    pub fn sum(&mut self) -> Option<I::Item>
    where
        I::Item: Add<Output = I::Item>,
    {
        self.reduce(|a, b| a + b)
    }

    /// Returns the arithmetic mean of the remaining elements, or `None` if
    /// there is nothing left.
    ///
    /// The elements are summed in a single pass as `f64`. An element that
    /// `f64` can't represent makes the result `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// assert_eq!(Stream::of([1, 2, 4, 5]).average(), Some(3.0));
    /// assert_eq!(Stream::range(0_u8).average(), None);
    /// ```
    pub fn average(&mut self) -> Option<f64>
    where
        I::Item: ToPrimitive,
    {
        let (sum, count) = self.iter.by_ref().fold((0.0, 0_usize), |(sum, count), item| {
            (sum + item.to_f64().unwrap_or(f64::NAN), count + 1)
        });

        (count > 0).then(|| sum / count as f64)
    }

    /// Gathers the remaining elements into a [`Vec`], in order.
    #[inline]
    pub fn to_list(&mut self) -> Vec<I::Item> {
        self.iter.by_ref().collect()
    }

    /// Borrows the remaining cursor for manual pulling.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let mut stream = Stream::range(4).map(|n| n * n);
    /// let cursor = stream.iterator();
    ///
    /// assert_eq!(cursor.next(), Some(0));
    /// assert_eq!(cursor.next(), Some(1));
    /// assert_eq!(stream.to_list(), [4, 9]);
    /// ```
    #[inline]
    pub fn iterator(&mut self) -> &mut I {
        &mut self.iter
    }

    /// Runs `collector` over the remaining elements and returns its result.
    ///
    /// One accumulator is supplied, every element is fed to it in order, and
    /// it is finished exactly once. If the collector stops accepting elements,
    /// the elements after the one it stopped on stay in the stream.
    ///
    /// Pass `&collector` to keep the collector for another reduction.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::{Stream, collectors};
    ///
    /// let (odd, even) = Stream::range(6).collect(collectors::partition(|n: &i32| n % 2 == 0));
    ///
    /// assert_eq!(odd, [1, 3, 5]);
    /// assert_eq!(even, [0, 2, 4]);
    /// ```
    pub fn collect<C>(&mut self, collector: C) -> C::Output
    where
        C: Collector<I::Item>,
    {
        let mut accum = collector.supply();
        let mut fed = 0_usize;
        let stopped_early = collector
            .collect_many(&mut accum, self.iter.by_ref().inspect(|_| fed += 1))
            .is_break();

        trace!(fed, stopped_early, "collect finished");
        collector.finish(accum)
    }

    /// Folds the remaining elements into the container `supplier` creates,
    /// with `accumulator`, and returns the container.
    ///
    /// This is the one-off form of [`collectors::of()`](crate::collectors::of).
    ///
    /// # Examples
    ///
    /// ```
    /// use streamfold::Stream;
    ///
    /// let csv = Stream::range(4).collect_with(String::new, |csv, n| {
    ///     if !csv.is_empty() {
    ///         csv.push(',');
    ///     }
    ///     csv.push_str(&n.to_string());
    /// });
    ///
    /// assert_eq!(csv, "0,1,2,3");
    /// ```
    #[inline]
    pub fn collect_with<R, S, A>(&mut self, supplier: S, mut accumulator: A) -> R
    where
        S: FnOnce() -> R,
        A: FnMut(&mut R, I::Item),
    {
        let mut container = supplier();
        self.for_each(|item| accumulator(&mut container, item));
        container
    }
}

impl<I: Iterator> IntoIterator for Stream<I> {
    type Item = I::Item;

    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::Stream;

    proptest! {
        #[test]
        fn filter_then_match(
            nums in propvec(any::<i32>(), ..=20),
        ) {
            let divisible = |n: &i32| n % 3 == 0;
            prop_assert!(Stream::of(nums.clone()).filter(divisible).all_match(divisible));
            prop_assert!(!Stream::of(nums).filter(divisible).any_match(|n| !divisible(n)));
        }

        #[test]
        fn map_fuses(
            nums in propvec(-1000_i32..1000, ..=20),
        ) {
            let f = |n: i32| n * 3;
            let g = |n: i32| n - 7;
            prop_assert_eq!(
                Stream::of(nums.clone()).map(f).map(g).to_list(),
                Stream::of(nums).map(|n| g(f(n))).to_list(),
            );
        }

        #[test]
        fn concat_keeps_order(
            a in propvec(any::<u8>(), ..=10),
            b in propvec(any::<u8>(), ..=10),
        ) {
            let expected = [a.clone(), b.clone()].concat();
            prop_assert_eq!(Stream::concat(Stream::of(a), Stream::of(b)).to_list(), expected);
        }

        #[test]
        fn limit_and_skip(
            nums in propvec(any::<i16>(), ..=10),
            n in 0_usize..15,
        ) {
            let limited = Stream::of(nums.clone()).limit(n).to_list();
            prop_assert_eq!(limited, nums.iter().copied().take(n).collect::<Vec<_>>());

            let skipped = Stream::of(nums.clone()).skip(n).to_list();
            prop_assert_eq!(skipped, nums.iter().copied().skip(n).collect::<Vec<_>>());
        }

        #[test]
        fn sorted_and_distinct(
            nums in propvec(0_u8..8, ..=20),
        ) {
            let mut expected = nums.clone();
            expected.sort();
            prop_assert_eq!(Stream::of(nums.clone()).sorted().to_list(), expected);

            let mut seen = HashSet::new();
            let firsts: Vec<_> = nums.iter().copied().filter(|n| seen.insert(*n)).collect();
            prop_assert_eq!(Stream::of(nums).distinct().to_list(), firsts);
        }

        #[test]
        fn average_is_mean(
            nums in propvec(-1000_i32..1000, 1..=20),
        ) {
            let mean = nums.iter().map(|&n| f64::from(n)).sum::<f64>() / nums.len() as f64;
            let average = Stream::of(nums).average();
            prop_assert!(average.is_some_and(|avg| (avg - mean).abs() < 1e-9));
        }
    }
}
