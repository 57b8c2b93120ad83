use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that splits items into two buckets by a predicate and
/// reduces each bucket with its own accumulator of a downstream collector.
/// Its [`Output`](Collector::Output) is `(output_if_false, output_if_true)`.
///
/// Both buckets always exist, even if no item reaches them. The reduction stops
/// early only once both buckets have stopped accepting items.
///
/// This `struct` is created by [`partition()`](super::partition) and
/// [`partition_downstream()`](super::partition_downstream).
#[derive(Clone)]
pub struct Partition<F, C> {
    pred: F,
    downstream: C,
}

/// The [`Accumulator`](Collector::Accumulator) of [`Partition`].
#[derive(Debug, Clone)]
pub struct PartitionAccumulator<A> {
    if_false: A,
    if_true: A,
    false_stopped: bool,
    true_stopped: bool,
}

impl<F, C> Partition<F, C> {
    pub(crate) fn new(pred: F, downstream: C) -> Self {
        Self { pred, downstream }
    }
}

impl<T, F, C> Collector<T> for Partition<F, C>
where
    F: Fn(&T) -> bool,
    C: Collector<T>,
{
    type Accumulator = PartitionAccumulator<C::Accumulator>;

    type Output = (C::Output, C::Output);

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        PartitionAccumulator {
            if_false: self.downstream.supply(),
            if_true: self.downstream.supply(),
            false_stopped: false,
            true_stopped: false,
        }
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        let (bucket, has_stopped, other_stopped) = if (self.pred)(&item) {
            (&mut accum.if_true, &mut accum.true_stopped, accum.false_stopped)
        } else {
            (&mut accum.if_false, &mut accum.false_stopped, accum.true_stopped)
        };

        // A stopped bucket must not be fed again, but its items still count as seen.
        if !*has_stopped {
            *has_stopped = self.downstream.accumulate(bucket, item).is_break();
        }

        if *has_stopped && other_stopped {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        (
            self.downstream.finish(accum.if_false),
            self.downstream.finish(accum.if_true),
        )
    }
}

impl<F, C: Debug> Debug for Partition<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partition")
            .field("downstream", &self.downstream)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::{
        Stream,
        collectors::{joining, mapping, partition, partition_downstream, reducing},
    };

    #[test]
    fn false_bucket_first() {
        let (odd, even) = Stream::range(6).collect(partition(|n: &i32| n % 2 == 0));
        assert_eq!(odd, [1, 3, 5]);
        assert_eq!(even, [0, 2, 4]);
    }

    #[test]
    fn both_buckets_always_present() {
        let (small, large) = Stream::of([1, 2, 3]).collect(partition(|n: &i32| *n > 10));
        assert_eq!(small, [1, 2, 3]);
        assert!(large.is_empty());

        let (if_false, if_true) =
            Stream::of(Vec::<i32>::new()).collect(partition(|n: &i32| *n > 10));
        assert!(if_false.is_empty() && if_true.is_empty());
    }

    #[test]
    fn downstream_per_bucket() {
        let sums = Stream::range_between(1, 11)
            .collect(partition_downstream(|n: &i32| n % 3 == 0, reducing(|a, b| a + b)));
        assert_eq!(sums, (Some(37), Some(18)));

        let labels = Stream::of(["ant", "bee", "cat", "dog"]).collect(partition_downstream(
            |w: &&str| w.contains('a'),
            mapping(|w: &str| w.to_uppercase(), joining("+", "(", ")")),
        ));
        assert_eq!(labels, ("(BEE+DOG)".to_owned(), "(ANT+CAT)".to_owned()));
    }
}
