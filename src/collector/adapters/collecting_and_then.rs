use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that transforms the finished result of another collector.
///
/// This `struct` is created by [`Collector::and_then()`] and
/// [`collecting_and_then()`](crate::collectors::collecting_and_then).
/// See their documentation for more.
#[derive(Clone)]
pub struct CollectingAndThen<C, F> {
    downstream: C,
    finisher: F,
}

impl<C, F> CollectingAndThen<C, F> {
    pub(crate) fn new(downstream: C, finisher: F) -> Self {
        Self {
            downstream,
            finisher,
        }
    }
}

impl<C, T, R, F> Collector<T> for CollectingAndThen<C, F>
where
    C: Collector<T>,
    F: Fn(C::Output) -> R,
{
    type Accumulator = C::Accumulator;

    type Output = R;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        self.downstream.supply()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        self.downstream.accumulate(accum, item)
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        (self.finisher)(self.downstream.finish(accum))
    }

    #[inline]
    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        self.downstream.collect_many(accum, items)
    }
}

impl<C: Debug, F> Debug for CollectingAndThen<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectingAndThen")
            .field("downstream", &self.downstream)
            .finish()
    }
}
