use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] built from a supplier and an accumulator closure.
/// Its [`Output`](Collector::Output) is the accumulator itself.
///
/// This `struct` is created by [`of()`](super::of) and
/// [`Stream::collect_with()`](crate::Stream::collect_with).
/// See their documentation for more.
#[derive(Clone)]
pub struct FromFn<S, A> {
    supplier: S,
    accumulator: A,
}

impl<S, A> FromFn<S, A> {
    pub(crate) fn new(supplier: S, accumulator: A) -> Self {
        Self {
            supplier,
            accumulator,
        }
    }
}

impl<T, R, S, A> Collector<T> for FromFn<S, A>
where
    S: Fn() -> R,
    A: Fn(&mut R, T),
{
    type Accumulator = R;

    type Output = R;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        (self.supplier)()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        (self.accumulator)(accum, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        accum
    }
}

impl<S, A> Debug for FromFn<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
