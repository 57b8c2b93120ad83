use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that reduces all collected items into a single value
/// by repeatedly applying a reduction function, seeded by the first item.
///
/// If no items have been collected, its [`Output`](Collector::Output) is `None`;
/// otherwise, it returns `Some` containing the result of the reduction.
///
/// This collector corresponds to [`Stream::reduce()`](crate::Stream::reduce).
///
/// This `struct` is created by [`reducing()`](super::reducing).
#[derive(Clone)]
pub struct Reducing<F> {
    op: F,
}

impl<F> Reducing<F> {
    pub(crate) fn new(op: F) -> Self {
        Self { op }
    }
}

impl<T, F> Collector<T> for Reducing<F>
where
    F: Fn(T, T) -> T,
{
    // `None` until the first item arrives.
    type Accumulator = Option<T>;

    type Output = Option<T>;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        None
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        *accum = Some(match accum.take() {
            Some(acc) => (self.op)(acc, item),
            None => item,
        });

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        accum
    }

    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        *accum = accum.take().into_iter().chain(items).reduce(&self.op);
        ControlFlow::Continue(())
    }
}

impl<F> Debug for Reducing<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reducing").finish_non_exhaustive()
    }
}
