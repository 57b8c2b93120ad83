use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that extends a container created by a supplier.
/// Its [`Output`](Collector::Output) is the container.
///
/// This `struct` is created by [`to_collection()`](super::to_collection).
#[derive(Clone)]
pub struct ToCollection<S> {
    supplier: S,
}

impl<S> ToCollection<S> {
    pub(crate) fn new(supplier: S) -> Self {
        Self { supplier }
    }
}

impl<T, S, C> Collector<T> for ToCollection<S>
where
    S: Fn() -> C,
    C: Extend<T>,
{
    type Accumulator = C;

    type Output = C;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        (self.supplier)()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        accum.extend(Some(item));
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        accum
    }

    #[inline]
    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        accum.extend(items);
        ControlFlow::Continue(())
    }
}

impl<S> Debug for ToCollection<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToCollection").finish_non_exhaustive()
    }
}
