use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that maps every item and folds the mapped values into an
/// identity with a reduction function.
///
/// Its [`Output`](Collector::Output) is the identity itself if no items were
/// collected; it is never absent. The identity is cloned for every reduction.
///
/// This `struct` is created by [`reducing_identity()`](super::reducing_identity)
/// and [`reducing_mapper()`](super::reducing_mapper).
#[derive(Clone)]
pub struct ReducingMapper<U, M, F> {
    identity: U,
    mapper: M,
    op: F,
}

impl<U, M, F> ReducingMapper<U, M, F> {
    pub(crate) fn new(identity: U, mapper: M, op: F) -> Self {
        Self {
            identity,
            mapper,
            op,
        }
    }
}

impl<T, U, M, F> Collector<T> for ReducingMapper<U, M, F>
where
    U: Clone,
    M: Fn(T) -> U,
    F: Fn(U, U) -> U,
{
    // Only `None` while `op` is running.
    type Accumulator = Option<U>;

    type Output = U;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        Some(self.identity.clone())
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        if let Some(acc) = accum.take() {
            *accum = Some((self.op)(acc, (self.mapper)(item)));
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        accum.unwrap_or_else(|| self.identity.clone())
    }

    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        if let Some(acc) = accum.take() {
            *accum = Some(items.into_iter().map(&self.mapper).fold(acc, &self.op));
        }

        ControlFlow::Continue(())
    }
}

impl<U: Debug, M, F> Debug for ReducingMapper<U, M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducingMapper")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
