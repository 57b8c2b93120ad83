use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that calls a closure on each item before handing it to a
/// downstream collector.
///
/// The downstream's accumulator and finisher are used unchanged.
///
/// This `struct` is created by [`Collector::map()`] and
/// [`mapping()`](crate::collectors::mapping). See their documentation for more.
#[derive(Clone)]
pub struct Mapping<C, F> {
    downstream: C,
    mapper: F,
}

impl<C, F> Mapping<C, F> {
    pub(crate) fn new(downstream: C, mapper: F) -> Self {
        Self { downstream, mapper }
    }
}

impl<C, T, U, F> Collector<T> for Mapping<C, F>
where
    C: Collector<U>,
    F: Fn(T) -> U,
{
    type Accumulator = C::Accumulator;

    type Output = C::Output;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        self.downstream.supply()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        self.downstream.accumulate(accum, (self.mapper)(item))
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        self.downstream.finish(accum)
    }

    fn collect_many(
        &self,
        accum: &mut Self::Accumulator,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<()> {
        self.downstream
            .collect_many(accum, items.into_iter().map(&self.mapper))
    }
}

impl<C: Debug, F> Debug for Mapping<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping")
            .field("downstream", &self.downstream)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::{
        Stream,
        collectors::{joining, mapping, to_set},
        prelude::*,
    };

    #[test]
    fn mapper_runs_before_downstream() {
        let joined = Stream::range(4).collect(mapping(|n: i32| n.to_string(), joining("-", "", "")));
        assert_eq!(joined, "0-1-2-3");
    }

    #[test]
    fn method_form_matches_free_function() {
        let by_method = Stream::of([1, -1, 2, -2]).collect(to_set().map(|n: i32| n.abs()));
        let by_fn = Stream::of([1, -1, 2, -2]).collect(mapping(|n: i32| n.abs(), to_set()));
        assert_eq!(by_method, by_fn);
        assert_eq!(by_method.len(), 2);
    }
}
