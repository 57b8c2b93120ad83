use std::{collections::HashSet, hash::Hash, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that inserts items into a [`HashSet`].
/// Its [`Output`](Collector::Output) is [`HashSet`].
///
/// When several equal items are collected, the first one is kept.
///
/// This `struct` is created by [`to_set()`](super::to_set).
#[derive(Debug, Default, Clone, Copy)]
pub struct ToSet;

impl<T> Collector<T> for ToSet
where
    T: Eq + Hash,
{
    type Accumulator = HashSet<T>;

    type Output = HashSet<T>;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        HashSet::new()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        accum.insert(item);
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

#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::collectors::to_set;
    use crate::test_utils::{BasicCollectorTester, CollectorTesterExt, PredError};

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(0_u8..8, ..=12),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<u8>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: to_set,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if iter.collect::<HashSet<_>>() != output {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
