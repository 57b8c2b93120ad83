use std::ops::ControlFlow;

use crate::collector::Collector;

/// A [`Collector`] that pushes items into a [`Vec`] in encounter order.
/// Its [`Output`](Collector::Output) is [`Vec`].
///
/// This `struct` is created by [`to_list()`](super::to_list).
#[derive(Debug, Default, Clone, Copy)]
pub struct ToList;

impl<T> Collector<T> for ToList {
    type Accumulator = Vec<T>;

    type Output = Vec<T>;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        Vec::new()
    }

    #[inline]
    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        accum.push(item);
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
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::collectors::to_list;
    use crate::test_utils::{BasicCollectorTester, CollectorTesterExt, PredError};

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=9),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: to_list,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if iter.collect::<Vec<_>>() != output {
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
