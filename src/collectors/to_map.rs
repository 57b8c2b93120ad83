use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
    ops::ControlFlow,
};

use tracing::debug;

use crate::{collector::Collector, error::StreamError};

/// A [`Collector`] that inserts key-value pairs derived from each item into a
/// [`HashMap`].
/// Its [`Output`](Collector::Output) is `Result<HashMap<K, V>, StreamError>`.
///
/// Keys must be unique. The first time a key repeats, the accumulator records
/// [`StreamError::DuplicateKey`] and stops accepting items, which makes the
/// driving [`Stream::collect()`](crate::Stream::collect) stop right at the
/// offending element. The value of the offending element is never computed, and
/// the earlier value is never overwritten.
///
/// This `struct` is created by [`to_map()`](super::to_map).
#[derive(Clone)]
pub struct ToMap<KF, VF> {
    key_fn: KF,
    value_fn: VF,
}

/// The [`Accumulator`](Collector::Accumulator) of [`ToMap`].
#[derive(Debug, Clone)]
pub struct ToMapAccumulator<K, V> {
    map: HashMap<K, V>,
    fed: usize,
    duplicate: Option<usize>,
}

impl<KF, VF> ToMap<KF, VF> {
    pub(crate) fn new(key_fn: KF, value_fn: VF) -> Self {
        Self { key_fn, value_fn }
    }
}

impl<T, K, V, KF, VF> Collector<T> for ToMap<KF, VF>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    type Accumulator = ToMapAccumulator<K, V>;

    type Output = Result<HashMap<K, V>, StreamError>;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        ToMapAccumulator {
            map: HashMap::new(),
            fed: 0,
            duplicate: None,
        }
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        if accum.duplicate.is_some() {
            return ControlFlow::Break(());
        }

        let position = accum.fed;
        accum.fed += 1;

        match accum.map.entry((self.key_fn)(&item)) {
            Entry::Occupied(_) => {
                debug!(position, "duplicate key in to_map");
                accum.duplicate = Some(position);
                ControlFlow::Break(())
            }
            Entry::Vacant(entry) => {
                entry.insert((self.value_fn)(item));
                ControlFlow::Continue(())
            }
        }
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        match accum.duplicate {
            Some(position) => Err(StreamError::DuplicateKey { position }),
            None => Ok(accum.map),
        }
    }
}

impl<KF, VF> Debug for ToMap<KF, VF> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToMap").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::{HashMap, HashSet};

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::collectors::to_map;
    use crate::error::StreamError;
    use crate::test_utils::{BasicCollectorTester, CollectorTesterExt, PredError};

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<u8>(), ..=12),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    // Position of the first element whose key was already seen.
    fn first_duplicate(nums: impl Iterator<Item = u8>) -> Option<usize> {
        let mut seen = HashSet::new();
        nums.map(|num| num % 16)
            .position(|key| !seen.insert(key))
    }

    fn all_collect_methods_impl(nums: Vec<u8>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || to_map(|num: &u8| num % 16, |num| num),
            should_break_pred: |iter| first_duplicate(iter).is_some(),
            pred: |iter, output, remaining| {
                let nums: Vec<_> = iter.collect();
                match first_duplicate(nums.iter().copied()) {
                    Some(position) => {
                        if output != Err(StreamError::DuplicateKey { position }) {
                            Err(PredError::IncorrectOutput)
                        } else if remaining.count() != nums.len() - position - 1 {
                            Err(PredError::IncorrectIterConsumption)
                        } else {
                            Ok(())
                        }
                    }
                    None => {
                        let expected: HashMap<_, _> =
                            nums.iter().map(|&num| (num % 16, num)).collect();
                        if output != Ok(expected) {
                            Err(PredError::IncorrectOutput)
                        } else if remaining.next().is_some() {
                            Err(PredError::IncorrectIterConsumption)
                        } else {
                            Ok(())
                        }
                    }
                }
            },
        }
        .test_collector()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{Stream, collectors::to_map, error::StreamError};

    #[test]
    fn unique_keys() {
        let map = Stream::of(["apple", "kiwi", "banana"])
            .collect(to_map(|s: &&str| s.len(), |s| s.to_uppercase()))
            .unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map[&4], "KIWI");
    }

    #[test]
    fn fails_fast_on_duplicate_key() {
        let values_built = Cell::new(0);
        let mut stream = Stream::of(["aa", "b", "cc", "d", "ee"]);

        let result = stream.collect(to_map(
            |s: &&str| s.len(),
            |s| {
                values_built.set(values_built.get() + 1);
                s
            },
        ));

        assert_eq!(result, Err(StreamError::DuplicateKey { position: 2 }));
        // Only the two accepted elements had their value computed.
        assert_eq!(values_built.get(), 2);
        // The driver stopped right after the offending element.
        assert_eq!(stream.to_list(), ["d", "ee"]);
    }
}
