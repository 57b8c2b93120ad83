use std::{collections::HashMap, fmt::Debug, hash::Hash, ops::ControlFlow};

use crate::collector::Collector;

/// A [`Collector`] that groups items by a classifier and reduces every group
/// with its own accumulator of a downstream collector.
/// Its [`Output`](Collector::Output) is a [`HashMap`] from key to the
/// downstream's output for that group.
///
/// Items reach their group's accumulator in encounter order. The map itself
/// has no guaranteed key order. A group whose downstream stopped accepting items
/// ignores the rest of its items, while other groups keep going, so this
/// collector never stops a reduction early.
///
/// This `struct` is created by [`grouping_by()`](super::grouping_by) and
/// [`grouping_by_downstream()`](super::grouping_by_downstream).
#[derive(Clone)]
pub struct GroupingBy<F, C> {
    classifier: F,
    downstream: C,
}

/// The [`Accumulator`](Collector::Accumulator) of [`GroupingBy`].
#[derive(Debug, Clone)]
pub struct GroupingAccumulator<K, A> {
    // The flag records whether the group's downstream has stopped.
    groups: HashMap<K, (A, bool)>,
}

impl<F, C> GroupingBy<F, C> {
    pub(crate) fn new(classifier: F, downstream: C) -> Self {
        Self {
            classifier,
            downstream,
        }
    }
}

impl<T, K, F, C> Collector<T> for GroupingBy<F, C>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    C: Collector<T>,
{
    type Accumulator = GroupingAccumulator<K, C::Accumulator>;

    type Output = HashMap<K, C::Output>;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        GroupingAccumulator {
            groups: HashMap::new(),
        }
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()> {
        let (group, has_stopped) = accum
            .groups
            .entry((self.classifier)(&item))
            .or_insert_with(|| (self.downstream.supply(), false));

        if !*has_stopped {
            *has_stopped = self.downstream.accumulate(group, item).is_break();
        }

        ControlFlow::Continue(())
    }

    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        accum
            .groups
            .into_iter()
            .map(|(key, (group, _))| (key, self.downstream.finish(group)))
            .collect()
    }
}

impl<F, C: Debug> Debug for GroupingBy<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupingBy")
            .field("downstream", &self.downstream)
            .finish()
    }
}
