//! The standard [`Collector`]s.
//!
//! Every function here returns plain configuration. Collectors can be nested
//! (a "downstream" collector reduces each group of [`grouping_by_downstream()`]
//! or each bucket of [`partition_downstream()`], or the mapped items of
//! [`mapping()`]), and the same downstream value serves every nested reduction.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use streamfold::{Stream, collectors};
//!
//! let by_parity = Stream::range(10).collect(collectors::grouping_by_downstream(
//!     |n: &i32| n % 2 == 0,
//!     collectors::mapping(|n: i32| n.to_string(), collectors::joining(",", "[", "]")),
//! ));
//!
//! assert_eq!(
//!     by_parity,
//!     HashMap::from([(true, "[0,2,4,6,8]".to_owned()), (false, "[1,3,5,7,9]".to_owned())]),
//! );
//! ```

mod from_fn;
mod grouping_by;
mod joining;
mod partition;
mod reducing;
mod reducing_mapper;
mod to_collection;
mod to_list;
mod to_map;
mod to_set;

use std::hash::Hash;

pub use from_fn::*;
pub use grouping_by::*;
pub use joining::*;
pub use partition::*;
pub use reducing::*;
pub use reducing_mapper::*;
pub use to_collection::*;
pub use to_list::*;
pub use to_map::*;
pub use to_set::*;

pub use crate::collector::{CollectingAndThen, Mapping};
use crate::collector::{Collector, assert_collector};

/// Creates a collector from a supplier and an accumulator closure, with the
/// accumulator itself as the result.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let total_len = Stream::of(["ab", "cde"]).collect(collectors::of(
///     || 0,
///     |len: &mut usize, s: &str| *len += s.len(),
/// ));
///
/// assert_eq!(total_len, 5);
/// ```
#[inline]
pub fn of<T, R, S, A>(supplier: S, accumulator: A) -> FromFn<S, A>
where
    S: Fn() -> R,
    A: Fn(&mut R, T),
{
    assert_collector::<_, T>(FromFn::new(supplier, accumulator))
}

/// Creates a collector that gathers items into a [`Vec`] in encounter order.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// assert_eq!(Stream::range(3).collect(collectors::to_list()), [0, 1, 2]);
/// ```
#[inline]
pub const fn to_list() -> ToList {
    ToList
}

/// Creates a collector that gathers items into a [`HashSet`](std::collections::HashSet).
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let set = Stream::of([3, 1, 3, 2, 1]).collect(collectors::to_set());
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// ```
#[inline]
pub const fn to_set() -> ToSet {
    ToSet
}

/// Creates a collector that extends a container made by `supplier`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use streamfold::{Stream, collectors};
///
/// let set = Stream::of([3, 1, 2]).collect(collectors::to_collection(BTreeSet::new));
///
/// assert_eq!(set.first(), Some(&1));
/// ```
#[inline]
pub fn to_collection<S, C>(supplier: S) -> ToCollection<S>
where
    S: Fn() -> C,
{
    ToCollection::new(supplier)
}

/// Creates a collector that builds a [`HashMap`](std::collections::HashMap)
/// from a key and a value derived from each item.
///
/// The output is an [`Err`] of [`StreamError::DuplicateKey`] as soon as two
/// items produce the same key. See [`ToMap`] for details.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, StreamError, collectors};
///
/// let lengths = Stream::of(["one", "three"])
///     .collect(collectors::to_map(|s: &&str| s.len(), |s| s))
///     .unwrap();
/// assert_eq!(lengths[&5], "three");
///
/// let clash = Stream::of(["one", "two"]).collect(collectors::to_map(|s: &&str| s.len(), |s| s));
/// assert_eq!(clash, Err(StreamError::DuplicateKey { position: 1 }));
/// ```
///
/// [`StreamError::DuplicateKey`]: crate::StreamError::DuplicateKey
#[inline]
pub fn to_map<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> ToMap<KF, VF>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    assert_collector::<_, T>(ToMap::new(key_fn, value_fn))
}

/// Creates a collector that concatenates string items with `delimiter` between
/// them, `prefix` before them and `suffix` after them.
///
/// Use [`Joining::new()`] to set only some of the three parts.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let joined = Stream::of(["0", "1", "2"]).collect(collectors::joining(", ", "[", "]"));
///
/// assert_eq!(joined, "[0, 1, 2]");
/// ```
#[inline]
pub fn joining(
    delimiter: impl Into<String>,
    prefix: impl Into<String>,
    suffix: impl Into<String>,
) -> Joining {
    Joining::new()
        .delimiter(delimiter)
        .prefix(prefix)
        .suffix(suffix)
}

/// Creates a collector that groups items by `classifier` into lists that keep
/// encounter order.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let groups = Stream::range(10).collect(collectors::grouping_by(|n: &i32| n % 3));
///
/// assert_eq!(groups[&0], [0, 3, 6, 9]);
/// assert_eq!(groups[&1], [1, 4, 7]);
/// assert_eq!(groups[&2], [2, 5, 8]);
/// ```
#[inline]
pub fn grouping_by<T, K, F>(classifier: F) -> GroupingBy<F, ToList>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    assert_collector::<_, T>(GroupingBy::new(classifier, ToList))
}

/// Creates a collector that groups items by `classifier` and reduces every
/// group with `downstream`.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors, prelude::*};
///
/// let counts = Stream::of(["a", "bb", "cc", "d", "eee"]).collect(
///     collectors::grouping_by_downstream(
///         |s: &&str| s.len(),
///         collectors::to_list().and_then(|list: Vec<&str>| list.len()),
///     ),
/// );
///
/// assert_eq!(counts[&1], 2);
/// assert_eq!(counts[&2], 2);
/// assert_eq!(counts[&3], 1);
/// ```
#[inline]
pub fn grouping_by_downstream<T, K, F, C>(classifier: F, downstream: C) -> GroupingBy<F, C>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    C: Collector<T>,
{
    assert_collector::<_, T>(GroupingBy::new(classifier, downstream))
}

/// Creates a collector that splits items into `(predicate false, predicate true)`
/// lists.
///
/// Both lists are always present, possibly empty.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let (odd, even) = Stream::range(6).collect(collectors::partition(|n: &i32| n % 2 == 0));
///
/// assert_eq!(odd, [1, 3, 5]);
/// assert_eq!(even, [0, 2, 4]);
/// ```
#[inline]
pub fn partition<T, F>(predicate: F) -> Partition<F, ToList>
where
    F: Fn(&T) -> bool,
{
    assert_collector::<_, T>(Partition::new(predicate, ToList))
}

/// Creates a collector that splits items by `predicate` and reduces each of
/// the two buckets with `downstream`, yielding
/// `(output if false, output if true)`.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let counts = Stream::range(7).collect(collectors::partition_downstream(
///     |n: &i32| *n < 2,
///     collectors::reducing_mapper(0, |_: i32| 1, |a, b| a + b),
/// ));
///
/// assert_eq!(counts, (5, 2));
/// ```
#[inline]
pub fn partition_downstream<T, F, C>(predicate: F, downstream: C) -> Partition<F, C>
where
    F: Fn(&T) -> bool,
    C: Collector<T>,
{
    assert_collector::<_, T>(Partition::new(predicate, downstream))
}

/// Creates a collector that transforms every item with `mapper` before handing
/// it to `downstream`.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let chars = Stream::of(["ab", "c"]).collect(collectors::mapping(
///     |s: &str| s.len(),
///     collectors::reducing(|a, b| a + b),
/// ));
///
/// assert_eq!(chars, Some(3));
/// ```
#[inline]
pub fn mapping<T, U, F, C>(mapper: F, downstream: C) -> Mapping<C, F>
where
    F: Fn(T) -> U,
    C: Collector<U>,
{
    assert_collector::<_, T>(Mapping::new(downstream, mapper))
}

/// Creates a collector that reduces items with `op`, using the first item as
/// the seed. The output is `None` if there were no items.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let max = collectors::reducing(|a: i32, b| a.max(b));
///
/// assert_eq!(Stream::of([3, 9, 4]).collect(&max), Some(9));
/// assert_eq!(Stream::of(Vec::new()).collect(&max), None);
/// ```
#[inline]
pub fn reducing<T, F>(op: F) -> Reducing<F>
where
    F: Fn(T, T) -> T,
{
    assert_collector::<_, T>(Reducing::new(op))
}

/// Creates a collector that folds items into `identity` with `op`.
/// The output is `identity` if there were no items.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let factorial = Stream::range_between(1, 5).collect(collectors::reducing_identity(1, |a, b| a * b));
///
/// assert_eq!(factorial, 24);
/// ```
#[inline]
pub fn reducing_identity<T, F>(identity: T, op: F) -> ReducingMapper<T, fn(T) -> T, F>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    assert_collector::<_, T>(ReducingMapper::new(
        identity,
        std::convert::identity as fn(T) -> T,
        op,
    ))
}

/// Creates a collector that maps every item with `mapper` and folds the mapped
/// values into `identity` with `op`.
/// The output is `identity` if there were no items.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let total_len = Stream::of(["ab", "cde", ""])
///     .collect(collectors::reducing_mapper(0, |s: &str| s.len(), |a, b| a + b));
///
/// assert_eq!(total_len, 5);
/// ```
#[inline]
pub fn reducing_mapper<T, U, M, F>(identity: U, mapper: M, op: F) -> ReducingMapper<U, M, F>
where
    U: Clone,
    M: Fn(T) -> U,
    F: Fn(U, U) -> U,
{
    assert_collector::<_, T>(ReducingMapper::new(identity, mapper, op))
}

/// Creates a collector that runs `downstream` and passes its result through
/// `finisher`.
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors};
///
/// let sorted = Stream::of([3, 1, 2]).collect(collectors::collecting_and_then(
///     collectors::to_list(),
///     |mut list: Vec<i32>| {
///         list.sort();
///         list
///     },
/// ));
///
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
#[inline]
pub fn collecting_and_then<T, R, C, F>(downstream: C, finisher: F) -> CollectingAndThen<C, F>
where
    C: Collector<T>,
    F: Fn(C::Output) -> R,
{
    assert_collector::<_, T>(CollectingAndThen::new(downstream, finisher))
}
