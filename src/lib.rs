//! Lazy, single-pass pipelines over iterators, with reusable reductions.
//!
//! A [`Stream`] is the "source half" of a data pipeline: where the data comes
//! from and how each element is transformed on its way. A [`Collector`] is the
//! "sink half": how the elements are folded into a result.
//!
//! # Motivation
//!
//! Suppose we are given a list of words and we are asked to group them by
//! their first letter, keeping only how many words each group has.
//!
//! - Approach 1: a loop
//!
//! ```
//! use std::collections::HashMap;
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let mut counts = HashMap::new();
//! for word in words {
//!     *counts.entry(&word[..1]).or_insert(0) += 1;
//! }
//!
//! assert_eq!(counts["a"], 2);
//! assert_eq!(counts["c"], 1);
//! ```
//!
//! **Cons:** the intent ("group, then count") is buried in the mechanics of
//! the map, and none of it can be reused for the next grouping.
//!
//! This crate proposes a declarative approach:
//!
//! ```
//! use streamfold::{Stream, collectors};
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let counts = Stream::of(words).collect(collectors::grouping_by_downstream(
//!     |w: &&str| w[..1].to_owned(),
//!     collectors::reducing_mapper(0, |_: &str| 1, |a, b| a + b),
//! ));
//!
//! assert_eq!(counts["a"], 2);
//! assert_eq!(counts["c"], 1);
//! ```
//!
//! Each piece here is a value. The downstream collector that counts can be
//! used on its own, inside another grouping, or on both buckets of a
//! partition.
//!
//! # Stream
//!
//! A [`Stream`] wraps a cursor (any [`Iterator`]). Intermediate stages such as
//! [`filter()`](Stream::filter), [`map()`](Stream::map) and
//! [`limit()`](Stream::limit) take the stream by value and return a new one, so
//! a stream can't be used after a stage was derived from it. Terminal
//! operations such as [`to_list()`](Stream::to_list) and
//! [`collect()`](Stream::collect) pull the elements.
//!
//! Evaluation is demand-driven, which makes infinite sources usable:
//!
//! ```
//! use streamfold::Stream;
//!
//! let squares = Stream::iterate(1_u32, |n| n + 1)
//!     .map(|n| n * n)
//!     .filter(|n| n % 2 == 1)
//!     .limit(4)
//!     .to_list();
//!
//! assert_eq!(squares, [1, 9, 25, 49]);
//! ```
//!
//! # Collector
//!
//! A [`Collector`] is split into three phases. Roughly:
//!
//! ```
//! # use std::ops::ControlFlow;
//! pub trait Collector<T> {
//!     type Accumulator;
//!     type Output;
//!     fn supply(&self) -> Self::Accumulator;
//!     fn accumulate(&self, accum: &mut Self::Accumulator, item: T) -> ControlFlow<()>;
//!     fn finish(&self, accum: Self::Accumulator) -> Self::Output;
//! }
//! ```
//!
//! The collector itself is never mutated. All the state of one reduction lives
//! in the accumulator, so the same collector value can drive any number of
//! independent reductions. [`accumulate()`](Collector::accumulate) returns
//! [`ControlFlow`] so a collector can end a reduction early
//! ([`Break`](std::ops::ControlFlow::Break) means to "stop").
//!
//! The standard collectors are in [`collectors`].
//!
//! # Logging
//!
//! The crate emits [`tracing`] events at reduction boundaries. It never
//! installs a subscriber.
//!
//! [`ControlFlow`]: std::ops::ControlFlow

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collector;
pub mod collectors;
mod error;
pub mod prelude;
mod stream;
#[cfg(test)]
mod test_utils;

pub use collector::Collector;
pub use error::*;
pub use stream::*;
