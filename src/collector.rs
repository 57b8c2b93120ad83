//! The collector protocol.
//!
//! A [`Collector`] describes a reduction in three phases: supply an accumulator,
//! fold items into it one at a time, then finish it into a result.
//! [`Stream::collect()`](crate::Stream::collect) is the usual driver, but any
//! iterator can drive one through [`IteratorExt::feed_into()`](crate::IteratorExt::feed_into)
//! or [`Collector::collect_then_finish()`].
//!
//! # Reuse
//!
//! Collectors never hold mutable state. Everything a reduction mutates lives in the
//! accumulator returned by [`Collector::supply()`], and a fresh accumulator is
//! supplied for every reduction. Lending a collector (`&collector`) therefore lets
//! the same value run several independent reductions.
//!
//! # Early stop
//!
//! [`Collector::accumulate()`] returns a [`ControlFlow`](std::ops::ControlFlow).
//! Once it returns `Break(())`, drivers stop pulling from their source and go
//! straight to [`Collector::finish()`]. Behavior of further
//! [`accumulate()`](Collector::accumulate) calls on that accumulator is unspecified.
//!
//! The standard collectors live in [`collectors`](crate::collectors).

mod adapters;
#[allow(clippy::module_inception)]
mod collector;

pub use adapters::*;
pub use collector::*;

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
