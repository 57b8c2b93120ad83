use std::iter::FusedIterator;

use num_traits::PrimInt;

/// A half-open arithmetic progression of primitive integers.
///
/// Yields `start`, `start + step`, ... while the value is still before `stop`
/// in the direction of `step` (below it for a positive step, above it for a
/// negative one). Stepping past the representable range of `T` ends the
/// progression instead of overflowing.
///
/// This `struct` is created by [`Stream::range()`](crate::Stream::range),
/// [`Stream::range_between()`](crate::Stream::range_between) and
/// [`Stream::range_by()`](crate::Stream::range_by).
#[derive(Debug, Clone)]
pub struct IntRange<T> {
    next: T,
    stop: T,
    step: T,
}

impl<T: PrimInt> IntRange<T> {
    pub(crate) fn new(start: T, stop: T, step: T) -> Self {
        assert!(step != T::zero(), "range step must not be zero");
        Self {
            next: start,
            stop,
            step,
        }
    }

    #[inline]
    fn is_ascending(&self) -> bool {
        self.step > T::zero()
    }

    // `None` if the count doesn't fit in `usize` or the types don't fit in `i128`.
    fn remaining(&self) -> Option<usize> {
        let next = self.next.to_i128()?;
        let stop = self.stop.to_i128()?;
        let step = self.step.to_i128()?;

        let span = if step > 0 {
            stop.checked_sub(next)?
        } else {
            next.checked_sub(stop)?
        };

        if span <= 0 {
            return Some(0);
        }

        usize::try_from(span.unsigned_abs().div_ceil(step.unsigned_abs())).ok()
    }
}

impl<T: PrimInt> Iterator for IntRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let in_range = if self.is_ascending() {
            self.next < self.stop
        } else {
            self.next > self.stop
        };

        if !in_range {
            return None;
        }

        let item = self.next;
        // On overflow the progression has no representable successor, so it ends.
        self.next = item.checked_add(&self.step).unwrap_or(self.stop);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<T: PrimInt> FusedIterator for IntRange<T> {}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::IntRange;

    proptest! {
        #[test]
        fn matches_std_step_by(
            start in -50_i64..50,
            stop in -50_i64..50,
            step in 1_i64..7,
        ) {
            let expected: Vec<_> = (start..stop).step_by(step as usize).collect();
            let range = IntRange::new(start, stop, step);
            prop_assert_eq!(range.size_hint(), (expected.len(), Some(expected.len())));
            prop_assert_eq!(range.collect::<Vec<_>>(), expected);
        }

        #[test]
        fn negative_step_mirrors_positive(
            start in -50_i64..50,
            stop in -50_i64..50,
            step in 1_i64..7,
        ) {
            let ascending: Vec<_> = IntRange::new(-start, -stop, step).map(|n| -n).collect();
            let descending: Vec<_> = IntRange::new(start, stop, -step).collect();
            prop_assert_eq!(descending, ascending);
        }
    }
}
