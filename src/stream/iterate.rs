use std::{fmt::Debug, iter::FusedIterator};

/// An infinite iterator yielding `seed`, `step(&seed)`, `step(&step(&seed))`, ...
///
/// Each successor is computed only when it is pulled, so pulling `k` items calls
/// `step` exactly `k - 1` times. The iterator never ends on its own; bound it
/// with [`Stream::limit()`](crate::Stream::limit) or a short-circuiting terminal.
///
/// This `struct` is created by [`Stream::iterate()`](crate::Stream::iterate).
#[derive(Clone)]
pub struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    step: F,
}

impl<T, F> Iterate<T, F> {
    pub(crate) fn new(seed: T, step: F) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            step,
        }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.seed.take() {
            Some(seed) => seed,
            None => (self.step)(self.last.as_ref()?),
        };

        self.last = Some(item.clone());
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
}

impl<T: Debug, F> Debug for Iterate<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iterate")
            .field("seed", &self.seed)
            .field("last", &self.last)
            .finish()
    }
}
