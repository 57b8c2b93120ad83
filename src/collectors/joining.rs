use std::ops::ControlFlow;

use crate::collector::Collector;

/// A [`Collector`] that concatenates string items, separated by a delimiter and
/// surrounded by a prefix and a suffix.
/// Its [`Output`](Collector::Output) is [`String`].
///
/// The prefix and the suffix each appear exactly once, even when no items are
/// collected. All three parts default to the empty string.
///
/// This `struct` is created by [`joining()`](super::joining) or [`Joining::new()`].
///
/// # Examples
///
/// ```
/// use streamfold::{Stream, collectors::Joining};
///
/// let csv = Joining::new().delimiter(",").suffix("\n");
///
/// assert_eq!(Stream::of(["a", "b", "c"]).collect(&csv), "a,b,c\n");
/// assert_eq!(Stream::of(["d"]).collect(&csv), "d\n");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Joining {
    delimiter: String,
    prefix: String,
    suffix: String,
}

/// The [`Accumulator`](Collector::Accumulator) of [`Joining`].
#[derive(Debug, Clone)]
pub struct JoiningAccumulator {
    buf: String,
    is_empty: bool,
}

impl Joining {
    /// Creates a new instance of this collector with an empty delimiter, prefix,
    /// and suffix.
    #[inline]
    pub const fn new() -> Self {
        Self {
            delimiter: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Sets the string placed between consecutive items.
    #[inline]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the string placed before the first item.
    #[inline]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the string placed after the last item.
    #[inline]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl<S> Collector<S> for Joining
where
    S: AsRef<str>,
{
    type Accumulator = JoiningAccumulator;

    type Output = String;

    #[inline]
    fn supply(&self) -> Self::Accumulator {
        JoiningAccumulator {
            buf: self.prefix.clone(),
            is_empty: true,
        }
    }

    fn accumulate(&self, accum: &mut Self::Accumulator, item: S) -> ControlFlow<()> {
        if accum.is_empty {
            accum.is_empty = false;
        } else {
            accum.buf.push_str(&self.delimiter);
        }

        accum.buf.push_str(item.as_ref());
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(&self, accum: Self::Accumulator) -> Self::Output {
        let mut buf = accum.buf;
        buf.push_str(&self.suffix);
        buf
    }
}


#[cfg(test)]
mod tests {
    use crate::{
        Stream,
        collectors::{Joining, joining},
    };

    #[test]
    fn prefix_then_suffix() {
        let joined = Stream::range(3)
            .map(|n: i32| n.to_string())
            .collect(joining(", ", "[", "]"));
        assert_eq!(joined, "[0, 1, 2]");
    }

    #[test]
    fn empty_input_keeps_both_ends() {
        let joined = Stream::of(Vec::<String>::new()).collect(joining(", ", "[", "]"));
        assert_eq!(joined, "[]");
    }

    #[test]
    fn empty_items_still_delimited() {
        let joined = Stream::of(["", "", "x"]).collect(Joining::new().delimiter("|"));
        assert_eq!(joined, "||x");
    }
}
