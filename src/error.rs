//! Error types for stream terminals and collectors.

use thiserror::Error;

/// Errors surfaced by terminal operations and collectors.
///
/// Every failure is reported synchronously by the operation that triggered it.
/// A failed terminal operation has not produced a usable partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The operation needs at least one element but the stream had none left.
    ///
    /// Returned by [`Stream::max()`](crate::Stream::max) and
    /// [`Stream::min()`](crate::Stream::min).
    #[error("sequence is empty")]
    EmptySequence,

    /// Two elements produced the same key in [`to_map()`](crate::collectors::to_map).
    ///
    /// `position` is the zero-based index, among the elements fed to the
    /// collector, of the first element whose key was already present.
    #[error("duplicate key at element {position}")]
    DuplicateKey {
        /// Index of the offending element.
        position: usize,
    },
}

/// Result type alias for fallible stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::StreamError;

    #[test]
    fn messages() {
        assert_eq!(StreamError::EmptySequence.to_string(), "sequence is empty");
        assert_eq!(
            StreamError::DuplicateKey { position: 3 }.to_string(),
            "duplicate key at element 3"
        );
    }
}
