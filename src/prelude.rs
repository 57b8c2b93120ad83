//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use streamfold::prelude::*;
//!
//! let mut evens = (0..6).filter(|n| n % 2 == 0);
//! let sum = evens.feed_into(streamfold::collectors::reducing_identity(0, |a, b| a + b));
//!
//! assert_eq!(sum, 6);
//! ```

pub use crate::collector::Collector;
pub use crate::stream::{IteratorExt, Stream, Truthy};
