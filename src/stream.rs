//! The lazy [`Stream`] pipeline and the cursors it is built from.
//!
//! A [`Stream`] is demand-driven: every stage pulls from its upstream only when
//! its own downstream asks for an element. That is what lets
//! [`limit()`](Stream::limit) stop an infinite [`iterate()`](Stream::iterate)
//! source, and what makes stopping early always safe.

mod int_range;
mod iterate;
mod iterator_ext;
#[allow(clippy::module_inception)]
mod stream;
mod truthy;

pub use int_range::*;
pub use iterate::*;
pub use iterator_ext::*;
pub use stream::*;
pub use truthy::*;
