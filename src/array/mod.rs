//! Functions over ordered, indexable collections.
//!
//! Every function here accepts any [`ArrayLike`] collection, including [`Sparse`] collections that
//! contain empty slots. Results are newly allocated and never alias the input, although elements
//! are cloned shallowly: cloning an [`Rc`](std::rc::Rc) element shares its allocation.
//!
//! Functions that return a slice of their input produce [`ArrayLike::Owned`], so slicing a Sparse
//! collection keeps its empty slots. Functions that select elements by value produce a [`Vec`] and
//! drop empty slots.
//!
//! Count and index arguments are [`f64`]s and are validated, rather than trusting the caller with a
//! `usize`. Failures are reported as [`ErrorResult`](crate::error::ErrorResult)s that record the
//! collection (as [`ArrayLike::Owned`]) and the other arguments in a tuple.

mod array_like;
mod filter;
mod query;
mod slice;
mod sparse;

pub use array_like::*;
pub use filter::*;
pub use query::*;
pub use slice::*;
pub use sparse::*;
