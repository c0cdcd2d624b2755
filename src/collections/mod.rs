//! Containers with a single ordering discipline each: [`Queue`] (first-in first-out), [`Stack`]
//! (last-in first-out) and [`Deque`] (both ends).
//!
//! All three share one backing sequence and the same conventions:
//! - Adding never fails.
//! - Removing or peeking at an empty container returns [`None`], never an error.
//! - `to_array_shallow` clones elements with [`Clone`], while `to_array_deep` uses
//!   [`DeepClone`](crate::clone::DeepClone) and is the only operation that can return an
//!   [`ErrorResult`](crate::error::ErrorResult).
//! - [`Display`](std::fmt::Display) writes the elements in `to_array_shallow` order, separated by
//!   commas.
//!
//! None of the containers synchronize internally. They are [`Send`] and [`Sync`] exactly when their
//! elements are, so share them across threads behind a lock.

mod iter;
pub(crate) mod sequence;

#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "deque")]
#[doc(inline)]
pub use deque::Deque;
pub use iter::*;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::Queue;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;
